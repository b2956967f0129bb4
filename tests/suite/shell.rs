//! Transcripts of the interactive prompt.

use std::io::Cursor;

use rowops_core::{GridStyle, Matrix};
use rowops_shell::{Shell, ShellOptions, command_help, command_specs};

use crate::common::{run_shell, run_shell_with};

fn shell_for(input: &str) -> Shell<Cursor<Vec<u8>>, Vec<u8>> {
    Shell::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        ShellOptions::default(),
    )
}

#[test]
fn create_scale_and_print() {
    let output = run_shell("n\n2\n3\n1 2 3\n4 5 6\nm\n2\n1/2\np\nq\n");
    let expected = concat!(
        "Use the '?' command for help.\n",
        "> Create a matrix with n rows and k columns.\n",
        "How many rows? How many columns? ",
        "Enter your data one row at a time, separating the numbers with spaces.\n",
        "R1: R2: \n",
        "Result:\n",
        "R1  1 2 3\n",
        "R2  4 5 6\n",
        "\n",
        "> Multiply a row.\n",
        "Row: Multiplier: \n",
        "Result:\n",
        "R1    1   2   3\n",
        "R2    2 5/2   3\n",
        "\n",
        "> R1    1   2   3\n",
        "R2    2 5/2   3\n",
        "\n",
        "> ",
    );
    assert_eq!(output, expected);
}

#[test]
fn matrix_commands_need_a_matrix_first() {
    let output = run_shell("s\nu\n");
    let expected = concat!(
        "Use the '?' command for help.\n",
        "> ! there is no matrix yet; create one first\n",
        "\n",
        "> ! there is no matrix yet; create one first\n",
        "\n",
        "> \n",
    );
    assert_eq!(output, expected);
}

#[test]
fn bad_rows_are_prompted_again() {
    let mut shell = shell_for("n\n1\n2\n1 x\n1\n1 2\nq\n");
    shell.run().unwrap();
    assert_eq!(
        shell.session().show_current().unwrap(),
        &Matrix::from_integers(&[[1, 2]]).unwrap()
    );

    let output = String::from_utf8(shell.into_output()).unwrap();
    assert!(output.contains("R1: ! Could not parse your input as numbers.\n"));
    assert!(output.contains(
        "R1: ! You entered 1 numbers, but the system expects 2. Please try again.\n"
    ));
    assert!(output.contains("R1: \nResult:\nR1  1 2\n"));
}

#[test]
fn invalid_dimensions_are_rejected_before_rows() {
    let output = run_shell("n\n0\n3\nq\n");
    assert!(output.contains("! a matrix needs at least one row and one column (got 0 by 3)\n"));
    assert!(!output.contains("Enter your data"));

    let output = run_shell("n\ntwo\n3\nq\n");
    assert!(output.contains("! Oops! Please try again, inputting integers.\n"));
}

#[test]
fn zero_multiplier_is_reported_and_ignored() {
    let mut shell = shell_for("n\n1\n1\n5\nm\n1\n0\nq\n");
    shell.run().unwrap();
    assert_eq!(shell.session().log_len(), 1);
    let output = String::from_utf8(shell.into_output()).unwrap();
    assert!(output.contains(
        "Row: Multiplier: ! multiplying a row by zero cannot be undone; choose a nonzero multiplier\n"
    ));
}

#[test]
fn unparsable_input_is_reported() {
    let output = run_shell("n\n1\n1\n5\ns\nx\nm\n1\nhalf\nq\n");
    assert!(output.contains(
        "Row A: ! Your input was not understood. Try the row number by itself.\n"
    ));
    assert!(output.contains("Multiplier: ! could not parse \"half\" as a number\n"));
}

#[test]
fn out_of_range_row_is_reported() {
    let output = run_shell("n\n2\n1\n1\n2\na\n3\n1\n5\nq\n");
    assert!(output.contains(
        "Row A: Row B: ! row 5 does not exist (the matrix has rows 1 to 2)\n"
    ));
}

#[test]
fn undo_and_revert_through_the_prompt() {
    let mut shell = shell_for("n\n2\n2\n1 2\n3 4\ns\n1\n2\na\n-3\n2\n1\nu\nu\nu\nm\n1\n2\nr\nq\n");
    shell.run().unwrap();
    let session = shell.session();
    assert_eq!(session.show_current().unwrap(), session.original().unwrap());
    assert_eq!(session.log_len(), 1);

    let output = String::from_utf8(shell.into_output()).unwrap();
    assert_eq!(output.matches("! no change to undo\n").count(), 1);
}

#[test]
fn log_lists_each_change_with_its_matrix() {
    let output = run_shell("n\n2\n2\n1 2\n3 4\ns\n1\n2\nl\nq\n");
    assert!(output.contains(concat!(
        "> Create a new 2 by 2 matrix.\n",
        "R1  1 2\n",
        "R2  3 4\n",
        "\n",
        "Swap R1 with R2\n",
        "R1  3 4\n",
        "R2  1 2\n",
        "\n",
        "> ",
    )));
}

#[test]
fn unknown_commands_point_to_help() {
    let output = run_shell("swap\nq\n");
    assert!(output.contains("> That command is unrecognized. Try '?' for help.\n\n> "));
}

#[test]
fn help_lists_commands() {
    let output = run_shell("?\nq\n");
    assert!(output.contains(&format!("> {}\n\n> ", command_help())));
    for spec in command_specs() {
        assert!(output.contains(&format!("  {} - {}\n", spec.key, spec.description)));
    }
}

#[test]
fn options_control_prompt_and_layout() {
    let options = ShellOptions {
        prompt: "rowops> ".to_string(),
        show_result: false,
        style: GridStyle {
            row_labels: false,
            min_column_width: 3,
        },
        notices: Vec::new(),
    };
    let output = run_shell_with("n\n1\n2\n1 2\np\nq\n", options);
    assert!(!output.contains("Result:"));
    assert!(output.contains("rowops>   1  2\n"));
}

#[test]
fn end_of_input_mid_command_quits_cleanly() {
    let mut shell = shell_for("n\n2\n");
    shell.run().unwrap();
    assert!(!shell.session().is_active());
    let output = String::from_utf8(shell.into_output()).unwrap();
    assert!(output.ends_with("How many rows? How many columns? \n"));
}

#[test]
fn startup_notices_precede_the_banner() {
    let options = ShellOptions {
        notices: vec!["failed to parse config at /tmp/rowops.toml: bad value".to_string()],
        ..ShellOptions::default()
    };
    let output = run_shell_with("q\n", options);
    assert!(output.starts_with(concat!(
        "! failed to parse config at /tmp/rowops.toml: bad value\n",
        "Use the '?' command for help.\n",
    )));
}
