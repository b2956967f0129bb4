//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::io::Cursor;

use rowops_core::{Rational, Session};
use rowops_shell::{Shell, ShellOptions};

pub fn r(numer: i64, denom: i64) -> Rational {
    Rational::new(numer, denom).expect("valid fixture rational")
}

pub fn int(value: i64) -> Rational {
    Rational::from_integer(value)
}

/// A session holding `[[1, 2, 3], [4, 5, 6]]`.
pub fn session_2x3() -> Session {
    let mut session = Session::new();
    session
        .create_matrix_from_text(2, 3, &["1 2 3", "4 5 6"])
        .expect("valid fixture matrix");
    session
}

/// The worked example: scale R2 by 1/2, add -1 times R1 to R2, swap R1 and R2.
pub fn worked_example() -> Session {
    let mut session = session_2x3();
    session.scale(2, r(1, 2)).expect("scale");
    session.add_multiple(int(-1), 1, 2).expect("add multiple");
    session.swap(1, 2).expect("swap");
    session
}

/// Feed `input` to a fresh shell and return everything it printed.
pub fn run_shell(input: &str) -> String {
    run_shell_with(input, ShellOptions::default())
}

pub fn run_shell_with(input: &str, options: ShellOptions) -> String {
    let mut shell = Shell::new(Cursor::new(input.as_bytes()), Vec::new(), options);
    shell.run().expect("shell IO");
    String::from_utf8(shell.into_output()).expect("utf-8 output")
}
