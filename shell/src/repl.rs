//! The prompt loop.
//!
//! Reads one command per line, collects its parameters with follow-up
//! prompts, and hands them to the [`Session`]. Rejected input is reported
//! with a leading `! ` and never changes the session.

use std::io::{self, BufRead, Write};

use rowops_core::{GridStyle, Matrix, Rational, Session, SessionError, parse_row};
use thiserror::Error;

use crate::commands::{Command, command_help};

pub const BANNER: &str = "Use the '?' command for help.";

const ROW_NOT_UNDERSTOOD: &str = "! Your input was not understood. Try the row number by itself.";

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("terminal IO failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOptions {
    pub prompt: String,
    /// Print the matrix after every successful change.
    pub show_result: bool,
    pub style: GridStyle,
    /// Problems found during startup, printed as `! ` lines before the banner.
    pub notices: Vec<String>,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            show_result: true,
            style: GridStyle::default(),
            notices: Vec::new(),
        }
    }
}

/// Why a command stopped before completing.
enum Abort {
    /// Input was rejected; the message has already been printed.
    Rejected,
    /// Input ended mid-command.
    Eof,
    Io(io::Error),
}

impl From<io::Error> for Abort {
    fn from(err: io::Error) -> Self {
        Abort::Io(err)
    }
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    session: Session,
    options: ShellOptions,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, options: ShellOptions) -> Self {
        Self {
            input,
            output,
            session: Session::new(),
            options,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `q` or end of input.
    pub fn run(&mut self) -> Result<(), ShellError> {
        for notice in std::mem::take(&mut self.options.notices) {
            self.say(&format!("! {notice}"))?;
        }
        self.say(BANNER)?;
        let prompt = self.options.prompt.clone();

        loop {
            let Some(line) = self.read_answer(&prompt)? else {
                writeln!(self.output)?;
                break;
            };
            let command = Command::parse(&line);
            tracing::debug!(?command, "Command entered");

            let outcome = match command {
                Command::Empty => continue,
                Command::Quit => break,
                Command::Unknown(_) => {
                    self.say("That command is unrecognized. Try '?' for help.")?;
                    Ok(())
                }
                Command::Help => {
                    self.say(&command_help())?;
                    Ok(())
                }
                Command::New => self.new_matrix(),
                Command::Swap => self.swap(),
                Command::Multiply => self.multiply(),
                Command::Add => self.add_multiple(),
                Command::Undo => {
                    let result = self.session.undo().map(drop);
                    self.check(result)
                }
                Command::Revert => {
                    let result = self.session.revert().map(drop);
                    self.check(result)
                }
                Command::Print => self.print_current(),
                Command::Log => self.print_log(),
            };

            match outcome {
                Ok(()) => {
                    if command.modifies() && self.options.show_result {
                        self.print_result()?;
                    }
                }
                Err(Abort::Rejected) => {}
                Err(Abort::Eof) => {
                    writeln!(self.output)?;
                    break;
                }
                Err(Abort::Io(err)) => return Err(err.into()),
            }
            writeln!(self.output)?;
        }

        self.output.flush()?;
        Ok(())
    }

    fn new_matrix(&mut self) -> Result<(), Abort> {
        self.say("Create a matrix with n rows and k columns.")?;
        let rows = self.ask("How many rows? ")?;
        let cols = self.ask("How many columns? ")?;
        let (Ok(rows), Ok(cols)) = (rows.trim().parse::<usize>(), cols.trim().parse::<usize>())
        else {
            self.say("! Oops! Please try again, inputting integers.")?;
            return Err(Abort::Rejected);
        };
        self.check(Matrix::check_dimensions(rows, cols).map_err(SessionError::from))?;

        self.say("Enter your data one row at a time, separating the numbers with spaces.")?;
        let mut data = Vec::new();
        while data.len() < rows {
            let line = self.ask(&format!("R{}: ", data.len() + 1))?;
            match parse_row(&line) {
                Err(err) => {
                    tracing::debug!(error = %err, "Rejected matrix row");
                    self.say("! Could not parse your input as numbers.")?;
                }
                Ok(values) if values.len() != cols => {
                    self.say(&format!(
                        "! You entered {} numbers, but the system expects {cols}. Please try again.",
                        values.len()
                    ))?;
                }
                Ok(values) => data.push(values),
            }
        }

        let result = self.session.create_matrix(rows, cols, data).map(drop);
        self.check(result)
    }

    fn swap(&mut self) -> Result<(), Abort> {
        self.require_matrix()?;
        self.say("Swap two rows.")?;
        let a = self.ask_row("Row A: ")?;
        let b = self.ask_row("Row B: ")?;
        let result = self.session.swap(a, b).map(drop);
        self.check(result)
    }

    fn multiply(&mut self) -> Result<(), Abort> {
        self.require_matrix()?;
        self.say("Multiply a row.")?;
        let row = self.ask_row("Row: ")?;
        let multiplier = self.ask_multiplier()?;
        let result = self.session.scale(row, multiplier).map(drop);
        self.check(result)
    }

    fn add_multiple(&mut self) -> Result<(), Abort> {
        self.require_matrix()?;
        self.say("Add n times row A to row B.")?;
        let multiplier = self.ask_multiplier()?;
        let source = self.ask_row("Row A: ")?;
        let target = self.ask_row("Row B: ")?;
        let result = self
            .session
            .add_multiple(multiplier, source, target)
            .map(drop);
        self.check(result)
    }

    fn print_current(&mut self) -> Result<(), Abort> {
        let style = &self.options.style;
        let grid = self.session.show_current().map(|m| m.render(style));
        let grid = self.check(grid)?;
        self.say(&grid)?;
        Ok(())
    }

    fn print_log(&mut self) -> Result<(), Abort> {
        let style = &self.options.style;
        let text = self.session.show_log().map(|entries| {
            entries
                .iter()
                .map(|entry| format!("{}\n{}", entry.description, entry.grid.render(style)))
                .collect::<Vec<_>>()
                .join("\n\n")
        });
        let text = self.check(text)?;
        self.say(&text)?;
        Ok(())
    }

    fn print_result(&mut self) -> io::Result<()> {
        let Ok(current) = self.session.show_current() else {
            return Ok(());
        };
        let grid = current.render(&self.options.style);
        writeln!(self.output)?;
        writeln!(self.output, "Result:")?;
        writeln!(self.output, "{grid}")
    }

    fn require_matrix(&mut self) -> Result<(), Abort> {
        if self.session.is_active() {
            Ok(())
        } else {
            self.check(Err(SessionError::NoMatrix))
        }
    }

    /// Report a session failure and turn it into [`Abort::Rejected`].
    fn check<T>(&mut self, result: Result<T, SessionError>) -> Result<T, Abort> {
        match result {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::debug!(kind = err.kind(), error = %err, "Command rejected");
                self.say(&format!("! {err}"))?;
                Err(Abort::Rejected)
            }
        }
    }

    fn ask_row(&mut self, label: &str) -> Result<usize, Abort> {
        let answer = self.ask(label)?;
        if let Ok(row) = answer.trim().parse() {
            return Ok(row);
        }
        self.say(ROW_NOT_UNDERSTOOD)?;
        Err(Abort::Rejected)
    }

    fn ask_multiplier(&mut self) -> Result<Rational, Abort> {
        let answer = self.ask("Multiplier: ")?;
        let parsed = Rational::parse(&answer).map_err(SessionError::from);
        self.check(parsed)
    }

    fn ask(&mut self, label: &str) -> Result<String, Abort> {
        self.read_answer(label)?.ok_or(Abort::Eof)
    }

    /// Print `label` and read one line; `None` at end of input.
    fn read_answer(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }
}
