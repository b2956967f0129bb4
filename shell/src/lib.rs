//! Interactive prompt for rowops.
//!
//! [`Shell`] drives a [`rowops_core::Session`] from any line-oriented input,
//! so the binary hands it stdin and tests hand it a byte buffer.

mod commands;
mod repl;

pub use commands::{Command, CommandSpec, command_help, command_specs};
pub use repl::{BANNER, Shell, ShellError, ShellOptions};
