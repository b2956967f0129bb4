//! Command table and parsing for the interactive prompt.

#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub key: &'static str,
    pub description: &'static str,
    /// Whether a successful run changes the matrix (and so reprints it).
    pub modifies: bool,
}

const COMMAND_SPECS: &[CommandSpec] = &[
    CommandSpec {
        key: "n",
        description: "create a new matrix",
        modifies: true,
    },
    CommandSpec {
        key: "s",
        description: "swap one row for another",
        modifies: true,
    },
    CommandSpec {
        key: "m",
        description: "multiply a row by some value",
        modifies: true,
    },
    CommandSpec {
        key: "a",
        description: "add a multiple of one row to another row",
        modifies: true,
    },
    CommandSpec {
        key: "u",
        description: "undo the latest change to the matrix",
        modifies: true,
    },
    CommandSpec {
        key: "r",
        description: "revert the matrix to its original state",
        modifies: true,
    },
    CommandSpec {
        key: "p",
        description: "show the current matrix",
        modifies: false,
    },
    CommandSpec {
        key: "l",
        description: "show a log of your changes to the current matrix",
        modifies: false,
    },
    CommandSpec {
        key: "?",
        description: "show this list of commands and their descriptions",
        modifies: false,
    },
    CommandSpec {
        key: "q",
        description: "quit the program",
        modifies: false,
    },
];

#[must_use]
pub fn command_specs() -> &'static [CommandSpec] {
    COMMAND_SPECS
}

/// One line per command: `  key - description`.
#[must_use]
pub fn command_help() -> String {
    COMMAND_SPECS
        .iter()
        .map(|spec| format!("  {} - {}", spec.key, spec.description))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    New,
    Swap,
    Multiply,
    Add,
    Undo,
    Revert,
    Print,
    Log,
    Help,
    Quit,
    Unknown(&'a str),
    Empty,
}

impl<'a> Command<'a> {
    /// Parse a line typed at the main prompt. Surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        match raw.trim() {
            "" => Command::Empty,
            "n" => Command::New,
            "s" => Command::Swap,
            "m" => Command::Multiply,
            "a" => Command::Add,
            "u" => Command::Undo,
            "r" => Command::Revert,
            "p" => Command::Print,
            "l" => Command::Log,
            "?" => Command::Help,
            "q" => Command::Quit,
            other => Command::Unknown(other),
        }
    }

    #[must_use]
    pub fn modifies(self) -> bool {
        matches!(
            self,
            Command::New
                | Command::Swap
                | Command::Multiply
                | Command::Add
                | Command::Undo
                | Command::Revert
        )
    }
}
