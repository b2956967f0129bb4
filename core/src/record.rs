//! Operation records and the session's change log.

use std::fmt;

use rowops_types::{Matrix, RowOp};

/// Which kind of action a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Create,
    Swap,
    Scale,
    AddMultiple,
}

/// An action the user performed on the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Create { rows: usize, cols: usize },
    Row(RowOp),
}

impl Action {
    #[must_use]
    pub fn kind(&self) -> OperationKind {
        match self {
            Action::Create { .. } => OperationKind::Create,
            Action::Row(RowOp::Swap { .. }) => OperationKind::Swap,
            Action::Row(RowOp::Scale { .. }) => OperationKind::Scale,
            Action::Row(RowOp::AddMultiple { .. }) => OperationKind::AddMultiple,
        }
    }

    #[must_use]
    pub fn row_op(&self) -> Option<&RowOp> {
        match self {
            Action::Create { .. } => None,
            Action::Row(op) => Some(op),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Create { rows, cols } => write!(f, "Create a new {rows} by {cols} matrix."),
            Action::Row(op) => write!(f, "{op}"),
        }
    }
}

/// One accepted action plus the matrix it produced. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRecord {
    action: Action,
    snapshot: Matrix,
}

impl OperationRecord {
    pub(crate) fn new(action: Action, snapshot: Matrix) -> Self {
        Self { action, snapshot }
    }

    #[must_use]
    pub fn action(&self) -> &Action {
        &self.action
    }

    #[must_use]
    pub fn kind(&self) -> OperationKind {
        self.action.kind()
    }

    #[must_use]
    pub fn description(&self) -> String {
        self.action.to_string()
    }

    /// The matrix right after this action.
    #[must_use]
    pub fn snapshot(&self) -> &Matrix {
        &self.snapshot
    }
}

/// A rendered line of the change log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry<'a> {
    pub kind: OperationKind,
    pub description: String,
    pub grid: &'a Matrix,
}

/// Chronological record list that always starts with the creation record.
///
/// Keeping `created` outside the step list makes an empty log, or one whose
/// first entry is not a creation, unrepresentable.
#[derive(Debug, Clone)]
pub(crate) struct History {
    created: OperationRecord,
    steps: Vec<OperationRecord>,
}

impl History {
    pub(crate) fn new(created: OperationRecord) -> Self {
        Self {
            created,
            steps: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.steps.len() + 1
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &OperationRecord> {
        std::iter::once(&self.created).chain(self.steps.iter())
    }

    pub(crate) fn steps(&self) -> &[OperationRecord] {
        &self.steps
    }

    pub(crate) fn push(&mut self, record: OperationRecord) {
        self.steps.push(record);
    }

    /// Remove the newest step. The creation record is never popped.
    pub(crate) fn pop(&mut self) -> Option<OperationRecord> {
        self.steps.pop()
    }

    /// Snapshot of the newest record.
    pub(crate) fn latest(&self) -> &Matrix {
        self.steps
            .last()
            .map_or(&self.created.snapshot, OperationRecord::snapshot)
    }

    pub(crate) fn clear_steps(&mut self) {
        self.steps.clear();
    }
}
