//! The matrix session state machine.
//!
//! # States
//!
//! ```text
//! Empty --create_matrix--> Active --create_matrix--> Active (history discarded)
//! ```
//!
//! Every call other than `create_matrix` fails with [`SessionError::NoMatrix`]
//! while the session is empty. Mutating calls validate and compute first and
//! commit last, so a failure never leaves partial changes behind.
//!
//! A `Session` is an owned value with `&mut self` mutators. Independent
//! sessions never share state.

use rowops_types::{Matrix, Rational, RowIndex, RowOp, parse_row};

use crate::errors::SessionError;
use crate::record::{Action, History, LogEntry, OperationRecord};

#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
}

#[derive(Debug, Default)]
enum SessionState {
    #[default]
    Empty,
    Active(ActiveSession),
}

#[derive(Debug)]
struct ActiveSession {
    /// The matrix as created; never mutated afterwards.
    original: Matrix,
    current: Matrix,
    history: History,
}

impl ActiveSession {
    fn new(matrix: Matrix) -> Self {
        let created = OperationRecord::new(
            Action::Create {
                rows: matrix.row_count(),
                cols: matrix.col_count(),
            },
            matrix.clone(),
        );
        Self {
            original: matrix.clone(),
            current: matrix,
            history: History::new(created),
        }
    }

    fn row(&self, index: usize) -> Result<RowIndex, SessionError> {
        Ok(self.current.row_index(index)?)
    }

    fn commit(&mut self, op: RowOp) -> Result<&Matrix, SessionError> {
        let mut next = self.current.clone();
        op.apply(&mut next)?;
        tracing::info!(kind = ?Action::Row(op).kind(), description = %op, "Applied row operation");
        self.history
            .push(OperationRecord::new(Action::Row(op), next.clone()));
        self.current = next;
        Ok(&self.current)
    }
}

impl Session {
    /// An empty session with no matrix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active(_))
    }

    fn active(&self) -> Result<&ActiveSession, SessionError> {
        match &self.state {
            SessionState::Active(active) => Ok(active),
            SessionState::Empty => Err(SessionError::NoMatrix),
        }
    }

    fn active_mut(&mut self) -> Result<&mut ActiveSession, SessionError> {
        match &mut self.state {
            SessionState::Active(active) => Ok(active),
            SessionState::Empty => Err(SessionError::NoMatrix),
        }
    }

    /// Start over with a fresh `rows` by `cols` matrix.
    ///
    /// Replaces any previous matrix and its history. On failure the previous
    /// session (if any) is kept.
    pub fn create_matrix(
        &mut self,
        rows: usize,
        cols: usize,
        data: Vec<Vec<Rational>>,
    ) -> Result<&Matrix, SessionError> {
        let matrix = Matrix::new(rows, cols, data).inspect_err(|err| {
            tracing::debug!(rows, cols, error = %err, "Rejected matrix creation");
        })?;
        tracing::info!(rows, cols, "Created matrix");
        self.state = SessionState::Active(ActiveSession::new(matrix));
        self.show_current()
    }

    /// Like [`Session::create_matrix`], parsing one whitespace-separated row per line.
    pub fn create_matrix_from_text<S: AsRef<str>>(
        &mut self,
        rows: usize,
        cols: usize,
        lines: &[S],
    ) -> Result<&Matrix, SessionError> {
        let data = lines
            .iter()
            .map(|line| parse_row(line.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        self.create_matrix(rows, cols, data)
    }

    /// Exchange rows `a` and `b` (1-based). `swap(a, a)` is accepted and logged.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<&Matrix, SessionError> {
        let active = self.active_mut()?;
        let op = RowOp::Swap {
            a: active.row(a).inspect_err(log_rejection)?,
            b: active.row(b).inspect_err(log_rejection)?,
        };
        active.commit(op).inspect_err(log_rejection)
    }

    /// Multiply `row` (1-based) by a nonzero `multiplier`.
    pub fn scale(&mut self, row: usize, multiplier: Rational) -> Result<&Matrix, SessionError> {
        let active = self.active_mut()?;
        let row = active.row(row).inspect_err(log_rejection)?;
        if multiplier.is_zero() {
            log_rejection(&SessionError::ZeroMultiplier);
            return Err(SessionError::ZeroMultiplier);
        }
        active
            .commit(RowOp::Scale { row, multiplier })
            .inspect_err(log_rejection)
    }

    /// Add `multiplier` times row `source` to row `target` (both 1-based).
    ///
    /// `source == target` is allowed and scales the row by `1 + multiplier`.
    pub fn add_multiple(
        &mut self,
        multiplier: Rational,
        source: usize,
        target: usize,
    ) -> Result<&Matrix, SessionError> {
        let active = self.active_mut()?;
        let op = RowOp::AddMultiple {
            multiplier,
            source: active.row(source).inspect_err(log_rejection)?,
            target: active.row(target).inspect_err(log_rejection)?,
        };
        if source == target {
            tracing::debug!(row = source, %multiplier, "Adding a multiple of a row to itself");
        }
        active.commit(op).inspect_err(log_rejection)
    }

    /// Drop the newest operation and restore the matrix it was applied to.
    ///
    /// The creation record itself cannot be undone.
    pub fn undo(&mut self) -> Result<&Matrix, SessionError> {
        let active = self.active_mut()?;
        let Some(undone) = active.history.pop() else {
            return Err(SessionError::NothingToUndo);
        };
        active.current = active.history.latest().clone();
        tracing::debug!(description = %undone.description(), "Undid operation");
        Ok(&active.current)
    }

    /// Restore the original matrix and discard every step since creation.
    pub fn revert(&mut self) -> Result<&Matrix, SessionError> {
        let active = self.active_mut()?;
        active.current = active.original.clone();
        active.history.clear_steps();
        tracing::info!("Reverted to original matrix");
        Ok(&active.current)
    }

    pub fn show_current(&self) -> Result<&Matrix, SessionError> {
        Ok(&self.active()?.current)
    }

    pub fn original(&self) -> Result<&Matrix, SessionError> {
        Ok(&self.active()?.original)
    }

    /// Every record, oldest first, with the matrix it produced.
    pub fn show_log(&self) -> Result<Vec<LogEntry<'_>>, SessionError> {
        Ok(self
            .active()?
            .history
            .iter()
            .map(|record| LogEntry {
                kind: record.kind(),
                description: record.description(),
                grid: record.snapshot(),
            })
            .collect())
    }

    /// Number of records in the log, including the creation record.
    /// Zero while the session is empty.
    #[must_use]
    pub fn log_len(&self) -> usize {
        self.active().map_or(0, |active| active.history.len())
    }

    pub fn records(&self) -> Result<Vec<&OperationRecord>, SessionError> {
        Ok(self.active()?.history.iter().collect())
    }

    /// Recompute the current matrix by replaying every logged step onto the original.
    pub fn replay(&self) -> Result<Matrix, SessionError> {
        let active = self.active()?;
        let mut matrix = active.original.clone();
        for record in active.history.steps() {
            if let Some(op) = record.action().row_op() {
                op.apply(&mut matrix)?;
            }
        }
        Ok(matrix)
    }
}

fn log_rejection(err: &SessionError) {
    tracing::debug!(kind = err.kind(), error = %err, "Rejected row operation");
}
