//! Matrix session engine for rowops.
//!
//! Owns a matrix, the matrix it started from, and the log of row operations
//! in between. The interactive shell drives a [`Session`] one call at a time.

pub mod errors;
mod record;
mod session;

pub use errors::SessionError;
pub use record::{Action, LogEntry, OperationKind, OperationRecord};
pub use session::Session;

pub use rowops_types::{
    GridStyle, Matrix, MatrixError, Rational, RationalError, RowIndex, RowOp, parse_row,
    render_grid,
};
