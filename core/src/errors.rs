//! Session failures.
//!
//! Every variant is recoverable: the session is left exactly as it was
//! before the failing call, and the caller decides how to report it.

use rowops_types::{MatrixError, RationalError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("there is no matrix yet; create one first")]
    NoMatrix,
    #[error("no change to undo")]
    NothingToUndo,
    #[error("multiplying a row by zero cannot be undone; choose a nonzero multiplier")]
    ZeroMultiplier,
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    #[error(transparent)]
    Rational(#[from] RationalError),
}

impl SessionError {
    /// Short machine-friendly tag, used in log events.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            SessionError::NoMatrix => "no_matrix",
            SessionError::NothingToUndo => "nothing_to_undo",
            SessionError::ZeroMultiplier => "zero_multiplier",
            SessionError::Matrix(MatrixError::InvalidDimensions { .. }) => "invalid_dimensions",
            SessionError::Matrix(
                MatrixError::ShapeMismatch { .. } | MatrixError::RowCountMismatch { .. },
            ) => "shape_mismatch",
            SessionError::Matrix(MatrixError::RowIndexOutOfRange { .. }) => "row_out_of_range",
            SessionError::Matrix(MatrixError::Arithmetic(err)) | SessionError::Rational(err) => {
                match err {
                    RationalError::InvalidFormat(_) => "invalid_format",
                    RationalError::DivisionByZero => "division_by_zero",
                    RationalError::Overflow => "overflow",
                }
            }
        }
    }
}
