//! The three elementary row operations.

use std::fmt;

use crate::matrix::{Matrix, MatrixError, RowIndex};
use crate::rational::Rational;

/// An elementary row operation with its parameters already validated.
///
/// Scale multipliers are never zero; the session rejects them before a
/// `RowOp` is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowOp {
    /// Exchange rows `a` and `b`.
    Swap { a: RowIndex, b: RowIndex },
    /// Multiply every entry of `row` by `multiplier`.
    Scale { row: RowIndex, multiplier: Rational },
    /// `target += multiplier * source`, column by column.
    AddMultiple {
        multiplier: Rational,
        source: RowIndex,
        target: RowIndex,
    },
}

impl RowOp {
    /// Apply to `matrix` in place.
    ///
    /// The replacement row is computed before anything is written, so an
    /// arithmetic overflow leaves the matrix untouched.
    pub fn apply(&self, matrix: &mut Matrix) -> Result<(), MatrixError> {
        match *self {
            RowOp::Swap { a, b } => matrix.swap_rows(a, b),
            RowOp::Scale { row, multiplier } => {
                let values = matrix.scaled_row(row, multiplier)?;
                matrix.replace_row(row, values);
            }
            RowOp::AddMultiple {
                multiplier,
                source,
                target,
            } => {
                let values = matrix.combined_row(multiplier, source, target)?;
                matrix.replace_row(target, values);
            }
        }
        Ok(())
    }

    /// The operation that exactly undoes this one, if there is one.
    ///
    /// Adding `m` times a row to itself scales it by `1 + m`; with `m = -1`
    /// that zeroes the row and nothing can bring it back.
    #[must_use]
    pub fn inverse(&self) -> Option<RowOp> {
        match *self {
            RowOp::Swap { .. } => Some(*self),
            RowOp::Scale { row, multiplier } => Some(RowOp::Scale {
                row,
                multiplier: multiplier.reciprocal().ok()?,
            }),
            RowOp::AddMultiple {
                multiplier,
                source,
                target,
            } if source == target => {
                let factor = Rational::ONE.add(multiplier).ok()?;
                Some(RowOp::Scale {
                    row: target,
                    multiplier: factor.reciprocal().ok()?,
                })
            }
            RowOp::AddMultiple {
                multiplier,
                source,
                target,
            } => Some(RowOp::AddMultiple {
                multiplier: multiplier.negate().ok()?,
                source,
                target,
            }),
        }
    }
}

impl fmt::Display for RowOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowOp::Swap { a, b } => write!(f, "Swap {a} with {b}"),
            RowOp::Scale { row, multiplier } => write!(f, "Multiply {row} by {multiplier}"),
            RowOp::AddMultiple {
                multiplier,
                source,
                target,
            } => write!(f, "Add {multiplier} times {source} to {target}"),
        }
    }
}
