//! Core value types for rowops.
//!
//! Exact rationals, rectangular matrices, and the elementary row operations.
//! No IO and no global state; everything here is plain data.

mod grid;
mod matrix;
mod rational;
mod row_op;

pub use grid::{GridStyle, render_grid};
pub use matrix::{Matrix, MatrixError, RowIndex};
pub use rational::{Rational, RationalError, parse_row};
pub use row_op::RowOp;
