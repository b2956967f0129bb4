//! Rectangular matrices of [`Rational`] entries.

use std::fmt;

use thiserror::Error;

use crate::grid::{GridStyle, render_grid};
use crate::rational::{Rational, RationalError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("a matrix needs at least one row and one column (got {rows} by {cols})")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("row {row} has {found} values, but the matrix expects {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("expected {expected} rows, found {found}")]
    RowCountMismatch { expected: usize, found: usize },
    #[error("row {index} does not exist (the matrix has rows 1 to {rows})")]
    RowIndexOutOfRange { index: usize, rows: usize },
    #[error(transparent)]
    Arithmetic(#[from] RationalError),
}

/// A 1-based row index that was checked against a matrix's row count.
///
/// Only [`Matrix::row_index`] hands these out, so holding one means the row
/// existed in a matrix of that height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowIndex(usize);

impl RowIndex {
    /// The 1-based number shown to users.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    #[must_use]
    pub(crate) const fn offset(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for RowIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// A non-empty rectangular matrix.
///
/// Every row has the same length; no operation on this type can change the
/// shape after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: Vec<Vec<Rational>>,
    cols: usize,
}

impl Matrix {
    /// Build a `rows` by `cols` matrix, checking `data` against the declared shape.
    pub fn new(rows: usize, cols: usize, data: Vec<Vec<Rational>>) -> Result<Self, MatrixError> {
        Self::check_dimensions(rows, cols)?;
        if data.len() != rows {
            return Err(MatrixError::RowCountMismatch {
                expected: rows,
                found: data.len(),
            });
        }
        if let Some((idx, row)) = data.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(MatrixError::ShapeMismatch {
                row: idx + 1,
                expected: cols,
                found: row.len(),
            });
        }
        Ok(Self { rows: data, cols })
    }

    /// Both dimensions must be at least 1.
    pub fn check_dimensions(rows: usize, cols: usize) -> Result<(), MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimensions { rows, cols });
        }
        Ok(())
    }

    /// Build a matrix whose shape is taken from the data itself.
    pub fn from_rows(data: Vec<Vec<Rational>>) -> Result<Self, MatrixError> {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        Self::new(rows, cols, data)
    }

    /// Convenience for literals in tests and fixtures.
    pub fn from_integers<const C: usize>(data: &[[i64; C]]) -> Result<Self, MatrixError> {
        Self::from_rows(
            data.iter()
                .map(|row| row.iter().copied().map(Rational::from_integer).collect())
                .collect(),
        )
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn col_count(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Rational>] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, index: RowIndex) -> &[Rational] {
        &self.rows[index.offset()]
    }

    /// Validate a 1-based row number.
    pub fn row_index(&self, index: usize) -> Result<RowIndex, MatrixError> {
        if (1..=self.row_count()).contains(&index) {
            Ok(RowIndex(index))
        } else {
            Err(MatrixError::RowIndexOutOfRange {
                index,
                rows: self.row_count(),
            })
        }
    }

    pub(crate) fn swap_rows(&mut self, a: RowIndex, b: RowIndex) {
        self.rows.swap(a.offset(), b.offset());
    }

    /// `row * factor`, without touching the matrix.
    pub(crate) fn scaled_row(
        &self,
        row: RowIndex,
        factor: Rational,
    ) -> Result<Vec<Rational>, RationalError> {
        self.row(row).iter().map(|v| v.multiply(factor)).collect()
    }

    /// `target + factor * source`, without touching the matrix.
    pub(crate) fn combined_row(
        &self,
        factor: Rational,
        source: RowIndex,
        target: RowIndex,
    ) -> Result<Vec<Rational>, RationalError> {
        self.row(source)
            .iter()
            .zip(self.row(target))
            .map(|(s, t)| s.multiply(factor)?.add(*t))
            .collect()
    }

    pub(crate) fn replace_row(&mut self, row: RowIndex, values: Vec<Rational>) {
        debug_assert_eq!(values.len(), self.cols);
        self.rows[row.offset()] = values;
    }

    /// Render with an explicit style; `Display` uses [`GridStyle::default`].
    #[must_use]
    pub fn render(&self, style: &GridStyle) -> String {
        render_grid(self, style)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&GridStyle::default()))
    }
}
