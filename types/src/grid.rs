//! Plain-text grid rendering for matrices.

use crate::matrix::Matrix;

/// Layout knobs for [`render_grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridStyle {
    /// Prefix each line with `R1 `, `R2 `, ...
    pub row_labels: bool,
    /// Lower bound on the shared column width.
    pub min_column_width: usize,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            row_labels: true,
            min_column_width: 0,
        }
    }
}

/// Right-align every value to one shared column width.
///
/// The width is one more than the longest rendered value, so adjacent
/// columns always stay separated. No trailing newline.
#[must_use]
pub fn render_grid(matrix: &Matrix, style: &GridStyle) -> String {
    let cells: Vec<Vec<String>> = matrix
        .rows()
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();
    let widest = cells
        .iter()
        .flatten()
        .map(|cell| cell.chars().count())
        .max()
        .unwrap_or(0);
    let width = (widest + 1).max(style.min_column_width);

    let lines: Vec<String> = cells
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let mut line = String::new();
            if style.row_labels {
                line.push_str(&format!("R{} ", idx + 1));
            }
            for cell in row {
                line.push_str(&format!("{cell:>width$}"));
            }
            line
        })
        .collect();
    lines.join("\n")
}
