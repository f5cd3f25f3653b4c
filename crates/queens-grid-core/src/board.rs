//! Logical N×N color grid.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::Rgb8;

/// One sampled grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub color: Rgb8,
}

/// Board construction errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("grid size must be >= 1 (got {size})")]
    InvalidGridSize { size: usize },
    #[error("board needs {expected} cells, got {got}")]
    CellCountMismatch { expected: usize, got: usize },
}

/// Grid size parse errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridSizeError {
    #[error("grid size {input:?} is not a number")]
    NotANumber { input: String },
    #[error("grid size must be >= 1 (got {size})")]
    TooSmall { size: usize },
}

/// Parse a user-supplied grid size.
///
/// Surrounding whitespace is ignored; anything other than a positive
/// integer is rejected.
pub fn parse_grid_size(input: &str) -> Result<usize, GridSizeError> {
    let size: usize = input
        .trim()
        .parse()
        .map_err(|_| GridSizeError::NotANumber {
            input: input.to_string(),
        })?;
    if size < 1 {
        return Err(GridSizeError::TooSmall { size });
    }
    Ok(size)
}

/// Row-major N×N grid of cells.
///
/// Invariant: `cells.len() == size * size` and the cell at index
/// `r * size + c` has `(row, col) == (r, c)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Build a board from `size * size` colors in row-major order.
    pub fn new(size: usize, colors: Vec<Rgb8>) -> Result<Self, BoardError> {
        if size < 1 {
            return Err(BoardError::InvalidGridSize { size });
        }
        let expected = size
            .checked_mul(size)
            .ok_or(BoardError::InvalidGridSize { size })?;
        if colors.len() != expected {
            return Err(BoardError::CellCountMismatch {
                expected,
                got: colors.len(),
            });
        }
        let cells = colors
            .into_iter()
            .enumerate()
            .map(|(idx, color)| Cell {
                row: idx / size,
                col: idx % size,
                color,
            })
            .collect();
        Ok(Self { size, cells })
    }

    /// Build a board from explicit rows. Every row must have `rows.len()` entries.
    pub fn from_rows(rows: Vec<Vec<Rgb8>>) -> Result<Self, BoardError> {
        let size = rows.len();
        let mut colors = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(BoardError::CellCountMismatch {
                    expected: size,
                    got: row.len(),
                });
            }
            colors.extend(row);
        }
        Self::new(size, colors)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at `(row, col)`, or `None` when out of range.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col)
    }

    /// Color at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `(row, col)` is outside the board.
    #[inline]
    pub fn color(&self, row: usize, col: usize) -> Rgb8 {
        assert!(row < self.size && col < self.size, "cell out of range");
        self.cells[row * self.size + col].color
    }

    /// Overwrite the color of `(row, col)`. Out-of-range writes are ignored.
    pub fn set_color(&mut self, row: usize, col: usize, color: Rgb8) {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col].color = color;
        }
    }

    /// Distinct exact colors in first-seen (row-major) order.
    pub fn distinct_colors(&self) -> Vec<Rgb8> {
        let mut seen = HashSet::new();
        self.cells
            .iter()
            .map(|c| c.color)
            .filter(|&color| seen.insert(color))
            .collect()
    }

    /// Rows of colors, top to bottom.
    pub fn color_rows(&self) -> Vec<Vec<Rgb8>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| c.color).collect())
            .collect()
    }
}
