//! Queen placements and their validation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Board, Rgb8};

/// One chosen queen cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
}

impl Placement {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if `other` is one of the 8 king-move neighbors of `self`.
    #[inline]
    pub fn touches(self, other: Placement) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

/// One placement per row, ordered by row ascending.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub placements: Vec<Placement>,
}

/// First broken rule found by [`Solution::validate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SolutionViolation {
    #[error("expected {expected} placements, got {got}")]
    WrongCount { expected: usize, got: usize },
    #[error("placement {index} is at row {row}, expected row {index}")]
    RowOrder { index: usize, row: usize },
    #[error("placement ({row}, {col}) lies outside the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("column {col} holds more than one queen")]
    DuplicateColumn { col: usize },
    #[error("color {color} holds more than one queen")]
    DuplicateColor { color: Rgb8 },
    #[error("queens at ({}, {}) and ({}, {}) touch", .a.row, .a.col, .b.row, .b.col)]
    Adjacent { a: Placement, b: Placement },
}

impl Solution {
    pub fn new(placements: Vec<Placement>) -> Self {
        Self { placements }
    }

    /// Column chosen for each row.
    pub fn columns(&self) -> Vec<usize> {
        self.placements.iter().map(|p| p.col).collect()
    }

    /// Check the puzzle rules against `board`: one queen per row in row
    /// order, distinct columns, distinct colors and no two queens touching.
    pub fn validate(&self, board: &Board) -> Result<(), SolutionViolation> {
        let n = board.size();
        if self.placements.len() != n {
            return Err(SolutionViolation::WrongCount {
                expected: n,
                got: self.placements.len(),
            });
        }

        let mut cols = HashSet::with_capacity(n);
        let mut colors = HashSet::with_capacity(n);
        for (index, p) in self.placements.iter().enumerate() {
            if p.row != index {
                return Err(SolutionViolation::RowOrder { index, row: p.row });
            }
            let Some(cell) = board.cell(p.row, p.col) else {
                return Err(SolutionViolation::OutOfBounds {
                    row: p.row,
                    col: p.col,
                });
            };
            if !cols.insert(p.col) {
                return Err(SolutionViolation::DuplicateColumn { col: p.col });
            }
            if !colors.insert(cell.color) {
                return Err(SolutionViolation::DuplicateColor { color: cell.color });
            }
        }

        // Rows are consecutive, so only neighbors in the list can touch.
        for pair in self.placements.windows(2) {
            if pair[0].touches(pair[1]) {
                return Err(SolutionViolation::Adjacent {
                    a: pair[0],
                    b: pair[1],
                });
            }
        }
        Ok(())
    }
}
