use std::collections::HashMap;

use queens_grid_core::{Board, Rgb8};
use serde::{Deserialize, Serialize};

/// Cells sharing one normalized color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorGroup {
    pub representative: Rgb8,
    /// `(row, col)` of every member, row-major.
    pub cells: Vec<(usize, usize)>,
}

/// Partition the board by exact color, groups in first-seen order.
pub fn color_groups(board: &Board) -> Vec<ColorGroup> {
    let mut index: HashMap<Rgb8, usize> = HashMap::new();
    let mut groups: Vec<ColorGroup> = Vec::new();
    for cell in board.cells() {
        let id = *index.entry(cell.color).or_insert_with(|| {
            groups.push(ColorGroup {
                representative: cell.color,
                cells: Vec::new(),
            });
            groups.len() - 1
        });
        groups[id].cells.push((cell.row, cell.col));
    }
    groups
}
