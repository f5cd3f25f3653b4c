use std::fmt;
use std::str::FromStr;

use log::info;
use queens_grid_core::{Board, Solution};
use queens_grid_solver::{normalize_colors, NormalizeParams, QueensSolver, SolveStats};
use serde::{Deserialize, Serialize};

use crate::PuzzleError;

/// Pixel rectangle cut out of the source image before sampling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("crop must be four non-negative integers `x,y,width,height` (got {0:?})")]
pub struct ParseCropError(String);

impl fmt::Display for CropRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

impl FromStr for CropRect {
    type Err = ParseCropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<u32> = s
            .split(',')
            .map(|p| p.trim().parse())
            .collect::<Result<_, _>>()
            .map_err(|_| ParseCropError(s.to_string()))?;
        let [x, y, width, height] = parts[..] else {
            return Err(ParseCropError(s.to_string()));
        };
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }
}

/// Knobs for the end-to-end pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleParams {
    #[serde(default)]
    pub normalize: NormalizeParams,
    #[serde(default)]
    pub crop: Option<CropRect>,
}

/// Everything a successful run produces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PuzzleOutcome {
    /// Board after color normalization.
    pub board: Board,
    pub solution: Solution,
    pub stats: SolveStats,
}

/// Normalize and solve an already sampled board.
pub fn solve_board(
    board: Board,
    grid_size: usize,
    params: &NormalizeParams,
) -> Result<PuzzleOutcome, PuzzleError> {
    let board = normalize_colors(board, grid_size, params)?;
    let mut solver = QueensSolver::new(&board);
    let solution = solver.solve()?;
    let stats = solver.stats();
    info!(
        "solved {grid_size}x{grid_size} board ({} nodes, {} backtracks)",
        stats.nodes, stats.backtracks
    );
    Ok(PuzzleOutcome {
        board,
        solution,
        stats,
    })
}
