//! Color normalizer.
//!
//! Point sampling returns slightly different RGB values for what is one
//! color region on screen. The normalizer folds those variants together
//! until exactly `grid_size` colors remain:
//! - if the board already has `grid_size` distinct colors it is returned as is,
//! - otherwise cells are visited row-major against a growing list of
//!   representatives; the first representative within `tolerance` on every
//!   channel wins, and a color matching none becomes a new representative.
//!
//! The first acceptable match is taken, not the nearest one.

use log::{debug, warn};
use queens_grid_core::{Board, Rgb8};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::NormalizeParams;

/// Errors returned by the color normalizer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("found {found} color groups, expected {expected}")]
    ColorCountMismatch { found: usize, expected: usize },
    #[error("board is {board}x{board}, expected grid size {expected}")]
    GridSizeMismatch { board: usize, expected: usize },
}

/// Normalize with the default tolerance.
pub fn normalize(board: Board, grid_size: usize) -> Result<Board, NormalizeError> {
    normalize_colors(board, grid_size, &NormalizeParams::default())
}

/// Canonicalize every cell color to its group representative.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(board, params), fields(tolerance = params.tolerance))
)]
pub fn normalize_colors(
    mut board: Board,
    grid_size: usize,
    params: &NormalizeParams,
) -> Result<Board, NormalizeError> {
    if board.size() != grid_size {
        return Err(NormalizeError::GridSizeMismatch {
            board: board.size(),
            expected: grid_size,
        });
    }

    let distinct = board.distinct_colors().len();
    if distinct == grid_size {
        debug!("board already has {distinct} colors");
        return Ok(board);
    }
    warn!("sampled {distinct} distinct colors for grid size {grid_size}, merging within tolerance");

    let mut representatives: Vec<Rgb8> = Vec::with_capacity(grid_size);
    let mut rewrites = Vec::new();
    for cell in board.cells() {
        match representatives
            .iter()
            .find(|rep| cell.color.within_tolerance(**rep, params.tolerance))
        {
            Some(&rep) if rep != cell.color => rewrites.push((cell.row, cell.col, rep)),
            Some(_) => {}
            None => representatives.push(cell.color),
        }
    }

    if representatives.len() != grid_size {
        return Err(NormalizeError::ColorCountMismatch {
            found: representatives.len(),
            expected: grid_size,
        });
    }

    debug!(
        "merged {distinct} colors into {} groups ({} cells rewritten)",
        representatives.len(),
        rewrites.len()
    );
    for (row, col, rep) in rewrites {
        board.set_color(row, col, rep);
    }
    Ok(board)
}
