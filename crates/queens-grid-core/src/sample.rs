//! Grid sampler: one pixel per cell, taken at the cell center.

use log::debug;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Board, RgbImageView};

/// Errors produced while sampling an image into a board.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    #[error("grid size must be >= 1 (got {size})")]
    InvalidGridSize { size: usize },
    #[error("image has zero area (width={width}, height={height})")]
    EmptyImage { width: usize, height: usize },
    #[error("invalid RGB image buffer length (expected {expected} bytes, got {got})")]
    InvalidBuffer { expected: usize, got: usize },
}

/// Pixel coordinates sampled for cell `(row, col)`.
///
/// The sample point is the cell center `(col·cw + cw/2, row·ch + ch/2)`.
/// Pixel `i` covers `[i, i + 1)`, so the addressed pixel is the floor of
/// that point, clamped to the image.
pub fn sample_point(
    width: usize,
    height: usize,
    grid_size: usize,
    row: usize,
    col: usize,
) -> (usize, usize) {
    let cw = width as f64 / grid_size as f64;
    let ch = height as f64 / grid_size as f64;
    let x = (col as f64 * cw + cw / 2.0).floor() as usize;
    let y = (row as f64 * ch + ch / 2.0).floor() as usize;
    (
        x.min(width.saturating_sub(1)),
        y.min(height.saturating_sub(1)),
    )
}

/// Sample `image` into a `grid_size`×`grid_size` board.
///
/// No averaging over the cell area: each cell takes exactly one pixel.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(image), fields(width = image.width, height = image.height))
)]
pub fn sample_board(image: &RgbImageView<'_>, grid_size: usize) -> Result<Board, SampleError> {
    if grid_size < 1 {
        return Err(SampleError::InvalidGridSize { size: grid_size });
    }
    if image.is_empty() {
        return Err(SampleError::EmptyImage {
            width: image.width,
            height: image.height,
        });
    }
    let Some(expected) = image.expected_len() else {
        return Err(SampleError::EmptyImage {
            width: image.width,
            height: image.height,
        });
    };
    if image.data.len() != expected {
        return Err(SampleError::InvalidBuffer {
            expected,
            got: image.data.len(),
        });
    }

    // A grid this large can't be held in memory; reject it instead of
    // overflowing the cell count or aborting on allocation.
    let cell_count = grid_size
        .checked_mul(grid_size)
        .ok_or(SampleError::InvalidGridSize { size: grid_size })?;
    let mut colors = Vec::new();
    colors
        .try_reserve_exact(cell_count)
        .map_err(|_| SampleError::InvalidGridSize { size: grid_size })?;
    for row in 0..grid_size {
        for col in 0..grid_size {
            let (x, y) = sample_point(image.width, image.height, grid_size, row, col);
            let color = image.pixel(x, y).ok_or(SampleError::InvalidBuffer {
                expected,
                got: image.data.len(),
            })?;
            colors.push(color);
        }
    }

    debug!(
        "sampled {}x{} grid from {}x{} image",
        grid_size, grid_size, image.width, image.height
    );
    Board::new(grid_size, colors).map_err(|_| SampleError::InvalidGridSize { size: grid_size })
}
