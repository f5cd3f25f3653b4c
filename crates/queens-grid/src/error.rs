use queens_grid_core::{GridSizeError, SampleError};
use queens_grid_solver::{NormalizeError, SolveError};
use serde::{Deserialize, Serialize};

use crate::CropRect;

/// Errors produced by the end-to-end helpers.
///
/// Stage errors pass through unchanged; use [`PuzzleError::kind`] to decide
/// what to tell the user.
#[derive(thiserror::Error, Debug)]
pub enum PuzzleError {
    #[error(transparent)]
    InvalidGridSize(#[from] GridSizeError),

    #[cfg(feature = "image")]
    #[error(transparent)]
    ImageLoad(#[from] image::ImageError),

    #[error("crop rectangle {rect} does not fit inside a {width}x{height} image")]
    Crop {
        rect: CropRect,
        width: u32,
        height: u32,
    },

    #[error(transparent)]
    Sample(#[from] SampleError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Failure families surfaced to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleErrorKind {
    /// Grid size missing, non-numeric, < 1 or inconsistent with the board.
    InvalidGridSize,
    /// The image could not be read, decoded or cropped, or has no pixels.
    ImageLoad,
    /// Sampled colors could not be reduced to exactly N groups.
    ColorCountMismatch,
    /// Well-formed board without a valid placement.
    NoSolutionFound,
}

impl PuzzleError {
    pub fn kind(&self) -> PuzzleErrorKind {
        match self {
            Self::InvalidGridSize(_)
            | Self::Sample(SampleError::InvalidGridSize { .. })
            | Self::Normalize(NormalizeError::GridSizeMismatch { .. })
            | Self::Solve(SolveError::GridSizeMismatch { .. }) => PuzzleErrorKind::InvalidGridSize,
            #[cfg(feature = "image")]
            Self::ImageLoad(_) => PuzzleErrorKind::ImageLoad,
            Self::Crop { .. } | Self::Sample(_) => PuzzleErrorKind::ImageLoad,
            Self::Normalize(NormalizeError::ColorCountMismatch { .. }) => {
                PuzzleErrorKind::ColorCountMismatch
            }
            Self::Solve(SolveError::NoSolutionFound) => PuzzleErrorKind::NoSolutionFound,
        }
    }
}
