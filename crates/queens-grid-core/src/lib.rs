//! Core types and utilities for the colored queens puzzle.
//!
//! This crate is intentionally small. It owns the data model shared by the
//! rest of the workspace (colors, boards, placements, solutions), a borrowed
//! RGB image view and the grid sampler that turns a cropped picture into a
//! [`Board`]. It does *not* depend on any concrete image decoder.
//!
//! ```
//! use queens_grid_core::{sample_board, RgbImageView};
//!
//! // 2x2 picture, one pixel per cell.
//! let data = [255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
//! let view = RgbImageView { width: 2, height: 2, data: &data };
//! let board = sample_board(&view, 2).unwrap();
//! assert_eq!(board.color(1, 0).to_string(), "#0000ff");
//! ```

mod board;
mod color;
mod image;
mod logger;
mod sample;
mod solution;

pub use board::{parse_grid_size, Board, BoardError, Cell, GridSizeError};
pub use color::{ParseColorError, Rgb8};
pub use image::RgbImageView;
pub use sample::{sample_board, sample_point, SampleError};
pub use solution::{Placement, Solution, SolutionViolation};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
