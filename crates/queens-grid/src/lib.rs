//! High-level facade for the `queens-grid-*` workspace.
//!
//! This crate provides:
//! - re-exports of the core data model and the solver crate,
//! - (feature `image`) the composite entry point [`run_puzzle`] that takes a
//!   cropped screenshot and a user-typed grid size and returns the queens,
//!   plus cropping, decoding and rendering helpers built on `image`,
//! - JSON configuration and report types used by the `queens-grid` binary.
//!
//! ## Quickstart
//!
//! ```no_run
//! use queens_grid::run_puzzle;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = image::ImageReader::open("puzzle.png")?.decode()?.to_rgb8();
//! let solution = run_puzzle(&img, "8")?;
//! for p in &solution.placements {
//!     println!("queen at row {} col {}", p.row, p.col);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `queens_grid::core`: colors, boards, placements, the grid sampler, logging.
//! - `queens_grid::solver`: color normalization and the backtracking solver.
//! - `queens_grid::render` (feature `image`): draw a board and its queens.
//! - `queens_grid::io`: JSON config, board files and reports.

pub use queens_grid_core as core;
pub use queens_grid_solver as solver;

pub use queens_grid_core::{
    parse_grid_size, Board, Cell, Placement, Rgb8, RgbImageView, Solution, SolutionViolation,
};
pub use queens_grid_solver::{NormalizeParams, SolveStats};

mod error;
pub mod io;
mod pipeline;

#[cfg(feature = "image")]
mod image_input;
#[cfg(feature = "image")]
pub mod render;

pub use error::{PuzzleError, PuzzleErrorKind};
pub use pipeline::{solve_board, CropRect, ParseCropError, PuzzleOutcome, PuzzleParams};

#[cfg(feature = "image")]
pub use image_input::{
    crop_image, decode_rgb_image, load_rgb_image, rgb_image_from_slice, rgb_view, run_puzzle,
    solve_image,
};
