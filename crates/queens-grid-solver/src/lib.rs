//! Color normalization and placement search for the colored queens puzzle.
//!
//! Two stages, both operating on a [`queens_grid_core::Board`]:
//! 1. [`normalize_colors`] merges near-duplicate sampled colors until exactly
//!    `grid_size` color groups remain (or fails with the counts it found).
//! 2. [`solve`] places one queen per row, column and color group with no two
//!    queens touching, by depth-first backtracking over rows.
//!
//! ```
//! use queens_grid_core::{Board, Rgb8};
//! use queens_grid_solver::{normalize, solve};
//!
//! let colors = (0..16).map(|i| Rgb8::new((i / 4) as u8 * 60, 0, 0)).collect();
//! let board = normalize(Board::new(4, colors).unwrap(), 4).unwrap();
//! let solution = solve(&board, 4).unwrap();
//! assert_eq!(solution.columns(), vec![1, 3, 0, 2]);
//! ```

mod groups;
mod normalize;
mod params;
mod solver;

pub use groups::{color_groups, ColorGroup};
pub use normalize::{normalize, normalize_colors, NormalizeError};
pub use params::{NormalizeParams, DEFAULT_COLOR_TOLERANCE};
pub use solver::{solve, QueensSolver, SolveError, SolveStats};
