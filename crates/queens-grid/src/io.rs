//! JSON configuration, board files and reports.

use std::{
    fs,
    path::{Path, PathBuf},
};

use queens_grid_core::{Board, BoardError, Placement, Rgb8};
use queens_grid_solver::{NormalizeParams, SolveStats, DEFAULT_COLOR_TOLERANCE};
use serde::{Deserialize, Serialize};

use crate::{CropRect, PuzzleError, PuzzleErrorKind, PuzzleOutcome, PuzzleParams};

#[derive(thiserror::Error, Debug)]
pub enum QueensIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Board(#[from] BoardError),
}

fn default_tolerance() -> u8 {
    DEFAULT_COLOR_TOLERANCE
}

fn default_cell_px() -> u32 {
    50
}

/// Configuration for one image solve, as read by `queens-grid config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveConfig {
    pub image_path: String,
    pub grid_size: usize,
    #[serde(default)]
    pub crop: Option<CropRect>,
    #[serde(default = "default_tolerance")]
    pub tolerance: u8,
    #[serde(default)]
    pub report_path: Option<String>,
    #[serde(default)]
    pub render_path: Option<String>,
    #[serde(default = "default_cell_px")]
    pub cell_px: u32,
}

impl SolveConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, QueensIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), QueensIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the output report path.
    pub fn report_path(&self) -> PathBuf {
        self.report_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("queens_report.json"))
    }

    /// Pipeline parameters described by this config.
    pub fn build_params(&self) -> PuzzleParams {
        PuzzleParams {
            normalize: NormalizeParams {
                tolerance: self.tolerance,
            },
            crop: self.crop,
        }
    }
}

/// A board stored as rows of `#rrggbb` colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardFile {
    pub rows: Vec<Vec<Rgb8>>,
}

impl BoardFile {
    pub fn from_board(board: &Board) -> Self {
        Self {
            rows: board.color_rows(),
        }
    }

    /// Validate the rows into a square board.
    pub fn to_board(&self) -> Result<Board, BoardError> {
        Board::from_rows(self.rows.clone())
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, QueensIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), QueensIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Result of one run, successful or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleReport {
    pub source: String,
    #[serde(default)]
    pub grid_size: Option<usize>,
    /// Normalized colors, row by row.
    #[serde(default)]
    pub colors: Option<Vec<Vec<Rgb8>>>,
    #[serde(default)]
    pub placements: Option<Vec<Placement>>,
    #[serde(default)]
    pub stats: Option<SolveStats>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_kind: Option<PuzzleErrorKind>,
}

impl PuzzleReport {
    /// Empty report for an input (image path, board file, ...).
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            grid_size: None,
            colors: None,
            placements: None,
            stats: None,
            error: None,
            error_kind: None,
        }
    }

    /// Populate report fields from a successful run.
    pub fn set_outcome(&mut self, outcome: &PuzzleOutcome) {
        self.grid_size = Some(outcome.board.size());
        self.colors = Some(outcome.board.color_rows());
        self.placements = Some(outcome.solution.placements.clone());
        self.stats = Some(outcome.stats);
        self.error = None;
        self.error_kind = None;
    }

    /// Record a pipeline error.
    pub fn set_error(&mut self, err: &PuzzleError) {
        self.error = Some(err.to_string());
        self.error_kind = Some(err.kind());
    }

    /// Record an input that could not be read (missing or malformed board
    /// file). No pipeline stage ran, so there is no error kind.
    pub fn set_input_error(&mut self, err: &QueensIoError) {
        self.error = Some(err.to_string());
        self.error_kind = None;
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, QueensIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), QueensIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
