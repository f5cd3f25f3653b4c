use serde::{Deserialize, Serialize};

/// Largest per-channel difference at which two sampled colors are merged.
pub const DEFAULT_COLOR_TOLERANCE: u8 = 10;

/// Configuration for the color normalizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeParams {
    /// Two colors match when each of R, G and B differs by at most this much.
    #[serde(default = "default_tolerance")]
    pub tolerance: u8,
}

fn default_tolerance() -> u8 {
    DEFAULT_COLOR_TOLERANCE
}

impl Default for NormalizeParams {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_COLOR_TOLERANCE,
        }
    }
}
