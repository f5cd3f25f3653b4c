//! 8-bit RGB colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An opaque RGB triple.
///
/// Equality is exact. Closeness is a separate relation, see
/// [`Rgb8::within_tolerance`]. Serialized as a `#rrggbb` string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Errors produced when parsing a `#rrggbb` color.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("color must have 6 hex digits (got {0:?})")]
    InvalidLength(String),
    #[error("invalid hex digit in color {0:?}")]
    InvalidDigit(String),
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel absolute differences `[dr, dg, db]`.
    #[inline]
    pub fn channel_deltas(self, other: Rgb8) -> [u8; 3] {
        [
            self.r.abs_diff(other.r),
            self.g.abs_diff(other.g),
            self.b.abs_diff(other.b),
        ]
    }

    /// True if every channel differs by at most `tolerance`.
    #[inline]
    pub fn within_tolerance(self, other: Rgb8, tolerance: u8) -> bool {
        self.channel_deltas(other).iter().all(|&d| d <= tolerance)
    }

    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb8 {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ParseColorError::InvalidLength(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ParseColorError::InvalidDigit(s.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb8> for String {
    fn from(value: Rgb8) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parse_accepts_optional_hash() {
        let a: Rgb8 = "#1a2B3c".parse().expect("parse");
        let b: Rgb8 = "1a2b3c".parse().expect("parse");
        assert_eq!(a, Rgb8::new(0x1a, 0x2b, 0x3c));
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "#1a2b3c");
    }

    #[test]
    fn hex_parse_rejects_malformed_input() {
        assert!(matches!(
            "#fff".parse::<Rgb8>(),
            Err(ParseColorError::InvalidLength(_))
        ));
        assert!(matches!(
            "#gg0000".parse::<Rgb8>(),
            Err(ParseColorError::InvalidDigit(_))
        ));
    }

    #[test]
    fn tolerance_is_inclusive_per_channel() {
        let base = Rgb8::new(100, 100, 100);
        assert!(base.within_tolerance(Rgb8::new(110, 90, 110), 10));
        assert!(!base.within_tolerance(Rgb8::new(110, 100, 111), 10));
        assert!(!base.within_tolerance(Rgb8::new(89, 100, 100), 10));
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb8::new(255, 0, 16)).expect("serialize");
        assert_eq!(json, "\"#ff0010\"");
        let back: Rgb8 = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Rgb8::new(255, 0, 16));
    }
}
