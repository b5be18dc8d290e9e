//! Colour entities
//!
//! Target colours for the corner check and the tolerance applied to them.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default maximum per-channel difference for the corner check
pub const DEFAULT_THRESHOLD: u8 = 10;

/// Errors produced when parsing a `#RRGGBB` colour string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Expected 6 hex digits (#RRGGBB), found {found}")]
    InvalidLength { found: usize },

    #[error("Invalid hex digit in colour '{value}'")]
    InvalidHexDigit { value: String },
}

/// An 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    /// Pure black, the default corner colour
    pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the channels as an array
    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for RgbColor {
    type Err = ColorParseError;

    /// Parses `#RRGGBB` or `RRGGBB`, hex digits in either case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        let found = hex.chars().count();
        if found != 6 {
            return Err(ColorParseError::InvalidLength { found });
        }

        let invalid = || ColorParseError::InvalidHexDigit {
            value: trimmed.to_string(),
        };
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// The four corner pixels of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corners {
    /// Pixel at `(0, 0)`
    pub top_left: RgbColor,
    /// Pixel at `(0, height - 1)`
    pub bottom_left: RgbColor,
    /// Pixel at `(width - 1, 0)`
    pub top_right: RgbColor,
    /// Pixel at `(width - 1, height - 1)`
    pub bottom_right: RgbColor,
}

impl Corners {
    /// Builds corners where every pixel has the same colour
    pub fn uniform(color: RgbColor) -> Self {
        Self {
            top_left: color,
            bottom_left: color,
            top_right: color,
            bottom_right: color,
        }
    }

    pub fn as_array(&self) -> [RgbColor; 4] {
        [
            self.top_left,
            self.bottom_left,
            self.top_right,
            self.bottom_right,
        ]
    }
}

/// Target colour plus tolerance for the corner check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpec {
    target: RgbColor,
    threshold: u8,
}

impl Default for ColorSpec {
    fn default() -> Self {
        Self::new(RgbColor::BLACK, DEFAULT_THRESHOLD)
    }
}

impl ColorSpec {
    /// Creates a colour spec
    pub fn new(target: RgbColor, threshold: u8) -> Self {
        Self { target, threshold }
    }

    /// Creates a colour spec with the default threshold
    pub fn with_default_threshold(target: RgbColor) -> Self {
        Self::new(target, DEFAULT_THRESHOLD)
    }

    pub fn target(&self) -> RgbColor {
        self.target
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// True if every channel of `pixel` is within the threshold of the target
    pub fn is_close(&self, pixel: RgbColor) -> bool {
        pixel
            .channels()
            .iter()
            .zip(self.target.channels())
            .all(|(&p, t)| p.abs_diff(t) <= self.threshold)
    }

    /// True if all four corners are close to the target
    pub fn matches_corners(&self, corners: &Corners) -> bool {
        corners.as_array().iter().all(|&c| self.is_close(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trips_through_parse() {
        let color = RgbColor::new(0x1a, 0xff, 0x00);
        assert_eq!(color.to_string(), "#1aff00");
        assert_eq!("#1aff00".parse::<RgbColor>(), Ok(color));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let spec = ColorSpec::new(RgbColor::new(100, 100, 100), 10);
        assert!(spec.is_close(RgbColor::new(110, 90, 100)));
        assert!(!spec.is_close(RgbColor::new(111, 100, 100)));
        assert!(!spec.is_close(RgbColor::new(100, 100, 89)));
    }

    #[test]
    fn test_zero_threshold_requires_exact_match() {
        let spec = ColorSpec::new(RgbColor::new(5, 6, 7), 0);
        assert!(spec.is_close(RgbColor::new(5, 6, 7)));
        assert!(!spec.is_close(RgbColor::new(5, 6, 8)));
    }

    #[test]
    fn test_one_bad_corner_fails_the_check() {
        let spec = ColorSpec::default();
        let mut corners = Corners::uniform(RgbColor::BLACK);
        assert!(spec.matches_corners(&corners));

        corners.bottom_right = RgbColor::new(0, 0, 11);
        assert!(!spec.matches_corners(&corners));
    }
}
