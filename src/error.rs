//! Error types for the fallible operations layered on top of the conversions.

use thiserror::Error;

use crate::palette::PointId;

/// Errors that can occur when manipulating a [`Palette`](crate::Palette).
#[derive(Error, Debug, PartialEq)]
pub enum PaletteError {
    /// No point with this id exists.
    #[error("Point not found: {0}")]
    UnknownPoint(PointId),

    /// Interpolated points are regenerated automatically and can not be
    /// edited, duplicated or removed.
    #[error("Point {0} was produced by interpolation and is read-only")]
    ReadOnly(PointId),

    /// The last base point of a palette can not be removed.
    #[error("Can not remove the last point")]
    LastPoint,

    /// Interpolation needs more base points than the palette has.
    #[error("Interpolation needs at least {required} points, found {found}")]
    NotEnoughPoints {
        /// Minimum number of base points.
        required: usize,
        /// Number of base points in the palette.
        found: usize,
    },

    /// An interpolation needs at least 2 steps, one for each end.
    #[error("Invalid number of interpolation steps: {0}")]
    InvalidSteps(usize),

    /// A hex color could not be parsed.
    #[error(transparent)]
    Hex(#[from] ParseHexError),
}

/// Errors that can occur when parsing a `#rrggbb` color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseHexError {
    /// The string is not 3 or 6 hex digits long.
    #[error("Expected 3 or 6 hex digits, found {0}")]
    InvalidLength(usize),

    /// The string contains a character that is not a hex digit.
    #[error("Invalid hex digit: {0:?}")]
    InvalidDigit(char),
}

/// Errors that can occur when loading a [`PaletteConfig`](crate::PaletteConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// JSON parsing error.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// I/O error when reading the configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value is outside of its allowed range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
