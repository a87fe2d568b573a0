//! Error type shared by the color engine.

use std::fmt;

/// Errors produced while parsing colors, weights, or adjuster options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Text is neither a hex color nor an `rgb()`/`rgba()` function.
    InvalidColorFormat(String),
    /// Percentage is not a finite number.
    InvalidWeight(String),
    /// Aggregate brightness of zero reached a division.
    DivisionGuardTriggered,
    /// Adjuster options could not be read.
    InvalidOptions(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColorFormat(s) => write!(f, "Invalid color format: {s}"),
            Self::InvalidWeight(s) => write!(f, "Invalid weight: {s}"),
            Self::DivisionGuardTriggered => {
                write!(f, "Division guard triggered: aggregate brightness is zero")
            }
            Self::InvalidOptions(s) => write!(f, "Invalid adjuster options: {s}"),
        }
    }
}

impl std::error::Error for ColorError {}
