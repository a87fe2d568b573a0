//! Weighted blending of two colors.
//!
//! A mix moves each channel of a base color toward a target color by a
//! percentage [`Weight`]. The base color keeps its alpha.
//!
//! ```
//! use colore::color::Color;
//! use colore::mix::{mix, Weight};
//!
//! let red = Color::new(255, 0, 0);
//! let blue = Color::new(0, 0, 255);
//! assert_eq!(mix(&red, &blue, Weight::from(50)), Color::new(127, 0, 127));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::color::{Color, ColorTriplet};
use crate::error::ColorError;

/// A mix percentage in `0.0..=100.0`.
///
/// Out-of-range values are clamped into range when the weight is built, so a
/// mix never extrapolates past its target. Only non-finite values are
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Weight(f64);

impl Weight {
    /// No movement toward the target.
    pub const ZERO: Self = Self(0.0);
    /// The full target color.
    pub const FULL: Self = Self(100.0);
    /// Weight used by tint and shade when none is given.
    pub const DEFAULT_SHIFT: Self = Self(25.0);

    /// Build a weight from a percentage, clamping it to `0.0..=100.0`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidWeight`] for NaN or infinite input.
    pub fn new(percent: f64) -> Result<Self, ColorError> {
        if !percent.is_finite() {
            return Err(ColorError::InvalidWeight(percent.to_string()));
        }
        let clamped = percent.clamp(0.0, 100.0);
        if (clamped - percent).abs() > f64::EPSILON {
            log::debug!("weight {percent} clamped to {clamped}");
        }
        Ok(Self(clamped))
    }

    /// Build a weight from a whole percentage, capping it at 100.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn from_percent(percent: u8) -> Self {
        let percent = if percent > 100 { 100 } else { percent };
        Self(percent as f64)
    }

    /// Parse a percentage such as `"25"`, `"12.5"`, or `"40%"`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidWeight`] if the text is not a finite number.
    pub fn parse(text: &str) -> Result<Self, ColorError> {
        let trimmed = text.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
        let percent = number
            .parse::<f64>()
            .map_err(|_| ColorError::InvalidWeight(text.to_string()))?;
        Self::new(percent).map_err(|_| ColorError::InvalidWeight(text.to_string()))
    }

    /// The percentage value.
    #[must_use]
    pub const fn percent(self) -> f64 {
        self.0
    }

    /// The weight as a fraction in `0.0..=1.0`.
    #[must_use]
    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::DEFAULT_SHIFT
    }
}

impl From<u8> for Weight {
    fn from(percent: u8) -> Self {
        Self::from_percent(percent)
    }
}

impl FromStr for Weight {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<f64> for Weight {
    type Error = ColorError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Blend `base` toward `target` by `weight`.
///
/// Each channel becomes `floor(base + (target - base) * weight / 100)`,
/// clamped to 0-255. The result keeps `base`'s alpha; `target`'s alpha is
/// ignored.
#[must_use]
pub fn mix(base: &Color, target: &Color, weight: Weight) -> Color {
    let fraction = weight.fraction();
    let blend = |from: u8, to: u8| {
        let from = f64::from(from);
        from + (f64::from(to) - from) * fraction
    };

    let b = base.triplet();
    let t = target.triplet();
    let triplet = ColorTriplet::from_floored(
        blend(b.red, t.red),
        blend(b.green, t.green),
        blend(b.blue, t.blue),
    );

    Color::with_alpha(triplet, base.alpha())
}
