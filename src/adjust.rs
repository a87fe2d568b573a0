//! Configured color adjuster.
//!
//! [`Adjuster`] holds a base color plus the two settings that steer the
//! engine (`threshold` and `mix_pure`) and answers with color text:
//!
//! ```
//! use colore::adjust::Adjuster;
//!
//! let adjuster = Adjuster::parse("#336699").unwrap();
//! assert_eq!(adjuster.tint(None), "rgb(86,140,178)");
//! assert_eq!(adjuster.shade(None), "rgb(38,76,115)");
//! assert_eq!(adjuster.hover_color(), "rgb(93,147,183)");
//!
//! let pure = adjuster.mix_pure(true);
//! assert_eq!(pure.tint(None), "rgb(102,140,178)");
//! ```
//!
//! An adjuster built without a base color starts from mid gray. That fallback
//! lives here only; [`Color::parse`] never substitutes a default.

use crate::color::Color;
use crate::error::ColorError;
use crate::hover::{DEFAULT_THRESHOLD, hover_color};
use crate::mix::{Weight, mix};
use crate::shift::{Shift, shift};

/// Options accepted by [`Adjuster::from_options`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjusterOptions {
    /// Base color text (hex, `rgb()` or `rgba()`). Mid gray when absent.
    pub base_color: Option<String>,
    /// Aggregate brightness threshold for hover colors. 600 when absent.
    pub threshold: Option<u32>,
    /// Tint/shade toward pure white/black. False when absent.
    pub mix_pure: Option<bool>,
}

impl AdjusterOptions {
    /// Read options from a JSON object such as
    /// `{"baseColor": "#336699", "threshold": 500, "mixPure": true}`.
    ///
    /// Unknown keys are ignored and missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidOptions`] if the text is not a JSON object
    /// or a known key has the wrong type.
    #[cfg(feature = "json")]
    pub fn from_json(text: &str) -> Result<Self, ColorError> {
        use serde_json::Value;

        let value: Value =
            serde_json::from_str(text).map_err(|e| ColorError::InvalidOptions(e.to_string()))?;
        let Value::Object(map) = value else {
            return Err(ColorError::InvalidOptions(
                "expected a JSON object".to_string(),
            ));
        };

        let wrong_type =
            |key: &str, expected: &str| ColorError::InvalidOptions(format!("{key}: expected {expected}"));

        let base_color = match map.get("baseColor") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => return Err(wrong_type("baseColor", "a string")),
        };
        let threshold = match map.get("threshold") {
            None | Some(Value::Null) => None,
            Some(v) => Some(
                v.as_f64()
                    .filter(|n| *n >= 0.0)
                    .map(threshold_from_json)
                    .ok_or_else(|| wrong_type("threshold", "a non-negative number"))?,
            ),
        };
        let mix_pure = match map.get("mixPure") {
            None | Some(Value::Null) => None,
            Some(v) => Some(v.as_bool().ok_or_else(|| wrong_type("mixPure", "a boolean"))?),
        };

        Ok(Self {
            base_color,
            threshold,
            mix_pure,
        })
    }
}

/// Convert a non-negative JSON number into a threshold, dropping any fraction.
///
/// Aggregates are whole numbers, so `aggregate > 500.5` and `aggregate > 500`
/// agree. Values past `u32::MAX` saturate; anything above 765 already means
/// "never bright".
#[cfg(feature = "json")]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is non-negative and capped at u32::MAX before the cast"
)]
fn threshold_from_json(value: f64) -> u32 {
    value.floor().min(f64::from(u32::MAX)) as u32
}

/// A base color with tint/shade settings.
///
/// Adjusters are immutable; the builder methods consume and return a new one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjuster {
    base: Color,
    threshold: u32,
    mix_pure: bool,
}

impl Default for Adjuster {
    fn default() -> Self {
        Self::new(Color::GRAY)
    }
}

impl Adjuster {
    /// Create an adjuster with default settings around `base`.
    #[must_use]
    pub const fn new(base: Color) -> Self {
        Self {
            base,
            threshold: DEFAULT_THRESHOLD,
            mix_pure: false,
        }
    }

    /// Create an adjuster from base color text.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] if `base` does not parse.
    pub fn parse(base: &str) -> Result<Self, ColorError> {
        Ok(Self::new(Color::parse(base)?))
    }

    /// Create an adjuster from options, falling back to mid gray when no
    /// base color is given.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] if a base color is given
    /// but does not parse.
    pub fn from_options(options: &AdjusterOptions) -> Result<Self, ColorError> {
        let base = match options.base_color.as_deref() {
            Some(text) => Color::parse(text)?,
            None => {
                log::debug!("no base color configured, using {}", Color::GRAY);
                Color::GRAY
            }
        };

        Ok(Self::new(base)
            .threshold(options.threshold.unwrap_or(DEFAULT_THRESHOLD))
            .mix_pure(options.mix_pure.unwrap_or(false)))
    }

    /// Replace the base color.
    #[must_use]
    pub const fn base_color(mut self, base: Color) -> Self {
        self.base = base;
        self
    }

    /// Set the hover brightness threshold (0-765 scale).
    #[must_use]
    pub const fn threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Tint and shade toward pure white and black instead of adaptive targets.
    #[must_use]
    pub const fn mix_pure(mut self, mix_pure: bool) -> Self {
        self.mix_pure = mix_pure;
        self
    }

    #[must_use]
    pub const fn base(&self) -> &Color {
        &self.base
    }

    #[must_use]
    pub const fn get_threshold(&self) -> u32 {
        self.threshold
    }

    #[must_use]
    pub const fn is_mix_pure(&self) -> bool {
        self.mix_pure
    }

    /// The base color as `rgb()`/`rgba()` text.
    #[must_use]
    pub fn base_color_string(&self) -> String {
        self.base.color_string()
    }

    /// Tint the base color by `percentage` (25% when `None`).
    #[must_use]
    pub fn tint(&self, percentage: Option<Weight>) -> String {
        self.tint_color(percentage).color_string()
    }

    /// Shade the base color by `percentage` (25% when `None`).
    #[must_use]
    pub fn shade(&self, percentage: Option<Weight>) -> String {
        self.shade_color(percentage).color_string()
    }

    /// Automatic hover color for the base color.
    #[must_use]
    pub fn hover_color(&self) -> String {
        self.hover().color_string()
    }

    /// Like [`tint`](Self::tint), returning the color value.
    #[must_use]
    pub fn tint_color(&self, percentage: Option<Weight>) -> Color {
        shift(&self.base, percentage, Shift::Tint, self.mix_pure)
    }

    /// Like [`shade`](Self::shade), returning the color value.
    #[must_use]
    pub fn shade_color(&self, percentage: Option<Weight>) -> Color {
        shift(&self.base, percentage, Shift::Shade, self.mix_pure)
    }

    /// Like [`hover_color`](Self::hover_color), returning the color value.
    #[must_use]
    pub fn hover(&self) -> Color {
        hover_color(&self.base, self.threshold, self.mix_pure)
    }
}

/// Mix two color strings, returning `rgb()`/`rgba()` text.
///
/// ```
/// use colore::adjust::mix_colors;
///
/// assert_eq!(mix_colors("#ff0000", "#0000ff", 50.0).unwrap(), "rgb(127,0,127)");
/// ```
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if either color does not parse,
/// or [`ColorError::InvalidWeight`] if `weight` is not finite.
pub fn mix_colors(base: &str, target: &str, weight: f64) -> Result<String, ColorError> {
    mix_colors_as_color(base, target, weight).map(|color| color.color_string())
}

/// Like [`mix_colors`], returning the color value.
///
/// # Errors
///
/// Same as [`mix_colors`].
pub fn mix_colors_as_color(base: &str, target: &str, weight: f64) -> Result<Color, ColorError> {
    let base = Color::parse(base)?;
    let target = Color::parse(target)?;
    Ok(mix(&base, &target, Weight::new(weight)?))
}
