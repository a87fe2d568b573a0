//! Color model: parsing and serialization.
//!
//! Every operation in this crate works on [`Color`], an RGB triplet plus an
//! alpha value. Colors enter as text and leave as text:
//!
//! - 3-digit hex (`#abc`, expanded to `#aabbcc`)
//! - 6-digit hex (`#aabbcc`), with or without the leading `#`
//! - `rgb(r,g,b)`
//! - `rgba(r,g,b,a)`
//!
//! Output is always `rgb()` for opaque colors and `rgba()` otherwise, so a
//! hex input does not round-trip to hex.
//!
//! # Examples
//!
//! ## Parsing Colors
//!
//! ```
//! use colore::color::Color;
//!
//! let orange = Color::parse("#ff8800").unwrap();
//! let short_hex = Color::parse("#f80").unwrap();
//! assert_eq!(orange, short_hex);
//!
//! let translucent = Color::parse("rgba(10, 20, 30, 0.5)").unwrap();
//! assert_eq!(translucent.to_string(), "rgba(10,20,30,0.5)");
//!
//! // Named colors are not accepted
//! assert!(Color::parse("red").is_err());
//! ```
//!
//! ## Creating Colors Programmatically
//!
//! ```
//! use colore::color::{Color, ColorTriplet};
//!
//! let opaque = Color::new(255, 128, 64);
//! assert_eq!(opaque.to_string(), "rgb(255,128,64)");
//!
//! let faded = Color::with_alpha(ColorTriplet::new(255, 128, 64), 0.25);
//! assert_eq!(faded.to_string(), "rgba(255,128,64,0.25)");
//! ```

use lru::LruCache;
use regex::Regex;
use std::fmt;
use std::num::{IntErrorKind, NonZeroUsize};
use std::str::FromStr;
use std::sync::LazyLock;
use std::sync::Mutex;

use crate::error::ColorError;
use crate::sync::lock_recover;

/// Accepted length range of `rgb()`/`rgba()` text.
const RGB_TEXT_LEN: std::ops::RangeInclusive<usize> = 10..=22;

/// Largest possible aggregate value (`255 * 3`).
pub const MAX_AGGREGATE: u16 = 765;

/// RGB color triplet with values 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorTriplet {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ColorTriplet {
    /// Create a new color triplet from RGB components.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns CSS-style hex format `#rrggbb`.
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Returns CSS-style rgb format `rgb(r,g,b)`.
    #[must_use]
    pub fn rgb(&self) -> String {
        format!("rgb({},{},{})", self.red, self.green, self.blue)
    }

    /// Sum of the three channels, a coarse brightness measure in `0..=765`.
    #[must_use]
    pub fn aggregate(&self) -> u16 {
        u16::from(self.red) + u16::from(self.green) + u16::from(self.blue)
    }

    /// The brightest channel.
    #[must_use]
    pub fn max_channel(&self) -> u8 {
        self.red.max(self.green).max(self.blue)
    }

    /// Channels as `[red, green, blue]`.
    #[must_use]
    pub const fn to_array(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Build a triplet from real-valued channels, flooring and clamping each to 0-255.
    pub(crate) fn from_floored(red: f64, green: f64, blue: f64) -> Self {
        Self::new(floor_channel(red), floor_channel(green), floor_channel(blue))
    }
}

/// Floor a real-valued channel and clamp it into 0-255.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to 0-255 before the cast"
)]
fn floor_channel(value: f64) -> u8 {
    value.floor().clamp(0.0, 255.0) as u8
}

impl From<(u8, u8, u8)> for ColorTriplet {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[u8; 3]> for ColorTriplet {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl fmt::Display for ColorTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rgb())
    }
}

/// A canonical color: RGB channels plus alpha in `0.0..=1.0`.
///
/// Colors are immutable values. Every operation returns a new color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    triplet: ColorTriplet,
    alpha: f64,
}

impl Default for Color {
    /// Mid gray, the color an unconfigured adjuster starts from.
    fn default() -> Self {
        Self::GRAY
    }
}

impl Color {
    /// Opaque white, the pure tint target.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Opaque black, the pure shade target.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Opaque mid gray.
    pub const GRAY: Self = Self::new(128, 128, 128);

    /// Create an opaque color from RGB components.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self::from_triplet(ColorTriplet::new(red, green, blue))
    }

    /// Create an opaque color from a triplet.
    #[must_use]
    pub const fn from_triplet(triplet: ColorTriplet) -> Self {
        Self {
            triplet,
            alpha: 1.0,
        }
    }

    /// Create a color with explicit alpha.
    ///
    /// Alpha is clamped to `0.0..=1.0`; NaN is treated as opaque.
    #[must_use]
    pub fn with_alpha(triplet: ColorTriplet, alpha: f64) -> Self {
        let alpha = if alpha.is_nan() {
            1.0
        } else {
            alpha.clamp(0.0, 1.0)
        };
        Self { triplet, alpha }
    }

    #[must_use]
    pub const fn triplet(&self) -> ColorTriplet {
        self.triplet
    }

    #[must_use]
    pub const fn red(&self) -> u8 {
        self.triplet.red
    }

    #[must_use]
    pub const fn green(&self) -> u8 {
        self.triplet.green
    }

    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.triplet.blue
    }

    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns true if alpha is 1.0.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        (self.alpha - 1.0).abs() < f64::EPSILON
    }

    /// Sum of r+g+b (0-765).
    #[must_use]
    pub fn aggregate_value(&self) -> u16 {
        self.triplet.aggregate()
    }

    /// Serialize as `rgb(r,g,b)` when opaque, `rgba(r,g,b,a)` otherwise.
    ///
    /// Alpha is printed in plain decimal form. Every color returned by
    /// [`Color::parse`] serializes to text that parses back to it; a color
    /// built with [`Color::with_alpha`] and a long alpha such as `0.123456`
    /// may not.
    #[must_use]
    pub fn color_string(&self) -> String {
        if self.is_opaque() {
            self.triplet.rgb()
        } else {
            let ColorTriplet { red, green, blue } = self.triplet;
            format!("rgba({red},{green},{blue},{})", self.alpha)
        }
    }

    /// Parse a color string (cached).
    ///
    /// Supported formats:
    /// - Hex format: `#FF0000`, `#F00`, `ff0000`, `f00`
    /// - RGB format: `rgb(255,0,0)`
    /// - RGBA format: `rgba(255,0,0,0.5)`
    ///
    /// Channels outside 0-255 are clamped, as is alpha outside 0-1.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] if the text matches neither
    /// the hex shape nor the rgb/rgba shape, including named colors. `rgba()`
    /// text is also rejected when its alpha would serialize past 22 bytes,
    /// as with `rgba(1,2,3,1e-9)`.
    pub fn parse(color: &str) -> Result<Self, ColorError> {
        static CACHE: LazyLock<Mutex<LruCache<String, Color>>> =
            LazyLock::new(|| Mutex::new(LruCache::new(NonZeroUsize::new(1024).expect("non-zero"))));

        let normalized = color.trim().to_lowercase();

        if let Some(cached) = lock_recover(&CACHE).get(&normalized) {
            log::trace!("color cache hit: {normalized}");
            return Ok(*cached);
        }

        let result = Self::parse_uncached(&normalized)?;
        log::trace!("parsed {normalized:?} as {result}");

        lock_recover(&CACHE).put(normalized, result);

        Ok(result)
    }

    fn parse_uncached(color: &str) -> Result<Self, ColorError> {
        let len = color.len();

        let is_hex = (color.starts_with('#') && matches!(len, 4 | 7)) || matches!(len, 3 | 6);
        if is_hex {
            return Self::parse_hex(color);
        }

        if color.starts_with("rgb") && RGB_TEXT_LEN.contains(&len) {
            return Self::parse_rgb(color);
        }

        Err(invalid_format(color))
    }

    fn parse_hex(color: &str) -> Result<Self, ColorError> {
        let hex = color.strip_prefix('#').unwrap_or(color);
        if !matches!(hex.len(), 3 | 6) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid_format(color));
        }

        // #RGB -> #RRGGBB
        let expanded: String = if hex.len() == 3 {
            hex.chars().flat_map(|c| [c, c]).collect()
        } else {
            hex.to_string()
        };

        let channel = |start: usize| {
            u8::from_str_radix(&expanded[start..start + 2], 16).map_err(|_| invalid_format(color))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    fn parse_rgb(color: &str) -> Result<Self, ColorError> {
        static RGB_RE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"^rgba?\(([^()]*)\)$").expect("valid regex"));

        let caps = RGB_RE
            .captures(color)
            .ok_or_else(|| invalid_format(color))?;
        let fields: Vec<&str> = caps[1].split(',').map(str::trim).collect();
        if !(3..=4).contains(&fields.len()) {
            return Err(invalid_format(color));
        }

        let channel = |field: &str| match field.parse::<i64>() {
            Ok(value) => Ok(u8::try_from(value.clamp(0, 255)).unwrap_or(u8::MAX)),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => Ok(u8::MAX),
                IntErrorKind::NegOverflow => Ok(0),
                _ => Err(invalid_format(color)),
            },
        };
        let triplet = ColorTriplet::new(channel(fields[0])?, channel(fields[1])?, channel(fields[2])?);

        let alpha = match fields.get(3) {
            Some(field) => field
                .parse::<f64>()
                .ok()
                .filter(|alpha| alpha.is_finite())
                .ok_or_else(|| invalid_format(color))?,
            None => 1.0,
        };

        // Alpha written as `1e-9` or `.125` can serialize longer than it was
        // read. Such text would not parse back, so it is rejected here.
        let parsed = Self::with_alpha(triplet, alpha);
        if !RGB_TEXT_LEN.contains(&parsed.color_string().len()) {
            return Err(invalid_format(color));
        }

        Ok(parsed)
    }
}

fn invalid_format(color: &str) -> ColorError {
    ColorError::InvalidColorFormat(color.to_string())
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.color_string())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.as_str())
    }
}

impl From<ColorTriplet> for Color {
    fn from(triplet: ColorTriplet) -> Self {
        Self::from_triplet(triplet)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}
