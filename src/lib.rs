//! # colore
//!
//! Color normalization, mixing, and brightness-adaptive tint/shade derivation.
//!
//! ## Quick Start
//!
//! ```rust
//! use colore::prelude::*;
//!
//! let adjuster = Adjuster::parse("#336699").unwrap();
//! assert_eq!(adjuster.tint(None), "rgb(86,140,178)");
//! assert_eq!(adjuster.shade(Some(Weight::from(10))), "rgb(45,91,137)");
//! assert_eq!(adjuster.hover_color(), "rgb(93,147,183)");
//! ```
//!
//! ## Core Concepts
//!
//! - **Color**: an RGB triplet plus alpha, parsed from hex, `rgb()` or `rgba()`
//! - **Mix**: per-channel weighted blend of two colors
//! - **Shift**: tint or shade toward an adaptive or pure target
//! - **Hover**: shade bright colors, tint dark ones
//! - **Adjuster**: a base color with `threshold` and `mix_pure` settings

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod error;
pub mod mix;
pub mod shift;
pub mod hover;
pub mod adjust;
pub mod logging;
pub mod sync;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::adjust::{Adjuster, AdjusterOptions, mix_colors, mix_colors_as_color};
    pub use crate::color::{Color, ColorTriplet};
    pub use crate::error::ColorError;
    pub use crate::hover::{DEFAULT_THRESHOLD, hover_color};
    pub use crate::mix::{Weight, mix};
    pub use crate::shift::{Shift, shift};
}

// Re-export key types at crate root
pub use adjust::{Adjuster, AdjusterOptions};
pub use color::{Color, ColorTriplet};
pub use error::ColorError;
pub use mix::Weight;
pub use shift::Shift;
