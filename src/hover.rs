//! Automatic hover color selection.
//!
//! Bright colors are shaded a little, dark colors are tinted a lot. The
//! boundary is an aggregate brightness threshold on the 0-765 scale.

use crate::color::Color;
use crate::mix::Weight;
use crate::shift::{Shift, shift};

/// Threshold used when none is configured.
pub const DEFAULT_THRESHOLD: u32 = 600;

/// Shade weight applied to colors brighter than the threshold.
pub const HOVER_SHADE: Weight = Weight::from_percent(10);

/// Tint weight applied to colors at or below the threshold.
pub const HOVER_TINT: Weight = Weight::from_percent(30);

/// Returns true if `base` counts as bright for `threshold`.
#[must_use]
pub fn is_bright(base: &Color, threshold: u32) -> bool {
    u32::from(base.aggregate_value()) > threshold
}

/// Pick a hover color for `base`.
///
/// Colors whose aggregate exceeds `threshold` are shaded by 10%, all others
/// are tinted by 30%.
///
/// ```
/// use colore::color::Color;
/// use colore::hover::{hover_color, DEFAULT_THRESHOLD};
///
/// let light = Color::new(250, 250, 250);
/// assert_eq!(hover_color(&light, DEFAULT_THRESHOLD, false), Color::new(225, 225, 225));
///
/// let dark = Color::new(10, 10, 10);
/// assert_eq!(hover_color(&dark, DEFAULT_THRESHOLD, false), Color::new(83, 83, 83));
/// ```
#[must_use]
pub fn hover_color(base: &Color, threshold: u32, mix_pure: bool) -> Color {
    if is_bright(base, threshold) {
        log::trace!(
            "hover: aggregate {} > {threshold}, shading",
            base.aggregate_value()
        );
        shift(base, Some(HOVER_SHADE), Shift::Shade, mix_pure)
    } else {
        log::trace!(
            "hover: aggregate {} <= {threshold}, tinting",
            base.aggregate_value()
        );
        shift(base, Some(HOVER_TINT), Shift::Tint, mix_pure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_bright_boundary() {
        let c = Color::new(200, 200, 200);
        assert!(!is_bright(&c, 600));
        assert!(is_bright(&c, 599));
    }

    #[test]
    fn test_hover_bright_darkens() {
        let base = Color::new(250, 250, 250);
        let hover = hover_color(&base, DEFAULT_THRESHOLD, false);
        assert_eq!(hover, Color::new(225, 225, 225));
        assert!(hover.aggregate_value() < base.aggregate_value());
    }

    #[test]
    fn test_hover_dark_lightens() {
        let base = Color::new(10, 10, 10);
        let hover = hover_color(&base, DEFAULT_THRESHOLD, false);
        assert_eq!(hover, Color::new(83, 83, 83));
        assert!(hover.aggregate_value() > base.aggregate_value());
    }

    #[test]
    fn test_hover_adaptive_vs_pure() {
        let base = Color::new(51, 102, 153);
        assert_eq!(hover_color(&base, DEFAULT_THRESHOLD, false), Color::new(93, 147, 183));
        assert_eq!(hover_color(&base, DEFAULT_THRESHOLD, true), Color::new(112, 147, 183));
    }

    #[test]
    fn test_hover_threshold_moves_decision() {
        let base = Color::new(128, 128, 128);
        assert_eq!(hover_color(&base, DEFAULT_THRESHOLD, false), Color::new(166, 166, 166));
        // With a low threshold mid gray counts as bright and is shaded 10%.
        assert_eq!(hover_color(&base, 100, false), Color::new(115, 115, 115));
    }

    #[test]
    fn test_hover_black_and_white() {
        assert_eq!(hover_color(&Color::BLACK, DEFAULT_THRESHOLD, false), Color::new(76, 76, 76));
        assert_eq!(hover_color(&Color::WHITE, DEFAULT_THRESHOLD, false), Color::new(229, 229, 229));
    }
}
