//! Tint and shade derivation.
//!
//! Shifting a color mixes it toward a target. With `mix_pure` the target is
//! plain white (tint) or black (shade). Otherwise the target is derived from
//! the base color's brightness:
//!
//! - **Tint** raises every channel to at least half of the brightest one,
//!   then scales the result up by `765 / aggregate` (between 2x and 1000x).
//!   Dark and saturated colors therefore lighten toward a brighter version
//!   of themselves instead of toward gray.
//! - **Shade** scales every channel down by `1 / aggregate`, bounded to
//!   `0.01..=0.05`, which lands close to black.
//!
//! ```
//! use colore::color::Color;
//! use colore::shift::{shift, Shift};
//!
//! let base = Color::new(51, 102, 153);
//! assert_eq!(shift(&base, None, Shift::Tint, false), Color::new(86, 140, 178));
//! assert_eq!(shift(&base, None, Shift::Tint, true), Color::new(102, 140, 178));
//! ```

use crate::color::{Color, ColorTriplet, MAX_AGGREGATE};
use crate::error::ColorError;
use crate::mix::{Weight, mix};

/// Bounds of the tint scale factor.
const TINT_SCALE_MIN: f64 = 2.0;
const TINT_SCALE_MAX: f64 = 1000.0;

/// Bounds of the shade scale factor.
const SHADE_SCALE_MIN: f64 = 0.01;
const SHADE_SCALE_MAX: f64 = 0.05;

/// Direction of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    /// Lighten.
    Tint,
    /// Darken.
    Shade,
}

impl Shift {
    /// The pure extreme this direction mixes toward.
    #[must_use]
    pub const fn pure_target(self) -> Color {
        match self {
            Self::Tint => Color::WHITE,
            Self::Shade => Color::BLACK,
        }
    }
}

/// Shift `base` toward a lighter or darker target.
///
/// `percentage` defaults to 25%. See the module docs for how the target is
/// chosen.
#[must_use]
pub fn shift(base: &Color, percentage: Option<Weight>, direction: Shift, mix_pure: bool) -> Color {
    let weight = percentage.unwrap_or(Weight::DEFAULT_SHIFT);
    let target = mix_target(base, direction, mix_pure);
    mix(base, &target, weight)
}

/// The color `base` is mixed toward for the given direction.
#[must_use]
pub fn mix_target(base: &Color, direction: Shift, mix_pure: bool) -> Color {
    if mix_pure {
        return direction.pure_target();
    }
    match direction {
        Shift::Tint => tint_target(base),
        Shift::Shade => shade_target(base),
    }
}

/// Brightness-adaptive tint target.
#[must_use]
pub fn tint_target(base: &Color) -> Color {
    let src = base.triplet();
    let floor = (f64::from(src.max_channel()) / 2.0).clamp(1.0, 255.0);

    let scale = match scaled_inverse(f64::from(MAX_AGGREGATE), src.aggregate()) {
        Ok(ratio) => ratio.clamp(TINT_SCALE_MIN, TINT_SCALE_MAX),
        Err(_) => {
            log::debug!("tint of black: using maximum scale");
            TINT_SCALE_MAX
        }
    };

    let lift = |channel: u8| f64::from(channel).clamp(floor, 255.0) * scale;
    Color::from_triplet(ColorTriplet::from_floored(
        lift(src.red),
        lift(src.green),
        lift(src.blue),
    ))
}

/// Brightness-adaptive shade target.
#[must_use]
pub fn shade_target(base: &Color) -> Color {
    let src = base.triplet();
    let Ok(ratio) = scaled_inverse(1.0, src.aggregate()) else {
        log::debug!("shade of black: target is black");
        return Color::BLACK;
    };
    let scale = ratio.clamp(SHADE_SCALE_MIN, SHADE_SCALE_MAX);

    let sink = |channel: u8| f64::from(channel) * scale;
    Color::from_triplet(ColorTriplet::from_floored(
        sink(src.red),
        sink(src.green),
        sink(src.blue),
    ))
}

/// `numerator / aggregate`, refusing a zero aggregate.
fn scaled_inverse(numerator: f64, aggregate: u16) -> Result<f64, ColorError> {
    if aggregate == 0 {
        return Err(ColorError::DivisionGuardTriggered);
    }
    Ok(numerator / f64::from(aggregate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_inverse_guards_zero() {
        assert_eq!(scaled_inverse(1.0, 0), Err(ColorError::DivisionGuardTriggered));
        assert_eq!(scaled_inverse(765.0, 765), Ok(1.0));
    }

    #[test]
    fn test_pure_targets() {
        assert_eq!(Shift::Tint.pure_target(), Color::WHITE);
        assert_eq!(Shift::Shade.pure_target(), Color::BLACK);
        let c = Color::new(1, 2, 3);
        assert_eq!(mix_target(&c, Shift::Tint, true), Color::WHITE);
        assert_eq!(mix_target(&c, Shift::Shade, true), Color::BLACK);
    }

    #[test]
    fn test_tint_target_preserves_hue() {
        assert_eq!(tint_target(&Color::new(51, 102, 153)), Color::new(191, 255, 255));
        assert_eq!(tint_target(&Color::new(200, 100, 50)), Color::new(255, 218, 218));
        assert_eq!(tint_target(&Color::new(10, 20, 30)), Color::new(191, 255, 255));
    }

    #[test]
    fn test_tint_target_of_extremes() {
        assert_eq!(tint_target(&Color::WHITE), Color::WHITE);
        assert_eq!(tint_target(&Color::BLACK), Color::WHITE);
    }

    #[test]
    fn test_shade_target_is_near_black() {
        assert_eq!(shade_target(&Color::new(255, 0, 0)), Color::new(2, 0, 0));
        assert_eq!(shade_target(&Color::new(200, 100, 50)), Color::new(2, 1, 0));
        assert_eq!(shade_target(&Color::new(10, 20, 30)), Color::BLACK);
        assert_eq!(shade_target(&Color::BLACK), Color::BLACK);
    }

    #[test]
    fn test_shift_defaults_to_25_percent() {
        let c = Color::new(200, 100, 50);
        assert_eq!(
            shift(&c, None, Shift::Tint, false),
            shift(&c, Some(Weight::from(25)), Shift::Tint, false)
        );
        assert_eq!(shift(&c, None, Shift::Tint, false), Color::new(213, 129, 92));
        assert_eq!(shift(&c, None, Shift::Shade, false), Color::new(150, 75, 37));
    }

    #[test]
    fn test_shift_pure() {
        let c = Color::new(200, 100, 50);
        assert_eq!(shift(&c, None, Shift::Tint, true), Color::new(213, 138, 101));
        assert_eq!(shift(&c, None, Shift::Shade, true), Color::new(150, 75, 37));
    }

    #[test]
    fn test_shift_white_tint_is_white() {
        for w in [0, 10, 25, 50, 100] {
            assert_eq!(shift(&Color::WHITE, Some(Weight::from(w)), Shift::Tint, false), Color::WHITE);
            assert_eq!(shift(&Color::WHITE, Some(Weight::from(w)), Shift::Tint, true), Color::WHITE);
        }
    }

    #[test]
    fn test_shift_black_shade_is_black() {
        for w in [0, 10, 25, 50, 100] {
            assert_eq!(shift(&Color::BLACK, Some(Weight::from(w)), Shift::Shade, false), Color::BLACK);
        }
    }

    #[test]
    fn test_shift_black_tint_lightens() {
        assert_eq!(shift(&Color::BLACK, None, Shift::Tint, false), Color::new(63, 63, 63));
    }

    #[test]
    fn test_shift_weight_endpoints() {
        let c = Color::new(51, 102, 153);
        assert_eq!(shift(&c, Some(Weight::ZERO), Shift::Tint, false), c);
        assert_eq!(shift(&c, Some(Weight::FULL), Shift::Tint, false), Color::new(191, 255, 255));
        assert_eq!(shift(&c, Some(Weight::from(50)), Shift::Tint, false), Color::new(121, 178, 204));
    }

    #[test]
    fn test_shift_keeps_alpha() {
        let c = Color::with_alpha(ColorTriplet::new(200, 100, 50), 0.4);
        let shaded = shift(&c, None, Shift::Shade, false);
        assert!((shaded.alpha() - 0.4).abs() < f64::EPSILON);
    }
}
