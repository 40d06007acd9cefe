//! Math utility functions.

use num_traits::Float;

use crate::color::Component;

/// Returns true if the value is close enough to zero to be treated as zero.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < Component::EPSILON
}

/// Wrap a hue in degrees into the range [0, 360).
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative values.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Clamp a percentage into [0, 100].
pub fn clamp_percent(value: Component) -> Component {
    value.clamp(0.0, 100.0)
}

/// Linear interpolation between `a` and `b`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Clamp a channel value into [0, 255] and round it half away from zero.
pub fn round_channel(value: Component) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_wraps_into_range() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(370.0), 10.0);
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(720.0), 0.0);
        assert!(normalize_hue(-1.0e-9) < 360.0);
    }

    #[test]
    fn channels_round_half_away_from_zero() {
        assert_eq!(round_channel(127.5), 128);
        assert_eq!(round_channel(127.49), 127);
        assert_eq!(round_channel(-3.0), 0);
        assert_eq!(round_channel(300.0), 255);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    }
}
