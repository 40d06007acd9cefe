//! Interpolating between two colors.

use serde::{Deserialize, Serialize};

use crate::{
    color::Component,
    error::PaletteError,
    math::{lerp, normalize_hue},
    models::{Hls, Hsv, Rgb},
};

/// The model in which the components of two colors are interpolated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationSpace {
    /// Interpolate the red, green and blue channels.
    #[default]
    Rgb,
    /// Interpolate hue, lightness and saturation.
    Hls,
    /// Interpolate hue, saturation and value.
    Hsv,
}

/// Interpolate hues along the shorter arc of the hue circle.
fn lerp_hue(from: Component, to: Component, t: Component) -> Component {
    let mut delta = to - from;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }
    normalize_hue(from + delta * t)
}

fn interpolate_hls(left: &Rgb, right: &Rgb, t: Component) -> Rgb {
    // An achromatic end takes the hue of the other end.
    let start = left.to_hls(0.0);
    let end = right.to_hls(start.hue);
    let start = if start.is_achromatic() {
        Hls { hue: end.hue, ..start }
    } else {
        start
    };

    Hls::new(
        lerp_hue(start.hue, end.hue, t),
        lerp(start.lightness, end.lightness, t),
        lerp(start.saturation, end.saturation, t),
    )
    .to_rgb()
}

fn interpolate_hsv(left: &Rgb, right: &Rgb, t: Component) -> Rgb {
    let start = left.to_hsv(0.0);
    let end = right.to_hsv(start.hue);
    let start = if start.is_achromatic() {
        Hsv { hue: end.hue, ..start }
    } else {
        start
    };

    Hsv::new(
        lerp_hue(start.hue, end.hue, t),
        lerp(start.saturation, end.saturation, t),
        lerp(start.value, end.value, t),
    )
    .to_rgb()
}

/// Interpolate from `left` to `right` in the given space, using `t` as the
/// progress between them.
pub fn interpolate(left: &Rgb, right: &Rgb, t: Component, space: InterpolationSpace) -> Rgb {
    match space {
        InterpolationSpace::Rgb => Rgb::new(
            lerp(left.red, right.red, t),
            lerp(left.green, right.green, t),
            lerp(left.blue, right.blue, t),
        ),
        InterpolationSpace::Hls => interpolate_hls(left, right, t),
        InterpolationSpace::Hsv => interpolate_hsv(left, right, t),
    }
}

/// Colors at `t = i / (steps - 1)` for every `i` in `range`. `steps` must
/// be at least 2.
pub(crate) fn spaced<'a>(
    left: &'a Rgb,
    right: &'a Rgb,
    steps: usize,
    range: std::ops::Range<usize>,
    space: InterpolationSpace,
) -> impl Iterator<Item = Rgb> + 'a {
    let last = (steps - 1) as Component;
    range.map(move |i| match i {
        0 => *left,
        i if i == steps - 1 => *right,
        i => interpolate(left, right, i as Component / last, space),
    })
}

fn check_steps(steps: usize) -> Result<(), PaletteError> {
    if steps < 2 {
        return Err(PaletteError::InvalidSteps(steps));
    }
    Ok(())
}

/// Return `steps` evenly spaced colors from `left` to `right`, both ends
/// included. At least 2 steps are required.
pub fn ramp(
    left: &Rgb,
    right: &Rgb,
    steps: usize,
    space: InterpolationSpace,
) -> Result<Vec<Rgb>, PaletteError> {
    check_steps(steps)?;
    Ok(spaced(left, right, steps, 0..steps, space).collect())
}

/// Like [`ramp`] but without the two end points, so `steps - 2` colors.
pub fn interior(
    left: &Rgb,
    right: &Rgb,
    steps: usize,
    space: InterpolationSpace,
) -> Result<Vec<Rgb>, PaletteError> {
    check_steps(steps)?;
    Ok(spaced(left, right, steps, 1..steps - 1, space).collect())
}
