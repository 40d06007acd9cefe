//! Placement of colors inside the solids used to visualize each model: the
//! RGB unit cube, the HLS double cone and the HSV cone.
//!
//! All three solids share the same frame: the unit cube spans [0, 1] on every
//! axis and the cones are centered on the vertical line through
//! `(0.5, y, 0.5)`.

use euclid::default::{Point3D, Vector3D};

use crate::{
    color::Component,
    math::normalize_hue,
    models::{Hls, Hsv, Rgb},
};

/// A position in the visualization frame.
pub type Position = Point3D<Component>;

/// Radius of the cones at their widest.
pub const CONE_RADIUS: Component = 0.62;

/// Vertical offset of the HSV cone relative to the cube.
pub const HSV_Y_OFFSET: Component = -0.2;

/// The point on the axis of both cones at height 0.
fn axis_origin() -> Position {
    Point3D::new(0.5, 0.0, 0.5)
}

/// A horizontal offset of `radius` in the direction of `degrees`.
fn polar_offset(degrees: Component, radius: Component, y: Component) -> Vector3D<Component> {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vector3D::new(radius * cos, y, radius * sin)
}

/// Position of a color inside the RGB unit cube.
pub fn rgb_cube_position(rgb: &Rgb) -> Position {
    Point3D::new(rgb.red / 255.0, rgb.green / 255.0, rgb.blue / 255.0)
}

/// Position of a color inside the HLS double cone.
///
/// Lightness is the height, so black is the bottom apex and white the top
/// one. The radius peaks at 50% lightness and shrinks linearly towards both
/// apexes. Red points at 270 degrees and hues turn clockwise from there.
pub fn hls_diamond_position(hls: &Hls) -> Position {
    let lightness = hls.lightness / 100.0;
    let saturation = hls.saturation / 100.0;

    let angle = 270.0 - normalize_hue(hls.hue);
    let radius = CONE_RADIUS * saturation * (1.0 - (lightness - 0.5).abs() * 2.0);

    axis_origin() + polar_offset(angle, radius, lightness)
}

/// Position of a color inside the HSV cone. The apex (black) sits at the
/// bottom and the base holds the fully bright colors.
pub fn hsv_cone_position(hsv: &Hsv) -> Position {
    let saturation = hsv.saturation / 100.0;
    let value = hsv.value / 100.0;

    let angle = -normalize_hue(hsv.hue) - 30.0;
    let radius = CONE_RADIUS * saturation * value;

    axis_origin() + polar_offset(angle, radius, HSV_Y_OFFSET + value)
}
