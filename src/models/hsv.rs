//! Model a color with the HSV notation.

use crate::color::Component;

chromaview_macros::gen_model! {
    /// A color specified with hue, saturation and value.
    pub struct Hsv {
        /// The hue in degrees, [0, 360).
        hue: Component,
        /// The saturation as a percentage, [0, 100].
        saturation: Component,
        /// The value (brightness) as a percentage, [0, 100].
        value: Component,
    }
}

impl Hsv {
    /// Returns true if the color has no hue (gray, black or white).
    pub fn is_achromatic(&self) -> bool {
        self.saturation <= 0.0
    }
}
