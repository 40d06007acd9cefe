//! Model a color with the HLS notation.

use crate::color::Component;

chromaview_macros::gen_model! {
    /// A color specified with hue, lightness and saturation. The component
    /// order is always (hue, lightness, saturation).
    pub struct Hls {
        /// The hue in degrees, [0, 360).
        hue: Component,
        /// The lightness as a percentage, [0, 100].
        lightness: Component,
        /// The saturation as a percentage, [0, 100].
        saturation: Component,
    }
}

impl Hls {
    /// Returns true if the color has no hue (gray, black or white).
    pub fn is_achromatic(&self) -> bool {
        self.saturation <= 0.0
    }
}
