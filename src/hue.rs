//! Remembering the hue of a color across achromatic states.
//!
//! The hue of a gray is undefined, so a color that is dragged to zero
//! saturation, or to full black or white, would lose its hue and snap back to
//! 0 on the next edit. A [`HueMemory`] keeps the last meaningful hue around so
//! the conversions can hand it back for as long as the color stays
//! achromatic.
//!
//! Each color entity owns one memory per cylindrical model ([`Hues`]). The
//! memories are never shared between entities or between HLS and HSV.

use crate::{
    color::Component,
    math::normalize_hue,
    models::{Hls, Hsv, Rgb},
};

/// The last hue, in degrees, computed for a color with non-zero saturation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HueMemory(Component);

impl HueMemory {
    /// Create a memory holding the given hue.
    pub fn new(hue: Component) -> Self {
        Self(normalize_hue(hue))
    }

    /// The remembered hue.
    pub fn hue(&self) -> Component {
        self.0
    }

    /// Store `hue` if `saturation` is greater than zero. Returns true if the
    /// memory changed.
    pub fn remember(&mut self, hue: Component, saturation: Component) -> bool {
        if saturation > 0.0 && hue != self.0 {
            log::trace!("hue memory {} -> {}", self.0, hue);
            self.0 = hue;
            true
        } else {
            false
        }
    }

    /// Overwrite the memory with a hue chosen explicitly, regardless of
    /// saturation.
    pub fn seed(&mut self, hue: Component) {
        self.0 = normalize_hue(hue);
    }

    /// Forget the remembered hue.
    pub fn reset(&mut self) {
        self.0 = 0.0;
    }
}

/// The pair of hue memories owned by a single color entity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hues {
    /// Memory for the HLS view.
    pub hls: HueMemory,
    /// Memory for the HSV view.
    pub hsv: HueMemory,
}

impl Hues {
    /// Derive both cylindrical views of `rgb`, updating the memories.
    pub fn derive(&mut self, rgb: &Rgb) -> (Hls, Hsv) {
        (rgb.to_hls_with(&mut self.hls), rgb.to_hsv_with(&mut self.hsv))
    }

    /// Seed both memories with a hue the user picked directly.
    pub fn seed(&mut self, hue: Component) {
        self.hls.seed(hue);
        self.hsv.seed(hue);
    }
}

impl Rgb {
    /// Convert to HLS using the remembered hue for achromatic colors, then
    /// remember the new hue if the result has saturation.
    pub fn to_hls_with(&self, memory: &mut HueMemory) -> Hls {
        let hls = self.to_hls(memory.hue());
        memory.remember(hls.hue, hls.saturation);
        hls
    }

    /// Convert to HSV using the remembered hue for achromatic colors, then
    /// remember the new hue if the result has saturation.
    pub fn to_hsv_with(&self, memory: &mut HueMemory) -> Hsv {
        let hsv = self.to_hsv(memory.hue());
        memory.remember(hsv.hue, hsv.saturation);
        hsv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn hue_survives_desaturation() {
        let mut memory = HueMemory::default();

        let hls = Rgb::new(0.0, 0.0, 255.0).to_hls_with(&mut memory);
        assert_component_eq!(hls.hue, 240.0);
        assert_component_eq!(memory.hue(), 240.0);

        // Drag lightness to 0, then saturation to 0.
        let hls = Rgb::BLACK.to_hls_with(&mut memory);
        assert_component_eq!(hls.hue, 240.0);
        let hls = Rgb::new(90.0, 90.0, 90.0).to_hls_with(&mut memory);
        assert_component_eq!(hls.hue, 240.0);
        let hls = Rgb::WHITE.to_hls_with(&mut memory);
        assert_component_eq!(hls.hue, 240.0);

        // A chromatic color replaces the memory.
        let hls = Rgb::new(0.0, 255.0, 0.0).to_hls_with(&mut memory);
        assert_component_eq!(hls.hue, 120.0);
        assert_component_eq!(memory.hue(), 120.0);
    }

    #[test]
    fn zero_saturation_does_not_update() {
        let mut memory = HueMemory::new(33.0);
        assert!(!memory.remember(200.0, 0.0));
        assert_eq!(memory.hue(), 33.0);
        assert!(memory.remember(200.0, 0.5));
        assert_eq!(memory.hue(), 200.0);
    }

    #[test]
    fn models_have_independent_memories() {
        let mut hues = Hues::default();
        hues.hls.seed(10.0);
        hues.hsv.seed(20.0);

        let (hls, hsv) = hues.derive(&Rgb::new(50.0, 50.0, 50.0));
        assert_eq!(hls.hue, 10.0);
        assert_eq!(hsv.hue, 20.0);

        let (hls, hsv) = hues.derive(&Rgb::new(255.0, 255.0, 0.0));
        assert_component_eq!(hls.hue, 60.0);
        assert_component_eq!(hsv.hue, 60.0);
        assert_component_eq!(hues.hls.hue(), 60.0);
        assert_component_eq!(hues.hsv.hue(), 60.0);
    }

    #[test]
    fn seed_and_reset() {
        let mut hues = Hues::default();
        hues.seed(-90.0);
        assert_eq!(hues.hls.hue(), 270.0);
        assert_eq!(hues.hsv.hue(), 270.0);

        hues.hls.reset();
        assert_eq!(hues.hls.hue(), 0.0);
        assert_eq!(hues.hsv.hue(), 270.0);
    }
}
