//! Conversions between the RGB, HLS and HSV models.
//!
//! RGB channels are in [0, 255], hues in degrees and every other component
//! is a percentage. HLS components are always ordered (hue, lightness,
//! saturation).
//!
//! When a color has no chroma its hue is undefined. Instead of producing NaN
//! or snapping to 0, the RGB to HLS/HSV conversions return the `previous_hue`
//! passed in by the caller. See [`HueMemory`](crate::HueMemory) for the
//! helper that keeps that value up to date.
//!
//! ```rust
//! use chromaview::Rgb;
//! let orange = Rgb::new(255.0, 128.0, 0.0);
//! let hls = orange.to_hls(0.0);
//! let back = hls.to_rgb();
//! assert_eq!(back.to_bytes(), orange.to_bytes());
//! ```

use crate::{
    color::{Component, Components},
    math::{almost_zero, clamp_percent, normalize_hue},
    models::{Hls, Hsv, Rgb},
};

impl Rgb {
    /// Convert this color to the HLS notation. If the color is achromatic
    /// the returned hue is `previous_hue`.
    pub fn to_hls(&self, previous_hue: Component) -> Hls {
        rgb_to_hls(self.to_components(), previous_hue).into()
    }

    /// Convert this color to the HSV notation. If the color is achromatic
    /// the returned hue is `previous_hue`.
    pub fn to_hsv(&self, previous_hue: Component) -> Hsv {
        rgb_to_hsv(self.to_components(), previous_hue).into()
    }
}

impl Hls {
    /// Convert this color from the HLS notation to RGB.
    pub fn to_rgb(&self) -> Rgb {
        hls_to_rgb(self.to_components()).into()
    }

    /// Convert this color from the HLS notation to the HSV notation. The hue
    /// of this color is kept when the result is achromatic.
    pub fn to_hsv(&self) -> Hsv {
        self.to_rgb().to_hsv(self.hue)
    }
}

impl Hsv {
    /// Convert this color from the HSV notation to RGB.
    pub fn to_rgb(&self) -> Rgb {
        hsv_to_rgb(self.to_components()).into()
    }

    /// Convert this color from the HSV notation to the HLS notation. The hue
    /// of this color is kept when the result is achromatic.
    pub fn to_hls(&self) -> Hls {
        self.to_rgb().to_hls(self.hue)
    }
}

/// Calculate the hue from RGB fractions and return it along with the min and
/// max channel. The hue is `None` when all channels are equal.
fn hue_with_min_max(from: &Components) -> (Option<Component>, Component, Component) {
    let Components(red, green, blue) = *from;

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);

    let delta = max - min;

    let hue = if delta != 0.0 {
        let sector = if max == red {
            (green - blue) / delta
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };
        Some(normalize_hue(60.0 * sector))
    } else {
        None
    };

    (hue, min, max)
}

/// Build RGB fractions from a hue, a chroma and the amount `m` added to every
/// channel. Hue must already be in [0, 360).
fn hue_to_rgb(hue: Component, chroma: Component, m: Component) -> Components {
    let h = hue / 60.0;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());

    let (red, green, blue) = match h as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Components(red + m, green + m, blue + m)
}

/// Convert RGB channels in [0, 255] to (hue, lightness, saturation).
pub fn rgb_to_hls(from: Components, previous_hue: Component) -> Components {
    let fractions = from.map(|v| v / 255.0);
    let (hue, min, max) = hue_with_min_max(&fractions);

    let lightness = (max + min) / 2.0;

    match hue {
        Some(hue) if !almost_zero(lightness) && !almost_zero(1.0 - lightness) => {
            let saturation = (max - lightness) / lightness.min(1.0 - lightness);
            Components(hue, lightness * 100.0, clamp_percent(saturation * 100.0))
        }
        _ => Components(previous_hue, lightness * 100.0, 0.0),
    }
}

/// Convert (hue, lightness, saturation) to RGB channels in [0, 255].
pub fn hls_to_rgb(from: Components) -> Components {
    let Components(hue, lightness, saturation) = from;

    let lightness = clamp_percent(lightness) / 100.0;
    let saturation = clamp_percent(saturation) / 100.0;

    if saturation <= 0.0 {
        let gray = lightness * 255.0;
        return Components(gray, gray, gray);
    }

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let m = lightness - chroma / 2.0;

    hue_to_rgb(normalize_hue(hue), chroma, m).map(|v| v * 255.0)
}

/// Convert RGB channels in [0, 255] to (hue, saturation, value).
pub fn rgb_to_hsv(from: Components, previous_hue: Component) -> Components {
    let fractions = from.map(|v| v / 255.0);
    let (hue, min, max) = hue_with_min_max(&fractions);

    match hue {
        Some(hue) if !almost_zero(max) => {
            let saturation = (max - min) / max;
            Components(hue, saturation * 100.0, max * 100.0)
        }
        _ => Components(previous_hue, 0.0, max * 100.0),
    }
}

/// Convert (hue, saturation, value) to RGB channels in [0, 255].
pub fn hsv_to_rgb(from: Components) -> Components {
    let Components(hue, saturation, value) = from;

    let saturation = clamp_percent(saturation) / 100.0;
    let value = clamp_percent(value) / 100.0;

    let chroma = value * saturation;
    let m = value - chroma;

    hue_to_rgb(normalize_hue(hue), chroma, m).map(|v| v * 255.0)
}
