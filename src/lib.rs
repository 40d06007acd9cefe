//! chromaview converts colors between the RGB, HLS and HSV models and keeps
//! a palette of saved colors whose views in every model stay consistent.
//!
//! The conversions are pure functions. The only state involved is the hue
//! memory used for achromatic colors, which is owned by the caller (see
//! [`HueMemory`]).

#![deny(missing_docs)]

mod color;
pub mod config;
mod convert;
mod error;
pub mod geometry;
mod hex;
mod hue;
pub mod interpolate;
mod math;
pub mod models;
pub mod palette;


pub use color::{Component, Components};
pub use config::PaletteConfig;
pub use convert::{hls_to_rgb, hsv_to_rgb, rgb_to_hls, rgb_to_hsv};
pub use error::{ConfigError, PaletteError, ParseHexError};
pub use hue::{HueMemory, Hues};
pub use interpolate::InterpolationSpace;
pub use models::{Hls, Hsv, Rgb};
pub use palette::{Edit, Palette, PointFlags, PointId, SavedColor};

/// Everything needed to work with colors and palettes.
pub mod prelude {
    pub use crate::{
        Component, Edit, Hls, Hsv, HueMemory, InterpolationSpace, Palette, PaletteConfig, Rgb,
    };
}
