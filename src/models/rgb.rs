//! Model a color with red, green and blue channels in [0, 255].

use serde::{Deserialize, Serialize};

use crate::color::Component;
use crate::math::round_channel;

chromaview_macros::gen_model! {
    /// A color specified with red, green and blue channels. Each channel is
    /// nominally in the range [0, 255] but is allowed to leave it while a
    /// color is being edited.
    #[derive(Serialize, Deserialize)]
    pub struct Rgb {
        /// The red channel.
        red: Component,
        /// The green channel.
        green: Component,
        /// The blue channel.
        blue: Component,
    }
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
    };

    /// White.
    pub const WHITE: Self = Self {
        red: 255.0,
        green: 255.0,
        blue: 255.0,
    };

    /// Create a color from 8-bit channels.
    pub fn from_bytes([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red as Component, green as Component, blue as Component)
    }

    /// Return a copy with every channel clamped into [0, 255].
    pub fn clamped(&self) -> Self {
        Self::new(
            self.red.clamp(0.0, 255.0),
            self.green.clamp(0.0, 255.0),
            self.blue.clamp(0.0, 255.0),
        )
    }

    /// Clamp and round every channel to an 8-bit value.
    pub fn to_bytes(&self) -> [u8; 3] {
        [
            round_channel(self.red),
            round_channel(self.green),
            round_channel(self.blue),
        ]
    }

    /// Returns true when all three channels are equal.
    pub fn is_gray(&self) -> bool {
        self.red == self.green && self.green == self.blue
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::new(127.0, 127.0, 127.0)
    }
}
