//! Reading and writing colors as `#rrggbb` strings, the format used by color
//! picker inputs.

use std::str::FromStr;

use crate::{error::ParseHexError, models::Rgb};

/// Parse one channel from one or two hex digits. A single digit is doubled.
fn channel(digits: &str) -> Result<u8, ParseHexError> {
    let value = u8::from_str_radix(digits, 16)
        .map_err(|_| ParseHexError::InvalidDigit(digits.chars().next().unwrap_or_default()))?;
    Ok(if digits.len() == 1 { value * 17 } else { value })
}

impl Rgb {
    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb`.
    pub fn from_hex(hex: &str) -> Result<Self, ParseHexError> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        // from_str_radix accepts a leading sign, so check the digits first.
        if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseHexError::InvalidDigit(c));
        }

        let width = match hex.len() {
            3 => 1,
            6 => 2,
            len => return Err(ParseHexError::InvalidLength(len)),
        };

        Ok(Self::from_bytes([
            channel(&hex[0..width])?,
            channel(&hex[width..2 * width])?,
            channel(&hex[2 * width..3 * width])?,
        ]))
    }

    /// Format as a lowercase `#rrggbb` string. Channels are clamped and
    /// rounded first.
    pub fn to_hex(&self) -> String {
        let [red, green, blue] = self.to_bytes();
        format!("#{red:02x}{green:02x}{blue:02x}")
    }
}

impl FromStr for Rgb {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
