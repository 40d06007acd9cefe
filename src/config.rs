//! Configuration for a [`Palette`](crate::Palette).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, interpolate::InterpolationSpace, models::Rgb};

/// Settings that control how a palette creates and interpolates points. Every
/// field is optional in JSON and falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Color given to newly created points.
    pub default_rgb: Rgb,

    /// Number of colors in each interpolated segment, both base points
    /// included.
    pub interpolation_steps: usize,

    /// Model in which interpolated points are computed.
    pub interpolation_space: InterpolationSpace,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            default_rgb: Rgb::default(),
            interpolation_steps: 10,
            interpolation_space: InterpolationSpace::default(),
        }
    }
}

impl PaletteConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded palette configuration from {}", path.display());
        Ok(config)
    }

    /// Serialize the configuration as pretty printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.interpolation_steps < 2 {
            return Err(ConfigError::Invalid(format!(
                "interpolation_steps must be at least 2, found {}",
                self.interpolation_steps
            )));
        }
        if !self.default_rgb.is_finite() {
            return Err(ConfigError::Invalid(
                "default_rgb must have finite channels".to_string(),
            ));
        }
        Ok(())
    }
}
