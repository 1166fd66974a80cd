//! Display settings for the unit system
//!
//! ```toml
//! schema = "ImperialUK"
//! decimals = 3
//! ranged = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::translate::{translate, translate_point, translate_ranged};
use crate::types::{na, CanonicalQuantity, Dimension, DisplayPoint, Schema, TranslateResult};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unsupported settings format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitSettings {
    /// Schema values are presented in
    pub schema: Schema,

    /// Decimals shown when formatting
    pub decimals: usize,

    /// Pick the display unit from the magnitude of the value
    pub ranged: bool,
}

impl Default for UnitSettings {
    fn default() -> Self {
        Self {
            schema: Schema::SI,
            decimals: 2,
            ranged: false,
        }
    }
}

impl UnitSettings {
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load from a `.toml` or `.json` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let parse = match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(SettingsError::UnsupportedFormat(path.to_path_buf())),
        };

        let text = fs::read_to_string(path)?;
        let settings = parse(&text)?;
        tracing::debug!(path = %path.display(), schema = %settings.schema, "loaded unit settings");
        Ok(settings)
    }

    pub fn translate(&self, value: f64, dimension: Dimension) -> TranslateResult<'static> {
        if self.ranged {
            translate_ranged(self.schema, value, dimension)
        } else {
            translate(self.schema, value, dimension)
        }
    }

    /// Canonical value rendered for display, e.g. `"25.40 mm"`
    pub fn format(&self, value: f64, dimension: Dimension) -> String {
        self.translate(value, dimension).display(self.decimals).to_string()
    }

    pub fn format_quantity<Q: CanonicalQuantity>(&self, quantity: Q) -> String {
        self.format(quantity.to_canonical(), Q::DIMENSION)
    }

    /// Canonical point rendered per axis in the schema's default length unit
    pub fn format_point(&self, point: &na::Point3<f64>) -> String {
        let (display, symbol) = translate_point(self.schema, point);
        DisplayPoint {
            coords: [display.x, display.y, display.z],
            symbol,
            decimals: self.decimals,
        }
        .to_string()
    }
}
