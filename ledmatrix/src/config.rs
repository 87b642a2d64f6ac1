use serde::Deserialize;

use crate::error::ConfigError;
use crate::export::ExportStyle;
use crate::render::PreviewStyle;

/// Serde-driven settings matching the TOML format:
///
/// ```toml
/// [export]
/// name = "smiley"
///
/// [preview]
/// on = "@"
/// off = " "
/// ```
///
/// Every table and key is optional; missing values fall back to the
/// defaults, which produce the standard `bitmap[]` output.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub export: ExportStyle,
    pub preview: PreviewStyle,
}

impl Config {
    /// Parse and validate a TOML config string.
    pub fn from_toml(toml_str: &str) -> Result<Config, ConfigError> {
        let config: Config =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.export.validate()?;
        Ok(config)
    }
}
