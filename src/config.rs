use std::path::{Path, PathBuf};

use egui::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::palette::{StrokeColor, ThicknessPreset};

/// Names the JSON config file read by [`AppConfig::from_env`].
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// Settings for the canvas, the palette and export.
///
/// Missing fields fall back to their defaults, so a config file only needs
/// the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Canvas width and height in surface units
    pub canvas_size: [f32; 2],
    /// Exported image is `canvas_size * export_scale` pixels
    pub export_scale: f32,
    pub export_path: PathBuf,
    /// The first preset is selected at startup
    pub thickness_presets: Vec<ThicknessPreset>,
    pub default_color: StrokeColor,
    pub stickers: Vec<String>,
    /// Font size stickers are drawn at
    pub sticker_size: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_size: [256.0, 256.0],
            export_scale: 4.0,
            export_path: PathBuf::from("sketchpad.png"),
            thickness_presets: vec![
                ThicknessPreset::new("Thin", Self::DEFAULT_THICKNESS),
                ThicknessPreset::new("Thick", 6.0),
            ],
            default_color: StrokeColor::default(),
            stickers: vec!["🍷".to_owned(), "🍕".to_owned(), "🎉".to_owned()],
            sticker_size: 24.0,
        }
    }
}

impl AppConfig {
    pub const DEFAULT_THICKNESS: f32 = 2.0;

    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.canvas_size[0], self.canvas_size[1])
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the file named by `SKETCHPAD_CONFIG`, or the defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |value: f32| value.is_finite() && value > 0.0;

        if !self.canvas_size.iter().all(|&side| positive(side)) {
            return Err(ConfigError::Invalid(format!(
                "canvas_size must be positive, got {:?}",
                self.canvas_size
            )));
        }
        if !positive(self.export_scale) {
            return Err(ConfigError::Invalid(format!(
                "export_scale must be positive, got {}",
                self.export_scale
            )));
        }
        if !positive(self.sticker_size) {
            return Err(ConfigError::Invalid(format!(
                "sticker_size must be positive, got {}",
                self.sticker_size
            )));
        }
        if let Some(preset) = self.thickness_presets.iter().find(|p| !positive(p.value)) {
            return Err(ConfigError::Invalid(format!(
                "thickness preset {:?} must be positive, got {}",
                preset.label, preset.value
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "export_scale": 2.0, "default_color": "blue" }"#)
            .unwrap();
        assert_eq!(config.export_scale, 2.0);
        assert_eq!(config.default_color, StrokeColor::Blue);
        assert_eq!(config.canvas_size, AppConfig::default().canvas_size);
        assert_eq!(config.stickers.len(), 3);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = AppConfig::from_json(r#"{ "canvas_size": [0.0, 256.0] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = AppConfig::from_json(
            r#"{ "thickness_presets": [{ "label": "Nope", "value": -1.0 }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_parse_errors() {
        let err = AppConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = AppConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
