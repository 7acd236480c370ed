use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the app configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Errors raised while rendering or saving an exported image
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Sticker font could not be loaded: {0}")]
    Font(#[from] ab_glyph::InvalidFont),

    #[error("Export surface would be empty ({width}x{height} pixels)")]
    EmptySurface { width: f32, height: f32 },

    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Saving images is not supported on this platform")]
    Unsupported,
}
