#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod drawable;
pub mod error;
pub mod export;
pub mod history;
pub mod input;
pub mod palette;
pub mod panels;
pub mod renderer;
pub mod session;
pub mod surface;

pub use app::SketchApp;
pub use config::AppConfig;
pub use drawable::{Draw, Drawable, Sticker, Stroke};
pub use error::{ConfigError, ExportError};
pub use history::History;
pub use palette::{IntentOutcome, PaletteIntent, StrokeColor};
pub use renderer::{Preview, PreviewState, Renderer};
pub use session::{InputSession, PointerEvent, SessionState, ToolMode};
pub use surface::Surface;
