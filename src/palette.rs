use egui::Color32;
use serde::{Deserialize, Serialize};

/// Colors a stroke can be drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeColor {
    #[default]
    Black,
    Red,
    Orange,
    Green,
    Blue,
    Purple,
}

impl StrokeColor {
    pub const ALL: [StrokeColor; 6] = [
        StrokeColor::Black,
        StrokeColor::Red,
        StrokeColor::Orange,
        StrokeColor::Green,
        StrokeColor::Blue,
        StrokeColor::Purple,
    ];

    pub fn to_color32(self) -> Color32 {
        match self {
            Self::Black => Color32::BLACK,
            Self::Red => Color32::from_rgb(220, 40, 40),
            Self::Orange => Color32::from_rgb(245, 140, 20),
            Self::Green => Color32::from_rgb(40, 160, 70),
            Self::Blue => Color32::from_rgb(40, 90, 220),
            Self::Purple => Color32::from_rgb(140, 60, 190),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::Red => "Red",
            Self::Orange => "Orange",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Purple => "Purple",
        }
    }
}

/// A named thickness button in the tools panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThicknessPreset {
    pub label: String,
    pub value: f32,
}

impl ThicknessPreset {
    pub fn new(label: &str, value: f32) -> Self {
        Self {
            label: label.to_owned(),
            value,
        }
    }
}

/// Discrete actions emitted by the tools panel
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteIntent {
    SelectThickness(f32),
    SelectColor(StrokeColor),
    SelectSticker(String),
    ClearAll,
    Undo,
    Redo,
    ExportImage,
    CreateCustomSticker(String),
}

/// What applying a [`PaletteIntent`] did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentOutcome {
    /// Visible state changed; repaint.
    Changed,
    /// Nothing changed (e.g. undo with an empty history).
    Unchanged,
    /// The host should export the committed items.
    ExportRequested,
}

impl IntentOutcome {
    pub fn needs_repaint(self) -> bool {
        matches!(self, Self::Changed)
    }
}
