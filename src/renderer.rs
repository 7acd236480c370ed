use egui::{Color32, Pos2};

use crate::drawable::{Draw, Sticker};
use crate::history::History;
use crate::surface::Surface;

/// Ephemeral overlay shown at the cursor; never stored in the history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preview<'a> {
    /// Circle the size of the brush under the cursor.
    Tool {
        center: Pos2,
        diameter: f32,
        color: Color32,
    },
    /// The sticker picked from the palette, following the cursor.
    Sticker(&'a Sticker),
}

/// Preview to overlay, plus whether the pointer is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PreviewState<'a> {
    pub pointer_active: bool,
    pub preview: Option<Preview<'a>>,
}

#[derive(Debug, Clone)]
pub struct Renderer {
    /// Alpha applied to the tool preview circle
    preview_alpha: u8,
}

impl Default for Renderer {
    fn default() -> Self {
        Self { preview_alpha: 160 }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preview_alpha(preview_alpha: u8) -> Self {
        Self { preview_alpha }
    }

    /// Clear `surface` and paint the committed items, then at most one preview.
    ///
    /// Items are painted in commit order so later items cover earlier ones.
    /// Previews are skipped while the pointer is pressed.
    pub fn repaint(&self, surface: &mut dyn Surface, history: &History, preview: PreviewState<'_>) {
        surface.clear(surface.bounds());

        for item in history.current() {
            item.display(surface);
        }

        if preview.pointer_active {
            return;
        }
        match preview.preview {
            Some(Preview::Tool {
                center,
                diameter,
                color,
            }) => {
                let [r, g, b, _] = color.to_srgba_unmultiplied();
                surface.set_fill_style(Color32::from_rgba_unmultiplied(r, g, b, self.preview_alpha));
                surface.fill_arc(center, diameter / 2.0);
            }
            Some(Preview::Sticker(sticker)) => sticker.display(surface),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawable::Stroke;
    use crate::palette::StrokeColor;
    use crate::surface::{RecordingSurface, SurfaceOp};
    use egui::{Vec2, pos2};

    #[test]
    fn test_repaint_clears_first() {
        let renderer = Renderer::new();
        let mut surface = RecordingSurface::new(Vec2::new(256.0, 256.0));
        renderer.repaint(&mut surface, &History::new(), PreviewState::default());

        assert_eq!(
            surface.ops(),
            &[SurfaceOp::Clear(surface.bounds())]
        );
    }

    #[test]
    fn test_tool_preview_circle() {
        let renderer = Renderer::with_preview_alpha(255);
        let mut surface = RecordingSurface::new(Vec2::new(256.0, 256.0));
        let preview = PreviewState {
            pointer_active: false,
            preview: Some(Preview::Tool {
                center: pos2(10.0, 20.0),
                diameter: 6.0,
                color: Color32::RED,
            }),
        };
        renderer.repaint(&mut surface, &History::new(), preview);

        assert_eq!(
            surface.ops().last(),
            Some(&SurfaceOp::FillArc {
                center: pos2(10.0, 20.0),
                radius: 3.0,
            })
        );
    }

    #[test]
    fn test_preview_hidden_while_pressed() {
        let renderer = Renderer::new();
        let mut history = History::new();
        history.commit(Stroke::new(pos2(1.0, 1.0), 2.0, StrokeColor::Black));
        let sticker = Sticker::new("🍷", pos2(40.0, 40.0), 24.0);
        let mut surface = RecordingSurface::new(Vec2::new(256.0, 256.0));
        let preview = PreviewState {
            pointer_active: true,
            preview: Some(Preview::Sticker(&sticker)),
        };
        renderer.repaint(&mut surface, &history, preview);

        assert!(surface.glyphs().is_empty());
        assert_eq!(surface.stroke_count(), 1);
    }
}
