use egui::{Color32, Pos2, Rect, Vec2};

use super::Surface;

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Clear(Rect),
    BeginPath,
    MoveTo(Pos2),
    LineTo(Pos2),
    Stroke,
    SetLineWidth(f32),
    SetStrokeColor(Color32),
    SetFillStyle(Color32),
    FillArc { center: Pos2, radius: f32 },
    FillText { glyph: String, pos: Pos2, size: f32 },
}

/// Surface that paints nothing and keeps a log of every operation.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Drain the log, leaving the surface empty for the next repaint.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    /// Number of `Stroke` operations, i.e. painted paths.
    pub fn stroke_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, SurfaceOp::Stroke)).count()
    }

    /// Glyphs drawn with `fill_text`, in order.
    pub fn glyphs(&self) -> Vec<(&str, Pos2)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::FillText { glyph, pos, .. } => Some((glyph.as_str(), *pos)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self, region: Rect) {
        self.ops.push(SurfaceOp::Clear(region));
    }

    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, pos: Pos2) {
        self.ops.push(SurfaceOp::MoveTo(pos));
    }

    fn line_to(&mut self, pos: Pos2) {
        self.ops.push(SurfaceOp::LineTo(pos));
    }

    fn stroke(&mut self) {
        self.ops.push(SurfaceOp::Stroke);
    }

    fn set_line_width(&mut self, width: f32) {
        self.ops.push(SurfaceOp::SetLineWidth(width));
    }

    fn set_stroke_color(&mut self, color: Color32) {
        self.ops.push(SurfaceOp::SetStrokeColor(color));
    }

    fn set_fill_style(&mut self, color: Color32) {
        self.ops.push(SurfaceOp::SetFillStyle(color));
    }

    fn fill_arc(&mut self, center: Pos2, radius: f32) {
        self.ops.push(SurfaceOp::FillArc { center, radius });
    }

    fn fill_text(&mut self, glyph: &str, pos: Pos2, size: f32) {
        self.ops.push(SurfaceOp::FillText {
            glyph: glyph.to_owned(),
            pos,
            size,
        });
    }
}
