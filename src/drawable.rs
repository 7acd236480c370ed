use egui::{Color32, Pos2};

use crate::palette::StrokeColor;
use crate::surface::Surface;

/// Half-width of the box a click must land in to grab a sticker.
pub const STICKER_HIT_HALF_WIDTH: f32 = 20.0;
/// Half-height of the box a click must land in to grab a sticker.
pub const STICKER_HIT_HALF_HEIGHT: f32 = 15.0;

/// Shared capability of everything the history can hold
pub trait Draw {
    /// Paint onto `surface`.
    fn display(&self, surface: &mut dyn Surface);

    /// Continue a pointer drag at `pos`.
    fn drag(&mut self, pos: Pos2);
}

/// Freehand polyline
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    thickness: f32,
    color: StrokeColor,
}

impl Stroke {
    /// Start a stroke at `start`. A stroke always has at least one point.
    pub fn new(start: Pos2, thickness: f32, color: StrokeColor) -> Self {
        Self {
            points: vec![start],
            thickness,
            color,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> StrokeColor {
        self.color
    }
}

impl Draw for Stroke {
    fn display(&self, surface: &mut dyn Surface) {
        let Some((first, _)) = self.points.split_first() else {
            return;
        };
        surface.set_line_width(self.thickness);
        surface.set_stroke_color(self.color.to_color32());
        surface.begin_path();
        surface.move_to(*first);
        for point in &self.points {
            surface.line_to(*point);
        }
        surface.stroke();
    }

    fn drag(&mut self, pos: Pos2) {
        self.points.push(pos);
    }
}

/// A glyph placed on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    glyph: String,
    position: Pos2,
    size: f32,
}

impl Sticker {
    pub fn new(glyph: impl Into<String>, position: Pos2, size: f32) -> Self {
        Self {
            glyph: glyph.into(),
            position,
            size,
        }
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// True when `pos` is inside the fixed box around the sticker, edges included.
    ///
    /// The box does not follow the glyph's real extent.
    pub fn is_clicked(&self, pos: Pos2) -> bool {
        (pos.x - self.position.x).abs() <= STICKER_HIT_HALF_WIDTH
            && (pos.y - self.position.y).abs() <= STICKER_HIT_HALF_HEIGHT
    }
}

impl Draw for Sticker {
    fn display(&self, surface: &mut dyn Surface) {
        surface.set_fill_style(Color32::BLACK);
        surface.fill_text(&self.glyph, self.position, self.size);
    }

    fn drag(&mut self, pos: Pos2) {
        self.position = pos;
    }
}

/// Recorded content, rendered back-to-front in commit order
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Drawable {
    pub fn element_type(&self) -> &'static str {
        match self {
            Self::Stroke(_) => "stroke",
            Self::Sticker(_) => "sticker",
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Self::Sticker(sticker) => Some(sticker),
            Self::Stroke(_) => None,
        }
    }

    pub fn as_sticker_mut(&mut self) -> Option<&mut Sticker> {
        match self {
            Self::Sticker(sticker) => Some(sticker),
            Self::Stroke(_) => None,
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Stroke(stroke) => Some(stroke),
            Self::Sticker(_) => None,
        }
    }

    /// Only stickers can be grabbed; strokes never report a hit.
    pub fn hit_test(&self, pos: Pos2) -> bool {
        self.as_sticker().is_some_and(|sticker| sticker.is_clicked(pos))
    }
}

impl Draw for Drawable {
    fn display(&self, surface: &mut dyn Surface) {
        match self {
            Self::Stroke(stroke) => stroke.display(surface),
            Self::Sticker(sticker) => sticker.display(surface),
        }
    }

    fn drag(&mut self, pos: Pos2) {
        match self {
            Self::Stroke(stroke) => stroke.drag(pos),
            Self::Sticker(sticker) => sticker.drag(pos),
        }
    }
}

impl From<Stroke> for Drawable {
    fn from(stroke: Stroke) -> Self {
        Self::Stroke(stroke)
    }
}

impl From<Sticker> for Drawable {
    fn from(sticker: Sticker) -> Self {
        Self::Sticker(sticker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceOp};
    use egui::{Vec2, pos2};

    #[test]
    fn test_stroke_drag_appends_every_point() {
        let mut stroke = Stroke::new(pos2(1.0, 1.0), 2.0, StrokeColor::Red);
        stroke.drag(pos2(2.0, 2.0));
        stroke.drag(pos2(2.0, 2.0));
        assert_eq!(stroke.points().len(), 3);
        assert_eq!(stroke.points()[2], pos2(2.0, 2.0));
    }

    #[test]
    fn test_sticker_drag_is_absolute() {
        let mut sticker = Sticker::new("🍷", pos2(10.0, 10.0), 24.0);
        sticker.drag(pos2(50.0, 60.0));
        sticker.drag(pos2(70.0, 80.0));
        assert_eq!(sticker.position(), pos2(70.0, 80.0));
    }

    #[test]
    fn test_sticker_hit_box_edges() {
        let sticker = Sticker::new("🍷", pos2(100.0, 100.0), 24.0);
        assert!(sticker.is_clicked(pos2(100.0, 100.0)));
        assert!(sticker.is_clicked(pos2(120.0, 115.0)));
        assert!(sticker.is_clicked(pos2(80.0, 85.0)));
        assert!(!sticker.is_clicked(pos2(120.5, 100.0)));
        assert!(!sticker.is_clicked(pos2(100.0, 115.5)));
        assert!(!sticker.is_clicked(pos2(79.0, 100.0)));
    }

    #[test]
    fn test_strokes_never_hit() {
        let stroke: Drawable = Stroke::new(pos2(5.0, 5.0), 10.0, StrokeColor::Black).into();
        assert!(!stroke.hit_test(pos2(5.0, 5.0)));
        assert!(stroke.as_sticker().is_none());
    }

    #[test]
    fn test_stroke_display_ops() {
        let mut stroke = Stroke::new(pos2(0.0, 0.0), 3.0, StrokeColor::Blue);
        stroke.drag(pos2(4.0, 4.0));
        let mut surface = RecordingSurface::new(Vec2::splat(10.0));
        stroke.display(&mut surface);

        assert_eq!(
            surface.ops(),
            &[
                SurfaceOp::SetLineWidth(3.0),
                SurfaceOp::SetStrokeColor(StrokeColor::Blue.to_color32()),
                SurfaceOp::BeginPath,
                SurfaceOp::MoveTo(pos2(0.0, 0.0)),
                SurfaceOp::LineTo(pos2(0.0, 0.0)),
                SurfaceOp::LineTo(pos2(4.0, 4.0)),
                SurfaceOp::Stroke,
            ]
        );
    }
}
