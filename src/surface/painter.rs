use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2};

use super::Surface;

/// Surface backed by an egui painter for the live canvas.
///
/// Surface-local coordinates are offset by the canvas rect's top-left corner.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    canvas: Rect,
    background: Color32,
    line_width: f32,
    stroke_color: Color32,
    fill_style: Color32,
    subpaths: Vec<Vec<Pos2>>,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, canvas: Rect, background: Color32) -> Self {
        Self {
            painter,
            canvas,
            background,
            line_width: 1.0,
            stroke_color: Color32::BLACK,
            fill_style: Color32::BLACK,
            subpaths: Vec::new(),
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.canvas.min + pos.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn size(&self) -> Vec2 {
        self.canvas.size()
    }

    fn clear(&mut self, region: Rect) {
        let screen = region.translate(self.canvas.min.to_vec2());
        self.painter
            .rect_filled(screen.intersect(self.canvas), 0.0, self.background);
    }

    fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    fn move_to(&mut self, pos: Pos2) {
        let pos = self.to_screen(pos);
        self.subpaths.push(vec![pos]);
    }

    fn line_to(&mut self, pos: Pos2) {
        let pos = self.to_screen(pos);
        match self.subpaths.last_mut() {
            Some(subpath) => subpath.push(pos),
            None => self.subpaths.push(vec![pos]),
        }
    }

    fn stroke(&mut self) {
        let stroke = EguiStroke::new(self.line_width, self.stroke_color);
        for subpath in &self.subpaths {
            // A zero-length path still leaves a dot where the pointer went down.
            if subpath.len() < 2 || subpath.windows(2).all(|pair| pair[0] == pair[1]) {
                self.painter
                    .circle_filled(subpath[0], self.line_width / 2.0, self.stroke_color);
            } else {
                self.painter.add(Shape::line(subpath.clone(), stroke));
            }
        }
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn set_stroke_color(&mut self, color: Color32) {
        self.stroke_color = color;
    }

    fn set_fill_style(&mut self, color: Color32) {
        self.fill_style = color;
    }

    fn fill_arc(&mut self, center: Pos2, radius: f32) {
        self.painter
            .circle_filled(self.to_screen(center), radius, self.fill_style);
    }

    fn fill_text(&mut self, glyph: &str, pos: Pos2, size: f32) {
        self.painter.text(
            self.to_screen(pos),
            Align2::CENTER_CENTER,
            glyph,
            FontId::proportional(size),
            self.fill_style,
        );
    }
}
