use egui::{Color32, Pos2, Rect, Vec2};

mod painter;
mod raster;
mod recording;

pub use painter::PainterSurface;
pub use raster::RasterSurface;
pub use recording::{RecordingSurface, SurfaceOp};

/// A 2D drawing target in surface-local coordinates.
///
/// The operations mirror an immediate path API: a path is built with
/// `begin_path`/`move_to`/`line_to` and painted with `stroke` using the
/// current line width and stroke color. Fills use the current fill style.
pub trait Surface {
    /// Logical size of the surface, before any scaling the backend applies.
    fn size(&self) -> Vec2;

    /// Reset `region` to the background.
    fn clear(&mut self, region: Rect);

    /// Discard the current path and start a new one.
    fn begin_path(&mut self);

    /// Start a new subpath at `pos`.
    fn move_to(&mut self, pos: Pos2);

    /// Extend the current subpath to `pos`.
    fn line_to(&mut self, pos: Pos2);

    /// Paint the current path with the line width and stroke color.
    fn stroke(&mut self);

    fn set_line_width(&mut self, width: f32);

    fn set_stroke_color(&mut self, color: Color32);

    fn set_fill_style(&mut self, color: Color32);

    /// Fill a full arc (a disc) of `radius` around `center`.
    fn fill_arc(&mut self, center: Pos2, radius: f32);

    /// Draw `glyph` centered on `pos` at font size `size`, with the fill style.
    fn fill_text(&mut self, glyph: &str, pos: Pos2, size: f32);

    /// The whole surface as a rect anchored at the origin.
    fn bounds(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.size())
    }
}
