use ab_glyph::{Font, FontRef, PxScale, ScaleFont, point};
use egui::{Color32, Pos2, Rect, Vec2};
use image::{Rgba, RgbaImage};

use super::Surface;
use crate::error::ExportError;

/// Offscreen surface rasterizing into an RGBA image.
///
/// Every coordinate is multiplied by `scale`, so a 256x256 canvas exported
/// at scale 4 fills a 1024x1024 image with the same layout.
pub struct RasterSurface {
    image: RgbaImage,
    size: Vec2,
    scale: f32,
    background: Color32,
    font: FontRef<'static>,
    line_width: f32,
    stroke_color: Color32,
    fill_style: Color32,
    subpaths: Vec<Vec<Pos2>>,
}

impl RasterSurface {
    pub fn new(size: Vec2, scale: f32, background: Color32) -> Result<Self, ExportError> {
        let width = (size.x * scale).round();
        let height = (size.y * scale).round();
        if !(width >= 1.0 && height >= 1.0) {
            return Err(ExportError::EmptySurface { width, height });
        }

        let font = FontRef::try_from_slice(epaint_default_fonts::NOTO_EMOJI_REGULAR)?;
        let mut image = RgbaImage::new(width as u32, height as u32);
        let [r, g, b, a] = background.to_srgba_unmultiplied();
        for pixel in image.pixels_mut() {
            *pixel = Rgba([r, g, b, a]);
        }

        Ok(Self {
            image,
            size,
            scale,
            background,
            font,
            line_width: 1.0,
            stroke_color: Color32::BLACK,
            fill_style: Color32::BLACK,
            subpaths: Vec::new(),
        })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn to_pixels(&self, pos: Pos2) -> Pos2 {
        Pos2::new(pos.x * self.scale, pos.y * self.scale)
    }

    /// Source-over blend of `color` at `coverage` onto the pixel at (x, y).
    fn blend(&mut self, x: i64, y: i64, color: Color32, coverage: f32) {
        if x < 0 || y < 0 || x >= i64::from(self.image.width()) || y >= i64::from(self.image.height())
        {
            return;
        }
        let [sr, sg, sb, sa] = color.to_srgba_unmultiplied();
        let alpha = (f32::from(sa) / 255.0) * coverage.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }

        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        let mix = |s: u8, d: u8| (f32::from(s) * alpha + f32::from(d) * (1.0 - alpha)).round() as u8;
        let out_alpha = alpha + (f32::from(dst[3]) / 255.0) * (1.0 - alpha);
        *dst = Rgba([
            mix(sr, dst[0]),
            mix(sg, dst[1]),
            mix(sb, dst[2]),
            (out_alpha * 255.0).round() as u8,
        ]);
    }

    /// Fill every pixel within `radius` of the segment `a`-`b` (pixel space).
    fn fill_capsule(&mut self, a: Pos2, b: Pos2, radius: f32, color: Color32) {
        let radius = radius.max(0.5);
        let min_x = (a.x.min(b.x) - radius).floor() as i64;
        let max_x = (a.x.max(b.x) + radius).ceil() as i64;
        let min_y = (a.y.min(b.y) - radius).floor() as i64;
        let max_y = (a.y.max(b.y) + radius).ceil() as i64;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                let distance = distance_to_segment(center, a, b);
                // One pixel of falloff keeps edges from stair-stepping.
                let coverage = radius + 0.5 - distance;
                if coverage > 0.0 {
                    self.blend(x, y, color, coverage);
                }
            }
        }
    }
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

impl Surface for RasterSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self, region: Rect) {
        let region = region.intersect(self.bounds());
        if !region.is_positive() {
            return;
        }
        let [r, g, b, a] = self.background.to_srgba_unmultiplied();
        let min = self.to_pixels(region.min);
        let max = self.to_pixels(region.max);
        let (width, height) = self.image.dimensions();
        for y in (min.y.floor() as u32)..(max.y.ceil() as u32).min(height) {
            for x in (min.x.floor() as u32)..(max.x.ceil() as u32).min(width) {
                self.image.put_pixel(x, y, Rgba([r, g, b, a]));
            }
        }
    }

    fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    fn move_to(&mut self, pos: Pos2) {
        let pos = self.to_pixels(pos);
        self.subpaths.push(vec![pos]);
    }

    fn line_to(&mut self, pos: Pos2) {
        let pos = self.to_pixels(pos);
        match self.subpaths.last_mut() {
            Some(subpath) => subpath.push(pos),
            None => self.subpaths.push(vec![pos]),
        }
    }

    fn stroke(&mut self) {
        let radius = self.line_width * self.scale / 2.0;
        let color = self.stroke_color;
        let subpaths = std::mem::take(&mut self.subpaths);
        for subpath in &subpaths {
            match subpath.as_slice() {
                [] => {}
                [only] => self.fill_capsule(*only, *only, radius, color),
                points => {
                    for pair in points.windows(2) {
                        self.fill_capsule(pair[0], pair[1], radius, color);
                    }
                }
            }
        }
        self.subpaths = subpaths;
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
        let center = self.to_pixels(center);
        self.fill_capsule(center, center, radius * self.scale, self.fill_style);
    }

    fn fill_text(&mut self, glyph: &str, pos: Pos2, size: f32) {
        let px = PxScale::from(size * self.scale);
        let scaled = self.font.as_scaled(px);

        let width: f32 = glyph.chars().map(|ch| scaled.h_advance(self.font.glyph_id(ch))).sum();
        let center = self.to_pixels(pos);
        let baseline = center.y + (scaled.ascent() + scaled.descent()) / 2.0;
        let mut caret = center.x - width / 2.0;

        let color = self.fill_style;
        let mut coverage = Vec::new();
        for ch in glyph.chars() {
            let id = self.font.glyph_id(ch);
            let positioned = id.with_scale_and_position(px, point(caret, baseline));
            caret += scaled.h_advance(id);
            let Some(outlined) = self.font.outline_glyph(positioned) else {
                log::debug!("no outline for {ch:?} in the sticker font");
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, c| {
                coverage.push((
                    bounds.min.x as i64 + i64::from(gx),
                    bounds.min.y as i64 + i64::from(gy),
                    c,
                ));
            });
        }
        for (x, y, c) in coverage {
            self.blend(x, y, color, c);
        }
    }
}
