use std::path::Path;

use egui::{Color32, Vec2};
use image::RgbaImage;

use crate::drawable::{Draw, Drawable};
use crate::error::ExportError;
use crate::surface::{RasterSurface, Surface};

/// Paint `items` in order onto a white image of `canvas_size * scale` pixels.
///
/// Only committed content is exported; previews never reach the image.
pub fn render_items(
    items: &[Drawable],
    canvas_size: Vec2,
    scale: f32,
) -> Result<RgbaImage, ExportError> {
    let mut surface = RasterSurface::new(canvas_size, scale, Color32::WHITE)?;
    surface.clear(surface.bounds());
    for item in items {
        item.display(&mut surface);
    }
    Ok(surface.into_image())
}

/// Render `items` and write them to `path` as a PNG.
#[cfg(not(target_arch = "wasm32"))]
pub fn export_png(
    path: &Path,
    items: &[Drawable],
    canvas_size: Vec2,
    scale: f32,
) -> Result<(), ExportError> {
    let image = render_items(items, canvas_size, scale)?;
    image.save_with_format(path, image::ImageFormat::Png)?;
    log::info!(
        "exported {} items to {} ({}x{})",
        items.len(),
        path.display(),
        image.width(),
        image.height()
    );
    Ok(())
}

/// The web target has no file system to write to, so this always returns
/// [`ExportError::Unsupported`].
#[cfg(target_arch = "wasm32")]
pub fn export_png(
    _path: &Path,
    _items: &[Drawable],
    _canvas_size: Vec2,
    _scale: f32,
) -> Result<(), ExportError> {
    Err(ExportError::Unsupported)
}
