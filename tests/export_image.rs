use egui::{Vec2, pos2};
use image::Rgba;
use sticker_sketchpad::export::render_items;
use sticker_sketchpad::{Draw, Drawable, ExportError, Sticker, Stroke, StrokeColor};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[test]
fn test_export_is_scaled() {
    let image = render_items(&[], Vec2::new(256.0, 256.0), 4.0).unwrap();
    assert_eq!(image.dimensions(), (1024, 1024));
    assert!(image.pixels().all(|p| *p == WHITE));
}

#[test]
fn test_export_paints_strokes_at_scale() {
    let mut stroke = Stroke::new(pos2(10.0, 50.0), 2.0, StrokeColor::Black);
    stroke.drag(pos2(90.0, 50.0));
    let items = [Drawable::from(stroke)];

    let image = render_items(&items, Vec2::new(100.0, 100.0), 4.0).unwrap();
    assert_eq!(*image.get_pixel(200, 200), Rgba([0, 0, 0, 255]));
    assert_eq!(*image.get_pixel(200, 100), WHITE);
    // Nothing before the stroke's first point.
    assert_eq!(*image.get_pixel(20, 200), WHITE);
}

#[test]
fn test_export_draws_sticker_glyphs() {
    let items = [Drawable::from(Sticker::new("🍷", pos2(50.0, 50.0), 24.0))];
    let image = render_items(&items, Vec2::new(100.0, 100.0), 2.0).unwrap();

    let inked = (60..140)
        .flat_map(|y| (60..140).map(move |x| (x, y)))
        .filter(|&(x, y)| *image.get_pixel(x, y) != WHITE)
        .count();
    assert!(inked > 0);
}

#[test]
fn test_export_rejects_empty_canvas() {
    let err = render_items(&[], Vec2::new(0.0, 0.0), 4.0).unwrap_err();
    assert!(matches!(err, ExportError::EmptySurface { .. }));
}
