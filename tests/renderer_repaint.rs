use egui::{Vec2, pos2};
use sticker_sketchpad::surface::{RecordingSurface, SurfaceOp};
use sticker_sketchpad::{
    History, InputSession, PaletteIntent, PointerEvent, Renderer, Sticker, Stroke, StrokeColor,
    Surface,
};

fn surface() -> RecordingSurface {
    RecordingSurface::new(Vec2::new(256.0, 256.0))
}

#[test]
fn test_items_painted_in_commit_order() {
    let mut history = History::new();
    history.commit(Sticker::new("🍷", pos2(10.0, 10.0), 24.0));
    history.commit(Stroke::new(pos2(0.0, 0.0), 2.0, StrokeColor::Red));
    history.commit(Sticker::new("🍕", pos2(20.0, 20.0), 24.0));

    let mut surface = surface();
    Renderer::new().repaint(&mut surface, &history, Default::default());

    assert_eq!(surface.ops()[0], SurfaceOp::Clear(surface.bounds()));
    assert_eq!(
        surface.glyphs(),
        vec![("🍷", pos2(10.0, 10.0)), ("🍕", pos2(20.0, 20.0))]
    );
    let stroke_at = surface.ops().iter().position(|op| *op == SurfaceOp::Stroke).unwrap();
    let second_glyph_at = surface
        .ops()
        .iter()
        .rposition(|op| matches!(op, SurfaceOp::FillText { .. }))
        .unwrap();
    assert!(stroke_at < second_glyph_at);
}

#[test]
fn test_repaint_reflects_undo() {
    let mut session = InputSession::default();
    session.handle_pointer(PointerEvent::Down(pos2(1.0, 1.0)));
    session.handle_pointer(PointerEvent::Move(pos2(3.0, 3.0)));
    session.handle_pointer(PointerEvent::Up(pos2(3.0, 3.0)));
    session.handle_pointer(PointerEvent::Leave);

    let renderer = Renderer::new();
    let mut surface = surface();
    renderer.repaint(&mut surface, session.history(), session.preview_state());
    assert_eq!(surface.stroke_count(), 1);

    session.apply(PaletteIntent::Undo);
    surface.take_ops();
    renderer.repaint(&mut surface, session.history(), session.preview_state());
    assert_eq!(surface.ops(), &[SurfaceOp::Clear(surface.bounds())]);
}

#[test]
fn test_sticker_preview_drawn_instead_of_tool_circle() {
    let mut session = InputSession::default();
    session.handle_pointer(PointerEvent::Move(pos2(40.0, 40.0)));
    session.apply(PaletteIntent::SelectSticker("🎉".to_owned()));

    let mut surface = surface();
    Renderer::new().repaint(&mut surface, session.history(), session.preview_state());

    assert_eq!(surface.glyphs(), vec![("🎉", pos2(40.0, 40.0))]);
    assert!(
        !surface
            .ops()
            .iter()
            .any(|op| matches!(op, SurfaceOp::FillArc { .. }))
    );
}

#[test]
fn test_tool_preview_uses_thickness() {
    let mut session = InputSession::default();
    session.apply(PaletteIntent::SelectThickness(10.0));
    session.handle_pointer(PointerEvent::Move(pos2(40.0, 40.0)));

    let mut surface = surface();
    Renderer::new().repaint(&mut surface, session.history(), session.preview_state());

    assert_eq!(
        surface.ops().last(),
        Some(&SurfaceOp::FillArc {
            center: pos2(40.0, 40.0),
            radius: 5.0,
        })
    );
}
