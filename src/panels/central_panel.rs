use egui::Color32;

use crate::SketchApp;
use crate::surface::PainterSurface;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Sticker Sketchpad");

        let (response, painter) =
            ui.allocate_painter(app.config().canvas_size(), egui::Sense::drag());
        let canvas_rect = response.rect;

        // Handle input
        app.canvas_input_mut().set_canvas_rect(canvas_rect);
        let events = app.canvas_input_mut().process_input(ctx);
        if app.handle_pointer_events(events) {
            ctx.request_repaint();
        }

        // Render the canvas
        let mut surface = PainterSurface::new(&painter, canvas_rect, Color32::WHITE);
        app.renderer()
            .repaint(&mut surface, app.session().history(), app.session().preview_state());
    });
}
