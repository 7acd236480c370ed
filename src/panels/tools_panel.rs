use egui::{Button, RichText, TextEdit};

use crate::SketchApp;
use crate::palette::{PaletteIntent, StrokeColor};
use crate::session::ToolMode;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    let mut intents = Vec::new();

    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Tools");
            ui.separator();

            let session = app.session();
            let drawing = session.tool() == ToolMode::Draw;

            ui.label("Thickness");
            ui.horizontal(|ui| {
                for preset in &app.config().thickness_presets {
                    let selected = drawing && session.thickness() == preset.value;
                    if ui.selectable_label(selected, &preset.label).clicked() {
                        intents.push(PaletteIntent::SelectThickness(preset.value));
                    }
                }
            });

            ui.label("Color");
            ui.horizontal_wrapped(|ui| {
                for color in StrokeColor::ALL {
                    let swatch = RichText::new("⏺").size(18.0).color(color.to_color32());
                    if ui
                        .selectable_label(session.color() == color, swatch)
                        .on_hover_text(color.name())
                        .clicked()
                    {
                        intents.push(PaletteIntent::SelectColor(color));
                    }
                }
            });

            ui.label("Stickers");
            ui.horizontal_wrapped(|ui| {
                let pending = session.pending_sticker().map(|sticker| sticker.glyph());
                for glyph in session.stickers() {
                    let selected = pending == Some(glyph.as_str());
                    if ui
                        .selectable_label(selected, RichText::new(glyph).size(20.0))
                        .clicked()
                    {
                        intents.push(PaletteIntent::SelectSticker(glyph.clone()));
                    }
                }
            });

            let can_undo = session.history().can_undo();
            let can_redo = session.history().can_redo();
            let undo_len = session.history().len();
            let redo_len = session.history().redone().len();
            let state_name = session.state().name();

            ui.horizontal(|ui| {
                let response = ui.add(
                    TextEdit::singleline(app.custom_sticker_mut())
                        .hint_text("Custom sticker")
                        .desired_width(100.0),
                );
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Add").clicked() || submitted {
                    let glyph = std::mem::take(app.custom_sticker_mut());
                    intents.push(PaletteIntent::CreateCustomSticker(glyph));
                }
            });
            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    intents.push(PaletteIntent::ClearAll);
                }
                if ui.add_enabled(can_undo, Button::new("Undo")).clicked() {
                    intents.push(PaletteIntent::Undo);
                }
                if ui.add_enabled(can_redo, Button::new("Redo")).clicked() {
                    intents.push(PaletteIntent::Redo);
                }
            });
            if ui.button("Export PNG").clicked() {
                intents.push(PaletteIntent::ExportImage);
            }

            ui.separator();
            ui.label(format!("Undo stack size: {undo_len}"));
            ui.label(format!("Redo stack size: {redo_len}"));
            ui.label(format!("State: {state_name}"));
            if let Some(status) = app.status() {
                ui.label(status);
            }
        });

    let mut changed = false;
    for intent in intents {
        changed |= app.apply_intent(intent);
    }
    if changed {
        ctx.request_repaint();
    }
}
