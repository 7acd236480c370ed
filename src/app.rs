use egui::{Key, KeyboardShortcut, Modifiers, Rect};

use crate::config::AppConfig;
use crate::export;
use crate::input::CanvasInput;
use crate::palette::{IntentOutcome, PaletteIntent};
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::session::{InputSession, PointerEvent};

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_ALT_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

pub struct SketchApp {
    config: AppConfig,
    session: InputSession,
    renderer: Renderer,
    canvas_input: CanvasInput,
    custom_sticker: String,
    /// Result of the last export, shown in the tools panel
    status: Option<String>,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_config(AppConfig::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        let session = InputSession::new(&config);
        Self {
            session,
            renderer: Renderer::new(),
            canvas_input: CanvasInput::new(Rect::NOTHING),
            custom_sticker: String::new(),
            status: None,
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &InputSession {
        &self.session
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn custom_sticker_mut(&mut self) -> &mut String {
        &mut self.custom_sticker
    }

    /// Apply a tools panel action; returns true when the canvas must repaint.
    pub fn apply_intent(&mut self, intent: PaletteIntent) -> bool {
        log::debug!("palette intent {intent:?}");
        match self.session.apply(intent) {
            IntentOutcome::ExportRequested => {
                self.export();
                false
            }
            outcome => outcome.needs_repaint(),
        }
    }

    pub fn handle_pointer_events(&mut self, events: Vec<PointerEvent>) -> bool {
        let mut changed = false;
        for event in events {
            changed |= self.session.handle_pointer(event);
        }
        changed
    }

    pub(crate) fn canvas_input_mut(&mut self) -> &mut CanvasInput {
        &mut self.canvas_input
    }

    fn export(&mut self) {
        let result = export::export_png(
            &self.config.export_path,
            self.session.history().current(),
            self.config.canvas_size(),
            self.config.export_scale,
        );
        self.status = Some(match result {
            Ok(()) => format!("Saved {}", self.config.export_path.display()),
            Err(err) => {
                log::error!("export failed: {err}");
                format!("Export failed: {err}")
            }
        });
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) -> bool {
        // Redo first: the undo shortcut would also match with Shift held.
        let (redo, undo) = ctx.input_mut(|input| {
            let redo = input.consume_shortcut(&REDO_SHORTCUT)
                || input.consume_shortcut(&REDO_ALT_SHORTCUT);
            let undo = !redo && input.consume_shortcut(&UNDO_SHORTCUT);
            (redo, undo)
        });
        if redo {
            self.apply_intent(PaletteIntent::Redo)
        } else if undo {
            self.apply_intent(PaletteIntent::Undo)
        } else {
            false
        }
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.handle_shortcuts(ctx) {
            ctx.request_repaint();
        }
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
