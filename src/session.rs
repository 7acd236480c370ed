use egui::Pos2;

use crate::config::AppConfig;
use crate::drawable::{Draw, Drawable, Sticker, Stroke};
use crate::history::History;
use crate::palette::{IntentOutcome, PaletteIntent, StrokeColor};
use crate::renderer::{Preview, PreviewState};

/// Which kind of item a pointer press creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    #[default]
    Draw,
    Sticker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    /// Pointer is down and extending the last committed stroke
    Drawing,
    /// A sticker was picked from the palette and follows the cursor until dropped
    PlacingSticker,
    /// Pointer went down on the committed sticker at this index
    DraggingExistingSticker(usize),
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Drawing => "Drawing",
            Self::PlacingSticker => "PlacingSticker",
            Self::DraggingExistingSticker(_) => "DraggingExistingSticker",
        }
    }
}

/// Surface-local pointer input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Pos2),
    Move(Pos2),
    Up(Pos2),
    /// Cursor left the drawing surface
    Leave,
}

/// All mutable drawing state: history, cursor, tool settings and stickers.
///
/// Every handler returns whether the surface needs a repaint.
#[derive(Debug, Clone)]
pub struct InputSession {
    history: History,
    state: SessionState,
    tool: ToolMode,
    active: bool,
    cursor: Pos2,
    hovering: bool,
    thickness: f32,
    color: StrokeColor,
    sticker_size: f32,
    stickers: Vec<String>,
    pending_sticker: Option<Sticker>,
}

impl Default for InputSession {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl InputSession {
    pub fn new(config: &AppConfig) -> Self {
        let thickness = config
            .thickness_presets
            .first()
            .map_or(AppConfig::DEFAULT_THICKNESS, |preset| preset.value);
        Self {
            history: History::new(),
            state: SessionState::Idle,
            tool: ToolMode::Draw,
            active: false,
            cursor: Pos2::ZERO,
            hovering: false,
            thickness,
            color: config.default_color,
            sticker_size: config.sticker_size,
            stickers: config.stickers.clone(),
            pending_sticker: None,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn tool(&self) -> ToolMode {
        self.tool
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn cursor(&self) -> Pos2 {
        self.cursor
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> StrokeColor {
        self.color
    }

    pub fn stickers(&self) -> &[String] {
        &self.stickers
    }

    pub fn pending_sticker(&self) -> Option<&Sticker> {
        self.pending_sticker.as_ref()
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down(pos) => self.pointer_down(pos),
            PointerEvent::Move(pos) => self.pointer_move(pos),
            PointerEvent::Up(pos) => self.pointer_up(pos),
            PointerEvent::Leave => self.pointer_leave(),
        }
    }

    pub fn pointer_down(&mut self, pos: Pos2) -> bool {
        self.cursor = pos;
        self.hovering = true;
        if !matches!(self.state, SessionState::Idle | SessionState::PlacingSticker) {
            log::warn!("pointer down while {}; ignoring", self.state.name());
            return false;
        }
        self.active = true;

        if let Some(index) = self.history.hit_sticker(pos) {
            // Grabbing a placed sticker abandons the one waiting to be dropped.
            self.pending_sticker = None;
            self.tool = ToolMode::Draw;
            self.transition(SessionState::DraggingExistingSticker(index));
            return true;
        }

        match self.tool {
            ToolMode::Draw => {
                // Committed on press so a single click can still be undone.
                self.history.commit(Stroke::new(pos, self.thickness, self.color));
                self.transition(SessionState::Drawing);
                true
            }
            ToolMode::Sticker => match self.pending_sticker.take() {
                Some(mut sticker) => {
                    sticker.drag(pos);
                    self.history.commit(sticker);
                    self.tool = ToolMode::Draw;
                    self.transition(SessionState::Idle);
                    true
                }
                None => {
                    self.tool = ToolMode::Draw;
                    self.transition(SessionState::Idle);
                    false
                }
            },
        }
    }

    pub fn pointer_move(&mut self, pos: Pos2) -> bool {
        self.cursor = pos;
        self.hovering = true;
        match self.state {
            SessionState::Drawing => {
                if let Some(Drawable::Stroke(stroke)) = self.history.last_mut() {
                    stroke.drag(pos);
                }
                true
            }
            SessionState::DraggingExistingSticker(index) => {
                if let Some(sticker) = self.history.get_mut(index).and_then(Drawable::as_sticker_mut)
                {
                    sticker.drag(pos);
                }
                true
            }
            SessionState::PlacingSticker => {
                if let Some(sticker) = &mut self.pending_sticker {
                    sticker.drag(pos);
                }
                true
            }
            // Only the preview moves.
            SessionState::Idle => self.tool == ToolMode::Draw,
        }
    }

    pub fn pointer_up(&mut self, pos: Pos2) -> bool {
        self.cursor = pos;
        let was_active = self.active;
        self.active = false;
        if matches!(
            self.state,
            SessionState::Drawing | SessionState::DraggingExistingSticker(_)
        ) {
            self.transition(SessionState::Idle);
        }
        was_active
    }

    pub fn pointer_leave(&mut self) -> bool {
        let was_hovering = self.hovering;
        self.hovering = false;
        was_hovering
    }

    pub fn apply(&mut self, intent: PaletteIntent) -> IntentOutcome {
        match intent {
            PaletteIntent::SelectThickness(value) => self.select_thickness(value),
            PaletteIntent::SelectColor(color) => self.select_color(color),
            PaletteIntent::SelectSticker(glyph) => self.select_sticker(glyph),
            PaletteIntent::ClearAll => self.clear_all(),
            PaletteIntent::Undo => changed(self.undo()),
            PaletteIntent::Redo => changed(self.redo()),
            PaletteIntent::ExportImage => IntentOutcome::ExportRequested,
            PaletteIntent::CreateCustomSticker(glyph) => self.create_custom_sticker(&glyph),
        }
    }

    pub fn select_thickness(&mut self, value: f32) -> IntentOutcome {
        if !(value.is_finite() && value > 0.0) {
            log::warn!("ignoring stroke thickness {value}");
            return IntentOutcome::Unchanged;
        }
        self.thickness = value;
        self.tool = ToolMode::Draw;
        self.pending_sticker = None;
        if self.state == SessionState::PlacingSticker {
            self.transition(SessionState::Idle);
        }
        IntentOutcome::Changed
    }

    pub fn select_color(&mut self, color: StrokeColor) -> IntentOutcome {
        self.color = color;
        IntentOutcome::Changed
    }

    /// Pick `glyph` as the next sticker, shown at the last known cursor.
    pub fn select_sticker(&mut self, glyph: impl Into<String>) -> IntentOutcome {
        if self.active {
            log::warn!("sticker selected while {}; ignoring", self.state.name());
            return IntentOutcome::Unchanged;
        }
        self.pending_sticker = Some(Sticker::new(glyph, self.cursor, self.sticker_size));
        self.tool = ToolMode::Sticker;
        self.transition(SessionState::PlacingSticker);
        IntentOutcome::Changed
    }

    /// Add a glyph to the sticker palette and select it.
    pub fn create_custom_sticker(&mut self, glyph: &str) -> IntentOutcome {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            log::warn!("ignoring empty custom sticker");
            return IntentOutcome::Unchanged;
        }
        if self.active {
            log::warn!("custom sticker created while {}; ignoring", self.state.name());
            return IntentOutcome::Unchanged;
        }
        if !self.stickers.iter().any(|existing| existing == glyph) {
            log::info!("custom sticker {glyph} added");
            self.stickers.push(glyph.to_owned());
        }
        self.select_sticker(glyph)
    }

    pub fn clear_all(&mut self) -> IntentOutcome {
        log::info!("clearing {} items", self.history.len());
        self.history.clear();
        self.end_pointer_action();
        IntentOutcome::Changed
    }

    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo();
        if changed {
            self.end_pointer_action();
        }
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo();
        if changed {
            self.end_pointer_action();
        }
        changed
    }

    /// The overlay to draw on the next repaint.
    pub fn preview_state(&self) -> PreviewState<'_> {
        let preview = if !self.hovering {
            None
        } else if let Some(sticker) = &self.pending_sticker {
            Some(Preview::Sticker(sticker))
        } else if self.tool == ToolMode::Draw {
            Some(Preview::Tool {
                center: self.cursor,
                diameter: self.thickness,
                color: self.color.to_color32(),
            })
        } else {
            None
        };
        PreviewState {
            pointer_active: self.active,
            preview,
        }
    }

    /// Stop drawing or dragging so no index into the history outlives an edit.
    fn end_pointer_action(&mut self) {
        if matches!(
            self.state,
            SessionState::Drawing | SessionState::DraggingExistingSticker(_)
        ) {
            self.transition(SessionState::Idle);
        }
    }

    fn transition(&mut self, next: SessionState) {
        if self.state != next {
            log::debug!("session {} -> {}", self.state.name(), next.name());
        }
        self.state = next;
    }
}

fn changed(changed: bool) -> IntentOutcome {
    if changed {
        IntentOutcome::Changed
    } else {
        IntentOutcome::Unchanged
    }
}
