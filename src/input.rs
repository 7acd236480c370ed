use egui::{Context, PointerButton, Pos2, Rect};

use crate::session::PointerEvent;

/// Converts egui pointer input into surface-local [`PointerEvent`]s.
///
/// Presses only count inside the canvas. Once pressed, moves and the release
/// are reported wherever the pointer goes, like a captured mouse.
#[derive(Debug, Clone)]
pub struct CanvasInput {
    canvas_rect: Rect,
    last_pointer_pos: Option<Pos2>,
    pressed: bool,
    inside: bool,
}

impl CanvasInput {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pointer_pos: None,
            pressed: false,
            inside: false,
        }
    }

    /// Update the canvas rectangle (e.g. if the window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_local(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Read this frame's pointer input and produce events in arrival order
    pub fn process_input(&mut self, ctx: &Context) -> Vec<PointerEvent> {
        let (hover, pressed, released) = ctx.input(|input| {
            (
                input.pointer.hover_pos(),
                input.pointer.button_pressed(PointerButton::Primary),
                input.pointer.button_released(PointerButton::Primary),
            )
        });
        self.translate(hover, pressed, released)
    }

    /// Event translation for one frame of pointer state
    pub fn translate(
        &mut self,
        hover: Option<Pos2>,
        pressed: bool,
        released: bool,
    ) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let pos = hover.or(self.last_pointer_pos);

        match hover {
            Some(hover_pos) if hover != self.last_pointer_pos => {
                let inside = self.canvas_rect.contains(hover_pos);
                if inside || self.pressed {
                    events.push(PointerEvent::Move(self.to_local(hover_pos)));
                } else if self.inside {
                    events.push(PointerEvent::Leave);
                }
                self.inside = inside;
            }
            None if self.inside => {
                events.push(PointerEvent::Leave);
                self.inside = false;
            }
            _ => {}
        }
        self.last_pointer_pos = hover.or(self.last_pointer_pos);

        if pressed && !self.pressed {
            if let Some(pos) = pos.filter(|pos| self.canvas_rect.contains(*pos)) {
                events.push(PointerEvent::Down(self.to_local(pos)));
                self.pressed = true;
            }
        }
        if released && self.pressed {
            let outside = pos.is_none_or(|pos| !self.canvas_rect.contains(pos));
            let pos = pos.map_or(Pos2::ZERO, |pos| self.to_local(pos));
            events.push(PointerEvent::Up(pos));
            self.pressed = false;
            // Released off the canvas: the preview must not linger at the edge.
            if outside {
                events.push(PointerEvent::Leave);
                self.inside = false;
            }
        }

        events
    }
}
