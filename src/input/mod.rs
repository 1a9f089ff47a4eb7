use egui::{Context, Key, Pos2, Rect};

use crate::command::Command;

/// Maps raw egui input into core commands, polled once per frame.
///
/// Only presses that land inside the canvas start a gesture. Once a drag is
/// active, moves and the release are forwarded wherever the pointer goes,
/// so a gesture can finish outside the canvas.
pub struct InputHandler {
    canvas_rect: Option<Rect>,
    drag_active: bool,
    last_pointer_pos: Option<Pos2>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            canvas_rect: None,
            drag_active: false,
            last_pointer_pos: None,
        }
    }

    /// Update the canvas rectangle checked for presses.
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = Some(rect);
    }

    fn in_canvas(&self, pos: Pos2) -> bool {
        self.canvas_rect.is_some_and(|rect| rect.contains(pos))
    }

    /// Process raw egui input and generate the commands for this frame.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<Command> {
        let mut commands = Vec::new();

        ctx.input(|input| {
            // Platform-standard undo shortcut (Ctrl-Z / Cmd-Z).
            if input.modifiers.command && input.key_pressed(Key::Z) {
                commands.push(Command::Undo);
            }

            // Fall back to the last known position when egui loses the
            // pointer mid-gesture (e.g. release outside the window).
            let pos = input.pointer.hover_pos().or(self.last_pointer_pos);

            if input.pointer.primary_pressed() {
                if let Some(pos) = pos {
                    if self.in_canvas(pos) {
                        self.drag_active = true;
                        commands.push(Command::StartDrag(pos));
                    }
                }
            } else if self.drag_active {
                if input.pointer.primary_released() {
                    self.drag_active = false;
                    if let Some(pos) = pos {
                        commands.push(Command::EndDrag(pos));
                    }
                } else if let Some(pos) = pos {
                    if Some(pos) != self.last_pointer_pos {
                        commands.push(Command::Move(pos));
                    }
                }
            }

            if let Some(pos) = input.pointer.hover_pos() {
                self.last_pointer_pos = Some(pos);
            }
        });

        commands
    }
}
