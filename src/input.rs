use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect};

use crate::state::{EditorState, Host};
use crate::tools::ModeCommand;

/// Input events for the editor, positions in device pixels relative to
/// the canvas origin
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        position: Pos2,
        button: PointerButton,
    },
    /// Mouse moved (with or without buttons pressed)
    PointerMove {
        position: Pos2,
        /// Buttons that are currently held down
        held_buttons: Vec<PointerButton>,
    },
    /// Mouse button was released
    PointerUp { button: PointerButton },
    /// Menu or accelerator asked for a mode change
    ModeCommand(ModeCommand),
}

impl InputEvent {
    /// Feeds this event to the editor
    pub fn dispatch(&self, state: &mut EditorState, host: &mut dyn Host) {
        match self {
            InputEvent::PointerDown { position, button } => {
                state.on_pointer_down(*position, *button, host)
            }
            InputEvent::PointerMove {
                position,
                held_buttons,
            } => state.on_pointer_move(*position, held_buttons, host),
            InputEvent::PointerUp { button } => {
                if *button == PointerButton::Primary {
                    state.on_pointer_up(host)
                }
            }
            InputEvent::ModeCommand(command) => state.on_mode_command(*command, host),
        }
    }
}

/// Keyboard accelerators: Ctrl/Cmd+M toggles, F1 draws, F2 selects.
pub fn accelerator(key: Key, modifiers: Modifiers) -> Option<ModeCommand> {
    match key {
        Key::M if modifiers.command && !modifiers.alt && !modifiers.shift => {
            Some(ModeCommand::Toggle)
        }
        Key::F1 if modifiers.is_none() => Some(ModeCommand::Draw),
        Key::F2 if modifiers.is_none() => Some(ModeCommand::Select),
        _ => None,
    }
}

/// Converts raw egui input into `InputEvent`s, in arrival order.
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
    pixels_per_point: f32,
    held_buttons: Vec<PointerButton>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            canvas_rect: Rect::NOTHING,
            pixels_per_point: 1.0,
            held_buttons: Vec::new(),
        }
    }

    /// Update the canvas rectangle and display scale for this frame
    pub fn set_canvas(&mut self, rect: Rect, pixels_per_point: f32) {
        self.canvas_rect = rect;
        self.pixels_per_point = pixels_per_point;
    }

    pub fn held_buttons(&self) -> &[PointerButton] {
        &self.held_buttons
    }

    fn to_pixels(&self, pos: Pos2) -> Pos2 {
        ((pos - self.canvas_rect.min) * self.pixels_per_point).to_pos2()
    }

    /// Process raw egui input and generate our InputEvents
    ///
    /// Pointer events are only forwarded while the canvas is hovered, unless
    /// the editor holds pointer capture.
    pub fn process_input(
        &mut self,
        ctx: &Context,
        canvas_hovered: bool,
        captured: bool,
    ) -> Vec<InputEvent> {
        let raw_events = ctx.input(|input| input.raw.events.clone());
        self.translate(&raw_events, canvas_hovered, captured)
    }

    /// Translates a batch of raw egui events.
    pub fn translate(
        &mut self,
        raw_events: &[egui::Event],
        canvas_hovered: bool,
        captured: bool,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let routed = |pos: Pos2, this: &Self| {
            captured || (canvas_hovered && this.canvas_rect.contains(pos))
        };

        for event in raw_events {
            match event {
                egui::Event::PointerMoved(pos) => {
                    if routed(*pos, self) {
                        events.push(InputEvent::PointerMove {
                            position: self.to_pixels(*pos),
                            held_buttons: self.held_buttons.clone(),
                        });
                    }
                }
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed,
                    ..
                } => {
                    if *pressed {
                        if !self.held_buttons.contains(button) {
                            self.held_buttons.push(*button);
                        }
                        if routed(*pos, self) {
                            events.push(InputEvent::PointerDown {
                                position: self.to_pixels(*pos),
                                button: *button,
                            });
                        }
                    } else {
                        let was_held = self.held_buttons.contains(button);
                        self.held_buttons.retain(|held| held != button);
                        if was_held && routed(*pos, self) {
                            events.push(InputEvent::PointerUp { button: *button });
                        }
                    }
                }
                egui::Event::PointerGone => {
                    // Without capture a release outside the window is never seen
                    if !captured {
                        self.held_buttons.clear();
                    }
                }
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    modifiers,
                    ..
                } => {
                    if let Some(command) = accelerator(*key, *modifiers) {
                        events.push(InputEvent::ModeCommand(command));
                    }
                }
                _ => {}
            }
        }

        events
    }
}
