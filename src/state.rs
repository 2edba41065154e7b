//! The interaction state machine.
//!
//! ```text
//!            pointer down (hit)
//!   ┌────────┐ ─────────────────► ┌────────┐
//!   │ Select │                    │  Drag  │
//!   └────────┘ ◄───────────────── └────────┘
//!     ▲    │        pointer up
//!     │    │ Draw / Toggle
//!     │    ▼
//!   ┌────────┐
//!   │  Draw  │  press + drag past threshold: insert, then size
//!   └────────┘
//! ```
//!
//! Pointer events arrive in device pixels and are converted to logical
//! units with the session's `CoordinateScaler` before reaching the tools.
//! Every change to geometry or selection is reported to the `Host` as a
//! redraw request.

use egui::{PointerButton, Pos2};
use log::{info, trace, warn};

use crate::document::ShapeCollection;
use crate::renderer::{Renderer, Surface};
use crate::scale::CoordinateScaler;
use crate::settings::DEFAULT_DRAG_THRESHOLD_PX;
use crate::shape::ColorGenerator;
use crate::tools::{DrawTool, Mode, ModeCommand, Outcome, SelectTool};

/// Platform side effects requested by the editor.
pub trait Host {
    /// Schedule a repaint. May be coalesced.
    fn request_redraw(&mut self);

    /// Show the cursor for `mode`
    fn set_cursor(&mut self, mode: Mode);

    /// Route all pointer events to the canvas (`true`) or stop doing so.
    ///
    /// Hosts that route input from `EditorState::is_captured` may keep the
    /// default no-op. `EguiHost` does, since egui keeps reporting the
    /// pointer after it leaves the canvas.
    fn set_capture(&mut self, _captured: bool) {}
}

/// Per-session editor state: shapes, mode and in-flight gesture.
#[derive(Debug)]
pub struct EditorState {
    shapes: ShapeCollection,
    mode: Mode,
    draw_tool: DrawTool,
    select_tool: SelectTool,
    scaler: CoordinateScaler,
    scale_initialized: bool,
    captured: bool,
    drag_threshold_px: f32,
    colors: ColorGenerator,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(ColorGenerator::from_clock())
    }
}

impl EditorState {
    pub fn new(colors: ColorGenerator) -> Self {
        Self {
            shapes: ShapeCollection::new(),
            mode: Mode::Draw,
            draw_tool: DrawTool::new(),
            select_tool: SelectTool::new(),
            scaler: CoordinateScaler::default(),
            scale_initialized: false,
            captured: false,
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD_PX,
            colors,
        }
    }

    pub fn with_drag_threshold(mut self, threshold_px: f32) -> Self {
        self.drag_threshold_px = threshold_px;
        self
    }

    /// Fixes the pixel-to-logical scale for the session. Only the first
    /// call takes effect.
    pub fn initialize_scale(&mut self, scaler: CoordinateScaler) -> bool {
        if self.scale_initialized {
            warn!("Scale already initialized, ignoring {:?}", scaler);
            return false;
        }
        info!(
            "Initialized scale: {} x {} pixels per logical unit",
            scaler.scale_x(),
            scaler.scale_y()
        );
        self.scaler = scaler;
        self.scale_initialized = true;
        true
    }

    pub fn is_scale_initialized(&self) -> bool {
        self.scale_initialized
    }

    pub fn scaler(&self) -> &CoordinateScaler {
        &self.scaler
    }

    pub fn shapes(&self) -> &ShapeCollection {
        &self.shapes
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    pub fn draw_tool(&self) -> &DrawTool {
        &self.draw_tool
    }

    pub fn select_tool(&self) -> &SelectTool {
        &self.select_tool
    }

    pub fn set_drag_threshold(&mut self, threshold_px: f32) {
        self.drag_threshold_px = threshold_px;
    }

    pub fn on_pointer_down(&mut self, pixel: Pos2, button: PointerButton, host: &mut dyn Host) {
        if button != PointerButton::Primary {
            return;
        }
        let pos = self.scaler.to_logical(pixel);
        let outcome = match self.mode {
            Mode::Draw => self.draw_tool.on_pointer_down(pixel, pos),
            Mode::Select | Mode::Drag => self.select_tool.on_pointer_down(pos, &mut self.shapes),
        };
        self.apply(outcome, host);
    }

    /// `held_buttons` are the buttons down while moving.
    pub fn on_pointer_move(
        &mut self,
        pixel: Pos2,
        held_buttons: &[PointerButton],
        host: &mut dyn Host,
    ) {
        let pos = self.scaler.to_logical(pixel);
        let button_held = held_buttons.contains(&PointerButton::Primary);
        let outcome = match self.mode {
            Mode::Draw => self.draw_tool.on_pointer_move(
                pixel,
                pos,
                button_held,
                self.drag_threshold_px,
                &mut self.shapes,
                &mut self.colors,
            ),
            Mode::Drag => self.select_tool.on_pointer_move(pos, button_held, &mut self.shapes),
            Mode::Select => Outcome::none(),
        };
        self.apply(outcome, host);
    }

    pub fn on_pointer_up(&mut self, host: &mut dyn Host) {
        let outcome = match self.mode {
            Mode::Draw => self.draw_tool.on_pointer_up(&mut self.shapes),
            Mode::Drag => self.select_tool.on_pointer_up(),
            Mode::Select => Outcome::none().with_capture(false),
        };
        self.apply(outcome, host);
    }

    /// Ends any gesture in progress, then switches mode.
    pub fn on_mode_command(&mut self, command: ModeCommand, host: &mut dyn Host) {
        let target = command.target(self.mode);
        let mut outcome = match self.mode {
            Mode::Draw => self.draw_tool.finish(&mut self.shapes),
            Mode::Select | Mode::Drag => {
                self.select_tool.finish();
                Outcome::none()
            }
        };
        outcome.capture = Some(false);
        outcome.next_mode = Some(target);
        self.apply(outcome, host);
    }

    /// Paints the current shapes. The surface is not retained.
    pub fn render_frame(&self, renderer: &Renderer, surface: &mut dyn Surface) {
        renderer.render_frame(&self.shapes, surface);
    }

    fn set_mode(&mut self, mode: Mode, host: &mut dyn Host) {
        if self.mode != mode {
            info!("Mode changed: {} -> {}", self.mode.name(), mode.name());
        }
        self.mode = mode;
        host.set_cursor(mode);
    }

    fn apply(&mut self, outcome: Outcome, host: &mut dyn Host) {
        if let Some(captured) = outcome.capture {
            if self.captured != captured {
                trace!("Pointer capture {}", if captured { "acquired" } else { "released" });
            }
            self.captured = captured;
            host.set_capture(captured);
        }
        if let Some(mode) = outcome.next_mode {
            self.set_mode(mode, host);
        }
        if outcome.redraw {
            host.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct NullHost {
        redraws: usize,
        cursor: Option<Mode>,
    }

    impl Host for NullHost {
        fn request_redraw(&mut self) {
            self.redraws += 1;
        }

        fn set_cursor(&mut self, mode: Mode) {
            self.cursor = Some(mode);
        }
    }

    #[test]
    fn test_starts_in_draw_mode_uncaptured() {
        let state = EditorState::new(ColorGenerator::new(1));
        assert_eq!(state.mode(), Mode::Draw);
        assert!(!state.is_captured());
        assert!(state.shapes().is_empty());
    }

    #[test]
    fn test_scale_initializes_once() {
        let mut state = EditorState::new(ColorGenerator::new(1));
        assert!(state.initialize_scale(CoordinateScaler::new(2.0, 2.0).unwrap()));
        assert!(!state.initialize_scale(CoordinateScaler::new(3.0, 3.0).unwrap()));
        assert_eq!(state.scaler().scale_x(), 2.0);
    }

    #[test]
    fn test_pixels_are_scaled_before_shapes_are_created() {
        let mut host = NullHost::default();
        let mut state = EditorState::new(ColorGenerator::new(1));
        state.initialize_scale(CoordinateScaler::new(2.0, 2.0).unwrap());

        state.on_pointer_down(Pos2::new(20.0, 20.0), PointerButton::Primary, &mut host);
        state.on_pointer_move(Pos2::new(60.0, 40.0), &[PointerButton::Primary], &mut host);

        let id = state.shapes().current().unwrap();
        let shape = state.shapes().get(id).unwrap();
        assert_eq!(shape.center(), Pos2::new(20.0, 15.0));
        assert_eq!(host.redraws, 1);
    }

    #[test]
    fn test_secondary_button_is_ignored() {
        let mut host = NullHost::default();
        let mut state = EditorState::new(ColorGenerator::new(1));
        state.on_pointer_down(Pos2::new(5.0, 5.0), PointerButton::Secondary, &mut host);
        assert!(!state.is_captured());
        assert_eq!(host.cursor, None);
    }
}
