use egui::CursorIcon;

mod draw_tool;
pub use draw_tool::{DrawGesture, DrawTool};

mod select_tool;
pub use select_tool::SelectTool;

/// Interaction modes of the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Pressing and dragging creates a new ellipse
    #[default]
    Draw,
    /// Pressing picks the topmost ellipse under the pointer
    Select,
    /// An ellipse picked in `Select` follows the pointer until release
    Drag,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Draw => "Draw",
            Mode::Select => "Select",
            Mode::Drag => "Drag",
        }
    }

    /// Pointer cursor shown over the canvas in this mode
    pub fn cursor_icon(self) -> CursorIcon {
        match self {
            Mode::Draw => CursorIcon::Crosshair,
            Mode::Select => CursorIcon::PointingHand,
            Mode::Drag => CursorIcon::Move,
        }
    }
}

/// Mode changes requested from the menu or keyboard accelerators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeCommand {
    Draw,
    Select,
    /// Draw becomes Select, anything else becomes Draw
    Toggle,
}

impl ModeCommand {
    pub fn target(self, current: Mode) -> Mode {
        match self {
            ModeCommand::Draw => Mode::Draw,
            ModeCommand::Select => Mode::Select,
            ModeCommand::Toggle => match current {
                Mode::Draw => Mode::Select,
                Mode::Select | Mode::Drag => Mode::Draw,
            },
        }
    }
}

/// What a tool handler asks the editor to do after processing an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Geometry or selection changed
    pub redraw: bool,
    /// `Some(true)` to acquire pointer capture, `Some(false)` to release it
    pub capture: Option<bool>,
    pub next_mode: Option<Mode>,
}

impl Outcome {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn redraw() -> Self {
        Self {
            redraw: true,
            ..Self::default()
        }
    }

    pub fn with_capture(mut self, capture: bool) -> Self {
        self.capture = Some(capture);
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.next_mode = Some(mode);
        self
    }
}
