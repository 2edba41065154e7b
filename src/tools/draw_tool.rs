use egui::Pos2;
use log::debug;

use super::Outcome;
use crate::document::ShapeCollection;
use crate::shape::ColorGenerator;

/// Where the draw gesture is between press and release
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DrawGesture {
    #[default]
    Idle,
    /// Button is down but the pointer has not left the drag threshold yet
    Pending { press_px: Pos2, origin: Pos2 },
    /// A shape was inserted at `origin` and is being sized
    Sizing { origin: Pos2 },
}

/// Handles pointer input in `Mode::Draw`.
#[derive(Debug, Clone, Default)]
pub struct DrawTool {
    gesture: DrawGesture,
}

impl DrawTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gesture(&self) -> DrawGesture {
        self.gesture
    }

    pub fn on_pointer_down(&mut self, press_px: Pos2, origin: Pos2) -> Outcome {
        self.gesture = DrawGesture::Pending { press_px, origin };
        Outcome::none().with_capture(true)
    }

    pub fn on_pointer_move(
        &mut self,
        pos_px: Pos2,
        pos: Pos2,
        button_held: bool,
        threshold_px: f32,
        shapes: &mut ShapeCollection,
        colors: &mut ColorGenerator,
    ) -> Outcome {
        if !button_held {
            return Outcome::none();
        }

        if let DrawGesture::Pending { press_px, origin } = self.gesture {
            let delta = pos_px - press_px;
            if delta.x.abs() <= threshold_px && delta.y.abs() <= threshold_px {
                return Outcome::none();
            }
            let id = shapes.insert_new(origin, colors.next_color());
            debug!("Drag threshold exceeded, sizing shape {}", id);
            self.gesture = DrawGesture::Sizing { origin };
        }

        match self.gesture {
            DrawGesture::Sizing { origin } => match shapes.selected_mut() {
                Some(shape) => {
                    shape.span_corners(origin, pos);
                    Outcome::redraw()
                }
                None => Outcome::none(),
            },
            _ => Outcome::none(),
        }
    }

    /// Releasing in draw mode always leaves nothing selected, including a
    /// selection carried over from `Mode::Select`.
    pub fn on_pointer_up(&mut self, shapes: &mut ShapeCollection) -> Outcome {
        self.gesture = DrawGesture::Idle;
        let outcome = if shapes.current().is_some() {
            shapes.clear_selection();
            Outcome::redraw()
        } else {
            Outcome::none()
        };
        outcome.with_capture(false)
    }

    /// Ends the gesture as a release would, without touching capture.
    pub fn finish(&mut self, shapes: &mut ShapeCollection) -> Outcome {
        let gesture = std::mem::take(&mut self.gesture);
        if matches!(gesture, DrawGesture::Sizing { .. }) && shapes.current().is_some() {
            shapes.clear_selection();
            Outcome::redraw()
        } else {
            Outcome::none()
        }
    }
}
