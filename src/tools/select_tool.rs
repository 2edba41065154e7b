use egui::{Pos2, Vec2};
use log::debug;

use super::{Mode, Outcome};
use crate::document::ShapeCollection;

/// Handles pointer input in `Mode::Select` and `Mode::Drag`.
#[derive(Debug, Clone, Default)]
pub struct SelectTool {
    /// Offset from the pointer to the dragged shape's center
    drag_anchor: Option<Vec2>,
}

impl SelectTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_anchor(&self) -> Option<Vec2> {
        self.drag_anchor
    }

    /// Picks the topmost shape under `pos`. A hit starts a drag.
    pub fn on_pointer_down(&mut self, pos: Pos2, shapes: &mut ShapeCollection) -> Outcome {
        shapes.clear_selection();
        self.drag_anchor = None;

        let Some(id) = shapes.hit_test(pos) else {
            return Outcome::redraw();
        };
        let Some(center) = shapes.get(id).map(|shape| shape.center()) else {
            return Outcome::redraw();
        };

        shapes.select(Some(id));
        self.drag_anchor = Some(center - pos);
        debug!("Picked shape {} for dragging", id);
        Outcome::redraw().with_capture(true).with_mode(Mode::Drag)
    }

    pub fn on_pointer_move(
        &mut self,
        pos: Pos2,
        button_held: bool,
        shapes: &mut ShapeCollection,
    ) -> Outcome {
        if !button_held {
            return Outcome::none();
        }
        let Some(anchor) = self.drag_anchor else {
            return Outcome::none();
        };
        match shapes.selected_mut() {
            Some(shape) => {
                shape.set_center(pos + anchor);
                Outcome::redraw()
            }
            None => Outcome::none(),
        }
    }

    pub fn on_pointer_up(&mut self) -> Outcome {
        self.finish();
        Outcome::none().with_capture(false).with_mode(Mode::Select)
    }

    /// Drops the drag anchor. The dragged shape stays selected.
    pub fn finish(&mut self) {
        self.drag_anchor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    #[test]
    fn test_miss_clears_selection_and_stays() {
        let mut tool = SelectTool::new();
        let mut shapes = ShapeCollection::new();
        shapes.insert_new(Pos2::new(100.0, 100.0), Color32::RED);
        assert!(shapes.current().is_some());

        let outcome = tool.on_pointer_down(Pos2::new(0.0, 0.0), &mut shapes);
        assert_eq!(outcome, Outcome::redraw());
        assert_eq!(shapes.current(), None);
        assert_eq!(tool.drag_anchor(), None);
    }

    #[test]
    fn test_hit_records_anchor_and_requests_drag() {
        let mut tool = SelectTool::new();
        let mut shapes = ShapeCollection::new();
        let id = shapes.insert_new(Pos2::new(10.0, 10.0), Color32::RED);
        shapes
            .selected_mut()
            .unwrap()
            .span_corners(Pos2::new(0.0, 0.0), Pos2::new(20.0, 20.0));
        shapes.clear_selection();

        let outcome = tool.on_pointer_down(Pos2::new(12.0, 7.0), &mut shapes);
        assert_eq!(outcome.next_mode, Some(Mode::Drag));
        assert_eq!(outcome.capture, Some(true));
        assert_eq!(shapes.current(), Some(id));
        assert_eq!(tool.drag_anchor(), Some(Vec2::new(-2.0, 3.0)));

        tool.on_pointer_move(Pos2::new(22.0, 17.0), true, &mut shapes);
        assert_eq!(shapes.get(id).unwrap().center(), Pos2::new(20.0, 20.0));

        let outcome = tool.on_pointer_up();
        assert_eq!(outcome.next_mode, Some(Mode::Select));
        assert_eq!(outcome.capture, Some(false));
        assert_eq!(shapes.current(), Some(id));
    }

    #[test]
    fn test_move_without_anchor_is_noop() {
        let mut tool = SelectTool::new();
        let mut shapes = ShapeCollection::new();
        shapes.insert_new(Pos2::new(10.0, 10.0), Color32::RED);
        assert_eq!(
            tool.on_pointer_move(Pos2::new(50.0, 50.0), true, &mut shapes),
            Outcome::none()
        );
        assert_eq!(shapes.selected_mut().unwrap().center(), Pos2::new(10.0, 10.0));
    }
}
