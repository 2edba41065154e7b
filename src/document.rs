use egui::{Color32, Pos2};
use log::debug;

use crate::id_generator::{IdGenerator, ShapeId};
use crate::shape::Ellipse;

/// Ordered set of shapes plus the current selection.
///
/// Shapes are stored oldest first, so the topmost shape is the last
/// entry. Hit testing walks from the top down; rendering walks from the
/// bottom up. The selection is a handle resolved on every access and never
/// outlives the shape it names.
#[derive(Debug, Default)]
pub struct ShapeCollection {
    shapes: Vec<(ShapeId, Ellipse)>,
    selection: Option<ShapeId>,
    ids: IdGenerator,
}

impl ShapeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Inserts a seed ellipse at the top of the stack and selects it.
    pub fn insert_new(&mut self, center: Pos2, color: Color32) -> ShapeId {
        let id = self.ids.generate_id();
        self.shapes.push((id, Ellipse::seed(center, color)));
        self.selection = Some(id);
        debug!("Inserted shape {} at ({}, {})", id, center.x, center.y);
        id
    }

    /// Removes a shape, clearing the selection if it pointed at it.
    pub fn remove(&mut self, id: ShapeId) -> Option<Ellipse> {
        let index = self.index_of(id)?;
        let (_, shape) = self.shapes.remove(index);
        if self.selection == Some(id) {
            self.selection = None;
        }
        Some(shape)
    }

    pub fn get(&self, id: ShapeId) -> Option<&Ellipse> {
        self.index_of(id).map(|index| &self.shapes[index].1)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Ellipse> {
        self.index_of(id).map(move |index| &mut self.shapes[index].1)
    }

    fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|(shape_id, _)| *shape_id == id)
    }

    /// Topmost shape containing `pos`. Does not touch the selection.
    pub fn hit_test(&self, pos: Pos2) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|(_, shape)| shape.hit_test(pos))
            .map(|(id, _)| *id)
    }

    /// Sets the selection. Handles that no longer resolve select nothing.
    pub fn select(&mut self, id: Option<ShapeId>) {
        self.selection = id.filter(|id| self.index_of(*id).is_some());
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn current(&self) -> Option<ShapeId> {
        self.selection.filter(|id| self.index_of(*id).is_some())
    }

    pub fn selected_mut(&mut self) -> Option<&mut Ellipse> {
        let id = self.current()?;
        self.get_mut(id)
    }

    /// Shapes from bottom (oldest) to top (newest), for painting.
    pub fn iter_back_to_front(&self) -> impl Iterator<Item = (ShapeId, &Ellipse)> + '_ {
        self.shapes.iter().map(|(id, shape)| (*id, shape))
    }

    pub fn for_each_back_to_front(&self, mut f: impl FnMut(ShapeId, &Ellipse)) {
        for (id, shape) in self.iter_back_to_front() {
            f(id, shape);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_selects_new_shape() {
        let mut shapes = ShapeCollection::new();
        assert!(shapes.is_empty());
        assert_eq!(shapes.current(), None);

        let id = shapes.insert_new(Pos2::new(3.0, 4.0), Color32::RED);
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes.current(), Some(id));
        assert_eq!(shapes.get(id).unwrap().center(), Pos2::new(3.0, 4.0));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut shapes = ShapeCollection::new();
        let a = shapes.insert_new(Pos2::ZERO, Color32::RED);
        shapes.remove(a);
        let b = shapes.insert_new(Pos2::ZERO, Color32::RED);
        assert_ne!(a, b);
        assert!(shapes.get(a).is_none());
    }

    #[test]
    fn test_removing_selected_shape_clears_selection() {
        let mut shapes = ShapeCollection::new();
        let a = shapes.insert_new(Pos2::ZERO, Color32::RED);
        let b = shapes.insert_new(Pos2::new(50.0, 50.0), Color32::BLUE);
        assert_eq!(shapes.current(), Some(b));

        shapes.remove(a);
        assert_eq!(shapes.current(), Some(b));

        shapes.remove(b);
        assert_eq!(shapes.current(), None);
        assert!(shapes.remove(b).is_none());
    }

    #[test]
    fn test_select_ignores_stale_handles() {
        let mut shapes = ShapeCollection::new();
        let a = shapes.insert_new(Pos2::ZERO, Color32::RED);
        shapes.remove(a);
        shapes.select(Some(a));
        assert_eq!(shapes.current(), None);
    }

    #[test]
    fn test_selected_mut_edits_selected_shape() {
        let mut shapes = ShapeCollection::new();
        let id = shapes.insert_new(Pos2::ZERO, Color32::RED);
        shapes.selected_mut().unwrap().set_center(Pos2::new(9.0, 9.0));
        assert_eq!(shapes.get(id).unwrap().center(), Pos2::new(9.0, 9.0));

        shapes.clear_selection();
        assert!(shapes.selected_mut().is_none());
    }
}
