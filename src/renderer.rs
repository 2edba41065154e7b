use egui::{Color32, Painter, Pos2, Shape, Stroke, Vec2};

use crate::document::ShapeCollection;

/// Drawing operations the render dispatcher needs from a paint target.
///
/// Coordinates are logical units relative to the canvas origin.
pub trait Surface {
    /// Fills the whole surface
    fn clear(&mut self, color: Color32);

    fn fill_ellipse(&mut self, center: Pos2, radius: Vec2, color: Color32);

    fn stroke_ellipse(&mut self, center: Pos2, radius: Vec2, width: f32, color: Color32);
}

/// `Surface` backed by an egui painter for the duration of one frame.
///
/// egui points are logical units, so only the canvas offset is applied.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.origin + pos.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(self.painter.clip_rect(), 0.0, color);
    }

    fn fill_ellipse(&mut self, center: Pos2, radius: Vec2, color: Color32) {
        self.painter
            .add(Shape::ellipse_filled(self.to_screen(center), radius, color));
    }

    fn stroke_ellipse(&mut self, center: Pos2, radius: Vec2, width: f32, color: Color32) {
        self.painter.add(Shape::ellipse_stroke(
            self.to_screen(center),
            radius,
            Stroke::new(width, color),
        ));
    }
}

/// Paints the shape collection.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    background: Color32,
}

impl Renderer {
    pub fn new(background: Color32) -> Self {
        Self { background }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Clears to the background color, then draws every shape back to
    /// front so newer shapes cover older ones.
    ///
    /// The surface is only borrowed for this call.
    pub fn render_frame(&self, shapes: &ShapeCollection, surface: &mut dyn Surface) {
        surface.clear(self.background);
        shapes.for_each_back_to_front(|_, shape| shape.draw(surface));
    }
}
