use egui::{Color32, Pos2, Vec2};

use crate::renderer::Surface;

mod color;
pub use color::ColorGenerator;

/// Radius given to a freshly inserted ellipse, in logical units
pub const INITIAL_RADIUS: f32 = 1.0;
/// Outline width, in logical units
pub const OUTLINE_WIDTH: f32 = 1.0;
pub const OUTLINE_COLOR: Color32 = Color32::BLACK;

/// A filled ellipse with a black outline.
///
/// Radii are stored signed: while sizing, the ellipse is rebuilt from the
/// press origin and the current pointer, so crossing back over the origin
/// flips the sign of a half-extent. Hit testing squares the normalized
/// distance and drawing uses the magnitude, so the sign is never observable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    center: Pos2,
    radius: Vec2,
    color: Color32,
}

impl Ellipse {
    pub fn new(center: Pos2, radius: Vec2, color: Color32) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    /// A new ellipse of `INITIAL_RADIUS` centered on `center`.
    pub fn seed(center: Pos2, color: Color32) -> Self {
        Self::new(center, Vec2::splat(INITIAL_RADIUS), color)
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn radius(&self) -> Vec2 {
        self.radius
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_center(&mut self, center: Pos2) {
        self.center = center;
    }

    /// Rebuilds the ellipse so that `origin` and `corner` are opposite
    /// corners of its bounding box: center at the midpoint, radii equal to
    /// the (signed) half extents.
    pub fn span_corners(&mut self, origin: Pos2, corner: Pos2) {
        let half = (corner - origin) / 2.0;
        self.center = origin + half;
        self.radius = half;
    }

    /// Normalized ellipse equation: `((x-cx)/rx)^2 + ((y-cy)/ry)^2 <= 1`.
    ///
    /// A zero radius on either axis never hits.
    pub fn hit_test(&self, pos: Pos2) -> bool {
        let Vec2 { x: a, y: b } = self.radius;
        if a == 0.0 || b == 0.0 {
            return false;
        }
        let d = pos - self.center;
        let distance = (d.x * d.x) / (a * a) + (d.y * d.y) / (b * b);
        distance <= 1.0
    }

    /// Fills with the ellipse color, then strokes the outline.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let radius = self.radius.abs();
        surface.fill_ellipse(self.center, radius, self.color);
        surface.stroke_ellipse(self.center, radius, OUTLINE_WIDTH, OUTLINE_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ellipse(cx: f32, cy: f32, rx: f32, ry: f32) -> Ellipse {
        Ellipse::new(Pos2::new(cx, cy), Vec2::new(rx, ry), Color32::RED)
    }

    #[test]
    fn test_hit_test_inside_and_outside() {
        let e = ellipse(50.0, 50.0, 20.0, 10.0);
        assert!(e.hit_test(Pos2::new(50.0, 50.0)));
        assert!(e.hit_test(Pos2::new(65.0, 52.0)));
        assert!(!e.hit_test(Pos2::new(50.0, 61.0)));
        // Inside the bounding box but outside the curve
        assert!(!e.hit_test(Pos2::new(68.0, 58.0)));
    }

    #[test]
    fn test_hit_test_includes_boundary() {
        let e = ellipse(10.0, 20.0, 8.0, 4.0);
        assert!(e.hit_test(Pos2::new(18.0, 20.0)));
        assert!(e.hit_test(Pos2::new(2.0, 20.0)));
        assert!(e.hit_test(Pos2::new(10.0, 24.0)));
        assert!(e.hit_test(Pos2::new(10.0, 16.0)));
    }

    #[test]
    fn test_zero_radius_never_hits() {
        let e = ellipse(5.0, 5.0, 0.0, 3.0);
        assert!(!e.hit_test(Pos2::new(5.0, 5.0)));
        let e = ellipse(5.0, 5.0, 0.0, 0.0);
        assert!(!e.hit_test(Pos2::new(5.0, 5.0)));
    }

    #[test]
    fn test_negative_radius_hits_like_positive() {
        let e = ellipse(0.0, 0.0, -10.0, -5.0);
        assert!(e.hit_test(Pos2::new(10.0, 0.0)));
        assert!(e.hit_test(Pos2::new(-4.0, 2.0)));
        assert!(!e.hit_test(Pos2::new(0.0, 6.0)));
    }

    #[test]
    fn test_span_corners_uses_midpoint_and_half_extents() {
        let mut e = Ellipse::seed(Pos2::new(10.0, 10.0), Color32::BLUE);
        assert_eq!(e.radius(), Vec2::splat(INITIAL_RADIUS));

        e.span_corners(Pos2::new(10.0, 10.0), Pos2::new(30.0, 50.0));
        assert_eq!(e.center(), Pos2::new(20.0, 30.0));
        assert_eq!(e.radius(), Vec2::new(10.0, 20.0));

        // Crossing back over the origin flips the half extents
        e.span_corners(Pos2::new(10.0, 10.0), Pos2::new(0.0, 4.0));
        assert_eq!(e.center(), Pos2::new(5.0, 7.0));
        assert_eq!(e.radius(), Vec2::new(-5.0, -3.0));
        assert_eq!(e.color(), Color32::BLUE);
    }
}
