// src/draw/surface.rs
//
// Layout and physics run in surface coordinates: origin top-left, y down,
// like the 2D canvas the animations were designed around. Nannou draws
// around a centered origin with y up, so screen positions invert y.

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point2 {
        pt2(self.width / 2.0, self.height / 2.0)
    }

    pub fn to_screen(&self, point: Point2) -> Point2 {
        pt2(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }

    pub fn from_screen(&self, point: Point2) -> Point2 {
        pt2(point.x + self.width / 2.0, self.height / 2.0 - point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_surface_center_maps_to_screen_origin() {
        let surface = Surface::new(100.0, 60.0);
        let screen = surface.to_screen(surface.center());
        assert!(screen.x.abs() < EPSILON);
        assert!(screen.y.abs() < EPSILON);
    }

    #[test]
    fn test_top_left_maps_to_upper_left_quadrant() {
        let surface = Surface::new(100.0, 60.0);
        let screen = surface.to_screen(pt2(0.0, 0.0));
        assert!((screen.x - -50.0).abs() < EPSILON);
        assert!((screen.y - 30.0).abs() < EPSILON);
    }

    #[test]
    fn test_round_trip() {
        let surface = Surface::new(640.0, 480.0);
        let point = pt2(123.0, 45.0);
        let back = surface.from_screen(surface.to_screen(point));
        assert!((back.x - point.x).abs() < EPSILON);
        assert!((back.y - point.y).abs() < EPSILON);
    }
}
