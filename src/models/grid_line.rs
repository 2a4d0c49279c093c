// src/models/grid_line.rs
//
// A grid line: a fixed anchor plus one animated free endpoint.

use nannou::prelude::*;
use std::collections::HashMap;

use crate::animation::{Animatable, Axis, EasingType};

#[derive(Debug, Clone)]
pub struct GridLine {
    start: Point2,
    animatable: Animatable,
}

impl GridLine {
    pub fn new(start_x: f32, start_y: f32) -> Self {
        Self {
            start: pt2(start_x, start_y),
            animatable: Animatable::default(),
        }
    }

    /// Anchor end of the line. Never moves after construction.
    pub fn start(&self) -> Point2 {
        self.start
    }

    pub fn animate_to(&mut self, target: HashMap<Axis, f32>, duration: f32, easing: EasingType) {
        self.animatable.animate_to(target, duration, easing);
    }

    /// Free endpoint at the given progress. At progress 0 the line
    /// collapses onto its anchor.
    pub fn endpoint_at(&self, progress: f32) -> Point2 {
        pt2(
            self.animatable.value_at(Axis::X, progress, self.start.x),
            self.animatable.value_at(Axis::Y, progress, self.start.y),
        )
    }
}
