// src/views/grid_field.rs
//
// The converging grid-line background.
//
// Lays out line stubs along all four window edges and animates each free
// endpoint toward the window center, then goes dormant until play() is
// called again. Resizing rebuilds the layout and restarts the sweep.

use nannou::prelude::*;
use std::collections::HashMap;

use crate::animation::{Axis, EasingType};
use crate::draw::Surface;
use crate::models::GridLine;

const CELL_DIVISOR: f32 = 20.0;
const EDGE_OFFSET: f32 = -5.0;
const CONVERGE_DURATION: f32 = 4.0;
const LINE_EASING: EasingType = EasingType::EaseInOutQuad;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Idle,
    Running,
    Done,
}

pub struct GridField {
    lines: Vec<GridLine>,
    surface: Surface,
    cell_size: f32,
    duration: f32,
    start_time: f32,
    progress: f32,
    state: Playback,
    color: Rgba,
    stroke_weight: f32,
}

impl GridField {
    pub fn new(surface: Surface, color: Rgba, stroke_weight: f32) -> Self {
        let mut field = Self {
            lines: Vec::new(),
            surface,
            cell_size: cell_size_for(surface),
            duration: CONVERGE_DURATION,
            start_time: 0.0,
            progress: 0.0,
            state: Playback::Idle,
            color,
            stroke_weight,
        };
        field.rebuild_lines();
        field
    }

    /// (Re)start the convergence sweep from the current layout.
    pub fn play(&mut self, now: f32) {
        self.start_time = now;
        self.progress = 0.0;
        self.state = Playback::Running;
    }

    /// Rebuild for new window dimensions and restart. An in-flight sweep
    /// is abandoned, not resumed.
    pub fn resize(&mut self, width: f32, height: f32, now: f32) {
        self.surface = Surface::new(width, height);
        self.cell_size = cell_size_for(self.surface);
        self.rebuild_lines();
        self.play(now);
    }

    /// Advance the playback state machine. Once the sweep completes this
    /// is a no-op until the next play().
    pub fn update(&mut self, now: f32) -> f32 {
        if self.state != Playback::Running {
            return self.progress;
        }
        self.progress = ((now - self.start_time) / self.duration).clamp(0.0, 1.0);
        if self.progress >= 1.0 {
            self.state = Playback::Done;
        }
        self.progress
    }

    pub fn draw(&self, draw: &Draw) {
        if self.state == Playback::Idle {
            return;
        }
        for line in &self.lines {
            let anchor = self.surface.to_screen(line.start());
            let endpoint = self.surface.to_screen(line.endpoint_at(self.progress));
            draw.line()
                .points(anchor, endpoint)
                .color(self.color)
                .stroke_weight(self.stroke_weight);
        }
    }

    pub fn state(&self) -> Playback {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.state == Playback::Running
    }

    pub fn lines(&self) -> &[GridLine] {
        &self.lines
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    fn rebuild_lines(&mut self) {
        let Surface { width, height } = self.surface;
        let center = self.surface.center();

        self.lines.clear();

        // One left- and one right-anchored line per vertical step, both
        // converging on the horizontal midpoint.
        let mut y = EDGE_OFFSET;
        while y <= height {
            let mut left = GridLine::new(0.0, y);
            left.animate_to(
                HashMap::from([(Axis::X, center.x)]),
                self.duration,
                LINE_EASING,
            );
            self.lines.push(left);

            let mut right = GridLine::new(width, y);
            right.animate_to(
                HashMap::from([(Axis::X, center.x)]),
                self.duration,
                LINE_EASING,
            );
            self.lines.push(right);

            y += self.cell_size;
        }

        // Top- and bottom-anchored lines converging on the vertical midpoint.
        let mut x = EDGE_OFFSET;
        while x <= width {
            let mut top = GridLine::new(x, 0.0);
            top.animate_to(
                HashMap::from([(Axis::Y, center.y)]),
                self.duration,
                LINE_EASING,
            );
            self.lines.push(top);

            let mut bottom = GridLine::new(x, height);
            bottom.animate_to(
                HashMap::from([(Axis::Y, center.y)]),
                self.duration,
                LINE_EASING,
            );
            self.lines.push(bottom);

            x += self.cell_size;
        }
    }
}

fn cell_size_for(surface: Surface) -> f32 {
    // A zero cell would stall the layout loops on degenerate windows.
    (surface.width.min(surface.height) / CELL_DIVISOR)
        .floor()
        .max(1.0)
}
