// src/views/star_field.rs
//
// The twinkling star lattice with pointer repulsion.
//
// Stars sit on a fixed-spacing lattice. Every frame, stars near the
// pointer are pushed outward in proportion to proximity, the rest drift
// back toward their lattice home, and every star's opacity oscillates.
// The field runs for the lifetime of the window; there is no stop.

use nannou::prelude::*;
use rand::Rng;
use rayon::prelude::*;

use crate::draw::Surface;
use crate::models::Star;

const SPACING: f32 = 18.0;
const EDGE_OFFSET: f32 = -5.0;
const INFLUENCE_RADIUS: f32 = 80.0;
const REPULSION_STRENGTH: f32 = 20.0;
const RETURN_RATE: f32 = 0.05;

pub struct StarField {
    stars: Vec<Star>,
    surface: Surface,
    pointer: Point2,
    color: Rgb,
    radius: f32,
    rng: rand::rngs::ThreadRng,
}

impl StarField {
    pub fn new(surface: Surface, color: Rgb, radius: f32) -> Self {
        let mut field = Self {
            stars: Vec::new(),
            surface,
            pointer: pointer_away(),
            color,
            radius,
            rng: rand::thread_rng(),
        };
        field.rebuild_stars();
        field
    }

    /// Rebuild the lattice for new window dimensions. All displacement
    /// and twinkle state is discarded.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.surface = Surface::new(width, height);
        self.rebuild_stars();
    }

    /// Pointer moved over the window, in surface coordinates.
    pub fn pointer_moved(&mut self, position: Point2) {
        self.pointer = position;
    }

    /// Pointer left the window. Parks it far enough out that no star can
    /// fall inside the influence radius, so the lattice settles to rest.
    pub fn pointer_left(&mut self) {
        self.pointer = pointer_away();
    }

    /// One physics frame: repulse stars near the pointer, relax the rest
    /// toward home, advance every twinkle oscillator. Stars carry no
    /// cross-star state, so the pass runs data-parallel.
    pub fn update(&mut self) {
        let pointer = self.pointer;
        self.stars.par_iter_mut().for_each(|star| {
            let delta = pointer - star.position;
            let distance = delta.length();

            if distance < INFLUENCE_RADIUS {
                // Push away from the pointer, scaled by proximity and
                // re-derived from the lattice home every frame.
                let angle = delta.y.atan2(delta.x);
                let force = (INFLUENCE_RADIUS - distance) / INFLUENCE_RADIUS;
                star.position =
                    star.home - vec2(angle.cos(), angle.sin()) * force * REPULSION_STRENGTH;
            } else {
                star.position += (star.home - star.position) * RETURN_RATE;
            }

            star.twinkle();
        });
    }

    pub fn draw(&self, draw: &Draw) {
        for star in &self.stars {
            let position = self.surface.to_screen(star.position);
            draw.ellipse().xy(position).radius(self.radius).color(rgba(
                self.color.red,
                self.color.green,
                self.color.blue,
                star.render_alpha(),
            ));
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    fn rebuild_stars(&mut self) {
        self.stars.clear();

        let mut x = EDGE_OFFSET;
        while x < self.surface.width {
            let mut y = EDGE_OFFSET;
            while y < self.surface.height {
                let alpha = self.rng.gen::<f32>();
                let speed = self.rng.gen_range(0.002..0.007);
                self.stars.push(Star::new(x, y, alpha, speed));
                y += SPACING;
            }
            x += SPACING;
        }
    }
}

fn pointer_away() -> Point2 {
    pt2(-1000.0, -1000.0)
}
