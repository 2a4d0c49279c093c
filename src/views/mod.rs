// src/views/mod.rs

pub mod grid_field;
pub mod star_field;

pub use grid_field::{GridField, Playback};
pub use star_field::StarField;
