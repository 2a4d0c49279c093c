// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    pub background: [f32; 3],
    pub line_color: [f32; 4],
    pub line_weight: f32,
    pub star_color: [f32; 3],
    pub star_radius: f32,
}
