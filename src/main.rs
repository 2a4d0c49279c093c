// src/main.rs
use nannou::prelude::*;

use fieldvis::{
    config::Config,
    draw::Surface,
    views::{GridField, StarField},
};

struct Model {
    grid: GridField,
    stars: StarField,
    background: Rgb,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Create window
    let window_id = app
        .new_window()
        .title(config.window.title.clone())
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_moved(mouse_moved)
        .mouse_exited(mouse_exited)
        .resized(window_resized)
        .build()
        .unwrap();
    let window = app.window(window_id).unwrap();

    let (width, height) = window.inner_size_points();
    let surface = Surface::new(width, height);

    let [red, green, blue, alpha] = config.style.line_color;
    let mut grid = GridField::new(surface, rgba(red, green, blue, alpha), config.style.line_weight);
    grid.play(app.time);

    let [red, green, blue] = config.style.star_color;
    let stars = StarField::new(surface, rgb(red, green, blue), config.style.star_radius);

    let [red, green, blue] = config.style.background;

    Model {
        grid,
        stars,
        background: rgb(red, green, blue),
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    model.grid.update(app.time);
    model.stars.update();
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.background);

    model.grid.draw(&draw);
    model.stars.draw(&draw);

    draw.to_frame(app, &frame).unwrap();
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        // replay the convergence sweep
        Key::Space => model.grid.play(app.time),
        _ => (),
    }
}

fn mouse_moved(app: &App, model: &mut Model, position: Point2) {
    let (width, height) = app.main_window().inner_size_points();
    let surface = Surface::new(width, height);
    model.stars.pointer_moved(surface.from_screen(position));
}

fn mouse_exited(_app: &App, model: &mut Model) {
    model.stars.pointer_left();
}

fn window_resized(app: &App, model: &mut Model, size: Vec2) {
    model.grid.resize(size.x, size.y, app.time);
    model.stars.resize(size.x, size.y);
}
