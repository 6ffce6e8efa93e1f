mod button;

pub use button::Button;

use macroquad::prelude::*;

use crate::application::{Command, GameState};

pub const TOOLBAR_MARGIN: f32 = 8.0;
pub const BUTTON_HEIGHT: f32 = 26.0;
pub const BUTTON_WIDTH: f32 = 86.0;

/// Toolbar laid out left to right, wrapping to a new row when it runs out
/// of width: Start, Pause, Reset, then one button per pattern.
pub fn create_buttons(patterns: &[&'static str], surface_width: f32) -> Vec<Button> {
    let controls = [
        ("Start", Command::Start),
        ("Pause", Command::Pause),
        ("Reset", Command::Reset),
    ];
    let entries = controls
        .into_iter()
        .map(|(label, command)| (label.to_string(), command))
        .chain(
            patterns
                .iter()
                .map(|name| (name.to_string(), Command::SelectPattern(name.to_string()))),
        );

    let step_x = BUTTON_WIDTH + TOOLBAR_MARGIN;
    let per_row = (((surface_width - TOOLBAR_MARGIN) / step_x).floor() as usize).max(1);
    entries
        .enumerate()
        .map(|(i, (label, command))| {
            let x = TOOLBAR_MARGIN + (i % per_row) as f32 * step_x;
            let y = TOOLBAR_MARGIN + (i / per_row) as f32 * (BUTTON_HEIGHT + TOOLBAR_MARGIN);
            Button::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT, label, command)
        })
        .collect()
}

/// Run state, generation, last step's population and changes, grid size
/// and evaluation strategy
pub fn status_text(state: &GameState) -> String {
    let sim = &state.simulation;
    let (rows, cols) = sim.grid().dimensions();
    let report = sim.last_step();
    format!(
        "{} | gen {} | pop {} (+{} -{}) | {}x{} | {}",
        state.run_state().label(),
        sim.generation(),
        report.population,
        report.births,
        report.deaths,
        cols,
        rows,
        sim.algorithm().name(),
    )
}

/// Status line along the bottom edge
pub fn draw_status(state: &GameState) {
    let text = status_text(state);
    draw_text(&text, TOOLBAR_MARGIN, screen_height() - TOOLBAR_MARGIN, 18.0, LIGHTGRAY);
}
