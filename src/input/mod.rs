use macroquad::prelude::*;

use crate::application::{Command, RunState};
use crate::ui::Button;

const DIGIT_KEYS: [KeyCode; 9] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
];

/// Translate a left click: toolbar buttons win over the grid underneath
pub fn command_for_click(buttons: &[Button], pos: (f32, f32)) -> Command {
    buttons
        .iter()
        .find(|button| button.contains(pos))
        .map(|button| button.command().clone())
        .unwrap_or(Command::PointerDown(pos.0, pos.1))
}

/// Translate a key press. Space toggles between start and pause,
/// A switches the evaluation strategy.
pub fn command_for_key(key: KeyCode, run_state: RunState, patterns: &[&str]) -> Option<Command> {
    match key {
        KeyCode::Space if run_state == RunState::Running => Some(Command::Pause),
        KeyCode::Space => Some(Command::Start),
        KeyCode::R => Some(Command::Reset),
        KeyCode::A => Some(Command::ToggleAlgorithm),
        _ => {
            let index = DIGIT_KEYS.iter().position(|k| *k == key)?;
            patterns.get(index).map(|name| Command::SelectPattern(name.to_string()))
        }
    }
}

/// Tracks the window size so a change can be reported once
#[derive(Debug, Default)]
pub struct ResizeWatcher {
    last: Option<(u32, u32)>,
}

impl ResizeWatcher {
    pub fn new(width: u32, height: u32) -> Self {
        Self { last: Some((width, height)) }
    }

    /// Returns a resize command when the size differs from the last one seen
    pub fn observe(&mut self, width: u32, height: u32) -> Option<Command> {
        if self.last == Some((width, height)) {
            return None;
        }
        self.last = Some((width, height));
        Some(Command::SurfaceResize(width, height))
    }
}

/// Gather this frame's commands from the keyboard, mouse and window
pub fn poll_commands(
    buttons: &[Button],
    run_state: RunState,
    patterns: &[&str],
    resize: &mut ResizeWatcher,
) -> Vec<Command> {
    let mut commands = Vec::new();

    if let Some(command) = resize.observe(screen_width() as u32, screen_height() as u32) {
        commands.push(command);
    }

    let keys = [KeyCode::Space, KeyCode::R, KeyCode::A].into_iter().chain(DIGIT_KEYS);
    for key in keys.filter(|k| is_key_pressed(*k)) {
        commands.extend(command_for_key(key, run_state, patterns));
    }

    if is_mouse_button_pressed(MouseButton::Left) {
        commands.push(command_for_click(buttons, mouse_position()));
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATTERNS: [&str; 3] = ["random", "glider", "blinker"];

    #[test]
    fn test_click_prefers_buttons() {
        let buttons = vec![Button::new(0.0, 0.0, 50.0, 20.0, "Reset", Command::Reset)];
        assert_eq!(command_for_click(&buttons, (10.0, 10.0)), Command::Reset);
        assert_eq!(command_for_click(&buttons, (10.0, 40.0)), Command::PointerDown(10.0, 40.0));
    }

    #[test]
    fn test_space_toggles() {
        assert_eq!(command_for_key(KeyCode::Space, RunState::Idle, &PATTERNS), Some(Command::Start));
        assert_eq!(command_for_key(KeyCode::Space, RunState::Paused, &PATTERNS), Some(Command::Start));
        assert_eq!(command_for_key(KeyCode::Space, RunState::Running, &PATTERNS), Some(Command::Pause));
    }

    #[test]
    fn test_a_toggles_algorithm() {
        for state in [RunState::Idle, RunState::Running, RunState::Paused] {
            assert_eq!(command_for_key(KeyCode::A, state, &PATTERNS), Some(Command::ToggleAlgorithm));
        }
    }

    #[test]
    fn test_digits_select_patterns() {
        assert_eq!(
            command_for_key(KeyCode::Key2, RunState::Idle, &PATTERNS),
            Some(Command::SelectPattern("glider".into()))
        );
        assert_eq!(command_for_key(KeyCode::Key9, RunState::Idle, &PATTERNS), None);
        assert_eq!(command_for_key(KeyCode::Q, RunState::Idle, &PATTERNS), None);
    }

    #[test]
    fn test_resize_reported_once() {
        let mut watcher = ResizeWatcher::new(800, 600);
        assert_eq!(watcher.observe(800, 600), None);
        assert_eq!(watcher.observe(1024, 768), Some(Command::SurfaceResize(1024, 768)));
        assert_eq!(watcher.observe(1024, 768), None);
    }
}
