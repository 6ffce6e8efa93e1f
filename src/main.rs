use macroquad::prelude::*;
use canvas_life::{
    GameState, SimConfig,
    application::FramePacer,
    input::{self, ResizeWatcher},
    rendering::MacroquadSurface,
    ui,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Canvas Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = SimConfig::from_env();
    let initial_pattern = config.initial_pattern.clone();

    let (width, height) = (screen_width() as u32, screen_height() as u32);
    let mut state = GameState::new(width, height, config);
    let mut pacer = FramePacer::new();
    let mut surface = MacroquadSurface;
    let mut resize = ResizeWatcher::new(width, height);

    let patterns: Vec<&'static str> = state.simulation.library().names().collect();
    state.select_pattern(&initial_pattern);
    log::info!("Controls: Space start/pause, R reset, A serial/parallel, 1-9 patterns, click to toggle a cell");

    loop {
        let buttons = ui::create_buttons(&patterns, screen_width());

        for command in input::poll_commands(&buttons, state.run_state(), &patterns, &mut resize) {
            state.dispatch(command, &mut pacer);
        }

        // One generation per frame while running; otherwise just repaint
        let ticked = match pacer.take_due() {
            Some(handle) => state.on_tick(handle, &mut pacer, &mut surface),
            None => false,
        };
        if !ticked {
            state.render(&mut surface);
        }

        let mouse = mouse_position();
        buttons.iter().for_each(|button| button.draw(mouse));
        ui::draw_status(&state);

        next_frame().await;
    }
}
