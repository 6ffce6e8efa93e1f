use crate::application::{FrameClock, Layout, RunState, Scheduler, Simulation, TickHandle};
use crate::config::SimConfig;
use crate::rendering::{Palette, Surface, render};

/// Discrete commands emitted by the UI layer
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Start,
    Pause,
    Reset,
    SelectPattern(String),
    ToggleAlgorithm,
    PointerDown(f32, f32),
    SurfaceResize(u32, u32),
}

/// GameState orchestrates the simulation.
/// This is the application layer that couples the grid to layout,
/// scheduling and rendering.
pub struct GameState {
    pub simulation: Simulation,
    layout: Layout,
    scheduler: Scheduler,
    palette: Palette,
    config: SimConfig,
}

impl GameState {
    /// Create state sized for a `width` x `height` surface, all cells dead
    pub fn new(width: u32, height: u32, config: SimConfig) -> Self {
        let layout = Layout::new(width, height, &config.density);
        let (rows, cols) = layout.dimensions();
        Self {
            simulation: Simulation::new(rows, cols, &config),
            layout,
            scheduler: Scheduler::new(),
            palette: Palette::from_config(&config),
            config,
        }
    }

    /// Replace the simulation (builder pattern), e.g. to inject a random source
    pub fn with_simulation(mut self, build: impl FnOnce(Simulation) -> Simulation) -> Self {
        let (rows, cols) = self.layout.dimensions();
        let fresh = Simulation::new(rows, cols, &self.config);
        self.simulation = build(fresh);
        self
    }

    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    pub const fn run_state(&self) -> RunState {
        self.scheduler.state()
    }

    /// Apply one UI command
    pub fn dispatch(&mut self, command: Command, clock: &mut dyn FrameClock) {
        match command {
            Command::Start => self.start(clock),
            Command::Pause => self.pause(clock),
            Command::Reset => self.reset(clock),
            Command::SelectPattern(name) => self.select_pattern(&name),
            Command::ToggleAlgorithm => self.toggle_algorithm(),
            Command::PointerDown(x, y) => self.pointer_down(x, y),
            Command::SurfaceResize(w, h) => self.surface_resized(w, h),
        }
    }

    pub fn start(&mut self, clock: &mut dyn FrameClock) {
        self.scheduler.start(clock);
    }

    pub fn pause(&mut self, clock: &mut dyn FrameClock) {
        self.scheduler.pause(clock);
    }

    /// Stop ticking and kill every cell
    pub fn reset(&mut self, clock: &mut dyn FrameClock) {
        self.scheduler.reset(clock);
        self.simulation.clear();
    }

    pub fn select_pattern(&mut self, name: &str) {
        if !self.simulation.apply_pattern(name) {
            log::warn!("ignoring unknown pattern {name:?}");
        }
    }

    /// Switch between serial and parallel evaluation; the grid is untouched
    pub fn toggle_algorithm(&mut self) {
        let next = self.simulation.algorithm().toggled();
        self.simulation.set_algorithm(next);
    }

    /// Toggle the cell under a pixel; clicks off the grid do nothing
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        if let Some((row, col)) = self.layout.cell_at(x, y) {
            self.simulation.toggle(row, col);
        }
    }

    pub fn surface_resized(&mut self, width: u32, height: u32) {
        self.layout = Layout::new(width, height, &self.config.density);
        let (rows, cols) = self.layout.dimensions();
        self.simulation.resize(rows, cols);
    }

    /// Handle a frame callback: advance, render and reschedule if it is the
    /// tick we asked for. Returns false for stale callbacks.
    pub fn on_tick(
        &mut self,
        handle: TickHandle,
        clock: &mut dyn FrameClock,
        surface: &mut impl Surface,
    ) -> bool {
        if !self.scheduler.begin_tick(handle) {
            return false;
        }
        self.simulation.advance();
        self.render(surface);
        self.scheduler.finish_tick(clock);
        true
    }

    /// Paint the live grid
    pub fn render(&self, surface: &mut impl Surface) {
        render(self.simulation.grid(), &self.layout, &self.palette, surface);
    }
}
