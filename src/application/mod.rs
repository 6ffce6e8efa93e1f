mod game_state;
mod layout;
mod scheduler;
mod simulation;

pub use game_state::{Command, GameState};
pub use layout::Layout;
pub use scheduler::{FrameClock, FramePacer, RunState, Scheduler, TickHandle};
pub use simulation::Simulation;

#[cfg(test)]
pub(crate) use scheduler::testing;
