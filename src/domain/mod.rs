mod buffers;
mod cell;
mod engine;
mod grid;
mod patterns;
mod random;

pub use buffers::GridBuffers;
pub use cell::{Cell, Fate};
pub use engine::{Algorithm, StepReport, step};
pub use grid::Grid;
pub use patterns::{Pattern, PatternLibrary, Seed, presets};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub(crate) use random::probability_or_zero;

#[cfg(test)]
pub(crate) use random::testing;
