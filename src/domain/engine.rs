//! Transition engine: advances a [`GridBuffers`] pair by one generation.
//!
//! Next states are computed purely from the live grid and written into the
//! scratch grid; the pair is swapped only once every cell has been evaluated.
//! Newborn cells receive their palette variant in a final row-major pass so
//! the serial and parallel strategies consume the random source identically.

use rayon::prelude::*;

use super::{Cell, Fate, Grid, GridBuffers, RandomSource};

/// Available evaluation strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell-by-cell, single thread
    Serial,
    /// Rows evaluated on the rayon pool
    #[default]
    Parallel,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// The other strategy
    pub fn toggled(self) -> Self {
        match self {
            Algorithm::Serial => Algorithm::Parallel,
            Algorithm::Parallel => Algorithm::Serial,
        }
    }
}

/// What changed during one generation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub births: usize,
    pub deaths: usize,
    pub population: usize,
}

/// Evaluate one row of `live` into `out`. Births are left as
/// [`Cell::NEWBORN`] placeholders. Returns (births, deaths).
fn evaluate_row(live: &Grid, row: usize, out: &mut [Cell]) -> (usize, usize) {
    let mut births = 0;
    let mut deaths = 0;
    for (col, slot) in out.iter_mut().enumerate() {
        let Some(current) = live.get(row, col) else {
            continue;
        };
        *slot = match current.evolve(live.neighbors(row, col)) {
            Fate::Survive => current,
            Fate::Birth => {
                births += 1;
                Cell::NEWBORN
            }
            Fate::Die => {
                if current.is_alive() {
                    deaths += 1;
                }
                Cell::DEAD
            }
        };
    }
    (births, deaths)
}

/// Advance `buffers` by one generation and swap.
/// `palette_size` is clamped to `1..=Cell::MAX_VARIANT`.
pub fn step(
    buffers: &mut GridBuffers,
    palette_size: u8,
    algorithm: Algorithm,
    rng: &mut dyn RandomSource,
) -> StepReport {
    let palette_size = palette_size.clamp(1, Cell::MAX_VARIANT);
    let (live, next) = buffers.split_mut();
    let (_, cols) = live.dimensions();

    let (births, deaths) = match algorithm {
        Algorithm::Serial => next
            .cells_mut()
            .chunks_mut(cols)
            .enumerate()
            .map(|(row, out)| evaluate_row(live, row, out))
            .fold((0, 0), |(b, d), (rb, rd)| (b + rb, d + rd)),
        Algorithm::Parallel => next
            .cells_mut()
            .par_chunks_mut(cols)
            .enumerate()
            .map(|(row, out)| evaluate_row(live, row, out))
            .reduce(|| (0, 0), |(b, d), (rb, rd)| (b + rb, d + rd)),
    };

    if births > 0 {
        next.cells_mut()
            .iter_mut()
            .filter(|cell| **cell == Cell::NEWBORN)
            .for_each(|cell| *cell = Cell::alive(rng.variant(palette_size)));
    }

    let population = next.population();
    buffers.swap();

    StepReport { births, deaths, population }
}
