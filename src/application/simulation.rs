use crate::config::SimConfig;
use crate::domain::{
    Algorithm, Cell, Grid, GridBuffers, PatternLibrary, RandomSource, SeededRandom, StepReport,
    ThreadRandom, probability_or_zero, step,
};

/// Simulation owns the grid pair and everything needed to mutate it.
/// All mutation happens between generations, on the caller's thread.
pub struct Simulation {
    buffers: GridBuffers,
    library: PatternLibrary,
    rng: Box<dyn RandomSource>,
    palette_size: u8,
    live_probability: f64,
    preserve_on_resize: bool,
    algorithm: Algorithm,
    generation: u64,
    last_step: StepReport,
}

impl Simulation {
    /// Create an all-dead simulation. A configured seed selects the
    /// reproducible generator.
    pub fn new(rows: usize, cols: usize, config: &SimConfig) -> Self {
        let rng: Box<dyn RandomSource> = match config.seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(ThreadRandom::new()),
        };
        Self {
            buffers: GridBuffers::new(rows, cols),
            library: PatternLibrary::default(),
            rng,
            palette_size: config.palette_size(),
            live_probability: probability_or_zero(config.live_probability),
            preserve_on_resize: config.preserve_on_resize,
            algorithm: config.algorithm.into(),
            generation: 0,
            last_step: StepReport::default(),
        }
    }

    /// Swap in a different random source (builder pattern)
    pub fn with_rng(mut self, rng: Box<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    pub fn grid(&self) -> &Grid {
        self.buffers.current()
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Births and deaths of the latest generation; population is kept
    /// current through edits as well
    pub const fn last_step(&self) -> StepReport {
        self.last_step
    }

    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        log::info!("switching to {} evaluation", algorithm.name());
        self.algorithm = algorithm;
    }

    /// Forget the last generation's changes and recount the live cells
    fn recount(&mut self) {
        self.last_step = StepReport {
            population: self.grid().population(),
            ..StepReport::default()
        };
    }

    /// Reallocate to new dimensions, keeping the overlap if configured
    pub fn resize(&mut self, rows: usize, cols: usize) {
        if self.buffers.dimensions() == (rows.max(1), cols.max(1)) {
            return;
        }
        log::info!(
            "resizing grid {:?} -> ({rows}, {cols}), preserve={}",
            self.buffers.dimensions(),
            self.preserve_on_resize
        );
        self.buffers.resize(rows, cols, self.preserve_on_resize);
        self.recount();
    }

    /// Kill every cell and restart the generation count
    pub fn clear(&mut self) {
        self.buffers.clear();
        self.generation = 0;
        self.last_step = StepReport::default();
    }

    /// User edit: flip one cell. Off-grid coordinates are ignored.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        let revived = Cell::alive(self.rng.variant(self.palette_size));
        if !self.buffers.current_mut().toggle(row, col, revived) {
            return false;
        }
        let revived_now = self.grid().get(row, col).is_some_and(Cell::is_alive);
        let population = &mut self.last_step.population;
        *population = if revived_now { *population + 1 } else { population.saturating_sub(1) };
        true
    }

    /// Clear and lay down the named seed. Returns false, leaving the grid
    /// untouched, if the name is unknown.
    pub fn apply_pattern(&mut self, name: &str) -> bool {
        let Some(seed) = self.library.get(name) else {
            return false;
        };
        self.buffers.clear();
        let written = seed.apply(
            self.buffers.current_mut(),
            self.live_probability,
            self.palette_size,
            self.rng.as_mut(),
        );
        let seed_name = seed.name();
        self.generation = 0;
        self.recount();
        log::info!("applied pattern {} ({written} live cells)", seed_name);
        true
    }

    /// Compute one generation and make it current
    pub fn advance(&mut self) -> StepReport {
        let report = step(
            &mut self.buffers,
            self.palette_size,
            self.algorithm,
            self.rng.as_mut(),
        );
        self.generation += 1;
        self.last_step = report;
        log::debug!("generation {}: {report:?}", self.generation);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::testing::Scripted;

    fn sim(rows: usize, cols: usize) -> Simulation {
        Simulation::new(rows, cols, &SimConfig::default()).with_rng(Box::new(Scripted::variants(&[3])))
    }

    fn alive_set(sim: &Simulation) -> Vec<(usize, usize)> {
        sim.grid().iter_alive().map(|(r, c, _)| (r, c)).collect()
    }

    #[test]
    fn test_blinker_from_library() {
        let mut sim = sim(9, 9);
        assert!(sim.apply_pattern("blinker"));
        assert_eq!(alive_set(&sim), vec![(4, 3), (4, 4), (4, 5)]);

        sim.advance();
        assert_eq!(alive_set(&sim), vec![(3, 4), (4, 4), (5, 4)]);
        sim.advance();
        assert_eq!(alive_set(&sim), vec![(4, 3), (4, 4), (4, 5)]);
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_toggle_then_tick_dies() {
        let mut sim = sim(6, 6);
        assert!(sim.toggle(2, 2));
        assert_eq!(sim.grid().get(2, 2), Some(Cell::alive(3)));
        let report = sim.advance();
        assert_eq!(sim.grid().population(), 0);
        assert_eq!(report.deaths, 1);
    }

    #[test]
    fn test_toggle_off_grid_is_noop() {
        let mut sim = sim(4, 4);
        assert!(!sim.toggle(4, 0));
        assert_eq!(sim.grid().population(), 0);
    }

    #[test]
    fn test_toggle_keeps_existing_cells() {
        let mut sim = sim(9, 9);
        sim.apply_pattern("glider");
        let before = sim.grid().population();
        sim.toggle(0, 0);
        assert_eq!(sim.grid().population(), before + 1);
    }

    #[test]
    fn test_unknown_pattern_leaves_grid() {
        let mut sim = sim(9, 9);
        sim.apply_pattern("beacon");
        assert!(!sim.apply_pattern("no-such-thing"));
        assert_eq!(sim.grid().population(), 6);
    }

    #[test]
    fn test_pattern_resets_generation() {
        let mut sim = sim(9, 9);
        sim.apply_pattern("blinker");
        sim.advance();
        sim.apply_pattern("block");
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.grid().population(), 4);
    }

    #[test]
    fn test_resize_honors_preserve_flag() {
        let mut sim = sim(10, 10);
        sim.toggle(1, 1);
        sim.toggle(8, 8);
        sim.resize(5, 5);
        assert_eq!(alive_set(&sim), vec![(1, 1)]);

        let config = SimConfig { preserve_on_resize: false, ..SimConfig::default() };
        let mut fresh = Simulation::new(10, 10, &config);
        fresh.toggle(1, 1);
        fresh.resize(20, 20);
        assert_eq!(fresh.grid().population(), 0);
        assert_eq!(fresh.grid().dimensions(), (20, 20));
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let config = SimConfig { seed: Some(17), ..SimConfig::default() };
        let mut a = Simulation::new(30, 30, &config);
        let mut b = Simulation::new(30, 30, &config);
        a.apply_pattern("random");
        b.apply_pattern("random");
        for _ in 0..5 {
            a.advance();
            b.advance();
        }
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_last_step_tracks_generations_and_edits() {
        let mut sim = sim(9, 9);
        sim.apply_pattern("blinker");
        assert_eq!(sim.last_step(), StepReport { births: 0, deaths: 0, population: 3 });

        let report = sim.advance();
        assert_eq!(report, StepReport { births: 2, deaths: 2, population: 3 });
        assert_eq!(sim.last_step(), report);

        sim.toggle(0, 0);
        assert_eq!(sim.last_step().population, 4);
        sim.toggle(0, 0);
        assert_eq!(sim.last_step().population, 3);
        assert!(!sim.toggle(9, 9));
        assert_eq!(sim.last_step().population, 3);

        sim.resize(4, 4);
        assert_eq!(sim.last_step().population, sim.grid().population());
        sim.clear();
        assert_eq!(sim.last_step(), StepReport::default());
    }

    #[test]
    fn test_algorithm_switch_keeps_results() {
        let config = SimConfig { seed: Some(8), ..SimConfig::default() };
        let mut a = Simulation::new(24, 24, &config);
        let mut b = Simulation::new(24, 24, &config);
        b.set_algorithm(a.algorithm().toggled());
        assert_ne!(a.algorithm(), b.algorithm());

        a.apply_pattern("random");
        b.apply_pattern("random");
        for _ in 0..4 {
            assert_eq!(a.advance(), b.advance());
        }
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_non_finite_probability_seeds_nothing() {
        for live_probability in [f64::NAN, f64::NEG_INFINITY] {
            let config = SimConfig { live_probability, seed: Some(4), ..SimConfig::default() };
            let mut sim = Simulation::new(10, 10, &config);
            assert!(sim.apply_pattern("random"));
            assert_eq!(sim.grid().population(), 0);
        }
    }

    #[test]
    fn test_clear() {
        let mut sim = sim(8, 8);
        sim.apply_pattern("random");
        sim.advance();
        sim.clear();
        assert_eq!(sim.generation(), 0);
        let grid = sim.grid();
        for r in 0..8 {
            for c in 0..8 {
                assert_eq!(grid.neighbors(r, c), 0);
            }
        }
    }
}
