use super::{Cell, Grid, RandomSource};

/// Represents a fixed template that can be stamped onto the grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<(usize, usize)>, // (row, col) of alive cells, relative to top-left
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|(r, _)| *r).max().unwrap_or(0) + 1;
        let cols = cells.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        Self { name, description, rows, cols, cells }
    }

    /// Top-left anchor that centers this template on `grid`.
    /// May be negative when the template is larger than the grid.
    pub fn centered_anchor(&self, grid: &Grid) -> (isize, isize) {
        let (rows, cols) = grid.dimensions();
        let top = (rows / 2) as isize - (self.rows / 2) as isize;
        let left = (cols / 2) as isize - (self.cols / 2) as isize;
        (top, left)
    }

    /// Write the template's alive cells at `anchor`, each with a random
    /// palette variant. Cells landing off the grid are dropped.
    /// Returns the number of cells written.
    pub fn stamp(
        &self,
        grid: &mut Grid,
        anchor: (isize, isize),
        palette_size: u8,
        rng: &mut dyn RandomSource,
    ) -> usize {
        let mut written = 0;
        for &(dr, dc) in &self.cells {
            let row = anchor.0 + dr as isize;
            let col = anchor.1 + dc as isize;
            if row < 0 || col < 0 {
                continue;
            }
            if grid.get(row as usize, col as usize).is_some() {
                grid.set(row as usize, col as usize, Cell::alive(rng.variant(palette_size)));
                written += 1;
            }
        }
        written
    }
}

/// A selectable initial layout
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Seed {
    /// Independent coin flip per cell
    Random,
    /// Template centered on the grid
    Template(Pattern),
}

impl Seed {
    pub fn name(&self) -> &'static str {
        match self {
            Seed::Random => "random",
            Seed::Template(pattern) => pattern.name,
        }
    }

    /// Clear `grid` and lay this seed down on it. Returns live cell count.
    pub fn apply(
        &self,
        grid: &mut Grid,
        live_probability: f64,
        palette_size: u8,
        rng: &mut dyn RandomSource,
    ) -> usize {
        grid.clear();
        match self {
            Seed::Random => {
                let (rows, cols) = grid.dimensions();
                let mut written = 0;
                for row in 0..rows {
                    for col in 0..cols {
                        if rng.chance(live_probability) {
                            grid.set(row, col, Cell::alive(rng.variant(palette_size)));
                            written += 1;
                        }
                    }
                }
                written
            }
            Seed::Template(pattern) => {
                let anchor = pattern.centered_anchor(grid);
                pattern.stamp(grid, anchor, palette_size, rng)
            }
        }
    }
}

/// Named seeds, looked up case-insensitively
#[derive(Clone, Debug)]
pub struct PatternLibrary {
    seeds: Vec<Seed>,
}

impl PatternLibrary {
    pub fn new(seeds: Vec<Seed>) -> Self {
        Self { seeds }
    }

    pub fn get(&self, name: &str) -> Option<&Seed> {
        let name = name.trim();
        self.seeds.iter().find(|seed| seed.name().eq_ignore_ascii_case(name))
    }

    /// Seed names in display order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.seeds.iter().map(Seed::name)
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        let mut seeds = vec![Seed::Random];
        seeds.extend(presets::all_patterns().into_iter().map(Seed::Template));
        Self::new(seeds)
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves one cell down-right every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (0, 1), (0, 2)],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    pub fn block() -> Pattern {
        Pattern::new(
            "block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        let mut cells = Vec::with_capacity(48);
        for &edge in &[0, 5, 7, 12] {
            for &run in &[2, 3, 4, 8, 9, 10] {
                cells.push((edge, run));
                cells.push((run, edge));
            }
        }
        Pattern::new("pulsar", "Oscillator (period 3)", cells)
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "lwss",
            "Lightweight spaceship (period 4)",
            vec![
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
        )
    }

    /// R-pentomino - stabilizes after 1103 generations on an unbounded plane
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "r-pentomino",
            "Methuselah",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    pub fn acorn() -> Pattern {
        Pattern::new(
            "acorn",
            "Methuselah",
            vec![
                (0, 1),
                (1, 3),
                (2, 0), (2, 1), (2, 4), (2, 5), (2, 6),
            ],
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "glider-gun",
            "Produces gliders (period 30)",
            vec![
                // Left square
                (4, 0), (5, 0), (4, 1), (5, 1),
                // Left circle
                (4, 10), (5, 10), (6, 10),
                (3, 11), (7, 11),
                (2, 12), (8, 12),
                (2, 13), (8, 13),
                (5, 14),
                (3, 15), (7, 15),
                (4, 16), (5, 16), (6, 16),
                (5, 17),
                // Middle pieces
                (2, 20), (3, 20), (4, 20),
                (2, 21), (3, 21), (4, 21),
                (1, 22), (5, 22),
                (0, 24), (1, 24), (5, 24), (6, 24),
                // Right square
                (2, 34), (3, 34), (2, 35), (3, 35),
            ],
        )
    }

    /// Get all available templates
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            beacon(),
            block(),
            toad(),
            pulsar(),
            lwss(),
            r_pentomino(),
            acorn(),
            glider_gun(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::testing::Scripted;

    fn alive_set(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter_alive().map(|(r, c, _)| (r, c)).collect()
    }

    #[test]
    fn test_bounding_boxes() {
        assert_eq!((presets::glider().rows, presets::glider().cols), (3, 3));
        assert_eq!((presets::blinker().rows, presets::blinker().cols), (1, 3));
        assert_eq!((presets::beacon().rows, presets::beacon().cols), (4, 4));
        assert_eq!((presets::pulsar().rows, presets::pulsar().cols), (13, 13));
        assert_eq!(presets::pulsar().cells.len(), 48);
        assert_eq!((presets::glider_gun().rows, presets::glider_gun().cols), (9, 36));
    }

    #[test]
    fn test_template_is_centered() {
        let mut grid = Grid::new(10, 10);
        let mut rng = Scripted::variants(&[1]);
        Seed::Template(presets::blinker()).apply(&mut grid, 0.15, 6, &mut rng);
        // center (5, 5), blinker 1x3 -> anchor (5, 4)
        assert_eq!(alive_set(&grid), vec![(5, 4), (5, 5), (5, 6)]);
    }

    #[test]
    fn test_apply_clears_previous_residue() {
        let mut grid = Grid::new(20, 20);
        let mut rng = Scripted::variants(&[2]);
        Seed::Template(presets::glider_gun()).apply(&mut grid, 0.15, 6, &mut rng);
        grid.set(0, 0, Cell::alive(1));

        let written = Seed::Template(presets::glider()).apply(&mut grid, 0.15, 6, &mut rng);
        assert_eq!(written, 5);
        assert_eq!(grid.population(), 5);
        assert_eq!(alive_set(&grid), vec![(9, 10), (10, 11), (11, 9), (11, 10), (11, 11)]);
    }

    #[test]
    fn test_oversized_template_is_clipped() {
        let mut grid = Grid::new(5, 5);
        let mut rng = Scripted::variants(&[1]);
        let gun = presets::glider_gun();
        let written = Seed::Template(gun.clone()).apply(&mut grid, 0.15, 6, &mut rng);
        assert!(written < gun.cells.len());
        assert_eq!(grid.population(), written);
    }

    #[test]
    fn test_stamp_assigns_random_variants() {
        let mut grid = Grid::new(6, 6);
        let mut rng = Scripted::variants(&[3, 1, 6]);
        presets::blinker().stamp(&mut grid, (0, 0), 6, &mut rng);
        let variants: Vec<_> = grid.iter_alive().map(|(_, _, cell)| cell.state()).collect();
        assert_eq!(variants, vec![3, 1, 6]);
    }

    #[test]
    fn test_random_seed_follows_coin_flips() {
        let mut grid = Grid::new(2, 3);
        let mut rng = Scripted::variants(&[4]).with_coins(&[true, false, false]);
        let written = Seed::Random.apply(&mut grid, 0.15, 6, &mut rng);
        assert_eq!(written, 2);
        assert_eq!(alive_set(&grid), vec![(0, 0), (1, 0)]);
        assert_eq!(grid.get(1, 0), Some(Cell::alive(4)));
    }

    #[test]
    fn test_random_density_near_probability() {
        let mut grid = Grid::new(100, 100);
        let mut rng = crate::domain::SeededRandom::new(11);
        let written = Seed::Random.apply(&mut grid, 0.15, 6, &mut rng);
        assert!((1200..1800).contains(&written), "got {written}");
    }

    #[test]
    fn test_library_lookup() {
        let library = PatternLibrary::default();
        for name in ["random", "glider", "blinker", "beacon"] {
            assert!(library.get(name).is_some(), "{name} missing");
        }
        assert_eq!(library.get(" Glider ").map(Seed::name), Some("glider"));
        assert!(library.get("spaceship").is_none());
        assert_eq!(library.names().next(), Some("random"));
        assert_eq!(library.len(), 11);
    }
}
