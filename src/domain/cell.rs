/// Cell is the fundamental unit of the simulation.
/// State 0 is dead; any other value is alive and names a palette variant.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Cell(u8);

/// Outcome of the neighbor-count rule for a single cell
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Fate {
    /// Alive cell keeps its state and variant
    Survive,
    /// Dead cell comes alive with a fresh variant
    Birth,
    /// Cell is (or stays) dead
    Die,
}

impl Cell {
    pub const DEAD: Cell = Cell(0);

    /// Marks a birth whose variant has not been drawn yet.
    /// Only ever stored in a scratch buffer mid-generation.
    pub(crate) const NEWBORN: Cell = Cell(u8::MAX);

    /// Largest usable palette variant; the value above it is [`Cell::NEWBORN`]
    pub const MAX_VARIANT: u8 = u8::MAX - 1;

    /// Alive cell carrying palette variant `variant` (1-based)
    pub const fn alive(variant: u8) -> Self {
        debug_assert!(variant > 0 && variant <= Self::MAX_VARIANT);
        Cell(variant)
    }

    /// Raw state value: 0 for dead, 1..=K for alive
    pub const fn state(self) -> u8 {
        self.0
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        self.0 != 0
    }

    /// Palette variant if alive
    pub const fn variant(self) -> Option<u8> {
        match self.0 {
            0 => None,
            v => Some(v),
        }
    }

    /// Pure function to compute the fate based on Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Fate {
        match (self.is_alive(), neighbors) {
            (true, 2 | 3) => Fate::Survive,
            (false, 3) => Fate::Birth,
            _ => Fate::Die,
        }
    }
}
