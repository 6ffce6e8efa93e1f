use super::Grid;

/// Live grid plus scratch grid of identical dimensions.
/// Swapping only flips which slot is current; nothing is reallocated.
#[derive(Clone, Debug)]
pub struct GridBuffers {
    slots: [Grid; 2],
    current: usize,
}

impl GridBuffers {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            slots: [Grid::new(rows, cols), Grid::new(rows, cols)],
            current: 0,
        }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        self.slots[self.current].dimensions()
    }

    /// The live grid
    pub fn current(&self) -> &Grid {
        &self.slots[self.current]
    }

    /// The live grid, for edits made between generations
    pub fn current_mut(&mut self) -> &mut Grid {
        &mut self.slots[self.current]
    }

    /// Read the live grid while writing the scratch grid
    pub fn split_mut(&mut self) -> (&Grid, &mut Grid) {
        let [a, b] = &mut self.slots;
        if self.current == 0 { (&*a, b) } else { (&*b, a) }
    }

    /// Promote the scratch grid to live
    pub fn swap(&mut self) {
        self.current ^= 1;
    }

    /// Reallocate both grids. See [`Grid::resized`] for what survives.
    pub fn resize(&mut self, rows: usize, cols: usize, preserve: bool) {
        let live = self.current().resized(rows, cols, preserve);
        let (rows, cols) = live.dimensions();
        self.slots = [live, Grid::new(rows, cols)];
        self.current = 0;
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(Grid::clear);
    }
}
