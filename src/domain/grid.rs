use super::Cell;

/// Grid is the bounded 2D matrix of cell states, stored row-major.
/// Dimensions are always at least 1x1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            cells: vec![Cell::DEAD; rows * cols],
        }
    }

    /// Grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.contains(row, col)
            .then(|| self.cells[self.index(row, col)])
    }

    /// Set cell at position. Returns false (and does nothing) when out of range.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        if !self.contains(row, col) {
            return false;
        }
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        true
    }

    /// Flip a cell: alive becomes dead, dead becomes `revived`.
    /// Out-of-range coordinates are ignored.
    pub fn toggle(&mut self, row: usize, col: usize, revived: Cell) -> bool {
        match self.get(row, col) {
            Some(cell) if cell.is_alive() => self.set(row, col, Cell::DEAD),
            Some(_) => self.set(row, col, revived),
            None => false,
        }
    }

    /// Count live cells in the Moore neighborhood. No wraparound:
    /// positions off the grid count as dead.
    /// Off-grid positions have no neighbors.
    pub fn neighbors(&self, row: usize, col: usize) -> u8 {
        if !self.contains(row, col) {
            return 0;
        }
        let row_lo = row.saturating_sub(1);
        let col_lo = col.saturating_sub(1);
        let row_hi = (row + 1).min(self.rows - 1);
        let col_hi = (col + 1).min(self.cols - 1);

        let mut count = 0;
        for r in row_lo..=row_hi {
            let base = r * self.cols;
            for c in col_lo..=col_hi {
                if (r, c) != (row, col) && self.cells[base + c].is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.fill(Cell::DEAD);
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over live cells with their positions
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(idx, cell)| (idx / self.cols, idx % self.cols, *cell))
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Build a grid of new dimensions. With `preserve`, the overlapping
    /// top-left sub-rectangle is copied over; everything else starts dead.
    pub fn resized(&self, rows: usize, cols: usize, preserve: bool) -> Self {
        let mut next = Grid::new(rows, cols);
        if preserve {
            let keep_rows = self.rows.min(next.rows);
            let keep_cols = self.cols.min(next.cols);
            for row in 0..keep_rows {
                let src = self.index(row, 0);
                let dst = next.index(row, 0);
                next.cells[dst..dst + keep_cols]
                    .copy_from_slice(&self.cells[src..src + keep_cols]);
            }
        }
        next
    }
}
