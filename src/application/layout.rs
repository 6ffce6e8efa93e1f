use crate::config::Density;

/// Layout maps surface pixels to grid cells and back.
/// Recomputed whenever the surface changes size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    cell_size: u32,
    rows: usize,
    cols: usize,
    offset_x: f32,
    offset_y: f32,
}

impl Layout {
    /// Fit a centered grid onto a `width` x `height` surface.
    /// Cell size, rows and cols are all at least 1.
    pub fn new(width: u32, height: u32, density: &Density) -> Self {
        let across = density.cells_across_for(width).max(1);
        let cell_size = (width / across).max(1);
        let cols = (width / cell_size).max(1) as usize;
        let rows = (height / cell_size).max(1) as usize;

        let used_w = cols as f32 * cell_size as f32;
        let used_h = rows as f32 * cell_size as f32;
        Self {
            cell_size,
            rows,
            cols,
            offset_x: (width as f32 - used_w) / 2.0,
            offset_y: (height as f32 - used_h) / 2.0,
        }
    }

    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Centering translation as (x, y)
    pub const fn offset(&self) -> (f32, f32) {
        (self.offset_x, self.offset_y)
    }

    /// Unclamped cell coordinate under a pixel, as (row, col)
    pub fn pixel_to_cell(&self, x: f32, y: f32) -> (i64, i64) {
        let size = self.cell_size as f32;
        let row = ((y - self.offset_y) / size).floor() as i64;
        let col = ((x - self.offset_x) / size).floor() as i64;
        (row, col)
    }

    /// Cell under a pixel, if it lies on the grid
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let (row, col) = self.pixel_to_cell(x, y);
        let on_grid = (0..self.rows as i64).contains(&row) && (0..self.cols as i64).contains(&col);
        on_grid.then_some((row as usize, col as usize))
    }

    /// Top-left pixel of a cell
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        let size = self.cell_size as f32;
        (self.offset_x + col as f32 * size, self.offset_y + row as f32 * size)
    }

    pub fn cell_center(&self, row: usize, col: usize) -> (f32, f32) {
        let (x, y) = self.cell_origin(row, col);
        let half = self.cell_size as f32 / 2.0;
        (x + half, y + half)
    }
}
