use macroquad::prelude::*;

use crate::application::Layout;
use crate::config::{SimConfig, parse_hex_color};
use crate::domain::Grid;

pub const BACKGROUND: Color = Color::new(0.06, 0.06, 0.08, 1.0);

/// Anything the grid can be painted onto
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
}

/// The macroquad window
#[derive(Debug, Default)]
pub struct MacroquadSurface;

impl Surface for MacroquadSurface {
    fn width(&self) -> f32 {
        screen_width()
    }

    fn height(&self) -> f32 {
        screen_height()
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        draw_rectangle(x, y, w, h, color);
    }
}

/// Fixed set of live-cell colors. State k is drawn with entry k-1.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Build from validated config colors; unparsable entries fall back to white
    pub fn from_config(config: &SimConfig) -> Self {
        let colors = config
            .palette
            .iter()
            .map(|hex| match parse_hex_color(hex) {
                Some([r, g, b]) => Color::from_rgba(r, g, b, 255),
                None => WHITE,
            })
            .collect();
        Self::new(colors)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for a live state (1-based). Out-of-range states wrap.
    pub fn color(&self, state: u8) -> Color {
        if self.colors.is_empty() || state == 0 {
            return WHITE;
        }
        self.colors[(state as usize - 1) % self.colors.len()]
    }
}

/// Paint one frame: a background fill, then one rect per live cell.
/// Reads the grid only.
pub fn render(grid: &Grid, layout: &Layout, palette: &Palette, surface: &mut impl Surface) {
    surface.fill_rect(0.0, 0.0, surface.width(), surface.height(), BACKGROUND);

    let size = layout.cell_size() as f32;
    for (row, col, cell) in grid.iter_alive() {
        let (x, y) = layout.cell_origin(row, col);
        surface.fill_rect(x, y, size, size, palette.color(cell.state()));
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Records draw calls instead of drawing
    #[derive(Debug)]
    pub struct RecordingSurface {
        pub width: f32,
        pub height: f32,
        pub rects: Vec<(f32, f32, f32, f32, Color)>,
    }

    impl RecordingSurface {
        pub fn new(width: f32, height: f32) -> Self {
            Self { width, height, rects: Vec::new() }
        }
    }

    impl Surface for RecordingSurface {
        fn width(&self) -> f32 {
            self.width
        }

        fn height(&self) -> f32 {
            self.height
        }

        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
            self.rects.push((x, y, w, h, color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingSurface;
    use super::*;
    use crate::config::Density;
    use crate::domain::Cell;

    #[test]
    fn test_background_then_one_rect_per_live_cell() {
        let layout = Layout::new(1000, 800, &Density::default());
        let (rows, cols) = layout.dimensions();
        let mut grid = Grid::new(rows, cols);
        grid.set(0, 0, Cell::alive(1));
        grid.set(3, 5, Cell::alive(2));

        let palette = Palette::from_config(&SimConfig::default());
        let mut surface = RecordingSurface::new(1000.0, 800.0);
        render(&grid, &layout, &palette, &mut surface);

        assert_eq!(surface.rects.len(), 3);
        assert_eq!(surface.rects[0], (0.0, 0.0, 1000.0, 800.0, BACKGROUND));
        assert_eq!(surface.rects[1], (2.0, 4.0, 12.0, 12.0, palette.color(1)));
        assert_eq!(surface.rects[2], (62.0, 40.0, 12.0, 12.0, palette.color(2)));
    }

    #[test]
    fn test_palette_indexing() {
        let palette = Palette::new(vec![RED, GREEN]);
        assert_eq!(palette.color(1), RED);
        assert_eq!(palette.color(2), GREEN);
        assert_eq!(palette.color(3), RED);
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_palette_from_config() {
        let palette = Palette::from_config(&SimConfig::default());
        assert_eq!(palette.len(), 6);
        assert_eq!(palette.color(1), Color::from_rgba(0xFF, 0x6B, 0x6B, 255));
    }
}
