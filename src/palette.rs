//! Two-color random pattern painted on the tower.

use kiss3d::color::{Color, RED, WHITE};
use rand::Rng;

/// A grid of coin flips deciding whether a segment is light or dark.
///
/// The grid has `bands` lines of `width` cells. It is sampled as
/// `cells[column % bands][row]`, so the pattern repeats around the ring every
/// `bands` columns. Rows past `width` have no cell and use the dark color.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    cells: Vec<Vec<bool>>,
    light: Color,
    dark: Color,
}

impl Pattern {
    /// Draws a fresh pattern of `bands × width` fair coin flips.
    pub fn random<R: Rng>(rng: &mut R, bands: usize, width: usize) -> Self {
        let cells: Vec<Vec<bool>> = (0..bands)
            .map(|_| (0..width).map(|_| rng.random_bool(0.5)).collect())
            .collect();

        Self::from_cells(cells)
    }

    /// Builds a pattern from explicit cells, using white and red.
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Self {
        Self {
            cells,
            light: WHITE,
            dark: RED,
        }
    }

    /// Replaces the two colors of the pattern.
    pub fn with_colors(mut self, light: Color, dark: Color) -> Self {
        self.light = light;
        self.dark = dark;
        self
    }

    /// Returns `true` if the segment at (`row`, `column`) uses the light color.
    pub fn is_light(&self, row: usize, column: usize) -> bool {
        if self.cells.is_empty() {
            return false;
        }

        let band = &self.cells[column % self.cells.len()];
        band.get(row).copied().unwrap_or(false)
    }

    /// Color of the segment at (`row`, `column`).
    pub fn color(&self, row: usize, column: usize) -> Color {
        if self.is_light(row, column) {
            self.light
        } else {
            self.dark
        }
    }
}
