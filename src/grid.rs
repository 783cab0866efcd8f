// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! The cell grid: 48 rows x 64 columns of 10x10 squares tiling the 640x480 window.
//! It is generated once and never changed, randomness only comes in when the
//! frame loop picks a cell to fill.

use crate::{util::Rect, CELL_SIZE, GRID_COLS, GRID_ROWS};

pub type RectGrid = [[Rect; GRID_COLS]; GRID_ROWS];

/// Builds the grid row-major, starting at (0,0)
pub fn create_rect_grid() -> RectGrid {
    let mut grid = [[Rect::default(); GRID_COLS]; GRID_ROWS];
    let mut y = 0i32;
    for row in grid.iter_mut() {
        let mut x = 0i32;
        for cell in row.iter_mut() {
            *cell = Rect::new(x, y, CELL_SIZE, CELL_SIZE);
            x += CELL_SIZE as i32;
        }
        y += CELL_SIZE as i32;
    }
    grid
}
