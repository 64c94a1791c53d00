//! Draws the winning square onto the grid.

use bsq_common::map::{position::Position, tile::Tile};

use crate::finder::BestSquare;
use crate::grid::Grid;

impl Grid {
    /// Sets every cell covered by `square` to [`Tile::Filled`].
    ///
    /// Cells outside the grid are ignored, and filling twice leaves the grid
    /// as filling once.
    pub fn fill(&mut self, square: &BestSquare) {
        let tiles = self.tiles_mut();
        for row in square.corner.row..square.corner.row + square.size {
            for col in square.corner.col..square.corner.col + square.size {
                if let Some(tile) = tiles.get_mut(Position::new(row, col)) {
                    *tile = Tile::Filled;
                }
            }
        }
    }
}

/// Fills the best square, if there is one.
pub fn mark(grid: &mut Grid, best: Option<&BestSquare>) {
    if let Some(square) = best {
        grid.fill(square);
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
