//! # Square Finder
//!
//! Locates the largest square made only of empty cells.
//!
//! The search runs as two passes, each producing its own table:
//! * [`vertical_runs`]: for every cell, how many empty cells start there and
//!   continue straight down, the cell itself included.
//! * [`square_sizes`]: for every cell, the side of the largest empty square
//!   having that cell as its upper-left corner, plus the overall winner.
//!
//! A square of side `k` anchored at `(r, c)` exists exactly when each of the
//! columns `c..c + k` has a vertical run of at least `k` at row `r`. The
//! smallest run seen only shrinks while the side only grows, so the second
//! pass can stop at the first column that breaks the condition.

use bsq_common::map::position::Position;
use tracing::trace;

use crate::grid::{Grid, Table};

/// The winning square: its upper-left corner and side length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestSquare {
    pub corner: Position,
    pub size: usize,
}

impl BestSquare {
    /// Whether `pos` lies inside the square.
    pub fn contains(&self, pos: Position) -> bool {
        (self.corner.row..self.corner.row + self.size).contains(&pos.row)
            && (self.corner.col..self.corner.col + self.size).contains(&pos.col)
    }
}

/// First pass: counts consecutive empty cells downward from every cell.
///
/// Columns are independent. Each one is walked bottom to top with a counter
/// that grows on empty cells and drops to zero on anything else.
pub fn vertical_runs(grid: &Grid) -> Table<usize> {
    let mut runs: Table<usize> = Table::filled(grid.height(), grid.width(), 0);

    for col in 0..grid.width() {
        let mut run: usize = 0;
        for row in (0..grid.height()).rev() {
            let pos = Position::new(row, col);
            run = if grid.tile(pos).is_empty() { run + 1 } else { 0 };
            runs[pos] = run;
        }
    }

    trace!("vertical runs computed for {} columns", grid.width());
    runs
}

/// Second pass: sizes the largest square anchored at every cell.
///
/// Cells are visited in row-major order and the best square is only replaced
/// by a strictly larger one, so the first square found wins ties. Returns
/// `None` for the best square when the grid has no empty cell.
pub fn square_sizes(grid: &Grid, runs: &Table<usize>) -> (Table<usize>, Option<BestSquare>) {
    let mut sizes: Table<usize> = Table::filled(grid.height(), grid.width(), 0);
    let mut best: Option<BestSquare> = None;

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let corner = Position::new(row, col);
            let size: usize = square_at(grid, runs, corner);
            sizes[corner] = size;
            best = keep_best(best, corner, size);
        }
    }

    trace!("square sizes computed, best: {best:?}");
    (sizes, best)
}

fn square_at(grid: &Grid, runs: &Table<usize>, corner: Position) -> usize {
    let mut bound: usize = runs[corner];
    let mut side: usize = 1;

    for col in corner.col + 1..grid.width() {
        let pos = Position::new(corner.row, col);
        if grid.tile(pos).is_obstacle() {
            break;
        }

        let run: usize = runs[pos];
        if side < bound && side < run {
            side += 1;
            bound = bound.min(run);
        } else {
            break;
        }
    }

    bound.min(side)
}

fn keep_best(best: Option<BestSquare>, corner: Position, size: usize) -> Option<BestSquare> {
    let current: usize = best.map_or(0, |b| b.size);
    if size > current {
        Some(BestSquare { corner, size })
    } else {
        best
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
