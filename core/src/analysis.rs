//! # Map Analysis
//!
//! Ties the loader, the two finder passes and the marking together, and
//! produces the text printed for one map file.

use std::io::BufRead;
use std::path::Path;
use std::time::Instant;

use bsq_common::config::Config;
use bsq_common::error::{MAP_ERROR_MESSAGE, Result};
use bsq_common::layer::Layer;
use bsq_common::map::markers::Markers;
use tracing::{debug, info};

use crate::finder::{self, BestSquare};
use crate::grid::{Grid, Table};
use crate::{loader, marking, render};

/// Everything computed for one map. The grid already has its best square filled.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub grid: Grid,
    pub markers: Markers,
    pub runs: Table<usize>,
    pub sizes: Table<usize>,
    pub best: Option<BestSquare>,
}

impl Analysis {
    /// Runs both passes over a loaded grid, then fills the winner.
    pub fn new(mut grid: Grid, markers: Markers) -> Self {
        let runs: Table<usize> = finder::vertical_runs(&grid);
        let (sizes, best) = finder::square_sizes(&grid, &runs);
        marking::mark(&mut grid, best.as_ref());

        Self {
            grid,
            markers,
            runs,
            sizes,
            best,
        }
    }

    pub fn render(&self, layer: Layer) -> String {
        match layer {
            Layer::Map => render::render_grid(&self.grid, &self.markers),
            Layer::Runs => render::render_table(&self.runs),
            Layer::Sizes => render::render_table(&self.sizes),
        }
    }
}

pub fn solve<R: BufRead>(reader: R) -> Result<Analysis> {
    let (grid, markers) = loader::load(reader)?;
    Ok(Analysis::new(grid, markers))
}

pub fn solve_str(source: &str) -> Result<Analysis> {
    solve(source.as_bytes())
}

pub fn solve_file(path: &Path) -> Result<Analysis> {
    let (grid, markers) = loader::load_file(path)?;
    Ok(Analysis::new(grid, markers))
}

/// Analyses one map file and returns exactly what should be printed for it:
/// the requested layer, or the failure line when the map is invalid.
pub fn report_file(path: &Path, cfg: &Config) -> String {
    let start_time: Instant = Instant::now();

    match solve_file(path) {
        Ok(analysis) => {
            match analysis.best {
                Some(best) => info!(
                    "{}: {}x{} map, largest square {} at {} in {:.2?}",
                    path.display(),
                    analysis.grid.height(),
                    analysis.grid.width(),
                    best.size,
                    best.corner,
                    start_time.elapsed()
                ),
                None => info!(
                    "{}: {}x{} map has no empty cell",
                    path.display(),
                    analysis.grid.height(),
                    analysis.grid.width()
                ),
            }
            analysis.render(cfg.layer)
        }
        Err(e) => {
            debug!("{}: {e}", path.display());
            format!("{MAP_ERROR_MESSAGE}\n")
        }
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
