//! # Map Loader
//!
//! Turns the text of a map file into a validated [`Grid`].
//!
//! The source is consumed one line at a time:
//! 1. The header gives the declared line count and the markers.
//! 2. Every following line is a grid row. Blank lines count as lines but do
//!    not become rows.
//! 3. The first row fixes the width and every other row must match it.
//! 4. The number of lines after the header must equal the declared count.
//!
//! Any violation ends the load with a [`MapError`]; nothing partial is kept.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use bsq_common::error::{MapError, Result};
use bsq_common::map::markers::{Header, Markers};
use bsq_common::map::tile::Tile;
use tracing::trace;

use crate::grid::{Grid, Table};

/// Reads and validates a map from any line-oriented source.
pub fn load<R: BufRead>(reader: R) -> Result<(Grid, Markers)> {
    let mut lines = reader.lines();

    let header_line: String = lines.next().ok_or(MapError::MissingHeader)??;
    let header: Header = header_line.parse()?;
    let markers: Markers = header.markers;

    let mut width: Option<usize> = None;
    let mut tiles: Vec<Tile> = Vec::new();
    let mut read: usize = 0;

    for line in lines {
        let line: String = line?;
        read += 1;

        if line.is_empty() {
            trace!("skipping blank line {}", read + 1);
            continue;
        }

        // File line numbers are 1-based and the header is line 1.
        let row: Vec<Tile> = parse_row(&line, read + 1, &markers)?;

        match width {
            None => width = Some(row.len()),
            Some(expected) if expected != row.len() => {
                return Err(MapError::InconsistentWidth {
                    line: read + 1,
                    expected,
                    found: row.len(),
                });
            }
            Some(_) => {}
        }

        tiles.extend(row);
    }

    if read != header.rows {
        return Err(MapError::RowCount {
            declared: header.rows,
            found: read,
        });
    }

    let grid = Grid::new(Table::from_cells(width.unwrap_or(0), tiles));
    trace!("loaded {}x{} grid", grid.height(), grid.width());
    Ok((grid, markers))
}

/// Loads a map held in memory.
pub fn load_str(source: &str) -> Result<(Grid, Markers)> {
    load(source.as_bytes())
}

/// Opens and loads a map file.
pub fn load_file(path: &Path) -> Result<(Grid, Markers)> {
    let file: File = File::open(path)?;
    load(BufReader::new(file))
}

fn parse_row(line: &str, line_no: usize, markers: &Markers) -> Result<Vec<Tile>> {
    line.chars()
        .enumerate()
        .map(|(col, ch)| {
            markers.classify(ch).ok_or(MapError::UnknownCharacter {
                found: ch,
                line: line_no,
                col,
            })
        })
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
