//! Text output for grids and per-cell tables.

use std::fmt::Write;

use bsq_common::map::markers::Markers;

use crate::grid::{Grid, Table};

/// Renders the grid with its markers, one newline-terminated line per row.
pub fn render_grid(grid: &Grid, markers: &Markers) -> String {
    let mut out = String::with_capacity(grid.height() * (grid.width() + 1));
    for row in grid.tiles().rows() {
        out.extend(row.iter().map(|tile| markers.symbol(*tile)));
        out.push('\n');
    }
    out
}

/// Renders a numeric table, values right-aligned to the widest one and
/// separated by a single space.
pub fn render_table(table: &Table<usize>) -> String {
    let width: usize = table
        .iter()
        .map(|(_, value)| value.to_string().len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for row in table.rows() {
        let line: Vec<String> = row.iter().map(|v| format!("{v:>width$}")).collect();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", line.join(" "));
    }
    out
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
