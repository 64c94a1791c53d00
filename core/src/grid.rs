//! Storage for a validated map and the per-cell tables computed from it.

use bsq_common::map::{position::Position, tile::Tile};

/// A rectangular, row-major table holding one value per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Table<T> {
    /// Creates a `height` x `width` table with every cell set to `value`.
    pub fn filled(height: usize, width: usize, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }
}

impl<T> Table<T> {
    /// Wraps row-major cells. `cells.len()` must be a multiple of `width`.
    pub fn from_cells(width: usize, cells: Vec<T>) -> Self {
        let height: usize = if width == 0 { 0 } else { cells.len() / width };
        debug_assert_eq!(width * height, cells.len());
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, pos: Position) -> Option<&T> {
        self.offset(pos).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        self.offset(pos).map(move |i| &mut self.cells[i])
    }

    pub fn row(&self, row: usize) -> &[T] {
        let start: usize = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Every cell with its position, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        let width: usize = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, value)| (Position::new(i / width, i % width), value))
    }

    fn offset(&self, pos: Position) -> Option<usize> {
        if pos.row < self.height && pos.col < self.width {
            Some(pos.row * self.width + pos.col)
        } else {
            None
        }
    }
}

impl<T> std::ops::Index<Position> for Table<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &T {
        match self.get(pos) {
            Some(value) => value,
            None => panic!(
                "position {pos} out of bounds for {}x{} table",
                self.height, self.width
            ),
        }
    }
}

impl<T> std::ops::IndexMut<Position> for Table<T> {
    fn index_mut(&mut self, pos: Position) -> &mut T {
        let (height, width) = (self.height, self.width);
        match self.get_mut(pos) {
            Some(value) => value,
            None => panic!("position {pos} out of bounds for {height}x{width} table"),
        }
    }
}

/// A validated map: every row has the same width and holds only tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Table<Tile>,
}

impl Grid {
    pub fn new(tiles: Table<Tile>) -> Self {
        Self { tiles }
    }

    pub fn width(&self) -> usize {
        self.tiles.width()
    }

    pub fn height(&self) -> usize {
        self.tiles.height()
    }

    pub fn tiles(&self) -> &Table<Tile> {
        &self.tiles
    }

    pub fn tile(&self, pos: Position) -> Tile {
        self.tiles[pos]
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut Table<Tile> {
        &mut self.tiles
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
