//! # Map Model
//!
//! The vocabulary of a map file:
//! * [`markers::Header`]: the first line, a row count followed by three markers.
//! * [`markers::Markers`]: the characters used for empty, obstacle and full cells.
//! * [`tile::Tile`]: the classified content of a single cell.
//! * [`position::Position`]: a (row, column) coordinate inside a grid.

pub mod markers;
pub mod position;
pub mod tile;
