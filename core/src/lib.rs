//! # bsq core
//!
//! Finds the largest square of empty cells in a character map.
//!
//! * **[`loader`]**: parses and validates map text into a [`grid::Grid`].
//! * **[`finder`]**: the vertical-run and square-size passes.
//! * **[`marking`]**: draws the winning square onto the grid.
//! * **[`render`]**: turns grids and tables back into text.
//! * **[`analysis`]**: runs the whole pipeline for one map.

pub mod analysis;
pub mod finder;
pub mod grid;
pub mod loader;
pub mod marking;
pub mod render;
