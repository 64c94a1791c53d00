//! # bsq common
//!
//! Value types shared by the analysis engine and the command line front end.
//!
//! * **[`map`]**: markers, tiles and positions describing a map file.
//! * **[`layer`]**: which per-cell table gets printed.
//! * **[`config`]**: options collected from the command line.
//! * **[`error`]**: the single failure kind of a map analysis.

pub mod config;
pub mod error;
pub mod layer;
pub mod map;
