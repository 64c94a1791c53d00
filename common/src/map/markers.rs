//! # Map Header
//!
//! The first line of a map file reads `<rows><empty><obstacle><full>`, for
//! example `10.ox`: ten grid lines follow, `.` is an empty cell, `o` an
//! obstacle, and `x` marks the cells of the largest square on output.

use std::str::FromStr;

use crate::error::MapError;
use crate::map::tile::Tile;

/// The three characters a map uses for its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub empty: char,
    pub obstacle: char,
    pub full: char,
}

impl Markers {
    /// Builds a marker set, rejecting an empty marker shared with another role.
    ///
    /// `obstacle` and `full` may be the same character since full cells never
    /// appear in the input.
    pub fn new(empty: char, obstacle: char, full: char) -> Result<Self, MapError> {
        if empty == obstacle || empty == full {
            return Err(MapError::DuplicateMarker(empty));
        }
        Ok(Self {
            empty,
            obstacle,
            full,
        })
    }

    /// Classifies an input character. Full cells are never part of an input.
    pub fn classify(&self, ch: char) -> Option<Tile> {
        if ch == self.empty {
            Some(Tile::Empty)
        } else if ch == self.obstacle {
            Some(Tile::Obstacle)
        } else {
            None
        }
    }

    pub fn symbol(&self, tile: Tile) -> char {
        match tile {
            Tile::Empty => self.empty,
            Tile::Obstacle => self.obstacle,
            Tile::Filled => self.full,
        }
    }
}

/// The parsed first line of a map file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub rows: usize,
    pub markers: Markers,
}

impl FromStr for Header {
    type Err = MapError;

    /// Parses `<rows><empty><obstacle><full>`.
    ///
    /// The markers are the last three characters, so the row count is
    /// everything before them and must be a non-empty decimal number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() < 4 {
            return Err(MapError::InvalidHeader(s.to_string()));
        }

        let split: usize = chars.len() - 3;
        let count: String = chars[..split].iter().collect();
        let rows: usize = count
            .parse()
            .map_err(|_| MapError::InvalidHeader(s.to_string()))?;

        let markers: Markers = Markers::new(chars[split], chars[split + 1], chars[split + 2])?;

        Ok(Header { rows, markers })
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        let header: Header = "10.ox".parse().unwrap();
        assert_eq!(header.rows, 10);
        assert_eq!(header.markers.empty, '.');
        assert_eq!(header.markers.obstacle, 'o');
        assert_eq!(header.markers.full, 'x');
    }

    #[test]
    fn test_parse_header_multi_digit_count() {
        let header: Header = "1234abc".parse().unwrap();
        assert_eq!(header.rows, 1234);
        assert_eq!(header.markers, Markers::new('a', 'b', 'c').unwrap());
    }

    #[test]
    fn test_parse_header_zero_rows() {
        let header: Header = "0.ox".parse().unwrap();
        assert_eq!(header.rows, 0);
    }

    #[test]
    fn test_parse_header_too_short() {
        assert!(matches!(
            "".parse::<Header>(),
            Err(MapError::InvalidHeader(_))
        ));
        assert!(matches!(
            ".ox".parse::<Header>(),
            Err(MapError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_parse_header_non_numeric_count() {
        assert!(matches!(
            "ten.ox".parse::<Header>(),
            Err(MapError::InvalidHeader(_))
        ));
        assert!(matches!(
            "-1.ox".parse::<Header>(),
            Err(MapError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_header_rejects_empty_marker_collisions() {
        // Empty == Obstacle
        assert!(matches!(
            "3..x".parse::<Header>(),
            Err(MapError::DuplicateMarker('.'))
        ));
        // Empty == Full
        assert!(matches!(
            "3.o.".parse::<Header>(),
            Err(MapError::DuplicateMarker('.'))
        ));
        // All three identical
        assert!("3...".parse::<Header>().is_err());
    }

    #[test]
    fn test_header_accepts_obstacle_equal_to_full() {
        let header: Header = "3.oo".parse().unwrap();
        assert_eq!(header.markers.obstacle, header.markers.full);
    }

    #[test]
    fn test_markers_classify_and_symbol() {
        let markers = Markers::new('.', 'o', 'x').unwrap();
        assert_eq!(markers.classify('.'), Some(Tile::Empty));
        assert_eq!(markers.classify('o'), Some(Tile::Obstacle));
        assert_eq!(markers.classify('x'), None);
        assert_eq!(markers.classify('#'), None);

        assert_eq!(markers.symbol(Tile::Empty), '.');
        assert_eq!(markers.symbol(Tile::Obstacle), 'o');
        assert_eq!(markers.symbol(Tile::Filled), 'x');
    }
}
