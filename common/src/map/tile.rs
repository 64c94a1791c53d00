/// What a single cell of the grid holds.
///
/// Only `Empty` and `Obstacle` ever come out of a map file. `Filled` is written
/// over the empty cells of the winning square before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Obstacle,
    Filled,
}

impl Tile {
    pub fn is_empty(self) -> bool {
        self == Tile::Empty
    }

    pub fn is_obstacle(self) -> bool {
        self == Tile::Obstacle
    }
}
