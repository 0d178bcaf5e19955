use crate::types::Position;

/// One of the eight straight-line directions on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::West,
        Direction::East,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// Returns `(d_row, d_col)`, each in `-1..=1`.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::SouthWest => (1, -1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
        }
    }

    fn from_delta(d_row: i32, d_col: i32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.delta() == (d_row, d_col))
    }
}

/// Direction of a single step from `from` to a neighbouring `to`.
/// Returns `None` when the cells are the same or do not touch.
pub fn step_between(from: Position, to: Position) -> Option<Direction> {
    let d_row = to.row as i32 - from.row as i32;
    let d_col = to.col as i32 - from.col as i32;
    Direction::from_delta(d_row, d_col)
}

/// True when `a` and `b` touch, diagonals included.
pub fn is_adjacent(a: Position, b: Position) -> bool {
    let d_row = (a.row as i32 - b.row as i32).abs();
    let d_col = (a.col as i32 - b.col as i32).abs();
    d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0)
}

/// Checks that `path` runs in one straight line.
///
/// The direction is taken from the first step; every later step must move
/// one cell in that same direction. Paths shorter than two cells have no
/// direction and are rejected, as are steps that stay put or skip cells.
pub fn is_linear_path(path: &[Position]) -> bool {
    let [first, second, ..] = path else {
        return false;
    };
    let Some(direction) = step_between(*first, *second) else {
        return false;
    };

    path.windows(2)
        .skip(1)
        .all(|step| step_between(step[0], step[1]) == Some(direction))
}
