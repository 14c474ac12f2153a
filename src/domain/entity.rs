/// Entities: the Player record and the four movement directions.

/// Movement direction, one grid step per turn.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Row/col delta for one step.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// WASD key mapping. Anything else is not a direction.
    pub fn from_key(c: char) -> Option<Direction> {
        match c.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Player {
    pub row: usize,
    pub col: usize,
    /// Treasure collected so far. Never decreases; gates the exit.
    pub treasure: u32,
}

impl Player {
    pub fn new(row: usize, col: usize) -> Self {
        Player { row, col, treasure: 0 }
    }
}
