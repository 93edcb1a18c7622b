use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight grid steps used for scanning. `y` grows downward, so
/// `Right` is plain left-to-right reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    DownRight,
    UpLeft,
    DownLeft,
    UpRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
        Direction::DownRight,
        Direction::UpLeft,
        Direction::DownLeft,
        Direction::UpRight,
    ];

    /// Unit step `(dx, dy)`.
    pub fn step(self) -> (i64, i64) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
            Direction::DownRight => (1, 1),
            Direction::UpLeft => (-1, -1),
            Direction::DownLeft => (-1, 1),
            Direction::UpRight => (1, -1),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::DownRight => "down-right",
            Direction::UpLeft => "up-left",
            Direction::DownLeft => "down-left",
            Direction::UpRight => "up-right",
        }
    }

    /// Forward reading at stride 1 is just the text itself.
    pub fn is_scanned_at(self, stride: usize) -> bool {
        !(stride == 1 && self == Direction::Right)
    }

    /// Directions scanned at a given stride.
    pub fn scanned_at(stride: usize) -> impl Iterator<Item = Direction> {
        Self::ALL.into_iter().filter(move |d| d.is_scanned_at(stride))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
