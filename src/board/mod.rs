//! Board representation for Slideways

pub mod board;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

// Re-exports
pub use board::Board;

/// Default board size (4 rows of 10 columns)
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// The two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Get opponent
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Zero-based index, for per-player arrays
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Player number as shown to users (1 or 2)
    #[inline]
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// Content of a single grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Owned(Player),
    /// Outside the active play window of its row
    Sentinel,
}

impl Cell {
    #[inline]
    pub fn is_sentinel(self) -> bool {
        self == Cell::Sentinel
    }

    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Owned(player) => Some(player),
            _ => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Owned(Player::One) => '1',
            Cell::Owned(Player::Two) => '2',
            Cell::Sentinel => '#',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Empty),
            '1' => Some(Cell::Owned(Player::One)),
            '2' => Some(Cell::Owned(Player::Two)),
            '#' => Some(Cell::Sentinel),
            _ => None,
        }
    }
}

/// Row shift direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// A single move: mark a cell, or rotate a whole row by one position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Place(Pos),
    Shift { row: u8, direction: Direction },
}

impl Move {
    #[inline]
    pub fn place(row: u8, col: u8) -> Self {
        Move::Place(Pos::new(row, col))
    }

    #[inline]
    pub fn shift(row: u8, direction: Direction) -> Self {
        Move::Shift { row, direction }
    }

    /// Row touched by this move
    #[inline]
    pub fn row(self) -> u8 {
        match self {
            Move::Place(pos) => pos.row,
            Move::Shift { row, .. } => row,
        }
    }

    /// True when `self` shifts the same row as `other` in the opposite direction
    pub fn is_inverse_of(self, other: Move) -> bool {
        match (self, other) {
            (
                Move::Shift { row, direction },
                Move::Shift {
                    row: other_row,
                    direction: other_direction,
                },
            ) => row == other_row && direction == other_direction.opposite(),
            _ => false,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place(pos) => write!(f, "place ({}, {})", pos.row, pos.col),
            Move::Shift { row, direction } => write!(f, "shift row {} {:?}", row, direction),
        }
    }
}
