use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Side length of the Teeko board.
pub const BOARD_SIZE: usize = 5;

/// Pieces each player owns.
pub const PIECES_PER_PLAYER: usize = 4;

/// The eight neighbour offsets `(d_row, d_col)`: N, S, W, E, NW, NE, SW, SE.
///
/// Adjacency checks, successor generation and the tactical shortcuts all walk
/// this table so their iteration order agrees.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A player's piece colour. A player is identified by the colour it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    Black, // moves first
    Red,
}

impl Default for Piece {
    fn default() -> Self {
        Piece::Black
    }
}

impl Piece {
    pub fn opponent(self) -> Piece {
        match self {
            Piece::Black => Piece::Red,
            Piece::Red => Piece::Black,
        }
    }

    pub fn display_char(self) -> char {
        match self {
            Piece::Black => 'b',
            Piece::Red => 'r',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Piece::Black => write!(f, "Black"),
            Piece::Red => write!(f, "Red"),
        }
    }
}

/// Game phase, always derived from the number of occupied cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fewer than eight pieces on the board: moves are placements.
    Drop,
    /// All eight pieces placed: moves relocate a piece to an adjacent cell.
    Move,
}

/// Board coordinate (0-indexed, row 0 at the top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Position { row, col }
    }

    /// Steps by `(d_row, d_col)`, or `None` when that leaves the board.
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Position> {
        let row = self.row as i32 + d_row;
        let col = self.col as i32 + d_col;
        if (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col) {
            Some(Position::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// On-board neighbours in `DIRECTIONS` order.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        DIRECTIONS
            .iter()
            .filter_map(move |&(dr, dc)| self.offset(dr, dc))
    }

    /// Chebyshev distance of exactly one.
    pub fn is_adjacent(self, other: Position) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }

    /// False for coordinates that only arrive from outside, e.g. a hand-edited record.
    pub fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// All 25 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

/// Column letter then row digit, e.g. `C2` for the centre.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({}, {})", self.row, self.col);
        }
        write!(f, "{}{}", (b'A' + self.col as u8) as char, self.row)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePositionError {
    #[error("expected a column letter A-E followed by a row digit 0-4, got {0:?}")]
    BadFormat(String),
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bad = || ParsePositionError::BadFormat(trimmed.to_string());
        let mut chars = trimmed.chars();
        let (letter, digit) = match (chars.next(), chars.next(), chars.next()) {
            (Some(l), Some(d), None) => (l.to_ascii_uppercase(), d),
            _ => return Err(bad()),
        };
        if !('A'..='E').contains(&letter) || !('0'..='4').contains(&digit) {
            return Err(bad());
        }
        Ok(Position::new(
            digit as usize - '0' as usize,
            letter as usize - 'A' as usize,
        ))
    }
}
