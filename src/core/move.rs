use super::types::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Drop phase placement.
    Drop { to: Position },
    /// Move phase relocation to an 8-adjacent empty cell.
    Relocate { from: Position, to: Position },
}

impl Move {
    pub fn target(&self) -> Position {
        match *self {
            Move::Drop { to } | Move::Relocate { to, .. } => to,
        }
    }

    pub fn source(&self) -> Option<Position> {
        match *self {
            Move::Drop { .. } => None,
            Move::Relocate { from, .. } => Some(from),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Move::Drop { to } => write!(f, "Drop at {}", to),
            Move::Relocate { from, to } => write!(f, "{} -> {}", from, to),
        }
    }
}
