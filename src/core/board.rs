use super::types::{Phase, Piece, Position, BOARD_SIZE, PIECES_PER_PLAYER};
use std::fmt;

/// 盤面
///
/// A plain `Copy` snapshot. Search clones freely; only the game driver owns a
/// board that changes over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_piece(&self, pos: Position) -> Option<Piece> {
        self.cells[pos.row][pos.col]
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get_piece(pos).is_none()
    }

    pub fn place_piece(&mut self, pos: Position, piece: Piece) {
        self.cells[pos.row][pos.col] = Some(piece);
    }

    pub fn remove_piece(&mut self, pos: Position) -> Option<Piece> {
        self.cells[pos.row][pos.col].take()
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c == Some(piece))
            .count()
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn phase(&self) -> Phase {
        if self.occupied() < 2 * PIECES_PER_PLAYER {
            Phase::Drop
        } else {
            Phase::Move
        }
    }

    /// Cells holding `piece`, row-major.
    pub fn positions_of(&self, piece: Piece) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&p| self.get_piece(p) == Some(piece))
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&p| self.is_empty(p))
    }
}

/// Plain text form: one labelled line per row, then the column letters.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{}:", row)?;
            for cell in cells {
                let c = cell.map(Piece::display_char).unwrap_or('.');
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   A B C D E")
    }
}
