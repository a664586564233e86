//! Shortcut rules tried before any search.
//!
//! Each rule returns the move it would play, or `None` when it does not
//! apply. The caller decides the order they are consulted in.

use crate::core::{Board, Move, Piece, Position};
use crate::logic::lines;
use crate::logic::{apply_move, game_value, winner};

const CENTRE: Position = Position { row: 2, col: 2 };

/// Centre's orthogonal neighbours, then its diagonal neighbours.
const CENTRE_RING: [Position; 8] = [
    Position { row: 2, col: 1 },
    Position { row: 2, col: 3 },
    Position { row: 1, col: 2 },
    Position { row: 3, col: 2 },
    Position { row: 1, col: 1 },
    Position { row: 1, col: 3 },
    Position { row: 3, col: 1 },
    Position { row: 3, col: 3 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tactic {
    DropWin,
    DropBlock,
    DropThreatBlock,
    Opening,
    RelocateWin,
    RelocateBlock,
}

/// Empty cells where one extra `piece` would complete a winning window.
pub fn winning_cells(board: &Board, piece: Piece) -> impl Iterator<Item = Position> + '_ {
    board.empty_cells().filter(move |&pos| {
        let mut next = *board;
        next.place_piece(pos, piece);
        winner(&next) == Some(piece)
    })
}

pub fn drop_win(board: &Board, me: Piece) -> Option<Move> {
    winning_cells(board, me).next().map(|to| Move::Drop { to })
}

/// Fires even when the opponent has no drops left; its threat then only
/// matters once the move phase starts.
pub fn drop_block(board: &Board, me: Piece) -> Option<Move> {
    winning_cells(board, me.opponent())
        .next()
        .map(|to| Move::Drop { to })
}

/// With two enemy pieces against our one, take the first blank of any line
/// holding exactly those two enemy pieces and two blanks.
pub fn drop_threat_block(board: &Board, me: Piece) -> Option<Move> {
    let opp = me.opponent();
    if board.count(opp) != 2 || board.count(me) != 1 {
        return None;
    }

    lines::lines().find_map(|w| {
        let theirs = w.cells.iter().filter(|&&c| board.get_piece(c) == Some(opp)).count();
        let blanks: Vec<Position> = w.cells.iter().copied().filter(|&c| board.is_empty(c)).collect();
        if theirs == 2 && blanks.len() == 2 {
            Some(Move::Drop { to: blanks[0] })
        } else {
            None
        }
    })
}

/// First two drops: the centre, otherwise the closest free cell around it.
pub fn opening(board: &Board, me: Piece) -> Option<Move> {
    let candidates: &[Position] = match board.count(me) {
        0 if board.is_empty(CENTRE) => return Some(Move::Drop { to: CENTRE }),
        0 => &CENTRE_RING[..4],
        1 => &CENTRE_RING,
        _ => return None,
    };
    candidates
        .iter()
        .find(|&&p| board.is_empty(p))
        .map(|&to| Move::Drop { to })
}

/// Slides one of our pieces onto a cell that completes a win for us.
pub fn relocate_win(board: &Board, me: Piece) -> Option<Move> {
    winning_cells(board, me).find_map(|to| {
        to.neighbors()
            .filter(|&from| board.get_piece(from) == Some(me))
            .map(|from| Move::Relocate { from, to })
            .find(|mv| game_value(&apply_move(board, mv, me), me) == 1)
    })
}

/// Covers the opponent's first winning cell by sliding an adjacent piece of
/// ours onto it, provided an enemy piece also touches that cell.
pub fn relocate_block(board: &Board, me: Piece) -> Option<Move> {
    let opp = me.opponent();
    let to = winning_cells(board, opp).next()?;
    if !to.neighbors().any(|p| board.get_piece(p) == Some(opp)) {
        return None;
    }
    to.neighbors()
        .find(|&p| board.get_piece(p) == Some(me))
        .map(|from| Move::Relocate { from, to })
}
