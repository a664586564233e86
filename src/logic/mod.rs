//! Game rules: win detection, move generation, move application and
//! validation of moves arriving from outside the engine.

pub mod lines;

use crate::core::{Board, Move, Phase, Piece, Position, PIECES_PER_PLAYER};
use thiserror::Error;

/// Why a move was refused by [`validate_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("illegal move: {0} is off the board")]
    OffBoard(Position),
    #[error("illegal move: {0} is already occupied")]
    Occupied(Position),
    #[error("you don't have a piece at {0}")]
    NotYourPiece(Position),
    #[error("illegal move: can only move to an adjacent space ({from} -> {to})")]
    NotAdjacent { from: Position, to: Position },
    #[error("all pieces are on the board: move one instead of dropping")]
    DropInMovePhase,
    #[error("pieces cannot be moved until all eight are on the board")]
    RelocateInDropPhase,
    #[error("all four pieces of this colour are already placed")]
    NoPiecesLeft,
}

/// The colour holding a winning window, if any. First match in table order.
pub fn winner(board: &Board) -> Option<Piece> {
    lines::WINDOWS.iter().find_map(|w| {
        let first = board.get_piece(w.cells[0])?;
        w.cells[1..]
            .iter()
            .all(|&c| board.get_piece(c) == Some(first))
            .then_some(first)
    })
}

/// 終局判定: +1 if `me` has won, -1 if the opponent has, 0 otherwise.
pub fn game_value(board: &Board, me: Piece) -> i32 {
    match winner(board) {
        Some(p) if p == me => 1,
        Some(_) => -1,
        None => 0,
    }
}

/// 合法手生成
///
/// Drop phase: every empty cell, row-major. Move phase: every piece of
/// `mover` row-major, each direction in `DIRECTIONS` order.
pub fn legal_moves(board: &Board, mover: Piece) -> Vec<Move> {
    match board.phase() {
        Phase::Drop => board.empty_cells().map(|to| Move::Drop { to }).collect(),
        Phase::Move => board
            .positions_of(mover)
            .flat_map(|from| {
                from.neighbors()
                    .filter(|&to| board.is_empty(to))
                    .map(move |to| Move::Relocate { from, to })
            })
            .collect(),
    }
}

/// Every board reachable by one move of `mover`, in `legal_moves` order.
pub fn successors(board: &Board, mover: Piece) -> Vec<Board> {
    legal_moves(board, mover)
        .iter()
        .map(|mv| apply_move(board, mv, mover))
        .collect()
}

/// 移動適用. Returns a new board; the input is untouched.
pub fn apply_move(board: &Board, mv: &Move, piece: Piece) -> Board {
    let mut next = *board;
    if let Move::Relocate { from, .. } = mv {
        next.remove_piece(*from);
    }
    next.place_piece(mv.target(), piece);
    next
}

/// Checks a move submitted for `piece` against `board` without applying it.
pub fn validate_move(board: &Board, mv: &Move, piece: Piece) -> Result<(), MoveError> {
    for pos in mv.source().into_iter().chain([mv.target()]) {
        if !pos.is_on_board() {
            return Err(MoveError::OffBoard(pos));
        }
    }

    match (board.phase(), mv) {
        (Phase::Move, Move::Drop { .. }) => return Err(MoveError::DropInMovePhase),
        (Phase::Drop, Move::Relocate { .. }) => return Err(MoveError::RelocateInDropPhase),
        (Phase::Drop, Move::Drop { .. }) if board.count(piece) >= PIECES_PER_PLAYER => {
            return Err(MoveError::NoPiecesLeft)
        }
        _ => {}
    }

    if let Move::Relocate { from, to } = *mv {
        if board.get_piece(from) != Some(piece) {
            return Err(MoveError::NotYourPiece(from));
        }
        if !from.is_adjacent(to) {
            return Err(MoveError::NotAdjacent { from, to });
        }
    }

    let to = mv.target();
    if !board.is_empty(to) {
        return Err(MoveError::Occupied(to));
    }
    Ok(())
}

/// Recovers the move of `piece` that turns `before` into `after`.
///
/// The cell that gained `piece` is the target; a cell that lost `piece` is
/// the source. `None` when no cell gained `piece`.
pub fn extract_move(before: &Board, after: &Board, piece: Piece) -> Option<Move> {
    let mut to = None;
    let mut from = None;
    for pos in Position::all() {
        let (old, new) = (before.get_piece(pos), after.get_piece(pos));
        if old == new {
            continue;
        }
        if new == Some(piece) {
            to = Some(pos);
        } else if old == Some(piece) {
            from = Some(pos);
        }
    }

    Some(match (from, to?) {
        (Some(from), to) => Move::Relocate { from, to },
        (None, to) => Move::Drop { to },
    })
}
