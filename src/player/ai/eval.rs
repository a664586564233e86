//! # Heuristic Evaluation
//!
//! Scores a non-terminal board by how far each side has advanced toward a win.
//! One pass over every window of the line table: for each side keep the
//! largest number of its own pieces seen in any single window. Other cells in
//! the window (blank or enemy) do not disqualify it.
//!
//! The side with the larger best count owns the score:
//! `own / 4` when `own >= opp`, otherwise `-opp / 4`. Four in one window would
//! already be a win, so on boards that reach here the result stays inside
//! `(-1, 1)`.

use crate::core::{Board, Piece, PIECES_PER_PLAYER};
use crate::logic::lines::WINDOWS;

/// Best own and opponent window counts, in that order.
pub fn best_counts(board: &Board, me: Piece) -> (usize, usize) {
    let opp = me.opponent();
    WINDOWS.iter().fold((0, 0), |(best_me, best_opp), w| {
        let (mut mine, mut theirs) = (0, 0);
        for &cell in &w.cells {
            match board.get_piece(cell) {
                Some(p) if p == me => mine += 1,
                Some(p) if p == opp => theirs += 1,
                _ => {}
            }
        }
        (best_me.max(mine), best_opp.max(theirs))
    })
}

/// Heuristic value of `board` for `me`. Only meaningful on non-terminal boards.
pub fn heuristic(board: &Board, me: Piece) -> f64 {
    let (mine, theirs) = best_counts(board, me);
    let scale = PIECES_PER_PLAYER as f64;
    if mine >= theirs {
        mine as f64 / scale
    } else {
        theirs as f64 / -scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board_from_rows;

    #[test]
    fn test_empty_board_scores_zero() {
        assert_eq!(heuristic(&Board::new(), Piece::Black), 0.0);
    }

    #[test]
    fn test_tie_favours_self() {
        let board = board_from_rows(&[
            "b b . . .",
            ". . . . .",
            ". . . . .",
            ". . . . .",
            ". . . r r",
        ]);
        assert_eq!(heuristic(&board, Piece::Black), 0.5);
        assert_eq!(heuristic(&board, Piece::Red), 0.5);
    }

    #[test]
    fn test_opponent_threat_is_negative() {
        let board = board_from_rows(&[
            "r . r r .",
            ". . . . .",
            ". . b . .",
            ". . . . .",
            ". . . . b",
        ]);
        assert_eq!(best_counts(&board, Piece::Black), (2, 3));
        assert_eq!(heuristic(&board, Piece::Black), -0.75);
        assert_eq!(heuristic(&board, Piece::Red), 0.75);
    }

    #[test]
    fn test_enemy_in_window_does_not_disqualify() {
        // B0 C0 E0 share the row window B0..E0 with a red piece at D0
        let board = board_from_rows(&[
            ". b b r b",
            ". . . . .",
            ". . . . .",
            ". . . . .",
            ". . . . .",
        ]);
        assert_eq!(best_counts(&board, Piece::Black), (3, 1));
    }

    #[test]
    fn test_box_counts() {
        let board = board_from_rows(&[
            ". . . . .",
            ". b . . .",
            ". . b . .",
            ". . . . .",
            ". . . r .",
        ]);
        // B1 and C2 share a box and a diagonal, nothing holds three
        assert_eq!(best_counts(&board, Piece::Black), (2, 1));
    }
}
