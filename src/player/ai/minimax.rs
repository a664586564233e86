use super::config::{OpponentModel, SearchConfig};
use super::eval::heuristic;
use crate::core::{Board, Piece};
use crate::logic::{game_value, successors};
use log::debug;
use rayon::prelude::*;

/// Proven win / loss. No heuristic value reaches these, so hitting one ends
/// the loop at that node.
const WIN: f64 = 1.0;
const LOSS: f64 = -1.0;

/// Fixed-depth minimax from the point of view of `me`.
#[derive(Debug, Clone)]
pub struct Searcher {
    me: Piece,
    config: SearchConfig,
}

impl Searcher {
    pub fn new(me: Piece, config: SearchConfig) -> Self {
        Self { me, config }
    }

    /// Piece that moves at a max (`true`) or min (`false`) node.
    fn mover(&self, maximizing: bool) -> Piece {
        match self.config.opponent_model {
            OpponentModel::Alternating if !maximizing => self.me.opponent(),
            _ => self.me,
        }
    }

    /// Terminal verdict, or the heuristic once `depth` reaches the limit.
    fn leaf_value(&self, board: &Board, depth: usize) -> Option<f64> {
        let verdict = game_value(board, self.me);
        if verdict != 0 {
            return Some(verdict as f64);
        }
        if depth >= self.config.depth_limit {
            return Some(heuristic(board, self.me));
        }
        None
    }

    pub fn max_value(&self, board: &Board, depth: usize) -> f64 {
        if let Some(v) = self.leaf_value(board, depth) {
            return v;
        }

        let children = successors(board, self.mover(true));
        if children.is_empty() {
            // 手詰まり
            return heuristic(board, self.me);
        }

        let mut max_eval = f64::NEG_INFINITY;
        for child in &children {
            max_eval = max_eval.max(self.min_value(child, depth + 1));
            if max_eval == WIN {
                break;
            }
        }
        max_eval
    }

    pub fn min_value(&self, board: &Board, depth: usize) -> f64 {
        if let Some(v) = self.leaf_value(board, depth) {
            return v;
        }

        let children = successors(board, self.mover(false));
        if children.is_empty() {
            return heuristic(board, self.me);
        }

        let mut min_eval = f64::INFINITY;
        for child in &children {
            min_eval = min_eval.min(self.max_value(child, depth + 1));
            if min_eval == LOSS {
                break;
            }
        }
        min_eval
    }

    /// Value of a board the agent has just moved to.
    ///
    /// With an alternating model the opponent replies next, so this is a min
    /// node. The mirror model scores it as a max node like the legacy engine.
    pub fn root_value(&self, board: &Board) -> f64 {
        match self.config.opponent_model {
            OpponentModel::Alternating => self.min_value(board, 1),
            OpponentModel::Mirror => self.max_value(board, 1),
        }
    }

    /// Searches every successor of `board` for `me` and returns the first one
    /// with the strictly greatest value, with that value.
    pub fn best_successor(&self, board: &Board) -> Option<(Board, f64)> {
        let children = successors(board, self.me);

        let values: Vec<f64> = if self.config.parallel_root {
            children.par_iter().map(|b| self.root_value(b)).collect()
        } else {
            children.iter().map(|b| self.root_value(b)).collect()
        };

        let mut best: Option<(Board, f64)> = None;
        for (child, value) in children.into_iter().zip(values) {
            if best.map_or(true, |(_, v)| value > v) {
                best = Some((child, value));
            }
        }

        if let Some((_, value)) = best {
            debug!(
                "{:?}: searched to depth {}, best value {:.2}",
                self.me, self.config.depth_limit, value
            );
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{board_from_rows, Position};

    fn searcher(me: Piece, model: OpponentModel) -> Searcher {
        Searcher::new(
            me,
            SearchConfig {
                depth_limit: 3,
                opponent_model: model,
                parallel_root: false,
            },
        )
    }

    #[test]
    fn test_terminal_returned_even_at_depth_zero() {
        let board = board_from_rows(&[
            "r r r r .",
            ". . . . .",
            ". b . . .",
            ". . b . .",
            ". b . . .",
        ]);
        let s = searcher(Piece::Black, OpponentModel::Alternating);
        assert_eq!(s.max_value(&board, 0), LOSS);
        assert_eq!(s.min_value(&board, 5), LOSS);
    }

    #[test]
    fn test_depth_limit_returns_heuristic() {
        let board = board_from_rows(&[
            "b b . . .",
            ". . . . .",
            ". . . . .",
            ". . . . .",
            ". . . . r",
        ]);
        let s = searcher(Piece::Black, OpponentModel::Alternating);
        assert_eq!(s.max_value(&board, 3), heuristic(&board, Piece::Black));
    }

    #[test]
    fn test_finds_forced_win_in_move_phase() {
        // Black holds A1 B1 C1 and E0 can slide into D1. Earlier successors
        // (E0 -> E1, E0 -> D0) only threaten, and Red can cover D1 from C2.
        let board = board_from_rows(&[
            ". . . . b",
            "b b b . .",
            "r r r . .",
            ". . . . .",
            ". . . . r",
        ]);
        let s = searcher(Piece::Black, OpponentModel::Alternating);
        let (best, value) = s.best_successor(&board).unwrap();
        assert_eq!(value, WIN);
        assert_eq!(best.get_piece(Position::new(1, 3)), Some(Piece::Black));
        assert_eq!(game_value(&best, Piece::Black), 1);
    }

    #[test]
    fn test_parallel_root_matches_sequential() {
        let board = board_from_rows(&[
            "b . . . r",
            ". r . . .",
            ". . b . .",
            ". r . b r",
            "b . . . .",
        ]);
        let seq = searcher(Piece::Red, OpponentModel::Alternating);
        let mut config = seq.config.clone();
        config.parallel_root = true;
        let par = Searcher::new(Piece::Red, config);
        assert_eq!(seq.best_successor(&board), par.best_successor(&board));
    }

    #[test]
    fn test_alternating_model_sees_opponent_reply() {
        // Red holds B3 C3 E3 and E2 can slide into D3. Every Black move that
        // leaves D3 open loses at once.
        let board = board_from_rows(&[
            "b . . . .",
            ". . . . .",
            ". . b . r",
            ". r r . r",
            "b . . b .",
        ]);
        let s = searcher(Piece::Black, OpponentModel::Alternating);
        let (best, _) = s.best_successor(&board).unwrap();
        assert_eq!(best.get_piece(Position::new(3, 3)), Some(Piece::Black));

        // Mirror never lets Red reply, so it leaves D3 open
        let mirror = searcher(Piece::Black, OpponentModel::Mirror);
        let (best, _) = mirror.best_successor(&board).unwrap();
        assert_ne!(best.get_piece(Position::new(3, 3)), Some(Piece::Black));
    }
}
