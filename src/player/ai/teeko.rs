use super::config::AIConfig;
use super::minimax::Searcher;
use super::tactics::{self, Tactic};
use crate::core::{Board, Move, Phase, Piece};
use crate::logic::extract_move;
use crate::player::PlayerController;
use log::debug;

type Rule = fn(&Board, Piece) -> Option<Move>;

/// Shortcut rules in priority order.
const DROP_RULES: &[(Tactic, Rule)] = &[
    (Tactic::DropWin, tactics::drop_win),
    (Tactic::DropBlock, tactics::drop_block),
    (Tactic::DropThreatBlock, tactics::drop_threat_block),
    (Tactic::Opening, tactics::opening),
];

const MOVE_RULES: &[(Tactic, Rule)] = &[
    (Tactic::RelocateWin, tactics::relocate_win),
    (Tactic::RelocateBlock, tactics::relocate_block),
];

/// The Teeko agent: tactical shortcuts first, then fixed-depth minimax.
pub struct TeekoAI {
    pub piece: Piece,
    pub name: String,
    tactics_enabled: bool,
    searcher: Searcher,
}

impl TeekoAI {
    pub fn new(piece: Piece, name: &str) -> Self {
        Self::with_config(piece, name, AIConfig::get())
    }

    pub fn with_config(piece: Piece, name: &str, config: &AIConfig) -> Self {
        Self {
            piece,
            name: name.to_string(),
            tactics_enabled: config.tactics.enabled,
            searcher: Searcher::new(piece, config.search.clone()),
        }
    }

    /// First shortcut rule that fires for this phase.
    fn tactical_move(&self, board: &Board) -> Option<(Tactic, Move)> {
        let rules = match board.phase() {
            Phase::Drop => DROP_RULES,
            Phase::Move => MOVE_RULES,
        };
        rules
            .iter()
            .find_map(|&(tactic, rule)| rule(board, self.piece).map(|mv| (tactic, mv)))
    }

    /// Picks the agent's move on `board`. `None` only if it has no legal move.
    pub fn select_move(&self, board: &Board) -> Option<Move> {
        if self.tactics_enabled {
            if let Some((tactic, mv)) = self.tactical_move(board) {
                debug!("{}: {:?} -> {}", self.name, tactic, mv);
                return Some(mv);
            }
        }

        let (best, value) = self.searcher.best_successor(board)?;
        let mv = extract_move(board, &best, self.piece);
        if let Some(mv) = mv {
            debug!("{}: search -> {} ({:.2})", self.name, mv, value);
        }
        mv
    }
}

impl PlayerController for TeekoAI {
    fn choose_move(&self, board: &Board, _legal_moves: &[Move]) -> Option<Move> {
        self.select_move(board)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{board_from_rows, Position};
    use crate::logic::{apply_move, game_value, legal_moves, validate_move};
    use crate::player::ai::config::OpponentModel;

    fn ai(piece: Piece) -> TeekoAI {
        TeekoAI::with_config(piece, "AI", &AIConfig::default())
    }

    #[test]
    fn test_first_move_takes_centre() {
        let mv = ai(Piece::Black).select_move(&Board::new());
        assert_eq!(mv, Some(Move::Drop { to: Position::new(2, 2) }));
    }

    #[test]
    fn test_completes_own_row_first() {
        let board = board_from_rows(&[
            "b b b . .",
            ". . . . .",
            ". r . r .",
            ". . . . .",
            ". . r . .",
        ]);
        let mv = ai(Piece::Black).select_move(&board);
        assert_eq!(mv, Some(Move::Drop { to: Position::new(0, 3) }));
    }

    #[test]
    fn test_win_beats_block() {
        let board = board_from_rows(&[
            "b b b . .",
            "r r r . .",
            ". . . . .",
            ". . . . .",
            ". . . . .",
        ]);
        let mv = ai(Piece::Black).select_move(&board);
        assert_eq!(mv, Some(Move::Drop { to: Position::new(0, 3) }));
    }

    #[test]
    fn test_blocks_opponent_row() {
        let board = board_from_rows(&[
            ". . . . .",
            "r r r . .",
            ". . b . .",
            ". . . . .",
            "b . . . b",
        ]);
        let mv = ai(Piece::Black).select_move(&board);
        assert_eq!(mv, Some(Move::Drop { to: Position::new(1, 3) }));
    }

    #[test]
    fn test_move_phase_win_by_relocation() {
        let board = board_from_rows(&[
            ". . . . b",
            "b b b . .",
            "r r r . .",
            ". . . . .",
            ". . . . r",
        ]);
        let mv = ai(Piece::Black).select_move(&board).unwrap();
        assert_eq!(
            mv,
            Move::Relocate {
                from: Position::new(0, 4),
                to: Position::new(1, 3)
            }
        );
        assert_eq!(game_value(&apply_move(&board, &mv, Piece::Black), Piece::Black), 1);
    }

    #[test]
    fn test_search_without_tactics_still_wins() {
        let board = board_from_rows(&[
            ". . . . b",
            "b b b . .",
            "r r r . .",
            ". . . . .",
            ". . . . r",
        ]);
        let mut config = AIConfig::default();
        config.tactics.enabled = false;
        let agent = TeekoAI::with_config(Piece::Black, "AI", &config);
        let mv = agent.select_move(&board).unwrap();
        let next = apply_move(&board, &mv, Piece::Black);
        assert_eq!(game_value(&next, Piece::Black), 1);
    }

    #[test]
    fn test_mirror_model_ignores_replies() {
        // Same board: the mirror model lets Black move twice in a row, so
        // E0 -> E1 (first in order) already looks like a proven win.
        let board = board_from_rows(&[
            ". . . . b",
            "b b b . .",
            "r r r . .",
            ". . . . .",
            ". . . . r",
        ]);
        let mut config = AIConfig::default();
        config.tactics.enabled = false;
        config.search.opponent_model = OpponentModel::Mirror;
        let agent = TeekoAI::with_config(Piece::Black, "AI", &config);
        assert_eq!(
            agent.select_move(&board),
            Some(Move::Relocate {
                from: Position::new(0, 4),
                to: Position::new(1, 4)
            })
        );
    }

    #[test]
    fn test_mirror_model_with_tactics_takes_immediate_win() {
        let board = board_from_rows(&[
            ". . . . b",
            "b b b . .",
            "r r r . .",
            ". . . . .",
            ". . . . r",
        ]);
        let mut config = AIConfig::default();
        config.search.opponent_model = OpponentModel::Mirror;
        let agent = TeekoAI::with_config(Piece::Black, "AI", &config);
        assert_eq!(
            agent.select_move(&board),
            Some(Move::Relocate {
                from: Position::new(0, 4),
                to: Position::new(1, 3)
            })
        );
    }

    #[test]
    fn test_selected_move_is_legal_and_round_trips() {
        let board = board_from_rows(&[
            "b . . . r",
            ". r . . .",
            ". . b . .",
            ". r . b r",
            "b . . . .",
        ]);
        for piece in [Piece::Black, Piece::Red] {
            let agent = ai(piece);
            let mv = agent.select_move(&board).unwrap();
            assert!(legal_moves(&board, piece).contains(&mv));
            assert_eq!(validate_move(&board, &mv, piece), Ok(()));
            let next = apply_move(&board, &mv, piece);
            assert_eq!(extract_move(&board, &next, piece), Some(mv));
        }
    }

    #[test]
    fn test_input_board_is_not_mutated() {
        let board = board_from_rows(&[
            "b . . . r",
            ". r . . .",
            ". . b . .",
            ". r . b r",
            "b . . . .",
        ]);
        let snapshot = board;
        let _ = ai(Piece::Red).select_move(&board);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_no_legal_move_returns_none() {
        // Not reachable in play: extra Red pieces wall in both Black pieces
        let board = board_from_rows(&[
            "b r . . .",
            "r r . . .",
            ". . . . .",
            ". . . r r",
            ". . . r b",
        ]);
        let mut config = AIConfig::default();
        config.tactics.enabled = false;
        let agent = TeekoAI::with_config(Piece::Black, "AI", &config);
        assert_eq!(agent.select_move(&board), None);
    }
}
