//! Game loop driver: owns the authoritative board and applies only
//! validated moves to it.

pub mod record;

pub use record::GameRecord;

use crate::core::{Board, Move, Piece};
use crate::display::{render_board, DisplayState};
use crate::logic::{apply_move, legal_moves, validate_move, winner, MoveError};
use crate::player::PlayerController;
use anyhow::{bail, Context};
use log::info;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Piece),
    Resigned(Piece),
    /// Move phase can cycle forever; headless games stop at a ply limit.
    PlyLimit,
}

impl GameOutcome {
    pub fn winner(self) -> Option<Piece> {
        match self {
            GameOutcome::Win(p) => Some(p),
            GameOutcome::Resigned(p) => Some(p.opponent()),
            GameOutcome::PlyLimit => None,
        }
    }
}

pub struct Game {
    pub board: Board,
    pub current: Piece,
    pub history: Vec<Move>,
    /// Pause after each drawn ply so AI-vs-AI games can be followed.
    pub pace: Option<Duration>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Empty board, Black to move.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            current: Piece::Black,
            history: Vec::new(),
            pace: None,
        }
    }

    /// Validates `mv` for the side to move and applies it.
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        validate_move(&self.board, &mv, self.current)?;
        self.board = apply_move(&self.board, &mv, self.current);
        self.history.push(mv);
        self.current = self.current.opponent();
        Ok(())
    }

    pub fn winner(&self) -> Option<Piece> {
        winner(&self.board)
    }

    pub fn plies(&self) -> usize {
        self.history.len()
    }

    /// One ply: terminal check, then ask the side to move and apply its move.
    fn step(
        &mut self,
        black: &dyn PlayerController,
        red: &dyn PlayerController,
        show: bool,
    ) -> anyhow::Result<Option<GameOutcome>> {
        if let Some(w) = self.winner() {
            return Ok(Some(GameOutcome::Win(w)));
        }

        let controller = match self.current {
            Piece::Black => black,
            Piece::Red => red,
        };

        if show {
            let mut state = DisplayState::new();
            state.last_move = self.history.last().copied();
            state.status_msg = Some(format!(
                "{}'s turn ({}) - {} is thinking...",
                controller.name(),
                self.current,
                controller.name()
            ));
            render_board(&self.board, &state)?;
        }

        let moves = legal_moves(&self.board, self.current);
        if moves.is_empty() {
            bail!(
                "{} has no legal move on\n{}",
                self.current,
                self.board
            );
        }

        let Some(mv) = controller.choose_move(&self.board, &moves) else {
            info!("{} ({}) resigned", controller.name(), self.current);
            return Ok(Some(GameOutcome::Resigned(self.current)));
        };

        let mover = self.current;
        self.apply(mv)
            .with_context(|| format!("{} ({}) played {}", controller.name(), mover, mv))?;

        if show {
            if let Some(pace) = self.pace {
                std::thread::sleep(pace);
            }
        }
        Ok(None)
    }

    fn run(
        &mut self,
        black: &dyn PlayerController,
        red: &dyn PlayerController,
        show: bool,
        max_plies: Option<usize>,
    ) -> anyhow::Result<GameOutcome> {
        while max_plies.map_or(true, |limit| self.plies() < limit) {
            if let Some(outcome) = self.step(black, red, show)? {
                return Ok(outcome);
            }
        }
        Ok(self
            .winner()
            .map(GameOutcome::Win)
            .unwrap_or(GameOutcome::PlyLimit))
    }

    /// Plays to the end (or `max_plies`), redrawing the board every ply.
    pub fn play(
        &mut self,
        black: &dyn PlayerController,
        red: &dyn PlayerController,
        max_plies: Option<usize>,
    ) -> anyhow::Result<GameOutcome> {
        info!("game start: {} (Black) vs {} (Red)", black.name(), red.name());
        let outcome = self.run(black, red, true, max_plies)?;
        info!("game over after {} plies: {:?}", self.plies(), outcome);
        Ok(outcome)
    }

    /// Headless variant: no drawing, stops after `max_plies`.
    pub fn play_silent(
        &mut self,
        black: &dyn PlayerController,
        red: &dyn PlayerController,
        max_plies: usize,
    ) -> anyhow::Result<GameOutcome> {
        self.run(black, red, false, Some(max_plies))
    }

    pub fn record(&self, black_name: &str, red_name: &str, outcome: GameOutcome) -> GameRecord {
        GameRecord {
            black_name: black_name.to_string(),
            red_name: red_name.to_string(),
            moves: self.history.clone(),
            winner: outcome.winner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;
    use crate::player::{RandomAI, TeekoAI};
    use crate::player::ai::AIConfig;

    #[test]
    fn test_apply_alternates_and_rejects() {
        let mut game = Game::new();
        game.apply(Move::Drop { to: Position::new(2, 2) }).unwrap();
        assert_eq!(game.current, Piece::Red);
        assert_eq!(
            game.apply(Move::Drop { to: Position::new(2, 2) }),
            Err(MoveError::Occupied(Position::new(2, 2)))
        );
        // a rejected move leaves the game untouched
        assert_eq!(game.current, Piece::Red);
        assert_eq!(game.plies(), 1);
    }

    #[test]
    fn test_ai_beats_random_or_hits_limit() {
        let config = AIConfig::default();
        let ai = TeekoAI::with_config(Piece::Black, "AI", &config);
        let random = RandomAI::seeded(Piece::Red, "Random", 3);
        let mut game = Game::new();
        let outcome = game.play_silent(&ai, &random, 60).unwrap();
        match outcome {
            GameOutcome::Win(p) => assert_eq!(game.winner(), Some(p)),
            GameOutcome::PlyLimit => assert_eq!(game.plies(), 60),
            GameOutcome::Resigned(_) => panic!("nobody should resign"),
        }
        assert!(game.board.count(Piece::Black) <= 4);
        assert!(game.board.count(Piece::Red) <= 4);
    }

    #[test]
    fn test_record_replays_to_final_board() {
        let config = AIConfig::default();
        let black = RandomAI::seeded(Piece::Black, "A", 11);
        let red = TeekoAI::with_config(Piece::Red, "B", &config);
        let mut game = Game::new();
        let outcome = game.play_silent(&black, &red, 40).unwrap();
        let record = game.record("A", "B", outcome);
        assert_eq!(record.final_board().unwrap(), game.board);
    }
}
