use crate::core::{Board, Move, Piece};
use crate::player::PlayerController;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Mutex;

/// Plays a uniformly random legal move.
pub struct RandomAI {
    pub name: String,
    rng: Mutex<StdRng>,
}

impl RandomAI {
    pub fn new(_piece: Piece, name: &str) -> Self {
        Self::with_rng(name, StdRng::from_entropy())
    }

    /// Reproducible sequence of choices for a given seed.
    pub fn seeded(_piece: Piece, name: &str, seed: u64) -> Self {
        Self::with_rng(name, StdRng::seed_from_u64(seed))
    }

    fn with_rng(name: &str, rng: StdRng) -> Self {
        RandomAI {
            name: name.to_string(),
            rng: Mutex::new(rng),
        }
    }
}

impl PlayerController for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, _board: &Board, legal_moves: &[Move]) -> Option<Move> {
        let mut rng = self.rng.lock().ok()?;
        legal_moves.choose(&mut *rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::legal_moves;

    #[test]
    fn test_picks_from_legal_moves() {
        let board = Board::new();
        let moves = legal_moves(&board, Piece::Red);
        let ai = RandomAI::seeded(Piece::Red, "Random", 7);
        for _ in 0..20 {
            let mv = ai.choose_move(&board, &moves).unwrap();
            assert!(moves.contains(&mv));
        }
        assert_eq!(ai.choose_move(&board, &[]), None);
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let moves = legal_moves(&board, Piece::Black);
        let a = RandomAI::seeded(Piece::Black, "A", 42);
        let b = RandomAI::seeded(Piece::Black, "B", 42);
        for _ in 0..10 {
            assert_eq!(a.choose_move(&board, &moves), b.choose_move(&board, &moves));
        }
    }
}
