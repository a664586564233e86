use crate::core::{Board, Move};

/// プレイヤー操作のtrait
pub trait PlayerController: Send + Sync {
    /// `None` means the player resigns or has nothing to play.
    fn choose_move(&self, board: &Board, legal_moves: &[Move]) -> Option<Move>;
    fn name(&self) -> &str;
}
