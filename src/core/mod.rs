pub mod board;
pub mod r#move;
pub mod setup;
pub mod types;

pub use board::Board;
pub use r#move::Move;
pub use setup::board_from_rows;
pub use types::{
    ParsePositionError, Phase, Piece, Position, BOARD_SIZE, DIRECTIONS, PIECES_PER_PLAYER,
};
