//! Teeko: a two-player game on a 5×5 board, four pieces each.
//!
//! Players first drop their pieces one at a time until all eight are down,
//! then take turns sliding a piece to an adjacent empty cell. Four in a row
//! (any direction) or four in a 2×2 square wins.
//!
//! - [`core`]: board, pieces, positions, moves
//! - [`logic`]: win detection, move generation, validation
//! - [`player`]: the minimax agent, a random player and the terminal human player
//! - [`game`]: the game loop and game records
//! - [`selfplay`]: batches of agent-vs-agent games

pub mod core;
pub mod display;
pub mod game;
pub mod logic;
pub mod player;
pub mod selfplay;
pub mod ui;


pub use crate::core::{Board, Move, Phase, Piece, Position};
pub use crate::player::ai::TeekoAI;
