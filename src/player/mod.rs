pub mod ai;
pub mod controller;
pub mod tui;

pub use ai::{RandomAI, TeekoAI};
pub use controller::PlayerController;
pub use tui::TuiController;
