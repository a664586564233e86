pub mod config;
pub mod eval;
pub mod minimax;
pub mod random;
pub mod tactics;
pub mod teeko;

pub use config::{AIConfig, OpponentModel, SearchConfig};
pub use minimax::Searcher;
pub use random::RandomAI;
pub use teeko::TeekoAI;
