pub mod game;
pub mod logger;
pub mod scores;
pub mod session;

pub use game::*;
pub use scores::{ScoreEntry, ScoreService};
