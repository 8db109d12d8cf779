mod broadcaster;
mod game_session;

pub use broadcaster::{GameOverSummary, GameStateUpdate, StateBroadcaster};
pub use game_session::{GameSession, GameSessionState};
