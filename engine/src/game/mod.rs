mod game_state;
mod session_rng;
mod settings;
mod snake;
mod types;

pub use game_state::GameState;
pub use session_rng::SessionRng;
pub use settings::GameSettings;
pub use snake::Snake;
pub use types::{Direction, Food, FoodKind, GameEvent, GameOverReason, Point};
