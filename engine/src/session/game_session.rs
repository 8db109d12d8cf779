use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{Instant, Interval, interval_at};

use crate::game::{Direction, GameEvent, GameSettings, GameState, SessionRng};
use super::broadcaster::{GameOverSummary, GameStateUpdate, StateBroadcaster};

#[derive(Clone)]
pub struct GameSessionState {
    pub game_state: Arc<Mutex<GameState>>,
    pub tick: Arc<Mutex<u64>>,
    pub rng: Arc<Mutex<SessionRng>>,
}

impl GameSessionState {
    pub fn create(settings: GameSettings, seed: u64) -> Self {
        let mut rng = SessionRng::new(seed);
        let game_state = GameState::new(settings, &mut rng);

        Self {
            game_state: Arc::new(Mutex::new(game_state)),
            tick: Arc::new(Mutex::new(0u64)),
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}

pub struct GameSession;

impl GameSession {
    pub async fn run(
        session_state: GameSessionState,
        broadcaster: impl StateBroadcaster,
    ) -> GameOverSummary {
        let mut current_interval_ms = session_state.game_state.lock().await.tick_interval_ms;
        let mut tick_timer = new_tick_timer(current_interval_ms);

        loop {
            tick_timer.tick().await;

            let mut game_state = session_state.game_state.lock().await;
            let mut rng = session_state.rng.lock().await;
            let events = game_state.tick(&mut rng);
            drop(rng);

            let mut tick_value = session_state.tick.lock().await;
            *tick_value += 1;
            let update = build_state_update(&game_state, *tick_value, events);
            drop(tick_value);

            let game_over = game_state.game_over_reason.map(|reason| GameOverSummary {
                score: game_state.score,
                level: game_state.level,
                reason,
            });
            let new_interval_ms = game_state.tick_interval_ms;
            drop(game_state);

            broadcaster.broadcast_state(update).await;

            if let Some(summary) = game_over {
                broadcaster.broadcast_game_over(summary).await;
                return summary;
            }

            // A level-up changed the cadence: replace the timer so the old
            // period never fires again.
            if new_interval_ms != current_interval_ms {
                current_interval_ms = new_interval_ms;
                tick_timer = new_tick_timer(current_interval_ms);
            }
        }
    }

    pub async fn handle_turn(session_state: &GameSessionState, direction: Direction) {
        session_state
            .game_state
            .lock()
            .await
            .set_direction(direction);
    }

    pub async fn handle_reset(session_state: &GameSessionState) {
        let mut game_state = session_state.game_state.lock().await;
        let mut rng = session_state.rng.lock().await;
        game_state.reset(&mut rng);
        drop(rng);
        drop(game_state);

        *session_state.tick.lock().await = 0;
    }
}

fn new_tick_timer(interval_ms: u64) -> Interval {
    let period = Duration::from_millis(interval_ms);
    interval_at(Instant::now() + period, period)
}

fn build_state_update(
    state: &GameState,
    tick_value: u64,
    events: Vec<GameEvent>,
) -> GameStateUpdate {
    GameStateUpdate {
        tick: tick_value,
        snake: state.snake.body.iter().copied().collect(),
        food: state.food,
        obstacles: state.obstacles.iter().copied().collect(),
        score: state.score,
        level: state.level,
        tick_interval_ms: state.tick_interval_ms,
        is_over: state.is_over(),
        events,
    }
}
