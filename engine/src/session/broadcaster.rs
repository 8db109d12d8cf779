use std::future::Future;

use crate::game::{Food, GameEvent, GameOverReason, Point};

#[derive(Clone, Debug)]
pub struct GameStateUpdate {
    pub tick: u64,
    pub snake: Vec<Point>,
    pub food: Food,
    pub obstacles: Vec<Point>,
    pub score: u32,
    pub level: u32,
    pub tick_interval_ms: u64,
    pub is_over: bool,
    pub events: Vec<GameEvent>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOverSummary {
    pub score: u32,
    pub level: u32,
    pub reason: GameOverReason,
}

pub trait StateBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, update: GameStateUpdate) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, summary: GameOverSummary) -> impl Future<Output = ()> + Send;
}
