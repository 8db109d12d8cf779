use std::collections::HashSet;

use crate::log;
use super::session_rng::SessionRng;
use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{Direction, Food, FoodKind, GameEvent, GameOverReason, Point};

const MAX_PLACEMENT_ATTEMPTS: u32 = 100;

#[derive(Clone, Debug)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub obstacles: HashSet<Point>,
    pub score: u32,
    pub level: u32,
    pub tick_interval_ms: u64,
    pub game_over_reason: Option<GameOverReason>,
    pub settings: GameSettings,
}

impl GameState {
    pub fn new(settings: GameSettings, rng: &mut SessionRng) -> Self {
        let mut state = Self {
            snake: Snake::new(Point::new(0, 0), Direction::Right),
            food: Food {
                position: Point::new(0, 0),
                kind: FoodKind::Normal,
            },
            obstacles: HashSet::new(),
            score: 0,
            level: 1,
            tick_interval_ms: settings.initial_tick_interval_ms,
            game_over_reason: None,
            settings,
        };
        state.place_obstacles(rng);
        state.place_food(rng);
        state
    }

    pub fn reset(&mut self, rng: &mut SessionRng) {
        self.snake = Snake::new(Point::new(0, 0), Direction::Right);
        self.score = 0;
        self.level = 1;
        self.tick_interval_ms = self.settings.initial_tick_interval_ms;
        self.game_over_reason = None;
        self.place_obstacles(rng);
        self.place_food(rng);
        log!("Game reset");
    }

    pub fn is_over(&self) -> bool {
        self.game_over_reason.is_some()
    }

    pub fn set_direction(&mut self, direction: Direction) {
        if self.is_over() || direction.is_opposite(&self.snake.direction) {
            return;
        }
        self.snake.pending_direction = Some(direction);
    }

    pub fn tick(&mut self, rng: &mut SessionRng) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if self.is_over() {
            return events;
        }

        if let Some(direction) = self.snake.pending_direction.take() {
            self.snake.direction = direction;
        }

        let next_head = match self.next_head_position() {
            Ok(pos) => pos,
            Err(reason) => {
                self.game_over_reason = Some(reason);
                log!("Game over: {:?}. Final score: {}", reason, self.score);
                return events;
            }
        };

        self.snake.body.push_front(next_head);
        self.snake.body_set.insert(next_head);

        if next_head == self.food.position {
            let points = match self.food.kind {
                FoodKind::Normal => self.settings.normal_food_points,
                FoodKind::Special => self.settings.special_food_points,
            };
            self.score += points;
            events.push(GameEvent::ScorePopup {
                points,
                position: next_head,
            });
            log!(
                "Ate {:?} food at ({}, {}). Score: {}",
                self.food.kind,
                next_head.x,
                next_head.y,
                self.score
            );

            if self.score % self.settings.level_score_step == 0 {
                self.level_up(rng);
                events.push(GameEvent::LevelUp { level: self.level });
            }

            self.place_food(rng);
        } else {
            let tail = self
                .snake
                .body
                .pop_back()
                .expect("Snake body should never be empty");
            self.snake.body_set.remove(&tail);
        }

        events
    }

    fn level_up(&mut self, rng: &mut SessionRng) {
        self.level += 1;
        self.tick_interval_ms = self
            .tick_interval_ms
            .saturating_sub(self.settings.tick_interval_step_ms)
            .max(self.settings.min_tick_interval_ms);
        self.place_obstacles(rng);
        log!(
            "Level up: {} ({} ms per tick, {} obstacles)",
            self.level,
            self.tick_interval_ms,
            self.obstacles.len()
        );
    }

    fn next_head_position(&self) -> Result<Point, GameOverReason> {
        let head = self.snake.head();
        let max = self.settings.grid_size - 1;

        let next_head = match self.snake.direction {
            Direction::Up => {
                if head.y == 0 {
                    return Err(GameOverReason::WallCollision);
                }
                Point::new(head.x, head.y - 1)
            }
            Direction::Down => {
                if head.y >= max {
                    return Err(GameOverReason::WallCollision);
                }
                Point::new(head.x, head.y + 1)
            }
            Direction::Left => {
                if head.x == 0 {
                    return Err(GameOverReason::WallCollision);
                }
                Point::new(head.x - 1, head.y)
            }
            Direction::Right => {
                if head.x >= max {
                    return Err(GameOverReason::WallCollision);
                }
                Point::new(head.x + 1, head.y)
            }
        };

        // The tail has not moved yet at this point, so stepping onto it collides.
        if self.snake.body_set.contains(&next_head) {
            return Err(GameOverReason::SelfCollision);
        }

        if self.obstacles.contains(&next_head) {
            return Err(GameOverReason::ObstacleCollision);
        }

        Ok(next_head)
    }

    fn place_food(&mut self, rng: &mut SessionRng) {
        let occupied =
            |pos: &Point| self.snake.body_set.contains(pos) || self.obstacles.contains(pos);
        let Some(position) = sample_free_cell(rng, self.settings.grid_size, occupied) else {
            log!("No free cell left for food");
            return;
        };

        let kind = if rng.chance(self.settings.special_food_probability) {
            FoodKind::Special
        } else {
            FoodKind::Normal
        };
        self.food = Food { position, kind };
        log!("Food spawned at ({}, {}): {:?}", position.x, position.y, kind);
    }

    fn place_obstacles(&mut self, rng: &mut SessionRng) {
        let target = (self.level as f32 * self.settings.obstacles_per_level).floor() as usize;
        let mut obstacles = HashSet::with_capacity(target);

        while obstacles.len() < target {
            let occupied =
                |pos: &Point| self.snake.body_set.contains(pos) || obstacles.contains(pos);
            match sample_free_cell(rng, self.settings.grid_size, occupied) {
                Some(pos) => {
                    obstacles.insert(pos);
                }
                None => {
                    log!(
                        "No free cell left for obstacles ({} of {} placed)",
                        obstacles.len(),
                        target
                    );
                    break;
                }
            }
        }

        self.obstacles = obstacles;
    }
}

// Rejection sampling can starve on a dense board; fall back to scanning the free cells.
fn sample_free_cell(
    rng: &mut SessionRng,
    grid_size: usize,
    is_occupied: impl Fn(&Point) -> bool,
) -> Option<Point> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let pos = Point::new(
            rng.random_range(0..grid_size),
            rng.random_range(0..grid_size),
        );
        if !is_occupied(&pos) {
            return Some(pos);
        }
    }

    let free: Vec<Point> = (0..grid_size)
        .flat_map(|y| (0..grid_size).map(move |x| Point::new(x, y)))
        .filter(|pos| !is_occupied(pos))
        .collect();

    if free.is_empty() {
        None
    } else {
        Some(free[rng.random_range(0..free.len())])
    }
}
