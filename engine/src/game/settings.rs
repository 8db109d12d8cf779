use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameSettings {
    pub grid_size: usize,
    pub initial_tick_interval_ms: u64,
    pub min_tick_interval_ms: u64,
    pub tick_interval_step_ms: u64,
    pub normal_food_points: u32,
    pub special_food_points: u32,
    pub special_food_probability: f32,
    pub level_score_step: u32,
    pub obstacles_per_level: f32,
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_size < 10 || self.grid_size > 100 {
            return Err("grid_size must be between 10 and 100".to_string());
        }
        if self.initial_tick_interval_ms < 50 || self.initial_tick_interval_ms > 5000 {
            return Err("initial_tick_interval_ms must be between 50 and 5000".to_string());
        }
        if self.min_tick_interval_ms < 10 {
            return Err("min_tick_interval_ms must be at least 10".to_string());
        }
        if self.min_tick_interval_ms > self.initial_tick_interval_ms {
            return Err(
                "min_tick_interval_ms must not exceed initial_tick_interval_ms".to_string(),
            );
        }
        if self.tick_interval_step_ms == 0 {
            return Err("tick_interval_step_ms must be greater than 0".to_string());
        }
        if self.normal_food_points == 0 || self.special_food_points == 0 {
            return Err("food points must be greater than 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.special_food_probability) {
            return Err("special_food_probability must be between 0.0 and 1.0".to_string());
        }
        if self.level_score_step == 0 {
            return Err("level_score_step must be greater than 0".to_string());
        }
        if self.obstacles_per_level < 0.0 || self.obstacles_per_level > 10.0 {
            return Err("obstacles_per_level must be between 0.0 and 10.0".to_string());
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid_size: 30,
            initial_tick_interval_ms: 150,
            min_tick_interval_ms: 50,
            tick_interval_step_ms: 10,
            normal_food_points: 10,
            special_food_points: 30,
            special_food_probability: 0.2,
            level_score_step: 100,
            obstacles_per_level: 2.0,
        }
    }
}
