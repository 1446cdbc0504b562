use serde::{Deserialize, Serialize};
use snake_common::config::Validate;
use snake_common::games::snake::{
    FoodPlacement, Position, SnakeSettings, DEFAULT_BOARD_SIZE, DEFAULT_TICK_INTERVAL_MS,
};
use std::time::Duration;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SnakeConfig {
    pub board_size: i32,
    pub tick_interval_ms: u64,
    #[serde(default)]
    pub food_placement: FoodPlacement,
    pub start_x: i32,
    pub start_y: i32,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            food_placement: FoodPlacement::Uniform,
            start_x: 5,
            start_y: 5,
        }
    }
}

impl From<&SnakeConfig> for SnakeSettings {
    fn from(config: &SnakeConfig) -> Self {
        Self {
            board_size: config.board_size,
            tick_interval: Duration::from_millis(config.tick_interval_ms),
            food_placement: config.food_placement,
            start_position: Position::new(config.start_x, config.start_y),
            seed: None,
        }
    }
}

impl Validate for SnakeConfig {
    fn validate(&self) -> Result<(), String> {
        SnakeSettings::from(self).validate()
    }
}
