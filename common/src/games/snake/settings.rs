use std::time::Duration;

use crate::config::Validate;
use super::types::{DEFAULT_BOARD_SIZE, FoodPlacement, Position};

pub const MIN_BOARD_SIZE: i32 = 5;
pub const MAX_BOARD_SIZE: i32 = 100;
pub const MIN_TICK_INTERVAL_MS: u64 = 20;
pub const MAX_TICK_INTERVAL_MS: u64 = 5000;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSettings {
    pub board_size: i32,
    pub tick_interval: Duration,
    pub food_placement: FoodPlacement,
    pub start_position: Position,
    /// Fixed RNG seed. `None` picks a random one per session.
    pub seed: Option<u64>,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            food_placement: FoodPlacement::Uniform,
            start_position: Position::new(5, 5),
            seed: None,
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(format!(
                "Board size must be between {} and {}, got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.board_size
            ));
        }
        let tick_ms = self.tick_interval.as_millis();
        if tick_ms < MIN_TICK_INTERVAL_MS as u128 || tick_ms > MAX_TICK_INTERVAL_MS as u128 {
            return Err(format!(
                "Tick interval must be between {}ms and {}ms, got {}ms",
                MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS, tick_ms
            ));
        }
        if !self.start_position.is_on_board(self.board_size) {
            return Err(format!(
                "Start position ({}, {}) is outside the {}x{} board",
                self.start_position.x, self.start_position.y, self.board_size, self.board_size
            ));
        }
        Ok(())
    }
}
