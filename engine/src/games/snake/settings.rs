use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::board::{DEFAULT_MAX_FOOD, DEFAULT_PLACEMENT_ATTEMPTS};

pub const MIN_BOARD_SIZE: usize = 2;
pub const MAX_BOARD_SIZE: usize = 200;
pub const MAX_TICKS_PER_SECOND: u32 = 1000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameSettings {
    pub board_width: usize,
    pub board_height: usize,
    pub ticks_per_second: u32,
    pub moves_per_second: u32,
    pub max_food_count: usize,
    pub food_spawn_interval: u64,
    pub food_placement_attempts: usize,
}

impl GameSettings {
    pub fn with_board(board_width: usize, board_height: usize) -> Self {
        Self {
            board_width,
            board_height,
            ..Self::default()
        }
    }

    /// Number of ticks between two snake moves.
    pub fn move_interval(&self) -> u64 {
        (self.ticks_per_second / self.moves_per_second.max(1)).max(1) as u64
    }

    pub fn cell_count(&self) -> usize {
        self.board_width * self.board_height
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_width: 20,
            board_height: 20,
            ticks_per_second: 60,
            moves_per_second: 5,
            max_food_count: DEFAULT_MAX_FOOD,
            food_spawn_interval: 10,
            food_placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        let board_range = MIN_BOARD_SIZE..=MAX_BOARD_SIZE;
        if !board_range.contains(&self.board_width) {
            return Err(format!(
                "board_width must be between {} and {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE
            ));
        }
        if !board_range.contains(&self.board_height) {
            return Err(format!(
                "board_height must be between {} and {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE
            ));
        }
        if self.ticks_per_second < 1 || self.ticks_per_second > MAX_TICKS_PER_SECOND {
            return Err(format!(
                "ticks_per_second must be between 1 and {}",
                MAX_TICKS_PER_SECOND
            ));
        }
        if self.moves_per_second < 1 {
            return Err("moves_per_second must be at least 1".to_string());
        }
        if self.moves_per_second > self.ticks_per_second {
            return Err("moves_per_second must not exceed ticks_per_second".to_string());
        }
        if self.max_food_count < 1 || self.max_food_count > self.cell_count() {
            return Err(
                "max_food_count must be between 1 and the number of board cells".to_string(),
            );
        }
        if self.food_spawn_interval < 1 {
            return Err("food_spawn_interval must be at least 1".to_string());
        }
        if self.food_placement_attempts < 1 {
            return Err("food_placement_attempts must be at least 1".to_string());
        }
        Ok(())
    }
}
