mod board;
mod entity;
mod game_state;
mod ring;
mod settings;
mod types;

pub use board::{Board, DEFAULT_MAX_FOOD, DEFAULT_PLACEMENT_ATTEMPTS, FoodPlacement, Occupancy};
pub use entity::{INITIAL_DIRECTION, MoveOutcome, Snake};
pub use game_state::{GameSnapshot, GameState};
pub use ring::PositionRing;
pub use settings::GameSettings;
pub use types::{CellState, DeathReason, Direction, GameStatus, Position};
