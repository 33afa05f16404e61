use crate::config::Validate;
use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::entity::{MoveOutcome, Snake};
use super::settings::GameSettings;
use super::types::{CellState, DeathReason, Direction, GameStatus, Position};

/// Owned copy of everything a renderer needs after a tick.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<CellState>,
    /// Head first.
    pub segments: Vec<Position>,
    pub status: GameStatus,
    pub score: usize,
    pub tick: u64,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Position> {
        self.segments.first().copied()
    }
}

pub struct GameState {
    settings: GameSettings,
    board: Board,
    snake: Snake,
    rng: SessionRng,
    status: GameStatus,
    tick: u64,
    move_interval: u64,
}

impl GameState {
    pub fn new(board_width: usize, board_height: usize) -> Result<Self, String> {
        Self::with_settings(
            GameSettings::with_board(board_width, board_height),
            SessionRng::from_random(),
        )
    }

    pub fn with_settings(settings: GameSettings, rng: SessionRng) -> Result<Self, String> {
        settings
            .validate()
            .map_err(|e| format!("Invalid game settings: {}", e))?;

        let (board, snake) = Self::create_round(&settings);
        let move_interval = settings.move_interval();
        Ok(Self {
            settings,
            board,
            snake,
            rng,
            status: GameStatus::Playing,
            tick: 0,
            move_interval,
        })
    }

    fn create_round(settings: &GameSettings) -> (Board, Snake) {
        let board = Board::with_food_limits(
            settings.board_width,
            settings.board_height,
            settings.max_food_count,
            settings.food_placement_attempts,
        );
        let center = Position::new(
            (settings.board_width / 2) as i32,
            (settings.board_height / 2) as i32,
        );
        let snake = Snake::new(center, settings.board_width, settings.board_height);
        (board, snake)
    }

    pub fn restart(&mut self) {
        let (board, snake) = Self::create_round(&self.settings);
        self.board = board;
        self.snake = snake;
        self.status = GameStatus::Playing;
        self.tick = 0;
        log!("Game restarted");
    }

    /// Restart as requested by the player, only accepted once the game is over.
    pub fn try_restart(&mut self) -> Result<(), String> {
        if self.status == GameStatus::Playing {
            return Err("Cannot restart while the game is being played".to_string());
        }
        self.restart();
        Ok(())
    }

    /// Runs one simulation step. Returns the snake's move outcome on ticks
    /// where the snake moves.
    pub fn tick(&mut self, direction: Option<Direction>) -> Option<MoveOutcome> {
        if self.status != GameStatus::Playing {
            return None;
        }

        if let Some(direction) = direction {
            self.snake.set_direction(direction);
        }

        let mut outcome = None;
        if self.is_move_tick() {
            let result = self.snake.move_on(&mut self.board);
            match result {
                MoveOutcome::Died(reason) => self.finish(reason),
                MoveOutcome::Ate(position) => {
                    log!(
                        "Food eaten at {} on tick {}. Score: {}",
                        position,
                        self.tick,
                        self.score()
                    );
                }
                MoveOutcome::Moved => {}
            }
            outcome = Some(result);
        }

        if self.status == GameStatus::Playing && self.is_food_tick() {
            self.board.add_food(&mut self.rng, &self.snake);
        }

        self.tick += 1;
        outcome
    }

    fn finish(&mut self, reason: DeathReason) {
        self.status = GameStatus::GameOver;
        log!(
            "Game over on tick {}: {:?}. Score: {}",
            self.tick,
            reason,
            self.score()
        );
    }

    fn is_move_tick(&self) -> bool {
        self.tick % self.move_interval == 0
    }

    fn is_food_tick(&self) -> bool {
        self.tick % self.settings.food_spawn_interval == 0
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn score(&self) -> usize {
        self.snake.size()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            width: self.board.width(),
            height: self.board.height(),
            cells: self.board.cells().to_vec(),
            segments: self.snake.segments(),
            status: self.status,
            score: self.score(),
            tick: self.tick,
        }
    }

    #[cfg(test)]
    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
