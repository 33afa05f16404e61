use serde::{Deserialize, Serialize};
use snake_engine::games::SessionRng;
use snake_engine::games::snake::{Direction, GameState, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutopilotKind {
    /// Heads for the nearest food, falling back to a random safe turn.
    Greedy,
    Random,
}

/// Stands in for a player, producing one direction command per tick.
pub struct Autopilot {
    kind: AutopilotKind,
    rng: SessionRng,
}

impl Autopilot {
    pub fn new(kind: AutopilotKind, rng: SessionRng) -> Self {
        Self { kind, rng }
    }

    pub fn choose(&mut self, state: &GameState) -> Option<Direction> {
        if !state.snake().is_alive() {
            return None;
        }
        match self.kind {
            AutopilotKind::Greedy => self.towards_food(state),
            AutopilotKind::Random => self.random_safe_move(state),
        }
    }

    fn towards_food(&mut self, state: &GameState) -> Option<Direction> {
        let head = state.snake().head();
        let Some(food) = Self::find_nearest_food(head, state) else {
            let current = state.snake().direction();
            if Self::is_safe(head.step(current), state) {
                return Some(current);
            }
            return self.random_safe_move(state);
        };

        Self::candidate_directions(state)
            .into_iter()
            .filter(|&dir| Self::is_safe(head.step(dir), state))
            .min_by_key(|&dir| head.step(dir).manhattan_distance(food))
            .or_else(|| self.random_safe_move(state))
    }

    fn random_safe_move(&mut self, state: &GameState) -> Option<Direction> {
        let head = state.snake().head();
        let safe: Vec<Direction> = Self::candidate_directions(state)
            .into_iter()
            .filter(|&dir| Self::is_safe(head.step(dir), state))
            .collect();

        self.rng
            .choose(&safe)
            .or(Some(state.snake().direction()))
    }

    fn candidate_directions(state: &GameState) -> Vec<Direction> {
        let snake = state.snake();
        Direction::ALL
            .into_iter()
            .filter(|d| snake.size() == 1 || !d.is_opposite(&snake.last_direction()))
            .collect()
    }

    fn find_nearest_food(from: Position, state: &GameState) -> Option<Position> {
        state
            .board()
            .food_positions()
            .min_by_key(|food| from.manhattan_distance(*food))
    }

    fn is_safe(position: Position, state: &GameState) -> bool {
        if !state.board().is_valid_position(position) {
            return false;
        }
        let body = state.snake().body();
        // the tail moves away unless this step eats
        let vacated = position == body.tail() && !state.board().is_food(position);
        vacated || !body.has_position(position)
    }
}
