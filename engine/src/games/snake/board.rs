use crate::games::SessionRng;
use crate::log;
use super::types::{CellState, Position};

pub const DEFAULT_MAX_FOOD: usize = 5;
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 10;

/// Answers whether a cell is covered by something that food should avoid.
pub trait Occupancy {
    fn is_occupied(&self, position: Position) -> bool;
}

impl<F> Occupancy for F
where
    F: Fn(Position) -> bool,
{
    fn is_occupied(&self, position: Position) -> bool {
        self(position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoodPlacement {
    Placed(Position),
    /// Every attempt hit the snake or existing food; the last candidate was
    /// used anyway and lies under the snake.
    PlacedOverlapping(Position),
    LimitReached,
    /// Every attempt failed and the last candidate already held food.
    Skipped,
}

#[derive(Clone, Debug)]
pub struct Board {
    cells: Vec<CellState>,
    width: usize,
    height: usize,
    food_count: usize,
    max_food: usize,
    placement_attempts: usize,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_food_limits(width, height, DEFAULT_MAX_FOOD, DEFAULT_PLACEMENT_ATTEMPTS)
    }

    pub fn with_food_limits(
        width: usize,
        height: usize,
        max_food: usize,
        placement_attempts: usize,
    ) -> Self {
        assert!(width > 0 && height > 0, "board must have at least one cell");
        assert!(placement_attempts > 0, "food placement needs at least one attempt");
        Self {
            cells: vec![CellState::Empty; width * height],
            width,
            height,
            food_count: 0,
            max_food,
            placement_attempts,
        }
    }

    fn cell_index(&self, position: Position) -> Option<usize> {
        if !self.is_valid_position(position) {
            return None;
        }
        Some(position.y as usize * self.width + position.x as usize)
    }

    pub fn is_valid_position(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as usize) < self.width
            && (position.y as usize) < self.height
    }

    pub fn is_food(&self, position: Position) -> bool {
        self.cell(position) == Some(CellState::Food)
    }

    pub fn cell(&self, position: Position) -> Option<CellState> {
        self.cell_index(position).map(|idx| self.cells[idx])
    }

    /// Row-major, `width * height` long.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn food_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == CellState::Food)
            .map(|(idx, _)| Position::new((idx % self.width) as i32, (idx / self.width) as i32))
    }

    pub fn food_count(&self) -> usize {
        self.food_count
    }

    pub fn max_food(&self) -> usize {
        self.max_food
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn add_food(&mut self, rng: &mut SessionRng, occupied: &impl Occupancy) -> FoodPlacement {
        if self.food_count >= self.max_food {
            return FoodPlacement::LimitReached;
        }

        let mut candidate = Position::default();
        for _ in 0..self.placement_attempts {
            candidate = self.random_position(rng);
            if !self.is_food(candidate) && !occupied.is_occupied(candidate) {
                self.set_food(candidate);
                return FoodPlacement::Placed(candidate);
            }
        }

        if self.is_food(candidate) {
            return FoodPlacement::Skipped;
        }

        log!(
            "No free cell after {} attempts, food placed under the snake at {}",
            self.placement_attempts,
            candidate
        );
        self.set_food(candidate);
        FoodPlacement::PlacedOverlapping(candidate)
    }

    pub fn remove_food(&mut self, position: Position) {
        if let Some(idx) = self.cell_index(position) {
            if self.cells[idx] == CellState::Food {
                self.cells[idx] = CellState::Empty;
                self.food_count -= 1;
            }
        }
    }

    fn set_food(&mut self, position: Position) {
        if let Some(idx) = self.cell_index(position) {
            if self.cells[idx] == CellState::Empty {
                self.cells[idx] = CellState::Food;
                self.food_count += 1;
            }
        }
    }

    fn random_position(&self, rng: &mut SessionRng) -> Position {
        let x = rng.random_range(0..self.width);
        let y = rng.random_range(0..self.height);
        Position::new(x as i32, y as i32)
    }

    #[cfg(test)]
    pub(crate) fn place_food(&mut self, position: Position) {
        self.set_food(position);
    }
}
