use super::board::{Board, Occupancy};
use super::ring::PositionRing;
use super::types::{DeathReason, Direction, Position};

pub const INITIAL_DIRECTION: Direction = Direction::Left;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Ate(Position),
    Died(DeathReason),
}

#[derive(Clone, Debug)]
pub struct Snake {
    body: PositionRing,
    current_direction: Direction,
    last_direction: Direction,
    death_reason: Option<DeathReason>,
}

impl Snake {
    pub fn new(start_pos: Position, board_width: usize, board_height: usize) -> Self {
        Self {
            body: PositionRing::new(start_pos, board_width * board_height),
            current_direction: INITIAL_DIRECTION,
            last_direction: INITIAL_DIRECTION,
            death_reason: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.death_reason.is_none()
    }

    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    pub fn head(&self) -> Position {
        self.body.head()
    }

    pub fn size(&self) -> usize {
        self.body.size()
    }

    pub fn body(&self) -> &PositionRing {
        &self.body
    }

    pub fn segments(&self) -> Vec<Position> {
        self.body.iter().collect()
    }

    pub fn direction(&self) -> Direction {
        self.current_direction
    }

    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    pub fn is_at(&self, position: Position) -> bool {
        self.body.has_position(position)
    }

    /// Ignored when it would turn a snake longer than one segment back onto
    /// its own neck.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.body.size() > 1 && direction.is_opposite(&self.last_direction) {
            return;
        }
        self.current_direction = direction;
    }

    pub fn next_head_position(&self) -> Position {
        self.body.head().step(self.current_direction)
    }

    /// Advances one cell. A wall hit leaves the body where it was; a self
    /// collision leaves the body in the colliding configuration.
    pub fn move_on(&mut self, board: &mut Board) -> MoveOutcome {
        if let Some(reason) = self.death_reason {
            return MoveOutcome::Died(reason);
        }

        let next = self.next_head_position();
        if !board.is_valid_position(next) {
            return self.die(DeathReason::WallCollision);
        }

        let last = self.body.move_to(next);
        self.last_direction = self.current_direction;

        if self.body.is_head_on_body() {
            return self.die(DeathReason::SelfCollision);
        }

        if board.is_food(next) {
            board.remove_food(next);
            // a snake covering the whole board has nowhere left to grow
            if !self.body.is_full() {
                self.body.grow(last);
            }
            return MoveOutcome::Ate(next);
        }

        MoveOutcome::Moved
    }

    fn die(&mut self, reason: DeathReason) -> MoveOutcome {
        self.death_reason = Some(reason);
        MoveOutcome::Died(reason)
    }
}

impl Occupancy for PositionRing {
    fn is_occupied(&self, position: Position) -> bool {
        self.has_position(position)
    }
}

impl Occupancy for Snake {
    fn is_occupied(&self, position: Position) -> bool {
        self.is_at(position)
    }
}
