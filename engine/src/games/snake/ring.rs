use std::fmt;

use super::types::Position;

/// Fixed-capacity ring of body segments, head first.
///
/// Live segments occupy the physical slots `[0, size)`, rotated so that the
/// segment at logical offset `i` sits in slot `(head + i) % size`. Slots at or
/// past `size` are stale. The backing storage is allocated once and never
/// reallocated.
#[derive(Clone, Debug)]
pub struct PositionRing {
    positions: Box<[Position]>,
    head: usize,
    size: usize,
}

fn index(head: usize, offset: usize, size: usize) -> usize {
    (head + offset) % size
}

impl PositionRing {
    pub fn new(initial_head: Position, capacity: usize) -> Self {
        assert!(capacity >= 1, "ring capacity must be at least 1");
        Self {
            positions: vec![initial_head; capacity].into_boxed_slice(),
            head: 0,
            size: 1,
        }
    }

    fn tail_index(&self) -> usize {
        index(self.head, self.size - 1, self.size)
    }

    pub fn head(&self) -> Position {
        self.positions[self.head]
    }

    pub fn tail(&self) -> Position {
        self.positions[self.tail_index()]
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    /// Segment at logical distance `offset` from the head.
    pub fn get(&self, offset: usize) -> Position {
        assert!(
            offset < self.size,
            "offset {} out of range for ring of size {}",
            offset,
            self.size
        );
        self.positions[index(self.head, offset, self.size)]
    }

    /// Makes `new_head` the head and drops the tail, returning the dropped
    /// tail. The tail slot is reused as the new head, so nothing is copied.
    pub fn move_to(&mut self, new_head: Position) -> Position {
        let tail_index = self.tail_index();
        let last = self.positions[tail_index];
        self.positions[tail_index] = new_head;
        self.head = tail_index;
        last
    }

    // initial        abc
    // [a][b][c]
    //  h     t
    //
    // move d ->      dab
    // [a][b][d]
    //     t  h
    //
    // grow x ->      dabx
    // [a][b][x][d]
    //        t  h

    /// Appends `new_tail` behind the current tail. Callers pass the value
    /// returned by the preceding [`move_to`](Self::move_to).
    pub fn grow(&mut self, new_tail: Position) {
        assert!(
            self.size < self.capacity(),
            "cannot grow ring beyond its capacity of {}",
            self.capacity()
        );
        if self.head == 0 {
            // tail is the last live slot, append in place
            self.positions[self.size] = new_tail;
        } else {
            // open a gap at the head slot, the wrapped tail ends just before it
            self.positions.copy_within(self.head..self.size, self.head + 1);
            self.positions[self.head] = new_tail;
            self.head += 1;
        }
        self.size += 1;
    }

    pub fn is_head_on_body(&self) -> bool {
        let head = self.head();
        (1..self.size).any(|offset| self.get(offset) == head)
    }

    pub fn has_position(&self, position: Position) -> bool {
        self.positions[..self.size].contains(&position)
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).map(move |offset| self.get(offset))
    }

    #[cfg(test)]
    fn from_parts(positions: Vec<Position>, head: usize, size: usize) -> Self {
        Self {
            positions: positions.into_boxed_slice(),
            head,
            size,
        }
    }
}

impl fmt::Display for PositionRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, position) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", position)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn test_index_wraps_on_size() {
        let cases = [
            (0, 0, 1, 0),
            (0, 1, 1, 0),
            (0, 2, 3, 2),
            (2, 2, 3, 1),
            (1, 2, 3, 0),
        ];
        for (head, offset, size, expected) in cases {
            assert_eq!(
                index(head, offset, size),
                expected,
                "index({}, {}, {})",
                head,
                offset,
                size
            );
        }
    }

    #[test]
    fn test_new_has_single_segment() {
        let ring = PositionRing::new(p(1, 0), 4);
        assert_eq!(ring.size(), 1);
        assert_eq!(ring.capacity(), 4);
        assert_eq!(ring.head(), p(1, 0));
        assert_eq!(ring.tail(), p(1, 0));
        assert!(!ring.is_head_on_body());
    }

    #[test]
    #[should_panic]
    fn test_new_zero_capacity_panics() {
        PositionRing::new(p(0, 0), 0);
    }

    #[test]
    fn test_move_single() {
        let mut ring = PositionRing::from_parts(vec![p(1, 0)], 0, 1);
        assert_eq!(ring.to_string(), "(1,0)");
        let last = ring.move_to(p(2, 0));
        assert_eq!(last, p(1, 0));
        assert_eq!(ring.to_string(), "(2,0)");
    }

    #[test]
    fn test_move_multiple() {
        let mut ring = PositionRing::from_parts(vec![p(1, 0), p(2, 0), p(3, 0)], 0, 3);
        assert_eq!(ring.to_string(), "(1,0) (2,0) (3,0)");
        assert_eq!(ring.move_to(p(4, 0)), p(3, 0));
        assert_eq!(ring.to_string(), "(4,0) (1,0) (2,0)");
        assert_eq!(ring.move_to(p(5, 0)), p(2, 0));
        assert_eq!(ring.to_string(), "(5,0) (4,0) (1,0)");
        assert_eq!(ring.move_to(p(6, 0)), p(1, 0));
        assert_eq!(ring.to_string(), "(6,0) (5,0) (4,0)");
    }

    #[test]
    fn test_grow_single() {
        let mut ring = PositionRing::new(p(1, 0), 5);
        ring.grow(p(2, 0));
        assert_eq!(ring.to_string(), "(1,0) (2,0)");
        assert_eq!(ring.tail(), p(2, 0));
    }

    #[test]
    fn test_grow_multiple() {
        let mut ring = PositionRing::new(p(1, 0), 5);
        ring.grow(p(2, 0));
        ring.grow(p(3, 0));
        assert_eq!(ring.to_string(), "(1,0) (2,0) (3,0)");
        ring.move_to(p(4, 0));
        assert_eq!(ring.to_string(), "(4,0) (1,0) (2,0)");
        ring.move_to(p(5, 0));
        assert_eq!(ring.to_string(), "(5,0) (4,0) (1,0)");

        ring.grow(p(6, 0));
        assert_eq!(ring.to_string(), "(5,0) (4,0) (1,0) (6,0)");
        assert_eq!(ring.size(), 4);
    }

    #[test]
    fn test_grow_with_evicted_tail_keeps_order() {
        let mut ring = PositionRing::new(p(0, 0), 8);
        for x in 1..=3 {
            let last = ring.move_to(p(x, 0));
            ring.grow(last);
        }
        assert_eq!(ring.to_string(), "(3,0) (2,0) (1,0) (0,0)");
        for x in 4..=6 {
            ring.move_to(p(x, 0));
        }
        let last = ring.move_to(p(7, 0));
        assert_eq!(last, p(3, 0));
        ring.grow(last);
        assert_eq!(ring.to_string(), "(7,0) (6,0) (5,0) (4,0) (3,0)");
    }

    #[test]
    #[should_panic]
    fn test_grow_beyond_capacity_panics() {
        let mut ring = PositionRing::new(p(0, 0), 2);
        ring.grow(p(1, 0));
        assert!(ring.is_full());
        ring.grow(p(2, 0));
    }

    #[test]
    #[should_panic]
    fn test_get_past_size_panics() {
        let ring = PositionRing::new(p(0, 0), 3);
        ring.get(1);
    }

    #[test]
    fn test_size_unchanged_by_moves() {
        let mut ring = PositionRing::new(p(0, 0), 16);
        ring.grow(p(0, 1));
        ring.grow(p(0, 2));
        for x in 1..40 {
            ring.move_to(p(x, 0));
            assert_eq!(ring.size(), 3);
            assert_eq!(ring.get(0), p(x, 0));
        }
    }

    #[test]
    fn test_head_on_body_after_landing_on_segment() {
        let mut ring = PositionRing::new(p(2, 2), 25);
        for next in [p(1, 2), p(1, 1), p(2, 1), p(3, 1)] {
            let last = ring.move_to(next);
            ring.grow(last);
            assert!(!ring.is_head_on_body());
        }
        // body: (3,1) (2,1) (1,1) (1,2) (2,2)
        ring.move_to(p(3, 2));
        assert!(!ring.is_head_on_body());
        // body: (3,2) (3,1) (2,1) (1,1) (1,2)
        ring.move_to(p(2, 2));
        assert!(!ring.is_head_on_body());
        ring.move_to(p(2, 1));
        assert!(ring.is_head_on_body());
    }

    #[test]
    fn test_moving_into_vacated_tail_is_not_collision() {
        let mut ring =
            PositionRing::from_parts(vec![p(1, 1), p(1, 0), p(0, 0), p(0, 1)], 0, 4);
        ring.move_to(p(0, 1));
        assert!(!ring.is_head_on_body());
        assert_eq!(ring.to_string(), "(0,1) (1,1) (1,0) (0,0)");
    }

    #[test]
    fn test_has_position_ignores_stale_slots() {
        let mut ring = PositionRing::new(p(0, 0), 4);
        ring.grow(p(9, 9));
        ring.move_to(p(1, 0));
        ring.move_to(p(2, 0));
        assert!(ring.has_position(p(2, 0)));
        assert!(ring.has_position(p(1, 0)));
        assert!(!ring.has_position(p(9, 9)));
        assert!(!ring.has_position(p(0, 0)));
    }

    #[test]
    fn test_iter_matches_get() {
        let mut ring = PositionRing::new(p(0, 0), 6);
        ring.grow(p(0, 1));
        let last = ring.move_to(p(1, 0));
        ring.grow(last);
        let from_iter: Vec<Position> = ring.iter().collect();
        let from_get: Vec<Position> = (0..ring.size()).map(|i| ring.get(i)).collect();
        assert_eq!(from_iter, from_get);
        assert_eq!(from_iter, vec![p(1, 0), p(0, 0), p(0, 1)]);
    }
}
