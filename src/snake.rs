use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Length of a freshly spawned snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighboring position one cell away in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

/// Mutable snake state: body segments plus direction buffering.
///
/// The snake carries two directions: the committed direction applied on the
/// last tick and a single pending slot holding the latest accepted input.
/// Rapid input bursts between ticks overwrite the slot, so only the most
/// recent intent survives.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    /// Creates the starting snake: a three-cell row at the board center,
    /// head rightmost, moving right.
    #[must_use]
    pub fn spawn(bounds: GridSize) -> Self {
        let head = Position {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        };
        let segments = (0..INITIAL_SNAKE_LENGTH)
            .map(|offset| Position {
                x: head.x - offset as i32,
                y: head.y,
            })
            .collect();

        Self::from_segments(segments, Direction::Right)
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        debug_assert!(!segments.is_empty());

        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: direction,
        }
    }

    /// Requests a direction change for the next tick.
    ///
    /// A reversal of the committed direction is silently dropped so the snake
    /// can never turn back into its own neck. Any other request overwrites
    /// the pending slot.
    pub fn steer(&mut self, requested: Direction) {
        if requested.is_opposite(self.direction) {
            return;
        }
        self.pending_direction = requested;
    }

    /// Commits the pending direction as the movement direction for this tick.
    pub fn commit_direction(&mut self) {
        self.direction = self.pending_direction;
    }

    /// Returns the cell the head would enter by moving one step in the
    /// committed direction.
    #[must_use]
    pub fn next_head(&self) -> Position {
        self.head().stepped(self.direction)
    }

    /// Prepends a new head segment.
    pub fn push_head(&mut self, head: Position) {
        self.body.push_front(head);
    }

    /// Removes the tail segment.
    pub fn drop_tail(&mut self) {
        debug_assert!(self.body.len() > 1);
        let _ = self.body.pop_back();
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the committed movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the direction that will be committed on the next tick.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    const BOUNDS: GridSize = GridSize {
        width: 20,
        height: 20,
    };

    #[test]
    fn spawned_snake_sits_centered_moving_right() {
        let snake = Snake::spawn(BOUNDS);

        let segments: Vec<Position> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Position { x: 10, y: 10 },
                Position { x: 9, y: 10 },
                Position { x: 8, y: 10 },
            ]
        );
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn next_head_steps_in_committed_direction() {
        let mut snake = Snake::from_segments(vec![Position { x: 5, y: 5 }], Direction::Up);

        snake.commit_direction();
        assert_eq!(snake.next_head(), Position { x: 5, y: 4 });
    }

    #[test]
    fn steer_rejects_reversal_of_committed_direction() {
        let mut snake = Snake::spawn(BOUNDS);

        snake.steer(Direction::Left);
        assert_eq!(snake.pending_direction(), Direction::Right);
    }

    #[test]
    fn steer_overwrites_pending_with_latest_intent() {
        let mut snake = Snake::spawn(BOUNDS);

        snake.steer(Direction::Up);
        snake.steer(Direction::Down);
        assert_eq!(snake.pending_direction(), Direction::Down);
    }

    #[test]
    fn reversal_guard_checks_committed_not_pending() {
        let mut snake = Snake::spawn(BOUNDS);

        // Moving Right; queue Up, then request Left. Left reverses the
        // committed Right and must be dropped even though Up is pending.
        snake.steer(Direction::Up);
        snake.steer(Direction::Left);
        assert_eq!(snake.pending_direction(), Direction::Up);
    }

    #[test]
    fn push_and_drop_keep_head_first_order() {
        let mut snake = Snake::from_segments(
            vec![Position { x: 2, y: 1 }, Position { x: 1, y: 1 }],
            Direction::Right,
        );

        snake.push_head(Position { x: 3, y: 1 });
        snake.drop_tail();

        let segments: Vec<Position> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![Position { x: 3, y: 1 }, Position { x: 2, y: 1 }]
        );
    }

    #[test]
    fn occupies_sees_every_segment() {
        let snake = Snake::spawn(BOUNDS);

        assert!(snake.occupies(Position { x: 8, y: 10 }));
        assert!(!snake.occupies(Position { x: 7, y: 10 }));
    }

    #[test]
    fn bounds_check_rejects_all_four_walls() {
        let bounds = GridSize {
            width: 4,
            height: 4,
        };

        assert!(Position { x: 0, y: 0 }.is_within_bounds(bounds));
        assert!(Position { x: 3, y: 3 }.is_within_bounds(bounds));
        assert!(!Position { x: -1, y: 2 }.is_within_bounds(bounds));
        assert!(!Position { x: 4, y: 2 }.is_within_bounds(bounds));
        assert!(!Position { x: 2, y: -1 }.is_within_bounds(bounds));
        assert!(!Position { x: 2, y: 4 }.is_within_bounds(bounds));
    }
}
