use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{
    self, GridSize, INITIAL_TICK_RATE, MAX_TICK_RATE, POINTS_PER_SPEED_LEVEL, TICK_RATE_INCREMENT,
};
use crate::food::spawn_position;
use crate::input::{Direction, GameInput};
use crate::scheduler::SchedulerCommand;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
    Victory,
}

/// What a single call to [`GameState::advance_tick`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The game was not running; nothing changed.
    Idle,
    /// The snake moved one cell without growing.
    Moved,
    /// The snake ate food and grew by one segment.
    Grew,
    /// The snake hit a wall or itself; the game is over.
    Collided,
    /// The final food filled the board; the game is won.
    Won,
}

/// Result of one tick: the outcome plus any timer signal for the scheduler
/// collaborator.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickReport {
    pub outcome: TickOutcome,
    pub scheduler: Option<SchedulerCommand>,
}

impl TickReport {
    fn idle() -> Self {
        Self {
            outcome: TickOutcome::Idle,
            scheduler: None,
        }
    }
}

/// Read-only view of the post-tick state for renderer and UI collaborators.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    /// Snake cells from head to tail; the head is the first element.
    pub snake: Vec<Position>,
    pub food: Position,
    pub score: u32,
    pub tick_rate: u32,
    pub status: GameStatus,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub tick_rate: u32,
    pub status: GameStatus,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh state on `bounds` with an entropy-seeded RNG.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::fresh(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::fresh(bounds, StdRng::seed_from_u64(seed))
    }

    fn fresh(bounds: GridSize, mut rng: StdRng) -> Self {
        let snake = Snake::spawn(bounds);
        let food = spawn_position(&mut rng, bounds, &snake)
            .expect("a fresh board must have at least one free cell");

        Self {
            snake,
            food,
            score: 0,
            tick_rate: INITIAL_TICK_RATE,
            status: GameStatus::Running,
            bounds,
            rng,
        }
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns true once the game has reached a terminal state.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Running
    }

    /// Returns the scheduler interval matching the current tick rate.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        config::tick_interval(self.tick_rate)
    }

    /// Returns the command that starts the scheduler at the current rate.
    #[must_use]
    pub fn start_command(&self) -> SchedulerCommand {
        SchedulerCommand::Start(self.tick_interval())
    }

    /// Requests a direction change, applied on the next tick.
    ///
    /// Ignored entirely once the game is over. Reversals of the direction
    /// applied on the last tick are silently dropped; any other request
    /// overwrites the pending direction, so between two ticks only the most
    /// recent intent survives.
    pub fn set_direction(&mut self, requested: Direction) {
        if self.is_over() {
            return;
        }
        self.snake.steer(requested);
    }

    /// Advances the simulation by one tick.
    ///
    /// Commits the pending direction, moves the head one cell, and resolves
    /// the move as exactly one of: plain movement, growth on food, collision,
    /// or a board-filling win. The returned report carries any timer signal
    /// the scheduler collaborator must act on.
    pub fn advance_tick(&mut self) -> TickReport {
        if self.is_over() {
            return TickReport::idle();
        }

        self.snake.commit_direction();
        let new_head = self.snake.next_head();

        // The tail has not moved yet this tick, so it blocks like any other
        // segment.
        if !new_head.is_within_bounds(self.bounds) || self.snake.occupies(new_head) {
            self.status = GameStatus::GameOver;
            return TickReport {
                outcome: TickOutcome::Collided,
                scheduler: Some(SchedulerCommand::Stop),
            };
        }

        self.snake.push_head(new_head);

        if new_head != self.food {
            self.snake.drop_tail();
            return TickReport {
                outcome: TickOutcome::Moved,
                scheduler: None,
            };
        }

        // Food eaten: the tail stays, the snake grows by one segment.
        self.score += 1;

        let Some(food) = spawn_position(&mut self.rng, self.bounds, &self.snake) else {
            self.status = GameStatus::Victory;
            return TickReport {
                outcome: TickOutcome::Won,
                scheduler: Some(SchedulerCommand::Stop),
            };
        };
        self.food = food;

        TickReport {
            outcome: TickOutcome::Grew,
            scheduler: self.raise_tick_rate(),
        }
    }

    /// Discards the session and starts a fresh one on the same board.
    ///
    /// Callable at any time, whether or not the previous game was over.
    /// Returns the command restarting the scheduler at the initial interval.
    pub fn restart(&mut self) -> SchedulerCommand {
        *self = Self::new(self.bounds);
        self.start_command()
    }

    /// Applies one external input event.
    ///
    /// Directions feed the pending-direction slot; Confirm restarts the game
    /// when it is over and is ignored otherwise.
    pub fn handle_input(&mut self, input: GameInput) -> Option<SchedulerCommand> {
        match input {
            GameInput::Direction(direction) => {
                self.set_direction(direction);
                None
            }
            GameInput::Confirm if self.is_over() => Some(self.restart()),
            GameInput::Confirm => None,
        }
    }

    /// Returns the read-only view consumed by renderer and UI collaborators.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.segments().copied().collect(),
            food: self.food,
            score: self.score,
            tick_rate: self.tick_rate,
            status: self.status,
        }
    }

    fn raise_tick_rate(&mut self) -> Option<SchedulerCommand> {
        if self.score % POINTS_PER_SPEED_LEVEL != 0 || self.tick_rate >= MAX_TICK_RATE {
            return None;
        }

        self.tick_rate += TICK_RATE_INCREMENT;
        Some(SchedulerCommand::SetInterval(self.tick_interval()))
    }
}
