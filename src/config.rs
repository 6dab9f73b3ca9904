use std::time::Duration;

/// Logical grid dimensions passed through the game as a named type.
///
/// Makes width vs. height unambiguous at every call site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Side length of the canonical square board.
pub const GRID_SIDE: u16 = 20;

/// The canonical 20×20 board.
pub const DEFAULT_BOUNDS: GridSize = GridSize {
    width: GRID_SIDE,
    height: GRID_SIDE,
};

/// Tick rate at game start, in ticks per second.
pub const INITIAL_TICK_RATE: u32 = 10;

/// Tick-rate step applied on each speed-up.
pub const TICK_RATE_INCREMENT: u32 = 2;

/// Ceiling for the tick rate.
pub const MAX_TICK_RATE: u32 = 30;

/// Score needed per speed-up.
pub const POINTS_PER_SPEED_LEVEL: u32 = 5;

/// Returns the scheduler interval for a tick rate (1000/rate milliseconds).
#[must_use]
pub fn tick_interval(tick_rate: u32) -> Duration {
    debug_assert!(tick_rate > 0);
    Duration::from_secs_f64(1.0 / f64::from(tick_rate))
}
