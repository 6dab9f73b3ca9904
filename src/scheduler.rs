use std::time::{Duration, Instant};

/// Contract for the external timer collaborator driving the engine.
///
/// The engine never owns a timer; it emits [`SchedulerCommand`] values and
/// the collaborator implementing this trait acts on them.
pub trait Scheduler {
    /// Begins periodic ticking at `interval`.
    fn start(&mut self, interval: Duration);

    /// Stops ticking.
    fn stop(&mut self);

    /// Changes the interval of an already running schedule.
    fn set_interval(&mut self, interval: Duration);
}

/// Timer signal emitted by the engine for the scheduler collaborator.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SchedulerCommand {
    Start(Duration),
    Stop,
    SetInterval(Duration),
}

impl SchedulerCommand {
    /// Dispatches this command onto a scheduler implementation.
    pub fn apply(self, scheduler: &mut impl Scheduler) {
        match self {
            Self::Start(interval) => scheduler.start(interval),
            Self::Stop => scheduler.stop(),
            Self::SetInterval(interval) => scheduler.set_interval(interval),
        }
    }
}

/// Poll-based reference scheduler for single-threaded cooperative loops.
///
/// The driving loop calls [`TickClock::poll`] with the current instant and
/// advances the engine once per `true` result. At most one tick is reported
/// per poll and the baseline resets on every reported tick, so ticks never
/// overlap and a stalled loop collapses missed intervals into a single tick
/// instead of bursting to catch up.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    interval: Duration,
    running: bool,
    last_tick: Option<Instant>,
}

impl TickClock {
    /// Creates a stopped clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            interval: Duration::ZERO,
            running: false,
            last_tick: None,
        }
    }

    /// Returns true when a tick is due at `now`.
    ///
    /// The first poll after [`Scheduler::start`] arms the baseline and
    /// reports no tick.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }

        let Some(last_tick) = self.last_tick else {
            self.last_tick = Some(now);
            return false;
        };

        if now.saturating_duration_since(last_tick) < self.interval {
            return false;
        }

        self.last_tick = Some(now);
        true
    }

    /// Returns true while the clock is started.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the current tick interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for TickClock {
    fn start(&mut self, interval: Duration) {
        self.interval = interval;
        self.running = true;
        self.last_tick = None;
    }

    fn stop(&mut self) {
        self.running = false;
        self.last_tick = None;
    }

    fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }
}
