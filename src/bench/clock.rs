//! Clock capability used to time benchmark runs.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A monotonic time source.
///
/// `now` returns the time elapsed since an arbitrary fixed origin; only
/// differences between readings are meaningful.
pub trait Clock {
    /// Returns the current reading.
    fn now(&self) -> Duration;
}

/// Wall-clock time source backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Creates a clock whose origin is the moment of creation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A deterministic clock that advances by a fixed step on every reading.
///
/// # Examples
///
/// ```rust
/// use seqbench::bench::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::with_step(Duration::from_millis(5));
/// assert_eq!(clock.now(), Duration::ZERO);
/// assert_eq!(clock.now(), Duration::from_millis(5));
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    current: Cell<Duration>,
    step: Duration,
}

impl ManualClock {
    /// Creates a clock starting at zero that advances by `step` per reading.
    #[must_use]
    pub const fn with_step(step: Duration) -> Self {
        Self {
            current: Cell::new(Duration::ZERO),
            step,
        }
    }

    /// Moves the clock forward without taking a reading.
    pub fn advance(&self, duration: Duration) {
        self.current.set(self.current.get() + duration);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        let reading = self.current.get();
        self.current.set(reading + self.step);
        reading
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}
