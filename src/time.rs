//! Monotonic time sources used for relative key timing.
//!
//! Timestamps are plain `f64` seconds. They are only ever compared with other
//! timestamps from the same [`Clock`], never persisted.

use ::parking_lot::Mutex;
use ::std::{sync::Arc, time::Instant};

/// Timestamp sentinel for "never happened". Any elapsed time measured against
/// it is infinite.
pub const NEVER: f64 = f64::NEG_INFINITY;

/// A monotonic source of time, in seconds.
pub trait Clock: Send + Sync {
    /// The current time in seconds. Successive calls never go backwards.
    fn now(&self) -> f64;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// A [`Clock`] backed by [`Instant`], measuring seconds since the clock was
/// constructed.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    /// Constructs a new clock starting at zero.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// A manually driven [`Clock`].
///
/// Clones share the same underlying time, so a host (or a unit test) can keep
/// one handle to advance time while the tracker holds another.
///
/// ```
/// use ::framekeys::time::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
///
/// handle.advance(0.25);
/// assert_eq!(clock.now(), 0.25);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Arc<Mutex<f64>>,
}

impl ManualClock {
    /// Constructs a new clock starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `secs` seconds. Negative values are ignored.
    pub fn advance(&self, secs: f64) {
        if secs > 0.0 {
            *self.now.lock() += secs;
        }
    }

    /// Sets the clock to an absolute time. Times earlier than the current
    /// reading are ignored to keep the clock monotonic.
    pub fn set(&self, secs: f64) {
        let mut now = self.now.lock();
        if secs > *now {
            *now = secs;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        *self.now.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_is_shared_and_monotonic() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        assert_eq!(clock.now(), 0.0);

        handle.advance(1.5);
        assert_eq!(clock.now(), 1.5);

        handle.advance(-1.0);
        handle.set(0.5);
        assert_eq!(clock.now(), 1.5);

        handle.set(2.0);
        assert_eq!(clock.now(), 2.0);
    }

    #[test]
    fn test_monotonic_clock_never_goes_backwards() {
        let clock = MonotonicClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(first >= 0.0);
        assert!(second >= first);
    }

    #[test]
    fn test_elapsed_since_never_is_infinite() {
        let dt = 0.0 - NEVER;
        assert!(dt.is_infinite() && dt > 0.0);
    }
}
