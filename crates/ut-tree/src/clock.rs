//! Clocks injected into a [`VersionTree`](crate::VersionTree).
//!
//! Node timestamps only need to be strictly increasing within one tree so
//! that "most recent" is well defined. Wall-clock time is a convenience for
//! display.

use ut_types::Timestamp;

/// Source of node creation times.
///
/// Implementations must return strictly increasing timestamps.
pub trait Clock {
    fn now(&mut self) -> Timestamp;
}

/// Wall-clock time with a logical counter.
///
/// - If the wall clock advanced past the last issued timestamp, the new
///   timestamp is the wall clock with `logical = 0`.
/// - Otherwise (same millisecond, or the wall clock stepped backwards) the
///   last timestamp is bumped by one logical tick.
#[derive(Debug, Default)]
pub struct MonotonicClock {
    last: Timestamp,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for MonotonicClock {
    fn now(&mut self) -> Timestamp {
        let wall = Timestamp::wall_clock();
        let next = if wall.is_after(&self.last) {
            wall
        } else {
            self.last.successor()
        };
        self.last = next;
        next
    }
}

/// Deterministic clock advancing a fixed step per call.
#[derive(Debug)]
pub struct ManualClock {
    next: Timestamp,
    step_ms: u64,
}

impl ManualClock {
    /// Start at `start_ms`, advancing one millisecond per call.
    pub fn starting_at(start_ms: u64) -> Self {
        Self {
            next: Timestamp::new(start_ms, 0),
            step_ms: 1,
        }
    }

    /// Use a different step between consecutive timestamps.
    pub fn with_step(mut self, step_ms: u64) -> Self {
        self.step_ms = step_ms.max(1);
        self
    }

    /// The timestamp the next call will return.
    pub fn peek(&self) -> Timestamp {
        self.next
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl Clock for ManualClock {
    fn now(&mut self) -> Timestamp {
        let current = self.next;
        self.next = Timestamp::new(current.physical_ms + self.step_ms, 0);
        current
    }
}
