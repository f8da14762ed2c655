//! Time helpers for analysis jobs
//!
//! Provides a clock abstraction so timing code can be tested with a fixed
//! clock, a stopwatch over any clock, elapsed-time formatting as
//! `HH:MM:SS.mmm`, and a sleep helper.

use core::fmt;

use crate::constants::time::{MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};

/// Timestamp in milliseconds since epoch (or an arbitrary origin for test clocks)
pub type Timestamp = u64;

/// Source of time
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;

    /// Check if this source provides wall clock time (vs monotonic)
    fn is_wall_clock(&self) -> bool;
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

#[cfg(feature = "std")]
impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }

    fn is_wall_clock(&self) -> bool {
        true
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Clock stopped at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Jump to `timestamp`, backwards allowed
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move forward by `ms`, saturating at `u64::MAX`
    pub fn advance(&mut self, ms: u64) {
        self.timestamp = self.timestamp.saturating_add(ms);
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}

/// Measures elapsed time against a [`TimeSource`]
#[derive(Debug, Clone)]
pub struct Stopwatch<T: TimeSource> {
    source: T,
    started: Timestamp,
}

impl<T: TimeSource> Stopwatch<T> {
    /// Start timing now
    pub fn start(source: T) -> Self {
        let started = source.now();
        Self { source, started }
    }

    /// Milliseconds since start. A clock that went backwards reads as 0.
    pub fn elapsed_ms(&self) -> u64 {
        self.source.now().saturating_sub(self.started)
    }

    /// Time since start, split for display
    pub fn elapsed(&self) -> Elapsed {
        format_elapsed(self.elapsed_ms())
    }

    /// Reset the start point to now, returning the time elapsed until then
    pub fn restart(&mut self) -> u64 {
        let now = self.source.now();
        let elapsed = now.saturating_sub(self.started);
        self.started = now;
        elapsed
    }

    /// Underlying clock, e.g. to advance a [`FixedTime`]
    pub fn source_mut(&mut self) -> &mut T {
        &mut self.source
    }
}

/// Split duration, displayed as `HH:MM:SS.mmm`
///
/// Hours are not wrapped at a day, so long jobs read as e.g. `49:05:00.000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    /// Whole hours, unbounded
    pub hours: u64,
    /// Minutes past the hour
    pub minutes: u8,
    /// Seconds past the minute
    pub seconds: u8,
    /// Milliseconds past the second
    pub millis: u16,
}

impl Elapsed {
    /// Total duration in milliseconds, saturating at `u64::MAX`
    pub fn as_millis(&self) -> u64 {
        self.hours
            .saturating_mul(MS_PER_HOUR)
            .saturating_add(self.minutes as u64 * MS_PER_MINUTE)
            .saturating_add(self.seconds as u64 * MS_PER_SECOND)
            .saturating_add(self.millis as u64)
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hours, self.minutes, self.seconds, self.millis
        )
    }
}

/// Break a millisecond duration into hours, minutes, seconds and millis
pub fn format_elapsed(ms: u64) -> Elapsed {
    Elapsed {
        hours: ms / MS_PER_HOUR,
        minutes: ((ms % MS_PER_HOUR) / MS_PER_MINUTE) as u8,
        seconds: ((ms % MS_PER_MINUTE) / MS_PER_SECOND) as u8,
        millis: (ms % MS_PER_SECOND) as u16,
    }
}

/// Block the current thread for `ms` milliseconds
#[cfg(feature = "std")]
pub fn sleep_ms(ms: u64) {
    std::thread::sleep(std::time::Duration::from_millis(ms));
}
