//! Delta-time bookkeeping for the capture paths
//!
//! Both event sources share one "last accepted event" timestamp. Every accepted
//! event consumes exactly one interval from it.

use parking_lot::Mutex as ParkingMutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Source of monotonic time
pub trait TimeSource: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock backed by `Instant::now`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced time, for driving capture deterministically
#[derive(Debug, Clone)]
pub struct ManualTimeSource {
    current: Arc<ParkingMutex<Instant>>,
}

impl ManualTimeSource {
    pub fn new() -> Self {
        Self {
            current: Arc::new(ParkingMutex::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.current.lock() += by;
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Default for ManualTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Instant {
        *self.current.lock()
    }
}

/// Time of the last accepted event
#[derive(Debug)]
pub struct EventClock<T: TimeSource> {
    source: T,
    last_event: Instant,
}

impl<T: TimeSource> EventClock<T> {
    pub fn new(source: T) -> Self {
        let last_event = source.now();
        Self { source, last_event }
    }

    /// Milliseconds since the previous call (or reset), then restart the interval.
    ///
    /// Not idempotent: call once per accepted event.
    pub fn elapsed_since_last(&mut self) -> u32 {
        let now = self.source.now();
        let elapsed = now.saturating_duration_since(self.last_event);
        self.last_event = now;
        u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX)
    }

    /// Start a fresh interval without producing a delta
    pub fn reset(&mut self) {
        self.last_event = self.source.now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_consumes_interval() {
        let time = ManualTimeSource::new();
        let mut clock = EventClock::new(time.clone());

        time.advance_ms(40);
        assert_eq!(clock.elapsed_since_last(), 40);
        // Interval already consumed
        assert_eq!(clock.elapsed_since_last(), 0);

        time.advance_ms(15);
        assert_eq!(clock.elapsed_since_last(), 15);
    }

    #[test]
    fn test_reset_discards_pending_interval() {
        let time = ManualTimeSource::new();
        let mut clock = EventClock::new(time.clone());

        time.advance_ms(500);
        clock.reset();
        time.advance_ms(5);
        assert_eq!(clock.elapsed_since_last(), 5);
    }

    #[test]
    fn test_elapsed_truncates_sub_millisecond() {
        let time = ManualTimeSource::new();
        let mut clock = EventClock::new(time.clone());

        time.advance(Duration::from_micros(2_900));
        assert_eq!(clock.elapsed_since_last(), 2);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let mut clock = EventClock::new(SystemTimeSource);
        std::thread::sleep(Duration::from_millis(5));
        assert!(clock.elapsed_since_last() >= 5);
    }
}
