//! Fixed-period tick scheduling
//!
//! The host polls [`Ticker::due`] once per frame with the current time and
//! runs that many ticks. Ticks are equal-length steps; a late frame is made up
//! for with extra ticks, bounded by `max_catch_up` so a long stall (window
//! dragged, laptop asleep) does not turn into a burst of hundreds of steps.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    max_catch_up: u32,
    last: Duration,
    accumulator: Duration,
    count: u64,
    skipped: u64,
}

impl Ticker {
    pub fn new(interval: Duration, max_catch_up: u32) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            max_catch_up: max_catch_up.max(1),
            last: Duration::ZERO,
            accumulator: Duration::ZERO,
            count: 0,
            skipped: 0,
        }
    }

    /// Restart the phase at `now`; nothing is due until a full interval passes.
    pub fn reset(&mut self, now: Duration) {
        self.last = now;
        self.accumulator = Duration::ZERO;
    }

    /// Consume and return the number of ticks due at `now`.
    pub fn due(&mut self, now: Duration) -> u32 {
        self.accumulator += now.saturating_sub(self.last);
        self.last = self.last.max(now);

        let mut ticks = 0;
        while self.accumulator >= self.interval && ticks < self.max_catch_up {
            self.accumulator -= self.interval;
            ticks += 1;
        }

        if self.accumulator >= self.interval {
            let interval_ns = self.interval.as_nanos();
            let behind = (self.accumulator.as_nanos() / interval_ns) as u64;
            self.accumulator = Duration::from_nanos((self.accumulator.as_nanos() % interval_ns) as u64);
            self.skipped += behind;
            log::debug!("ticker fell behind, dropped {} ticks", behind);
        }

        self.count += u64::from(ticks);
        ticks
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Ticks handed out so far
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Ticks dropped because of the catch-up cap
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}
