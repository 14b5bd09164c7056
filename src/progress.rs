//! Cosmetic progress for a calculation cycle.
//!
//! The calculation itself is instantaneous; the progress bar only stretches
//! its presentation over `100 * step`. Nothing here sleeps: the UI polls
//! [`ProgressTicker::poll`] once per frame with the current instant and gets
//! back the ticks that became due since the previous poll.

use std::time::{Duration, Instant};

/// Number of ticks in one cycle; tick `n` means `n` percent.
pub const PROGRESS_STEPS: u8 = 100;

/// Default delay between two consecutive ticks.
pub const DEFAULT_PROGRESS_STEP: Duration = Duration::from_millis(20);

/// Lazy, strictly increasing run of progress ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressTicks {
    next: u8,
    last: u8,
}

impl ProgressTicks {
    /// Every tick of a cycle: `1..=100`.
    pub fn full() -> Self {
        Self::between(1, PROGRESS_STEPS)
    }

    fn between(first: u8, last: u8) -> Self {
        Self { next: first, last }
    }

    /// A run with no ticks.
    pub fn empty() -> Self {
        Self { next: 1, last: 0 }
    }
}

impl Iterator for ProgressTicks {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.next > self.last {
            return None;
        }
        let tick = self.next;
        self.next += 1;
        Some(tick)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.last as usize + 1).saturating_sub(self.next as usize);
        (n, Some(n))
    }
}

impl ExactSizeIterator for ProgressTicks {}

/// Time-driven ticker for one cycle. Tick `n` is due `(n - 1) * step` after
/// the cycle started, so the first tick is emitted right away.
#[derive(Debug, Clone)]
pub struct ProgressTicker {
    started: Instant,
    step: Duration,
    emitted: u8,
}

impl ProgressTicker {
    pub fn start(now: Instant, step: Duration) -> Self {
        Self {
            started: now,
            step,
            emitted: 0,
        }
    }

    /// Last emitted tick, `0` before the first poll.
    pub fn current(&self) -> u8 {
        self.emitted
    }

    pub fn is_complete(&self) -> bool {
        self.emitted >= PROGRESS_STEPS
    }

    /// Completed fraction in `0.0..=1.0`, for a progress bar.
    pub fn fraction(&self) -> f32 {
        f32::from(self.emitted) / f32::from(PROGRESS_STEPS)
    }

    /// Instant at which the next tick becomes due, `None` once complete.
    pub fn next_due(&self) -> Option<Instant> {
        if self.is_complete() {
            return None;
        }
        Some(self.started + self.step * u32::from(self.emitted))
    }

    /// Ticks that became due up to `now` and were not emitted yet.
    pub fn poll(&mut self, now: Instant) -> ProgressTicks {
        let due = self.due_count(now);
        if due <= self.emitted {
            return ProgressTicks::empty();
        }
        let ticks = ProgressTicks::between(self.emitted + 1, due);
        self.emitted = due;
        ticks
    }

    /// Emit every remaining tick regardless of time.
    pub fn drain(&mut self) -> ProgressTicks {
        if self.is_complete() {
            return ProgressTicks::empty();
        }
        let ticks = ProgressTicks::between(self.emitted + 1, PROGRESS_STEPS);
        self.emitted = PROGRESS_STEPS;
        ticks
    }

    fn due_count(&self, now: Instant) -> u8 {
        if self.step.is_zero() {
            return PROGRESS_STEPS;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let due = elapsed.as_nanos() / self.step.as_nanos() + 1;
        due.min(u128::from(PROGRESS_STEPS)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_hint_matches_remaining() {
        let mut ticks = ProgressTicks::full();
        assert_eq!(ticks.len(), 100);
        ticks.next();
        assert_eq!(ticks.len(), 99);
        assert_eq!(ProgressTicks::empty().len(), 0);
    }

    #[test]
    fn next_due_advances_by_step() {
        let t0 = Instant::now();
        let step = Duration::from_millis(20);
        let mut ticker = ProgressTicker::start(t0, step);
        assert_eq!(ticker.next_due(), Some(t0));
        ticker.poll(t0);
        assert_eq!(ticker.next_due(), Some(t0 + step));
    }
}
