//! Game clock - the periodic tick schedule.
//!
//! A polled timer rather than an OS one: the run loop asks `poll` whether a
//! tick is due. Rescheduling replaces the single next-due slot, so an old and
//! a new cadence can never both be active, and cancellation is just clearing
//! the slot.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct GameClock {
    interval: Duration,
    next_due: Option<Instant>,
}

impl GameClock {
    /// A clock with the given interval, not yet scheduled.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_scheduled(&self) -> bool {
        self.next_due.is_some()
    }

    /// Install the schedule: the first tick is due one interval from `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    /// Remove the schedule; `poll` reports nothing until restarted.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Replace the schedule with a new interval in one step, counting from
    /// `now` (cancel-and-reinstall semantics).
    pub fn reschedule(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        self.next_due = Some(now + interval);
    }

    /// True when a tick is due at `now`; advances the schedule by one
    /// interval from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time remaining until the next tick, if one is scheduled. Zero when
    /// overdue. Drives the input poll timeout.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_unscheduled_clock_never_fires() {
        let mut clock = GameClock::new(500 * MS);
        let now = Instant::now();
        assert!(!clock.is_scheduled());
        assert!(!clock.poll(now + 10_000 * MS));
        assert_eq!(clock.time_until_due(now), None);
    }

    #[test]
    fn test_poll_follows_the_interval() {
        let mut clock = GameClock::new(500 * MS);
        let start = Instant::now();
        clock.start(start);
        assert!(!clock.poll(start + 499 * MS));
        assert!(clock.poll(start + 500 * MS));
        // Next tick counts from the poll that consumed the previous one.
        assert!(!clock.poll(start + 600 * MS));
        assert!(clock.poll(start + 1_000 * MS));
    }

    #[test]
    fn test_reschedule_replaces_the_schedule() {
        let mut clock = GameClock::new(500 * MS);
        let start = Instant::now();
        clock.start(start);
        // Speed up at t=200: the pending 500ms tick is gone, not doubled.
        clock.reschedule(450 * MS, start + 200 * MS);
        assert_eq!(clock.interval(), 450 * MS);
        assert!(!clock.poll(start + 500 * MS));
        assert!(clock.poll(start + 650 * MS));
        assert!(!clock.poll(start + 651 * MS));
    }

    #[test]
    fn test_cancel_stops_ticking() {
        let mut clock = GameClock::new(100 * MS);
        let start = Instant::now();
        clock.start(start);
        clock.cancel();
        assert!(!clock.poll(start + 10_000 * MS));
        // A later start installs a fresh schedule.
        clock.start(start + 10_000 * MS);
        assert!(clock.poll(start + 10_100 * MS));
    }

    #[test]
    fn test_time_until_due_saturates_at_zero() {
        let mut clock = GameClock::new(100 * MS);
        let start = Instant::now();
        clock.start(start);
        assert_eq!(clock.time_until_due(start), Some(100 * MS));
        assert_eq!(clock.time_until_due(start + 40 * MS), Some(60 * MS));
        assert_eq!(clock.time_until_due(start + 500 * MS), Some(Duration::ZERO));
    }
}
