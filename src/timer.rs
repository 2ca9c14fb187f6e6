//! Single-slot cancelable timer
//!
//! Backs the deferred reopen of the species menu after a selection change:
//! each change schedules a reopen and cancels any still-pending one, so
//! only the last schedule in a rapid burst actually fires.

use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct ReopenTimer {
    deadline: Option<Instant>,
}

impl ReopenTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a firing after `delay`, replacing any pending schedule.
    pub fn schedule(&mut self, delay: Duration) {
        self.deadline = Some(Instant::now() + delay);
    }

    /// Drop the pending schedule, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True once the scheduled moment has passed. Consumes the schedule,
    /// so a single `schedule` fires at most once.
    pub fn take_due(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscheduled_timer_never_fires() {
        let mut timer = ReopenTimer::new();
        assert!(!timer.is_pending());
        assert!(!timer.take_due());
    }

    #[test]
    fn fires_once_after_the_delay() {
        let mut timer = ReopenTimer::new();
        timer.schedule(Duration::ZERO);
        assert!(timer.is_pending());
        assert!(timer.take_due());
        // Consumed: does not fire again.
        assert!(!timer.take_due());
        assert!(!timer.is_pending());
    }

    #[test]
    fn cancel_drops_the_pending_schedule() {
        let mut timer = ReopenTimer::new();
        timer.schedule(Duration::ZERO);
        timer.cancel();
        assert!(!timer.take_due());
    }

    #[test]
    fn reschedule_replaces_the_pending_deadline() {
        let mut timer = ReopenTimer::new();
        timer.schedule(Duration::ZERO);
        // Rescheduling far into the future supersedes the due firing.
        timer.schedule(Duration::from_secs(3600));
        assert!(!timer.take_due());
        assert!(timer.is_pending());
    }

    #[test]
    fn does_not_fire_before_the_deadline() {
        let mut timer = ReopenTimer::new();
        timer.schedule(Duration::from_secs(3600));
        assert!(!timer.take_due());
        assert!(timer.is_pending());
    }
}
