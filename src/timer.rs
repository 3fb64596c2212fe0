//! Periodic frame timer
//!
//! Portable pacing without platform timers: the owner asks for the next
//! deadline, sleeps however its platform sleeps, then calls [`PeriodicTimer::poll`].
//! The timer holds at most one schedule; arming replaces the previous one.

use embassy_time::{Duration, Instant};

/// Number of periods the caller may fall behind before the schedule restarts
///
/// Past this we skip the backlog instead of bursting catch-up ticks.
pub const MAX_DRIFT_PERIODS: u32 = 2;

#[derive(Debug, Clone, Copy)]
struct Schedule {
    period: Duration,
    next_tick: Instant,
}

/// Cancellable periodic task handle
#[derive(Debug, Clone, Default)]
pub struct PeriodicTimer {
    schedule: Option<Schedule>,
}

impl PeriodicTimer {
    pub const fn new() -> Self {
        Self { schedule: None }
    }

    /// Start ticking every `period`, first tick one period after `now`
    ///
    /// A schedule that is already armed is dropped first.
    pub fn arm(&mut self, period: Duration, now: Instant) {
        self.cancel();
        self.schedule = Some(Schedule {
            period,
            next_tick: now + period,
        });
    }

    /// Drop the schedule; no tick fires until the timer is armed again
    pub fn cancel(&mut self) {
        self.schedule = None;
    }

    pub fn is_armed(&self) -> bool {
        self.schedule.is_some()
    }

    /// Period of the armed schedule
    pub fn period(&self) -> Option<Duration> {
        self.schedule.map(|schedule| schedule.period)
    }

    /// Instant of the next tick, if armed
    pub fn deadline(&self) -> Option<Instant> {
        self.schedule.map(|schedule| schedule.next_tick)
    }

    /// Returns true if a tick is due at `now` and schedules the following one
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(schedule) = self.schedule.as_mut() else {
            return false;
        };
        if now < schedule.next_tick {
            return false;
        }

        // Drift correction: if we've fallen too far behind, restart from now
        let max_drift = schedule.period * MAX_DRIFT_PERIODS;
        if now > schedule.next_tick + max_drift {
            schedule.next_tick = now;
        }
        schedule.next_tick += schedule.period;
        true
    }
}
