use std::time::{Duration, Instant};

/// A single cancellable periodic task.  The caller supplies the current time,
/// so a `Ticker` never blocks or reads the clock itself.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(super) struct Ticker {
    schedule: Option<Schedule>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Schedule {
    period: Duration,
    deadline: Instant,
}

impl Ticker {
    /// Schedule ticks every `period`, the first one `period` after `now`.  Any
    /// existing schedule is replaced.
    pub(super) fn start(&mut self, period: Duration, now: Instant) {
        self.schedule = Some(Schedule {
            period,
            deadline: now + period,
        });
    }

    pub(super) fn cancel(&mut self) {
        self.schedule = None;
    }

    pub(super) fn is_scheduled(&self) -> bool {
        self.schedule.is_some()
    }

    /// Return how long until the next tick is due (zero if it already is), or
    /// `None` if nothing is scheduled
    pub(super) fn time_until(&self, now: Instant) -> Option<Duration> {
        self.schedule
            .map(|s| s.deadline.saturating_duration_since(now))
    }

    /// If a tick is due at `now`, consume it and return `true`.
    ///
    /// Deadlines advance by whole periods from the previous deadline.  If the
    /// caller has fallen more than a period behind, the schedule restarts from
    /// `now` instead of firing a burst of catch-up ticks.
    pub(super) fn fire(&mut self, now: Instant) -> bool {
        let Some(schedule) = self.schedule.as_mut() else {
            return false;
        };
        if now < schedule.deadline {
            return false;
        }
        schedule.deadline += schedule.period;
        if schedule.deadline <= now {
            schedule.deadline = now + schedule.period;
        }
        true
    }
}
