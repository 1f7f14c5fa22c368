//! Periodic tick source with an explicit idle/running lifecycle.
//!
//! [`TickDriver`] does not own a hardware timer. It records when it was
//! started and reports how many whole periods have elapsed each time it is
//! polled, so the caller can pump ticks from any loop or executor.

use crate::time::{TimeDuration, TimeInstant};

/// The lifecycle state of a tick driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    /// No ticks are produced.
    Idle,
    /// Ticks are produced once per period.
    Running,
}

/// Produces ticks on a fixed period while running.
///
/// Starting a running driver and stopping an idle one are no-ops, so there is
/// never more than one tick schedule alive.
#[derive(Debug, Clone, Copy)]
pub struct TickDriver<I: TimeInstant> {
    period: I::Duration,
    state: DriverState,
    last_tick: Option<I>,
}

impl<I: TimeInstant> TickDriver<I> {
    /// Creates an idle driver ticking every `period` once started.
    pub fn new(period: I::Duration) -> Self {
        Self {
            period,
            state: DriverState::Idle,
            last_tick: None,
        }
    }

    /// Starts ticking, with the first tick due one period after `now`.
    ///
    /// Returns false and keeps the current schedule if already running.
    pub fn start(&mut self, now: I) -> bool {
        if self.state == DriverState::Running {
            return false;
        }

        self.state = DriverState::Running;
        self.last_tick = Some(now);
        crate::trace!("tick driver started");
        true
    }

    /// Stops ticking. Returns false if already idle.
    pub fn stop(&mut self) -> bool {
        if self.state == DriverState::Idle {
            return false;
        }

        self.state = DriverState::Idle;
        self.last_tick = None;
        crate::trace!("tick driver stopped");
        true
    }

    /// Consumes and returns the number of ticks due at `now`.
    ///
    /// Ticks are counted in whole periods since the last consumed tick; the
    /// remainder carries over to the next poll. Idle drivers report zero.
    pub fn due_ticks(&mut self, now: I) -> u32 {
        let Some(last) = self.last_tick else {
            return 0;
        };

        let period_millis = self.period.as_millis();
        if period_millis == 0 {
            return 0;
        }

        let elapsed_millis = now.duration_since(last).as_millis();
        let due = elapsed_millis / period_millis;
        if due == 0 {
            return 0;
        }

        // If the anchor cannot be advanced (timer overflow), restart the
        // schedule from now rather than losing the driver.
        let consumed = I::Duration::from_millis(due * period_millis);
        self.last_tick = Some(last.checked_add(consumed).unwrap_or(now));

        u32::try_from(due).unwrap_or(u32::MAX)
    }

    /// Time left until the next tick is due, or `None` while idle.
    pub fn time_until_next(&self, now: I) -> Option<I::Duration> {
        self.last_tick
            .map(|last| self.period.saturating_sub(now.duration_since(last)))
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Returns true if the driver is producing ticks.
    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// The tick period.
    pub fn period(&self) -> I::Duration {
        self.period
    }
}
