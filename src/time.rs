//! Clock traits the tick driver is generic over.
//!
//! The driver only ever does millisecond arithmetic on the tick period, so a
//! platform timer needs to expose little more than "now", "elapsed since" and
//! a millisecond conversion.

/// Clock polled by the animator when a tap starts the driver and on every service call.
pub trait TimeSource<I: TimeInstant> {
    /// Instant used to anchor or advance the tick schedule.
    fn now(&self) -> I;
}

/// Tick period and elapsed-time values.
pub trait TimeDuration: Copy + PartialEq {
    /// Returned as the remaining delay once a tick is already due.
    const ZERO: Self;

    /// Whole milliseconds; due ticks are counted as `elapsed / period` in these units.
    fn as_millis(&self) -> u64;

    /// Builds the default tick period and the span of consumed ticks.
    fn from_millis(millis: u64) -> Self;

    /// Period minus elapsed time, clamped at [`ZERO`](Self::ZERO) when a tick is overdue.
    fn saturating_sub(self, other: Self) -> Self;
}

/// Instant the tick schedule is anchored to.
pub trait TimeInstant: Copy {
    /// Duration type for the tick period.
    type Duration: TimeDuration;

    /// Time elapsed since the last consumed tick.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Moves the anchor forward by the consumed ticks; `None` if the clock would wrap.
    fn checked_add(self, duration: Self::Duration) -> Option<Self>;
}
