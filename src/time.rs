//! Time abstraction traits for platform-agnostic timing.

/// Trait for abstracting time sources.
///
/// Implement this for your monotonic clock (SysTick counter, HAL timer,
/// `embassy_time::Instant::now`, ...). Buttons borrow the time source, so one
/// clock can serve any number of buttons.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
///
/// Ordering is used directly for the repeat gate, so an instant type that
/// wraps around inherits the wraparound behavior of its counter.
pub trait TimeInstant: Copy + PartialOrd {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Adds duration to instant, returns None on overflow.
    fn checked_add(self, duration: Self::Duration) -> Option<Self>;
}
