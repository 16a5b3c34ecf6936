//! Core value types shared by the button and its capabilities.

use crate::time::TimeDuration;

/// Default delay between a real push and the first auto-repeat, in milliseconds.
pub const DEFAULT_REPEAT_BEGIN_DELAY_MS: u64 = 500;

/// Default interval between auto-repeats, in milliseconds.
pub const DEFAULT_REPEAT_INTERVAL_MS: u64 = 100;

/// Logic level of a digital input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Line reads high. Resting level of a pulled-up button.
    High,

    /// Line reads low. Pressed level of a pulled-up button.
    Low,
}

impl Level {
    /// Returns true if the level is `High`.
    #[inline]
    pub fn is_high(self) -> bool {
        self == Level::High
    }

    /// Returns true if the level is `Low`.
    #[inline]
    pub fn is_low(self) -> bool {
        self == Level::Low
    }
}

impl From<bool> for Level {
    /// `true` maps to `High`.
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

impl core::ops::Not for Level {
    type Output = Level;

    fn not(self) -> Self::Output {
        match self {
            Level::High => Level::Low,
            Level::Low => Level::High,
        }
    }
}

/// What produced a push event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PushKind {
    /// Falling edge: the button was just pressed.
    Press,

    /// Synthetic push emitted while the button is held.
    Repeat,
}

/// Auto-repeat timing.
///
/// No validation is performed. A zero `begin_delay` and `interval` make
/// every poll while held a repeat, limited only by clock resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RepeatConfig<D: TimeDuration> {
    /// Delay after a real push before repeating may start.
    pub begin_delay: D,

    /// Interval between successive repeats.
    pub interval: D,
}

impl<D: TimeDuration> RepeatConfig<D> {
    /// Creates a repeat configuration.
    #[inline]
    pub fn new(begin_delay: D, interval: D) -> Self {
        Self {
            begin_delay,
            interval,
        }
    }
}

impl<D: TimeDuration> Default for RepeatConfig<D> {
    fn default() -> Self {
        Self::new(
            D::from_millis(DEFAULT_REPEAT_BEGIN_DELAY_MS),
            D::from_millis(DEFAULT_REPEAT_INTERVAL_MS),
        )
    }
}
