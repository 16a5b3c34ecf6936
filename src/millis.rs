//! Wrapping 32-bit millisecond clock types.
//!
//! Most microcontroller firmware keeps a `u32` millisecond counter bumped from
//! a SysTick (or similar) interrupt. [`Millis`] wraps such a reading so it can
//! be handed to a [`Button`](crate::Button) through a [`TimeSource`](crate::TimeSource).
//!
//! The counter wraps after ~49.7 days. Instants compare by raw counter value,
//! so a wrap while a repeat is armed can delay one repeat or let one fire early.

use crate::time::{TimeDuration, TimeInstant};

/// Millisecond duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MillisDuration(pub u32);

impl TimeDuration for MillisDuration {
    const ZERO: Self = MillisDuration(0);

    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    fn from_millis(millis: u64) -> Self {
        // Truncates; durations beyond u32 range are meaningless on a wrapping counter
        MillisDuration(millis as u32)
    }
}

/// Point in time on a wrapping 32-bit millisecond counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl Millis {
    /// Returns the raw counter value.
    pub fn as_millis(&self) -> u32 {
        self.0
    }
}

impl TimeInstant for Millis {
    type Duration = MillisDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        MillisDuration(self.0.wrapping_sub(earlier.0))
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        Some(Millis(self.0.wrapping_add(duration.0)))
    }
}
