#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Button`**: Watches one active-low input line and reports pushes and key-repeats
//! - **`ButtonPin`**: Trait to implement for your input line (or wrap an `embedded-hal` pin in `PullUpInput`)
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`RepeatConfig`**: Delay before auto-repeat starts and the interval between repeats
//! - **`PushKind`**: Whether an event came from a real press or a synthetic repeat
//! - **`Millis`**: Ready-made wrapping 32-bit millisecond instant
//!
//! The button does no scheduling of its own. Call `Button::poll` once per iteration of
//! your main loop; each call samples the line once and compares timestamps against the
//! injected time source.

pub mod time;
pub mod types;
pub mod pin;
pub mod millis;
pub mod button;

pub use button::Button;
pub use millis::{Millis, MillisDuration};
pub use pin::{ButtonPin, PullUpInput};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{
    DEFAULT_REPEAT_BEGIN_DELAY_MS, DEFAULT_REPEAT_INTERVAL_MS, Level, PushKind, RepeatConfig,
};
