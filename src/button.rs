//! Push-button with falling-edge detection and key-repeat.
//!
//! Provides [`Button`], which samples one active-low input line per poll and turns
//! its level changes into push events. While the button stays held, it synthesizes
//! repeat pushes after a begin delay and then at a fixed interval, the usual
//! "key repeat" behavior for adjusting values from a firmware UI loop.

use crate::pin::ButtonPin;
use crate::time::{TimeInstant, TimeSource};
use crate::types::{Level, PushKind, RepeatConfig};

/// A single push-button on an active-low, pulled-up input line.
///
/// The button performs no scheduling. Every call to [`poll`](Button::poll) takes one
/// sample and compares it with the previous one:
///
/// - `High -> Low` is a press. It emits an event and arms the repeat gate at
///   `now + begin_delay`.
/// - `Low -> Low` emits a repeat once `now` is past `gate + interval`, then moves
///   the gate to `now`.
/// - Everything else, including release, is silent.
///
/// No debounce filtering is applied beyond edge detection; poll often enough for a
/// clean signal.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - Input line implementation type
/// * `T` - Time source implementation type
pub struct Button<'t, I: TimeInstant, P: ButtonPin, T: TimeSource<I>> {
    pin: P,
    time_source: &'t T,
    last_level: Level,
    last_push_time: Option<I>,
    last_virtual_push_time: Option<I>,
    config: RepeatConfig<I::Duration>,
}

impl<'t, I: TimeInstant, P: ButtonPin, T: TimeSource<I>> Button<'t, I, P, T> {
    /// Creates a button with the default repeat timing (500 ms, then every 100 ms).
    ///
    /// Configures the line as pull-up input and samples it once. That sample only
    /// seeds edge detection: a button already held at construction does not
    /// produce a press on the first poll.
    pub fn new(pin: P, time_source: &'t T) -> Self {
        Self::with_repeat_config(pin, time_source, RepeatConfig::default())
    }

    /// Creates a button with custom repeat timing.
    pub fn with_repeat_config(
        mut pin: P,
        time_source: &'t T,
        config: RepeatConfig<I::Duration>,
    ) -> Self {
        pin.configure_pull_up();
        let last_level = pin.level();

        Self {
            pin,
            time_source,
            last_level,
            last_push_time: None,
            last_virtual_push_time: None,
            config,
        }
    }

    /// Samples the line and returns true if a press or repeat occurred.
    ///
    /// Call once per iteration of your main loop.
    pub fn poll(&mut self) -> bool {
        self.poll_event().is_some()
    }

    /// Samples the line and reports which kind of push occurred, if any.
    ///
    /// Same state machine as [`poll`](Button::poll).
    pub fn poll_event(&mut self) -> Option<PushKind> {
        let previous = self.last_level;
        let current = self.pin.level();
        self.last_level = current;

        match (previous, current) {
            (Level::High, Level::Low) => {
                let now = self.time_source.now();
                // An unrepresentable gate falls back to `now`, so the first repeat comes early
                let gate = now.checked_add(self.config.begin_delay).unwrap_or(now);

                self.last_push_time = Some(now);
                self.last_virtual_push_time = Some(gate);

                #[cfg(feature = "defmt")]
                defmt::trace!("button: press");

                Some(PushKind::Press)
            }
            (Level::Low, Level::Low) => {
                // Unarmed until the first real press
                let gate = self.last_virtual_push_time?;
                let due = gate.checked_add(self.config.interval)?;
                let now = self.time_source.now();

                if now > due {
                    self.last_virtual_push_time = Some(now);

                    #[cfg(feature = "defmt")]
                    defmt::trace!("button: repeat");

                    Some(PushKind::Repeat)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Sets the repeat timing used by future polls.
    ///
    /// An already armed repeat gate keeps its timestamp; only the interval
    /// compared against it changes. `begin_delay` applies from the next press.
    pub fn set_repeat_properties(&mut self, begin_delay: I::Duration, interval: I::Duration) {
        self.set_repeat_config(RepeatConfig::new(begin_delay, interval));
    }

    /// Sets the repeat timing used by future polls.
    pub fn set_repeat_config(&mut self, config: RepeatConfig<I::Duration>) {
        self.config = config;
    }

    /// Returns the current repeat timing.
    pub fn repeat_config(&self) -> RepeatConfig<I::Duration> {
        self.config
    }

    /// Returns the level observed by the most recent sample.
    pub fn last_level(&self) -> Level {
        self.last_level
    }

    /// Returns true if the most recent sample saw the button pressed.
    pub fn is_pressed(&self) -> bool {
        self.last_level.is_low()
    }

    /// Returns the time of the most recent real press, if any.
    pub fn last_push_time(&self) -> Option<I> {
        self.last_push_time
    }

    /// Returns the time of the most recent emitted push, real or repeat.
    ///
    /// Right after a press this is `press time + begin_delay`, the base the
    /// next repeat is measured from.
    pub fn last_virtual_push_time(&self) -> Option<I> {
        self.last_virtual_push_time
    }

    /// Returns how long the button has been held since its last real press.
    ///
    /// `None` if the last sample saw it released or it was never pressed.
    pub fn held_duration(&self) -> Option<I::Duration> {
        if !self.is_pressed() {
            return None;
        }

        self.last_push_time
            .map(|pushed| self.time_source.now().duration_since(pushed))
    }

    /// Returns a reference to the input line.
    pub fn pin(&self) -> &P {
        &self.pin
    }

    /// Consumes the button and returns the input line.
    pub fn release(self) -> P {
        self.pin
    }
}
