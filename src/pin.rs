//! Input line abstraction.
//!
//! Defines [`ButtonPin`], the capability a [`Button`](crate::Button) needs from its
//! input line, and [`PullUpInput`] which binds any `embedded-hal` 1.0 input pin to it.

use crate::types::Level;
use embedded_hal::digital::InputPin;

/// Trait for abstracting a button's input line.
///
/// Implement this for your GPIO (or a test double) to let a button sample it.
pub trait ButtonPin {
    /// Configures the line as an input with the internal pull-up enabled.
    ///
    /// Called once when the button is constructed, before the first sample.
    fn configure_pull_up(&mut self);

    /// Samples the current logic level of the line.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn level(&mut self) -> Level;
}

/// Binds an `embedded-hal` input pin to [`ButtonPin`].
///
/// `embedded-hal` HALs select pulls through the pin's type before handing it
/// out (e.g. `into_pull_up_input()`), so `configure_pull_up` does nothing here.
/// A failed read reports `Level::High`, the released level, so a read error
/// never looks like a push.
#[derive(Debug)]
pub struct PullUpInput<P> {
    pin: P,
}

impl<P: InputPin> PullUpInput<P> {
    /// Wraps a pin that the HAL already configured as pull-up input.
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Returns a reference to the wrapped pin.
    pub fn inner(&self) -> &P {
        &self.pin
    }

    /// Releases the wrapped pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> ButtonPin for PullUpInput<P> {
    fn configure_pull_up(&mut self) {}

    fn level(&mut self) -> Level {
        match self.pin.is_low() {
            Ok(true) => Level::Low,
            Ok(false) | Err(_) => Level::High,
        }
    }
}
