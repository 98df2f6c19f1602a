//! Hardware abstraction traits.
//!
//! Implement these for your board to drive the controller. Peripheral and clock
//! setup happen before any of them are used and are not modelled here. None of
//! the methods can fail: handle hardware errors inside the implementation.

use crate::types::{Brightness, ButtonId, Channel};

/// Raw, undebounced button reads.
pub trait ButtonInput {
    /// Returns `true` while the button is held down.
    fn is_pressed(&mut self, button: ButtonId) -> bool;
}

/// PWM outputs of the tri-color LED.
pub trait PwmOutput {
    /// Applies a duty cycle to one channel. `level` is in `0..=MAX_BRIGHTNESS`.
    fn set_level(&mut self, channel: Channel, level: u8);

    /// Pushes all three channels, red first, then blue, then green.
    fn set_brightness(&mut self, brightness: Brightness) {
        self.set_level(Channel::Red, brightness.red);
        self.set_level(Channel::Blue, brightness.blue);
        self.set_level(Channel::Green, brightness.green);
    }
}

/// The periodic timer whose expiry advances the active sequence.
pub trait PeriodicTimer {
    /// Loads a new reload value, in timer clock ticks.
    fn set_period(&mut self, ticks: u32);

    /// Starts counting. Called once at startup.
    fn start(&mut self);
}

/// Interrupt-side view of the periodic timer.
pub trait TimerInterrupt {
    /// Clears the pending indication in the interrupt controller.
    fn clear_pending(&mut self);

    /// Returns `true` if the timer channel in use has expired.
    fn is_expired(&self) -> bool;

    /// Clears every status flag of the timer, not only the channel in use.
    fn clear_all_flags(&mut self);
}

/// Paces the main loop.
pub trait CyclePacer {
    /// Blocks until `period_ms` milliseconds have elapsed since the previous call.
    fn wait_next_tick(&mut self, period_ms: u32);
}
