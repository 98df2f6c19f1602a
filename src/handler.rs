//! Timer expiry handling.
//!
//! The handler runs in interrupt context. It owns both sequence generators and
//! the PWM outputs outright; the only state it shares with the main loop is the
//! [`PatternSignal`], which it never writes.

use crate::hal::{PwmOutput, TimerInterrupt};
use crate::sequence::{BrightnessSequence, CubeEdge, CubeFace};
use crate::shared::{PatternSignal, PatternStamp};
use crate::types::{Brightness, PatternMode};

/// Advances the active sequence on every timer expiry and drives the LED.
pub struct TimerExpiryHandler<'s, P: PwmOutput> {
    pwm: P,
    signal: &'s PatternSignal,
    seen: PatternStamp,
    edge: CubeEdge,
    face: CubeFace,
}

impl<'s, P: PwmOutput> TimerExpiryHandler<'s, P> {
    /// Creates a handler with both sequences at their starting points.
    ///
    /// Any pattern already published to `signal` is picked up on the first expiry.
    pub fn new(pwm: P, signal: &'s PatternSignal) -> Self {
        Self {
            pwm,
            signal,
            seen: PatternStamp::INITIAL,
            edge: CubeEdge::new(),
            face: CubeFace::new(),
        }
    }

    /// Interrupt entry point.
    ///
    /// Clears the pending interrupt, advances the sequence if the timer
    /// actually expired, then clears every timer status flag.
    pub fn on_expiry<I: TimerInterrupt>(&mut self, irq: &mut I) {
        irq.clear_pending();

        if irq.is_expired() {
            let brightness = self.advance();
            self.pwm.set_brightness(brightness);
        }

        irq.clear_all_flags();
    }

    /// Steps whichever sequence is active and returns its brightness.
    ///
    /// A newly published pattern restarts its sequence before the step.
    pub fn advance(&mut self) -> Brightness {
        let stamp = self.signal.load();
        if stamp != self.seen {
            match stamp.mode {
                PatternMode::SequenceA => self.edge.reset(),
                PatternMode::SequenceB => self.face.reset(),
            }
            self.seen = stamp;
            trace!("sequence restart {}", stamp);
        }

        match stamp.mode {
            PatternMode::SequenceA => self.edge.step(),
            PatternMode::SequenceB => self.face.step(),
        }
    }

    /// Pattern the handler last acted on.
    pub fn active_pattern(&self) -> PatternMode {
        self.seen.mode
    }

    /// Brightness of the active sequence.
    pub fn brightness(&self) -> Brightness {
        match self.seen.mode {
            PatternMode::SequenceA => self.edge.brightness(),
            PatternMode::SequenceB => self.face.brightness(),
        }
    }

    pub fn edge(&self) -> &CubeEdge {
        &self.edge
    }

    pub fn face(&self) -> &CubeFace {
        &self.face
    }

    pub fn pwm(&self) -> &P {
        &self.pwm
    }

    pub fn pwm_mut(&mut self) -> &mut P {
        &mut self.pwm
    }
}
