//! Button debouncing state machine.

/// Scheduler ticks a released button must stay released before it counts as open.
pub const BOUNCE_DELAY_TICKS: u8 = 3;

/// Debounced state of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Released and settled.
    Open,
    /// Held down; the press has been reported.
    Closed,
    /// Released recently; waiting for contacts to settle.
    Bouncing,
}

/// What a single [`Debouncer::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceTransition {
    /// No state change.
    Unchanged,
    /// Open → Closed. The only transition that reports a press.
    Pressed,
    /// Closed → Bouncing. The bounce countdown was armed.
    Released,
    /// Bouncing → Closed. Contact resumed, no new press.
    Reclosed,
    /// Bouncing → Open. The countdown expired with the button released.
    Settled,
}

/// Turns noisy raw reads from one button into clean press transitions.
///
/// Call [`step`](Self::step) exactly once per scheduler tick.
#[derive(Debug, Clone)]
pub struct Debouncer {
    state: ButtonState,
    countdown: u8,
    delay: u8,
}

impl Debouncer {
    /// Creates an open debouncer using [`BOUNCE_DELAY_TICKS`].
    pub const fn new() -> Self {
        Self::with_delay(BOUNCE_DELAY_TICKS)
    }

    /// Creates an open debouncer with a custom bounce delay in ticks.
    pub const fn with_delay(delay: u8) -> Self {
        Self {
            state: ButtonState::Open,
            countdown: 0,
            delay,
        }
    }

    /// Advances one tick given the raw read of the button.
    ///
    /// The countdown is decremented first, then the transition table is
    /// evaluated against `pressed`.
    pub fn step(&mut self, pressed: bool) -> DebounceTransition {
        if self.countdown > 0 {
            self.countdown -= 1;
        }

        let transition = match self.state {
            ButtonState::Open if pressed => {
                self.state = ButtonState::Closed;
                DebounceTransition::Pressed
            }
            ButtonState::Closed if !pressed => {
                self.state = ButtonState::Bouncing;
                self.countdown = self.delay;
                DebounceTransition::Released
            }
            ButtonState::Bouncing if pressed => {
                self.state = ButtonState::Closed;
                DebounceTransition::Reclosed
            }
            ButtonState::Bouncing if self.countdown == 0 => {
                self.state = ButtonState::Open;
                DebounceTransition::Settled
            }
            _ => DebounceTransition::Unchanged,
        };

        if transition != DebounceTransition::Unchanged {
            trace!("debounce {} -> {}", transition, self.state);
        }
        transition
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Remaining bounce ticks. Zero outside of `Bouncing`.
    pub fn countdown(&self) -> u8 {
        self.countdown
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_reported_once_while_held() {
        let mut button = Debouncer::new();
        assert_eq!(button.step(true), DebounceTransition::Pressed);
        for _ in 0..50 {
            assert_eq!(button.step(true), DebounceTransition::Unchanged);
        }
        assert_eq!(button.state(), ButtonState::Closed);
    }

    #[test]
    fn release_settles_after_delay() {
        let mut button = Debouncer::with_delay(3);
        button.step(true);
        assert_eq!(button.step(false), DebounceTransition::Released);
        assert_eq!(button.countdown(), 3);

        assert_eq!(button.step(false), DebounceTransition::Unchanged);
        assert_eq!(button.step(false), DebounceTransition::Unchanged);
        assert_eq!(button.step(false), DebounceTransition::Settled);
        assert_eq!(button.state(), ButtonState::Open);
    }

    #[test]
    fn contact_while_bouncing_recloses_without_press() {
        let mut button = Debouncer::with_delay(3);
        button.step(true);
        button.step(false);
        assert_eq!(button.step(true), DebounceTransition::Reclosed);
        assert_eq!(button.state(), ButtonState::Closed);
    }

    #[test]
    fn zero_delay_settles_on_next_tick() {
        let mut button = Debouncer::with_delay(0);
        button.step(true);
        assert_eq!(button.step(false), DebounceTransition::Released);
        assert_eq!(button.step(false), DebounceTransition::Settled);
    }

    #[test]
    fn open_button_ignores_release() {
        let mut button = Debouncer::new();
        for _ in 0..10 {
            assert_eq!(button.step(false), DebounceTransition::Unchanged);
        }
        assert_eq!(button.state(), ButtonState::Open);
        assert_eq!(button.countdown(), 0);
    }
}
