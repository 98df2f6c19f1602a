use cube_cycler::{ButtonId, ButtonInput};
use embedded_hal::digital::v2::InputPin;

/// The two push buttons, wired to ground with pull-ups (pressed reads low)
pub struct ShieldButtons<R, P>
where
    R: InputPin,
    P: InputPin,
{
    rate: R,
    pattern: P,
}

impl<R, P> ShieldButtons<R, P>
where
    R: InputPin,
    P: InputPin,
{
    pub fn new(rate: R, pattern: P) -> Self {
        Self { rate, pattern }
    }
}

impl<R, P> ButtonInput for ShieldButtons<R, P>
where
    R: InputPin,
    P: InputPin,
{
    fn is_pressed(&mut self, button: ButtonId) -> bool {
        // A failed read counts as released.
        match button {
            ButtonId::Rate => self.rate.is_low().unwrap_or(false),
            ButtonId::Pattern => self.pattern.is_low().unwrap_or(false),
        }
    }
}
