use cube_cycler::{Channel, MAX_BRIGHTNESS, PwmOutput};
use embedded_hal::PwmPin;

/// Tri-color LED driven by three PWM channels
///
/// Maps the 5-bit brightness levels onto the timer's duty range and handles
/// common anode/cathode logic.
pub struct PwmRgbLed<R, G, B>
where
    R: PwmPin<Duty = u16>,
    G: PwmPin<Duty = u16>,
    B: PwmPin<Duty = u16>,
{
    red: R,
    green: G,
    blue: B,
    max_duty: u16,
    common_anode: bool,
}

impl<R, G, B> PwmRgbLed<R, G, B>
where
    R: PwmPin<Duty = u16>,
    G: PwmPin<Duty = u16>,
    B: PwmPin<Duty = u16>,
{
    /// Create a new RGB LED controller with all channels off
    ///
    /// # Arguments
    /// * `red` - PWM channel for red LED
    /// * `green` - PWM channel for green LED
    /// * `blue` - PWM channel for blue LED
    /// * `common_anode` - true for common anode LED (inverted logic), false for common cathode
    pub fn new(mut red: R, mut green: G, mut blue: B, common_anode: bool) -> Self {
        let max_duty = red.get_max_duty();

        red.enable();
        green.enable();
        blue.enable();

        let mut led = Self {
            red,
            green,
            blue,
            max_duty,
            common_anode,
        };
        for channel in [Channel::Red, Channel::Green, Channel::Blue] {
            led.set_level(channel, 0);
        }
        led
    }

    /// Convert a 0-31 level to a PWM duty cycle
    fn level_to_duty(&self, level: u8) -> u16 {
        let level = level.min(MAX_BRIGHTNESS) as u32;
        let duty = (level * self.max_duty as u32 / MAX_BRIGHTNESS as u32) as u16;

        if self.common_anode {
            self.max_duty - duty
        } else {
            duty
        }
    }
}

impl<R, G, B> PwmOutput for PwmRgbLed<R, G, B>
where
    R: PwmPin<Duty = u16>,
    G: PwmPin<Duty = u16>,
    B: PwmPin<Duty = u16>,
{
    fn set_level(&mut self, channel: Channel, level: u8) {
        let duty = self.level_to_duty(level);
        match channel {
            Channel::Red => self.red.set_duty(duty),
            Channel::Green => self.green.set_duty(duty),
            Channel::Blue => self.blue.set_duty(duty),
        }
    }
}
