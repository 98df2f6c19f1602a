//! Core types shared by the state machines and the hardware traits.

use crate::sequence::{BrightnessSequence, CubeEdge, CubeFace};
use palette::Srgb;

/// Highest PWM level a channel can take (5-bit resolution).
pub const MAX_BRIGHTNESS: u8 = 31;

/// Brightness of the three LED channels, each in `0..=MAX_BRIGHTNESS`.
pub type Brightness = Srgb<u8>;

/// All channels off.
pub const ALL_OFF: Brightness = Srgb::new(0, 0, 0);

/// The red corner of the color cube.
pub const RED_CORNER: Brightness = Srgb::new(MAX_BRIGHTNESS, 0, 0);

/// One channel of the tri-color LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// The two physical buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Cycles the rate (B1).
    Rate,
    /// Toggles the brightness pattern (B2).
    Pattern,
}

/// How fast a full color cycle completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RateMode {
    /// 2 s per cycle with the default timing.
    Fast,
    /// 5 s per cycle with the default timing.
    Medium,
    /// 9 s per cycle with the default timing.
    Slow,
}

impl RateMode {
    /// Next rate in the Slow → Medium → Fast → Slow cycle.
    pub const fn next(self) -> Self {
        match self {
            RateMode::Slow => RateMode::Medium,
            RateMode::Medium => RateMode::Fast,
            RateMode::Fast => RateMode::Slow,
        }
    }
}

/// Which brightness sequence is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternMode {
    /// Traversal of the RGB cube edges ([`CubeEdge`]).
    SequenceA,
    /// Traversal of the RGB cube faces ([`CubeFace`]).
    SequenceB,
}

impl PatternMode {
    /// The other pattern.
    pub const fn toggled(self) -> Self {
        match self {
            PatternMode::SequenceA => PatternMode::SequenceB,
            PatternMode::SequenceB => PatternMode::SequenceA,
        }
    }

    /// Number of timer expiries needed for one full color cycle.
    pub const fn steps_per_cycle(self) -> u32 {
        match self {
            PatternMode::SequenceA => CubeEdge::STEPS_PER_CYCLE,
            PatternMode::SequenceB => CubeFace::STEPS_PER_CYCLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_cycle_has_period_three() {
        let start = RateMode::Slow;
        assert_eq!(start.next(), RateMode::Medium);
        assert_eq!(start.next().next(), RateMode::Fast);
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn pattern_toggle_is_an_involution() {
        assert_eq!(PatternMode::SequenceA.toggled(), PatternMode::SequenceB);
        assert_eq!(PatternMode::SequenceA.toggled().toggled(), PatternMode::SequenceA);
    }

    #[test]
    fn step_counts_follow_phase_counts() {
        assert_eq!(PatternMode::SequenceA.steps_per_cycle(), 192);
        assert_eq!(PatternMode::SequenceB.steps_per_cycle(), 128);
    }
}
