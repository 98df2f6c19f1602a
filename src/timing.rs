//! Timer period derivation.
//!
//! Both patterns must finish a color cycle in the same wall-clock time, so the
//! per-step period is derived from each pattern's step count:
//! `period = secs * timer_clock_hz / steps - 1`.

use crate::types::{PatternMode, RateMode};

/// Main loop cadence in milliseconds.
pub const TICK_PERIOD_MS: u32 = 10;

/// Target cycle durations and the timer clock they are expressed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleTiming {
    timer_clock_hz: u32,
    fast_secs: u32,
    medium_secs: u32,
    slow_secs: u32,
}

// The built-in timing must give a positive period for every (rate, pattern) pair.
const _: () = assert!(CycleTiming::DEFAULT.validate().is_ok());

impl CycleTiming {
    /// 8 MHz timer clock; 2 s, 5 s and 9 s cycles.
    pub const DEFAULT: CycleTiming = CycleTiming {
        timer_clock_hz: 8_000_000,
        fast_secs: 2,
        medium_secs: 5,
        slow_secs: 9,
    };

    /// Creates a timing configuration, rejecting any that would give a
    /// non-positive or out-of-range period for either pattern.
    pub const fn new(
        timer_clock_hz: u32,
        fast_secs: u32,
        medium_secs: u32,
        slow_secs: u32,
    ) -> Result<Self, TimingError> {
        let timing = CycleTiming {
            timer_clock_hz,
            fast_secs,
            medium_secs,
            slow_secs,
        };
        match timing.validate() {
            Ok(()) => Ok(timing),
            Err(e) => Err(e),
        }
    }

    /// Checks every (rate, pattern) combination.
    pub const fn validate(&self) -> Result<(), TimingError> {
        if self.timer_clock_hz == 0 {
            return Err(TimingError::ZeroClock);
        }
        if self.fast_secs == 0 || self.medium_secs == 0 || self.slow_secs == 0 {
            return Err(TimingError::ZeroDuration);
        }

        const RATES: [RateMode; 3] = [RateMode::Fast, RateMode::Medium, RateMode::Slow];
        const PATTERNS: [PatternMode; 2] = [PatternMode::SequenceA, PatternMode::SequenceB];

        let mut p = 0;
        while p < PATTERNS.len() {
            let mut r = 0;
            while r < RATES.len() {
                if let Err(e) = self.period_ticks(RATES[r], PATTERNS[p].steps_per_cycle()) {
                    return Err(e);
                }
                r += 1;
            }
            p += 1;
        }
        Ok(())
    }

    pub const fn timer_clock_hz(&self) -> u32 {
        self.timer_clock_hz
    }

    /// Target duration of one full color cycle at `rate`.
    pub const fn cycle_secs(&self, rate: RateMode) -> u32 {
        match rate {
            RateMode::Fast => self.fast_secs,
            RateMode::Medium => self.medium_secs,
            RateMode::Slow => self.slow_secs,
        }
    }

    /// Reload value for one step when a cycle has `steps` steps.
    pub const fn period_ticks(&self, rate: RateMode, steps: u32) -> Result<u32, TimingError> {
        if steps == 0 {
            return Err(TimingError::PeriodUnderflow { rate, steps });
        }
        let per_step = self.cycle_secs(rate) as u64 * self.timer_clock_hz as u64 / steps as u64;
        if per_step < 2 {
            return Err(TimingError::PeriodUnderflow { rate, steps });
        }
        let ticks = per_step - 1;
        if ticks > u32::MAX as u64 {
            return Err(TimingError::PeriodOverflow { rate, steps });
        }
        Ok(ticks as u32)
    }

    /// Period table for the given pattern.
    ///
    /// Infallible because construction already validated every combination.
    pub const fn periods_for(&self, pattern: PatternMode) -> PeriodTable {
        let steps = pattern.steps_per_cycle();
        PeriodTable {
            fast: self.validated_ticks(RateMode::Fast, steps),
            medium: self.validated_ticks(RateMode::Medium, steps),
            slow: self.validated_ticks(RateMode::Slow, steps),
        }
    }

    const fn validated_ticks(&self, rate: RateMode, steps: u32) -> u32 {
        match self.period_ticks(rate, steps) {
            Ok(ticks) => ticks,
            // Unreachable for a validated configuration.
            Err(_) => u32::MAX,
        }
    }
}

impl Default for CycleTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Timer reload values for the three rates of one pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PeriodTable {
    fast: u32,
    medium: u32,
    slow: u32,
}

impl PeriodTable {
    /// Reload value for `rate`.
    pub const fn period(&self, rate: RateMode) -> u32 {
        match rate {
            RateMode::Fast => self.fast,
            RateMode::Medium => self.medium,
            RateMode::Slow => self.slow,
        }
    }
}

/// Rejected timing configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingError {
    /// Timer clock of 0 Hz.
    ZeroClock,

    /// A cycle duration of 0 s.
    ZeroDuration,

    /// The period would be zero or negative.
    PeriodUnderflow {
        rate: RateMode,
        steps: u32,
    },

    /// The period does not fit the 32-bit reload register.
    PeriodOverflow {
        rate: RateMode,
        steps: u32,
    },
}

impl core::fmt::Display for TimingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimingError::ZeroClock => write!(f, "timer clock must be non-zero"),
            TimingError::ZeroDuration => write!(f, "cycle durations must be non-zero"),
            TimingError::PeriodUnderflow { rate, steps } => {
                write!(
                    f,
                    "{:?} rate over {} steps gives a non-positive timer period",
                    rate, steps
                )
            }
            TimingError::PeriodOverflow { rate, steps } => {
                write!(
                    f,
                    "{:?} rate over {} steps overflows the timer reload register",
                    rate, steps
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimingError {}
