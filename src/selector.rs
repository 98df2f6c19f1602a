//! Mode selectors driven by debounced button presses.
//!
//! The two selectors depend on each other's state: a rate change programs the
//! period from the table of the active pattern, and a pattern change rebuilds
//! that table and programs it for the current rate.

use crate::event::PressEvent;
use crate::hal::PeriodicTimer;
use crate::shared::PatternSignal;
use crate::timing::{CycleTiming, PeriodTable};
use crate::types::{PatternMode, RateMode};

/// Cycles Slow → Medium → Fast → Slow on each rate button press.
#[derive(Debug, Clone)]
pub struct RateSelector {
    mode: RateMode,
}

impl RateSelector {
    /// Starts at [`RateMode::Slow`].
    pub const fn new() -> Self {
        Self {
            mode: RateMode::Slow,
        }
    }

    pub fn mode(&self) -> RateMode {
        self.mode
    }

    /// Consumes a pending press, if any, moving to the next rate and loading
    /// its period from `periods`.
    pub fn step<T: PeriodicTimer>(
        &mut self,
        press: &mut PressEvent,
        periods: &PeriodTable,
        timer: &mut T,
    ) -> Option<RateMode> {
        if !press.take() {
            return None;
        }

        self.mode = self.mode.next();
        let ticks = periods.period(self.mode);
        timer.set_period(ticks);

        info!("rate -> {}", self.mode);
        debug!("timer period {} ticks", ticks);
        Some(self.mode)
    }
}

impl Default for RateSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Toggles between the two brightness sequences on each pattern button press.
#[derive(Debug, Clone)]
pub struct PatternSelector {
    mode: PatternMode,
    periods: PeriodTable,
}

impl PatternSelector {
    /// Starts at [`PatternMode::SequenceA`] with its period table.
    pub const fn new(timing: &CycleTiming) -> Self {
        Self {
            mode: PatternMode::SequenceA,
            periods: timing.periods_for(PatternMode::SequenceA),
        }
    }

    pub fn mode(&self) -> PatternMode {
        self.mode
    }

    /// Period table of the active pattern.
    pub fn periods(&self) -> &PeriodTable {
        &self.periods
    }

    /// Consumes a pending press, if any, and switches pattern.
    ///
    /// The switch publishes the new pattern to the timer handler (which restarts
    /// that sequence from its starting point), rebuilds the period table for the
    /// new step count and reloads the timer for `rate`, which itself is left as is.
    pub fn step<T: PeriodicTimer>(
        &mut self,
        press: &mut PressEvent,
        rate: RateMode,
        timing: &CycleTiming,
        signal: &PatternSignal,
        timer: &mut T,
    ) -> Option<PatternMode> {
        if !press.take() {
            return None;
        }

        self.mode = self.mode.toggled();
        signal.publish(self.mode);
        self.periods = timing.periods_for(self.mode);

        let ticks = self.periods.period(rate);
        timer.set_period(ticks);

        info!("pattern -> {}", self.mode);
        debug!("timer period {} ticks", ticks);
        Some(self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct LastPeriod(Option<u32>);

    impl PeriodicTimer for LastPeriod {
        fn set_period(&mut self, ticks: u32) {
            self.0 = Some(ticks);
        }

        fn start(&mut self) {}
    }

    #[test]
    fn rate_ignores_tick_without_press() {
        let timing = CycleTiming::DEFAULT;
        let mut rate = RateSelector::new();
        let mut press = PressEvent::new();
        let mut timer = LastPeriod::default();

        let periods = timing.periods_for(PatternMode::SequenceA);
        assert_eq!(rate.step(&mut press, &periods, &mut timer), None);
        assert_eq!(rate.mode(), RateMode::Slow);
        assert_eq!(timer.0, None);
    }

    #[test]
    fn rate_press_is_consumed_and_reloads_timer() {
        let timing = CycleTiming::DEFAULT;
        let mut rate = RateSelector::new();
        let mut press = PressEvent::new();
        let mut timer = LastPeriod::default();
        let periods = timing.periods_for(PatternMode::SequenceA);

        press.raise();
        assert_eq!(rate.step(&mut press, &periods, &mut timer), Some(RateMode::Medium));
        assert!(!press.is_pending());
        assert_eq!(timer.0, Some(periods.period(RateMode::Medium)));
    }

    #[test]
    fn pattern_switch_keeps_rate_and_publishes() {
        let timing = CycleTiming::DEFAULT;
        let signal = PatternSignal::new();
        let mut pattern = PatternSelector::new(&timing);
        let mut press = PressEvent::new();
        let mut timer = LastPeriod::default();

        press.raise();
        let switched = pattern.step(&mut press, RateMode::Fast, &timing, &signal, &mut timer);
        assert_eq!(switched, Some(PatternMode::SequenceB));
        assert_eq!(signal.load().mode, PatternMode::SequenceB);
        assert_eq!(timer.0, Some(2 * 8_000_000 / 128 - 1));
        assert_eq!(pattern.periods(), &timing.periods_for(PatternMode::SequenceB));
    }
}
