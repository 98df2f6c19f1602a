//! The 10 ms cyclic executive.
//!
//! Every tick runs, in this fixed order: rate button debounce, pattern button
//! debounce, pattern selection, rate selection. Debouncing comes first so a press
//! seen this tick reaches its selector in the same tick.
//!
//! When both buttons report a press in the same tick, the pattern switch runs
//! before the rate change. Both selectors program the period from the combined
//! (rate, pattern) state, so the timer ends up with the same value whichever
//! order they ran in; only the intermediate reload differs.

use crate::debounce::{DebounceTransition, Debouncer};
use crate::event::PressEvent;
use crate::hal::{ButtonInput, CyclePacer, PeriodicTimer};
use crate::selector::{PatternSelector, RateSelector};
use crate::shared::PatternSignal;
use crate::timing::{CycleTiming, TICK_PERIOD_MS};
use crate::types::{ButtonId, PatternMode, RateMode};

/// Main-loop context: button debouncers, press events, mode selectors and the
/// periodic timer they program.
pub struct CyclicScheduler<'s, B: ButtonInput, T: PeriodicTimer> {
    buttons: B,
    timer: T,
    signal: &'s PatternSignal,
    timing: CycleTiming,
    rate_button: Debouncer,
    pattern_button: Debouncer,
    rate_press: PressEvent,
    pattern_press: PressEvent,
    rate: RateSelector,
    pattern: PatternSelector,
}

impl<'s, B: ButtonInput, T: PeriodicTimer> CyclicScheduler<'s, B, T> {
    /// Creates a scheduler with [`CycleTiming::DEFAULT`].
    pub fn new(buttons: B, timer: T, signal: &'s PatternSignal) -> Self {
        Self::with_timing(buttons, timer, signal, CycleTiming::DEFAULT)
    }

    /// Creates a scheduler with custom (already validated) timing.
    pub fn with_timing(
        buttons: B,
        timer: T,
        signal: &'s PatternSignal,
        timing: CycleTiming,
    ) -> Self {
        Self {
            buttons,
            timer,
            signal,
            timing,
            rate_button: Debouncer::new(),
            pattern_button: Debouncer::new(),
            rate_press: PressEvent::new(),
            pattern_press: PressEvent::new(),
            rate: RateSelector::new(),
            pattern: PatternSelector::new(&timing),
        }
    }

    /// Preloads the Slow period for the starting pattern and starts the timer.
    pub fn start(&mut self) {
        let ticks = self.pattern.periods().period(self.rate.mode());
        self.timer.set_period(ticks);
        self.timer.start();
        info!(
            "started: {} at {}, period {} ticks",
            self.pattern.mode(),
            self.rate.mode(),
            ticks
        );
    }

    /// Runs one 10 ms cycle.
    pub fn tick(&mut self) {
        let pressed = self.buttons.is_pressed(ButtonId::Rate);
        poll_button(&mut self.rate_button, &mut self.rate_press, pressed);

        let pressed = self.buttons.is_pressed(ButtonId::Pattern);
        poll_button(&mut self.pattern_button, &mut self.pattern_press, pressed);

        self.pattern.step(
            &mut self.pattern_press,
            self.rate.mode(),
            &self.timing,
            self.signal,
            &mut self.timer,
        );
        self.rate
            .step(&mut self.rate_press, self.pattern.periods(), &mut self.timer);
    }

    /// Starts the timer and runs the loop forever, one tick every
    /// [`TICK_PERIOD_MS`].
    pub fn run<C: CyclePacer>(mut self, pacer: &mut C) -> ! {
        self.start();
        pacer.wait_next_tick(TICK_PERIOD_MS);
        loop {
            self.tick();
            pacer.wait_next_tick(TICK_PERIOD_MS);
        }
    }

    pub fn rate(&self) -> RateMode {
        self.rate.mode()
    }

    pub fn pattern(&self) -> PatternMode {
        self.pattern.mode()
    }

    /// Reload value currently programmed for the active (rate, pattern) pair.
    pub fn current_period(&self) -> u32 {
        self.pattern.periods().period(self.rate.mode())
    }

    pub fn rate_button(&self) -> &Debouncer {
        &self.rate_button
    }

    pub fn pattern_button(&self) -> &Debouncer {
        &self.pattern_button
    }

    pub fn buttons_mut(&mut self) -> &mut B {
        &mut self.buttons
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }
}

/// Debounces one raw read and raises `press` on a new press.
fn poll_button(button: &mut Debouncer, press: &mut PressEvent, pressed: bool) {
    if button.step(pressed) != DebounceTransition::Pressed {
        return;
    }
    if !press.raise() {
        trace!("press lost: previous press unconsumed");
    }
}
