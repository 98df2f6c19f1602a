//! Shared test infrastructure for cube-cycler integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use cube_cycler::{
    BOUNCE_DELAY_TICKS, Brightness, ButtonId, ButtonInput, Channel, CyclePacer, CyclicScheduler,
    PeriodicTimer, PwmOutput, TimerInterrupt,
};

// ============================================================================
// Mock Buttons
// ============================================================================

/// Raw button levels, set directly by the test
#[derive(Debug, Default)]
pub struct MockButtons {
    pub rate: bool,
    pub pattern: bool,
}

impl ButtonInput for MockButtons {
    fn is_pressed(&mut self, button: ButtonId) -> bool {
        match button {
            ButtonId::Rate => self.rate,
            ButtonId::Pattern => self.pattern,
        }
    }
}

// ============================================================================
// Mock Timer
// ============================================================================

/// Mock periodic timer that records every reload value
#[derive(Debug, Default)]
pub struct MockTimer {
    pub period: Option<u32>,
    pub running: bool,
    pub history: heapless::Vec<u32, 32>,
}

impl PeriodicTimer for MockTimer {
    fn set_period(&mut self, ticks: u32) {
        self.period = Some(ticks);
        let _ = self.history.push(ticks);
    }

    fn start(&mut self) {
        self.running = true;
    }
}

// ============================================================================
// Mock PWM
// ============================================================================

/// Mock PWM outputs holding the last level per channel
#[derive(Debug, Default)]
pub struct MockPwm {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub writes: usize,
    pub order: heapless::Vec<Channel, 3>,
}

impl MockPwm {
    pub fn brightness(&self) -> Brightness {
        Brightness::new(self.red, self.green, self.blue)
    }
}

impl PwmOutput for MockPwm {
    fn set_level(&mut self, channel: Channel, level: u8) {
        match channel {
            Channel::Red => self.red = level,
            Channel::Green => self.green = level,
            Channel::Blue => self.blue = level,
        }
        self.writes += 1;
        if self.order.is_full() {
            self.order.clear();
        }
        let _ = self.order.push(channel);
    }
}

// ============================================================================
// Mock Timer Interrupt
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrqCall {
    ClearPending,
    ClearAllFlags,
}

/// Mock timer interrupt with a controllable expiry flag
#[derive(Debug)]
pub struct MockIrq {
    pub expired: bool,
    pub calls: heapless::Vec<IrqCall, 8>,
}

impl MockIrq {
    pub fn expired() -> Self {
        Self {
            expired: true,
            calls: heapless::Vec::new(),
        }
    }
}

impl TimerInterrupt for MockIrq {
    fn clear_pending(&mut self) {
        let _ = self.calls.push(IrqCall::ClearPending);
    }

    fn is_expired(&self) -> bool {
        self.expired
    }

    fn clear_all_flags(&mut self) {
        self.expired = false;
        let _ = self.calls.push(IrqCall::ClearAllFlags);
    }
}

// ============================================================================
// Mock Pacer
// ============================================================================

/// Pacer that panics after a fixed number of waits, to break out of `run`
pub struct StoppingPacer {
    pub waits: u32,
    pub limit: u32,
}

impl CyclePacer for StoppingPacer {
    fn wait_next_tick(&mut self, period_ms: u32) {
        assert_eq!(period_ms, 10);
        self.waits += 1;
        if self.waits >= self.limit {
            panic!("pacer stop after {} waits", self.waits);
        }
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Holds a button down for `held` ticks, then releases it long enough to settle
pub fn click<T: PeriodicTimer>(
    scheduler: &mut CyclicScheduler<'_, MockButtons, T>,
    button: ButtonId,
    held: u32,
) {
    set_button(scheduler, button, true);
    for _ in 0..held {
        scheduler.tick();
    }
    set_button(scheduler, button, false);
    for _ in 0..=BOUNCE_DELAY_TICKS {
        scheduler.tick();
    }
}

pub fn set_button<T: PeriodicTimer>(
    scheduler: &mut CyclicScheduler<'_, MockButtons, T>,
    button: ButtonId,
    level: bool,
) {
    let buttons = scheduler.buttons_mut();
    match button {
        ButtonId::Rate => buttons.rate = level,
        ButtonId::Pattern => buttons.pattern = level,
    }
}

/// Fires `count` timer expiries at the handler
pub fn expire<P: PwmOutput>(handler: &mut cube_cycler::TimerExpiryHandler<'_, P>, count: u32) {
    for _ in 0..count {
        handler.on_expiry(&mut MockIrq::expired());
    }
}
