//! TIM2 as the periodic step timer.
//!
//! TIM2 is 32 bits wide on the STM32F072, so it holds the slowest reload value
//! directly. The prescaler brings the timer clock down to the 8 MHz the
//! periods are computed against.

use cortex_m::peripheral::NVIC;
use cube_cycler::{PeriodicTimer, TimerInterrupt};
use stm32f0xx_hal::pac::{self, Interrupt};

/// Main-loop handle: reloads and starts TIM2
pub struct Tim2StepTimer {
    tim: pac::TIM2,
}

impl Tim2StepTimer {
    /// Takes a TIM2 whose bus clock is already enabled.
    ///
    /// # Arguments
    /// * `tim` - TIM2 peripheral
    /// * `timer_clock_hz` - TIM2 input clock
    /// * `tick_hz` - desired counter rate, the clock the periods are expressed in
    pub fn new(tim: pac::TIM2, timer_clock_hz: u32, tick_hz: u32) -> Self {
        let psc = (timer_clock_hz / tick_hz).saturating_sub(1) as u16;

        tim.cr1.modify(|_, w| w.cen().clear_bit());
        tim.psc.write(|w| w.psc().bits(psc));
        // Latch the prescaler without raising an update interrupt.
        tim.cr1.modify(|_, w| w.urs().set_bit());
        tim.egr.write(|w| w.ug().set_bit());
        tim.sr.write(|w| unsafe { w.bits(0) });
        tim.dier.modify(|_, w| w.uie().set_bit());

        Self { tim }
    }
}

impl PeriodicTimer for Tim2StepTimer {
    fn set_period(&mut self, ticks: u32) {
        self.tim.arr.write(|w| unsafe { w.bits(ticks) });
        // A counter already past the new reload would run the full 32-bit range.
        if self.tim.cnt.read().bits() > ticks {
            self.tim.cnt.write(|w| unsafe { w.bits(0) });
        }
    }

    fn start(&mut self) {
        unsafe { NVIC::unmask(Interrupt::TIM2) };
        self.tim.cr1.modify(|_, w| w.cen().set_bit());
    }
}

/// Interrupt-side handle to TIM2's status register
pub struct Tim2Irq;

impl Tim2Irq {
    fn regs() -> &'static pac::tim2::RegisterBlock {
        // Only the status register is touched, and only from the TIM2 handler.
        unsafe { &*pac::TIM2::ptr() }
    }
}

impl TimerInterrupt for Tim2Irq {
    fn clear_pending(&mut self) {
        NVIC::unpend(Interrupt::TIM2);
    }

    fn is_expired(&self) -> bool {
        Self::regs().sr.read().uif().bit_is_set()
    }

    fn clear_all_flags(&mut self) {
        // Update and all four capture/compare flags share this register.
        Self::regs().sr.modify(|_, w| {
            w.uif()
                .clear_bit()
                .cc1if()
                .clear_bit()
                .cc2if()
                .clear_bit()
                .cc3if()
                .clear_bit()
                .cc4if()
                .clear_bit()
        });
    }
}
