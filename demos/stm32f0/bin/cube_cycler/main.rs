#![no_std]
#![no_main]

use core::cell::RefCell;
use cortex_m_rt::entry;
use critical_section::Mutex;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f0xx_hal::pac::interrupt;

use cube_cycler::{CyclicScheduler, PatternSignal, TimerExpiryHandler};
use stm32f0_demo::pacer::SysTickPacer;
use stm32f0_demo::step_timer::Tim2Irq;

mod hardware_setup;

use hardware_setup::Led;

/// Active pattern, written by the main loop and read by the TIM2 handler
static PATTERN: PatternSignal = PatternSignal::new();

/// Owned by the TIM2 handler once installed
static HANDLER: Mutex<RefCell<Option<TimerExpiryHandler<'static, Led>>>> =
    Mutex::new(RefCell::new(None));

/// SysTick interrupt handler - called every 1ms
#[cortex_m_rt::exception]
fn SysTick() {
    stm32f0_demo::pacer::tick();
}

/// Step timer expiry
#[interrupt]
fn TIM2() {
    critical_section::with(|cs| {
        if let Some(handler) = HANDLER.borrow_ref_mut(cs).as_mut() {
            handler.on_expiry(&mut Tim2Irq);
        }
    });
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== RGB Cube Cycler ===");

    let hw = hardware_setup::init_hardware();
    rprintln!("Hardware initialized successfully");

    let handler = TimerExpiryHandler::new(hw.led, &PATTERN);
    critical_section::with(|cs| HANDLER.borrow_ref_mut(cs).replace(handler));

    let scheduler = CyclicScheduler::new(hw.buttons, hw.step_timer, &PATTERN);
    let mut pacer = SysTickPacer::new();

    rprintln!("=== System Ready ===");
    rprintln!("  rate button (PC13): slow -> medium -> fast");
    rprintln!("  pattern button (PA0): cube edges <-> cube faces");

    scheduler.run(&mut pacer)
}
