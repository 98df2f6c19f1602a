use core::cell::Cell;
use critical_section::Mutex;
use cube_cycler::CyclePacer;

/// Global millisecond counter incremented by SysTick interrupt
///
/// This counter is automatically incremented every millisecond by the SysTick
/// interrupt handler. It wraps after ~49.7 days of continuous operation.
static MILLIS_COUNTER: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

/// Increments the global millisecond counter.
///
/// Call from the SysTick interrupt handler every 1ms.
pub fn tick() {
    critical_section::with(|cs| {
        let counter = MILLIS_COUNTER.borrow(cs);
        let current = counter.get();
        counter.set(current.wrapping_add(1));
    });
}

/// Milliseconds since startup.
pub fn millis() -> u32 {
    critical_section::with(|cs| MILLIS_COUNTER.borrow(cs).get())
}

/// Paces the main loop off the SysTick millisecond counter
///
/// Each wait ends a fixed period after the previous deadline rather than after
/// the previous return, so time spent in the loop body does not accumulate.
pub struct SysTickPacer {
    deadline: u32,
}

impl SysTickPacer {
    pub fn new() -> Self {
        Self { deadline: millis() }
    }
}

impl CyclePacer for SysTickPacer {
    fn wait_next_tick(&mut self, period_ms: u32) {
        self.deadline = self.deadline.wrapping_add(period_ms);
        // Wrapping compare: done once `now` is at or past the deadline.
        while millis().wrapping_sub(self.deadline) >= 0x8000_0000 {
            cortex_m::asm::wfi();
        }
    }
}
