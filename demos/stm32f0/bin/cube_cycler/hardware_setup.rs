use cortex_m::peripheral::SYST;
use rtt_target::rprintln;
use stm32f0xx_hal::{
    gpio::{Floating, Input, PullUp, gpioa, gpiob, gpioc},
    pac,
    prelude::*,
    pwm,
    time::Hertz,
};

use stm32f0_demo::buttons::ShieldButtons;
use stm32f0_demo::rgb_led::PwmRgbLed;
use stm32f0_demo::step_timer::Tim2StepTimer;

/// Counter rate the step periods are expressed in
pub const STEP_TIMER_HZ: u32 = 8_000_000;

/// Tri-color LED on TIM3
pub type Led = PwmRgbLed<
    pwm::PwmChannels<pac::TIM3, pwm::C1>,
    pwm::PwmChannels<pac::TIM3, pwm::C2>,
    pwm::PwmChannels<pac::TIM3, pwm::C3>,
>;

/// Rate button on PC13 (user button), pattern button on PA0
pub type Buttons = ShieldButtons<gpioc::PC13<Input<PullUp>>, gpioa::PA0<Input<PullUp>>>;

/// Container for all initialized hardware peripherals
pub struct HardwareContext {
    pub led: Led,
    pub buttons: Buttons,
    pub step_timer: Tim2StepTimer,
}

/// Initialize all hardware peripherals
///
/// - System clock configuration
/// - SysTick timer setup (1ms interrupts, paces the main loop)
/// - PWM configuration for the LED
/// - Button inputs
/// - TIM2 as the step timer (not started)
pub fn init_hardware() -> HardwareContext {
    let mut dp = pac::Peripherals::take().unwrap();
    let mut cp = cortex_m::Peripherals::take().unwrap();

    let mut rcc = dp.RCC.configure().sysclk(48.mhz()).freeze(&mut dp.FLASH);
    let sysclk = rcc.clocks.sysclk().0;
    rprintln!("System clock configured: {} Hz", sysclk);
    configure_systick(sysclk, &mut cp.SYST);

    let gpioa = dp.GPIOA.split(&mut rcc);
    let gpiob = dp.GPIOB.split(&mut rcc);
    let gpioc = dp.GPIOC.split(&mut rcc);

    let led = setup_led_pwm(gpioa.pa6, gpioa.pa7, gpiob.pb0, dp.TIM3, &mut rcc);
    let buttons = setup_buttons(gpioc.pc13, gpioa.pa0);
    let step_timer = setup_step_timer(dp.TIM2, rcc.clocks.pclk().0);

    HardwareContext {
        led,
        buttons,
        step_timer,
    }
}

/// Configure SysTick timer for 1ms interrupts
fn configure_systick(sysclk: u32, syst: &mut SYST) {
    syst.set_clock_source(cortex_m::peripheral::syst::SystClkSource::Core);
    syst.set_reload((sysclk / 1_000) - 1);
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();

    rprintln!("SysTick configured for 1ms interrupts");
}

fn setup_buttons(
    pc13: gpioc::PC13<Input<Floating>>,
    pa0: gpioa::PA0<Input<Floating>>,
) -> Buttons {
    let (rate, pattern) =
        cortex_m::interrupt::free(|cs| (pc13.into_pull_up_input(cs), pa0.into_pull_up_input(cs)));

    rprintln!("Buttons configured: rate on PC13, pattern on PA0");
    ShieldButtons::new(rate, pattern)
}

/// Configure PWM for the LED using TIM3
///
/// - Red: PA6 (TIM3_CH1)
/// - Green: PA7 (TIM3_CH2)
/// - Blue: PB0 (TIM3_CH3)
fn setup_led_pwm(
    pa6: gpioa::PA6<Input<Floating>>,
    pa7: gpioa::PA7<Input<Floating>>,
    pb0: gpiob::PB0<Input<Floating>>,
    tim3: pac::TIM3,
    rcc: &mut stm32f0xx_hal::rcc::Rcc,
) -> Led {
    let pins = cortex_m::interrupt::free(|cs| {
        (
            pa6.into_alternate_af1(cs),
            pa7.into_alternate_af1(cs),
            pb0.into_alternate_af1(cs),
        )
    });

    let (red, green, blue) = pwm::tim3(tim3, pins, rcc, Hertz(1_000));

    rprintln!("RGB LED configured on TIM3 (PA6, PA7, PB0)");

    // Common anode = true
    PwmRgbLed::new(red, green, blue, true)
}

/// Enable TIM2 and prescale it to [`STEP_TIMER_HZ`]
fn setup_step_timer(tim2: pac::TIM2, pclk: u32) -> Tim2StepTimer {
    // The HAL has taken RCC; enabling one more clock gate is a single bit.
    let rcc = unsafe { &*pac::RCC::ptr() };
    rcc.apb1enr.modify(|_, w| w.tim2en().set_bit());

    rprintln!("Step timer configured on TIM2 at {} Hz", STEP_TIMER_HZ);
    Tim2StepTimer::new(tim2, pclk, STEP_TIMER_HZ)
}
