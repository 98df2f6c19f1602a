#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`CyclicScheduler`**: The 10 ms main loop: debounces both buttons and runs the mode selectors
//! - **`TimerExpiryHandler`**: Interrupt-side owner of the sequences and the PWM outputs
//! - **`PatternSignal`**: Interrupt-safe hand-off of the active pattern between the two
//! - **`Debouncer`**: Turns raw button reads into single press transitions
//! - **`PressEvent`**: Single-slot, take-and-clear press event cell
//! - **`RateSelector`** / **`PatternSelector`**: Mode state machines that reprogram the timer
//! - **`CubeEdge`** / **`CubeFace`**: Brightness sequences walking the RGB cube
//! - **`CycleTiming`**: Target cycle durations and the derived timer periods
//! - **`ButtonInput`**, **`PwmOutput`**, **`PeriodicTimer`**, **`TimerInterrupt`**, **`CyclePacer`**:
//!   Traits to implement for your hardware
//!
//! Brightness is a `Srgb<u8>` holding 5-bit PWM levels (0-31) per channel.

// Must come first so the logging macros are visible to the other modules.
mod fmt;

pub use palette::Srgb;

pub mod types;
pub mod hal;
pub mod event;
pub mod debounce;
pub mod timing;
pub mod sequence;
pub mod selector;
pub mod shared;
pub mod handler;
pub mod scheduler;

pub use types::{
    ALL_OFF, Brightness, ButtonId, Channel, MAX_BRIGHTNESS, PatternMode, RED_CORNER, RateMode,
};
pub use hal::{ButtonInput, CyclePacer, PeriodicTimer, PwmOutput, TimerInterrupt};
pub use event::PressEvent;
pub use debounce::{BOUNCE_DELAY_TICKS, ButtonState, DebounceTransition, Debouncer};
pub use timing::{CycleTiming, PeriodTable, TICK_PERIOD_MS, TimingError};
pub use sequence::{BrightnessSequence, CubeEdge, CubeFace, EdgePhase, FacePhase};
pub use selector::{PatternSelector, RateSelector};
pub use shared::{PatternSignal, PatternStamp};
pub use handler::TimerExpiryHandler;
pub use scheduler::CyclicScheduler;
