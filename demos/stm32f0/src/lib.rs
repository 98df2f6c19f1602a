#![no_std]

pub mod buttons;
pub mod pacer;
pub mod rgb_led;
pub mod step_timer;
