//! Integration tests for Debouncer

use cube_cycler::{BOUNCE_DELAY_TICKS, ButtonState, DebounceTransition, Debouncer};

/// Every input sequence of this length is checked exhaustively.
const SEQUENCE_LEN: u32 = 14;

#[test]
fn at_most_one_press_per_open_closed_bouncing_open_cycle() {
    for bits in 0u32..(1 << SEQUENCE_LEN) {
        let mut button = Debouncer::new();
        // Initially open, so the first press needs no preceding cycle.
        let mut completed_cycle = true;
        let mut released_since_press = false;

        for i in 0..SEQUENCE_LEN {
            let pressed = bits & (1 << i) != 0;
            let before = button.state();

            match button.step(pressed) {
                DebounceTransition::Pressed => {
                    assert_eq!(before, ButtonState::Open, "input {bits:#b} tick {i}");
                    assert!(completed_cycle, "second press without settling, input {bits:#b}");
                    completed_cycle = false;
                    released_since_press = false;
                }
                DebounceTransition::Released => released_since_press = true,
                DebounceTransition::Settled => {
                    assert!(released_since_press, "input {bits:#b} tick {i}");
                    completed_cycle = true;
                }
                DebounceTransition::Reclosed | DebounceTransition::Unchanged => {}
            }
        }
    }
}

#[test]
fn glitch_while_bouncing_does_not_open_early() {
    for glitch_at in 0..BOUNCE_DELAY_TICKS {
        let mut button = Debouncer::new();
        assert_eq!(button.step(true), DebounceTransition::Pressed);
        assert_eq!(button.step(false), DebounceTransition::Released);

        for _ in 0..glitch_at {
            assert_eq!(button.step(false), DebounceTransition::Unchanged);
        }

        // One tick of contact re-closes without a press event.
        assert_eq!(button.step(true), DebounceTransition::Reclosed);
        assert_eq!(button.step(false), DebounceTransition::Released);

        // The full delay applies again from the last release.
        for _ in 1..BOUNCE_DELAY_TICKS {
            assert_eq!(button.step(false), DebounceTransition::Unchanged);
            assert_eq!(button.state(), ButtonState::Bouncing);
        }
        assert_eq!(button.step(false), DebounceTransition::Settled);
    }
}

#[test]
fn chattering_contacts_produce_a_single_press() {
    let mut button = Debouncer::new();
    let chatter = [true, false, true, false, false, true, true, false, true];
    let presses = chatter
        .iter()
        .filter(|&&level| button.step(level) == DebounceTransition::Pressed)
        .count();
    assert_eq!(presses, 1);
    assert_ne!(button.state(), ButtonState::Open);
}

#[test]
fn new_press_after_settling_is_reported() {
    let mut button = Debouncer::new();
    button.step(true);
    button.step(false);
    for _ in 0..BOUNCE_DELAY_TICKS {
        button.step(false);
    }
    assert_eq!(button.state(), ButtonState::Open);
    assert_eq!(button.step(true), DebounceTransition::Pressed);
}
