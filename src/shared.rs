//! Pattern hand-off from the main loop to the timer interrupt.

use core::cell::Cell;
use critical_section::Mutex;

use crate::types::PatternMode;

/// A published pattern selection.
///
/// The generation changes on every publish, so the reader can tell a fresh
/// selection of the same pattern from the one it already acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PatternStamp {
    pub mode: PatternMode,
    pub generation: u8,
}

impl PatternStamp {
    /// SequenceA, never published.
    pub const INITIAL: PatternStamp = PatternStamp {
        mode: PatternMode::SequenceA,
        generation: 0,
    };
}

/// Single-writer, single-reader cell carrying the active pattern.
///
/// The main loop is the only writer ([`publish`](Self::publish)); the timer
/// handler is the only reader ([`load`](Self::load)). Each access is a single
/// store or load inside a critical section, so it is safe to place in a
/// `static` shared with an interrupt handler.
pub struct PatternSignal {
    stamp: Mutex<Cell<PatternStamp>>,
}

impl PatternSignal {
    pub const fn new() -> Self {
        Self {
            stamp: Mutex::new(Cell::new(PatternStamp::INITIAL)),
        }
    }

    /// Publishes `mode` under a new generation and returns the stored stamp.
    pub fn publish(&self, mode: PatternMode) -> PatternStamp {
        critical_section::with(|cs| {
            let cell = self.stamp.borrow(cs);
            let stamp = PatternStamp {
                mode,
                generation: cell.get().generation.wrapping_add(1),
            };
            cell.set(stamp);
            stamp
        })
    }

    /// Reads the latest published stamp.
    pub fn load(&self) -> PatternStamp {
        critical_section::with(|cs| self.stamp.borrow(cs).get())
    }
}

impl Default for PatternSignal {
    fn default() -> Self {
        Self::new()
    }
}
