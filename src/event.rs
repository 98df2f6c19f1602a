//! Single-slot press event hand-off between a debouncer and its selector.

/// A one-element event cell with take-and-clear semantics.
///
/// Written by exactly one producer (a [`Debouncer`](crate::Debouncer)) and
/// consumed by exactly one reader (a selector). There is no queue: raising an
/// event that is still pending coalesces with it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PressEvent {
    pending: bool,
}

impl PressEvent {
    /// Creates an empty cell.
    pub const fn new() -> Self {
        Self { pending: false }
    }

    /// Marks a press. Returns `false` if a previous press was still unconsumed,
    /// in which case the new one is lost.
    pub fn raise(&mut self) -> bool {
        let fresh = !self.pending;
        self.pending = true;
        fresh
    }

    /// Consumes the pending press, if any.
    pub fn take(&mut self) -> bool {
        core::mem::replace(&mut self.pending, false)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
