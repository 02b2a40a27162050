//! Interrupt-to-poll-loop signal latches.
//!
//! Each latch is a single boolean with one writer (interrupt context) and
//! one consumer (the poll loop). `request_*` may be called any number of
//! times before the latch is drained; the handler still fires exactly once.
//! `take_*` test-and-clears, so the clear always happens before the
//! handler's action can re-arm it.

use portable_atomic::{AtomicBool, Ordering};

/// The three asynchronous control signals
#[derive(Debug)]
pub struct SignalSet {
    abort: AtomicBool,
    feedhold: AtomicBool,
    cycle_start: AtomicBool,
}

impl SignalSet {
    /// Create a signal set with all latches clear
    pub const fn new() -> Self {
        Self {
            abort: AtomicBool::new(false),
            feedhold: AtomicBool::new(false),
            cycle_start: AtomicBool::new(false),
        }
    }

    /// Latch an abort request (interrupt-safe)
    pub fn request_abort(&self) {
        self.abort.store(true, Ordering::Release);
    }

    /// Latch a feedhold request (interrupt-safe)
    pub fn request_feedhold(&self) {
        self.feedhold.store(true, Ordering::Release);
    }

    /// Latch a cycle-start request (interrupt-safe)
    pub fn request_cycle_start(&self) {
        self.cycle_start.store(true, Ordering::Release);
    }

    /// Drain the abort latch, returning whether it was set
    pub fn take_abort(&self) -> bool {
        self.abort.swap(false, Ordering::AcqRel)
    }

    /// Drain the feedhold latch, returning whether it was set
    pub fn take_feedhold(&self) -> bool {
        self.feedhold.swap(false, Ordering::AcqRel)
    }

    /// Drain the cycle-start latch, returning whether it was set
    pub fn take_cycle_start(&self) -> bool {
        self.cycle_start.swap(false, Ordering::AcqRel)
    }
}

impl Default for SignalSet {
    fn default() -> Self {
        Self::new()
    }
}
