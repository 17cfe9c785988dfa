//! Frame scheduling primitives shared by every per-frame driver.

use std::cell::Cell;
use std::rc::Rc;

/// Shared stop flag for a self-rescheduling frame loop.
///
/// The owner keeps one clone and cancels it synchronously on teardown; the
/// loop checks its clone before doing any work and before rescheduling.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Coalesces bursts of events into at most one frame of work.
///
/// `request` answers whether the caller has to schedule a frame; it is true
/// for the first request only, until the scheduled frame calls `begin_frame`.
#[derive(Debug, Default)]
pub struct FrameGate {
    scheduled: Cell<bool>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) -> bool {
        !self.scheduled.replace(true)
    }

    /// Re-arm at the start of the scheduled frame callback.
    pub fn begin_frame(&self) {
        self.scheduled.set(false);
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled.get()
    }
}
