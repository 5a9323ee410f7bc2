//! Host scheduling ports.
//!
//! The sort engine never owns a clock. It asks its [`Scheduler`] for two
//! kinds of wakeups and the host calls back into the engine when they fire:
//!
//! - a delayed one-shot `advance` that paces discrete phases, and
//! - per-frame callbacks that drive the cosmetic swap slide.
//!
//! [`VirtualScheduler`] implements the port over a virtual clock so whole
//! runs can be replayed deterministically.

mod virtual_clock;

use std::time::Duration;

pub use virtual_clock::{VirtualScheduler, Wakeup};

/// Identifies one requested display-refresh callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

impl FrameHandle {
    /// Handle wrapping a host-assigned frame id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Host-assigned frame id.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Scheduling capability injected into the sort engine.
///
/// Implementations call `BubbleSort::advance` once per
/// [`schedule_advance`](Self::schedule_advance) after the delay elapses,
/// and `BubbleSort::frame` with the returned handle on the next display
/// refresh after [`request_frame`](Self::request_frame), unless the frame
/// was cancelled first.
pub trait Scheduler {
    /// Run `advance` once after `delay`.
    fn schedule_advance(&mut self, delay: Duration);

    /// Run `frame` on the next display refresh.
    fn request_frame(&mut self) -> FrameHandle;

    /// Drop a requested frame that has not fired yet. Cancelling a handle
    /// that already fired is a no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Drop every `advance` scheduled but not yet run.
    fn cancel_advances(&mut self);
}
