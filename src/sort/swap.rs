//! The cosmetic slide of a swapped pair.

use std::time::Duration;

use crate::schedule::FrameHandle;
use crate::util::easing::EasingFunction;

/// In-flight slide of two exchanged elements toward their new slots.
///
/// The array has already been swapped when this starts; the slide only
/// computes how far each element is still drawn from its slot.
#[derive(Debug, Clone)]
pub struct SwapAnimation {
    /// Index of the left slot (now holding the smaller value).
    pub(crate) left: usize,
    /// Index of the right slot.
    pub(crate) right: usize,
    /// Frame the slide is waiting on.
    pub(crate) handle: FrameHandle,
    /// Timestamp of the first frame, set when it arrives.
    first_frame: Option<Duration>,
    /// Elapsed slide time, clamped to `duration`.
    elapsed: Duration,
    duration: Duration,
    easing: EasingFunction,
}

impl SwapAnimation {
    /// Slide between `left` and `right`, waiting on `handle`.
    pub(crate) fn new(
        left: usize,
        right: usize,
        handle: FrameHandle,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            left,
            right,
            handle,
            first_frame: None,
            elapsed: Duration::ZERO,
            duration,
            easing,
        }
    }

    /// Record a frame at `timestamp`.
    pub(crate) fn tick(&mut self, timestamp: Duration) {
        let first = *self.first_frame.get_or_insert(timestamp);
        self.elapsed = timestamp.saturating_sub(first).min(self.duration);
    }

    /// Normalized progress (0.0 to 1.0).
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Progress mapped through the easing curve.
    #[must_use]
    pub fn eased(&self) -> f32 {
        self.easing.evaluate(self.progress())
    }

    /// Whether the slide has covered its full duration.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Horizontal offset of the left element, given the distance between
    /// the two slots. The right element takes the negation.
    #[must_use]
    pub fn left_offset(&self, slot_distance: f32) -> f32 {
        slot_distance * (1.0 - self.eased())
    }
}
