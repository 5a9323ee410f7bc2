//! Deterministic scheduler over virtual time.

use std::collections::BTreeMap;
use std::time::Duration;

use super::{FrameHandle, Scheduler};

/// Shortest gap between virtual refreshes. An unpaced (zero) interval
/// would otherwise queue every frame at the same instant and starve the
/// pending advance.
const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(1);

/// A pending callback popped from a [`VirtualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wakeup {
    /// Call `advance` on the engine.
    Advance,
    /// Call `frame` on the engine with this handle.
    Frame(FrameHandle),
}

/// Virtual clock with an ordered wakeup queue.
///
/// Advances fire at `now + delay`; frames fire on the next refresh,
/// `now + frame_interval`, and never less than 1 ms ahead. Wakeups due at the same instant fire in the
/// order they were scheduled.
#[derive(Debug)]
pub struct VirtualScheduler {
    now: Duration,
    frame_interval: Duration,
    /// Keyed by (due time, insertion sequence).
    queue: BTreeMap<(Duration, u64), Wakeup>,
    next_seq: u64,
    next_frame_id: u64,
}

impl VirtualScheduler {
    /// Scheduler whose display refreshes every `frame_interval`.
    #[must_use]
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            now: Duration::ZERO,
            frame_interval,
            queue: BTreeMap::new(),
            next_seq: 0,
            next_frame_id: 1,
        }
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Interval between virtual display refreshes.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Remove the earliest wakeup and move the clock to its due time.
    pub fn pop(&mut self) -> Option<(Duration, Wakeup)> {
        let ((at, _), wakeup) = self.queue.pop_first()?;
        self.now = at;
        Some((at, wakeup))
    }

    /// Due time of the earliest wakeup, if any.
    #[must_use]
    pub fn peek_due(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(at, _)| *at)
    }

    /// Whether nothing is scheduled.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of queued `advance` wakeups.
    #[must_use]
    pub fn pending_advances(&self) -> usize {
        self.queue
            .values()
            .filter(|w| matches!(w, Wakeup::Advance))
            .count()
    }

    /// Number of queued frame wakeups.
    #[must_use]
    pub fn live_frames(&self) -> usize {
        self.queue
            .values()
            .filter(|w| matches!(w, Wakeup::Frame(_)))
            .count()
    }

    fn push(&mut self, at: Duration, wakeup: Wakeup) {
        let seq = self.next_seq;
        self.next_seq += 1;
        let _ = self.queue.insert((at, seq), wakeup);
    }
}

impl Default for VirtualScheduler {
    fn default() -> Self {
        Self::new(crate::util::frame_timing::interval_for(60))
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule_advance(&mut self, delay: Duration) {
        self.push(self.now + delay, Wakeup::Advance);
    }

    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle::new(self.next_frame_id);
        self.next_frame_id += 1;
        let interval = self.frame_interval.max(MIN_FRAME_INTERVAL);
        self.push(self.now + interval, Wakeup::Frame(handle));
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.queue.retain(|_, w| *w != Wakeup::Frame(handle));
    }

    fn cancel_advances(&mut self) {
        self.queue.retain(|_, w| *w != Wakeup::Advance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wakeups_pop_in_time_order() {
        let mut sched = VirtualScheduler::new(Duration::from_millis(10));
        sched.schedule_advance(Duration::from_millis(100));
        let frame = sched.request_frame();

        assert_eq!(
            sched.pop(),
            Some((Duration::from_millis(10), Wakeup::Frame(frame)))
        );
        assert_eq!(sched.now(), Duration::from_millis(10));
        assert_eq!(
            sched.pop(),
            Some((Duration::from_millis(100), Wakeup::Advance))
        );
        assert_eq!(sched.pop(), None);
        assert!(sched.is_idle());
    }

    #[test]
    fn delays_are_relative_to_current_time() {
        let mut sched = VirtualScheduler::new(Duration::from_millis(10));
        sched.schedule_advance(Duration::from_millis(50));
        let _ = sched.pop();
        sched.schedule_advance(Duration::from_millis(50));
        assert_eq!(sched.peek_due(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn ties_keep_scheduling_order() {
        let mut sched = VirtualScheduler::new(Duration::from_millis(10));
        let frame = sched.request_frame();
        sched.schedule_advance(Duration::from_millis(10));
        assert_eq!(sched.pop().map(|(_, w)| w), Some(Wakeup::Frame(frame)));
        assert_eq!(sched.pop().map(|(_, w)| w), Some(Wakeup::Advance));
    }

    #[test]
    fn cancelled_frames_never_fire() {
        let mut sched = VirtualScheduler::default();
        let first = sched.request_frame();
        let second = sched.request_frame();
        assert_ne!(first, second);

        sched.cancel_frame(first);
        assert_eq!(sched.live_frames(), 1);
        assert_eq!(sched.pop().map(|(_, w)| w), Some(Wakeup::Frame(second)));

        // Cancelling after the fact is harmless.
        sched.cancel_frame(second);
        assert!(sched.is_idle());
    }

    #[test]
    fn zero_interval_frames_still_move_the_clock() {
        let mut sched = VirtualScheduler::new(Duration::ZERO);
        let _ = sched.request_frame();
        assert_eq!(sched.peek_due(), Some(Duration::from_millis(1)));
        let _ = sched.pop();
        let _ = sched.request_frame();
        assert_eq!(sched.peek_due(), Some(Duration::from_millis(2)));
    }

    #[test]
    fn cancel_advances_leaves_frames() {
        let mut sched = VirtualScheduler::default();
        sched.schedule_advance(Duration::from_millis(5));
        sched.schedule_advance(Duration::from_millis(50));
        let frame = sched.request_frame();

        sched.cancel_advances();
        assert_eq!(sched.pending_advances(), 0);
        assert_eq!(sched.pop().map(|(_, w)| w), Some(Wakeup::Frame(frame)));
    }

    #[test]
    fn counts_pending_advances() {
        let mut sched = VirtualScheduler::default();
        assert_eq!(sched.pending_advances(), 0);
        sched.schedule_advance(Duration::from_secs(1));
        let _ = sched.request_frame();
        assert_eq!(sched.pending_advances(), 1);
        assert_eq!(sched.live_frames(), 1);
    }
}
