use std::time::Duration;

use glam::Vec2;

use super::{Element, Phase, SwapAnimation, ValueRange};
use crate::options::{Options, ThemeOptions, TimingOptions};
use crate::render::{draw_scene, Canvas, Layout, Rect};
use crate::schedule::{FrameHandle, Scheduler};

/// Appearance and pacing of one run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SortStyle {
    /// Colors, spacing and typography.
    pub theme: ThemeOptions,
    /// Swap/compare pacing and easing.
    pub timing: TimingOptions,
}

impl From<&Options> for SortStyle {
    fn from(options: &Options) -> Self {
        Self {
            theme: options.theme.clone(),
            timing: options.timing.clone(),
        }
    }
}

/// Counters for the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortStats {
    /// Compare phases run.
    pub comparisons: usize,
    /// Swap phases run.
    pub swaps: usize,
    /// Full scene repaints.
    pub redraws: usize,
    /// Swap-slide frames drawn.
    pub slide_frames: usize,
}

/// Bubble sort played back one phase at a time.
///
/// A host calls [`begin`](Self::begin) once, then [`advance`](Self::advance)
/// whenever the scheduler's delayed wakeup fires and
/// [`frame`](Self::frame) on every requested display refresh.
pub struct BubbleSort<C, S> {
    canvas: C,
    scheduler: S,
    /// Region the scene is drawn into.
    bounds: Rect,
    /// Style the next `begin` will use.
    pending_style: SortStyle,
    /// Style of the current run.
    style: SortStyle,
    array: Vec<Element>,
    range: ValueRange,
    layout: Layout,
    /// Completed passes, i.e. how many trailing elements are settled.
    round: usize,
    /// Right index of the compared pair.
    cursor: usize,
    phase: Phase,
    slide: Option<SwapAnimation>,
    stats: SortStats,
}

impl<C: Canvas, S: Scheduler> BubbleSort<C, S> {
    /// Engine drawing into `bounds` of `canvas`, idle until `begin`.
    pub fn new(canvas: C, scheduler: S, bounds: Rect, style: SortStyle) -> Self {
        let range = ValueRange::new(1, 0);
        Self {
            canvas,
            scheduler,
            bounds,
            pending_style: style.clone(),
            style,
            array: Vec::new(),
            range,
            layout: Layout::compute(bounds, 0, range, 0.0, 0.0),
            round: 0,
            cursor: 1,
            phase: Phase::Idle,
            slide: None,
            stats: SortStats::default(),
        }
    }

    /// Style for the next run. Changes take effect at the next `begin`.
    pub fn style_mut(&mut self) -> &mut SortStyle {
        &mut self.pending_style
    }

    /// Replace the style for the next run.
    pub fn set_style(&mut self, style: SortStyle) {
        self.pending_style = style;
    }

    /// Style of the current run.
    pub fn style(&self) -> &SortStyle {
        &self.style
    }

    /// Start a run over `values`.
    ///
    /// Any slide or `advance` still pending from a previous run is
    /// dropped. An empty sequence or an inverted range leaves the engine
    /// idle with a cleared region, so later `advance` calls do nothing.
    pub fn begin(&mut self, values: &[i64], range: ValueRange) {
        self.cancel_slide();
        self.scheduler.cancel_advances();
        self.style = self.pending_style.clone();
        self.stats = SortStats::default();
        self.range = range;
        self.round = 0;
        self.cursor = 1;

        if values.is_empty() || !range.is_valid() {
            log::debug!(
                "nothing to sort ({} values, range {}..={})",
                values.len(),
                range.min,
                range.max
            );
            self.array.clear();
            self.layout = Layout::compute(self.bounds, 0, range, 0.0, 0.0);
            self.canvas.clear(self.bounds);
            self.canvas.present();
            self.phase = Phase::Idle;
            return;
        }

        self.array = values.iter().copied().map(Element::new).collect();
        self.layout = Layout::compute(
            self.bounds,
            self.array.len(),
            range,
            self.style.theme.gap,
            self.style.theme.stroke_width,
        );
        self.redraw();

        if self.array.len() == 1 {
            // A lone value is already in place.
            self.array[0].sorted = true;
            self.round = 1;
            self.phase = Phase::Finish;
        } else {
            self.phase = Phase::Compare;
        }
        log::debug!(
            "begin: {} values, radius {:.1}",
            self.array.len(),
            self.layout.radius()
        );
    }

    /// Run the pending phase.
    ///
    /// Any swap slide still in flight is cancelled first, so at most one
    /// is ever live.
    pub fn advance(&mut self) {
        self.cancel_slide();
        let phase = self.phase;
        match phase {
            Phase::Idle => return,
            Phase::Compare => self.compare(),
            Phase::Swap => self.swap(),
            Phase::Finish => self.finish(),
        }
        log::trace!("{} -> {}", phase.name(), self.phase.name());
    }

    /// Display-refresh callback for the swap slide.
    ///
    /// Frames for a handle other than the live slide's are ignored.
    pub fn frame(&mut self, handle: FrameHandle, timestamp: Duration) {
        let Some(slide) = self.slide.as_mut() else {
            log::trace!("frame {} after slide ended", handle.id());
            return;
        };
        if slide.handle != handle {
            log::trace!("stale frame {}", handle.id());
            return;
        }

        slide.tick(timestamp);
        let (left, right) = (slide.left, slide.right);
        let distance = self.layout.slot_x(right) - self.layout.slot_x(left);
        let dx = slide.left_offset(distance);
        let complete = slide.is_complete();
        log::trace!("slide {left}<->{right}: progress {:.3}", slide.progress());

        self.array[left].offset = Vec2::new(dx, 0.0);
        self.array[right].offset = Vec2::new(-dx, 0.0);
        self.stats.slide_frames += 1;
        self.redraw();

        if complete {
            self.cancel_slide();
        } else {
            let next = self.scheduler.request_frame();
            if let Some(slide) = self.slide.as_mut() {
                slide.handle = next;
            }
        }
    }

    /// Highlight the pair at the cursor and decide what comes next.
    fn compare(&mut self) {
        for element in &mut self.array {
            element.focused = false;
        }
        let (left, right) = (self.cursor - 1, self.cursor);
        self.array[left].focused = true;
        self.array[right].focused = true;
        self.stats.comparisons += 1;
        self.redraw();

        if self.array[left].value > self.array[right].value {
            self.phase = Phase::Swap;
        } else {
            self.advance_cursor();
        }
        self.scheduler
            .schedule_advance(self.style.timing.compare_duration());
    }

    /// Exchange the compared pair, then start its slide.
    fn swap(&mut self) {
        let (left, right) = (self.cursor - 1, self.cursor);
        self.array.swap(left, right);
        self.stats.swaps += 1;
        self.advance_cursor();

        let duration = self.style.timing.swap_duration();
        let handle = self.scheduler.request_frame();
        self.slide = Some(SwapAnimation::new(
            left,
            right,
            handle,
            duration,
            self.style.timing.easing,
        ));
        self.scheduler.schedule_advance(duration);
    }

    /// Move the cursor one pair right, closing the round at the end of the
    /// unsorted prefix.
    fn advance_cursor(&mut self) {
        let len = self.array.len();
        self.cursor += 1;

        if self.cursor >= len - self.round {
            self.array[len - self.round - 1].sorted = true;
            self.round += 1;
            self.cursor = 1;
            if len - self.round == 1 {
                // Only the front element is left and it has nowhere to go.
                self.array[0].sorted = true;
                self.round = len;
            }
            log::debug!("round {} of {len} settled", self.round);

            if self.round >= len {
                self.phase = Phase::Finish;
                return;
            }
        }
        self.phase = Phase::Compare;
    }

    fn finish(&mut self) {
        for element in &mut self.array {
            element.focused = false;
        }
        self.redraw();
        self.phase = Phase::Idle;
        log::info!(
            "sorted {} values: {} comparisons, {} swaps",
            self.array.len(),
            self.stats.comparisons,
            self.stats.swaps
        );
    }

    /// Drop the live slide, if any, and put its elements back at rest.
    fn cancel_slide(&mut self) {
        let Some(slide) = self.slide.take() else {
            return;
        };
        self.scheduler.cancel_frame(slide.handle);
        for index in [slide.left, slide.right] {
            if let Some(element) = self.array.get_mut(index) {
                element.offset = Vec2::ZERO;
            }
        }
    }

    fn redraw(&mut self) {
        draw_scene(
            &mut self.canvas,
            self.bounds,
            &self.array,
            self.range,
            &self.layout,
            &self.style.theme,
        );
        self.stats.redraws += 1;
    }
}

impl<C, S> BubbleSort<C, S> {
    /// Phase the next `advance` will run.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Completed passes.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Right index of the pair the next compare looks at.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The array in its current logical order.
    pub fn elements(&self) -> &[Element] {
        &self.array
    }

    /// Current values in order.
    pub fn values(&self) -> Vec<i64> {
        self.array.iter().map(|e| e.value).collect()
    }

    /// Value range of the current run.
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Geometry of the current run.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Counters for the current run.
    pub fn stats(&self) -> SortStats {
        self.stats
    }

    /// The live swap slide, if any.
    pub fn slide(&self) -> Option<&SwapAnimation> {
        self.slide.as_ref()
    }

    /// The drawing surface.
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// The drawing surface, mutably.
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Give up the engine and keep its canvas.
    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// The scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// The scheduler, mutably. Hosts pop due wakeups through this.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl<C, S> std::fmt::Debug for BubbleSort<C, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BubbleSort")
            .field("phase", &self.phase)
            .field("len", &self.array.len())
            .field("round", &self.round)
            .field("cursor", &self.cursor)
            .field("sliding", &self.slide.is_some())
            .finish_non_exhaustive()
    }
}
