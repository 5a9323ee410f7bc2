//! Drives a [`BubbleSort`] to completion on a virtual clock.
//!
//! The virtual clock decides the order of every wakeup. With
//! [`Pacing::Realtime`] the driver also sleeps until each wakeup is due on
//! the wall clock, which turns the same schedule into a live animation.

use std::time::Duration;

use web_time::Instant;

use crate::options::Options;
use crate::render::Canvas;
use crate::schedule::{VirtualScheduler, Wakeup};
use crate::sort::{BubbleSort, SortStats, SortStyle, ValueRange};
use crate::util::frame_timing::FrameTiming;

/// How virtual time maps onto the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacing {
    /// Fire wakeups back to back.
    #[default]
    Immediate,
    /// Sleep until each wakeup is due.
    Realtime,
}

/// Outcome of a finished playback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSummary {
    /// Counters from the engine.
    pub stats: SortStats,
    /// Virtual time the animation took.
    pub duration: Duration,
    /// Wakeups dispatched (advances and frames).
    pub wakeups: usize,
    /// Measured frame rate, for realtime playback with slide frames.
    pub measured_fps: Option<f32>,
}

/// A sort engine bound to a virtual scheduler.
pub struct Playback<C> {
    engine: BubbleSort<C, VirtualScheduler>,
    pacing: Pacing,
}

impl<C: Canvas> Playback<C> {
    /// Playback drawing on `canvas` with the appearance, pacing and surface
    /// size from `options`.
    pub fn new(canvas: C, options: &Options, pacing: Pacing) -> Self {
        let scheduler = VirtualScheduler::new(options.timing.frame_interval());
        let engine = BubbleSort::new(
            canvas,
            scheduler,
            options.canvas.scene_bounds(),
            SortStyle::from(options),
        );
        Self { engine, pacing }
    }

    /// The engine being driven.
    pub fn engine(&self) -> &BubbleSort<C, VirtualScheduler> {
        &self.engine
    }

    /// The engine being driven, mutably.
    pub fn engine_mut(&mut self) -> &mut BubbleSort<C, VirtualScheduler> {
        &mut self.engine
    }

    /// Begin a run over `values` and play it to the end.
    pub fn play(&mut self, values: &[i64], range: ValueRange) -> PlaybackSummary {
        self.engine.begin(values, range);
        self.engine.advance();
        self.run()
    }

    /// Dispatch wakeups until nothing is scheduled.
    pub fn run(&mut self) -> PlaybackSummary {
        let started = Instant::now();
        let origin = self.engine.scheduler().now();
        let mut timing = FrameTiming::new(self.engine.style().timing.frame_rate);
        let mut wakeups = 0;

        while let Some((at, wakeup)) = self.engine.scheduler_mut().pop() {
            if self.pacing == Pacing::Realtime {
                let due = started + at.saturating_sub(origin);
                let now = Instant::now();
                if due > now {
                    std::thread::sleep(due - now);
                }
            }

            match wakeup {
                Wakeup::Advance => self.engine.advance(),
                Wakeup::Frame(handle) => {
                    self.engine.frame(handle, at);
                    if self.pacing == Pacing::Realtime {
                        timing.end_frame(Instant::now());
                    }
                }
            }
            wakeups += 1;
        }

        let summary = PlaybackSummary {
            stats: self.engine.stats(),
            duration: self.engine.scheduler().now().saturating_sub(origin),
            wakeups,
            measured_fps: (timing.frames() > 1).then(|| timing.fps()),
        };
        log::debug!(
            "playback done: {:?} of animation, {} wakeups",
            summary.duration,
            summary.wakeups
        );
        summary
    }

    /// Release the canvas, e.g. to collect recorded frames.
    pub fn into_canvas(self) -> C {
        self.engine.into_canvas()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::svg::SvgCanvas;
    use crate::sampler::shuffled_sample;

    fn fast_options() -> Options {
        let mut options = Options::default();
        options.timing.swap_duration_ms = 50;
        options.timing.compare_duration_ms = 20;
        options.timing.frame_rate = 100;
        options
    }

    fn svg(options: &Options) -> SvgCanvas {
        SvgCanvas::new(
            options.canvas.width,
            options.canvas.height,
            &options.theme.background_color,
        )
    }

    #[test]
    fn plays_a_shuffled_sample_to_the_end() {
        let options = fast_options();
        let (values, range) = shuffled_sample(8, Some(3));
        let mut playback = Playback::new(svg(&options), &options, Pacing::Immediate);
        let summary = playback.play(&values, range);

        assert_eq!(playback.engine().values(), (1..=8).collect::<Vec<_>>());
        assert_eq!(summary.stats.comparisons, 28);
        assert!(summary.wakeups > summary.stats.comparisons);
        assert_eq!(summary.measured_fps, None);

        let expected = Duration::from_millis(
            20 * summary.stats.comparisons as u64 + 50 * summary.stats.swaps as u64,
        );
        assert_eq!(summary.duration, expected);
    }

    #[test]
    fn every_redraw_becomes_a_frame() {
        let options = fast_options();
        let canvas = svg(&options).recording();
        let mut playback = Playback::new(canvas, &options, Pacing::Immediate);
        let summary = playback.play(&[3, 1, 2], ValueRange::new(1, 3));

        let mut canvas = playback.into_canvas();
        let frames = canvas.take_frames();
        assert_eq!(frames.len(), summary.stats.redraws);
        // Final frame: every circle outlined in the sorted color.
        let last = frames.last().unwrap();
        assert_eq!(last.matches(r#"stroke="yellowgreen""#).count(), 3);
        assert!(!last.contains(r#"stroke="red""#));
    }

    #[test]
    fn empty_sample_plays_nothing() {
        let options = fast_options();
        let (values, range) = shuffled_sample(0, None);
        let mut playback = Playback::new(svg(&options), &options, Pacing::Immediate);
        let summary = playback.play(&values, range);
        assert_eq!(summary.wakeups, 0);
        assert_eq!(summary.duration, Duration::ZERO);
        assert_eq!(summary.stats, SortStats::default());
    }

    #[test]
    fn unpaced_frame_rate_still_terminates() {
        let mut options = fast_options();
        options.timing.frame_rate = 0;
        let mut playback = Playback::new(svg(&options), &options, Pacing::Immediate);
        let summary = playback.play(&[2, 1], ValueRange::new(1, 2));

        assert_eq!(playback.engine().values(), vec![1, 2]);
        assert_eq!(playback.engine().phase(), crate::sort::Phase::Idle);
        assert_eq!(summary.duration, Duration::from_millis(70));
        assert!(summary.stats.slide_frames > 0);
    }

    #[test]
    fn realtime_pacing_takes_wall_clock_time() {
        let mut options = fast_options();
        options.timing.swap_duration_ms = 30;
        options.timing.compare_duration_ms = 10;
        let mut playback = Playback::new(svg(&options), &options, Pacing::Realtime);

        let started = Instant::now();
        let summary = playback.play(&[2, 1], ValueRange::new(1, 2));
        assert_eq!(summary.duration, Duration::from_millis(40));
        assert!(started.elapsed() >= Duration::from_millis(40));
    }
}
