//! Frame pacing and achieved-rate measurement.

use web_time::{Duration, Instant};

/// Frame interval for a target rate, plus a smoothed measurement of the
/// rate actually achieved by a wall-clock paced playback.
pub struct FrameTiming {
    /// Interval between display refreshes (zero = unpaced)
    frame_interval: Duration,
    /// Last presented frame, if any
    last_frame: Option<Instant>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Frames recorded so far
    frames: u64,
}

impl FrameTiming {
    /// Frame timer for the given refresh rate (0 = unpaced).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_interval: interval_for(target_fps),
            last_frame: None,
            smoothed_fps: target_fps as f32,
            smoothing: 0.05,
            frames: 0,
        }
    }

    /// Time between two display refreshes.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Record a presented frame at `now`.
    pub fn end_frame(&mut self, now: Instant) {
        self.frames += 1;
        let Some(last) = self.last_frame.replace(now) else {
            return;
        };

        let frame_time = now.saturating_duration_since(last).as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Number of frames recorded.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Refresh interval for a frame rate; zero when the rate is zero.
#[must_use]
pub fn interval_for(target_fps: u32) -> Duration {
    if target_fps > 0 {
        Duration::from_secs_f64(1.0 / f64::from(target_fps))
    } else {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_matches_rate() {
        let timing = FrameTiming::new(50);
        assert_eq!(timing.frame_interval(), Duration::from_millis(20));
        assert_eq!(FrameTiming::new(0).frame_interval(), Duration::ZERO);
    }

    #[test]
    fn smoothed_fps_moves_toward_measured_rate() {
        let mut timing = FrameTiming::new(60);
        let start = Instant::now();
        for i in 0..200 {
            timing.end_frame(start + Duration::from_millis(i * 50));
        }
        // Steady 20 fps drags the 60 fps seed most of the way down.
        assert!(timing.fps() < 25.0, "fps = {}", timing.fps());
        assert_eq!(timing.frames(), 200);
    }
}
