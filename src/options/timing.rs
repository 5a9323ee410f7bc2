use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;
use crate::util::frame_timing::interval_for;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Timing", inline)]
#[serde(default)]
/// Pacing of the animation. Affects only what the viewer sees, never the
/// order of comparisons and swaps.
pub struct TimingOptions {
    /// Length of the swap slide, and the pause after a swap.
    #[schemars(title = "Swap (ms)", range(min = 0, max = 5000), extend("step" = 50))]
    pub swap_duration_ms: u64,
    /// Pause after a comparison.
    #[schemars(title = "Compare (ms)", range(min = 0, max = 5000), extend("step" = 50))]
    pub compare_duration_ms: u64,
    /// Display refresh rate assumed by the native player. Zero means
    /// unpaced: slide frames then come 1 ms of virtual time apart.
    #[schemars(skip)]
    pub frame_rate: u32,
    /// Curve applied to the swap slide's progress.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            swap_duration_ms: 1000,
            compare_duration_ms: 1000,
            frame_rate: 60,
            easing: EasingFunction::default(),
        }
    }
}

impl TimingOptions {
    /// Swap slide length.
    #[must_use]
    pub fn swap_duration(&self) -> Duration {
        Duration::from_millis(self.swap_duration_ms)
    }

    /// Pause after a comparison.
    #[must_use]
    pub fn compare_duration(&self) -> Duration {
        Duration::from_millis(self.compare_duration_ms)
    }

    /// Interval between display refreshes at `frame_rate`.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        interval_for(self.frame_rate)
    }
}
