//! Shared helpers: easing curves, value-to-color mapping and frame timing.

pub mod color;
pub mod easing;
pub mod frame_timing;
