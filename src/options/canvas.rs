use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::render::Rect;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Canvas", inline)]
#[serde(default)]
/// Size of the drawing surface.
pub struct CanvasOptions {
    /// Surface width in pixels.
    #[schemars(title = "Width", range(min = 100.0, max = 4096.0))]
    pub width: f32,
    /// Surface height in pixels.
    #[schemars(title = "Height", range(min = 100.0, max = 4096.0))]
    pub height: f32,
    /// Empty border kept around the scene.
    #[schemars(title = "Margin", range(min = 0.0, max = 200.0))]
    pub margin: f32,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin: 20.0,
        }
    }
}

impl CanvasOptions {
    /// Region the scene is drawn into: the surface minus the margin.
    #[must_use]
    pub fn scene_bounds(&self) -> Rect {
        Rect::new(Vec2::ZERO, Vec2::new(self.width, self.height))
            .inset(self.margin)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Sample", inline)]
#[serde(default)]
/// The values to sort.
pub struct SampleOptions {
    /// Number of values; the run sorts a shuffle of `1..=length`.
    #[schemars(title = "Length", range(min = 0, max = 100))]
    pub length: i64,
    /// Shuffle seed for reproducible runs. Random when unset.
    #[schemars(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            length: 10,
            seed: None,
        }
    }
}
