use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Theme", inline)]
#[serde(default)]
/// Colors, spacing and typography of the scene.
pub struct ThemeOptions {
    /// HSLuv hue of the circle fills, in degrees.
    #[schemars(title = "Hue", range(min = 0.0, max = 360.0), extend("step" = 1.0))]
    pub hue: f32,
    /// HSLuv saturation of the circle fills (0 = greyscale).
    #[schemars(title = "Saturation", range(min = 0.0, max = 100.0), extend("step" = 1.0))]
    pub saturation: f32,
    /// CSS font family of the value labels.
    #[schemars(title = "Font")]
    pub font_family: String,
    /// Horizontal pixels between neighbouring circles.
    #[schemars(title = "Gap", range(min = 0.0, max = 50.0), extend("step" = 1.0))]
    pub gap: f32,
    /// Outline width in pixels.
    #[schemars(title = "Stroke Width", range(min = 0.0, max = 10.0), extend("step" = 0.5))]
    pub stroke_width: f32,
    /// Outline color of elements at rest.
    #[schemars(title = "Stroke Color")]
    pub stroke_color: String,
    /// Outline and label color of elements in their final slot.
    #[schemars(title = "Sorted Color")]
    pub sorted_color: String,
    /// Outline and label color of the compared pair.
    #[schemars(title = "Focused Color")]
    pub focused_color: String,
    /// Fill of the cleared drawing region.
    #[schemars(skip)]
    pub background_color: String,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 0.0,
            font_family: "Pretendard".to_owned(),
            gap: 5.0,
            stroke_width: 2.0,
            stroke_color: "black".to_owned(),
            sorted_color: "yellowgreen".to_owned(),
            focused_color: "red".to_owned(),
            background_color: "white".to_owned(),
        }
    }
}
