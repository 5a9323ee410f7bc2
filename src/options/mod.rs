//! Centralized run options with TOML preset support.
//!
//! Appearance, pacing, surface size and the sample are consolidated here.
//! Options serialize to/from TOML for presets stored in `assets/presets/`,
//! and to JSON for the browser host.

mod canvas;
mod theme;
mod timing;

use std::path::Path;

pub use canvas::{CanvasOptions, SampleOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use theme::ThemeOptions;
pub use timing::TimingOptions;

use crate::error::BubbleVizError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[timing]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Colors, spacing and typography.
    pub theme: ThemeOptions,
    /// Swap/compare pacing and easing.
    pub timing: TimingOptions,
    /// Drawing surface size.
    pub canvas: CanvasOptions,
    /// Values to sort.
    #[schemars(skip)]
    pub sample: SampleOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, BubbleVizError> {
        let content =
            std::fs::read_to_string(path).map_err(BubbleVizError::Io)?;
        toml::from_str(&content)
            .map_err(|e| BubbleVizError::OptionsParse(e.to_string()))
    }

    /// Parse options from JSON. Missing fields use defaults.
    pub fn from_json(json: &str) -> Result<Self, BubbleVizError> {
        serde_json::from_str(json)
            .map_err(|e| BubbleVizError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), BubbleVizError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BubbleVizError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(BubbleVizError::Io)?;
        }
        std::fs::write(path, content).map_err(BubbleVizError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::util::easing::EasingFunction;

    fn presets_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/presets")
    }

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn seeded_sample_round_trips_through_toml() {
        let mut opts = Options::default();
        opts.sample.seed = Some(42);
        opts.timing.easing = EasingFunction::CubicHermite { c1: 0.25, c2: 1.0 };
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[timing]
swap_duration_ms = 250
easing = { kind = "linear" }
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.timing.swap_duration_ms, 250);
        assert_eq!(opts.timing.easing, EasingFunction::Linear);
        // Everything else should be default
        assert_eq!(opts.timing.compare_duration_ms, 1000);
        assert_eq!(opts.theme.focused_color, "red");
        assert_eq!(opts.sample.length, 10);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let opts =
            Options::from_json(r#"{"theme": {"hue": 250.0}}"#).unwrap();
        assert_eq!(opts.theme.hue, 250.0);
        assert_eq!(opts.theme.gap, 5.0);
        assert!(matches!(
            Options::from_json("{"),
            Err(BubbleVizError::OptionsParse(_))
        ));
    }

    #[test]
    fn scene_bounds_leave_the_margin() {
        let bounds = CanvasOptions::default().scene_bounds();
        assert_eq!(bounds.origin, glam::Vec2::new(20.0, 20.0));
        assert_eq!(bounds.size, glam::Vec2::new(760.0, 560.0));
    }

    #[test]
    fn bundled_presets_load() {
        let dir = presets_dir();
        let names = Options::list_presets(&dir);
        assert!(names.contains(&"brisk".to_owned()), "{names:?}");

        let brisk = Options::load(&dir.join("brisk.toml")).unwrap();
        assert_eq!(brisk.timing.swap_duration_ms, 500);
        assert_eq!(brisk.timing.compare_duration_ms, 100);
    }

    #[test]
    fn save_then_load() {
        let path = std::env::temp_dir()
            .join(format!("bubbleviz-options-{}", std::process::id()))
            .join("custom.toml");
        let mut opts = Options::default();
        opts.theme.saturation = 80.0;
        opts.save(&path).unwrap();
        assert_eq!(Options::load(&path).unwrap(), opts);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Options::load(Path::new("/nonexistent/bubbleviz.toml"))
            .unwrap_err();
        assert!(matches!(err, BubbleVizError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("theme"));
        assert!(props.contains_key("timing"));
        assert!(props.contains_key("canvas"));
        assert!(!props.contains_key("sample"));

        let timing = &props["timing"]["properties"];
        assert!(timing.get("swap_duration_ms").is_some());
        assert!(timing.get("frame_rate").is_none());
        let theme = &props["theme"]["properties"];
        assert!(theme.get("focused_color").is_some());
        assert!(theme.get("background_color").is_none());
    }
}
