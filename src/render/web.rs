//! HTML canvas backend.

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::{Canvas, CircleStyle, LabelStyle, Rect};

/// Canvas drawing through a 2D rendering context.
#[derive(Debug, Clone)]
pub struct WebCanvas {
    context: CanvasRenderingContext2d,
    background: String,
}

impl WebCanvas {
    /// Canvas over `context`, clearing to `background`.
    #[must_use]
    pub fn new(context: CanvasRenderingContext2d, background: &str) -> Self {
        Self {
            context,
            background: background.to_owned(),
        }
    }

    /// The underlying rendering context.
    #[must_use]
    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.context
    }
}

fn log_failure(what: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("canvas {what} failed: {e:?}");
    }
}

impl Canvas for WebCanvas {
    fn clear(&mut self, region: Rect) {
        let (x, y) = (f64::from(region.origin.x), f64::from(region.origin.y));
        let (w, h) = (f64::from(region.size.x), f64::from(region.size.y));
        self.context.clear_rect(x, y, w, h);
        self.context.set_fill_style_str(&self.background);
        self.context.fill_rect(x, y, w, h);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, style: &CircleStyle<'_>) {
        let ctx = &self.context;
        ctx.begin_path();
        log_failure(
            "arc",
            ctx.arc(
                f64::from(center.x),
                f64::from(center.y),
                f64::from(radius),
                0.0,
                TAU,
            ),
        );
        ctx.set_fill_style_str(style.fill);
        ctx.fill();
        ctx.set_line_width(f64::from(style.stroke_width));
        ctx.set_stroke_style_str(style.stroke);
        ctx.stroke();
    }

    fn draw_label(&mut self, text: &str, center: Vec2, style: &LabelStyle<'_>) {
        let ctx = &self.context;
        ctx.set_font(&format!("{}px {}", style.font_size, style.font_family));
        ctx.set_text_align("center");
        ctx.set_text_baseline("alphabetic");
        ctx.set_fill_style_str(style.color);

        // Center on the glyphs' ink, not on the font's em box.
        let ascent = ctx
            .measure_text(text)
            .map(|metrics| metrics.actual_bounding_box_ascent())
            .unwrap_or_else(|_| f64::from(style.font_size) * 0.7);
        log_failure(
            "fill_text",
            ctx.fill_text(
                text,
                f64::from(center.x),
                f64::from(center.y) + ascent / 2.0,
            ),
        );
    }
}
