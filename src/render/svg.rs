//! SVG backend.
//!
//! Each presented scene becomes a standalone SVG document. With recording
//! enabled every document is kept, which is how the native player writes
//! out the frames of a run.

use std::fmt::Write as _;

use glam::Vec2;

use super::{Canvas, CircleStyle, LabelStyle, Rect};

/// Canvas that renders into SVG markup.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width: f32,
    height: f32,
    background: String,
    /// Markup of the scene being drawn.
    body: String,
    /// Document of the last presented scene.
    last_frame: Option<String>,
    recorded: Option<Vec<String>>,
    presented: usize,
}

impl SvgCanvas {
    /// Canvas of the given pixel size with a solid background.
    #[must_use]
    pub fn new(width: f32, height: f32, background: &str) -> Self {
        Self {
            width,
            height,
            background: escape(background),
            body: String::new(),
            last_frame: None,
            recorded: None,
            presented: 0,
        }
    }

    /// Keep a copy of every presented frame.
    #[must_use]
    pub fn recording(mut self) -> Self {
        self.recorded = Some(Vec::new());
        self
    }

    /// Full SVG document of what has been drawn so far.
    #[must_use]
    pub fn document(&self) -> String {
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" "#,
                r#"width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
                "\n{body}</svg>\n"
            ),
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }

    /// Document of the last presented scene.
    #[must_use]
    pub fn last_frame(&self) -> Option<&str> {
        self.last_frame.as_deref()
    }

    /// Number of scenes presented.
    #[must_use]
    pub fn presented(&self) -> usize {
        self.presented
    }

    /// Take the recorded frames, leaving recording enabled but empty.
    pub fn take_frames(&mut self) -> Vec<String> {
        self.recorded.as_mut().map(std::mem::take).unwrap_or_default()
    }
}

impl Canvas for SvgCanvas {
    fn clear(&mut self, region: Rect) {
        // Scenes are full repaints, so anything drawn before is stale.
        self.body.clear();
        let _ = writeln!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            region.origin.x, region.origin.y, region.size.x, region.size.y, self.background,
        );
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, style: &CircleStyle<'_>) {
        let _ = writeln!(
            self.body,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            center.x,
            center.y,
            radius,
            escape(style.fill),
            escape(style.stroke),
            style.stroke_width,
        );
    }

    fn draw_label(&mut self, text: &str, center: Vec2, style: &LabelStyle<'_>) {
        let _ = writeln!(
            self.body,
            concat!(
                r#"<text x="{:.2}" y="{:.2}" fill="{}" font-size="{:.2}" "#,
                r#"font-family="{}" text-anchor="middle" "#,
                r#"dominant-baseline="central">{}</text>"#
            ),
            center.x,
            center.y,
            escape(style.color),
            style.font_size,
            escape(style.font_family),
            escape(text),
        );
    }

    fn present(&mut self) {
        let document = self.document();
        if let Some(frames) = &mut self.recorded {
            frames.push(document.clone());
        }
        self.last_frame = Some(document);
        self.presented += 1;
    }
}

/// Escape text for use in SVG attributes and text nodes.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
