//! In-memory canvas that records draw calls for assertions.

use glam::Vec2;

use super::{Canvas, CircleStyle, LabelStyle, Rect};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub fill: String,
    pub stroke: String,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Label {
    pub text: String,
    pub center: Vec2,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawCall {
    Clear(Rect),
    Circle(Circle),
    Label(Label),
}

/// Keeps the calls since the last clear, plus running counters.
#[derive(Debug, Default)]
pub(crate) struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
    pub clears: usize,
    pub presents: usize,
}

impl RecordingCanvas {
    pub fn circles(&self) -> Vec<Circle> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Circle(c) => Some(c.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn labels(&self) -> Vec<Label> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Label(l) => Some(l.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, region: Rect) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear(region));
        self.clears += 1;
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, style: &CircleStyle<'_>) {
        self.calls.push(DrawCall::Circle(Circle {
            center,
            radius,
            fill: style.fill.to_owned(),
            stroke: style.stroke.to_owned(),
        }));
    }

    fn draw_label(&mut self, text: &str, center: Vec2, style: &LabelStyle<'_>) {
        self.calls.push(DrawCall::Label(Label {
            text: text.to_owned(),
            center,
            color: style.color.to_owned(),
        }));
    }

    fn present(&mut self) {
        self.presents += 1;
    }
}
