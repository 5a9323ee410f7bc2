//! Drawing surface for the sort scene.
//!
//! [`Canvas`] is the port the engine draws through; [`draw_scene`] is the
//! single full-repaint routine. Backends:
//!
//! - [`svg::SvgCanvas`] builds SVG documents (native player, tests)
//! - `web::WebCanvas` draws onto an HTML canvas (`web` feature)

pub mod layout;
pub mod svg;
#[cfg(feature = "web")]
pub mod web;

#[cfg(test)]
pub(crate) mod recording;

use glam::Vec2;

pub use layout::Layout;

use crate::options::ThemeOptions;
use crate::sort::{Element, ValueRange};
use crate::util::color::{value_color, wants_dark_label};

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl Rect {
    /// Rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle inset by `margin` on every side, never negative.
    #[must_use]
    pub fn inset(self, margin: f32) -> Self {
        Self {
            origin: self.origin + Vec2::splat(margin),
            size: (self.size - Vec2::splat(2.0 * margin)).max(Vec2::ZERO),
        }
    }
}

/// Fill and outline of one circle.
#[derive(Debug, Clone, Copy)]
pub struct CircleStyle<'a> {
    /// CSS color of the interior.
    pub fill: &'a str,
    /// CSS color of the outline.
    pub stroke: &'a str,
    /// Outline width in pixels.
    pub stroke_width: f32,
}

/// Appearance of a centered text label.
#[derive(Debug, Clone, Copy)]
pub struct LabelStyle<'a> {
    /// CSS color of the text.
    pub color: &'a str,
    /// Font size in pixels.
    pub font_size: f32,
    /// CSS font family.
    pub font_family: &'a str,
}

/// A 2D drawing surface.
///
/// Drawing must not block or fail; backends swallow and log their own
/// errors.
pub trait Canvas {
    /// Erase everything inside `region`.
    fn clear(&mut self, region: Rect);

    /// Draw a filled, outlined circle.
    fn draw_circle(&mut self, center: Vec2, radius: f32, style: &CircleStyle<'_>);

    /// Draw `text` centered on `center`.
    fn draw_label(&mut self, text: &str, center: Vec2, style: &LabelStyle<'_>);

    /// Called once a full scene has been drawn.
    fn present(&mut self) {}
}

/// Repaint `region` with every element of the array.
///
/// Outline and label colors follow the same priority: focused, then
/// sorted, then the default.
pub fn draw_scene<C: Canvas + ?Sized>(
    canvas: &mut C,
    region: Rect,
    elements: &[Element],
    range: ValueRange,
    layout: &Layout,
    theme: &ThemeOptions,
) {
    canvas.clear(region);

    for (index, element) in elements.iter().enumerate() {
        let center = layout.position(index, element.value) + element.offset;
        let fill = value_color(element.value, range, theme.hue, theme.saturation);

        let (stroke, label) = if element.focused {
            (theme.focused_color.as_str(), theme.focused_color.as_str())
        } else if element.sorted {
            (theme.sorted_color.as_str(), theme.sorted_color.as_str())
        } else if wants_dark_label(element.value, range) {
            (theme.stroke_color.as_str(), "black")
        } else {
            (theme.stroke_color.as_str(), "white")
        };

        canvas.draw_circle(
            center,
            layout.radius(),
            &CircleStyle {
                fill: &fill,
                stroke,
                stroke_width: theme.stroke_width,
            },
        );
        canvas.draw_label(
            &element.value.to_string(),
            center,
            &LabelStyle {
                color: label,
                font_size: layout.radius(),
                font_family: &theme.font_family,
            },
        );
    }

    canvas.present();
}
