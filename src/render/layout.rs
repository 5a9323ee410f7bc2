//! Circle placement for the array.
//!
//! Elements sit in equal horizontal slots across the drawing region. The
//! value picks the height: the smallest value sits on the bottom edge and
//! the largest on the top, so a sorted array reads as a rising diagonal.

use glam::Vec2;

use super::Rect;
use crate::sort::ValueRange;

/// Geometry shared by every element of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    origin: Vec2,
    gap: f32,
    stroke_width: f32,
    radius: f32,
    /// Vertical distance per unit of value.
    ascent: f32,
    min: i64,
    span: i64,
}

impl Layout {
    /// Fit `count` circles into `bounds`.
    ///
    /// The width holds `count` diameters, `count - 1` gaps and the stroke on
    /// both ends. The height holds one diameter plus strokes, with the rest
    /// split evenly across the value span.
    #[must_use]
    pub fn compute(
        bounds: Rect,
        count: usize,
        range: ValueRange,
        gap: f32,
        stroke_width: f32,
    ) -> Self {
        let radius = if count == 0 {
            0.0
        } else {
            let n = count as f32;
            ((bounds.size.x - 2.0 * stroke_width - (n - 1.0) * gap) / (2.0 * n))
                .max(0.0)
        };

        let span = range.span();
        let ascent = if span == 0 {
            0.0
        } else {
            ((bounds.size.y - 2.0 * (radius + stroke_width)) / span as f32)
                .max(0.0)
        };

        Self {
            origin: bounds.origin,
            gap,
            stroke_width,
            radius,
            ascent,
            min: range.min,
            span,
        }
    }

    /// Circle radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Horizontal center of slot `index`.
    #[must_use]
    pub fn slot_x(&self, index: usize) -> f32 {
        let i = index as f32;
        self.origin.x
            + self.gap * i
            + self.radius * (2.0 * i + 1.0)
            + self.stroke_width
    }

    /// Vertical center for `value`.
    #[must_use]
    pub fn value_y(&self, value: i64) -> f32 {
        let rank = value.saturating_sub(self.min).clamp(0, self.span);
        self.origin.y
            + self.ascent * (self.span - rank) as f32
            + self.radius
            + self.stroke_width
    }

    /// Resting center of `value` in slot `index`.
    #[must_use]
    pub fn position(&self, index: usize, value: i64) -> Vec2 {
        Vec2::new(self.slot_x(index), self.value_y(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        Rect::new(Vec2::new(20.0, 20.0), Vec2::new(760.0, 560.0))
    }

    #[test]
    fn circles_fill_the_width() {
        let layout =
            Layout::compute(bounds(), 10, ValueRange::new(1, 10), 5.0, 2.0);
        // (760 - 4 - 45) / 20
        assert!((layout.radius() - 35.55).abs() < 1e-3);

        let first_left = layout.slot_x(0) - layout.radius() - 2.0;
        let last_right = layout.slot_x(9) + layout.radius() + 2.0;
        assert!((first_left - 20.0).abs() < 1e-3);
        assert!((last_right - 780.0).abs() < 1e-3);
    }

    #[test]
    fn smaller_values_sit_lower() {
        let layout =
            Layout::compute(bounds(), 3, ValueRange::new(1, 3), 5.0, 2.0);
        let low = layout.value_y(1);
        let high = layout.value_y(3);
        assert!(low > high, "screen y grows downward");
        // Top circle touches the top edge, bottom circle the bottom edge.
        assert!((high - layout.radius() - 2.0 - 20.0).abs() < 1e-3);
        assert!((low + layout.radius() + 2.0 - 580.0).abs() < 1e-3);
    }

    #[test]
    fn single_value_range_has_no_ascent() {
        let layout =
            Layout::compute(bounds(), 1, ValueRange::new(5, 5), 5.0, 2.0);
        assert_eq!(layout.value_y(5), 20.0 + layout.radius() + 2.0);
    }

    #[test]
    fn empty_layout_is_degenerate_not_broken() {
        let layout =
            Layout::compute(bounds(), 0, ValueRange::new(1, 0), 5.0, 2.0);
        assert_eq!(layout.radius(), 0.0);
        assert!(layout.slot_x(0).is_finite());
    }

    #[test]
    fn extreme_ranges_do_not_overflow() {
        let range = ValueRange::new(i64::MIN, i64::MAX);
        let layout = Layout::compute(bounds(), 2, range, 5.0, 2.0);
        let low = layout.value_y(i64::MIN);
        let high = layout.value_y(i64::MAX);
        assert!(low.is_finite() && high.is_finite());
        assert!(low > high);
        assert!((high - layout.radius() - 2.0 - 20.0).abs() < 1e-3);
    }

    #[test]
    fn position_combines_slot_and_value() {
        let layout =
            Layout::compute(bounds(), 4, ValueRange::new(1, 4), 5.0, 2.0);
        let pos = layout.position(2, 3);
        assert_eq!(pos, Vec2::new(layout.slot_x(2), layout.value_y(3)));
    }
}
