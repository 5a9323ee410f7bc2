use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Inclusive bounds of the value domain, used for layout and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueRange {
    /// Smallest value.
    pub min: i64,
    /// Largest value.
    pub max: i64,
}

impl ValueRange {
    /// Range from its inclusive bounds. Inverted bounds are allowed and
    /// mean "nothing to sort".
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Whether `min <= max`.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.min <= self.max
    }

    /// `max - min`, zero for inverted ranges.
    #[must_use]
    pub fn span(self) -> i64 {
        self.max.saturating_sub(self.min).max(0)
    }
}

/// One value being sorted, with its transient render hints.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// The value. Unique within the array and never changed.
    pub value: i64,
    /// Pixel displacement from the layout slot, non-zero only while a
    /// swap slide is in flight.
    pub offset: Vec2,
    /// Part of the pair currently being compared.
    pub focused: bool,
    /// Settled in its final slot.
    pub sorted: bool,
}

impl Element {
    /// Fresh element: no offset, not focused, not sorted.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            offset: Vec2::ZERO,
            focused: false,
            sorted: false,
        }
    }
}
