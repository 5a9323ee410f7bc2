//! Easing functions for the swap slide.
//!
//! Every curve maps `[0, 1]` onto `[0, 1]` with `f(0) = 0` and `f(1) = 1`,
//! so a finished slide always lands exactly on the element's new slot.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Quartic ease-out: `1 - (1 - t)⁴`. Snappy start, long settle.
    QuarticOut,
    /// Square root ease-out (fast start, gradual slow).
    SqrtOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First inner control value.
        c1: f32,
        /// Second inner control value.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default easing function: quartic ease-out.
    pub const DEFAULT: EasingFunction = EasingFunction::QuarticOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::QuarticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt * omt
            }
            EasingFunction::SqrtOut => t.sqrt(),
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 6] = [
        EasingFunction::Linear,
        EasingFunction::QuadraticIn,
        EasingFunction::QuadraticOut,
        EasingFunction::QuarticOut,
        EasingFunction::SqrtOut,
        EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 },
    ];

    #[test]
    fn test_every_curve_hits_both_endpoints() {
        for easing in ALL {
            assert_eq!(easing.evaluate(0.0), 0.0, "{easing:?} at 0");
            assert!(
                (easing.evaluate(1.0) - 1.0).abs() < 1e-6,
                "{easing:?} at 1"
            );
        }
    }

    #[test]
    fn test_every_curve_is_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for step in 1..=100 {
                let value = easing.evaluate(step as f32 / 100.0);
                assert!(value + 1e-6 >= prev, "{easing:?} dips at {step}");
                prev = value;
            }
        }
    }

    #[test]
    fn test_quartic_out() {
        let quart = EasingFunction::QuarticOut;
        // 1 - 0.5⁴ = 0.9375
        assert!((quart.evaluate(0.5) - 0.9375).abs() < 1e-6);
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let quart = EasingFunction::QuarticOut;
        assert_eq!(quart.evaluate(-3.0), 0.0);
        assert_eq!(quart.evaluate(7.0), 1.0);
    }

    #[test]
    fn test_default_is_quartic_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::QuarticOut);
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_string(&EasingFunction::CubicHermite {
            c1: 0.5,
            c2: 1.0,
        })
        .unwrap();
        assert_eq!(json, r#"{"kind":"cubic_hermite","c1":0.5,"c2":1.0}"#);

        let parsed: EasingFunction =
            serde_json::from_str(r#"{"kind":"sqrt_out"}"#).unwrap();
        assert_eq!(parsed, EasingFunction::SqrtOut);
    }
}
