//! Value → color mapping.
//!
//! Circle fills are HSLuv colors whose lightness scales with the value, so
//! larger values read brighter at a fixed hue and saturation. HSLuv keeps
//! perceived lightness uniform across hues, which plain HSL does not.

use crate::sort::ValueRange;

/// sRGB conversion matrix from CIE XYZ (D65).
const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.240_969_941_904_521, -1.537_383_177_570_093, -0.498_610_760_293],
    [-0.969_243_636_280_87, 1.875_967_501_507_72, 0.041_555_057_407_175],
    [0.055_630_079_696_993, -0.203_976_958_888_97, 1.056_971_514_242_878],
];

const REF_U: f64 = 0.197_830_006_642_83;
const REF_V: f64 = 0.468_319_994_938_79;
const KAPPA: f64 = 903.296_296_296_296_3;
const EPSILON: f64 = 0.008_856_451_679_035_631;

/// Lightness above which labels switch from white to black.
const LABEL_LIGHTNESS_THRESHOLD: f64 = 50.0;

/// Lightness (0–100) for a value within its range.
#[must_use]
pub fn value_lightness(value: i64, range: ValueRange) -> f64 {
    let steps = range.span().saturating_add(1).max(1) as f64;
    (100.0 * value as f64 / steps).clamp(0.0, 100.0)
}

/// Fill color for a value as `#rrggbb`.
#[must_use]
pub fn value_color(value: i64, range: ValueRange, hue: f32, saturation: f32) -> String {
    hsluv_to_hex(
        f64::from(hue),
        f64::from(saturation),
        value_lightness(value, range),
    )
}

/// Whether a label drawn on this value's fill should be dark.
#[must_use]
pub fn wants_dark_label(value: i64, range: ValueRange) -> bool {
    value_lightness(value, range) > LABEL_LIGHTNESS_THRESHOLD
}

/// Convert HSLuv (hue 0–360, saturation 0–100, lightness 0–100) to a
/// `#rrggbb` hex string.
#[must_use]
pub fn hsluv_to_hex(hue: f64, saturation: f64, lightness: f64) -> String {
    let [r, g, b] = hsluv_to_rgb(hue, saturation, lightness);
    format!("#{:02x}{:02x}{:02x}", to_byte(r), to_byte(g), to_byte(b))
}

/// Convert HSLuv to gamma-encoded sRGB channels in `[0, 1]`.
#[must_use]
pub fn hsluv_to_rgb(hue: f64, saturation: f64, lightness: f64) -> [f64; 3] {
    let (l, c, h) = hsluv_to_lch(hue, saturation, lightness);
    let (l, u, v) = lch_to_luv(l, c, h);
    let xyz = luv_to_xyz(l, u, v);
    XYZ_TO_RGB.map(|row| {
        let linear = row[0] * xyz[0] + row[1] * xyz[1] + row[2] * xyz[2];
        from_linear(linear).clamp(0.0, 1.0)
    })
}

fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round() as u8
}

fn from_linear(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn hsluv_to_lch(hue: f64, saturation: f64, lightness: f64) -> (f64, f64, f64) {
    if lightness > 99.999_999_9 {
        return (100.0, 0.0, hue);
    }
    if lightness < 0.000_000_01 {
        return (0.0, 0.0, hue);
    }
    let max = max_chroma_for(lightness, hue);
    (lightness, max / 100.0 * saturation, hue)
}

fn lch_to_luv(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let rad = h.to_radians();
    (l, rad.cos() * c, rad.sin() * c)
}

fn luv_to_xyz(l: f64, u: f64, v: f64) -> [f64; 3] {
    if l == 0.0 {
        return [0.0; 3];
    }
    let var_u = u / (13.0 * l) + REF_U;
    let var_v = v / (13.0 * l) + REF_V;
    let y = lightness_to_y(l);
    let x = -(9.0 * y * var_u) / ((var_u - 4.0) * var_v - var_u * var_v);
    let z = (9.0 * y - 15.0 * var_v * y - var_v * x) / (3.0 * var_v);
    [x, y, z]
}

fn lightness_to_y(l: f64) -> f64 {
    if l <= 8.0 {
        l / KAPPA
    } else {
        ((l + 16.0) / 116.0).powi(3)
    }
}

/// Largest in-gamut chroma for a lightness and hue.
fn max_chroma_for(lightness: f64, hue: f64) -> f64 {
    let rad = hue.to_radians();
    gamut_bounds(lightness)
        .into_iter()
        .filter_map(|(slope, intercept)| {
            let length = intercept / (rad.sin() - slope * rad.cos());
            (length >= 0.0).then_some(length)
        })
        .fold(f64::MAX, f64::min)
}

/// The six lines bounding the sRGB gamut in the Luv chroma plane at a
/// given lightness, as `(slope, intercept)` pairs.
fn gamut_bounds(lightness: f64) -> Vec<(f64, f64)> {
    let sub1 = (lightness + 16.0).powi(3) / 1_560_896.0;
    let sub2 = if sub1 > EPSILON { sub1 } else { lightness / KAPPA };

    let mut bounds = Vec::with_capacity(6);
    for [m1, m2, m3] in XYZ_TO_RGB {
        for t in [0.0, 1.0] {
            let top1 = (284_517.0 * m1 - 94_839.0 * m3) * sub2;
            let top2 = (838_422.0 * m3 + 769_860.0 * m2 + 731_718.0 * m1)
                * lightness
                * sub2
                - 769_860.0 * t * lightness;
            let bottom = (632_260.0 * m3 - 126_452.0 * m2) * sub2 + 126_452.0 * t;
            bounds.push((top1 / bottom, top2 / bottom));
        }
    }
    bounds
}
