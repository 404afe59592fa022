//! Colour math: direct conversions without external dependencies.
//! RGB channels are 0.0–255.0, hue is in degrees, saturation and value 0.0–1.0.

use std::ops::RangeInclusive;

use crate::constants::{CHANNEL_MAX, FULL_ROTATION, SRGB_LINEAR_KNEE};

/// RGB → HSV.
///
/// Channels are truncated to whole numbers first, so equality tests on the
/// maximum channel are exact.
pub(crate) fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (r, g, b) = (r.trunc(), g.trunc(), b.trunc());

    let value = r.max(g).max(b);
    let low = r.min(g).min(b);
    let s = if value == 0.0 { 0.0 } else { (value - low) / value };

    let h = if s == 0.0 {
        0.0
    } else {
        let delta = value - low;
        let cr = (value - r) / delta;
        let cg = (value - g) / delta;
        let cb = (value - b) / delta;

        let sector = if r == value {
            cb - cg
        } else if g == value {
            2.0 + cr - cb
        } else {
            4.0 + cg - cr
        };

        let degrees = sector * 60.0;
        if degrees < 0.0 {
            degrees + FULL_ROTATION
        } else {
            degrees
        }
    };

    (h, s, value / CHANNEL_MAX)
}

/// HSV → RGB. Output channels are unrounded.
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    // h / 60 rather than h / 360 * 6, so sector boundaries land exactly
    let h6 = h / 60.0;
    let i = h6.floor();
    let f = h6 - i;

    let m = v * (1.0 - s);
    let n = v * (1.0 - s * f);
    let k = v * (1.0 - s * (1.0 - f));

    // A full rotation (i == 6, f == 0) stays in the last sector; anything
    // further out of range wraps.
    let sector = if i == 6.0 { 5 } else { (i as i64).rem_euclid(6) };
    let (r, g, b) = match sector {
        0 => (v, k, m),
        1 => (n, v, m),
        2 => (m, v, k),
        3 => (m, n, v),
        4 => (k, m, v),
        _ => (v, m, n),
    };

    (r * CHANNEL_MAX, g * CHANNEL_MAX, b * CHANNEL_MAX)
}

/// sRGB-encoded channel (0.0–1.0) → linear light, WCAG 2.0 curve.
pub(crate) fn srgb_to_linear(x: f64) -> f64 {
    if x <= SRGB_LINEAR_KNEE {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

/// Crop `value` into `range`. NaN passes through unchanged.
pub(crate) fn clamp_to(value: f64, range: &RangeInclusive<f64>) -> f64 {
    if value > *range.end() {
        *range.end()
    } else if value < *range.start() {
        *range.start()
    } else {
        value
    }
}
