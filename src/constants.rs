//! Numeric constants shared by the conversion and metric code.

use std::ops::RangeInclusive;

/// Range of each of R, G and B
pub const RGB_RANGE: RangeInclusive<f64> = 0.0..=255.0;

/// Range of hue, in degrees
pub const HUE_RANGE: RangeInclusive<f64> = 0.0..=360.0;

/// Range of saturation and value
pub const UNIT_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// Largest channel value
pub const CHANNEL_MAX: f64 = 255.0;

/// Full hue rotation in degrees
pub const FULL_ROTATION: f64 = 360.0;

/// Perceived brightness weights (R, G, B), applied to squared channels
pub const BRIGHTNESS_WEIGHTS: [f64; 3] = [0.241, 0.691, 0.068];

/// Relative luminance coefficients (R, G, B), WCAG 2.0
pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Below this normalized channel value the sRGB curve is linear
pub const SRGB_LINEAR_KNEE: f64 = 0.03928;

/// Flare term added to both luminosities in a contrast ratio
pub const CONTRAST_FLARE: f64 = 0.05;
