//! Hex codec: `#RRGGBB` / `#RGB` strings to and from 0–255 triplets.

use crate::error::{ColourError, Result};

/// Whether `text` is `#` followed by exactly 6 or 3 hex digits.
pub fn is_hex(text: &str) -> bool {
    match text.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Parse a hex string into an `[r, g, b]` triplet.
///
/// The short form doubles each digit, so `#ABC` reads as `#AABBCC`.
pub fn parse_hex(text: &str) -> Result<[u8; 3]> {
    if !is_hex(text) {
        return Err(ColourError::InvalidInput(text.to_string()));
    }
    let digits = &text[1..];
    let pair = |s: &str| {
        u8::from_str_radix(s, 16).map_err(|_| ColourError::InvalidInput(text.to_string()))
    };

    if digits.len() == 3 {
        Ok([
            pair(&digits[0..1])? * 17,
            pair(&digits[1..2])? * 17,
            pair(&digits[2..3])? * 17,
        ])
    } else {
        Ok([
            pair(&digits[0..2])?,
            pair(&digits[2..4])?,
            pair(&digits[4..6])?,
        ])
    }
}

/// Format channels as uppercase `#RRGGBB`.
///
/// Each channel is rounded to the nearest integer and saturated to 0–255.
pub fn format_hex(r: f64, g: f64, b: f64) -> String {
    format!(
        "#{:02X}{:02X}{:02X}",
        r.round() as u8,
        g.round() as u8,
        b.round() as u8
    )
}
