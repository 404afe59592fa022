//! WCAG 2.0 contrast levels and ratios.

use std::fmt;
use std::str::FromStr;

use crate::constants::CONTRAST_FLARE;
use crate::error::ColourError;

/// Conformance level for text contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WcagLevel {
    #[cfg_attr(feature = "serde", serde(rename = "AA"))]
    Aa,
    #[cfg_attr(feature = "serde", serde(rename = "AAA"))]
    Aaa,
}

impl WcagLevel {
    /// Minimum contrast ratio for this level.
    pub fn threshold(self, large_text: bool) -> f64 {
        match (self, large_text) {
            (WcagLevel::Aa, true) => 3.0,
            (WcagLevel::Aa, false) => 4.5,
            (WcagLevel::Aaa, true) => 7.0,
            (WcagLevel::Aaa, false) => 4.5,
        }
    }

    /// Whether `ratio` meets the threshold, with a one-epsilon tolerance so
    /// ratios sitting exactly on the boundary pass.
    pub fn accepts(self, large_text: bool, ratio: f64) -> bool {
        ratio > self.threshold(large_text) - f64::EPSILON
    }
}

impl FromStr for WcagLevel {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AA" => Ok(WcagLevel::Aa),
            "AAA" => Ok(WcagLevel::Aaa),
            _ => {
                tracing::debug!(level = s, "rejected WCAG level");
                Err(ColourError::InvalidArgument(format!(
                    "unknown WCAG level '{s}'"
                )))
            }
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WcagLevel::Aa => f.write_str("AA"),
            WcagLevel::Aaa => f.write_str("AAA"),
        }
    }
}

/// Outcome of a WCAG check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WcagVerdict {
    pub passes: bool,
    pub ratio: f64,
}

/// Contrast ratio of two relative luminosities, 1.0–21.0.
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let (hi, lo) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (hi + CONTRAST_FLARE) / (lo + CONTRAST_FLARE)
}
