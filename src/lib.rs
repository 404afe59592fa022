//! # colour-value
//!
//! A single colour held as RGB or HSV, switching between the two on demand.
//!
//! Provides clamped component accessors, hex and web colour name parsing,
//! perceived brightness, WCAG relative luminance and contrast checks.
//!
//! ## Usage
//!
//! ```rust
//! use colour_value::{ColourValue, WcagLevel};
//!
//! let mut colour = ColourValue::from_hex("turquoise").unwrap();
//! colour.set_v(0.5);
//! assert_eq!(colour.to_hex(), "#248076");
//!
//! let mut white = ColourValue::from_hex("#FFFFFF").unwrap();
//! assert!(colour.meets_wcag(WcagLevel::Aa, false, &mut white).passes);
//! ```

mod colour;
mod constants;
mod error;
mod hex;
mod math;
mod named;
#[cfg(feature = "serde")]
mod serde_support;
mod wcag;

pub use colour::{ColourValue, Component, Representation};
pub use error::{ColourError, Result};
pub use hex::is_hex;
pub use named::{is_named_colour, named_colours, named_hex};
pub use wcag::{WcagLevel, WcagVerdict};
