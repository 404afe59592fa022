//! ColourValue type, a single colour held as either RGB or HSV.
//!
//! Only one representation is stored at a time. Reading or writing a
//! component of the other representation converts the stored value in place
//! first, which is why the accessors take `&mut self`.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::constants::{
    BRIGHTNESS_WEIGHTS, CHANNEL_MAX, HUE_RANGE, LUMINANCE_WEIGHTS, RGB_RANGE, UNIT_RANGE,
};
use crate::error::{ColourError, Result};
use crate::hex::{format_hex, is_hex, parse_hex};
use crate::math;
use crate::named::named_hex;
use crate::wcag::{self, WcagLevel, WcagVerdict};

/// Which coordinate system the stored components are in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Representation {
    Rgb,
    Hsv,
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Rgb => f.write_str("RGB"),
            Representation::Hsv => f.write_str("HSV"),
        }
    }
}

/// One of the six addressable colour components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Component {
    R,
    G,
    B,
    H,
    S,
    V,
}

impl Component {
    pub const ALL: [Component; 6] = [
        Component::R,
        Component::G,
        Component::B,
        Component::H,
        Component::S,
        Component::V,
    ];

    /// The representation this component belongs to.
    pub fn representation(self) -> Representation {
        match self {
            Component::R | Component::G | Component::B => Representation::Rgb,
            Component::H | Component::S | Component::V => Representation::Hsv,
        }
    }

    /// Canonical range; setters clamp into it.
    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            Component::R | Component::G | Component::B => RGB_RANGE,
            Component::H => HUE_RANGE,
            Component::S | Component::V => UNIT_RANGE,
        }
    }

    fn slot(self) -> usize {
        match self {
            Component::R | Component::H => 0,
            Component::G | Component::S => 1,
            Component::B | Component::V => 2,
        }
    }
}

impl FromStr for Component {
    type Err = ColourError;

    /// Accepts the component letter, ignoring case.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let component = match s {
            "R" | "r" => Component::R,
            "G" | "g" => Component::G,
            "B" | "b" => Component::B,
            "H" | "h" => Component::H,
            "S" | "s" => Component::S,
            "V" | "v" => Component::V,
            _ => {
                tracing::debug!(component = s, "rejected component name");
                return Err(ColourError::InvalidArgument(format!(
                    "unknown colour component '{s}'"
                )));
            }
        };
        Ok(component)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Component::R => "R",
            Component::G => "G",
            Component::B => "B",
            Component::H => "H",
            Component::S => "S",
            Component::V => "V",
        };
        f.write_str(letter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Components {
    Rgb { r: f64, g: f64, b: f64 },
    Hsv { h: f64, s: f64, v: f64 },
}

/// A colour in either RGB (0–255 per channel) or HSV (hue 0–360, saturation
/// and value 0–1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColourValue {
    components: Components,
}

impl Default for ColourValue {
    fn default() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
}

impl ColourValue {
    /// Create from three components in the given representation.
    ///
    /// Values are stored as given; only the setters clamp.
    pub fn new(c1: f64, c2: f64, c3: f64, representation: Representation) -> Self {
        let components = match representation {
            Representation::Rgb => Components::Rgb {
                r: c1,
                g: c2,
                b: c3,
            },
            Representation::Hsv => Components::Hsv {
                h: c1,
                s: c2,
                v: c3,
            },
        };
        Self { components }
    }

    /// Create from unvalidated 0–255 channels.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, Representation::Rgb)
    }

    /// Create from unvalidated hue, saturation and value.
    pub fn hsv(h: f64, s: f64, v: f64) -> Self {
        Self::new(h, s, v, Representation::Hsv)
    }

    /// Parse `#RRGGBB`, `#RGB` or a web colour name (case-insensitive).
    pub fn from_hex(text: &str) -> Result<Self> {
        let hex = if is_hex(text) {
            text
        } else {
            named_hex(text).ok_or_else(|| {
                tracing::debug!(input = text, "rejected colour");
                ColourError::InvalidInput(text.to_string())
            })?
        };
        let [r, g, b] = parse_hex(hex)?;
        Ok(Self::rgb(f64::from(r), f64::from(g), f64::from(b)))
    }

    /// The representation currently stored.
    pub fn representation(&self) -> Representation {
        match self.components {
            Components::Rgb { .. } => Representation::Rgb,
            Components::Hsv { .. } => Representation::Hsv,
        }
    }

    fn switch_to(&mut self, target: Representation) {
        self.components = match (self.components, target) {
            (Components::Rgb { r, g, b }, Representation::Hsv) => {
                let (h, s, v) = math::rgb_to_hsv(r, g, b);
                tracing::trace!(r, g, b, h, s, v, "switched RGB -> HSV");
                Components::Hsv { h, s, v }
            }
            (Components::Hsv { h, s, v }, Representation::Rgb) => {
                let (r, g, b) = math::hsv_to_rgb(h, s, v);
                tracing::trace!(h, s, v, r, g, b, "switched HSV -> RGB");
                Components::Rgb { r, g, b }
            }
            (unchanged, _) => unchanged,
        };
    }

    fn slot_mut(&mut self, index: usize) -> &mut f64 {
        let (first, second, third) = match &mut self.components {
            Components::Rgb { r, g, b } => (r, g, b),
            Components::Hsv { h, s, v } => (h, s, v),
        };
        match index {
            0 => first,
            1 => second,
            _ => third,
        }
    }

    /// Read a component, switching representation if needed.
    pub fn get(&mut self, component: Component) -> f64 {
        self.switch_to(component.representation());
        *self.slot_mut(component.slot())
    }

    /// Write a component, switching representation if needed and clamping
    /// `value` into the component's range.
    pub fn set(&mut self, component: Component, value: f64) {
        self.switch_to(component.representation());
        *self.slot_mut(component.slot()) = math::clamp_to(value, &component.range());
    }

    /// [`get`](Self::get) keyed by component letter, e.g. `"H"` or `"h"`.
    pub fn get_named(&mut self, name: &str) -> Result<f64> {
        let component = name.parse::<Component>()?;
        Ok(self.get(component))
    }

    /// [`set`](Self::set) keyed by component name. Nothing changes when the
    /// name is unknown.
    pub fn set_named(&mut self, name: &str, value: f64) -> Result<()> {
        let component = name.parse::<Component>()?;
        self.set(component, value);
        Ok(())
    }

    /// Red channel (0–255).
    pub fn r(&mut self) -> f64 {
        self.get(Component::R)
    }
    /// Green channel (0–255).
    pub fn g(&mut self) -> f64 {
        self.get(Component::G)
    }
    /// Blue channel (0–255).
    pub fn b(&mut self) -> f64 {
        self.get(Component::B)
    }
    /// Hue in degrees (0–360).
    pub fn h(&mut self) -> f64 {
        self.get(Component::H)
    }
    /// Saturation (0–1).
    pub fn s(&mut self) -> f64 {
        self.get(Component::S)
    }
    /// Value (0–1).
    pub fn v(&mut self) -> f64 {
        self.get(Component::V)
    }

    /// Set red channel (0–255), clamped.
    pub fn set_r(&mut self, value: f64) {
        self.set(Component::R, value);
    }
    /// Set green channel (0–255), clamped.
    pub fn set_g(&mut self, value: f64) {
        self.set(Component::G, value);
    }
    /// Set blue channel (0–255), clamped.
    pub fn set_b(&mut self, value: f64) {
        self.set(Component::B, value);
    }
    /// Set hue in degrees (0–360), clamped.
    pub fn set_h(&mut self, value: f64) {
        self.set(Component::H, value);
    }
    /// Set saturation (0–1), clamped.
    pub fn set_s(&mut self, value: f64) {
        self.set(Component::S, value);
    }
    /// Set value (0–1), clamped.
    pub fn set_v(&mut self, value: f64) {
        self.set(Component::V, value);
    }

    /// Switch to RGB and return `(r, g, b)`.
    pub fn to_rgb(&mut self) -> (f64, f64, f64) {
        self.switch_to(Representation::Rgb);
        self.as_rgb()
    }

    /// Switch to HSV and return `(h, s, v)`.
    pub fn to_hsv(&mut self) -> (f64, f64, f64) {
        self.switch_to(Representation::Hsv);
        self.as_hsv()
    }

    /// `(r, g, b)` computed without touching the stored representation.
    pub fn as_rgb(&self) -> (f64, f64, f64) {
        match self.components {
            Components::Rgb { r, g, b } => (r, g, b),
            Components::Hsv { h, s, v } => math::hsv_to_rgb(h, s, v),
        }
    }

    /// `(h, s, v)` computed without touching the stored representation.
    pub fn as_hsv(&self) -> (f64, f64, f64) {
        match self.components {
            Components::Rgb { r, g, b } => math::rgb_to_hsv(r, g, b),
            Components::Hsv { h, s, v } => (h, s, v),
        }
    }

    /// Uppercase `#RRGGBB`. Switches to RGB.
    pub fn to_hex(&mut self) -> String {
        let (r, g, b) = self.to_rgb();
        format_hex(r, g, b)
    }

    /// Perceived brightness, 0–255.
    ///
    /// See <http://www.nbdtech.com/Blog/archive/2008/04/27/Calculating-the-Perceived-Brightness-of-a-Color.aspx>
    pub fn brightness(&mut self) -> u8 {
        let (r, g, b) = self.to_rgb();
        let [wr, wg, wb] = BRIGHTNESS_WEIGHTS;
        (wr * r.powi(2) + wg * g.powi(2) + wb * b.powi(2)).sqrt() as u8
    }

    /// WCAG 2.0 relative luminance, 0.0–1.0.
    pub fn luminosity(&mut self) -> f64 {
        let (r, g, b) = self.to_rgb();
        let [wr, wg, wb] = LUMINANCE_WEIGHTS;
        wr * math::srgb_to_linear(r / CHANNEL_MAX)
            + wg * math::srgb_to_linear(g / CHANNEL_MAX)
            + wb * math::srgb_to_linear(b / CHANNEL_MAX)
    }

    /// WCAG 2.0 contrast ratio against `other`, 1.0–21.0.
    pub fn contrast_ratio(&mut self, other: &mut ColourValue) -> f64 {
        wcag::contrast_ratio(self.luminosity(), other.luminosity())
    }

    /// Check contrast against `other` for the given level and text size.
    pub fn meets_wcag(
        &mut self,
        level: WcagLevel,
        large_text: bool,
        other: &mut ColourValue,
    ) -> WcagVerdict {
        let ratio = self.contrast_ratio(other);
        WcagVerdict {
            passes: level.accepts(large_text, ratio),
            ratio,
        }
    }

    /// [`meets_wcag`](Self::meets_wcag) with the level given as `"AA"` or `"AAA"`.
    pub fn meets_wcag_named(
        &mut self,
        level: &str,
        large_text: bool,
        other: &mut ColourValue,
    ) -> Result<WcagVerdict> {
        let level = level.parse::<WcagLevel>()?;
        Ok(self.meets_wcag(level, large_text, other))
    }
}

impl FromStr for ColourValue {
    type Err = ColourError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Formats as `#RRGGBB` without switching the stored representation.
impl fmt::Display for ColourValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.as_rgb();
        f.write_str(&format_hex(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_hex_reads_channels() {
        let mut colour = ColourValue::from_hex("#aA1144").unwrap();
        assert_eq!(colour.r(), 170.0);
        assert_eq!(colour.g(), 17.0);
        assert_eq!(colour.b(), 68.0);
        assert_eq!(colour.to_hex(), "#AA1144");
        assert_eq!(colour.to_string(), "#AA1144");
    }

    #[test]
    fn test_from_hex_accepts_names_in_any_case() {
        let mut colour = ColourValue::from_hex("Turquoise").unwrap();
        assert_eq!(colour.to_hex(), "#40E0D0");
        let mut colour: ColourValue = "NAVY".parse().unwrap();
        assert_eq!(colour.to_hex(), "#000080");
    }

    #[test]
    fn test_from_hex_short_form() {
        let mut colour = ColourValue::from_hex("#abc").unwrap();
        assert_eq!(colour.to_hex(), "#AABBCC");
    }

    #[test]
    fn test_from_hex_rejects_unknown() {
        assert_eq!(
            ColourValue::from_hex("foobar"),
            Err(ColourError::InvalidInput("foobar".to_string()))
        );
        assert!(ColourValue::from_hex("#GGGGGG").is_err());
        assert!(ColourValue::from_hex("").is_err());
    }

    #[test]
    fn test_constructor_does_not_clamp() {
        let mut colour = ColourValue::rgb(300.0, -5.0, 12.5);
        assert_eq!(colour.r(), 300.0);
        assert_eq!(colour.g(), -5.0);
        assert_eq!(colour.b(), 12.5);

        let colour = ColourValue::hsv(400.0, 2.0, -1.0);
        assert_eq!(colour.as_hsv(), (400.0, 2.0, -1.0));
    }

    #[test]
    fn test_rgb_setters() {
        let mut colour = ColourValue::from_hex("#aA1144").unwrap();
        colour.set_r(30.0);
        colour.set_g(40.0);
        colour.set_b(50.0);
        assert_eq!(colour.r(), 30.0);
        assert_eq!(colour.g(), 40.0);
        assert_eq!(colour.b(), 50.0);
        assert_eq!(colour.to_string(), "#1E2832");
    }

    #[test]
    fn test_hsv_setters() {
        let mut colour = ColourValue::from_hex("#000000").unwrap();
        colour.set_h(123.0);
        colour.set_s(0.5);
        colour.set_v(0.7);
        assert_eq!(colour.h(), 123.0);
        assert_eq!(colour.s(), 0.5);
        assert_eq!(colour.v(), 0.7);
        assert_eq!(colour.r().floor(), 89.0);
        assert_eq!(colour.g().floor(), 178.0);
        assert_eq!(colour.b().floor(), 93.0);

        colour.set_h(0.0);
        colour.set_s(0.2);
        colour.set_v(1.0);
        assert_eq!(colour.h(), 0.0);
        assert_eq!(colour.s(), 0.2);
        assert_eq!(colour.v(), 1.0);
        assert_eq!(colour.r().floor(), 255.0);
        assert_eq!(colour.g().floor(), 204.0);
        assert_eq!(colour.b().floor(), 204.0);
    }

    #[test]
    fn test_near_zero_saturation_is_not_snapped_to_grey() {
        let mut colour = ColourValue::hsv(0.0, 0.002, 1.0);
        assert_eq!(colour.r().floor(), 255.0);
        assert_eq!(colour.g().floor(), 254.0);
        assert_eq!(colour.b().floor(), 254.0);
        assert_eq!(colour.to_hex(), "#FFFEFE");
    }

    #[test]
    fn test_hue_at_full_rotation_takes_last_sector() {
        let mut colour = ColourValue::hsv(360.0, 1.0, 1.0);
        assert_eq!(colour.to_hex(), "#FF00FF");
    }

    #[test]
    fn test_clamped_hue_reaches_full_rotation() {
        let mut colour = ColourValue::from_hex("#000000").unwrap();
        colour.set_h(361.0);
        colour.set_s(1.0);
        colour.set_v(1.0);
        assert_eq!(colour.h(), 360.0);
        assert_eq!(colour.to_hex(), "#FF00FF");
    }

    #[test]
    fn test_rgb_bounds() {
        let mut colour = ColourValue::from_hex("#aA1144").unwrap();
        colour.set_r(1001.0);
        colour.set_g(-123.0);
        colour.set_b(0.0);
        assert_eq!(colour.r(), 255.0);
        assert_eq!(colour.g(), 0.0);
        assert_eq!(colour.b(), 0.0);
        assert_eq!(colour.to_string(), "#FF0000");
    }

    #[test]
    fn test_hsv_bounds() {
        let mut colour = ColourValue::from_hex("#000000").unwrap();
        for (input, expected) in [(-1.0, 0.0), (0.0, 0.0), (180.0, 180.0), (360.0, 360.0), (361.0, 360.0)] {
            colour.set_h(input);
            assert_eq!(colour.h(), expected);
        }
        for (input, expected) in [(-1.0, 0.0), (0.0, 0.0), (0.5, 0.5), (1.0, 1.0), (1.01, 1.0)] {
            colour.set_s(input);
            assert_eq!(colour.s(), expected);
            colour.set_v(input);
            assert_eq!(colour.v(), expected);
        }
    }

    #[test]
    fn test_reads_switch_representation() {
        let mut colour = ColourValue::from_hex("#FF0000").unwrap();
        assert_eq!(colour.representation(), Representation::Rgb);
        colour.h();
        assert_eq!(colour.representation(), Representation::Hsv);
        colour.s();
        assert_eq!(colour.representation(), Representation::Hsv);
        colour.g();
        assert_eq!(colour.representation(), Representation::Rgb);
    }

    #[test]
    fn test_display_and_as_rgb_leave_representation_alone() {
        let colour = ColourValue::hsv(120.0, 1.0, 1.0);
        assert_eq!(colour.to_string(), "#00FF00");
        assert_eq!(colour.as_rgb(), (0.0, 255.0, 0.0));
        assert_eq!(colour.representation(), Representation::Hsv);
    }

    #[test]
    fn test_named_access() {
        let mut colour = ColourValue::from_hex("#336699").unwrap();
        assert_eq!(colour.get_named("r").unwrap(), 51.0);
        assert_eq!(colour.get_named("B").unwrap(), 153.0);
        colour.set_named("h", 400.0).unwrap();
        assert_eq!(colour.h(), 360.0);
    }

    #[test]
    fn test_unknown_component_name_is_rejected_without_mutation() {
        let mut colour = ColourValue::from_hex("#336699").unwrap();
        let before = colour;
        assert!(matches!(
            colour.get_named("X"),
            Err(ColourError::InvalidArgument(_))
        ));
        assert!(matches!(
            colour.set_named("alpha", 0.5),
            Err(ColourError::InvalidArgument(_))
        ));
        for name in ["red", "Hue", "saturation", "value", "RG", ""] {
            assert!(
                matches!(colour.get_named(name), Err(ColourError::InvalidArgument(_))),
                "{name:?}"
            );
        }
        assert_eq!(colour, before);
    }

    #[test]
    fn test_component_metadata() {
        assert_eq!(Component::ALL.len(), 6);
        assert_eq!(Component::S.representation(), Representation::Hsv);
        assert_eq!(Component::G.range(), 0.0..=255.0);
        assert_eq!(Component::H.range(), 0.0..=360.0);
        for component in Component::ALL {
            assert_eq!(component.to_string().parse::<Component>().unwrap(), component);
        }
    }

    #[test]
    fn test_brightness() {
        assert_eq!(ColourValue::from_hex("#aabbcc").unwrap().brightness(), 184);
        assert_eq!(ColourValue::from_hex("#000000").unwrap().brightness(), 0);
        assert_eq!(ColourValue::from_hex("#ffffff").unwrap().brightness(), 255);
    }

    #[test]
    fn test_luminosity_extremes() {
        assert_eq!(ColourValue::from_hex("black").unwrap().luminosity(), 0.0);
        let white = ColourValue::from_hex("white").unwrap().luminosity();
        assert!((white - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_metrics_switch_to_rgb() {
        let mut colour = ColourValue::hsv(200.0, 0.4, 0.6);
        colour.luminosity();
        assert_eq!(colour.representation(), Representation::Rgb);
    }

    #[test]
    fn test_contrast_black_white() {
        let mut black = ColourValue::from_hex("#000000").unwrap();
        let mut white = ColourValue::from_hex("#FFFFFF").unwrap();
        assert!((black.contrast_ratio(&mut white) - 21.0).abs() < 1e-9);
        assert!((white.contrast_ratio(&mut black) - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_meets_wcag() {
        let mut white = ColourValue::from_hex("#FFFFFF").unwrap();
        let mut black = ColourValue::from_hex("#000000").unwrap();
        let verdict = white.meets_wcag(WcagLevel::Aa, false, &mut black);
        assert!(verdict.passes);
        assert!((verdict.ratio - 21.0).abs() < 1e-9);

        let mut grey = ColourValue::from_hex("#777777").unwrap();
        let mut other_grey = ColourValue::from_hex("#787878").unwrap();
        let verdict = grey.meets_wcag(WcagLevel::Aaa, false, &mut other_grey);
        assert!(!verdict.passes);
        assert!(verdict.ratio < 1.1);
    }

    #[test]
    fn test_meets_wcag_named_rejects_unknown_level() {
        let mut white = ColourValue::from_hex("#FFFFFF").unwrap();
        let mut black = ColourValue::from_hex("#000000").unwrap();
        assert!(white.meets_wcag_named("AA", true, &mut black).unwrap().passes);
        assert!(matches!(
            white.meets_wcag_named("B", true, &mut black),
            Err(ColourError::InvalidArgument(_))
        ));
        assert!(matches!(
            white.meets_wcag_named("aa", false, &mut black),
            Err(ColourError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_default_is_black() {
        let mut colour = ColourValue::default();
        assert_eq!(colour.to_hex(), "#000000");
    }
}
