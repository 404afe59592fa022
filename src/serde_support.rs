//! `serde` support: a [`ColourValue`] travels as its `#RRGGBB` string.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::colour::ColourValue;

impl Serialize for ColourValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct ColourVisitor;

impl Visitor<'_> for ColourVisitor {
    type Value = ColourValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a #RRGGBB / #RGB hex string or a web colour name")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ColourValue, E> {
        ColourValue::from_hex(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for ColourValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(ColourVisitor)
    }
}
