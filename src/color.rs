// src/color.rs

//! Defines the `Color` type and hex-string conversion functions.

use log::warn;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// An RGB true color, with each component from 0 to 255.
///
/// Palette documents carry colors as `#rrggbb` hex strings; this type
/// round-trips that form via its `serde` impls and [`Color::from_hex`] /
/// [`Color::to_hex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Creates a color from its RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Parses a `#rrggbb` (or `rrggbb`) hex string.
    ///
    /// Returns `None` for anything that is not exactly six hex digits after
    /// the optional leading `#`. Shorthand forms (`#rgb`) and alpha channels
    /// are not part of the palette document format and are rejected.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let normalized = hex.strip_prefix('#').unwrap_or(hex);
        if normalized.len() != 6 {
            return None;
        }
        let value = u32::from_str_radix(normalized, 16).ok()?;
        Some(Color {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        })
    }

    /// Formats the color as a `#rrggbb` hex string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::from_hex(&raw).ok_or_else(|| {
            warn!("Rejecting malformed hex color {:?}", raw);
            de::Error::custom(format!("invalid hex color: {raw:?}"))
        })
    }
}
