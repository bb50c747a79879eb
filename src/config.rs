// src/config.rs

//! Defines the configuration structures consumed by the renderer.
//!
//! This module provides the palette and numerology structs that parameterize
//! every layer, plus the caller-side palette resolver. The resolver reads a
//! JSON palette document and falls back to a built-in safe palette when the
//! document is absent or malformed; the renderer itself always receives a
//! complete, valid [`Palette`] and never sees the failure.

use anyhow::{ensure, Context, Result};
use log::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::color::Color;

/// Number of layer colors a palette carries.
///
/// Layer assignment is fixed: 0 = vesica field, 1 = tree edges,
/// 2 = tree nodes, 3 = fibonacci spiral, 4 = helix strand A,
/// 5 = helix strand B. Helix rungs draw with [`Palette::ink`].
pub const PALETTE_LAYER_COUNT: usize = 6;

/// Built-in safe palette used whenever an external palette cannot be loaded.
static FALLBACK_PALETTE: Lazy<Palette> = Lazy::new(|| Palette {
    background: Color::rgb(0x0b, 0x0b, 0x12),
    ink: Color::rgb(0xe8, 0xe8, 0xf0),
    layers: [
        Color::rgb(0xb1, 0xc7, 0xff),
        Color::rgb(0x89, 0xf7, 0xfe),
        Color::rgb(0xa0, 0xff, 0xa1),
        Color::rgb(0xff, 0xd2, 0x7f),
        Color::rgb(0xf5, 0xa3, 0xff),
        Color::rgb(0xd0, 0xd0, 0xe6),
    ],
});

// --- Palette ---

/// The resolved seven-color set every render call receives.
///
/// Distinctness of the seven colors is desirable but not enforced; the
/// renderer consumes whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Background fill painted before any layer draws.
    pub background: Color,
    /// Reserved for helix cross rungs.
    pub ink: Color,
    /// One color per geometric construct; see [`PALETTE_LAYER_COUNT`].
    pub layers: [Color; PALETTE_LAYER_COUNT],
}

impl Default for Palette {
    /// Returns the built-in safe palette.
    fn default() -> Self {
        *FALLBACK_PALETTE
    }
}

/// On-disk shape of a palette document: `{bg, ink, layers: [...]}` with
/// hex color strings. `layers` may carry more than six entries; only the
/// first six are used.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PaletteDocument {
    bg: Color,
    ink: Color,
    layers: Vec<Color>,
}

impl PaletteDocument {
    fn into_palette(self) -> Result<Palette> {
        ensure!(
            self.layers.len() >= PALETTE_LAYER_COUNT,
            "palette document carries {} layer colors, need at least {}",
            self.layers.len(),
            PALETTE_LAYER_COUNT
        );
        let mut layers = [Color::default(); PALETTE_LAYER_COUNT];
        layers.copy_from_slice(&self.layers[..PALETTE_LAYER_COUNT]);
        Ok(Palette {
            background: self.bg,
            ink: self.ink,
            layers,
        })
    }
}

/// Outcome of palette resolution, surfaced to the user as a status line
/// rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteStatus {
    /// The external palette document parsed and validated.
    Loaded,
    /// The fallback palette is in use.
    Fallback,
}

impl PaletteStatus {
    /// The user-visible, non-alarming status message.
    pub fn notice(self) -> &'static str {
        match self {
            PaletteStatus::Loaded => "Palette loaded.",
            PaletteStatus::Fallback => "Palette missing; using safe fallback.",
        }
    }
}

/// Resolves a palette from a JSON document at `path`.
///
/// Any failure (missing file, unparsable JSON, malformed hex color, fewer
/// than six layer colors) is logged and converted into the built-in
/// fallback palette. This function never returns an error: the renderer's
/// contract is to always receive a complete palette.
pub fn resolve_palette(path: &Path) -> (Palette, PaletteStatus) {
    match load_palette(path) {
        Ok(palette) => (palette, PaletteStatus::Loaded),
        Err(err) => {
            warn!("Could not load palette from {}: {:#}", path.display(), err);
            (Palette::default(), PaletteStatus::Fallback)
        }
    }
}

fn load_palette(path: &Path) -> Result<Palette> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading palette document {}", path.display()))?;
    let document: PaletteDocument =
        serde_json::from_str(&raw).context("parsing palette document")?;
    document.into_palette()
}

// --- Numerology constants ---

/// The named integer constants that parameterize every layer's geometry.
///
/// The renderer treats these as opaque inputs; the defaults below are the
/// only set under which the documented exact counts hold (22 edges,
/// 10 nodes, 144 spiral samples, 33 rungs). Alternate sets are supported
/// and produce proportionally different geometry; degenerate values (zeros)
/// produce empty or minimal layers rather than a panic, because all layer
/// math divides in `f64` and guards loop-controlling quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Numerology {
    pub three: u32,
    pub seven: u32,
    pub nine: u32,
    pub eleven: u32,
    pub twentytwo: u32,
    pub thirtythree: u32,
    pub ninetynine: u32,
    pub onefortyfour: u32,
}

impl Default for Numerology {
    fn default() -> Self {
        Numerology {
            three: 3,
            seven: 7,
            nine: 9,
            eleven: 11,
            twentytwo: 22,
            thirtythree: 33,
            ninetynine: 99,
            onefortyfour: 144,
        }
    }
}

// --- Render options ---

/// Everything one render call needs besides the surface itself.
///
/// `width`/`height` are in surface units; zero is legal and short-circuits
/// most drawing while the background fill still happens. Negative values
/// are tolerated and simply yield no visible geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub width: f64,
    pub height: f64,
    pub palette: Palette,
    pub num: Numerology,
}

impl RenderOptions {
    /// Options with the default palette and numerology at the given size.
    pub fn new(width: f64, height: f64) -> Self {
        RenderOptions {
            width,
            height,
            palette: Palette::default(),
            num: Numerology::default(),
        }
    }
}
