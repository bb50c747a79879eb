// src/lib.rs

//! helix-render: a deterministic, single-pass, layered 2D geometry renderer.
//!
//! The crate draws four nested constructs (a vesica-field grid, a
//! ten-node/twenty-two-edge scaffold graph, a logarithmic spiral, and a
//! double-helix lattice) onto an abstract [`surface::Surface`] of
//! caller-supplied dimensions, driven entirely by a set of named integer
//! constants ([`config::Numerology`]) and a six-color palette
//! ([`config::Palette`]).
//!
//! The renderer itself is pure drawing: no animation, no interaction, no
//! I/O. Palette loading (with its safe fallback) lives in [`config`] and is
//! the caller's concern; [`render::render_helix`] always receives an
//! already-resolved palette.

pub mod color;
pub mod config;
pub mod render;
pub mod surface;

pub use color::Color;
pub use config::{resolve_palette, Numerology, Palette, PaletteStatus, RenderOptions};
pub use render::{render_helix, vesica_cell_count};
pub use surface::{RecordingSurface, Surface, SurfaceOp, SvgSurface};
