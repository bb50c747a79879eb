// src/render/mod.rs

//! The layered geometry renderer.
//!
//! [`render_helix`] paints four nested constructs onto an abstract
//! [`Surface`], in a fixed depth order:
//!
//! 1. Vesica field (tiled pairs of intersecting circles)
//! 2. Tree-of-Life scaffold (10 nodes, 22 edges)
//! 3. Fibonacci curve (one logarithmic spiral polyline)
//! 4. Double-helix lattice (two strands plus cross rungs)
//!
//! Every layer reads only the palette, the dimensions, and the numerology
//! constants; no layer depends on another layer's output. The renderer is
//! synchronous, performs no I/O, and holds no state between calls: the same
//! inputs always produce the same sequence of surface calls.

mod fibonacci;
mod helix;
mod tree;
mod vesica;

#[cfg(test)]
mod tests;

pub use vesica::cell_count as vesica_cell_count;

use anyhow::Result;

use crate::config::RenderOptions;
use crate::surface::Surface;

/// Renders the full layered composition onto `surface`.
///
/// Paints the background, then each layer in the fixed order above. Each
/// layer brackets its drawing in a `save`/`restore` pair so style mutations
/// stay layer-local. Performs no input validation and never panics for
/// finite numeric input: zero or negative dimensions yield no visible
/// geometry, and degenerate numerology constants yield empty or minimal
/// layers because every loop-controlling division is guarded.
///
/// The only errors that can come back are the surface's own.
pub fn render_helix(surface: &mut dyn Surface, opts: &RenderOptions) -> Result<()> {
    surface.save()?;

    surface.set_fill_style(opts.palette.background)?;
    surface.fill_rect(0.0, 0.0, opts.width, opts.height)?;

    vesica::draw(surface, opts)?;
    tree::draw(surface, opts)?;
    fibonacci::draw(surface, opts)?;
    helix::draw(surface, opts)?;

    surface.restore()?;
    Ok(())
}

/// Strokes `points` as one polyline: a single path, a single stroke.
///
/// Fewer than two points cannot form a line, so the call is a no-op and in
/// particular issues no stroke.
fn stroke_polyline(surface: &mut dyn Surface, points: &[(f64, f64)]) -> Result<()> {
    if points.len() < 2 {
        return Ok(());
    }
    surface.begin_path()?;
    surface.move_to(points[0].0, points[0].1)?;
    for &(x, y) in &points[1..] {
        surface.line_to(x, y)?;
    }
    surface.stroke()?;
    Ok(())
}
