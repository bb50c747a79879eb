// src/render/tree.rs

//! Tree-of-Life scaffold layer: a fixed 10-node, 22-edge graph.

use anyhow::Result;

use crate::config::RenderOptions;
use crate::surface::Surface;

const TAU: f64 = std::f64::consts::TAU;

const EDGE_WIDTH: f64 = 1.5;
const EDGE_ALPHA: f64 = 0.9;

/// Node positions as fractions of width/height: three vertical columns in
/// the balanced-tree layout. The graph structure is constant; only the
/// scale follows the surface.
const NODES: [(f64, f64); 10] = [
    (0.5, 0.05),
    (0.35, 0.18),
    (0.65, 0.18),
    (0.25, 0.35),
    (0.75, 0.35),
    (0.5, 0.48),
    (0.35, 0.65),
    (0.65, 0.65),
    (0.5, 0.78),
    (0.5, 0.9),
];

/// The 22 edges, as index pairs into [`NODES`].
const EDGES: [(usize, usize); 22] = [
    (0, 1),
    (0, 2),
    (1, 2),
    (1, 3),
    (1, 5),
    (1, 4),
    (2, 4),
    (2, 5),
    (2, 3),
    (3, 4),
    (3, 5),
    (4, 5),
    (3, 6),
    (4, 7),
    (5, 6),
    (5, 7),
    (5, 8),
    (6, 7),
    (7, 8),
    (6, 8),
    (6, 9),
    (7, 9),
];

/// Draws the scaffold: exactly 22 edge strokes, then exactly 10 node fills,
/// regardless of surface size (a 0x0 surface collapses the coordinates but
/// not the call counts).
pub(super) fn draw(surface: &mut dyn Surface, opts: &RenderOptions) -> Result<()> {
    let nodes = NODES.map(|(nx, ny)| (nx * opts.width, ny * opts.height));
    let node_radius = opts.width.min(opts.height) / f64::from(opts.num.twentytwo);

    surface.save()?;

    surface.set_stroke_style(opts.palette.layers[1])?;
    surface.set_line_width(EDGE_WIDTH)?;
    surface.set_global_alpha(EDGE_ALPHA)?;
    for (a, b) in EDGES {
        surface.begin_path()?;
        surface.move_to(nodes[a].0, nodes[a].1)?;
        surface.line_to(nodes[b].0, nodes[b].1)?;
        surface.stroke()?;
    }

    surface.set_fill_style(opts.palette.layers[2])?;
    for (x, y) in nodes {
        surface.begin_path()?;
        surface.arc(x, y, node_radius, 0.0, TAU)?;
        surface.fill()?;
    }

    surface.restore()?;
    Ok(())
}
