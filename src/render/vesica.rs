// src/render/vesica.rs

//! Vesica field layer: a calm background lattice of paired circles.

use anyhow::Result;

use crate::config::RenderOptions;
use crate::surface::Surface;

const TAU: f64 = std::f64::consts::TAU;

const LINE_WIDTH: f64 = 1.0;
const ALPHA: f64 = 0.75;

/// Tiles pairs of intersecting circles across the surface.
///
/// Grid geometry derives from the numerology constants:
/// `base_radius = min(w,h)/THREE`, `step = base_radius/SEVEN`,
/// `stride = step*NINE`. Cells advance by `stride` in both axes starting
/// at `(base_radius, base_radius)` while inside the surface; each cell
/// strokes two circles of radius `base_radius` offset horizontally by one
/// `step`, producing the vesica eye shape.
pub(super) fn draw(surface: &mut dyn Surface, opts: &RenderOptions) -> Result<()> {
    let base_radius = opts.width.min(opts.height) / f64::from(opts.num.three);
    let step = base_radius / f64::from(opts.num.seven);
    let stride = step * f64::from(opts.num.nine);

    // A zero or non-finite stride (degenerate constants) must not spin the
    // grid loop; treat it as zero iterations.
    if !stride.is_finite() || stride <= 0.0 {
        return Ok(());
    }

    surface.save()?;
    surface.set_stroke_style(opts.palette.layers[0])?;
    surface.set_line_width(LINE_WIDTH)?;
    surface.set_global_alpha(ALPHA)?;

    let mut y = base_radius;
    while y < opts.height {
        let mut x = base_radius;
        while x < opts.width {
            for offset in [-step, step] {
                surface.begin_path()?;
                surface.arc(x + offset, y, base_radius, 0.0, TAU)?;
                surface.stroke()?;
            }
            x += stride;
        }
        y += stride;
    }

    surface.restore()?;
    Ok(())
}

/// Number of grid cells the layer visits for the given inputs.
///
/// Closed form of the tiling loop; the stroked-circle count is twice this.
pub fn cell_count(width: f64, height: f64, three: u32, seven: u32, nine: u32) -> usize {
    let base_radius = width.min(height) / f64::from(three);
    let stride = base_radius / f64::from(seven) * f64::from(nine);
    if !stride.is_finite() || stride <= 0.0 {
        return 0;
    }
    let along = |extent: f64| -> usize {
        if extent > base_radius {
            ((extent - base_radius) / stride).ceil() as usize
        } else {
            0
        }
    };
    along(width) * along(height)
}
