// src/render/fibonacci.rs

//! Fibonacci curve layer: one logarithmic spiral polyline.

use anyhow::Result;

use crate::config::RenderOptions;
use crate::render::stroke_polyline;
use crate::surface::Surface;

const LINE_WIDTH: f64 = 2.0;
const ALPHA: f64 = 0.85;

/// Angular step between successive samples: the golden angle,
/// `pi * (3 - sqrt(5))`, roughly 137.5 degrees.
fn golden_angle() -> f64 {
    std::f64::consts::PI * (3.0 - 5.0_f64.sqrt())
}

/// The golden ratio.
fn phi() -> f64 {
    (1.0 + 5.0_f64.sqrt()) / 2.0
}

/// Samples `ONEFORTYFOUR` points of a golden-ratio spiral anchored at the
/// surface center and strokes them as a single polyline.
///
/// Sample `i` sits at angle `i * golden_angle` and radius
/// `r0 * phi^(i / TWENTYTWO)`, clamped to half the short side so the spiral
/// stays visible. When the sample count is 1 or less the layer returns
/// early with zero strokes; a single point cannot form a line.
pub(super) fn draw(surface: &mut dyn Surface, opts: &RenderOptions) -> Result<()> {
    let total = opts.num.onefortyfour;
    if total <= 1 {
        return Ok(());
    }

    let center_x = opts.width / 2.0;
    let center_y = opts.height / 2.0;
    let r0 = opts.width.min(opts.height) / f64::from(opts.num.eleven);
    let samples_per_turn = f64::from(opts.num.twentytwo);
    let max_radius = opts.width.min(opts.height) / 2.0;

    let points: Vec<(f64, f64)> = (0..total)
        .map(|i| {
            let theta = f64::from(i) * golden_angle();
            let radius = (r0 * phi().powf(f64::from(i) / samples_per_turn)).min(max_radius);
            (
                center_x + theta.cos() * radius,
                center_y + theta.sin() * radius,
            )
        })
        .collect();

    surface.save()?;
    surface.set_stroke_style(opts.palette.layers[3])?;
    surface.set_line_width(LINE_WIDTH)?;
    surface.set_global_alpha(ALPHA)?;
    stroke_polyline(surface, &points)?;
    surface.restore()?;
    Ok(())
}
