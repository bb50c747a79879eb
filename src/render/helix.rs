// src/render/helix.rs

//! Double-helix lattice layer: two phase-shifted strands plus cross rungs.

use anyhow::Result;
use std::f64::consts::{PI, TAU};

use crate::config::RenderOptions;
use crate::render::stroke_polyline;
use crate::surface::Surface;

const STRAND_WIDTH: f64 = 2.0;
const RUNG_WIDTH: f64 = 1.0;
const ALPHA: f64 = 0.9;

/// Strand y at normalized position `t` in `[0, 1]` for the given phase.
fn strand_y(t: f64, phase: f64, turns: f64, amp: f64, height: f64) -> f64 {
    height / 2.0 + amp * (t * turns * TAU + phase).sin()
}

/// Draws the lattice: strand A, strand B (phase-shifted by pi), then
/// exactly `THIRTYTHREE` cross rungs.
///
/// Strands sample `i` in `[0, NINETYNINE]` inclusive across the full width,
/// winding `ELEVEN/4` turns with amplitude `height/4`. When the sample
/// count is 1 or less both strand polylines are skipped (zero strokes), but
/// the rungs still draw their full fixed count: each rung derives from its
/// own `t = j/(THIRTYTHREE-1)` rather than from the strand sample loop.
pub(super) fn draw(surface: &mut dyn Surface, opts: &RenderOptions) -> Result<()> {
    let samples = opts.num.ninetynine;
    let turns = f64::from(opts.num.eleven) / 4.0;
    let amp = opts.height / 4.0;

    surface.save()?;

    if samples > 1 {
        surface.set_line_width(STRAND_WIDTH)?;
        surface.set_global_alpha(ALPHA)?;
        for (layer, phase) in [(opts.palette.layers[4], 0.0), (opts.palette.layers[5], PI)] {
            let points: Vec<(f64, f64)> = (0..=samples)
                .map(|i| {
                    let t = f64::from(i) / f64::from(samples);
                    (t * opts.width, strand_y(t, phase, turns, amp, opts.height))
                })
                .collect();
            surface.set_stroke_style(layer)?;
            stroke_polyline(surface, &points)?;
        }
    }

    let rungs = opts.num.thirtythree;
    surface.set_stroke_style(opts.palette.ink)?;
    surface.set_line_width(RUNG_WIDTH)?;
    surface.set_global_alpha(ALPHA)?;
    for j in 0..rungs {
        let t = if rungs == 1 {
            0.0
        } else {
            f64::from(j) / f64::from(rungs - 1)
        };
        let x = t * opts.width;
        let y1 = strand_y(t, 0.0, turns, amp, opts.height);
        let y2 = strand_y(t, PI, turns, amp, opts.height);
        surface.begin_path()?;
        surface.move_to(x, y1)?;
        surface.line_to(x, y2)?;
        surface.stroke()?;
    }

    surface.restore()?;
    Ok(())
}
