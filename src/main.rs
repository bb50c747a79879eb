// src/main.rs

use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use helix_render::{
    render_helix, resolve_palette, Palette, PaletteStatus, RenderOptions, SvgSurface,
};

// Default document size when no dimensions are given on the command line.
const DEFAULT_WIDTH: f64 = 1440.0;
const DEFAULT_HEIGHT: f64 = 900.0;

/// Renders the layered composition to an SVG document on stdout.
///
/// Usage: `helix-render [width height] [palette.json]`
fn main() -> Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let (width, height, palette_path) = match args.as_slice() {
        [] => (DEFAULT_WIDTH, DEFAULT_HEIGHT, None),
        [path] => (DEFAULT_WIDTH, DEFAULT_HEIGHT, Some(PathBuf::from(path))),
        [w, h, rest @ ..] => {
            let width: f64 = w.parse().with_context(|| format!("parsing width {w:?}"))?;
            let height: f64 = h
                .parse()
                .with_context(|| format!("parsing height {h:?}"))?;
            (width, height, rest.first().map(PathBuf::from))
        }
    };

    let (palette, status) = match palette_path {
        Some(path) => resolve_palette(&path),
        None => (Palette::default(), PaletteStatus::Fallback),
    };
    info!("{}", status.notice());

    let mut opts = RenderOptions::new(width, height);
    opts.palette = palette;

    let mut surface = SvgSurface::new(width, height);
    render_helix(&mut surface, &opts)?;
    print!("{}", surface.to_svg());
    Ok(())
}
