// src/surface/svg.rs

//! A surface that serializes the draw-call stream into an SVG document.
//!
//! This is the one concrete sink the crate ships besides the recording
//! mock; the demo binary renders through it and writes the document to
//! stdout. Non-finite coordinates are dropped silently, matching the
//! contract in [`crate::surface::Surface`].

use anyhow::Result;
use std::fmt::Write as _;

use crate::color::Color;
use crate::surface::Surface;

const TAU: f64 = std::f64::consts::TAU;

/// Mutable style state, saved and restored as a unit.
#[derive(Debug, Clone, Copy)]
struct Style {
    fill: Color,
    stroke: Color,
    line_width: f64,
    alpha: f64,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            fill: Color::rgb(0, 0, 0),
            stroke: Color::rgb(0, 0, 0),
            line_width: 1.0,
            alpha: 1.0,
        }
    }
}

/// A [`Surface`] implementation producing an SVG document.
///
/// Paths accumulate as `d` attribute data; each `stroke`/`fill` emits one
/// `<path>` element with the style current at paint time, and `fill_rect`
/// emits a `<rect>`. Full-circle arcs are encoded as two semicircular `A`
/// segments because a single SVG arc cannot span 360 degrees.
#[derive(Debug)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    style: Style,
    saved: Vec<Style>,
    path: String,
    elements: Vec<String>,
}

impl SvgSurface {
    /// Creates a surface for a document of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        SvgSurface {
            width,
            height,
            style: Style::default(),
            saved: Vec::new(),
            path: String::new(),
            elements: Vec::new(),
        }
    }

    /// Serializes everything drawn so far into a complete SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );
        for element in &self.elements {
            let _ = writeln!(out, "  {element}");
        }
        out.push_str("</svg>\n");
        out
    }

    fn push_path_element(&mut self, paint: &str) {
        if self.path.is_empty() {
            return;
        }
        self.elements
            .push(format!(r#"<path d="{}" {} />"#, self.path, paint));
    }
}

impl Surface for SvgSurface {
    fn save(&mut self) -> Result<()> {
        self.saved.push(self.style);
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        if let Some(style) = self.saved.pop() {
            self.style = style;
        }
        Ok(())
    }

    fn set_fill_style(&mut self, color: Color) -> Result<()> {
        self.style.fill = color;
        Ok(())
    }

    fn set_stroke_style(&mut self, color: Color) -> Result<()> {
        self.style.stroke = color;
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> Result<()> {
        self.style.line_width = width;
        Ok(())
    }

    fn set_global_alpha(&mut self, alpha: f64) -> Result<()> {
        self.style.alpha = alpha;
        Ok(())
    }

    fn begin_path(&mut self) -> Result<()> {
        self.path.clear();
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<()> {
        if x.is_finite() && y.is_finite() {
            if !self.path.is_empty() {
                self.path.push(' ');
            }
            let _ = write!(self.path, "M {x} {y}");
        }
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<()> {
        if x.is_finite() && y.is_finite() {
            if !self.path.is_empty() {
                self.path.push(' ');
            }
            let _ = write!(self.path, "L {x} {y}");
        }
        Ok(())
    }

    fn arc(&mut self, cx: f64, cy: f64, r: f64, start: f64, end: f64) -> Result<()> {
        let finite = cx.is_finite() && cy.is_finite() && r.is_finite() && start.is_finite()
            && end.is_finite();
        if !finite || r < 0.0 {
            return Ok(());
        }

        let (sx, sy) = (cx + r * start.cos(), cy + r * start.sin());
        if !self.path.is_empty() {
            self.path.push(' ');
        }
        let _ = write!(self.path, "M {sx} {sy}");

        let sweep = end - start;
        if sweep.abs() >= TAU {
            // Full circle: two semicircles, closed.
            let (mx, my) = (cx - r * start.cos(), cy - r * start.sin());
            let _ = write!(
                self.path,
                " A {r} {r} 0 1 1 {mx} {my} A {r} {r} 0 1 1 {sx} {sy} Z"
            );
        } else {
            let (ex, ey) = (cx + r * end.cos(), cy + r * end.sin());
            let large = u8::from(sweep.abs() > TAU / 2.0);
            let flip = u8::from(sweep >= 0.0);
            let _ = write!(self.path, " A {r} {r} 0 {large} {flip} {ex} {ey}");
        }
        Ok(())
    }

    fn stroke(&mut self) -> Result<()> {
        let paint = format!(
            r#"fill="none" stroke="{}" stroke-width="{}" stroke-opacity="{}""#,
            self.style.stroke, self.style.line_width, self.style.alpha
        );
        self.push_path_element(&paint);
        Ok(())
    }

    fn fill(&mut self) -> Result<()> {
        let paint = format!(
            r#"fill="{}" fill-opacity="{}""#,
            self.style.fill, self.style.alpha
        );
        self.push_path_element(&paint);
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<()> {
        if !(x.is_finite() && y.is_finite() && w.is_finite() && h.is_finite()) {
            return Ok(());
        }
        self.elements.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" fill-opacity="{}" />"#,
            x, y, w, h, self.style.fill, self.style.alpha
        ));
        Ok(())
    }
}
