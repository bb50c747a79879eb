// src/surface/mod.rs

//! Defines the abstract drawing surface the renderer paints onto.
//!
//! The renderer is backend-agnostic: it emits path construction and paint
//! operations through the [`Surface`] trait and never touches any other
//! capability of the target. Style properties (stroke color, fill color,
//! line width, global opacity) are mutable surface state that the renderer
//! sets immediately before each draw call; it never assumes a style
//! persists across layers.

pub mod recording;
pub mod svg;

pub use recording::{RecordingSurface, SurfaceOp};
pub use svg::SvgSurface;

use anyhow::Result;

use crate::color::Color;

/// An abstract 2D paint target.
///
/// The API mirrors the minimal canvas-style contract the renderer consumes:
/// path construction (`begin_path`/`move_to`/`line_to`/`arc`), paint
/// operations (`stroke`/`fill`/`fill_rect`), style setters, and a
/// `save`/`restore` pair for scoped style state.
///
/// Implementations are expected to silently ignore non-finite coordinates
/// rather than fail; degenerate renderer inputs may legitimately produce
/// them.
pub trait Surface {
    /// Pushes the current style state onto the surface's state stack.
    fn save(&mut self) -> Result<()>;

    /// Pops the most recently saved style state.
    fn restore(&mut self) -> Result<()>;

    /// Sets the color used by [`Surface::fill`] and [`Surface::fill_rect`].
    fn set_fill_style(&mut self, color: Color) -> Result<()>;

    /// Sets the color used by [`Surface::stroke`].
    fn set_stroke_style(&mut self, color: Color) -> Result<()>;

    /// Sets the stroke width in surface units.
    fn set_line_width(&mut self, width: f64) -> Result<()>;

    /// Sets the global opacity applied to subsequent paint operations.
    fn set_global_alpha(&mut self, alpha: f64) -> Result<()>;

    /// Discards the current path and starts a new one.
    fn begin_path(&mut self) -> Result<()>;

    /// Starts a new subpath at `(x, y)`.
    fn move_to(&mut self, x: f64, y: f64) -> Result<()>;

    /// Adds a straight segment from the current point to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64) -> Result<()>;

    /// Adds a circular arc centered at `(cx, cy)` with the given radius,
    /// sweeping from `start` to `end` (radians).
    fn arc(&mut self, cx: f64, cy: f64, r: f64, start: f64, end: f64) -> Result<()>;

    /// Strokes the current path with the current stroke style and width.
    fn stroke(&mut self) -> Result<()>;

    /// Fills the current path with the current fill style.
    fn fill(&mut self) -> Result<()>;

    /// Fills the axis-aligned rectangle `(x, y, w, h)` with the current
    /// fill style, independent of the current path.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<()>;
}
