// src/surface/recording.rs

//! A surface that records every call it receives.
//!
//! `RecordingSurface` is the test harness's eye on the renderer: the
//! property tests assert exact call counts and orderings against its log,
//! and the idempotence check compares two logs for equality. It is also
//! useful to external callers that want to replay or inspect a render.

use anyhow::Result;

use crate::color::Color;
use crate::surface::Surface;

/// One recorded surface call, with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Save,
    Restore,
    SetFillStyle(Color),
    SetStrokeStyle(Color),
    SetLineWidth(f64),
    SetGlobalAlpha(f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Arc {
        cx: f64,
        cy: f64,
        r: f64,
        start: f64,
        end: f64,
    },
    Stroke,
    Fill,
    FillRect(f64, f64, f64, f64),
}

/// A [`Surface`] implementation that appends every call to a log.
///
/// All operations succeed; the log lives as long as the surface and is
/// never cleared implicitly.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Creates an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// The full call log, in call order.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Counts logged calls matching `predicate`.
    pub fn count_where(&self, predicate: impl Fn(&SurfaceOp) -> bool) -> usize {
        self.ops.iter().filter(|op| predicate(op)).count()
    }

    /// Counts `Stroke` calls issued while `color` was the stroke style.
    ///
    /// Walks the log tracking the current stroke style, the same way a real
    /// surface would resolve it at paint time.
    pub fn strokes_with(&self, color: Color) -> usize {
        let mut current: Option<Color> = None;
        let mut count = 0;
        for op in &self.ops {
            match op {
                SurfaceOp::SetStrokeStyle(c) => current = Some(*c),
                SurfaceOp::Stroke if current == Some(color) => count += 1,
                _ => {}
            }
        }
        count
    }

    /// Counts `Fill` calls issued while `color` was the fill style.
    pub fn fills_with(&self, color: Color) -> usize {
        let mut current: Option<Color> = None;
        let mut count = 0;
        for op in &self.ops {
            match op {
                SurfaceOp::SetFillStyle(c) => current = Some(*c),
                SurfaceOp::Fill if current == Some(color) => count += 1,
                _ => {}
            }
        }
        count
    }

    /// Counts `Arc` calls whose immediately following call is `Stroke`.
    ///
    /// Stroked single-arc paths are how the vesica layer draws its circles,
    /// so this distinguishes them from filled node arcs.
    pub fn stroked_arcs(&self) -> usize {
        self.ops
            .windows(2)
            .filter(|pair| {
                matches!(pair[0], SurfaceOp::Arc { .. }) && matches!(pair[1], SurfaceOp::Stroke)
            })
            .count()
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) -> Result<()> {
        self.ops.push(SurfaceOp::Save);
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        self.ops.push(SurfaceOp::Restore);
        Ok(())
    }

    fn set_fill_style(&mut self, color: Color) -> Result<()> {
        self.ops.push(SurfaceOp::SetFillStyle(color));
        Ok(())
    }

    fn set_stroke_style(&mut self, color: Color) -> Result<()> {
        self.ops.push(SurfaceOp::SetStrokeStyle(color));
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> Result<()> {
        self.ops.push(SurfaceOp::SetLineWidth(width));
        Ok(())
    }

    fn set_global_alpha(&mut self, alpha: f64) -> Result<()> {
        self.ops.push(SurfaceOp::SetGlobalAlpha(alpha));
        Ok(())
    }

    fn begin_path(&mut self) -> Result<()> {
        self.ops.push(SurfaceOp::BeginPath);
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<()> {
        self.ops.push(SurfaceOp::MoveTo(x, y));
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<()> {
        self.ops.push(SurfaceOp::LineTo(x, y));
        Ok(())
    }

    fn arc(&mut self, cx: f64, cy: f64, r: f64, start: f64, end: f64) -> Result<()> {
        self.ops.push(SurfaceOp::Arc {
            cx,
            cy,
            r,
            start,
            end,
        });
        Ok(())
    }

    fn stroke(&mut self) -> Result<()> {
        self.ops.push(SurfaceOp::Stroke);
        Ok(())
    }

    fn fill(&mut self) -> Result<()> {
        self.ops.push(SurfaceOp::Fill);
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<()> {
        self.ops.push(SurfaceOp::FillRect(x, y, w, h));
        Ok(())
    }
}
