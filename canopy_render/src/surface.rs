// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use peniko::Color;

/// A 2D raster target with the handful of primitives the treemap needs.
///
/// Coordinates are surface pixels with the origin at the top-left. Text is
/// positioned by the top-left of its line box (a `top` baseline).
pub trait RasterSurface {
    /// Current pixel size.
    fn size(&self) -> Size;

    /// Changes the pixel size. Contents are undefined afterwards.
    fn resize(&mut self, size: Size);

    /// Clears every pixel to transparent.
    fn clear(&mut self);

    /// Fills `rect` with `color`.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Strokes the outline of `rect`, centred on its edges.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);

    /// Sets the font size, in pixels, for subsequent text calls.
    fn set_font_size(&mut self, size: f64);

    /// Advance width of `text` in the current font.
    fn measure_text(&mut self, text: &str) -> f64;

    /// Draws `text` with its top-left at `origin`.
    fn fill_text(&mut self, text: &str, origin: Point, color: Color);
}

/// One call recorded by a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// [`RasterSurface::clear`].
    Clear,
    /// [`RasterSurface::fill_rect`].
    FillRect {
        /// Filled rectangle.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// [`RasterSurface::stroke_rect`].
    StrokeRect {
        /// Stroked rectangle.
        rect: Rect,
        /// Stroke color.
        color: Color,
        /// Line width.
        width: f64,
    },
    /// [`RasterSurface::set_font_size`].
    SetFontSize(f64),
    /// [`RasterSurface::fill_text`].
    FillText {
        /// Drawn string.
        text: String,
        /// Top-left of the text.
        origin: Point,
        /// Text color.
        color: Color,
    },
}

/// A surface that draws nothing and records every call.
///
/// Text is measured with a fixed advance per `char` of
/// `font_size * advance_ratio`, which makes label fitting predictable in
/// tests and headless runs.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    font_size: f64,
    advance_ratio: f64,
    ops: Vec<SurfaceOp>,
    measure_calls: usize,
}

impl RecordingSurface {
    /// Creates a surface of `size` pixels with a 10px font and half-em advance.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            font_size: 10.0,
            advance_ratio: 0.5,
            ops: Vec::new(),
            measure_calls: 0,
        }
    }

    /// Sets the per-character advance as a fraction of the font size.
    #[must_use]
    pub fn with_advance_ratio(mut self, ratio: f64) -> Self {
        self.advance_ratio = ratio;
        self
    }

    /// Recorded calls, oldest first.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Removes and returns the recorded calls.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        core::mem::take(&mut self.ops)
    }

    /// Number of [`RasterSurface::measure_text`] calls so far.
    pub fn measure_calls(&self) -> usize {
        self.measure_calls
    }

    /// Strings drawn with [`RasterSurface::fill_text`], in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Rectangles passed to [`RasterSurface::fill_rect`], in order.
    pub fn filled_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::FillRect { rect, .. } => Some(*rect),
            _ => None,
        })
    }
}

impl RasterSurface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(SurfaceOp::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(SurfaceOp::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.ops.push(SurfaceOp::StrokeRect { rect, color, width });
    }

    fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
        self.ops.push(SurfaceOp::SetFontSize(size));
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        self.measure_calls += 1;
        text.chars().count() as f64 * self.font_size * self.advance_ratio
    }

    fn fill_text(&mut self, text: &str, origin: Point, color: Color) {
        self.ops.push(SurfaceOp::FillText {
            text: text.to_string(),
            origin,
            color,
        });
    }
}
