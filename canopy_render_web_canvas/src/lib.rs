// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web Canvas (2D) surface for the Canopy treemap renderer.
//!
//! This crate provides a [`RasterSurface`] implementation backed by
//! `web_sys::CanvasRenderingContext2d` when targeting `wasm32`. A Canopy
//! view needs two of them: one for the overview and one for the focus
//! raster.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn make_surface(
//!     canvas: web_sys::HtmlCanvasElement,
//! ) -> Result<canopy_render_web_canvas::WebCanvasSurface, wasm_bindgen::JsValue> {
//!     canopy_render_web_canvas::WebCanvasSurface::new(canvas)
//! }
//! ```
//!
//! Notes:
//! - The surface size is the canvas backing-store size in device pixels.
//!   Resizing the canvas resets the context state, so the font and text
//!   baseline are reapplied afterwards.
//! - Text is drawn with a `top` baseline, matching [`RasterSurface::fill_text`].

#![no_std]

extern crate alloc;

pub use canopy_render::RasterSurface;

#[cfg(target_arch = "wasm32")]
use alloc::{
    borrow::Cow,
    format,
    string::{String, ToString},
};
#[cfg(target_arch = "wasm32")]
use core::fmt;
#[cfg(target_arch = "wasm32")]
use kurbo::common::FloatFuncs as _; // for `ceil`
#[cfg(target_arch = "wasm32")]
use kurbo::{Point, Rect, Size};
#[cfg(target_arch = "wasm32")]
use peniko::Color;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[cfg(target_arch = "wasm32")]
fn color_to_css(color: Color) -> String {
    // `Rgba8` formats as a CSS `rgb(...)`/`rgba(...)` string.
    color.to_rgba8().to_string()
}

#[cfg(target_arch = "wasm32")]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Canvas dimensions are whole pixels; `as` saturates negative and NaN sizes to zero."
)]
fn canvas_dimension(v: f64) -> u32 {
    v.ceil() as u32
}

/// Web Canvas surface (only available on `wasm32`).
#[cfg(target_arch = "wasm32")]
pub struct WebCanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    font_family: Cow<'static, str>,
    font_size: f64,
}

#[cfg(target_arch = "wasm32")]
impl fmt::Debug for WebCanvasSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebCanvasSurface")
            .field("font_family", &self.font_family)
            .field("font_size", &self.font_size)
            .finish_non_exhaustive()
    }
}

#[cfg(target_arch = "wasm32")]
impl WebCanvasSurface {
    /// Create a surface for a DOM canvas element, using a `sans-serif` font.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("missing 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let mut surface = Self {
            canvas,
            ctx,
            font_family: Cow::Borrowed("sans-serif"),
            font_size: 10.0,
        };
        surface.apply_text_state();
        Ok(surface)
    }

    /// Sets the CSS font family used for labels.
    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<Cow<'static, str>>) -> Self {
        self.font_family = family.into();
        self.apply_text_state();
        self
    }

    /// The underlying canvas element.
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn apply_text_state(&mut self) {
        self.ctx.set_font(&format!("{}px {}", self.font_size, self.font_family));
        self.ctx.set_text_baseline("top");
    }
}

#[cfg(target_arch = "wasm32")]
impl RasterSurface for WebCanvasSurface {
    fn size(&self) -> Size {
        Size::new(f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    fn resize(&mut self, size: Size) {
        self.canvas.set_width(canvas_dimension(size.width));
        self.canvas.set_height(canvas_dimension(size.height));
        self.apply_text_state();
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color_to_css(color));
        self.ctx.fill_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.ctx.set_stroke_style_str(&color_to_css(color));
        self.ctx.set_line_width(width);
        self.ctx.stroke_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
        self.apply_text_state();
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        // A failed measurement reads as infinitely wide, so the label is skipped.
        self.ctx
            .measure_text(text)
            .map_or(f64::INFINITY, |metrics| metrics.width())
    }

    fn fill_text(&mut self, text: &str, origin: Point, color: Color) {
        self.ctx.set_fill_style_str(&color_to_css(color));
        let _ = self.ctx.fill_text(text, origin.x, origin.y);
    }
}

/// Stub type for non-wasm targets so the crate can be included in the workspace.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct WebCanvasSurface;

#[cfg(not(target_arch = "wasm32"))]
impl RasterSurface for WebCanvasSurface {
    fn size(&self) -> kurbo::Size {
        kurbo::Size::ZERO
    }
    fn resize(&mut self, _size: kurbo::Size) {
        unimplemented!("WebCanvasSurface is only available on wasm32")
    }
    fn clear(&mut self) {
        unimplemented!("WebCanvasSurface is only available on wasm32")
    }
    fn fill_rect(&mut self, _rect: kurbo::Rect, _color: peniko::Color) {
        unimplemented!("WebCanvasSurface is only available on wasm32")
    }
    fn stroke_rect(&mut self, _rect: kurbo::Rect, _color: peniko::Color, _width: f64) {
        unimplemented!("WebCanvasSurface is only available on wasm32")
    }
    fn set_font_size(&mut self, _size: f64) {
        unimplemented!("WebCanvasSurface is only available on wasm32")
    }
    fn measure_text(&mut self, _text: &str) -> f64 {
        unimplemented!("WebCanvasSurface is only available on wasm32")
    }
    fn fill_text(&mut self, _text: &str, _origin: kurbo::Point, _color: peniko::Color) {
        unimplemented!("WebCanvasSurface is only available on wasm32")
    }
}
