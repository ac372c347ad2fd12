// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

use crate::transform::ViewTransform;

/// Pan/zoom state of one treemap view.
///
/// All lengths are in window (CSS) pixels. The *target* values (`zoom`,
/// `pan`) change immediately on input and are always clamped so the view
/// never reveals area outside the laid-out extent. The *smoothed* values
/// trail the targets and are advanced by a
/// [`SmoothingLoop`](crate::SmoothingLoop).
///
/// Pan is measured from the centred position: `pan == 0` shows the middle of
/// the zoomed extent.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportState {
    window: Size,
    zoom: f64,
    pan: Vec2,
    pub(crate) smoothed_zoom: f64,
    pub(crate) smoothed_pan: Vec2,
    view_size: Size,
    edge_offset: Vec2,
    pub(crate) dragging: bool,
    pub(crate) pointer: Point,
}

impl ViewportState {
    /// Creates a fully zoomed-out state for a window of `window` pixels.
    ///
    /// The pointer is assumed to be at the window centre until the first
    /// pointer event arrives.
    #[must_use]
    pub fn new(window: Size) -> Self {
        let window = sanitize_size(window);
        Self {
            window,
            zoom: 0.0,
            pan: Vec2::ZERO,
            smoothed_zoom: 0.0,
            smoothed_pan: Vec2::ZERO,
            view_size: window,
            edge_offset: Vec2::ZERO,
            dragging: false,
            pointer: Point::new(window.width / 2.0, window.height / 2.0),
        }
    }

    /// Window size in CSS pixels.
    pub fn window(&self) -> Size {
        self.window
    }

    /// Target zoom level, `0` when fully zoomed out.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Target pan offset.
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Scale factor of the target zoom, `1 + zoom`.
    pub fn scale(&self) -> f64 {
        1.0 + self.zoom
    }

    /// Animated zoom level trailing [`zoom`](Self::zoom).
    pub fn smoothed_zoom(&self) -> f64 {
        self.smoothed_zoom
    }

    /// Animated pan trailing [`pan`](Self::pan).
    pub fn smoothed_pan(&self) -> Vec2 {
        self.smoothed_pan
    }

    /// Full extent at the target zoom: `window * (1 + zoom)`.
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Clamped overflow `view_size - window - 2 * pan`.
    ///
    /// This is the distance, in window pixels, between the top-left of the
    /// zoomed extent and the top-left of the window, doubled. The focus
    /// raster is rendered offset by half of it.
    pub fn edge_offset(&self) -> Vec2 {
        self.edge_offset
    }

    /// Returns `true` while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Last known pointer position in window coordinates.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Returns `true` once the smoothed values have reached the targets.
    pub fn is_settled(&self) -> bool {
        self.smoothed_zoom == self.zoom && self.smoothed_pan == self.pan
    }

    /// Sets the window size and re-clamps the pan.
    ///
    /// Negative or non-finite dimensions are treated as zero.
    pub fn set_window_size(&mut self, window: Size) {
        self.window = sanitize_size(window);
        self.refresh_view_size();
        keep_in_view(self);
    }

    /// Sets the target zoom (clamped to `>= 0`) and re-clamps the pan.
    ///
    /// Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            return;
        }
        self.zoom = zoom.max(0.0);
        self.refresh_view_size();
        keep_in_view(self);
    }

    /// Sets the target pan, clamped into view.
    pub fn set_pan(&mut self, pan: Vec2) {
        self.pan = pan;
        keep_in_view(self);
    }

    /// Moves the smoothed values onto the targets immediately.
    pub fn snap(&mut self) {
        self.smoothed_zoom = self.zoom;
        self.smoothed_pan = self.pan;
    }

    pub(crate) fn set_pointer(&mut self, position: Point) {
        if position.is_finite() {
            self.pointer = position;
        }
    }

    /// Sets the zoom without clamping the pan. Returns the change in extent.
    pub(crate) fn zoom_to(&mut self, zoom: f64) -> Vec2 {
        let before = self.view_size;
        self.zoom = zoom;
        self.refresh_view_size();
        Vec2::new(
            self.view_size.width - before.width,
            self.view_size.height - before.height,
        )
    }

    pub(crate) fn pan_unclamped(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    fn refresh_view_size(&mut self) {
        self.view_size = self.window * self.scale();
    }

    /// Placement of the overview raster in window coordinates.
    ///
    /// Equivalent to the CSS transform
    /// `translate(smoothed_pan) scale(1 + smoothed_zoom)` about the window
    /// centre. Updated on every smoothing frame.
    pub fn overview_placement(&self) -> Affine {
        let center = self.center();
        Affine::translate(center + self.smoothed_pan)
            * Affine::scale(1.0 + self.smoothed_zoom)
            * Affine::translate(-center)
    }

    /// Placement of the focus raster relative to the overview raster.
    ///
    /// Equivalent to the CSS transform `scale(1 / (1 + zoom)) translate(-pan)`
    /// about the window centre. Composed with an
    /// [`overview_placement`](Self::overview_placement) at the same zoom and
    /// pan it yields the identity, so the focus raster lines up with the
    /// window once smoothing settles.
    pub fn focus_placement(&self) -> Affine {
        let center = self.center();
        Affine::translate(center)
            * Affine::scale(1.0 / self.scale())
            * Affine::translate(-self.pan - center)
    }

    /// Transform for rendering the focus raster at `device_pixel_ratio`.
    pub fn focus_view_transform(&self, device_pixel_ratio: f64) -> ViewTransform {
        ViewTransform::new(self.scale(), self.edge_offset * (device_pixel_ratio * 0.5))
    }

    fn center(&self) -> Vec2 {
        Vec2::new(self.window.width / 2.0, self.window.height / 2.0)
    }
}

/// Clamps the target pan so the window stays inside the zoomed extent, then
/// recomputes [`ViewportState::edge_offset`].
///
/// Per axis, pan is limited to `±(extent - window) / 2`. A zero, negative, or
/// non-finite overflow clamps the pan to zero. Applying this twice is the
/// same as applying it once.
pub fn keep_in_view(state: &mut ViewportState) {
    let (pan_x, edge_x) = clamp_axis(state.pan.x, state.view_size.width, state.window.width);
    let (pan_y, edge_y) = clamp_axis(state.pan.y, state.view_size.height, state.window.height);
    state.pan = Vec2::new(pan_x, pan_y);
    state.edge_offset = Vec2::new(edge_x, edge_y);
}

fn clamp_axis(pan: f64, extent: f64, window: f64) -> (f64, f64) {
    let overdraw = (extent - window) / 2.0;
    if !overdraw.is_finite() || overdraw <= 0.0 || !pan.is_finite() {
        let edge = if overdraw.is_finite() && overdraw > 0.0 {
            extent - window
        } else {
            0.0
        };
        return (0.0, edge);
    }
    let pan = pan.clamp(-overdraw, overdraw);
    (pan, extent - window - 2.0 * pan)
}

fn sanitize_size(size: Size) -> Size {
    let clean = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
    Size::new(clean(size.width), clean(size.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).hypot() < 1e-9
    }

    #[test]
    fn zoom_one_doubles_extent_and_bounds_pan() {
        let mut state = ViewportState::new(Size::new(400.0, 100.0));
        state.set_zoom(1.0);
        assert_eq!(state.view_size(), Size::new(800.0, 200.0));

        state.set_pan(Vec2::new(1000.0, -1000.0));
        assert_eq!(state.pan(), Vec2::new(200.0, -50.0));
        assert_eq!(state.edge_offset(), Vec2::new(0.0, 200.0));

        state.set_pan(Vec2::new(-1000.0, 0.0));
        assert_eq!(state.pan(), Vec2::new(-200.0, 0.0));
        assert_eq!(state.edge_offset(), Vec2::new(800.0, 100.0));
    }

    #[test]
    fn zoomed_out_pins_pan_to_zero() {
        let mut state = ViewportState::new(Size::new(400.0, 100.0));
        state.set_pan(Vec2::new(30.0, 30.0));
        assert_eq!(state.pan(), Vec2::ZERO);
        assert_eq!(state.edge_offset(), Vec2::ZERO);
    }

    #[test]
    fn zero_window_never_produces_nan() {
        let mut state = ViewportState::new(Size::ZERO);
        state.set_zoom(3.0);
        state.set_pan(Vec2::new(5.0, 5.0));
        assert_eq!(state.pan(), Vec2::ZERO);
        assert_eq!(state.edge_offset(), Vec2::ZERO);
        assert!(state.focus_view_transform(2.0).offset.is_finite());

        state.set_window_size(Size::new(f64::NAN, -4.0));
        assert_eq!(state.window(), Size::ZERO);
        assert!(state.overview_placement().is_finite());
    }

    #[test]
    fn shrinking_window_reclamps() {
        let mut state = ViewportState::new(Size::new(400.0, 100.0));
        state.set_zoom(1.0);
        state.set_pan(Vec2::new(200.0, 0.0));
        state.set_window_size(Size::new(100.0, 100.0));
        assert_eq!(state.view_size(), Size::new(200.0, 200.0));
        assert_eq!(state.pan(), Vec2::new(50.0, 0.0));
    }

    #[test]
    fn negative_and_nan_zoom_are_rejected() {
        let mut state = ViewportState::new(Size::new(400.0, 100.0));
        state.set_zoom(-2.0);
        assert_eq!(state.zoom(), 0.0);
        state.set_zoom(f64::NAN);
        assert_eq!(state.zoom(), 0.0);
    }

    #[test]
    fn placements_cancel_out_when_settled() {
        let mut state = ViewportState::new(Size::new(400.0, 300.0));
        state.set_zoom(1.5);
        state.set_pan(Vec2::new(-120.0, 40.0));
        state.snap();
        let combined = state.overview_placement() * state.focus_placement();
        for pt in [Point::ZERO, Point::new(400.0, 300.0), Point::new(17.0, 250.0)] {
            assert!(close((combined * pt).to_vec2(), pt.to_vec2()), "{pt:?}");
        }
    }

    #[test]
    fn focus_transform_shows_the_window_region() {
        // A layout point under a window pixel must land on that same pixel of
        // the focus raster.
        let dpr = 2.0;
        let mut state = ViewportState::new(Size::new(400.0, 300.0));
        state.set_zoom(1.0);
        state.set_pan(Vec2::new(50.0, -20.0));
        state.snap();

        let overview = state.overview_placement();
        let view = state.focus_view_transform(dpr);
        let layout_css = Point::new(123.0, 77.0);
        let on_window = overview * layout_css;
        let on_focus = view.apply_point(Point::new(layout_css.x * dpr, layout_css.y * dpr));
        assert!(close(
            on_focus.to_vec2(),
            Vec2::new(on_window.x * dpr, on_window.y * dpr)
        ));
    }
}
