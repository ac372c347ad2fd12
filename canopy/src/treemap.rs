// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_input::{CursorHint, DragZoomController, Response};
use canopy_layout::CensusNode;
use canopy_render::{CoarseTypeColorizer, Colorize, RasterSurface, StyleConfig};
use canopy_view::{DragZoomConfig, Phase, ViewportEvent, ViewportState};
use kurbo::{Affine, Size};

use crate::compositor::Compositor;

/// A complete treemap view: interaction controller plus compositor.
///
/// The host forwards input with [`handle_event`](Self::handle_event), calls
/// [`animation_frame`](Self::animation_frame) from every frame it was asked
/// to request, and calls [`poll`](Self::poll) at
/// [`next_deadline`](Self::next_deadline). After each of these it applies
/// [`overview_placement`](Self::overview_placement) and
/// [`focus_placement`](Self::focus_placement) to the two rasters.
#[derive(Debug)]
pub struct Treemap<S, C = CoarseTypeColorizer> {
    controller: DragZoomController,
    compositor: Compositor<S, C>,
}

impl<S: RasterSurface> Treemap<S> {
    /// Creates a view of `window` CSS pixels with the coarse-type colorizer.
    ///
    /// Both surfaces are resized to the window at the style's device pixel
    /// ratio.
    pub fn new(
        overview: S,
        focus: S,
        window: Size,
        style: StyleConfig,
        config: DragZoomConfig,
    ) -> Self {
        Self::with_colorizer(overview, focus, window, style, config, CoarseTypeColorizer)
    }
}

impl<S: RasterSurface, C: Colorize> Treemap<S, C> {
    /// Creates a view that fills cells using `colorize`.
    pub fn with_colorizer(
        overview: S,
        focus: S,
        window: Size,
        style: StyleConfig,
        config: DragZoomConfig,
        colorize: C,
    ) -> Self {
        let ratio = style.ratio();
        let controller = DragZoomController::new(window, config);
        let mut compositor = Compositor::with_colorizer(overview, focus, style, colorize);
        compositor.resize(window, ratio, controller.state());
        Self {
            controller,
            compositor,
        }
    }

    /// Replaces the tree and repaints both rasters.
    pub fn set_tree(&mut self, tree: CensusNode) {
        self.compositor.set_tree(tree, self.controller.state());
        self.controller.cancel_notification();
    }

    /// Handles a window resize or device pixel ratio change at `now`.
    ///
    /// The zoom is kept and the pan re-clamped. Both rasters are repainted
    /// immediately, so no viewport notification is left pending.
    pub fn resize(&mut self, window: Size, device_pixel_ratio: f64, now: u64) -> Response {
        let response = self.controller.handle(ViewportEvent::Resize(window), now);
        self.compositor.resize(window, device_pixel_ratio, self.controller.state());
        self.controller.cancel_notification();
        response
    }

    /// Handles one input event received at `now`.
    ///
    /// [`ViewportEvent::Resize`] keeps the current device pixel ratio.
    pub fn handle_event(&mut self, event: ViewportEvent, now: u64) -> Response {
        if let ViewportEvent::Resize(window) = event {
            let ratio = self.compositor.style().ratio();
            return self.resize(window, ratio, now);
        }
        self.controller.handle(event, now)
    }

    /// Handles a `ui-events` pointer event received at `now`.
    #[cfg(feature = "ui_events_adapter")]
    pub fn handle_pointer_event(
        &mut self,
        event: &ui_events::pointer::PointerEvent,
        now: u64,
    ) -> Response {
        self.controller.handle_pointer_event(event, now)
    }

    /// Advances smoothing by one frame. Request another frame while this
    /// returns [`Phase::Animating`].
    pub fn animation_frame(&mut self) -> Phase {
        self.controller.animation_frame()
    }

    /// Repaints the focus raster if the debounced viewport notification is
    /// due at `now`. Returns `true` if it was.
    pub fn poll(&mut self, now: u64) -> bool {
        if !self.controller.poll(now) {
            return false;
        }
        self.compositor.viewport_changed(self.controller.state());
        true
    }

    /// When [`poll`](Self::poll) should next be called.
    pub fn next_deadline(&self) -> Option<u64> {
        self.controller.next_deadline()
    }

    /// Current viewport state.
    pub fn viewport(&self) -> &ViewportState {
        self.controller.state()
    }

    /// Cursor the host should show.
    pub fn cursor(&self) -> CursorHint {
        self.controller.cursor()
    }

    /// The interaction controller.
    pub fn controller(&self) -> &DragZoomController {
        &self.controller
    }

    /// The compositor and its rasters.
    pub fn compositor(&self) -> &Compositor<S, C> {
        &self.compositor
    }

    /// Placement of the overview raster in the window, from the smoothed
    /// values.
    pub fn overview_placement(&self) -> Affine {
        self.controller.state().overview_placement()
    }

    /// Placement of the focus raster relative to the overview raster.
    pub fn focus_placement(&self) -> Affine {
        self.compositor.focus_placement()
    }
}
