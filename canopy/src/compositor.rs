// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use canopy_layout::{CensusNode, Layout, layout};
use canopy_render::{CoarseTypeColorizer, Colorize, RasterSurface, StyleConfig, render};
use canopy_view::{ViewTransform, ViewportState};
use kurbo::{Affine, Size};

/// Owns the overview and focus rasters and the current layout generation.
///
/// - A structural change ([`set_tree`](Self::set_tree),
///   [`resize`](Self::resize)) lays the tree out again at the overview's
///   device-pixel size and repaints both rasters.
/// - A viewport change ([`viewport_changed`](Self::viewport_changed))
///   repaints only the focus raster, from the cached layout, and updates its
///   placement.
///
/// The overview is painted once per generation and is only ever magnified
/// by its placement transform, so it looks soft while zoomed until the focus
/// raster catches up.
#[derive(Debug)]
pub struct Compositor<S, C = CoarseTypeColorizer> {
    overview: S,
    focus: S,
    style: StyleConfig,
    colorize: C,
    tree: Option<CensusNode>,
    layout: Arc<Layout>,
    generation: u64,
    focus_placement: Affine,
}

impl<S: RasterSurface> Compositor<S> {
    /// Creates a compositor with the coarse-type colorizer and no tree.
    pub fn new(overview: S, focus: S, style: StyleConfig) -> Self {
        Self::with_colorizer(overview, focus, style, CoarseTypeColorizer)
    }
}

impl<S: RasterSurface, C: Colorize> Compositor<S, C> {
    /// Creates a compositor that fills cells using `colorize`.
    pub fn with_colorizer(overview: S, focus: S, style: StyleConfig, colorize: C) -> Self {
        let size = overview.size();
        Self {
            overview,
            focus,
            style,
            colorize,
            tree: None,
            layout: Arc::new(Layout::empty(size)),
            generation: 0,
            focus_placement: Affine::IDENTITY,
        }
    }

    /// Replaces the tree and repaints everything.
    pub fn set_tree(&mut self, tree: CensusNode, viewport: &ViewportState) {
        self.tree = Some(tree);
        self.relayout(viewport);
    }

    /// Resizes both rasters to `window` CSS pixels at `device_pixel_ratio`
    /// and repaints everything.
    pub fn resize(&mut self, window: Size, device_pixel_ratio: f64, viewport: &ViewportState) {
        self.style.device_pixel_ratio = device_pixel_ratio;
        let device = window * self.style.ratio();
        self.overview.resize(device);
        self.focus.resize(device);
        self.relayout(viewport);
    }

    /// Lays the tree out again and repaints both rasters.
    ///
    /// Starts a new generation. Layouts handed out earlier by
    /// [`layout`](Self::layout) are left untouched.
    pub fn relayout(&mut self, viewport: &ViewportState) {
        let size = self.overview.size();
        let next = match &self.tree {
            Some(tree) => layout(tree, size, &self.style.layout_config()),
            None => Layout::empty(size),
        };
        self.layout = Arc::new(next);
        self.generation += 1;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            generation = self.generation,
            nodes = self.layout.len(),
            width = size.width,
            height = size.height,
            "structural re-render"
        );

        render(
            &mut self.overview,
            &self.layout,
            ViewTransform::IDENTITY,
            &self.style,
            &self.colorize,
        );
        self.viewport_changed(viewport);
    }

    /// Repaints the focus raster for `viewport` from the cached layout and
    /// updates its placement.
    pub fn viewport_changed(&mut self, viewport: &ViewportState) {
        let view = viewport.focus_view_transform(self.style.ratio());
        render(&mut self.focus, &self.layout, view, &self.style, &self.colorize);
        self.focus_placement = viewport.focus_placement();
    }

    /// The current layout generation.
    pub fn layout(&self) -> &Arc<Layout> {
        &self.layout
    }

    /// Number of layout passes so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The overview raster.
    pub fn overview(&self) -> &S {
        &self.overview
    }

    /// The focus raster.
    pub fn focus(&self) -> &S {
        &self.focus
    }

    /// Placement of the focus raster as of the last focus repaint; see
    /// [`ViewportState::focus_placement`].
    pub fn focus_placement(&self) -> Affine {
        self.focus_placement
    }

    /// The drawing style.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}
