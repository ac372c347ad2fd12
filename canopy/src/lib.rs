// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy: an interactive treemap for memory census trees.
//!
//! A view is made of two rasters of the same size. The *overview* is
//! painted once per layout at full extent and then only transformed, so it
//! goes soft while magnified. The *focus* raster is repainted at full
//! resolution for the current pan and zoom whenever the viewport settles,
//! and placed so it lines up with the overview.
//!
//! - [`Compositor`] owns the rasters and the cached layout generation.
//! - [`Treemap`] wires a [`DragZoomController`](canopy_input::DragZoomController)
//!   to a compositor and is what a host embeds.
//!
//! The building blocks live in their own crates and are re-exported here:
//! [`canopy_layout`], [`canopy_view`], [`canopy_input`], and
//! [`canopy_render`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use canopy::{Treemap, layout::CensusNode, render::{RecordingSurface, StyleConfig}};
//! use canopy::view::{DeltaMode, DragZoomConfig, Phase, ViewportEvent};
//!
//! let window = Size::new(400.0, 100.0);
//! let mut map = Treemap::new(
//!     RecordingSurface::new(window),
//!     RecordingSurface::new(window),
//!     window,
//!     StyleConfig::default(),
//!     DragZoomConfig::default(),
//! );
//! map.set_tree(CensusNode::branch(
//!     "root",
//!     [CensusNode::leaf("objects", 3072.0, 3), CensusNode::leaf("strings", 1024.0, 9)],
//! ));
//!
//! // Zoom in over the centre.
//! let response = map.handle_event(ViewportEvent::Wheel { delta: -100.0, mode: DeltaMode::Pixel }, 0);
//! if response.request_frame {
//!     while map.animation_frame() == Phase::Animating {}
//! }
//!
//! // The focus raster is repainted once the debounce window has passed.
//! let due = map.next_deadline().unwrap();
//! assert!(map.poll(due));
//! assert_eq!(map.viewport().view_size(), Size::new(800.0, 200.0));
//! ```
//!
//! ## Features
//!
//! - `ui_events_adapter` (default): [`Treemap::handle_pointer_event`].
//! - `serde`: deserialize [`CensusNode`](canopy_layout::CensusNode) from
//!   census JSON.
//! - `tracing`: emit `tracing` events from layout, input, and compositing.

mod compositor;
mod treemap;

pub use canopy_input as input;
pub use canopy_layout as layout;
pub use canopy_render as render;
pub use canopy_view as view;

pub use compositor::Compositor;
pub use treemap::Treemap;
