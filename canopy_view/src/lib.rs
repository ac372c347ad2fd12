// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy View: drag-zoom viewport state for a treemap with an overview and
//! a focus raster.
//!
//! The model is headless. It owns no surfaces, timers, or event listeners:
//! - [`ViewportState`] holds the target pan/zoom, the smoothed values that
//!   trail them, and the derived extent and edge offset.
//! - [`update`] applies one [`ViewportEvent`] (drag, wheel, resize) and
//!   re-clamps with [`keep_in_view`].
//! - [`SmoothingLoop`] advances the smoothed values one animation frame at a
//!   time and reports when it has gone [`Phase::Idle`].
//! - [`ViewportState::overview_placement`],
//!   [`ViewportState::focus_placement`], and
//!   [`ViewportState::focus_view_transform`] tell the host where to put the
//!   two rasters and how to render the focus one.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use canopy_view::{
//!     DeltaMode, DragZoomConfig, Phase, SmoothingLoop, ViewportEvent, ViewportState, update,
//! };
//!
//! let config = DragZoomConfig::default();
//! let mut state = ViewportState::new(Size::new(400.0, 100.0));
//! let mut smoothing = SmoothingLoop::new();
//!
//! // Scroll up by 100 pixels over the window centre.
//! let change = update(
//!     &mut state,
//!     ViewportEvent::Wheel { delta: -100.0, mode: DeltaMode::Pixel },
//!     &config,
//! );
//! assert!(change.viewport);
//! assert_eq!(state.view_size(), Size::new(800.0, 200.0));
//!
//! // Drive frames until the smoothed zoom catches up.
//! if smoothing.kick(&mut state, &config) {
//!     while smoothing.tick(&mut state, &config) == Phase::Animating {}
//! }
//! assert_eq!(state.smoothed_zoom(), state.zoom());
//! ```
//!
//! ## Coordinates
//!
//! Window-facing values (pointer, pan, placements) are in CSS pixels. The
//! layout and the focus raster are in device pixels;
//! [`ViewportState::focus_view_transform`] takes the device pixel ratio and
//! maps between the two.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod smoothing;
mod state;
mod transform;
mod update;

pub use config::DragZoomConfig;
pub use smoothing::{Phase, SmoothingLoop};
pub use state::{ViewportState, keep_in_view};
pub use transform::ViewTransform;
pub use update::{DeltaMode, Update, ViewportEvent, normalize_wheel_delta, update};
