// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Input: the drag-zoom interaction controller.
//!
//! [`DragZoomController`] turns pointer and wheel input into
//! [`ViewportState`](canopy_view::ViewportState) changes and tells the host
//! what to schedule:
//! - an animation frame whenever the smoothing loop starts
//!   ([`Response::request_frame`]), then one more per
//!   [`Phase::Animating`](canopy_view::Phase::Animating) frame;
//! - a wake-up at [`DragZoomController::next_deadline`] for the debounced
//!   "viewport changed" notification, which is where the focus raster gets
//!   re-rendered.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use canopy_input::{CursorHint, DragZoomController};
//! use canopy_view::{DeltaMode, DragZoomConfig, Phase, ViewportEvent};
//!
//! let mut controller = DragZoomController::new(Size::new(400.0, 100.0), DragZoomConfig::default());
//!
//! let wheel = ViewportEvent::Wheel { delta: -100.0, mode: DeltaMode::Pixel };
//! let response = controller.handle(wheel, 0);
//! assert!(response.request_frame);
//!
//! controller.handle(ViewportEvent::PointerDown(Point::new(200.0, 50.0)), 16);
//! assert_eq!(controller.cursor(), CursorHint::Grabbing);
//! controller.handle(ViewportEvent::PointerMove(Point::new(900.0, 50.0)), 32);
//! // Clamped to half the overflow of the 800px extent.
//! assert_eq!(controller.state().pan().x, 200.0);
//!
//! while controller.animation_frame() == Phase::Animating {}
//!
//! // One notification for the whole burst, 100ms after the last event.
//! assert_eq!(controller.next_deadline(), Some(132));
//! assert!(controller.poll(132));
//! ```
//!
//! ## Features
//!
//! - `ui_events_adapter` (default): [`translate_pointer_event`] and
//!   [`DragZoomController::handle_pointer_event`] for
//!   `ui_events::pointer::PointerEvent`.
//! - `tracing`: emit `tracing` events when smoothing starts and settles and
//!   when a viewport notification fires.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod debounce;
#[cfg(feature = "ui_events_adapter")]
mod ui_events_adapter;

pub use controller::{CursorHint, DragZoomController, Response};
pub use debounce::Debouncer;
#[cfg(feature = "ui_events_adapter")]
pub use ui_events_adapter::translate_pointer_event;
