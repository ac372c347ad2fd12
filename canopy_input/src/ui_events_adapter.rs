// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation from [`ui_events`] pointer events.

use canopy_view::{DeltaMode, ViewportEvent};
use ui_events::ScrollDelta;
use ui_events::pointer::{PointerButton, PointerButtonEvent, PointerEvent};

use crate::controller::{DragZoomController, Response};

/// Maps a `ui-events` pointer event onto a [`ViewportEvent`].
///
/// - Primary-button (or button-less, e.g. touch) down/up start and end drags.
/// - Moves track the pointer in logical pixels.
/// - Cancel and leave end a drag.
/// - Vertical scroll becomes a wheel event in DOM sign convention: positive
///   values zoom out.
///
/// Returns `None` for events the view does not react to.
pub fn translate_pointer_event(event: &PointerEvent) -> Option<ViewportEvent> {
    match event {
        PointerEvent::Down(e) if is_primary(e) => {
            Some(ViewportEvent::PointerDown(e.state.logical_point()))
        }
        PointerEvent::Up(e) if is_primary(e) => Some(ViewportEvent::PointerUp),
        PointerEvent::Move(e) => Some(ViewportEvent::PointerMove(e.current.logical_point())),
        PointerEvent::Cancel(_) | PointerEvent::Leave(_) => Some(ViewportEvent::PointerLeave),
        PointerEvent::Scroll(e) => {
            let (delta, mode) = wheel_delta(&e.delta, e.state.scale_factor);
            (delta != 0.0).then_some(ViewportEvent::Wheel { delta, mode })
        }
        _ => None,
    }
}

fn is_primary(event: &PointerButtonEvent) -> bool {
    matches!(event.button, None | Some(PointerButton::Primary))
}

/// Vertical component of a scroll delta, with its unit, in DOM sign
/// convention.
pub(crate) fn wheel_delta(delta: &ScrollDelta, scale_factor: f64) -> (f64, DeltaMode) {
    match delta {
        ScrollDelta::PixelDelta(pos) => {
            let logical = pos.to_logical(scale_factor);
            let y: f64 = logical.y;
            (-y, DeltaMode::Pixel)
        }
        ScrollDelta::LineDelta(_, y) => (-f64::from(*y), DeltaMode::Line),
        ScrollDelta::PageDelta(_, y) => (-f64::from(*y), DeltaMode::Page),
    }
}

impl DragZoomController {
    /// Translates `event` with [`translate_pointer_event`] and handles it.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent, now: u64) -> Response {
        match translate_pointer_event(event) {
            Some(event) => self.handle(event, now),
            None => Response::NONE,
        }
    }
}
