// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::config::DragZoomConfig;
use crate::state::{ViewportState, keep_in_view};

/// Unit of a wheel delta.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeltaMode {
    /// Delta is in pixels.
    #[default]
    Pixel,
    /// Delta is in lines.
    Line,
    /// Delta is in pages.
    Page,
}

impl DeltaMode {
    /// Maps a DOM `WheelEvent.deltaMode` value. Unknown values are pixels.
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => Self::Line,
            2 => Self::Page,
            _ => Self::Pixel,
        }
    }
}

/// Converts a wheel delta into pixels.
///
/// Non-finite deltas become `0`.
pub fn normalize_wheel_delta(delta: f64, mode: DeltaMode, line_height: f64, page_height: f64) -> f64 {
    let pixels = match mode {
        DeltaMode::Pixel => delta,
        DeltaMode::Line => delta * line_height,
        DeltaMode::Page => delta * page_height,
    };
    if pixels.is_finite() { pixels } else { 0.0 }
}

/// Input understood by [`update`], in window coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportEvent {
    /// Primary pointer pressed: start dragging.
    PointerDown(Point),
    /// Pointer moved. Pans while dragging; always tracks the position.
    PointerMove(Point),
    /// Primary pointer released.
    PointerUp,
    /// Pointer left the surface or the gesture was cancelled.
    PointerLeave,
    /// Vertical wheel scroll. Positive deltas zoom out.
    Wheel {
        /// Scroll amount in `mode` units.
        delta: f64,
        /// Unit of `delta`.
        mode: DeltaMode,
    },
    /// The window was resized.
    Resize(Size),
}

/// What an [`update`] call changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Update {
    /// Target zoom or pan changed; the smoothing loop should be kicked and a
    /// viewport change reported.
    pub viewport: bool,
    /// Dragging started or stopped.
    pub dragging: bool,
}

impl Update {
    /// Nothing changed.
    pub const NONE: Self = Self {
        viewport: false,
        dragging: false,
    };

    /// Returns `true` if nothing changed.
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

/// Applies one input event to `state`.
///
/// Targets are re-clamped with [`keep_in_view`] after every change. The
/// smoothed values are untouched; advancing them is the job of a
/// [`SmoothingLoop`](crate::SmoothingLoop).
pub fn update(state: &mut ViewportState, event: ViewportEvent, config: &DragZoomConfig) -> Update {
    match event {
        ViewportEvent::PointerDown(position) => {
            state.set_pointer(position);
            set_dragging(state, true)
        }
        ViewportEvent::PointerUp | ViewportEvent::PointerLeave => set_dragging(state, false),
        ViewportEvent::PointerMove(position) => {
            let previous = state.pointer;
            state.set_pointer(position);
            if !state.dragging {
                return Update::NONE;
            }
            let before = state.pan();
            state.pan_unclamped(state.pointer - previous);
            keep_in_view(state);
            Update {
                viewport: state.pan() != before,
                dragging: false,
            }
        }
        ViewportEvent::Wheel { delta, mode } => {
            if state.dragging {
                return Update::NONE;
            }
            let pixels = normalize_wheel_delta(delta, mode, config.line_height, state.window().height);
            zoom_at_pointer(state, pixels * config.zoom_speed)
        }
        ViewportEvent::Resize(window) => {
            let before = (state.zoom(), state.pan(), state.window());
            state.set_window_size(window);
            Update {
                viewport: (state.zoom(), state.pan(), state.window()) != before,
                dragging: false,
            }
        }
    }
}

fn set_dragging(state: &mut ViewportState, dragging: bool) -> Update {
    let changed = state.dragging != dragging;
    state.dragging = dragging;
    Update {
        viewport: false,
        dragging: changed,
    }
}

/// Lowers the zoom by `amount` and shifts the pan so the content under the
/// pointer stays roughly in place.
fn zoom_at_pointer(state: &mut ViewportState, amount: f64) -> Update {
    let before = (state.zoom(), state.pan());
    let zoom = (state.zoom() - amount).max(0.0);
    if !zoom.is_finite() {
        return Update::NONE;
    }
    let grown = state.zoom_to(zoom);

    // Pointer position mapped to -1..1 from the window centre.
    let window = state.window();
    let range = |pos: f64, len: f64| if len > 0.0 { pos / len * 2.0 - 1.0 } else { 0.0 };
    let pointer = state.pointer();
    let shift = Vec2::new(
        grown.x * 0.5 * range(pointer.x, window.width),
        grown.y * 0.5 * range(pointer.y, window.height),
    );
    state.pan_unclamped(-shift);
    keep_in_view(state);

    Update {
        viewport: (state.zoom(), state.pan()) != before,
        dragging: false,
    }
}
