// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_view::{
    DragZoomConfig, Phase, SmoothingLoop, ViewportEvent, ViewportState, update,
};
use kurbo::Size;

use crate::debounce::Debouncer;

/// Pointer cursor the host should show over the view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorHint {
    /// Idle; the view can be grabbed.
    #[default]
    Grab,
    /// A drag is in progress.
    Grabbing,
}

/// What the host has to do after [`DragZoomController::handle`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// The target pan or zoom changed. A viewport notification is now
    /// pending; see [`DragZoomController::poll`].
    pub viewport: bool,
    /// The smoothing loop just started; request an animation frame and call
    /// [`DragZoomController::animation_frame`] from it.
    pub request_frame: bool,
    /// [`DragZoomController::cursor`] changed.
    pub cursor: bool,
}

impl Response {
    /// Nothing to do.
    pub const NONE: Self = Self {
        viewport: false,
        request_frame: false,
        cursor: false,
    };
}

/// Binds drag and wheel input to a [`ViewportState`].
///
/// The controller owns the state, the smoothing loop, and a trailing-edge
/// [`Debouncer`] for "viewport changed" notifications. It never schedules
/// anything itself: [`handle`](Self::handle) says whether to request an
/// animation frame, and the host polls for the debounced notification at
/// [`next_deadline`](Self::next_deadline).
///
/// Time is a caller-supplied monotonic millisecond clock.
#[derive(Clone, Debug)]
pub struct DragZoomController {
    config: DragZoomConfig,
    state: ViewportState,
    smoothing: SmoothingLoop,
    notify: Debouncer,
}

impl DragZoomController {
    /// Creates a controller for a window of `window` CSS pixels.
    pub fn new(window: Size, config: DragZoomConfig) -> Self {
        Self {
            notify: Debouncer::new(config.debounce_ms),
            config,
            state: ViewportState::new(window),
            smoothing: SmoothingLoop::new(),
        }
    }

    /// The tuning constants in use.
    pub fn config(&self) -> &DragZoomConfig {
        &self.config
    }

    /// Current viewport state.
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    /// Cursor matching the drag state.
    pub fn cursor(&self) -> CursorHint {
        if self.state.is_dragging() {
            CursorHint::Grabbing
        } else {
            CursorHint::Grab
        }
    }

    /// Returns `true` while the smoothing loop wants frames.
    pub fn is_animating(&self) -> bool {
        self.smoothing.is_running()
    }

    /// Applies one input event received at `now`.
    pub fn handle(&mut self, event: ViewportEvent, now: u64) -> Response {
        let change = update(&mut self.state, event, &self.config);
        let mut response = Response {
            cursor: change.dragging,
            ..Response::NONE
        };
        if change.viewport {
            self.notify.call(now);
            response.viewport = true;
            response.request_frame = self.smoothing.kick(&mut self.state, &self.config);
            #[cfg(feature = "tracing")]
            if response.request_frame {
                tracing::trace!(zoom = self.state.zoom(), "smoothing started");
            }
        }
        response
    }

    /// Advances the smoothed values by one frame.
    ///
    /// Keep requesting frames while this returns [`Phase::Animating`]. Once
    /// it returns [`Phase::Idle`] the loop is stopped until the next input.
    pub fn animation_frame(&mut self) -> Phase {
        let phase = self.smoothing.tick(&mut self.state, &self.config);
        #[cfg(feature = "tracing")]
        if phase == Phase::Idle {
            tracing::trace!(zoom = self.state.zoom(), "smoothing settled");
        }
        phase
    }

    /// Returns `true` once the debounced viewport notification is due.
    ///
    /// Several rapid input events produce a single `true`.
    pub fn poll(&mut self, now: u64) -> bool {
        let due = self.notify.poll(now);
        #[cfg(feature = "tracing")]
        if due {
            tracing::debug!(
                zoom = self.state.zoom(),
                pan_x = self.state.pan().x,
                pan_y = self.state.pan().y,
                "viewport changed"
            );
        }
        due
    }

    /// When [`poll`](Self::poll) should next be called, if a notification is
    /// pending.
    pub fn next_deadline(&self) -> Option<u64> {
        self.notify.deadline()
    }

    /// Drops a pending viewport notification, e.g. because the host has
    /// just redrawn everything anyway.
    pub fn cancel_notification(&mut self) {
        self.notify.cancel();
    }
}
