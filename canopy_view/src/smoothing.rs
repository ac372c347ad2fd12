// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::config::DragZoomConfig;
use crate::state::ViewportState;

/// Whether the smoothing loop wants another animation frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Smoothed values equal their targets; no frames are needed.
    #[default]
    Idle,
    /// Smoothed values are still approaching their targets.
    Animating,
}

/// Frame-driven exponential approach of the smoothed viewport values toward
/// their targets.
///
/// The loop never schedules anything itself. The host calls
/// [`kick`](Self::kick) after every input that changed the targets and
/// [`tick`](Self::tick) from each animation frame it requested, and stops
/// requesting frames once a call reports [`Phase::Idle`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SmoothingLoop {
    phase: Phase,
}

impl SmoothingLoop {
    /// Creates an idle loop.
    pub const fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` while frames are needed.
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Animating
    }

    /// Restarts the loop if it is idle by running one step immediately.
    ///
    /// While animating this does nothing: the next [`tick`](Self::tick) picks
    /// up the new targets. Returns `true` if the loop went from idle to
    /// animating, meaning the host must request a frame.
    pub fn kick(&mut self, state: &mut ViewportState, config: &DragZoomConfig) -> bool {
        if self.is_running() {
            return false;
        }
        self.tick(state, config) == Phase::Animating
    }

    /// Runs one smoothing step.
    ///
    /// Each smoothed value that is further than its epsilon from the target
    /// moves `lerp_speed` of the remaining distance; otherwise it snaps onto
    /// the target. The loop keeps animating while any value moved this step.
    pub fn tick(&mut self, state: &mut ViewportState, config: &DragZoomConfig) -> Phase {
        let zoom_moving = (state.smoothed_zoom - state.zoom()).abs() > config.zoom_epsilon;
        let delta = state.smoothed_pan - state.pan();
        let pan_moving =
            delta.x.abs() > config.translate_epsilon || delta.y.abs() > config.translate_epsilon;

        state.smoothed_zoom = if zoom_moving {
            lerp(state.smoothed_zoom, state.zoom(), config.lerp_speed)
        } else {
            state.zoom()
        };
        state.smoothed_pan = if pan_moving {
            Vec2::new(
                lerp(state.smoothed_pan.x, state.pan().x, config.lerp_speed),
                lerp(state.smoothed_pan.y, state.pan().y, config.lerp_speed),
            )
        } else {
            state.pan()
        };

        self.phase = if zoom_moving || pan_moving {
            Phase::Animating
        } else {
            Phase::Idle
        };
        self.phase
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}
