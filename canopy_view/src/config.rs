// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tuning constants for drag, wheel zoom, and smoothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragZoomConfig {
    /// Fraction of the remaining distance covered per animation frame.
    pub lerp_speed: f64,
    /// Zoom change per pixel of wheel delta.
    pub zoom_speed: f64,
    /// Smoothed zoom is considered converged within this distance.
    pub zoom_epsilon: f64,
    /// Smoothed pan is considered converged within this many pixels.
    pub translate_epsilon: f64,
    /// Pixels per line for line-mode wheel deltas.
    pub line_height: f64,
    /// Quiet period, in milliseconds, before a viewport change is reported.
    pub debounce_ms: u64,
}

impl Default for DragZoomConfig {
    fn default() -> Self {
        Self {
            lerp_speed: 0.5,
            zoom_speed: 0.01,
            zoom_epsilon: 0.001,
            translate_epsilon: 1.0,
            line_height: 20.0,
            debounce_ms: 100,
        }
    }
}

impl DragZoomConfig {
    /// Sets the smoothing blend factor.
    #[must_use]
    pub fn with_lerp_speed(mut self, lerp_speed: f64) -> Self {
        self.lerp_speed = lerp_speed;
        self
    }

    /// Sets the zoom change per wheel pixel.
    #[must_use]
    pub fn with_zoom_speed(mut self, zoom_speed: f64) -> Self {
        self.zoom_speed = zoom_speed;
        self
    }

    /// Sets the pixel size of one wheel line.
    #[must_use]
    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    /// Sets the viewport-change debounce period.
    #[must_use]
    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }
}
