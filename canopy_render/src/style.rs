// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;

use canopy_layout::LayoutConfig;
use kurbo::Insets;
use peniko::Color;

/// Drawing parameters shared by both rasters.
///
/// Lengths are in CSS pixels; the renderer multiplies them by
/// [`device_pixel_ratio`](Self::device_pixel_ratio).
#[derive(Clone, Debug, PartialEq)]
pub struct StyleConfig {
    /// Label font size.
    pub font_size: f64,
    /// Line height as a multiple of the font size. A cell shorter than one
    /// line gets no label.
    pub line_height: f64,
    /// Border width for a cell covering the whole surface.
    pub base_line_width: f64,
    /// Space between a cell's border and its label.
    pub text_margin: f64,
    /// Appended to truncated names.
    pub ellipsis: Cow<'static, str>,
    /// Color of names.
    pub text_color: Color,
    /// Color of the size/count suffix.
    pub secondary_text_color: Color,
    /// Padding inside each parent, passed on to the layout.
    pub padding: Insets,
    /// Ratio of device pixels to CSS pixels.
    pub device_pixel_ratio: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_size: 10.0,
            line_height: 2.0,
            base_line_width: 1.0,
            text_margin: 2.0,
            ellipsis: Cow::Borrowed("..."),
            text_color: Color::BLACK,
            secondary_text_color: Color::from_rgba8(0, 0, 0, 128),
            padding: Insets::uniform(5.0),
            device_pixel_ratio: 1.0,
        }
    }
}

impl StyleConfig {
    /// Sets the device pixel ratio.
    #[must_use]
    pub fn with_device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    /// Sets the layout padding.
    #[must_use]
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the label font size.
    #[must_use]
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// The device pixel ratio, or `1` if it is not a positive finite number.
    pub fn ratio(&self) -> f64 {
        if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        }
    }

    /// Layout parameters matching this style: the same padding, a label band
    /// of one font size, and the same device pixel ratio.
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig::default()
            .with_padding(self.padding)
            .with_label_band(self.font_size)
            .with_device_pixel_ratio(self.ratio())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_config_reserves_one_label_line() {
        let style = StyleConfig::default().with_device_pixel_ratio(2.0);
        let config = style.layout_config();
        assert_eq!(config.label_band, 10.0);
        assert_eq!(config.device_insets(), Insets::new(10.0, 30.0, 10.0, 10.0));
    }

    #[test]
    fn bad_ratio_falls_back_to_one() {
        let style = StyleConfig::default().with_device_pixel_ratio(f64::NAN);
        assert_eq!(style.ratio(), 1.0);
    }
}
