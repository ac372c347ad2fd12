// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

/// Mapping from layout space to surface pixels: `screen = layout * scale - offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Uniform scale, `1 + zoom`.
    pub scale: f64,
    /// Offset subtracted after scaling, in surface pixels.
    pub offset: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    /// The fully zoomed-out transform used for the overview.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset: Vec2::ZERO,
    };

    /// Creates a transform.
    pub const fn new(scale: f64, offset: Vec2) -> Self {
        Self { scale, offset }
    }

    /// Maps a layout-space point to the surface.
    pub fn apply_point(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale - self.offset.x,
            pt.y * self.scale - self.offset.y,
        )
    }

    /// Maps a layout-space rectangle to the surface.
    pub fn apply_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.apply_point(rect.origin()),
            self.apply_point(Point::new(rect.x1, rect.y1)),
        )
    }

    /// The same mapping as an affine transform.
    pub fn to_affine(&self) -> Affine {
        Affine::translate(-self.offset) * Affine::scale(self.scale)
    }
}
