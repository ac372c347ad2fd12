// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the layout arena: node identifiers, configuration, and
//! per-node geometry.

use core::ops::Range;

use alloc::string::String;
use kurbo::{Insets, Rect};

/// Identifier for a node in a [`Layout`](crate::Layout).
///
/// This is an index into the arena of one layout generation. It is only
/// meaningful for the layout that produced it; a new layout pass may assign
/// different ids.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The root of every non-empty layout.
    pub const ROOT: Self = Self(0);

    pub(crate) fn new(idx: usize) -> Self {
        Self(u32::try_from(idx).expect("canopy_layout: too many nodes for u32 NodeId"))
    }

    /// Position of this node in [`Layout::nodes`](crate::Layout::nodes).
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Parameters for a layout pass.
///
/// Lengths are in CSS pixels and are multiplied by
/// [`device_pixel_ratio`](Self::device_pixel_ratio) before being applied to
/// the full-resolution extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Inset applied to every parent before its children are placed.
    ///
    /// Uses [`kurbo::Insets`] field names: `x0` left, `y0` top, `x1` right,
    /// `y1` bottom.
    pub padding: Insets,
    /// Extra top inset reserving one line for the parent's own label.
    pub label_band: f64,
    /// Ratio of device pixels to CSS pixels.
    pub device_pixel_ratio: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: Insets::uniform(5.0),
            label_band: 10.0,
            device_pixel_ratio: 1.0,
        }
    }
}

impl LayoutConfig {
    /// Sets the padding.
    #[must_use]
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the padding from a CSS-style `[top, right, bottom, left]` array.
    #[must_use]
    pub fn with_padding_trbl(mut self, [top, right, bottom, left]: [f64; 4]) -> Self {
        self.padding = Insets::new(left, top, right, bottom);
        self
    }

    /// Sets the label band height.
    #[must_use]
    pub fn with_label_band(mut self, label_band: f64) -> Self {
        self.label_band = label_band;
        self
    }

    /// Sets the device pixel ratio.
    #[must_use]
    pub fn with_device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    /// Insets in device pixels, with the label band folded into the top.
    pub fn device_insets(&self) -> Insets {
        let ratio = if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        };
        let p = self.padding;
        Insets::new(
            p.x0 * ratio,
            (p.y0 + self.label_band) * ratio,
            p.x1 * ratio,
            p.y1 * ratio,
        )
    }
}

/// A census node annotated with the geometry of one layout generation.
#[derive(Clone, Debug, PartialEq)]
pub struct LaidOutNode {
    /// Name copied from the input node.
    pub name: String,
    /// Parent in the arena; `None` only for the root.
    pub parent: Option<NodeId>,
    /// Distance from the root.
    pub depth: u32,
    /// Position of this node among its siblings.
    pub sibling_index: u32,
    /// Number of siblings including this node (1 for the root).
    pub sibling_count: u32,
    /// Placed rectangle in full-resolution pixels.
    pub rect: Rect,
    /// Sum of leaf values in this subtree, ignoring non-positive leaves.
    pub aggregate_value: f64,
    /// Sum of leaf counts in this subtree.
    pub aggregate_count: u64,
    pub(crate) first_child: u32,
    pub(crate) child_count: u32,
}

impl LaidOutNode {
    /// Left edge.
    pub fn x(&self) -> f64 {
        self.rect.x0
    }

    /// Top edge.
    pub fn y(&self) -> f64 {
        self.rect.y0
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    /// `width * height`.
    pub fn area(&self) -> f64 {
        self.rect.area()
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.child_count == 0
    }

    /// Ids of the children of this node, in input order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = NodeId> + Clone + use<> {
        self.child_range().map(NodeId::new)
    }

    pub(crate) fn child_range(&self) -> Range<usize> {
        let start = self.first_child as usize;
        start..start + self.child_count as usize
    }
}
