// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_layout::{LaidOutNode, Layout, NodeId};
use peniko::Color;
use peniko::color::{AlphaColor, Srgb};

/// A color as hue, saturation, and lightness, each in `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// Hue as a fraction of a full turn.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Lightness.
    pub l: f64,
}

impl Hsl {
    /// Creates a color, clamping each component into `0..=1`.
    ///
    /// Non-finite components become `0`.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        let unit = |v: f64| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };
        Self {
            h: unit(h),
            s: unit(s),
            l: unit(l),
        }
    }

    /// The same hue and saturation at half the lightness. Used for strokes.
    #[must_use]
    pub fn darken(self) -> Self {
        Self {
            l: self.l * 0.5,
            ..self
        }
    }

    /// Converts to an opaque sRGB color.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Color components are stored as f32; the precision loss is invisible."
    )]
    pub fn to_color(self) -> Color {
        AlphaColor::<peniko::color::Hsl>::new([
            (self.h * 360.0) as f32,
            (self.s * 100.0) as f32,
            (self.l * 100.0) as f32,
            1.0,
        ])
        .convert::<Srgb>()
    }
}

/// Chooses the fill color of a node.
///
/// Implemented for any `Fn(&Layout, NodeId) -> Hsl`.
pub trait Colorize {
    /// Color of `id`. The node's ancestry is available through `layout`.
    fn colorize(&self, layout: &Layout, id: NodeId) -> Hsl;
}

impl<F> Colorize for F
where
    F: Fn(&Layout, NodeId) -> Hsl,
{
    fn colorize(&self, layout: &Layout, id: NodeId) -> Hsl {
        self(layout, id)
    }
}

/// Top-level categories of a memory census, in hue order.
pub const COARSE_TYPES: [&str; 4] = ["objects", "other", "strings", "scripts"];

/// Colors nodes by coarse type and depth.
///
/// - Hue is `0.5 + index / 12`, where `index` is the position in
///   [`COARSE_TYPES`] of the nearest ancestor-or-self named like a coarse
///   type, or of `"other"` if there is none.
/// - Saturation is a constant `0.6`.
/// - Lightness starts at `0.9` and drops by `0.1` per level of depth.
#[derive(Clone, Copy, Debug, Default)]
pub struct CoarseTypeColorizer;

impl CoarseTypeColorizer {
    const HUE: f64 = 0.5;
    const SATURATION: f64 = 0.6;
    const LIGHTNESS: f64 = 0.9;
    const TYPE_FACTOR: f64 = 12.0;
    const DEPTH_FACTOR: f64 = -10.0;
    const OTHER: usize = 1;

    /// Index into [`COARSE_TYPES`] for `id`.
    ///
    /// The root's own name is never consulted.
    pub fn coarse_type_index(layout: &Layout, id: NodeId) -> usize {
        let Some(node) = layout.get(id) else {
            return Self::OTHER;
        };
        core::iter::once((id, node))
            .chain(layout.ancestors(id))
            .take_while(|(_, n)| n.parent.is_some())
            .find_map(|(_, n)| COARSE_TYPES.iter().position(|t| *t == n.name))
            .unwrap_or(Self::OTHER)
    }

    /// Position of `node` among its siblings, in `0..1`.
    ///
    /// Not used by [`Colorize`]; available for callers that want to vary
    /// siblings.
    pub fn sibling_shade(node: &LaidOutNode) -> f64 {
        if node.sibling_count == 0 {
            0.0
        } else {
            f64::from(node.sibling_index) / f64::from(node.sibling_count)
        }
    }
}

impl Colorize for CoarseTypeColorizer {
    fn colorize(&self, layout: &Layout, id: NodeId) -> Hsl {
        let index = Self::coarse_type_index(layout, id) as f64;
        let depth = layout.get(id).map_or(0, |n| n.depth);
        let h = (Self::HUE + index / Self::TYPE_FACTOR).min(1.0);
        let l = Self::LIGHTNESS + (f64::from(depth) / Self::DEPTH_FACTOR).min(1.0);
        Hsl::new(h, Self::SATURATION, l.min(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_layout::{CensusNode, LayoutConfig, layout};
    use kurbo::Size;

    fn census() -> Layout {
        let tree = CensusNode::branch(
            "strings",
            [
                CensusNode::branch(
                    "strings",
                    [CensusNode::branch("JSString", [CensusNode::leaf("x", 1.0, 1)])],
                ),
                CensusNode::branch("scripts", [CensusNode::leaf("y", 1.0, 1)]),
                CensusNode::leaf("unknown", 1.0, 1),
            ],
        );
        layout(&tree, Size::new(300.0, 300.0), &LayoutConfig::default())
    }

    fn find(layout: &Layout, name: &str) -> NodeId {
        layout.drawable().find(|(_, n)| n.name == name).unwrap().0
    }

    #[test]
    fn coarse_type_comes_from_nearest_named_ancestor() {
        let out = census();
        assert_eq!(CoarseTypeColorizer::coarse_type_index(&out, find(&out, "x")), 2);
        assert_eq!(CoarseTypeColorizer::coarse_type_index(&out, find(&out, "y")), 3);
        // The root is named "strings" but never counts.
        assert_eq!(CoarseTypeColorizer::coarse_type_index(&out, find(&out, "unknown")), 1);
        assert_eq!(CoarseTypeColorizer::coarse_type_index(&out, NodeId::ROOT), 1);
    }

    #[test]
    fn hue_follows_type_and_lightness_follows_depth() {
        let out = census();
        let x = CoarseTypeColorizer.colorize(&out, find(&out, "x"));
        assert!((x.h - (0.5 + 2.0 / 12.0)).abs() < 1e-12);
        assert_eq!(x.s, 0.6);
        // Depth 3.
        assert!((x.l - 0.6).abs() < 1e-12);

        let strings = CoarseTypeColorizer.colorize(&out, find(&out, "strings"));
        assert!((strings.l - 0.8).abs() < 1e-12);
    }

    #[test]
    fn closures_colorize() {
        let out = census();
        let flat = |_: &Layout, _: NodeId| Hsl::new(0.25, 0.5, 0.5);
        assert_eq!(flat.colorize(&out, NodeId::ROOT), Hsl::new(0.25, 0.5, 0.5));
    }

    #[test]
    fn hsl_clamps_and_darkens() {
        let c = Hsl::new(1.5, -1.0, f64::NAN);
        assert_eq!(c, Hsl::new(1.0, 0.0, 0.0));
        assert_eq!(Hsl::new(0.5, 0.6, 0.8).darken().l, 0.4);
    }

    #[test]
    fn hsl_converts_to_srgb() {
        let white = Hsl::new(0.0, 0.0, 1.0).to_color().to_rgba8();
        assert_eq!((white.r, white.g, white.b, white.a), (255, 255, 255, 255));
        let red = Hsl::new(0.0, 1.0, 0.5).to_color().to_rgba8();
        assert_eq!((red.r, red.g, red.b), (255, 0, 0));
    }
}
