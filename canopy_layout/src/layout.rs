// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Index;

use kurbo::{Insets, Rect, Size};

use crate::census::CensusNode;
use crate::squarify::squarify;
use crate::types::{LaidOutNode, LayoutConfig, NodeId};

/// One generation of laid-out nodes.
///
/// Nodes are stored breadth-first: the root is at index 0, depth never
/// decreases along [`nodes`](Self::nodes), and the children of every node
/// occupy a contiguous range in input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    nodes: Vec<LaidOutNode>,
    size: Size,
}

impl Layout {
    /// A layout with no nodes.
    pub fn empty(size: Size) -> Self {
        Self {
            nodes: Vec::new(),
            size,
        }
    }

    /// All nodes, root first.
    pub fn nodes(&self) -> &[LaidOutNode] {
        &self.nodes
    }

    /// Returns the node for `id`, if it belongs to this layout.
    pub fn get(&self, id: NodeId) -> Option<&LaidOutNode> {
        self.nodes.get(id.index())
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The full-resolution extent this layout was computed for.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The root node id, or `None` for an empty layout.
    pub fn root(&self) -> Option<NodeId> {
        (!self.nodes.is_empty()).then_some(NodeId::ROOT)
    }

    /// Children of `id` in input order. Empty for leaves and unknown ids.
    pub fn children(&self, id: NodeId) -> impl ExactSizeIterator<Item = NodeId> + Clone + use<> {
        let range = self.get(id).map_or(0..0, LaidOutNode::child_range);
        range.map(NodeId::new)
    }

    /// Parent of `id`. `None` for the root and unknown ids.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Iterates the ancestors of `id`, nearest first, ending at the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            layout: self,
            next: self.parent(id),
        }
    }

    /// Every node that should be painted, in depth order.
    ///
    /// This is every node except the root.
    pub fn drawable(&self) -> impl Iterator<Item = (NodeId, &LaidOutNode)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.parent.is_some())
            .map(|(i, n)| (NodeId::new(i), n))
    }

    /// Aggregate value of the whole tree. Zero for an empty layout.
    pub fn total_value(&self) -> f64 {
        self.nodes.first().map_or(0.0, |n| n.aggregate_value)
    }
}

impl Index<NodeId> for Layout {
    type Output = LaidOutNode;

    fn index(&self, id: NodeId) -> &LaidOutNode {
        &self.nodes[id.index()]
    }
}

/// Iterator over the ancestors of a node. See [`Layout::ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    layout: &'a Layout,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = (NodeId, &'a LaidOutNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.layout.get(id)?;
        self.next = node.parent;
        Some((id, node))
    }
}

/// Lays out `root` into a rectangle of `size` full-resolution pixels.
///
/// Each node's children share its content area (its rectangle minus
/// [`LayoutConfig::device_insets`]) in proportion to their aggregate value.
/// Leaf values that are zero, negative, or not finite count as zero.
/// Internal nodes are sized from the sum of their children; their own
/// `value` is not consulted.
///
/// Returns an empty layout when the tree has no positive value.
pub fn layout(root: &CensusNode, size: Size, config: &LayoutConfig) -> Layout {
    let (mut nodes, sources) = flatten(root);
    aggregate(&mut nodes, &sources);

    let total = nodes[0].aggregate_value;
    if !total.is_finite() || total <= 0.0 {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            nodes = nodes.len(),
            total,
            "canopy_layout: tree has no positive value, empty layout"
        );
        return Layout::empty(size);
    }

    let insets = config.device_insets();
    nodes[0].rect = Rect::from_origin_size((0.0, 0.0), size);

    let mut order: Vec<usize> = Vec::new();
    let mut areas: Vec<f64> = Vec::new();
    let mut placed: Vec<Rect> = Vec::new();
    for i in 0..nodes.len() {
        let range = nodes[i].child_range();
        if range.is_empty() {
            continue;
        }
        let content = content_rect(nodes[i].rect, insets);
        let parent_value = nodes[i].aggregate_value;
        let empty = Rect::from_origin_size(content.origin(), Size::ZERO);

        order.clear();
        order.extend(range.filter(|&c| nodes[c].aggregate_value > 0.0));
        order.sort_by(|&a, &b| nodes[b].aggregate_value.total_cmp(&nodes[a].aggregate_value));

        for c in nodes[i].child_range() {
            nodes[c].rect = empty;
        }
        if order.is_empty() || parent_value <= 0.0 {
            continue;
        }

        let scale = content.area() / parent_value;
        areas.clear();
        areas.extend(order.iter().map(|&c| nodes[c].aggregate_value * scale));
        squarify(&areas, content, &mut placed);
        for (&c, &rect) in order.iter().zip(placed.iter()) {
            nodes[c].rect = rect;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        nodes = nodes.len(),
        width = size.width,
        height = size.height,
        total,
        "canopy_layout: layout pass"
    );

    Layout { nodes, size }
}

/// Flattens the tree breadth-first.
///
/// Returns the arena with placeholder geometry and, at the same indices, the
/// census node each entry came from.
fn flatten(root: &CensusNode) -> (Vec<LaidOutNode>, Vec<&CensusNode>) {
    let capacity = root.subtree_len();
    let mut nodes: Vec<LaidOutNode> = Vec::with_capacity(capacity);
    let mut sources: Vec<&CensusNode> = Vec::with_capacity(capacity);

    nodes.push(placeholder(root, None, 0, 0, 1));
    sources.push(root);

    let mut i = 0;
    while i < nodes.len() {
        let src = sources[i];
        let first = nodes.len();
        let count = src.children.len();
        let depth = nodes[i].depth + 1;
        for (k, child) in src.children.iter().enumerate() {
            nodes.push(placeholder(
                child,
                Some(NodeId::new(i)),
                depth,
                to_u32(k),
                to_u32(count),
            ));
            sources.push(child);
        }
        nodes[i].first_child = to_u32(first);
        nodes[i].child_count = to_u32(count);
        i += 1;
    }
    (nodes, sources)
}

fn placeholder(
    src: &CensusNode,
    parent: Option<NodeId>,
    depth: u32,
    sibling_index: u32,
    sibling_count: u32,
) -> LaidOutNode {
    LaidOutNode {
        name: src.name.clone(),
        parent,
        depth,
        sibling_index,
        sibling_count,
        rect: Rect::ZERO,
        aggregate_value: 0.0,
        aggregate_count: 0,
        first_child: 0,
        child_count: 0,
    }
}

/// Fills in subtree totals, children before parents.
fn aggregate(nodes: &mut [LaidOutNode], sources: &[&CensusNode]) {
    for i in (0..nodes.len()).rev() {
        let range = nodes[i].child_range();
        if range.is_empty() {
            let value = sources[i].value;
            nodes[i].aggregate_value = if value.is_finite() && value > 0.0 {
                value
            } else {
                0.0
            };
            nodes[i].aggregate_count = sources[i].count;
        } else {
            let (value, count) = nodes[range].iter().fold((0.0, 0_u64), |(v, c), n| {
                (v + n.aggregate_value, c.saturating_add(n.aggregate_count))
            });
            nodes[i].aggregate_value = value;
            nodes[i].aggregate_count = count;
        }
    }
}

/// `rect` shrunk by `insets`, collapsing to an edge instead of inverting.
fn content_rect(rect: Rect, insets: Insets) -> Rect {
    let x0 = (rect.x0 + insets.x0).min(rect.x1);
    let y0 = (rect.y0 + insets.y0).min(rect.y1);
    let x1 = (rect.x1 - insets.x1).max(x0);
    let y1 = (rect.y1 - insets.y1).max(y0);
    Rect::new(x0, y0, x1, y1)
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).expect("canopy_layout: too many nodes for u32 indices")
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn bare() -> LayoutConfig {
        LayoutConfig::default()
            .with_padding(Insets::ZERO)
            .with_label_band(0.0)
    }

    fn names(layout: &Layout) -> Vec<&str> {
        layout.nodes().iter().map(|n| n.name.as_str()).collect()
    }

    #[test]
    fn two_children_slice_along_wider_axis() {
        let tree = CensusNode::branch(
            "root",
            [CensusNode::leaf("A", 300.0, 1), CensusNode::leaf("B", 100.0, 1)],
        );
        let out = layout(&tree, Size::new(400.0, 100.0), &bare());
        assert_eq!(out.len(), 3);
        let a = &out.nodes()[1];
        let b = &out.nodes()[2];
        assert_eq!((a.x(), a.y(), a.width(), a.height()), (0.0, 0.0, 300.0, 100.0));
        assert_eq!((b.x(), b.y(), b.width(), b.height()), (300.0, 0.0, 100.0, 100.0));
        assert_eq!(out.total_value(), 400.0);
    }

    #[test]
    fn children_keep_input_order() {
        let tree = CensusNode::branch(
            "root",
            [CensusNode::leaf("small", 100.0, 1), CensusNode::leaf("big", 300.0, 1)],
        );
        let out = layout(&tree, Size::new(400.0, 100.0), &bare());
        assert_eq!(names(&out), ["root", "small", "big"]);
        // Placement still starts with the largest child.
        assert_eq!(out.nodes()[2].rect, Rect::new(0.0, 0.0, 300.0, 100.0));
        assert_eq!(out.nodes()[1].rect, Rect::new(300.0, 0.0, 400.0, 100.0));
    }

    #[test]
    fn padding_and_label_band_inset_the_content() {
        let tree = CensusNode::branch("root", [CensusNode::leaf("only", 1.0, 1)]);
        let out = layout(&tree, Size::new(100.0, 100.0), &LayoutConfig::default());
        assert_eq!(out.nodes()[1].rect, Rect::new(5.0, 15.0, 95.0, 95.0));

        let hidpi = LayoutConfig::default().with_device_pixel_ratio(2.0);
        let out = layout(&tree, Size::new(200.0, 200.0), &hidpi);
        assert_eq!(out.nodes()[1].rect, Rect::new(10.0, 30.0, 190.0, 190.0));
    }

    #[test]
    fn trbl_padding_maps_to_insets() {
        let config = LayoutConfig::default()
            .with_padding_trbl([1.0, 2.0, 3.0, 4.0])
            .with_label_band(0.0);
        let tree = CensusNode::branch("root", [CensusNode::leaf("only", 1.0, 1)]);
        let out = layout(&tree, Size::new(100.0, 100.0), &config);
        assert_eq!(out.nodes()[1].rect, Rect::new(4.0, 1.0, 98.0, 97.0));
    }

    #[test]
    fn oversized_insets_collapse_instead_of_inverting() {
        let config = LayoutConfig::default().with_padding(Insets::uniform(80.0));
        let tree = CensusNode::branch("root", [CensusNode::leaf("only", 1.0, 1)]);
        let out = layout(&tree, Size::new(100.0, 100.0), &config);
        let child = &out.nodes()[1];
        assert!(child.width() >= 0.0 && child.height() >= 0.0);
        assert_eq!(child.area(), 0.0);
    }

    #[test]
    fn non_positive_children_degenerate_to_points() {
        let tree = CensusNode::branch(
            "root",
            [
                CensusNode::leaf("zero", 0.0, 1),
                CensusNode::leaf("real", 10.0, 1),
                CensusNode::leaf("negative", -5.0, 1),
            ],
        );
        let out = layout(&tree, Size::new(50.0, 50.0), &bare());
        assert_eq!(out.nodes()[1].rect, Rect::ZERO);
        assert_eq!(out.nodes()[3].rect, Rect::ZERO);
        assert_eq!(out.nodes()[2].rect, Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(out.total_value(), 10.0);
    }

    #[test]
    fn zero_total_yields_empty_layout() {
        let tree = CensusNode::branch(
            "root",
            [CensusNode::leaf("a", 0.0, 1), CensusNode::leaf("b", -1.0, 1)],
        );
        let out = layout(&tree, Size::new(50.0, 50.0), &bare());
        assert!(out.is_empty());
        assert_eq!(out.root(), None);
        assert_eq!(out.drawable().count(), 0);
        assert_eq!(out.total_value(), 0.0);

        let lone = CensusNode::leaf("root", f64::NAN, 0);
        assert!(layout(&lone, Size::new(50.0, 50.0), &bare()).is_empty());
    }

    #[test]
    fn internal_values_are_recomputed_from_leaves() {
        let mut tree = CensusNode::branch(
            "root",
            [
                CensusNode::branch("objects", [CensusNode::leaf("Array", 30.0, 3)]),
                CensusNode::leaf("strings", 10.0, 7),
            ],
        );
        tree.children[0].value = 9999.0;
        let out = layout(&tree, Size::new(40.0, 10.0), &bare());
        assert_eq!(out.nodes()[1].aggregate_value, 30.0);
        assert_eq!(out.nodes()[0].aggregate_count, 10);
        assert!((out.nodes()[1].area() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn arena_is_breadth_first_with_contiguous_siblings() {
        let tree = CensusNode::branch(
            "root",
            [
                CensusNode::branch(
                    "a",
                    [CensusNode::leaf("a1", 1.0, 1), CensusNode::leaf("a2", 1.0, 1)],
                ),
                CensusNode::branch("b", [CensusNode::leaf("b1", 1.0, 1)]),
            ],
        );
        let out = layout(&tree, Size::new(100.0, 100.0), &bare());
        assert_eq!(names(&out), ["root", "a", "b", "a1", "a2", "b1"]);
        let depths: Vec<u32> = out.nodes().iter().map(|n| n.depth).collect();
        assert_eq!(depths, [0, 1, 1, 2, 2, 2]);

        let a = NodeId::new(1);
        let kids: Vec<NodeId> = out.children(a).collect();
        assert_eq!(kids, [NodeId::new(3), NodeId::new(4)]);
        assert_eq!(out[NodeId::new(4)].sibling_index, 1);
        assert_eq!(out[NodeId::new(4)].sibling_count, 2);
        assert_eq!(out.parent(NodeId::new(5)), Some(NodeId::new(2)));
        assert_eq!(out.parent(NodeId::ROOT), None);
        assert_eq!(out.children(NodeId::new(99)).len(), 0);
    }

    #[test]
    fn ancestors_walk_to_root() {
        let tree = CensusNode::branch(
            "root",
            [CensusNode::branch(
                "objects",
                [CensusNode::branch("Array", [CensusNode::leaf("x", 1.0, 1)])],
            )],
        );
        let out = layout(&tree, Size::new(100.0, 100.0), &bare());
        let leaf = NodeId::new(3);
        let chain: Vec<&str> = out.ancestors(leaf).map(|(_, n)| n.name.as_str()).collect();
        assert_eq!(chain, ["Array", "objects", "root"]);
        assert_eq!(out.ancestors(NodeId::ROOT).count(), 0);
    }

    #[test]
    fn drawable_skips_root() {
        let tree = CensusNode::branch(
            "root",
            vec![CensusNode::leaf("a", 1.0, 1), CensusNode::leaf("b", 1.0, 1)],
        );
        let out = layout(&tree, Size::new(10.0, 10.0), &bare());
        let drawn: Vec<&str> = out.drawable().map(|(_, n)| n.name.as_str()).collect();
        assert_eq!(drawn, ["a", "b"]);
    }
}
