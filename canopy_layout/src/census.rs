// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

/// One node of the input census tree.
///
/// The tree is read-only input. Internal nodes are expected to carry the
/// aggregate of their descendants in [`value`](Self::value), but the layout
/// never relies on that: it sums leaf values itself.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct CensusNode {
    /// Display name, e.g. an object type or a coarse category.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Size of this node, e.g. bytes retained.
    #[cfg_attr(feature = "serde", serde(default, alias = "bytes"))]
    pub value: f64,
    /// Number of instances represented by this node.
    #[cfg_attr(feature = "serde", serde(default))]
    pub count: u64,
    /// Ordered children; empty for leaves.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub children: Vec<Self>,
}

impl CensusNode {
    /// Creates a leaf node.
    pub fn leaf(name: impl Into<String>, value: f64, count: u64) -> Self {
        Self {
            name: name.into(),
            value,
            count,
            children: Vec::new(),
        }
    }

    /// Creates an internal node with zero own value.
    pub fn branch(name: impl Into<String>, children: impl IntoIterator<Item = Self>) -> Self {
        Self {
            name: name.into(),
            value: 0.0,
            count: 0,
            children: children.into_iter().collect(),
        }
    }

    /// Replaces the children of this node.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        let mut len = 0;
        let mut stack: Vec<&Self> = Vec::from([self]);
        while let Some(node) = stack.pop() {
            len += 1;
            stack.extend(node.children.iter());
        }
        len
    }
}
