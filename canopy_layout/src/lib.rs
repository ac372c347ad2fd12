// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Layout: squarified treemap layout over census trees.
//!
//! This crate turns a hierarchical value tree ([`CensusNode`], typically a
//! memory census of bytes and counts per object type) into a flat,
//! depth-ordered arena of positioned rectangles ([`Layout`]).
//!
//! - Every input node produces exactly one [`LaidOutNode`].
//! - Nodes are stored breadth-first, so depth is non-decreasing and every
//!   parent precedes its children. Siblings are contiguous.
//! - Parents are referenced by [`NodeId`] (an index into the arena) rather
//!   than by pointer. A layout is never mutated after it is built; a new
//!   pass always produces a fresh [`Layout`].
//! - The root is part of the arena for traversal, but has no parent and is
//!   never drawn. See [`Layout::drawable`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use canopy_layout::{CensusNode, LayoutConfig, layout};
//!
//! let tree = CensusNode::branch(
//!     "root",
//!     [CensusNode::leaf("objects", 300.0, 3), CensusNode::leaf("strings", 100.0, 9)],
//! );
//!
//! let config = LayoutConfig::default().with_padding(kurbo::Insets::ZERO).with_label_band(0.0);
//! let nodes = layout(&tree, Size::new(400.0, 100.0), &config);
//!
//! let widths: Vec<f64> = nodes.drawable().map(|(_, n)| n.width()).collect();
//! assert_eq!(widths, [300.0, 100.0]);
//! ```
//!
//! ## Degenerate input
//!
//! Zero or negative values are not errors. A node without positive value
//! collapses to a zero-sized rectangle at the origin of its parent's
//! content area. A tree whose total value is not positive produces an empty
//! [`Layout`].
//!
//! ## Features
//!
//! - `serde`: derive `Deserialize`/`Serialize` for [`CensusNode`], accepting
//!   the census field name `bytes` for [`CensusNode::value`].
//! - `tracing`: emit `tracing` events describing each layout pass.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod census;
mod layout;
mod squarify;
mod types;

pub use census::CensusNode;
pub use layout::{Ancestors, Layout, layout};
pub use types::{LaidOutNode, LayoutConfig, NodeId};
