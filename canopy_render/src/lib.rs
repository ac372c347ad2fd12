// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Render: paints a treemap [`Layout`](canopy_layout::Layout) onto a
//! raster surface.
//!
//! The same [`render`] call draws both rasters of a Canopy view. The
//! overview is rendered once per layout with [`ViewTransform::IDENTITY`];
//! the focus raster is re-rendered whenever the viewport settles, with the
//! transform from [`canopy_view::ViewportState::focus_view_transform`].
//!
//! Drawing goes through [`RasterSurface`], a deliberately small trait:
//! clear, fill and stroke rectangles, measure and fill text. Hosts implement
//! it over whatever 2D API they have. [`RecordingSurface`] records the calls
//! instead of drawing and measures text with a fixed advance, which is what
//! the tests here use.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use canopy_layout::{CensusNode, layout};
//! use canopy_render::{CoarseTypeColorizer, RecordingSurface, StyleConfig, render};
//! use canopy_view::ViewTransform;
//!
//! let tree = CensusNode::branch(
//!     "root",
//!     [CensusNode::leaf("objects", 3072.0, 3), CensusNode::leaf("strings", 1024.0, 9)],
//! );
//! let style = StyleConfig::default();
//! let size = Size::new(400.0, 200.0);
//! let nodes = layout(&tree, size, &style.layout_config());
//!
//! let mut surface = RecordingSurface::new(size);
//! render(&mut surface, &nodes, ViewTransform::IDENTITY, &style, &CoarseTypeColorizer);
//! assert_eq!(surface.filled_rects().count(), 2);
//! assert!(surface.texts().any(|t| t == "objects"));
//! ```
//!
//! ## Labels
//!
//! A cell taller than one line gets a label, fitted by [`fit_label`]: the
//! name followed by a size and count (`Function 608KB 9083 count`), else the
//! name alone, else the name halved with an ellipsis until it fits
//! ([`truncate_label`]). Sizes are formatted by [`format_bytes`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod color;
mod render;
mod style;
mod surface;
mod text;

pub use canopy_view::ViewTransform;
pub use color::{COARSE_TYPES, CoarseTypeColorizer, Colorize, Hsl};
pub use render::{border_width, render};
pub use style::StyleConfig;
pub use surface::{RasterSurface, RecordingSurface, SurfaceOp};
pub use text::{FittedLabel, LabelDetail, fit_label, format_bytes, truncate_label};
