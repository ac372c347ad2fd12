// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers shared by the Canopy demos.

use std::error::Error;
use std::path::{Path, PathBuf};

use canopy::layout::CensusNode;
use canopy::render::{RasterSurface, RecordingSurface};

/// Path of the bundled sample census.
pub fn sample_census_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/census.json")
}

/// Reads a census tree from a JSON file shaped like
/// `{ "name", "bytes", "count", "children": [...] }`.
pub fn load_census(path: &Path) -> Result<CensusNode, Box<dyn Error>> {
    let json = std::fs::read_to_string(path)?;
    let tree = serde_json::from_str(&json)?;
    Ok(tree)
}

/// One-line description of what a recording surface was asked to draw.
pub fn summarize(name: &str, surface: &RecordingSurface) -> String {
    let size = surface.size();
    let boxes = surface.filled_rects().count();
    let labels: Vec<&str> = surface.texts().take(6).collect();
    format!(
        "{name}: {}x{} px, {boxes} boxes, labels {labels:?}",
        size.width, size.height
    )
}
