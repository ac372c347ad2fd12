// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Census treemap, headless.
//!
//! Load a census JSON, lay it out, then replay a short zoom-and-drag gesture
//! against recording surfaces and report what each raster was asked to draw.
//!
//! Run:
//! - `cargo run -p canopy_demos --example census_headless`
//! - `cargo run -p canopy_demos --example census_headless -- path/to/census.json`
//!
//! Set `RUST_LOG=debug` to see layout passes and viewport notifications.

use std::error::Error;
use std::path::PathBuf;

use canopy::Treemap;
use canopy::render::{RecordingSurface, StyleConfig};
use canopy::view::{DeltaMode, DragZoomConfig, Phase, ViewportEvent};
use canopy_demos::{load_census, sample_census_path, summarize};
use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;

const FRAME_MS: u64 = 16;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let path = std::env::args()
        .nth(1)
        .map_or_else(sample_census_path, PathBuf::from);
    let tree = load_census(&path)?;
    tracing::info!(path = %path.display(), nodes = tree.subtree_len(), "census loaded");

    let window = Size::new(800.0, 400.0);
    let mut map = Treemap::new(
        RecordingSurface::new(window),
        RecordingSurface::new(window),
        window,
        StyleConfig::default().with_device_pixel_ratio(2.0),
        DragZoomConfig::default(),
    );
    map.set_tree(tree);
    println!("{}", summarize("overview", map.compositor().overview()));

    // Hover, zoom in three notches, then drag toward the top-left.
    let gesture = [
        ViewportEvent::PointerMove(Point::new(600.0, 100.0)),
        ViewportEvent::Wheel {
            delta: -3.0,
            mode: DeltaMode::Line,
        },
        ViewportEvent::PointerDown(Point::new(600.0, 100.0)),
        ViewportEvent::PointerMove(Point::new(500.0, 150.0)),
        ViewportEvent::PointerMove(Point::new(350.0, 220.0)),
        ViewportEvent::PointerUp,
    ];

    let mut now = 0;
    let mut animating = false;
    for event in gesture {
        let response = map.handle_event(event, now);
        animating |= response.request_frame;
        if response.cursor {
            println!("t={now}ms cursor {:?}", map.cursor());
        }
        if animating {
            animating = map.animation_frame() == Phase::Animating;
        }
        if map.poll(now) {
            println!("t={now}ms {}", summarize("focus", map.compositor().focus()));
        }
        now += FRAME_MS;
    }

    // Keep running frames until smoothing settles and the focus catches up.
    while animating || map.next_deadline().is_some() {
        if animating {
            animating = map.animation_frame() == Phase::Animating;
        }
        if map.poll(now) {
            println!("t={now}ms {}", summarize("focus", map.compositor().focus()));
        }
        now += FRAME_MS;
    }

    let viewport = map.viewport();
    println!(
        "settled at t={now}ms: zoom {:.2}, pan ({:.1}, {:.1}), extent {}x{}",
        viewport.zoom(),
        viewport.pan().x,
        viewport.pan().y,
        viewport.view_size().width,
        viewport.view_size().height,
    );
    println!("focus placement {:?}", map.focus_placement().as_coeffs());
    Ok(())
}
