// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy::layout::{CensusNode, layout};
use canopy::render::{CoarseTypeColorizer, RecordingSurface, StyleConfig, render};
use canopy::view::{DeltaMode, DragZoomConfig, ViewportEvent, ViewportState, update};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }
}

/// A census of `fanout^depth` leaves with pseudo-random sizes.
fn build_census(depth: u32, fanout: u32, rng: &mut Lcg) -> CensusNode {
    if depth == 0 {
        let bytes = f64::from(rng.next_u32() % 1_000_000 + 1);
        return CensusNode::leaf("leaf", bytes, u64::from(rng.next_u32() % 1000));
    }
    CensusNode::branch(
        "group",
        (0..fanout).map(|_| build_census(depth - 1, fanout, rng)),
    )
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("canopy_layout");
    let style = StyleConfig::default().with_device_pixel_ratio(2.0);
    let config = style.layout_config();

    for &(depth, fanout) in &[(2_u32, 16_u32), (3, 16), (4, 8)] {
        let tree = build_census(depth, fanout, &mut Lcg::new(0xCA70_0000_0000_0001));
        group.bench_function(format!("layout(depth={depth},fanout={fanout})"), |b| {
            b.iter(|| black_box(layout(&tree, Size::new(2048.0, 1024.0), &config)));
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("canopy_render");
    let style = StyleConfig::default();
    let size = Size::new(1024.0, 512.0);
    let tree = build_census(3, 16, &mut Lcg::new(0xCA70_0000_0000_0002));
    let nodes = layout(&tree, size, &style.layout_config());

    for &zoom in &[0.0_f64, 3.0] {
        let mut state = ViewportState::new(size);
        state.set_zoom(zoom);
        let view = state.focus_view_transform(style.ratio());
        group.bench_function(format!("render(zoom={zoom})"), |b| {
            b.iter_batched(
                || RecordingSurface::new(size),
                |mut surface| {
                    render(&mut surface, &nodes, view, &style, &CoarseTypeColorizer);
                    black_box(surface);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("canopy_view");
    let config = DragZoomConfig::default();

    group.bench_function("wheel_and_drag(1000 events)", |b| {
        b.iter_batched(
            || ViewportState::new(Size::new(1024.0, 512.0)),
            |mut state| {
                for i in 0..1000_u32 {
                    let x = f64::from(i % 1024);
                    let event = match i % 4 {
                        0 => ViewportEvent::Wheel {
                            delta: -1.0,
                            mode: DeltaMode::Line,
                        },
                        1 => ViewportEvent::PointerDown(Point::new(x, 256.0)),
                        2 => ViewportEvent::PointerMove(Point::new(x + 7.0, 250.0)),
                        _ => ViewportEvent::PointerUp,
                    };
                    black_box(update(&mut state, event, &config));
                }
                black_box(state);
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_layout, bench_render, bench_input);
criterion_main!(benches);
