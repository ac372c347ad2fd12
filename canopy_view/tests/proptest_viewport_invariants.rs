// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for the drag-zoom viewport.
//!
//! 1. Clamping is idempotent.
//! 2. After any event sequence, pan stays within `±(extent - window) / 2`.
//! 3. Edge offset always equals `extent - window - 2 * pan`.
//! 4. Zoom never goes negative and every value stays finite.
//! 5. Smoothing settles on the targets in a bounded number of frames.

use canopy_view::{
    DeltaMode, DragZoomConfig, Phase, SmoothingLoop, ViewportEvent, ViewportState, keep_in_view,
    update,
};
use kurbo::{Point, Size, Vec2};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn window_strategy() -> impl Strategy<Value = Size> {
    prop_oneof![
        9 => (1.0_f64..3000.0, 1.0_f64..3000.0).prop_map(|(w, h)| Size::new(w, h)),
        1 => Just(Size::ZERO),
    ]
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (-500.0_f64..3500.0, -500.0_f64..3500.0).prop_map(|(x, y)| Point::new(x, y))
}

fn event_strategy() -> impl Strategy<Value = ViewportEvent> {
    prop_oneof![
        1 => point_strategy().prop_map(ViewportEvent::PointerDown),
        4 => point_strategy().prop_map(ViewportEvent::PointerMove),
        1 => Just(ViewportEvent::PointerUp),
        1 => Just(ViewportEvent::PointerLeave),
        3 => (-400.0_f64..400.0, prop_oneof![
            Just(DeltaMode::Pixel),
            Just(DeltaMode::Line),
            Just(DeltaMode::Page),
        ])
            .prop_map(|(delta, mode)| ViewportEvent::Wheel { delta, mode }),
        1 => window_strategy().prop_map(ViewportEvent::Resize),
    ]
}

fn assert_clamped(state: &ViewportState) -> Result<(), TestCaseError> {
    let window = state.window();
    let view = state.view_size();
    let pan = state.pan();
    let over_x = ((view.width - window.width) / 2.0).max(0.0);
    let over_y = ((view.height - window.height) / 2.0).max(0.0);
    let slack = 1e-9 * (1.0 + view.width.max(view.height));

    prop_assert!(state.zoom() >= 0.0 && state.zoom().is_finite());
    prop_assert!(pan.is_finite() && state.edge_offset().is_finite());
    prop_assert!(pan.x.abs() <= over_x + slack, "pan.x {} beyond {}", pan.x, over_x);
    prop_assert!(pan.y.abs() <= over_y + slack, "pan.y {} beyond {}", pan.y, over_y);

    let expected = Vec2::new(
        view.width - window.width - 2.0 * pan.x,
        view.height - window.height - 2.0 * pan.y,
    );
    prop_assert!((state.edge_offset() - expected).hypot() <= slack * 4.0);
    Ok(())
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn clamp_is_idempotent(
        window in window_strategy(),
        zoom in 0.0_f64..20.0,
        pan in (-1e5_f64..1e5, -1e5_f64..1e5),
    ) {
        let mut state = ViewportState::new(window);
        state.set_zoom(zoom);
        state.set_pan(Vec2::new(pan.0, pan.1));
        let once = state.clone();
        keep_in_view(&mut state);
        prop_assert_eq!(&once, &state);
        keep_in_view(&mut state);
        prop_assert_eq!(&once, &state);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2-4. Bounds hold under arbitrary input
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn events_keep_the_view_clamped(
        window in window_strategy(),
        events in prop::collection::vec(event_strategy(), 1..40),
    ) {
        let config = DragZoomConfig::default();
        let mut state = ViewportState::new(window);
        for event in events {
            update(&mut state, event, &config);
            assert_clamped(&state)?;
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Smoothing settles
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn smoothing_settles_on_targets(
        window in window_strategy(),
        events in prop::collection::vec(event_strategy(), 1..20),
    ) {
        let config = DragZoomConfig::default();
        let mut state = ViewportState::new(window);
        let mut smoothing = SmoothingLoop::new();
        for event in events {
            if update(&mut state, event, &config).viewport {
                smoothing.kick(&mut state, &config);
            }
        }
        let mut frames = 0;
        while smoothing.tick(&mut state, &config) == Phase::Animating {
            frames += 1;
            prop_assert!(frames < 200, "smoothing did not settle");
        }
        prop_assert!(state.is_settled());
    }
}
