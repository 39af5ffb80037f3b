//! Property-based invariant tests for layout computation.
//!
//! 1. Wall measurements always add up to the wall's dimensions.
//! 2. Stretching distributions fill the span exactly.
//! 3. Space-around edge gaps are half the interior gap.
//! 4. Recomputing an unchanged layout is bit-identical.
//! 5. Dragging a multi-selection moves every selected frame by the pointer
//!    delta and leaves the rest alone.
//! 6. Dual hooks are symmetric about the frame's center.

use hangplan::{
    AnchorLine, AnchorSpec, Arrangement, Distribution, FrameSpec, Furniture, Gallery, HangingSpec,
    HorizontalAnchor, Point, RegularLayout, Spacing, VerticalAnchor, WallSpec, distribute,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

const EPS: f64 = 1e-6;

fn wall() -> impl Strategy<Value = WallSpec> {
    (24.0f64..240.0, 24.0f64..144.0).prop_map(|(w, h)| WallSpec::new(w, h))
}

fn distribution() -> impl Strategy<Value = Distribution> {
    prop_oneof![
        Just(Distribution::Fixed),
        Just(Distribution::SpaceBetween),
        Just(Distribution::SpaceEvenly),
        Just(Distribution::SpaceAround),
    ]
}

fn arrangement() -> impl Strategy<Value = Arrangement> {
    prop_oneof![
        Just(Arrangement::Row),
        proptest::option::of(1usize..6).prop_map(|columns| Arrangement::Grid { columns }),
    ]
}

fn anchor() -> impl Strategy<Value = AnchorSpec> {
    let horizontal = prop_oneof![
        Just(HorizontalAnchor::Left),
        Just(HorizontalAnchor::Center),
        Just(HorizontalAnchor::Right),
    ];
    let vertical = prop_oneof![
        Just(VerticalAnchor::Floor),
        Just(VerticalAnchor::Ceiling),
        Just(VerticalAnchor::Center),
        Just(VerticalAnchor::Furniture),
    ];
    let line = prop_oneof![Just(AnchorLine::Hooks), Just(AnchorLine::Edge)];
    let furniture = proptest::option::of(
        (12.0f64..96.0, 12.0f64..40.0, any::<bool>())
            .prop_map(|(w, h, centered)| {
                let f = Furniture::new(w, h);
                if centered { f } else { f.uncentered() }
            }),
    );
    (horizontal, -20.0f64..40.0, vertical, -10.0f64..80.0, line, furniture).prop_map(
        |(h, hv, v, vv, line, furniture)| {
            let mut a = AnchorSpec::default()
                .horizontal(h, hv)
                .vertical(v, vv)
                .line(line);
            a.furniture = furniture;
            a
        },
    )
}

fn hanging() -> impl Strategy<Value = HangingSpec> {
    prop_oneof![
        Just(HangingSpec::single()),
        (0.0f64..4.0).prop_map(HangingSpec::dual),
    ]
}

fn regular_layout() -> impl Strategy<Value = RegularLayout> {
    (
        arrangement(),
        0usize..12,
        (4.0f64..48.0, 4.0f64..48.0, 0.0f64..1.0),
        hanging(),
        (0.0f64..8.0, 0.0f64..8.0),
        distribution(),
        distribution(),
        anchor(),
    )
        .prop_map(
            |(arrangement, frame_count, (w, h, t), hanging, (gx, gy), d, vd, anchor)| RegularLayout {
                arrangement,
                frame_count,
                frame: FrameSpec::new(w, h, h * t),
                hanging,
                spacing: Spacing {
                    horizontal: gx,
                    vertical: gy,
                },
                distribution: d,
                vertical_distribution: vd,
                anchor,
            },
        )
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Measurements add up to the wall
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn measurements_sum_to_wall(wall in wall(), layout in regular_layout()) {
        for p in layout.positions(&wall) {
            let m = p.measurements;
            prop_assert!((m.from_left + m.from_right - wall.width).abs() < EPS, "{:?}", m);
            prop_assert!((m.from_floor + m.from_ceiling - wall.height).abs() < EPS, "{:?}", m);
        }
    }

    #[test]
    fn emits_one_position_per_frame(wall in wall(), layout in regular_layout()) {
        let positions = layout.positions(&wall);
        prop_assert_eq!(positions.len(), layout.frame_count);
        for (i, p) in positions.iter().enumerate() {
            prop_assert_eq!(p.id, i);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Stretching distributions fill the span
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn space_between_fills_span(span in 10.0f64..500.0, size in 1.0f64..50.0, count in 2usize..20) {
        let d = distribute(span, size, count, 0.0, Distribution::SpaceBetween);
        let n = count as f64;
        prop_assert!((n * size + (n - 1.0) * d.gap - span).abs() < EPS);
        prop_assert!((d.offsets[count - 1] + size - span).abs() < EPS);
    }

    #[test]
    fn space_evenly_fills_span(span in 10.0f64..500.0, size in 1.0f64..50.0, count in 2usize..20) {
        let d = distribute(span, size, count, 0.0, Distribution::SpaceEvenly);
        let n = count as f64;
        prop_assert!((n * size + (n + 1.0) * d.gap - span).abs() < EPS);
        prop_assert!((d.leading() - d.gap).abs() < EPS);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Space-around edge gaps are half the interior gap
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn space_around_half_edges(span in 10.0f64..500.0, size in 1.0f64..50.0, count in 1usize..20) {
        let d = distribute(span, size, count, 0.0, Distribution::SpaceAround);
        let trailing = span - (d.offsets[count - 1] + size);
        prop_assert!((d.leading() - d.gap / 2.0).abs() < EPS);
        prop_assert!((trailing - d.gap / 2.0).abs() < EPS);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Idempotent recomputation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn recompute_is_bit_identical(wall in wall(), layout in regular_layout()) {
        let a = layout.positions(&wall);
        let b = layout.positions(&wall);
        prop_assert_eq!(a.len(), b.len());
        for (p, q) in a.iter().zip(&b) {
            prop_assert_eq!(p.x.to_bits(), q.x.to_bits());
            prop_assert_eq!(p.y.to_bits(), q.y.to_bits());
            prop_assert_eq!(p, q);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Rigid group translation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn group_drag_is_rigid(
        origins in proptest::collection::vec((0.0f64..80.0, 0.0f64..60.0), 2..6),
        picks in proptest::collection::vec(any::<bool>(), 6),
        (dx, dy) in (-30.0f64..30.0, -30.0f64..30.0),
    ) {
        let wall = WallSpec::new(96.0, 72.0);
        let mut gallery = Gallery::new().snap(false);
        for (i, &(x, y)) in origins.iter().enumerate() {
            gallery = gallery.add_frame(FrameSpec::new(10.0, 8.0, 2.0), format!("F{i}"), Point::new(x, y));
        }
        // Frame 0 is always selected and dragged; the rest per `picks`.
        gallery = gallery.select(0, false);
        for id in 1..origins.len() {
            if picks[id] {
                gallery = gallery.select(id, true);
            }
        }
        let selected: Vec<bool> = (0..origins.len()).map(|id| gallery.selection.contains(id)).collect();

        let (px, py) = (origins[0].0 + 5.0, origins[0].1 + 4.0);
        let moved = gallery
            .begin_drag(0, px, py)
            .update_drag(&wall, px + dx, py + dy)
            .end_drag();

        for (id, &(x, y)) in origins.iter().enumerate() {
            let f = moved.frame(id).unwrap();
            let (ex, ey) = if selected[id] { (x + dx, y + dy) } else { (x, y) };
            prop_assert!((f.x - ex).abs() < EPS, "frame {} x {} != {}", id, f.x, ex);
            prop_assert!((f.y - ey).abs() < EPS, "frame {} y {} != {}", id, f.y, ey);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Dual hook symmetry
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn dual_hooks_symmetric(wall in wall(), layout in regular_layout(), inset in 0.0f64..4.0) {
        let layout = RegularLayout { hanging: HangingSpec::dual(inset), ..layout };
        for p in layout.positions(&wall) {
            prop_assert!(p.hook_x2.is_some(), "dual layout without a second hook");
            let x2 = p.hook_x2.unwrap_or_default();
            prop_assert!((x2 - p.hook_x - (p.width - 2.0 * inset)).abs() < EPS);
            prop_assert!(((p.hook_x + x2) / 2.0 - p.width / 2.0).abs() < EPS);
            prop_assert_eq!(p.hook_gap, Some(x2 - p.hook_x));
        }
    }
}
