//! Property-based tests for layout invariants using the `proptest` crate.

use proptest::prelude::*;

use bellows_layout::{assemble, partition, BellowsConfig, TrapezoidWidth};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Relative tolerance for accumulated floating-point error.
const TOL: f64 = 1e-9;

/// Fold weight lists, strictly positive.
fn arb_folds() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.1f64..2.0, 1..24)
}

/// A valid face on a page large enough for any generated size.
fn arb_config() -> impl Strategy<Value = BellowsConfig> {
    (
        10.0f64..500.0,
        0.0f64..200.0,
        0.0f64..200.0,
        -100.0f64..100.0,
        arb_folds(),
        0.0f64..10.0,
        0.0f64..2.0,
        0.0f64..3.0,
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(length, top, bottom, delta, folds, side_space, slack, connective, zigzag, up_down)| {
                BellowsConfig {
                    length,
                    top_width: top,
                    bottom_width: bottom,
                    other_face_delta: delta,
                    folds,
                    side_space,
                    slack,
                    connective,
                    zigzag,
                    up_down,
                    page_width: 1000.0,
                    page_height: 1000.0,
                    top_margin: 5.0,
                }
            },
        )
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOL * a.abs().max(b.abs()).max(1.0)
}

// ---------------------------------------------------------------------------
// Width model
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn width_endpoints_exact(
        length in 0.1f64..1000.0,
        top in 0.0f64..500.0,
        bottom in 0.0f64..500.0,
    ) {
        let w = TrapezoidWidth::new(top, bottom, length);
        prop_assert_eq!(w.width_at(0.0), top);
        prop_assert_eq!(w.width_at(length), bottom);
    }

    #[test]
    fn width_is_between_ends(
        length in 0.1f64..1000.0,
        top in 0.0f64..500.0,
        bottom in 0.0f64..500.0,
        t in 0.0f64..1.0,
    ) {
        let w = TrapezoidWidth::new(top, bottom, length).width_at(t * length);
        prop_assert!(w >= top.min(bottom) - TOL && w <= top.max(bottom) + TOL);
    }
}

// ---------------------------------------------------------------------------
// Fold partitioning
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn cursors_monotonic_and_end_at_length(config in arb_config()) {
        let segments = partition(&config);
        prop_assert_eq!(segments.len(), config.folds.len());
        prop_assert_eq!(segments[0].cursor_start, 0.0);
        for pair in segments.windows(2) {
            prop_assert!(pair[0].cursor_end <= pair[1].cursor_end);
            prop_assert_eq!(pair[0].cursor_end, pair[1].cursor_start);
        }
        let last = segments.last().unwrap().cursor_end;
        prop_assert!(close(last, config.length), "last cursor {} != {}", last, config.length);
    }

    #[test]
    fn bands_partition_unit_span(config in arb_config()) {
        let unit = config.length / config.total_weight();
        for seg in partition(&config) {
            let (a, b) = seg.unscaled_bands().unwrap();
            prop_assert!(close(a + b, unit), "{} + {} != {}", a, b, unit);
            prop_assert!(close(seg.band_a + seg.band_b, seg.span()));
        }
    }

    #[test]
    fn up_down_swaps_bands(config in arb_config()) {
        let down = partition(&BellowsConfig { up_down: false, ..config.clone() });
        let up = partition(&BellowsConfig { up_down: true, ..config });
        for (d, u) in down.iter().zip(&up) {
            prop_assert_eq!(d.band_a, u.band_b);
            prop_assert_eq!(d.band_b, u.band_a);
            prop_assert_eq!(d.cursor_end, u.cursor_end);
        }
    }

    #[test]
    fn positive_delta_puts_larger_band_first(config in arb_config(), delta in 0.1f64..100.0) {
        let config = BellowsConfig { other_face_delta: delta, up_down: false, ..config };
        for seg in partition(&config) {
            prop_assert!(seg.band_a > seg.band_b);
        }
    }
}

// ---------------------------------------------------------------------------
// Assembled scene
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn primitive_counts(config in arb_config()) {
        prop_assume!(config.validate().is_ok());
        let n = config.folds.len();
        let scene = assemble(&config);

        let rects = scene.cut().iter().filter(|p| p.is_rectangle()).count();
        let polygons = scene.cut().iter().filter(|p| p.is_polygon()).count();
        prop_assert_eq!(rects, 2 * n);
        prop_assert_eq!(polygons, 1);
        prop_assert!(scene.score().iter().all(|p| p.is_line()));
        if config.zigzag {
            prop_assert_eq!(scene.score().len(), 8 * n);
        } else {
            prop_assert_eq!(scene.score().len(), 2);
        }
    }

    #[test]
    fn outline_independent_of_other_face(config in arb_config(), delta in -100.0f64..100.0) {
        let other = BellowsConfig { other_face_delta: delta, ..config.clone() };
        let base = assemble(&config);
        let skewed = assemble(&other);
        prop_assert_eq!(&base.cut()[0], &skewed.cut()[0]);
    }
}
