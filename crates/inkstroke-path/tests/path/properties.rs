use inkstroke_path::{parse, simplify, stringify, Point};
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = f64> {
    prop_oneof![
        -10_000.0..10_000.0f64,
        prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO,
    ]
}

fn point() -> impl Strategy<Value = Point> {
    (coordinate(), coordinate()).prop_map(|(x, y)| Point::new(x, y))
}

fn stroke() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(point(), 0..64)
}

/// A stroke that only ever advances along one axis direction.
fn straight_stroke() -> impl Strategy<Value = Vec<Point>> {
    (
        prop::collection::vec(0u32..500, 0..64),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(steps, vertical, backwards)| {
            let sign = if backwards { -1.0 } else { 1.0 };
            let mut travelled = 0.0;
            steps
                .into_iter()
                .map(|step| {
                    travelled += f64::from(step) / 100.0;
                    if vertical {
                        Point::new(3.0, sign * travelled)
                    } else {
                        Point::new(sign * travelled, -7.0)
                    }
                })
                .collect()
        })
}

fn is_subsequence(sub: &[Point], of: &[Point]) -> bool {
    let mut rest = of.iter();
    sub.iter().all(|p| rest.any(|q| q == p))
}

proptest! {
    #[test]
    fn prop_parse_inverts_stringify(points in stroke()) {
        prop_assert_eq!(parse(&stringify(&points)), points);
    }

    #[test]
    fn prop_simplify_keeps_first_and_order(points in stroke(), tolerance in 0.001..50.0f64) {
        let out = simplify(&points, tolerance);

        prop_assert_eq!(out.is_empty(), points.is_empty());
        if let (Some(first_in), Some(first_out)) = (points.first(), out.first()) {
            prop_assert_eq!(first_in, first_out);
        }
        prop_assert!(is_subsequence(&out, &points));
    }

    #[test]
    fn prop_simplify_is_idempotent(points in stroke(), tolerance in 0.001..50.0f64) {
        let once = simplify(&points, tolerance);
        let twice = simplify(&once, tolerance);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_kept_points_clear_tolerance(points in stroke(), tolerance in 0.001..50.0f64) {
        let out = simplify(&points, tolerance);
        for pair in out.windows(2) {
            prop_assert!(pair[0].distance_to(&pair[1]) > tolerance);
        }
    }

    #[test]
    fn prop_straight_stroke_tolerance_monotonic(
        points in straight_stroke(),
        t1 in 0.01..5.0f64,
        delta in 0.01..5.0f64,
    ) {
        let t2 = t1 + delta;
        prop_assert!(simplify(&points, t2).len() <= simplify(&points, t1).len());
    }

    #[test]
    fn prop_parse_is_total(d in "\\PC{0,80}") {
        let _ = parse(&d);
    }

    #[test]
    fn prop_parse_counts_commands(d in "[ML0-9 ,.eE+-]{0,80}") {
        let commands = d.chars().filter(|c| matches!(c, 'M' | 'L')).count();
        prop_assert_eq!(parse(&d).len(), commands);
    }

    #[test]
    fn prop_stringify_always_starts_with_move(points in stroke()) {
        let d = stringify(&points);
        prop_assert!(d.starts_with('M'));
        prop_assert_eq!(d.matches(" L").count(), points.len().saturating_sub(1));
    }
}
