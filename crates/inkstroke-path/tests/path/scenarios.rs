use inkstroke_path::{parse, simplify, stringify, Point};

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn test_parse_move_and_two_lines() {
    assert_eq!(
        parse("M10 20 L15 25 L100 200"),
        pts(&[(10.0, 20.0), (15.0, 25.0), (100.0, 200.0)])
    );
}

#[test]
fn test_simplify_drops_point_within_tolerance() {
    let input = pts(&[(0.0, 0.0), (0.5, 0.0), (3.0, 0.0)]);
    assert_eq!(simplify(&input, 1.0), pts(&[(0.0, 0.0), (3.0, 0.0)]));
}

#[test]
fn test_stringify_two_points() {
    assert_eq!(stringify(&pts(&[(0.0, 0.0), (3.0, 0.0)])), "M0 0 L3 0");
}

#[test]
fn test_empty_inputs() {
    assert_eq!(parse(""), Vec::<Point>::new());
    assert_eq!(stringify(&[]), "M");
}

#[test]
fn test_unparsable_x_becomes_nan() {
    let points = parse("Mabc 20");
    assert_eq!(points.len(), 1);
    assert!(points[0].x.is_nan());
    assert_eq!(points[0].y, 20.0);
}

#[test]
fn test_raw_gesture_string_through_pipeline() {
    // What a pointer source accumulates: integer offsets with jitter.
    let raw = "M10 10 L10 11 L11 11 L14 11 L14 12 L20 12 L20 12 L21 13";
    let committed = stringify(&simplify(&parse(raw), 2.0));
    assert_eq!(committed, "M10 10 L14 11 L20 12");
}

#[test]
fn test_second_pass_is_a_no_op() {
    let input = pts(&[
        (0.0, 0.0),
        (0.9, 0.1),
        (1.5, 0.2),
        (1.6, 1.4),
        (3.0, 1.5),
        (3.1, 1.55),
        (5.0, 5.0),
    ]);
    for tolerance in [0.5, 1.0, 2.0, 10.0] {
        let once = simplify(&input, tolerance);
        let twice = simplify(&once, tolerance);
        assert_eq!(once, twice, "tolerance {tolerance}");
    }
}

#[test]
fn test_larger_tolerance_can_keep_more_points() {
    // The greedy filter measures against the last kept point, so a
    // back-and-forth stroke can keep more points at a larger tolerance.
    let input = pts(&[(0.0, 0.0), (1.1, 0.0), (2.0, 0.0), (0.5, 0.0), (2.0, 0.0)]);

    let tight = simplify(&input, 1.0);
    let loose = simplify(&input, 1.2);

    assert_eq!(tight, pts(&[(0.0, 0.0), (1.1, 0.0)]));
    assert_eq!(loose, pts(&[(0.0, 0.0), (2.0, 0.0), (0.5, 0.0), (2.0, 0.0)]));
    assert!(loose.len() > tight.len());
}

#[test]
fn test_nan_points_dropped_after_the_first() {
    let points = parse("M0 0 Lx 5 L10 0");
    assert!(points[1].x.is_nan());

    let simplified = simplify(&points, 1.0);
    assert_eq!(simplified, pts(&[(0.0, 0.0), (10.0, 0.0)]));
    assert_eq!(stringify(&simplified), "M0 0 L10 0");
}

#[test]
fn test_nan_survives_stringify_when_first() {
    let simplified = simplify(&parse("Mx 5 L10 0 L20 0"), 1.0);
    assert_eq!(simplified.len(), 1);
    assert_eq!(stringify(&simplified), "MNaN 5");
}
