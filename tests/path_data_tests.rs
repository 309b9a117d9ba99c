/// Integration-Tests für Path-Data Import/Export
use smooth_stroke::{parse_path_data, write_path_data, Point, Stroke, StrokeSegment};

#[test]
fn test_parse_foreign_path_with_mixed_commands() {
    let d = "M10,80 C40,10 65,10 95,80 S150,150 180,80 l 10 0 z";
    let strokes = parse_path_data(d).expect("Parsing fehlgeschlagen");

    assert_eq!(strokes.len(), 1);
    let stroke = &strokes[0];
    assert_eq!(stroke.curve_count(), 2);
    assert_eq!(stroke.segments.len(), 4);
    assert_eq!(stroke.knots.first(), Some(&Point::new(10.0, 80.0)));
    assert_eq!(stroke.segments.last().map(|s| s.end()), Some(Point::new(10.0, 80.0)));

    let StrokeSegment::Curve(smooth) = stroke.segments[1] else {
        panic!("Kurve erwartet");
    };
    assert_eq!(smooth.c1, Point::new(125.0, 150.0));
}

#[test]
fn test_fitted_roundtrip_preserves_knots() {
    let knots: Vec<Point> = (0..12)
        .map(|i| Point::new(i as f64 * 10.0, ((i % 4) * 7) as f64))
        .collect();
    let stroke = Stroke::fitted(knots.clone());

    let written = write_path_data(&[stroke], 3);
    let reparsed = parse_path_data(&written).expect("Re-Parsing fehlgeschlagen");
    let rewritten = write_path_data(&reparsed, 3);

    assert_eq!(reparsed[0].knots, knots);
    assert_eq!(written, rewritten);
}

#[test]
fn test_invalid_path_reports_position() {
    let err = parse_path_data("M 0 0 C 1 2 3").expect_err("Parser sollte fehlschlagen");
    assert!(err.to_string().contains("Position 6"), "{err}");
}
