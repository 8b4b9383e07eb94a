use quill_stroke::geom::{quantize, QuadraticBezierSegment, Segment};
use quill_stroke::math::{point, Point};
use quill_stroke::path::{Path, PathEvent};
use quill_stroke::{apply_dashes, stroke_to_path, LineCap, LineJoin, StrokeOptions};

fn line_events(path: &Path) -> Vec<(Point, Point)> {
    path.iter()
        .filter_map(|evt| match evt {
            PathEvent::Line { from, to } => Some((from, to)),
            _ => None,
        })
        .collect()
}

/// Winding number of `outline` around `p`, which must not be on an edge.
fn winding_number(outline: &Path, p: Point) -> i32 {
    let mut winding = 0;
    for evt in outline.iter() {
        let (a, b) = match evt {
            PathEvent::Line { from, to } => (from, to),
            PathEvent::Close { last, first } => (last, first),
            _ => continue,
        };

        let side = (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y);
        if a.y <= p.y {
            if b.y > p.y && side > 0.0 {
                winding += 1;
            }
        } else if b.y <= p.y && side < 0.0 {
            winding -= 1;
        }
    }

    winding
}

#[test]
fn quantize_is_idempotent_on_stroke_inputs() {
    for v in [0.5, 1.0 / 3.0, 2.0f64.sqrt(), 1e-7, -123.456_789_012, 1e9 + 0.3] {
        assert_eq!(quantize(quantize(v)), quantize(v));
    }
}

#[test]
fn sharper_curves_need_more_segments() {
    let from = point(0.0, 0.0);
    let to = point(100.0, 0.0);

    for tolerance in [0.05, 0.25, 0.5, 1.0] {
        let flat = QuadraticBezierSegment { from, ctrl: point(50.0, 2.0), to };
        let curvy = QuadraticBezierSegment { from, ctrl: point(50.0, 80.0), to };
        assert!(
            curvy.flattened(tolerance).len() > flat.flattened(tolerance).len(),
            "tolerance {}",
            tolerance
        );
    }
}

#[test]
fn dash_pieces_stay_on_the_segment() {
    let length = 53.0;
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0)).line_to(point(length, 0.0));

    for (a, b) in [(1.0, 1.0), (3.0, 2.0), (7.5, 2.5), (10.0, 40.0)] {
        let pieces = line_events(&apply_dashes(&path, &[a, b], 0.5));
        let expected = (length / (a + b)).ceil() as i64;
        assert!((pieces.len() as i64 - expected).abs() <= 1, "[{}, {}]", a, b);

        for (from, to) in pieces {
            assert!(from.x >= -1e-9 && to.x <= length + 1e-9);
            assert!(to.x > from.x);
        }
    }
}

#[test]
fn end_to_end_square_cap() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0)).line_to(point(10.0, 0.0));

    let outline = stroke_to_path(
        &path,
        &StrokeOptions::default()
            .with_line_width(2.0)
            .with_line_cap(LineCap::Square)
            .with_line_join(LineJoin::Miter),
    );

    let bounds = outline.fast_bounding_box();
    assert!((bounds.min.x + 1.0).abs() < 1e-6);
    assert!((bounds.min.y + 1.0).abs() < 1e-6);
    assert!((bounds.max.x - 11.0).abs() < 1e-6);
    assert!((bounds.max.y - 1.0).abs() < 1e-6);
}

#[test]
fn end_to_end_round_everything() {
    let mut path = Path::new();
    path.move_to(point(10.0, 10.0))
        .cubic_to(point(40.0, 80.0), point(80.0, -40.0), point(110.0, 30.0))
        .line_to(point(60.0, 90.0))
        .move_to(point(0.0, 100.0))
        .quad_to(point(50.0, 150.0), point(100.0, 100.0))
        .close();

    let options = StrokeOptions::default()
        .with_line_width(6.0)
        .with_line_cap(LineCap::Round)
        .with_line_join(LineJoin::Round)
        .with_dashes(vec![12.0, 4.0]);

    let outline = stroke_to_path(&path, &options);
    assert!(outline.is_valid());
    assert!(!outline.is_empty());
    for p in outline.points() {
        assert!(p.x.is_finite() && p.y.is_finite());
    }

    assert_eq!(outline, stroke_to_path(&path, &options));
}

#[test]
fn closed_sub_path_seam_matches_other_corners() {
    let mut path = Path::new();
    path.move_to(point(10.0, 10.0))
        .line_to(point(30.0, 10.0))
        .line_to(point(30.0, 30.0))
        .line_to(point(10.0, 30.0))
        .close();

    // Round and miter joins fall back to bevels with such a small limit.
    let configs = [
        (LineJoin::Bevel, 4.0),
        (LineJoin::Round, 1.0),
        (LineJoin::Miter, 1.0),
    ];

    // Points around the corner where the sub-path starts, and their mirror image
    // around the top right corner.
    let inside = [
        (8.5, 10.5),
        (9.5, 10.5),
        (8.5, 11.5),
        (10.5, 8.5),
        (11.5, 9.5),
        (11.5, 11.5),
        (12.5, 12.5),
        (9.2, 9.2),
    ];

    for (join, miter_limit) in configs {
        let options = StrokeOptions::default()
            .with_line_width(6.0)
            .with_line_join(join)
            .with_miter_limit(miter_limit);
        let outline = stroke_to_path(&path, &options);

        for (x, y) in inside {
            let seam = point(x, y);
            let mirrored = point(40.0 - x, y);
            assert!(winding_number(&outline, seam) != 0, "{:?} {:?}", join, seam);
            assert!(winding_number(&outline, mirrored) != 0, "{:?} {:?}", join, mirrored);
        }

        // Beyond the bevel.
        assert_eq!(winding_number(&outline, point(7.5, 7.5)), 0, "{:?}", join);
        assert_eq!(winding_number(&outline, point(32.5, 7.5)), 0, "{:?}", join);
        // The hole and the outside.
        assert_eq!(winding_number(&outline, point(20.0, 20.0)), 0, "{:?}", join);
        assert_eq!(winding_number(&outline, point(2.0, 20.0)), 0, "{:?}", join);
    }
}
