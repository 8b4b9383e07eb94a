use crate::geom::{quantize_point, LineSegment};
use crate::join::segment_normal;
use crate::math::{Point, Vector};
use crate::LineCap;

use arrayvec::ArrayVec;

/// Lower bound on the number of segments of a round cap's half circle.
pub const MIN_ROUND_CAP_SEGMENTS: usize = 8;
/// Upper bound on the number of segments of a round cap's half circle.
pub const MAX_ROUND_CAP_SEGMENTS: usize = 32;

/// The points inserted in a stroke outline by a cap.
pub type CapPoints = ArrayVec<Point, MAX_ROUND_CAP_SEGMENTS>;

/// Computes the points a cap adds to the outline of an open sub-path.
///
/// For the end cap (`at_end == true`) of `segment`, the points go from the left
/// side to the right side around `segment.to`. For the start cap they go from the
/// right side to the left side around `segment.from`. The offset points themselves
/// are not included.
///
/// Butt caps add nothing. Square caps add the two corners of a rectangle extending
/// the stroke by `half_width`. Round caps add the inner points of a half circle
/// made of 8 to 32 segments depending on the radius.
pub fn cap_points(segment: &LineSegment, at_end: bool, half_width: f64, cap: LineCap) -> CapPoints {
    let mut output = CapPoints::new();

    let normal = segment_normal(segment, half_width);
    let (center, normal, extension) = match (at_end, segment.direction()) {
        (true, dir) => (segment.to, normal, dir.unwrap_or(Vector::zero()) * half_width),
        (false, dir) => (segment.from, -normal, -dir.unwrap_or(Vector::zero()) * half_width),
    };

    match cap {
        LineCap::Butt => {}
        LineCap::Square => {
            output.push(quantize_point(center + normal + extension));
            output.push(quantize_point(center - normal + extension));
        }
        LineCap::Round => {
            let n = round_cap_segments(half_width);
            for i in 1..n {
                // Rotating the normal clockwise sweeps the half circle on the
                // outer side of the end.
                let angle = -std::f64::consts::PI * i as f64 / n as f64;
                let (sin, cos) = angle.sin_cos();
                let rotated = Vector::new(
                    normal.x * cos - normal.y * sin,
                    normal.x * sin + normal.y * cos,
                );
                output.push(quantize_point(center + rotated));
            }
        }
    }

    output
}

fn round_cap_segments(radius: f64) -> usize {
    let n = (radius * 2.0).floor();
    if n.is_nan() {
        return MIN_ROUND_CAP_SEGMENTS;
    }

    (n as usize).clamp(MIN_ROUND_CAP_SEGMENTS, MAX_ROUND_CAP_SEGMENTS)
}

#[cfg(test)]
use crate::math::point;

#[test]
fn butt_cap_is_empty() {
    let s = LineSegment { from: point(0.0, 0.0), to: point(10.0, 0.0) };
    assert!(cap_points(&s, true, 1.0, LineCap::Butt).is_empty());
    assert!(cap_points(&s, false, 1.0, LineCap::Butt).is_empty());
}

#[test]
fn square_caps() {
    let s = LineSegment { from: point(0.0, 0.0), to: point(10.0, 0.0) };

    let end = cap_points(&s, true, 1.0, LineCap::Square);
    assert_eq!(end.len(), 2);
    assert!((end[0] - point(11.0, 1.0)).length() < 1e-9);
    assert!((end[1] - point(11.0, -1.0)).length() < 1e-9);

    let start = cap_points(&s, false, 1.0, LineCap::Square);
    assert_eq!(start.len(), 2);
    assert!((start[0] - point(-1.0, -1.0)).length() < 1e-9);
    assert!((start[1] - point(-1.0, 1.0)).length() < 1e-9);
}

#[test]
fn round_caps() {
    let s = LineSegment { from: point(0.0, 0.0), to: point(10.0, 0.0) };

    let end = cap_points(&s, true, 1.0, LineCap::Round);
    assert_eq!(end.len(), MIN_ROUND_CAP_SEGMENTS - 1);
    for p in &end {
        assert!(((*p - point(10.0, 0.0)).length() - 1.0).abs() < 1e-5);
        assert!(p.x > 10.0);
    }
    // Going from the left side (+y) to the right side (-y).
    assert!(end[0].y > 0.0);
    assert!(end[end.len() - 1].y < 0.0);
    // The middle point is the tip of the cap.
    assert!((end[3] - point(11.0, 0.0)).length() < 1e-5);

    let start = cap_points(&s, false, 1.0, LineCap::Round);
    for p in &start {
        assert!(p.x < 0.0);
    }
    assert!(start[0].y < 0.0);
    assert!(start[start.len() - 1].y > 0.0);

    // Larger radii get more segments, up to a limit.
    assert_eq!(cap_points(&s, true, 10.0, LineCap::Round).len(), 19);
    assert_eq!(cap_points(&s, true, 100.0, LineCap::Round).len(), MAX_ROUND_CAP_SEGMENTS - 1);
}

#[test]
fn caps_of_degenerate_segments_are_finite() {
    let s = LineSegment { from: point(5.0, 5.0), to: point(5.0, 5.0) };
    for cap in [LineCap::Butt, LineCap::Square, LineCap::Round] {
        for at_end in [true, false] {
            for p in &cap_points(&s, at_end, 2.0, cap) {
                assert!(p.x.is_finite() && p.y.is_finite());
            }
        }
    }
}
