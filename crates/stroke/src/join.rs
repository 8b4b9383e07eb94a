//! Offset points at the vertices shared by consecutive segments.
//!
//! The left side of a segment is the side its normal points to: for a segment
//! going from `a` to `b`, the normal is `(-dy, dx)` scaled to half the line
//! width.

use crate::geom::{line_intersection, quantize, quantize_point, LineSegment};
use crate::math::{Point, Vector};
use crate::LineJoin;

use arrayvec::ArrayVec;

/// Joins with the absolute value of the cosine of the angle between the two
/// directions above this threshold are considered parallel and beveled.
const PARALLEL_JOIN_THRESHOLD: f64 = 0.999;

/// Round joins are only approximated above this turning angle (in radians).
const ROUND_JOIN_MIN_ANGLE: f64 = 0.01;

/// The normal of `segment` scaled to `half_width`, pointing to the left side.
///
/// Degenerate (zero-length) segments get `(half_width, 0)`.
pub fn segment_normal(segment: &LineSegment, half_width: f64) -> Vector {
    let dx = quantize(segment.to.x - segment.from.x);
    let dy = quantize(segment.to.y - segment.from.y);
    let length = quantize((dx * dx + dy * dy).sqrt());

    if length == 0.0 || !length.is_finite() {
        return Vector::new(half_width, 0.0);
    }

    Vector::new(
        quantize(-dy / length * half_width),
        quantize(dx / length * half_width),
    )
}

/// The offset points of a join, on each side of the stroke.
///
/// Points are listed in the direction of the path on both sides: the first one
/// connects to the previous segment and the last one to the next segment.
#[derive(Clone, Debug, PartialEq)]
pub struct JoinPoints {
    pub left: ArrayVec<Point, 2>,
    pub right: ArrayVec<Point, 2>,
}

impl JoinPoints {
    fn single(left: Point, right: Point) -> Self {
        let mut join = JoinPoints {
            left: ArrayVec::new(),
            right: ArrayVec::new(),
        };
        join.left.push(left);
        join.right.push(right);

        join
    }

    fn bevel(vertex: Point, prev_normal: Vector, curr_normal: Vector) -> Self {
        let mut join = JoinPoints {
            left: ArrayVec::new(),
            right: ArrayVec::new(),
        };

        join.left.push(quantize_point(vertex + prev_normal));
        join.right.push(quantize_point(vertex - prev_normal));
        if prev_normal != curr_normal {
            join.left.push(quantize_point(vertex + curr_normal));
            join.right.push(quantize_point(vertex - curr_normal));
        }

        join
    }
}

/// Computes the offset points at the vertex shared by `prev` and `curr`.
///
/// The vertex is `prev.to`, which is expected to be `curr.from`.
///
/// - Miter joins intersect the offset lines of both segments on each side. Nearly
///   parallel segments and miters longer than `miter_limit * half_width` are beveled.
/// - Round joins use the same intersections as an approximation of the arc, on each
///   side independently, as long as they are closer to the vertex than
///   `miter_limit * half_width`. Small turns are beveled.
/// - Bevel joins use the offset points of both segments at the vertex.
///
/// The miter length is computed as `half_width / sqrt((1 + dot) / 2)`, `dot` being
/// the dot product of the unit directions of both segments, which is the actual
/// distance from the vertex to the miter point. Formulations based on
/// `sqrt((1 - dot) / 2)` use the angle between the directions instead of the
/// interior angle: compared to those, shallow turns get mitered here while
/// hairpin turns get beveled, for the same `miter_limit`.
pub fn compute_join(
    prev: &LineSegment,
    curr: &LineSegment,
    half_width: f64,
    join: LineJoin,
    miter_limit: f64,
) -> JoinPoints {
    let prev_normal = segment_normal(prev, half_width);
    let curr_normal = segment_normal(curr, half_width);
    let vertex = prev.to;

    let bevel = || JoinPoints::bevel(vertex, prev_normal, curr_normal);

    let (prev_dir, curr_dir) = match (prev.direction(), curr.direction()) {
        (Some(p), Some(c)) => (p, c),
        _ => {
            return bevel();
        }
    };

    let dot = prev_dir.dot(curr_dir);
    let max_distance = miter_limit * half_width;

    match join {
        LineJoin::Bevel => bevel(),
        LineJoin::Miter => {
            if dot.abs() > PARALLEL_JOIN_THRESHOLD {
                return bevel();
            }

            // The miter length is half_width / sin(theta / 2) where theta is the
            // interior angle, which is PI minus the angle between the directions.
            let half_angle_sin = ((1.0 + dot) * 0.5).sqrt();
            if half_angle_sin <= 0.0 || half_width / half_angle_sin > max_distance {
                return bevel();
            }

            let (left, right) = miter_points(prev, curr, prev_normal, curr_normal);

            JoinPoints::single(quantize_point(left), quantize_point(right))
        }
        LineJoin::Round => {
            let angle = prev_dir.cross(curr_dir).atan2(dot);
            if angle.abs() <= ROUND_JOIN_MIN_ANGLE {
                return bevel();
            }

            let (left, right) = miter_points(prev, curr, prev_normal, curr_normal);
            let mut join = bevel();
            if (left - vertex).length() < max_distance {
                join.left.clear();
                join.left.push(quantize_point(left));
            }
            if (right - vertex).length() < max_distance {
                join.right.clear();
                join.right.push(quantize_point(right));
            }

            join
        }
    }
}

/// Intersections of the offset lines of both segments on the left and right sides.
fn miter_points(
    prev: &LineSegment,
    curr: &LineSegment,
    prev_normal: Vector,
    curr_normal: Vector,
) -> (Point, Point) {
    let left = offset_intersection(
        prev.translate(prev_normal),
        curr.translate(curr_normal),
    );
    let right = offset_intersection(
        prev.translate(-prev_normal),
        curr.translate(-curr_normal),
    );

    (left, right)
}

fn offset_intersection(a: LineSegment, b: LineSegment) -> Point {
    // Parallel offset lines meet halfway between the two offset points at the vertex.
    line_intersection(a.from, a.to, b.from, b.to).unwrap_or_else(|| a.to.lerp(b.from, 0.5))
}

#[cfg(test)]
use crate::math::{point, vector};

#[cfg(test)]
fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> LineSegment {
    LineSegment {
        from: point(x0, y0),
        to: point(x1, y1),
    }
}

#[test]
fn normals() {
    let n = segment_normal(&seg(0.0, 0.0, 10.0, 0.0), 1.0);
    assert!((n - vector(0.0, 1.0)).length() < 1e-9);
    let n = segment_normal(&seg(0.0, 0.0, 0.0, 10.0), 2.0);
    assert!((n - vector(-2.0, 0.0)).length() < 1e-9);
    assert_eq!(segment_normal(&seg(3.0, 3.0, 3.0, 3.0), 1.5), vector(1.5, 0.0));

    let n = segment_normal(&seg(0.0, 0.0, 3.0, 4.0), 5.0);
    assert!((n - vector(-4.0, 3.0)).length() < 1e-9);
}

#[test]
fn right_angle_miter() {
    let prev = seg(0.0, 0.0, 10.0, 0.0);
    let curr = seg(10.0, 0.0, 10.0, 10.0);
    let join = compute_join(&prev, &curr, 1.0, LineJoin::Miter, 10.0);

    assert_eq!(join.left.len(), 1);
    assert_eq!(join.right.len(), 1);
    assert!((join.left[0] - point(9.0, 1.0)).length() < 1e-9);
    assert!((join.right[0] - point(11.0, -1.0)).length() < 1e-9);

    let d = (join.right[0] - point(10.0, 0.0)).length();
    assert!((d - 2.0f64.sqrt()).abs() < 1e-6);
}

#[test]
fn miter_limit_falls_back_to_bevel() {
    let prev = seg(0.0, 0.0, 10.0, 0.0);
    let curr = seg(10.0, 0.0, 10.0, 10.0);
    // A right angle miter is sqrt(2) times half the width.
    let join = compute_join(&prev, &curr, 1.0, LineJoin::Miter, 1.4);
    let bevel = compute_join(&prev, &curr, 1.0, LineJoin::Bevel, 1.4);
    assert_eq!(join, bevel);
    assert_eq!(bevel.left.len(), 2);
    assert!((bevel.left[0] - point(10.0, 1.0)).length() < 1e-9);
    assert!((bevel.left[1] - point(9.0, 0.0)).length() < 1e-9);
    assert!((bevel.right[0] - point(10.0, -1.0)).length() < 1e-9);
    assert!((bevel.right[1] - point(11.0, 0.0)).length() < 1e-9);

    // A sharp turn exceeds the default limit.
    let hairpin = seg(10.0, 0.0, 0.0, 0.5);
    let join = compute_join(&prev, &hairpin, 1.0, LineJoin::Miter, 10.0);
    assert_eq!(join, compute_join(&prev, &hairpin, 1.0, LineJoin::Bevel, 10.0));
}

#[test]
fn shallow_turns_are_mitered_within_a_small_limit() {
    let prev = seg(0.0, 0.0, 10.0, 0.0);
    let angle = std::f64::consts::PI / 6.0;
    let curr = seg(10.0, 0.0, 10.0 + 10.0 * angle.cos(), 10.0 * angle.sin());

    // A 30 degree turn has a miter of 1 / cos(15 degrees), about 1.035.
    let join = compute_join(&prev, &curr, 1.0, LineJoin::Miter, 1.1);
    assert_eq!(join.left.len(), 1);
    assert_eq!(join.right.len(), 1);
    let d = (join.left[0] - point(10.0, 0.0)).length();
    assert!((d - 1.0 / (angle * 0.5).cos()).abs() < 1e-5);
}

#[test]
fn nearly_parallel_join_is_a_bevel() {
    let prev = seg(0.0, 0.0, 10.0, 0.0);
    // About 0.3 degrees.
    let curr = seg(10.0, 0.0, 20.0, 0.05);
    let miter = compute_join(&prev, &curr, 1.0, LineJoin::Miter, 10.0);
    let bevel = compute_join(&prev, &curr, 1.0, LineJoin::Bevel, 10.0);
    assert_eq!(miter, bevel);

    let round = compute_join(&prev, &curr, 1.0, LineJoin::Round, 10.0);
    assert_eq!(round, bevel);
}

#[test]
fn collinear_bevel_has_a_single_point() {
    let prev = seg(0.0, 0.0, 10.0, 0.0);
    let curr = seg(10.0, 0.0, 20.0, 0.0);
    let join = compute_join(&prev, &curr, 1.0, LineJoin::Bevel, 10.0);
    assert_eq!(join.left.len(), 1);
    assert_eq!(join.right.len(), 1);
    assert!((join.left[0] - point(10.0, 1.0)).length() < 1e-9);
    assert!((join.right[0] - point(10.0, -1.0)).length() < 1e-9);
}

#[test]
fn round_join_uses_the_miter_points_within_the_limit() {
    let prev = seg(0.0, 0.0, 10.0, 0.0);
    let curr = seg(10.0, 0.0, 10.0, 10.0);
    let round = compute_join(&prev, &curr, 1.0, LineJoin::Round, 10.0);
    let miter = compute_join(&prev, &curr, 1.0, LineJoin::Miter, 10.0);
    assert_eq!(round, miter);

    // Beyond the limit each side falls back to the bevel points.
    let round = compute_join(&prev, &curr, 1.0, LineJoin::Round, 1.0);
    assert_eq!(round.left.len(), 2);
    assert_eq!(round.right.len(), 2);
}

#[test]
fn degenerate_segments_are_beveled() {
    let prev = seg(0.0, 0.0, 10.0, 0.0);
    let curr = seg(10.0, 0.0, 10.0, 0.0);
    let join = compute_join(&prev, &curr, 1.0, LineJoin::Miter, 10.0);
    for p in join.left.iter().chain(join.right.iter()) {
        assert!(p.x.is_finite() && p.y.is_finite());
    }
    assert_eq!(join, compute_join(&prev, &curr, 1.0, LineJoin::Bevel, 10.0));
}
