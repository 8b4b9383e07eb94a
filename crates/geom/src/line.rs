use crate::math::{Box2D, Point, Transform, Vector};
use crate::segment::Segment;

use std::ops::Range;

/// Denominators smaller than this are treated as parallel lines.
const PARALLEL_EPSILON: f64 = 1e-10;

/// A linear segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

impl LineSegment {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: f64) -> Point {
        self.from.lerp(self.to, t)
    }

    #[inline]
    pub fn from(&self) -> Point {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Point {
        self.to
    }

    /// Return the sub-segment inside a given range of t.
    ///
    /// This is equivalent splitting at the range's end points.
    pub fn split_range(&self, t_range: Range<f64>) -> Self {
        LineSegment {
            from: self.from.lerp(self.to, t_range.start),
            to: self.from.lerp(self.to, t_range.end),
        }
    }

    #[inline]
    pub fn to_vector(&self) -> Vector {
        self.to - self.from
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.to_vector().length()
    }

    #[inline]
    pub fn square_length(&self) -> f64 {
        self.to_vector().square_length()
    }

    /// Returns true if both end points are at the same position.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.from == self.to
    }

    /// The unit direction vector of the segment, or `None` for a zero-length segment.
    pub fn direction(&self) -> Option<Vector> {
        let v = self.to_vector();
        let length = v.length();
        if length > 0.0 && length.is_finite() {
            Some(v / length)
        } else {
            None
        }
    }

    /// The unit vector perpendicular to the segment, pointing to its left
    /// (`(-dy, dx)` normalized), or `None` for a zero-length segment.
    pub fn normal(&self) -> Option<Vector> {
        self.direction().map(|d| Vector::new(-d.y, d.x))
    }

    /// Returns the segment translated by the given vector.
    #[inline]
    pub fn translate(&self, by: Vector) -> Self {
        LineSegment {
            from: self.from + by,
            to: self.to + by,
        }
    }

    #[inline]
    pub fn transformed(&self, transform: &Transform) -> Self {
        LineSegment {
            from: transform.transform_point(self.from),
            to: transform.transform_point(self.to),
        }
    }

    pub fn bounding_box(&self) -> Box2D {
        Box2D {
            min: self.from.min(self.to),
            max: self.from.max(self.to),
        }
    }

    /// Computes the intersection of the infinite lines supporting the two segments.
    ///
    /// Returns `None` if the lines are parallel (or nearly so).
    pub fn line_intersection(&self, other: &Self) -> Option<Point> {
        line_intersection(self.from, self.to, other.from, other.to)
    }
}

impl Segment for LineSegment {
    fn from(&self) -> Point {
        self.from
    }

    fn to(&self) -> Point {
        self.to
    }

    fn sample(&self, t: f64) -> Point {
        self.sample(t)
    }

    fn derivative(&self, _t: f64) -> Vector {
        self.to_vector()
    }

    fn approximate_length(&self, _tolerance: f64) -> f64 {
        self.length()
    }
}

/// An infinite line defined by a point and a vector.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Line {
    pub point: Point,
    pub vector: Vector,
}

impl Line {
    pub fn intersection(&self, other: &Self) -> Option<Point> {
        line_intersection(
            self.point,
            self.point + self.vector,
            other.point,
            other.point + other.vector,
        )
    }

    /// Signed distance from the line, positive on the left of the line's vector.
    pub fn signed_distance_to_point(&self, p: &Point) -> f64 {
        let length = self.vector.length();
        if length == 0.0 {
            return (*p - self.point).length();
        }

        self.vector.cross(*p - self.point) / length
    }
}

/// Intersection of the line passing through `p1` and `p2` with the line passing
/// through `p3` and `p4`, using the two-line parametric formula.
///
/// Returns `None` when the determinant is close to zero (parallel lines).
pub fn line_intersection(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<Point> {
    let denom = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if denom.abs() < PARALLEL_EPSILON || !denom.is_finite() {
        return None;
    }

    let t = ((p1.x - p3.x) * (p3.y - p4.y) - (p1.y - p3.y) * (p3.x - p4.x)) / denom;

    Some(Point::new(
        p1.x + t * (p2.x - p1.x),
        p1.y + t * (p2.y - p1.y),
    ))
}

#[cfg(test)]
use crate::math::{point, vector};

#[test]
fn intersection_of_perpendicular_lines() {
    let p = line_intersection(
        point(0.0, 1.0),
        point(10.0, 1.0),
        point(9.0, 0.0),
        point(9.0, 10.0),
    )
    .unwrap();
    assert!((p - point(9.0, 1.0)).length() < 1e-12);
}

#[test]
fn parallel_lines_do_not_intersect() {
    assert_eq!(
        line_intersection(
            point(0.0, 0.0),
            point(1.0, 0.0),
            point(0.0, 1.0),
            point(1.0, 1.0),
        ),
        None
    );

    let a = Line { point: point(0.0, 0.0), vector: vector(1.0, 1.0) };
    let b = Line { point: point(0.0, 1.0), vector: vector(2.0, 2.0) };
    assert_eq!(a.intersection(&b), None);
}

#[test]
fn segment_direction_and_length() {
    let s = LineSegment { from: point(0.0, 0.0), to: point(3.0, 4.0) };
    assert_eq!(s.length(), 5.0);
    let d = s.direction().unwrap();
    assert!((d - vector(0.6, 0.8)).length() < 1e-12);

    let degenerate = LineSegment { from: point(2.0, 2.0), to: point(2.0, 2.0) };
    assert!(degenerate.is_degenerate());
    assert_eq!(degenerate.direction(), None);
    assert_eq!(degenerate.normal(), None);

    let n = LineSegment { from: point(0.0, 0.0), to: point(10.0, 0.0) }.normal().unwrap();
    assert_eq!(n, vector(0.0, 1.0));
}

#[test]
fn line_segment_flattens_to_itself() {
    let s = LineSegment { from: point(0.0, 0.0), to: point(10.0, 10.0) };
    let flattened = s.flattened(0.5);
    assert_eq!(flattened, vec![s]);
    assert_eq!(s.sample(0.5), point(5.0, 5.0));
}

#[test]
fn signed_distance() {
    let l = Line { point: point(0.0, 0.0), vector: vector(1.0, 0.0) };
    assert_eq!(l.signed_distance_to_point(&point(3.0, 2.0)), 2.0);
    assert_eq!(l.signed_distance_to_point(&point(3.0, -2.0)), -2.0);
}
