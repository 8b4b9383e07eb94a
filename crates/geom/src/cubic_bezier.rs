//! Cubic bézier curve segments.

use crate::math::{Box2D, Point, Transform, Vector};
use crate::segment::Segment;
use crate::LineSegment;

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment {
    pub from: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

impl CubicBezierSegment {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f64) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        Point::new(
            self.from.x * one_t3
                + self.ctrl1.x * 3.0 * one_t2 * t
                + self.ctrl2.x * 3.0 * one_t * t2
                + self.to.x * t3,
            self.from.y * one_t3
                + self.ctrl1.y * 3.0 * one_t2 * t
                + self.ctrl2.y * 3.0 * one_t * t2
                + self.to.y * t3,
        )
    }

    /// Sample the curve's derivative at t (expecting t between 0 and 1).
    pub fn derivative(&self, t: f64) -> Vector {
        let one_t = 1.0 - t;
        (self.ctrl1 - self.from) * 3.0 * one_t * one_t
            + (self.ctrl2 - self.ctrl1) * 6.0 * one_t * t
            + (self.to - self.ctrl2) * 3.0 * t * t
    }

    #[inline]
    pub fn baseline(&self) -> LineSegment {
        LineSegment {
            from: self.from,
            to: self.to,
        }
    }

    /// Returns true if all of the control points are at the same position.
    pub fn is_a_point(&self) -> bool {
        self.from == self.ctrl1 && self.ctrl1 == self.ctrl2 && self.ctrl2 == self.to
    }

    /// Applies the transform to this curve and returns the results.
    pub fn transformed(&self, transform: &Transform) -> Self {
        CubicBezierSegment {
            from: transform.transform_point(self.from),
            ctrl1: transform.transform_point(self.ctrl1),
            ctrl2: transform.transform_point(self.ctrl2),
            to: transform.transform_point(self.to),
        }
    }

    /// Returns a conservative rectangle that contains the curve.
    pub fn fast_bounding_box(&self) -> Box2D {
        Box2D {
            min: self.from.min(self.ctrl1).min(self.ctrl2).min(self.to),
            max: self.from.max(self.ctrl1).max(self.ctrl2).max(self.to),
        }
    }
}

impl Segment for CubicBezierSegment {
    fn from(&self) -> Point {
        self.from
    }

    fn to(&self) -> Point {
        self.to
    }

    fn sample(&self, t: f64) -> Point {
        self.sample(t)
    }

    fn derivative(&self, t: f64) -> Vector {
        self.derivative(t)
    }
}

#[cfg(test)]
use crate::math::point;

#[test]
fn sample_end_points() {
    let curve = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(0.0, 10.0),
        ctrl2: point(10.0, 10.0),
        to: point(10.0, 0.0),
    };
    assert_eq!(curve.sample(0.0), curve.from);
    assert_eq!(curve.sample(1.0), curve.to);
    assert!((curve.sample(0.5) - point(5.0, 7.5)).length() < 1e-12);
}

#[test]
fn flattening_ends_at_the_curve_end() {
    let curve = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(0.0, 100.0),
        ctrl2: point(100.0, -100.0),
        to: point(100.0, 0.0),
    };
    let segments = curve.flattened(0.5);
    assert!(segments.len() > 1);
    assert_eq!(segments[0].from, curve.from);
    assert_eq!(segments[segments.len() - 1].to, curve.to);
    for pair in segments.windows(2) {
        assert_eq!(pair[0].to, pair[1].from);
    }
}

#[test]
fn tighter_tolerance_produces_more_segments() {
    let curve = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(20.0, 80.0),
        ctrl2: point(80.0, 80.0),
        to: point(100.0, 0.0),
    };
    assert!(curve.flattened(0.05).len() > curve.flattened(2.0).len());
}

#[test]
fn degenerate_cubic_terminates() {
    let p = point(-1.0, 7.0);
    let curve = CubicBezierSegment { from: p, ctrl1: p, ctrl2: p, to: p };
    assert!(curve.is_a_point());
    let segments = curve.flattened(0.5);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].from, p);
    assert_eq!(segments[0].to, p);
}

#[test]
fn approximate_length_of_straight_cubic() {
    let curve = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(1.0, 0.0),
        ctrl2: point(2.0, 0.0),
        to: point(3.0, 0.0),
    };
    assert!((curve.approximate_length(0.1) - 3.0).abs() < 1e-9);
}
