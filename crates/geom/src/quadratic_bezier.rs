//! Quadratic bézier curve segments.

use crate::math::{Box2D, Point, Transform, Vector};
use crate::segment::Segment;
use crate::LineSegment;

/// A 2d curve segment defined by three points: the beginning of the segment, a control
/// point and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * from + 2 * (1 - t) * t * ctrl + t² * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct QuadraticBezierSegment {
    pub from: Point,
    pub ctrl: Point,
    pub to: Point,
}

impl QuadraticBezierSegment {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f64) -> Point {
        let t2 = t * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;

        Point::new(
            self.from.x * one_t2 + self.ctrl.x * 2.0 * one_t * t + self.to.x * t2,
            self.from.y * one_t2 + self.ctrl.y * 2.0 * one_t * t + self.to.y * t2,
        )
    }

    /// Sample the curve's derivative at t (expecting t between 0 and 1).
    pub fn derivative(&self, t: f64) -> Vector {
        ((self.ctrl - self.from) * (1.0 - t) + (self.to - self.ctrl) * t) * 2.0
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
        self.from == self.ctrl && self.ctrl == self.to
    }

    /// Applies the transform to this curve and returns the results.
    pub fn transformed(&self, transform: &Transform) -> Self {
        QuadraticBezierSegment {
            from: transform.transform_point(self.from),
            ctrl: transform.transform_point(self.ctrl),
            to: transform.transform_point(self.to),
        }
    }

    /// Returns a conservative rectangle that contains the curve.
    pub fn fast_bounding_box(&self) -> Box2D {
        Box2D {
            min: self.from.min(self.ctrl).min(self.to),
            max: self.from.max(self.ctrl).max(self.to),
        }
    }
}

impl Segment for QuadraticBezierSegment {
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
#[cfg(test)]
use crate::MINIMUM_FLATTENING_STEP;

#[test]
fn sample_end_points() {
    let curve = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(5.0, 10.0),
        to: point(10.0, 0.0),
    };
    assert_eq!(curve.sample(0.0), curve.from);
    assert_eq!(curve.sample(1.0), curve.to);
    assert_eq!(curve.sample(0.5), point(5.0, 5.0));
}

#[test]
fn flattening_is_continuous_and_within_tolerance() {
    let curve = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(50.0, 100.0),
        to: point(100.0, 0.0),
    };
    let tolerance = 0.5;
    let mut prev_t = 0.0;
    let mut prev = curve.from;
    curve.for_each_flattened_with_t(tolerance, &mut |segment, t| {
        assert_eq!(segment.from, prev);
        assert_eq!(t.start, prev_t);
        let mid = curve.sample((t.start + t.end) * 0.5);
        assert!((mid - segment.sample(0.5)).length() <= tolerance);
        prev = segment.to;
        prev_t = t.end;
    });
    assert_eq!(prev, curve.to);
    assert_eq!(prev_t, 1.0);
}

#[test]
fn flattening_count_grows_with_curvature() {
    let tolerance = 0.5;
    let flat = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(50.0, 0.5),
        to: point(100.0, 0.0),
    };
    let bent = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(50.0, 200.0),
        to: point(100.0, 0.0),
    };

    let flat_count = flat.flattened(tolerance).len();
    let bent_count = bent.flattened(tolerance).len();
    assert!(flat_count >= 1);
    assert!(bent_count > flat_count, "{bent_count} <= {flat_count}");
}

#[test]
fn degenerate_curve_terminates() {
    let p = point(3.0, 4.0);
    let curve = QuadraticBezierSegment { from: p, ctrl: p, to: p };
    assert!(curve.is_a_point());
    let segments = curve.flattened(0.5);
    assert_eq!(segments.len(), 1);
    assert!(segments[0].is_degenerate());
}

#[test]
fn nan_curve_terminates() {
    let curve = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(f64::NAN, 1.0),
        to: point(1.0, 0.0),
    };
    let segments = curve.flattened(0.5);
    // The span width cutoff bounds the recursion.
    assert!(segments.len() <= (1.0 / MINIMUM_FLATTENING_STEP) as usize * 2);
}
