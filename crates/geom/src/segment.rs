use crate::math::{Point, Vector};
use crate::LineSegment;

use std::ops::Range;

/// Parameter spans narrower than this are never subdivided further when flattening.
///
/// This bounds the recursion depth (and the number of generated segments) for any
/// curve, including degenerate ones where every control point is at the same position.
pub const MINIMUM_FLATTENING_STEP: f64 = 0.01;

/// Common APIs to segment types.
pub trait Segment: Copy + Sized {
    /// Start of the curve.
    fn from(&self) -> Point;

    /// End of the curve.
    fn to(&self) -> Point;

    /// Sample the curve at t (expecting t between 0 and 1).
    fn sample(&self, t: f64) -> Point;

    /// Sample the derivative at t (expecting t between 0 and 1).
    fn derivative(&self, t: f64) -> Vector;

    /// Approximates the curve with sequence of line segments.
    ///
    /// The `tolerance` parameter defines the maximum distance between the middle of each
    /// generated segment and the curve point at the middle of the segment's parameter span.
    ///
    /// At least one segment is always produced, and the parameter at the end of the
    /// final segment is `1.0`.
    fn for_each_flattened_with_t(
        &self,
        tolerance: f64,
        callback: &mut dyn FnMut(&LineSegment, Range<f64>),
    ) {
        let from = self.sample(0.0);
        let to = self.sample(1.0);
        subdivide(self, 0.0..1.0, from, to, tolerance, callback);
    }

    /// Approximates the curve with sequence of line segments.
    fn for_each_flattened(&self, tolerance: f64, callback: &mut dyn FnMut(&LineSegment)) {
        self.for_each_flattened_with_t(tolerance, &mut |segment, _| callback(segment));
    }

    /// Collects the flattened approximation of the curve into a vector.
    fn flattened(&self, tolerance: f64) -> Vec<LineSegment> {
        let mut segments = Vec::new();
        self.for_each_flattened(tolerance, &mut |segment| segments.push(*segment));
        segments
    }

    /// Compute the length of the segment using a flattened approximation.
    fn approximate_length(&self, tolerance: f64) -> f64 {
        let mut length = 0.0;
        self.for_each_flattened(tolerance, &mut |segment| length += segment.length());
        length
    }
}

fn subdivide<S: Segment>(
    curve: &S,
    t: Range<f64>,
    from: Point,
    to: Point,
    tolerance: f64,
    callback: &mut dyn FnMut(&LineSegment, Range<f64>),
) {
    let t_mid = (t.start + t.end) * 0.5;
    let curve_mid = curve.sample(t_mid);
    let chord_mid = from.lerp(to, 0.5);

    // A NaN error fails the first test and falls through to the span width test,
    // which always ends the recursion.
    let error = (curve_mid - chord_mid).length();
    if error <= tolerance || t.end - t.start < MINIMUM_FLATTENING_STEP {
        callback(&LineSegment { from, to }, t);
        return;
    }

    subdivide(curve, t.start..t_mid, from, curve_mid, tolerance, callback);
    subdivide(curve, t_mid..t.end, curve_mid, to, tolerance, callback);
}
