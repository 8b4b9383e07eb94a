//! Snapping of coordinates to a fixed precision grid.
//!
//! Every coordinate, width and dash length is passed through [`quantize`] before it
//! is used in geometry computations and before it is handed to a rasterizer. Tiny
//! differences in floating point results (for example coming from a different
//! evaluation order in a math library) are absorbed by the grid, which makes the
//! generated geometry, and therefore the output pixels, identical across platforms.
//!
//! `quantize` is a pure function and is idempotent:
//! `quantize(quantize(v)) == quantize(v)` for every `v`.

use crate::math::{Point, Vector};

/// The size of a cell of the quantization grid, in source units.
pub const QUANTIZATION_EPSILON: f64 = 1e-6;

// Past this magnitude the grid is finer than the float representation can hold,
// and `round(v / eps) * eps` would drift from one call to the next.
const QUANTIZATION_LIMIT: f64 = (1u64 << 48) as f64 * QUANTIZATION_EPSILON;

/// Snaps `v` to the nearest multiple of [`QUANTIZATION_EPSILON`].
///
/// Non-finite values and values too large to be represented on the grid are
/// returned unchanged.
#[inline]
pub fn quantize(v: f64) -> f64 {
    if !v.is_finite() || v.abs() >= QUANTIZATION_LIMIT {
        return v;
    }

    (v / QUANTIZATION_EPSILON).round() * QUANTIZATION_EPSILON
}

/// Quantizes both coordinates of a point.
#[inline]
pub fn quantize_point(p: Point) -> Point {
    Point::new(quantize(p.x), quantize(p.y))
}

/// Quantizes both components of a vector.
#[inline]
pub fn quantize_vector(v: Vector) -> Vector {
    Vector::new(quantize(v.x), quantize(v.y))
}

#[test]
fn quantize_snaps_to_grid() {
    assert_eq!(quantize(0.0), 0.0);
    assert!((quantize(1.0) - 1.0).abs() < 1e-12);
    assert!((quantize(0.123_456_789) - 0.123_457).abs() < 1e-12);
    assert!((quantize(-2.000_000_4) + 2.0).abs() < 1e-12);
    assert!((quantize(10.000_000_6) - 10.000_001).abs() < 1e-9);
}

#[test]
fn quantize_is_idempotent() {
    let mut values = vec![
        0.0,
        -0.0,
        1e-7,
        4.9e-7,
        5.1e-7,
        0.1,
        0.2,
        0.3,
        1.0 / 3.0,
        -1.0 / 3.0,
        core::f64::consts::PI,
        123.456_789_123,
        -98_765.432_101_234,
        1e6 + 0.123_456_7,
        3.0e8,
        -3.0e8,
        1e12,
        f64::MAX,
        f64::MIN_POSITIVE,
        f64::INFINITY,
        f64::NEG_INFINITY,
    ];

    // A cheap deterministic spread of values across several magnitudes.
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    for _ in 0..2000 {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        let unit = (seed >> 11) as f64 / (1u64 << 53) as f64;
        let magnitude = 10f64.powi((seed % 12) as i32 - 3);
        values.push((unit - 0.5) * magnitude);
    }

    for v in values {
        let q = quantize(v);
        assert_eq!(quantize(q), q, "quantize is not idempotent for {v}");
    }
}

#[test]
fn quantize_passes_nan_through() {
    assert!(quantize(f64::NAN).is_nan());
}

#[test]
fn quantize_point_and_vector() {
    let p = quantize_point(Point::new(1.000_000_49, -3.000_000_51));
    assert_eq!(p, Point::new(quantize(1.000_000_49), quantize(-3.000_000_51)));
    let v = quantize_vector(Vector::new(0.5e-6, 2.0));
    assert_eq!(v.y, 2.0);
}
