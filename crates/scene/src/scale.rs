use crate::math::{Point, Transform};

/// Maps a scalar data domain to the unit interval and back.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Scale {
    /// Maps `[min, max]` linearly to `[0, 1]`.
    Linear { min: f64, max: f64 },
    /// Maps `[min, max]` to `[0, 1]` in logarithmic space.
    ///
    /// Requires `0 < min`, `0 < max`, `min != max` and `base > 1`.
    Log { min: f64, max: f64, base: f64 },
}

impl Scale {
    /// The data domain as `(min, max)`.
    pub fn domain(&self) -> (f64, f64) {
        match *self {
            Scale::Linear { min, max } => (min, max),
            Scale::Log { min, max, .. } => (min, max),
        }
    }

    /// Returns false if the scale can't map values, for example with an empty domain.
    pub fn is_valid(&self) -> bool {
        match *self {
            Scale::Linear { min, max } => max - min != 0.0,
            Scale::Log { min, max, base } => base > 1.0 && min > 0.0 && max > 0.0 && min != max,
        }
    }

    /// Maps a data value to unit space.
    ///
    /// Degenerate scales map every value to `0`. Non-positive values are outside of
    /// the domain of logarithmic scales and map to NaN.
    pub fn forward(&self, x: f64) -> f64 {
        if !self.is_valid() {
            return 0.0;
        }

        match *self {
            Scale::Linear { min, max } => (x - min) / (max - min),
            Scale::Log { min, max, base } => {
                if x <= 0.0 {
                    return f64::NAN;
                }
                let (lo, hi) = log_range(min, max, base);
                (x.ln() / base.ln() - lo) / (hi - lo)
            }
        }
    }

    /// Maps a unit space value back to data space.
    ///
    /// Returns `None` if the scale is degenerate.
    pub fn inverse(&self, u: f64) -> Option<f64> {
        if !self.is_valid() {
            return None;
        }

        match *self {
            Scale::Linear { min, max } => Some(min + u * (max - min)),
            Scale::Log { min, max, base } => {
                let (lo, hi) = log_range(min, max, base);
                let x = base.powf(lo + u * (hi - lo));
                if x > 0.0 {
                    Some(x)
                } else {
                    None
                }
            }
        }
    }
}

fn log_range(min: f64, max: f64, base: f64) -> (f64, f64) {
    let lb = base.ln();
    (min.ln() / lb, max.ln() / lb)
}

/// Maps data coordinates to pixels.
///
/// Each axis goes through its own [`Scale`](enum.Scale.html) to unit space, and the
/// unit square is then mapped to pixels with an affine transform.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct DataTransform {
    pub x: Scale,
    pub y: Scale,
    pub to_pixels: Transform,
}

impl DataTransform {
    pub fn new(x: Scale, y: Scale, to_pixels: Transform) -> Self {
        DataTransform { x, y, to_pixels }
    }

    /// Linear scales over the unit square, and no transform.
    pub fn identity() -> Self {
        DataTransform {
            x: Scale::Linear { min: 0.0, max: 1.0 },
            y: Scale::Linear { min: 0.0, max: 1.0 },
            to_pixels: Transform::identity(),
        }
    }

    /// Maps a point from data space to pixels.
    pub fn apply(&self, p: Point) -> Point {
        let unit = Point::new(self.x.forward(p.x), self.y.forward(p.y));
        self.to_pixels.transform_point(unit)
    }

    /// Maps a point from pixels back to data space.
    ///
    /// Returns `None` if the affine transform is not invertible or either scale is
    /// degenerate.
    pub fn invert(&self, p: Point) -> Option<Point> {
        let unit = self.to_pixels.inverse()?.transform_point(p);
        let x = self.x.inverse(unit.x)?;
        let y = self.y.inverse(unit.y)?;

        Some(Point::new(x, y))
    }
}

impl Default for DataTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
use crate::math::point;

#[cfg(test)]
fn assert_approx(a: f64, b: f64) {
    assert!((a - b).abs() <= 1e-9 * b.abs().max(1.0), "{} != {}", a, b);
}

#[test]
fn linear_scale() {
    let s = Scale::Linear { min: -10.0, max: 30.0 };
    assert_approx(s.forward(-10.0), 0.0);
    assert_approx(s.forward(30.0), 1.0);
    assert_approx(s.forward(0.0), 0.25);
    // Values outside of the domain extrapolate.
    assert_approx(s.forward(70.0), 2.0);

    for &x in &[-10.0, -3.3, 0.0, 12.5, 29.0] {
        assert_approx(s.inverse(s.forward(x)).unwrap(), x);
    }
}

#[test]
fn log_scale() {
    let s = Scale::Log { min: 1.0, max: 1000.0, base: 10.0 };
    assert_approx(s.forward(1.0), 0.0);
    assert_approx(s.forward(10.0), 1.0 / 3.0);
    assert_approx(s.forward(1000.0), 1.0);
    assert!(s.forward(0.0).is_nan());
    assert!(s.forward(-5.0).is_nan());

    for &x in &[1.0, 2.5, 42.0, 999.0] {
        assert_approx(s.inverse(s.forward(x)).unwrap(), x);
    }

    let s2 = Scale::Log { min: 0.5, max: 64.0, base: 2.0 };
    assert_approx(s2.forward(4.0), 3.0 / 7.0);
}

#[test]
fn degenerate_scales() {
    let scales = [
        Scale::Linear { min: 1.0, max: 1.0 },
        Scale::Log { min: 1.0, max: 10.0, base: 1.0 },
        Scale::Log { min: 0.0, max: 10.0, base: 10.0 },
        Scale::Log { min: 5.0, max: 5.0, base: 10.0 },
    ];

    for s in &scales {
        assert!(!s.is_valid());
        assert_eq!(s.forward(3.0), 0.0);
        assert_eq!(s.inverse(0.5), None);
    }
}

#[test]
fn data_to_pixels() {
    // Unit square to a 100x80 area at (10, 10) with y pointing up.
    let t = DataTransform::new(
        Scale::Linear { min: 0.0, max: 4.0 },
        Scale::Linear { min: 0.0, max: 2.0 },
        Transform::new(100.0, 0.0, 0.0, -80.0, 10.0, 90.0),
    );

    let p = t.apply(point(1.0, 0.5));
    assert_approx(p.x, 35.0);
    assert_approx(p.y, 70.0);

    let back = t.invert(p).unwrap();
    assert_approx(back.x, 1.0);
    assert_approx(back.y, 0.5);

    let flat = DataTransform::new(
        Scale::Linear { min: 0.0, max: 1.0 },
        Scale::Linear { min: 0.0, max: 1.0 },
        Transform::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    );
    assert_eq!(flat.invert(point(0.5, 0.5)), None);
}

#[test]
fn identity_transform() {
    let t = DataTransform::default();
    assert_eq!(t.apply(point(0.25, 0.75)), point(0.25, 0.75));
}
