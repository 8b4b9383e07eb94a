//! The default path data structure.
//!

use crate::error::PathError;
use crate::iterator::Iter;
use crate::math::*;
use crate::geom::quantize_point;

use std::fmt;

/// The drawing commands of a [`Path`](struct.Path.html).
///
/// Verbs don't carry their points: the points are stored in a separate flat buffer
/// and each verb consumes [`num_points`](#method.num_points) of them in order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Verb {
    MoveTo,
    LineTo,
    QuadTo,
    CubicTo,
    Close,
}

impl Verb {
    /// Number of points consumed by this verb.
    #[inline]
    pub fn num_points(self) -> usize {
        match self {
            Verb::MoveTo | Verb::LineTo => 1,
            Verb::QuadTo => 2,
            Verb::CubicTo => 3,
            Verb::Close => 0,
        }
    }
}

/// A simple path data structure.
///
/// # Representation
///
/// Paths contain two buffers:
/// - a buffer of verbs (MoveTo, LineTo, QuadTo, CubicTo or Close),
/// - and a buffer of points.
///
/// The order of storage for points is determined by the sequence of verbs.
///
/// ```ascii
///  ________________________________
/// |        |        |        |
/// | MoveTo | LineTo | QuadTo | ...
/// |________|________|________|_
///  ________________________________________
/// |         |         |          |         |
/// |start x,y| to x, y | ctrl x,y | to x, y | ...
/// |_________|_________|__________|_________|_
/// ```
///
/// The builder methods always keep both buffers consistent. A path assembled
/// from raw parts with [`from_parts`](#method.from_parts) may not be, which is
/// what [`validate`](#method.validate) checks.
#[derive(Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    verbs: Vec<Verb>,
    points: Vec<Point>,
}

impl Path {
    /// Creates an empty `Path`.
    #[inline]
    pub fn new() -> Path {
        Path {
            verbs: Vec::new(),
            points: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(verbs: usize, points: usize) -> Path {
        Path {
            verbs: Vec::with_capacity(verbs),
            points: Vec::with_capacity(points),
        }
    }

    /// Creates a path from raw buffers without checking them.
    pub fn from_parts(verbs: Vec<Verb>, points: Vec<Point>) -> Path {
        Path { verbs, points }
    }

    #[inline]
    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    pub fn move_to(&mut self, to: Point) -> &mut Self {
        self.verbs.push(Verb::MoveTo);
        self.points.push(to);
        self
    }

    pub fn line_to(&mut self, to: Point) -> &mut Self {
        self.verbs.push(Verb::LineTo);
        self.points.push(to);
        self
    }

    pub fn quad_to(&mut self, ctrl: Point, to: Point) -> &mut Self {
        self.verbs.push(Verb::QuadTo);
        self.points.push(ctrl);
        self.points.push(to);
        self
    }

    pub fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> &mut Self {
        self.verbs.push(Verb::CubicTo);
        self.points.push(ctrl1);
        self.points.push(ctrl2);
        self.points.push(to);
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.verbs.push(Verb::Close);
        self
    }

    pub fn clear(&mut self) {
        self.verbs.clear();
        self.points.clear();
    }

    /// Appends the verbs and points of another path.
    pub fn extend(&mut self, other: &Path) {
        self.verbs.extend_from_slice(&other.verbs);
        self.points.extend_from_slice(&other.points);
    }

    /// Returns the number of points the verbs of this path consume.
    pub fn expected_num_points(&self) -> usize {
        self.verbs.iter().map(|verb| verb.num_points()).sum()
    }

    /// Checks that the number of points matches the verbs.
    pub fn validate(&self) -> Result<(), PathError> {
        let expected = self.expected_num_points();
        if expected != self.points.len() {
            return Err(PathError::VertexCountMismatch {
                expected,
                found: self.points.len(),
            });
        }

        Ok(())
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Iterates over the path's events.
    ///
    /// Iteration stops early if the path runs out of points.
    pub fn iter(&self) -> Iter {
        Iter::new(&self.verbs, &self.points)
    }

    /// Returns a copy of this path with every coordinate snapped to the quantization grid.
    pub fn quantized(&self) -> Path {
        Path {
            verbs: self.verbs.clone(),
            points: self.points.iter().map(|p| quantize_point(*p)).collect(),
        }
    }

    /// Applies a transform to all points of the path.
    pub fn transformed(mut self, transform: &Transform) -> Self {
        for p in self.points.iter_mut() {
            *p = transform.transform_point(*p);
        }

        self
    }

    /// Bounding box of all points of the path, control points included.
    ///
    /// Returns an empty box at the origin for an empty path.
    pub fn fast_bounding_box(&self) -> Box2D {
        crate::aabb::fast_bounding_box(self.iter())
    }

    /// The last point of the path, if any.
    pub fn last_point(&self) -> Option<Point> {
        self.points.last().cloned()
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = crate::PathEvent;
    type IntoIter = Iter<'l>;

    fn into_iter(self) -> Iter<'l> {
        self.iter()
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fn write_point(formatter: &mut fmt::Formatter, point: Point) -> fmt::Result {
            write!(formatter, " ")?;
            fmt::Debug::fmt(&point.x, formatter)?;
            write!(formatter, " ")?;
            fmt::Debug::fmt(&point.y, formatter)
        }

        write!(formatter, "\"")?;

        let mut points = self.points.iter();
        for verb in &self.verbs {
            let cmd = match verb {
                Verb::MoveTo => " M",
                Verb::LineTo => " L",
                Verb::QuadTo => " Q",
                Verb::CubicTo => " C",
                Verb::Close => " Z",
            };
            write!(formatter, "{}", cmd)?;
            for _ in 0..verb.num_points() {
                match points.next() {
                    Some(p) => write_point(formatter, *p)?,
                    None => write!(formatter, " ?")?,
                }
            }
        }

        write!(formatter, "\"")
    }
}

#[test]
fn builder_keeps_buffers_consistent() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0))
        .line_to(point(1.0, 0.0))
        .quad_to(point(2.0, 0.0), point(2.0, 1.0))
        .cubic_to(point(2.0, 2.0), point(1.0, 2.0), point(0.0, 2.0))
        .close();

    assert_eq!(
        path.verbs(),
        &[Verb::MoveTo, Verb::LineTo, Verb::QuadTo, Verb::CubicTo, Verb::Close]
    );
    assert_eq!(path.points().len(), 7);
    assert_eq!(path.expected_num_points(), 7);
    assert!(path.is_valid());
}

#[test]
fn vertex_count_mismatch() {
    let path = Path::from_parts(
        vec![Verb::MoveTo, Verb::QuadTo],
        vec![point(0.0, 0.0), point(1.0, 1.0)],
    );

    assert_eq!(
        path.validate(),
        Err(PathError::VertexCountMismatch {
            expected: 3,
            found: 2
        })
    );
    assert!(!path.is_valid());

    let too_many = Path::from_parts(
        vec![Verb::MoveTo, Verb::Close],
        vec![point(0.0, 0.0), point(1.0, 1.0)],
    );
    assert!(!too_many.is_valid());

    assert!(Path::new().is_valid());
}

#[test]
fn extend_and_clear() {
    let mut a = Path::new();
    a.move_to(point(0.0, 0.0)).line_to(point(1.0, 1.0));
    let mut b = Path::new();
    b.move_to(point(5.0, 5.0)).line_to(point(6.0, 5.0)).close();

    a.extend(&b);
    assert_eq!(a.verbs().len(), 5);
    assert_eq!(a.points().len(), 4);
    assert!(a.is_valid());
    assert_eq!(a.last_point(), Some(point(6.0, 5.0)));

    a.clear();
    assert!(a.is_empty());
    assert!(a.points().is_empty());
}

#[test]
fn transformed_path() {
    let mut path = Path::new();
    path.move_to(point(1.0, 1.0)).line_to(point(2.0, 3.0));

    // Scale by 2 then translate by (10, 20).
    let transform = Transform::new(2.0, 0.0, 0.0, 2.0, 10.0, 20.0);
    let path = path.transformed(&transform);
    assert_eq!(path.points(), &[point(12.0, 22.0), point(14.0, 26.0)]);
}

#[test]
fn quantized_path() {
    let mut path = Path::new();
    path.move_to(point(0.100_000_000_3, -4.999_999_9))
        .line_to(point(1.0, 1.0));

    let q = path.quantized();
    assert_eq!(q.verbs(), path.verbs());
    assert_eq!(q.quantized(), q);
    assert!((q.points()[0].x - 0.1).abs() < 1e-12);
    assert!((q.points()[0].y + 5.0).abs() < 1e-12);
}

#[test]
fn debug_format() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0)).line_to(point(1.0, 2.0)).close();
    assert_eq!(format!("{:?}", path), "\" M 0.0 0.0 L 1.0 2.0 Z\"");
}
