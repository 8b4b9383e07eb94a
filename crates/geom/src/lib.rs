#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]

//! Simple 2D geometric primitives on top of euclid.
//!
//! This crate is reexported in [quill](../quill/index.html).
//!
//! # Overview.
//!
//! This crate implements the maths used by the rest of the quill crates:
//!
//! - points, vectors, rectangles and affine transforms (aliases to euclid types),
//! - lines and line segments,
//! - quadratic and cubic bézier curves,
//! - the quantization helpers that make geometry bit-stable across platforms.
//!
//! All scalars are `f64`.
//!
//! # Flattening
//!
//! Flattening is the action of approximating a curve with a succession of line segments.
//!
//! The curves in this crate are flattened by recursive midpoint subdivision of their
//! parameter range: a span is emitted as a single line segment when the distance between
//! the curve point at the middle of the span and the middle of the span's chord is
//! within the tolerance, or when the span becomes narrower than
//! [`MINIMUM_FLATTENING_STEP`](constant.MINIMUM_FLATTENING_STEP.html).
//!
//! The tolerance threshold corresponds to the maximum distance between the curve and
//! its linear approximation. The smaller the tolerance is, the more precise the
//! approximation and the more segments are generated.
//!
//! # Determinism
//!
//! See the [quantize](quantize/index.html) module.

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

// Reexport dependencies.
pub use euclid;

pub mod cubic_bezier;
mod line;
pub mod quadratic_bezier;
pub mod quantize;
mod rect;
mod segment;

#[doc(inline)]
pub use crate::cubic_bezier::CubicBezierSegment;
#[doc(inline)]
pub use crate::line::{line_intersection, Line, LineSegment};
#[doc(inline)]
pub use crate::quadratic_bezier::QuadraticBezierSegment;
#[doc(inline)]
pub use crate::quantize::{quantize, quantize_point, quantize_vector, QUANTIZATION_EPSILON};
#[doc(inline)]
pub use crate::rect::{inflate, intersect_or_empty, rect_contains};
#[doc(inline)]
pub use crate::segment::{Segment, MINIMUM_FLATTENING_STEP};

pub mod math {
    //! f64 versions of the euclid types used everywhere. The other quill crates
    //! reexport them.

    use crate::euclid;

    /// Alias for ```euclid::default::Point2D<f64>```.
    pub type Point = euclid::default::Point2D<f64>;

    /// Alias for ```euclid::default::Vector2D<f64>```.
    pub type Vector = euclid::default::Vector2D<f64>;

    /// Alias for ```euclid::default::Size2D<f64>```.
    pub type Size = euclid::default::Size2D<f64>;

    /// Alias for ```euclid::default::Box2D<f64>```.
    ///
    /// Boxes have max-exclusive semantics: a point `p` is inside `b` iff
    /// `b.min.x <= p.x < b.max.x` and `b.min.y <= p.y < b.max.y`.
    pub type Box2D = euclid::default::Box2D<f64>;

    /// Alias for ```euclid::default::Transform2D<f64>```.
    ///
    /// The affine mapping `(x', y') = (a*x + c*y + e, b*x + d*y + f)` is built with
    /// `Transform::new(a, b, c, d, e, f)`.
    pub type Transform = euclid::default::Transform2D<f64>;

    /// An angle in radians (f64).
    pub type Angle = euclid::Angle<f64>;

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    /// Shorthand for `Size::new(w, h)`.
    #[inline]
    pub fn size(w: f64, h: f64) -> Size {
        Size::new(w, h)
    }

    /// Shorthand for `Box2D::new(point(min_x, min_y), point(max_x, max_y))`.
    #[inline]
    pub fn box2d(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Box2D {
        Box2D::new(point(min_x, min_y), point(max_x, max_y))
    }
}

pub use crate::math::{point, vector, Box2D, Point, Transform, Vector};
