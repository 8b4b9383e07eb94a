#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::match_like_matches_macro)]

//! Data structures and traits to work with paths (vector graphics).
//!
//! A [`Path`](struct.Path.html) is a sequence of [verbs](enum.Verb.html) paired with a
//! flat sequence of points. Each verb consumes a fixed number of points:
//!
//! | verb      | points                      |
//! |-----------|-----------------------------|
//! | `MoveTo`  | 1 (the new current position) |
//! | `LineTo`  | 1 (end point)               |
//! | `QuadTo`  | 2 (control, end point)      |
//! | `CubicTo` | 3 (control 1, control 2, end point) |
//! | `Close`   | 0                           |
//!
//! A path whose point count does not match its verbs is invalid. Invalid paths can be
//! built (for example with [`Path::from_parts`](struct.Path.html#method.from_parts)) but
//! are rejected by [`Path::validate`](struct.Path.html#method.validate), and consumers
//! such as renderers skip them.
//!
//! This crate is reexported in [quill](../quill/index.html).
//!
//! # Examples
//!
//! ```
//! use quill_path::Path;
//! use quill_path::math::point;
//!
//! let mut path = Path::new();
//! path.move_to(point(0.0, 0.0))
//!     .line_to(point(1.0, 2.0))
//!     .quad_to(point(2.0, 3.0), point(2.0, 0.0))
//!     .close();
//!
//! assert!(path.is_valid());
//!
//! for event in &path {
//!     println!("{:?}", event);
//! }
//! ```

pub use quill_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod aabb;
mod error;
mod events;
pub mod iterator;
pub mod path;
pub mod segments;

#[doc(inline)]
pub use crate::error::PathError;
pub use crate::events::PathEvent;
#[doc(inline)]
pub use crate::path::{Path, Verb};

pub use crate::geom::math;

/// The fill rule defines how to determine what is inside and what is outside of the shape.
///
/// See the SVG specification.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum FillRule {
    EvenOdd,
    NonZero,
}

impl FillRule {
    #[inline]
    pub fn is_in(&self, winding_number: i32) -> bool {
        match *self {
            FillRule::EvenOdd => winding_number % 2 != 0,
            FillRule::NonZero => winding_number != 0,
        }
    }

    #[inline]
    pub fn is_out(&self, winding_number: i32) -> bool {
        !self.is_in(winding_number)
    }
}

#[test]
fn fill_rules() {
    assert!(FillRule::NonZero.is_in(2));
    assert!(FillRule::NonZero.is_in(-1));
    assert!(FillRule::NonZero.is_out(0));
    assert!(FillRule::EvenOdd.is_out(2));
    assert!(FillRule::EvenOdd.is_in(-3));
}
