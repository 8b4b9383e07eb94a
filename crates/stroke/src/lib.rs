#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! Stroke geometry.
//!
//! This crate turns a path and a stroke style into a new path whose filled
//! interior (nonzero winding rule) covers the stroke. The pipeline is:
//!
//! 1. quantize the input coordinates and the line width,
//! 2. apply the dash pattern, if any ([`apply_dashes`](fn.apply_dashes.html)),
//! 3. split the path into sub-paths and flatten them into line segments,
//! 4. offset each segment by half the line width on both sides, join consecutive
//!    segments ([`compute_join`](fn.compute_join.html)) and cap open ends
//!    ([`cap_points`](fn.cap_points.html)),
//! 5. assemble one closed outline per open sub-path, or one ring per side of a
//!    closed sub-path, and quantize the result.
//!
//! Stroking never fails: invalid paths produce an empty outline, invalid dash
//! patterns degrade to a solid stroke and degenerate geometry falls back to bevel
//! joins.
//!
//! # Examples
//!
//! ```
//! use quill_stroke::{stroke_to_path, LineCap, StrokeOptions};
//! use quill_stroke::path::Path;
//! use quill_stroke::math::{box2d, point};
//!
//! let mut path = Path::new();
//! path.move_to(point(0.0, 0.0)).line_to(point(10.0, 0.0));
//!
//! let options = StrokeOptions::DEFAULT
//!     .with_line_width(2.0)
//!     .with_line_cap(LineCap::Square);
//!
//! let outline = stroke_to_path(&path, &options);
//! assert_eq!(outline.fast_bounding_box(), box2d(-1.0, -1.0, 11.0, 1.0));
//! ```

pub use quill_path as path;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod cap;
mod dash;
mod join;
mod stroker;
mod style;

pub use crate::path::geom;
pub use crate::path::math;

#[doc(inline)]
pub use crate::cap::{cap_points, CapPoints, MAX_ROUND_CAP_SEGMENTS, MIN_ROUND_CAP_SEGMENTS};
#[doc(inline)]
pub use crate::dash::{apply_dashes, dash_segments, is_valid_dash_pattern, DASH_EPSILON};
#[doc(inline)]
pub use crate::join::{compute_join, segment_normal, JoinPoints};
#[doc(inline)]
pub use crate::stroker::{stroke_to_path, Stroker};
#[doc(inline)]
pub use crate::style::{LineCap, LineJoin, StrokeOptions};
