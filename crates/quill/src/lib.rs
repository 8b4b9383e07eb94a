#![deny(bare_trait_objects)]

//! Deterministic 2D stroke geometry and software rendering in Rust.
//!
//! # Crates
//!
//! This meta-crate (`quill`) reexports the following sub-crates for convenience:
//!
//! * **quill_geom** - points, transforms, line segments, bézier curves and the
//!   quantization helpers.
//! * **quill_path** - the path data structure: verbs, points, events and sub-paths.
//! * **quill_stroke** - turns stroked paths into fillable outlines (dashes, joins, caps).
//! * **quill_render** - the `Renderer` trait, a null renderer and a software
//!   renderer drawing through tiny-skia.
//! * **quill_scene** - data space scales, plotting artists, layers and scene
//!   traversal.
//!
//! Each `quill_<name>` crate is reexported as a `<name>` module in `quill`. For example:
//!
//! ```ignore
//! use quill_stroke::Stroker;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! use quill::stroke::Stroker;
//! ```
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Determinism
//!
//! Every coordinate, width and dash length is snapped to a `1e-6` grid before any
//! geometry is computed, and colors are rounded to 8 bit channels before they are
//! composited. The same input produces the same pixels.
//!
//! # Examples
//!
//! ## Stroking a path
//!
//! ```
//! use quill::math::point;
//! use quill::path::Path;
//! use quill::stroke::{stroke_to_path, LineJoin, StrokeOptions};
//!
//! let mut path = Path::new();
//! path.move_to(point(0.0, 0.0))
//!     .line_to(point(10.0, 0.0))
//!     .quad_to(point(15.0, 0.0), point(15.0, 5.0));
//!
//! let options = StrokeOptions::DEFAULT
//!     .with_line_width(2.0)
//!     .with_line_join(LineJoin::Round)
//!     .with_dashes(vec![4.0, 2.0]);
//!
//! // One closed outline per dash.
//! let outline = stroke_to_path(&path, &options);
//! assert!(outline.subpaths().len() > 1);
//! ```
//!
//! ## Rendering a path
//!
//! ```
//! use quill::math::{box2d, point};
//! use quill::path::Path;
//! use quill::render::{Color, Paint, Renderer, SoftwareRenderer, SurfaceOptions};
//!
//! let mut renderer = SoftwareRenderer::new(&SurfaceOptions::new(32, 32)).unwrap();
//!
//! let mut triangle = Path::new();
//! triangle
//!     .move_to(point(4.0, 4.0))
//!     .line_to(point(28.0, 4.0))
//!     .line_to(point(16.0, 28.0))
//!     .close();
//!
//! renderer.begin(box2d(0.0, 0.0, 32.0, 32.0)).unwrap();
//! renderer.path(&triangle, &Paint::fill(Color::RED).with_stroke(Color::BLACK));
//! renderer.end().unwrap();
//!
//! let pixmap = renderer.into_pixmap();
//! assert_eq!(pixmap.pixel(16, 10), Some([255, 0, 0, 255]));
//! ```

pub use quill_scene as scene;
pub use scene::render;
pub use render::stroke;
pub use stroke::path;
pub use path::geom;

pub use path::math;
