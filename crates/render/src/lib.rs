#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! Drawing surfaces for quill paths.
//!
//! The [`Renderer`](trait.Renderer.html) trait is the contract between the code
//! that produces paths and the backends that draw them. Two backends are provided:
//!
//! - [`NullRenderer`](struct.NullRenderer.html) tracks the session state and draws
//!   nothing, which is handy to exercise traversal code.
//! - [`SoftwareRenderer`](struct.SoftwareRenderer.html) rasterizes into a
//!   premultiplied RGBA8 [`Pixmap`](struct.Pixmap.html). Curves are flattened by
//!   the [`Rasterizer`](struct.Rasterizer.html) and the resulting polygons are
//!   scan converted and composited by [tiny-skia](https://docs.rs/tiny-skia).
//!
//! # Determinism
//!
//! Path coordinates are quantized before filling and stroking, and colors are
//! rounded to 8 bit channels before they reach the compositor. Rendering the same
//! input twice produces the same bytes.
//!
//! # Examples
//!
//! ```
//! use quill_render::{Color, Paint, Renderer, SoftwareRenderer, SurfaceOptions};
//! use quill_render::path::Path;
//! use quill_render::math::{box2d, point};
//!
//! let mut renderer = SoftwareRenderer::new(&SurfaceOptions::new(64, 64)).unwrap();
//!
//! let mut path = Path::new();
//! path.move_to(point(8.0, 8.0)).line_to(point(56.0, 56.0));
//!
//! renderer.begin(box2d(0.0, 0.0, 64.0, 64.0)).unwrap();
//! renderer.path(&path, &Paint::stroke(Color::BLACK, 4.0));
//! renderer.end().unwrap();
//!
//! assert_eq!(renderer.pixmap().and_then(|p| p.pixel(32, 32)), Some([0, 0, 0, 255]));
//! ```

pub use quill_stroke as stroke;
pub use tiny_skia;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod color;
mod error;
mod null;
mod paint;
mod pixmap;
mod rasterizer;
mod renderer;
mod software;

pub use crate::stroke::geom;
pub use crate::stroke::math;
pub use crate::stroke::path;

#[doc(inline)]
pub use crate::color::Color;
#[doc(inline)]
pub use crate::error::RenderError;
#[doc(inline)]
pub use crate::null::NullRenderer;
#[doc(inline)]
pub use crate::paint::Paint;
#[doc(inline)]
pub use crate::pixmap::{Pixmap, MAX_SURFACE_DIMENSION};
#[doc(inline)]
pub use crate::rasterizer::Rasterizer;
#[doc(inline)]
pub use crate::renderer::{Glyph, GlyphRun, Image, Renderer, TextMetrics};
#[doc(inline)]
pub use crate::software::{SoftwareRenderer, SurfaceOptions};
