#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! A thin scene layer on top of quill renderers.
//!
//! Artists describe their geometry in data space. A [`DataTransform`](struct.DataTransform.html)
//! maps data coordinates to the unit square with one [`Scale`](enum.Scale.html) per axis,
//! and then to pixels with an affine transform. Artists are grouped in clipped
//! [`Layer`](struct.Layer.html)s, drawn in increasing z order, and a
//! [`Scene`](struct.Scene.html) drives a whole drawing session on a
//! [`Renderer`](../quill_render/trait.Renderer.html).
//!
//! Besides [`PathArtist`](struct.PathArtist.html), which draws arbitrary paths, the
//! usual plotting artists are provided: [`LineArtist`](struct.LineArtist.html),
//! [`ScatterArtist`](struct.ScatterArtist.html), [`BarArtist`](struct.BarArtist.html),
//! [`FillArtist`](struct.FillArtist.html) and [`GridArtist`](struct.GridArtist.html).
//!
//! # Examples
//!
//! ```
//! use quill_scene::{DataTransform, Layer, PathArtist, Scale, Scene};
//! use quill_scene::render::{Color, NullRenderer, Paint};
//! use quill_scene::path::Path;
//! use quill_scene::math::{box2d, point, Transform};
//!
//! let transform = DataTransform::new(
//!     Scale::Linear { min: 0.0, max: 10.0 },
//!     Scale::Log { min: 1.0, max: 1000.0, base: 10.0 },
//!     Transform::new(100.0, 0.0, 0.0, -100.0, 0.0, 100.0),
//! );
//!
//! let mut line = Path::new();
//! line.move_to(point(0.0, 1.0)).line_to(point(10.0, 1000.0));
//!
//! let mut layer = Layer::new(box2d(0.0, 0.0, 100.0, 100.0), transform);
//! layer.add(PathArtist::new(line, Paint::stroke(Color::BLUE, 2.0)));
//!
//! let mut scene = Scene::new(box2d(0.0, 0.0, 100.0, 100.0));
//! scene.add_layer(layer);
//!
//! let mut renderer = NullRenderer::new();
//! scene.render(&mut renderer).unwrap();
//! assert_eq!(renderer.num_paths(), 1);
//! ```

pub use quill_render as render;

pub use crate::render::geom;
pub use crate::render::math;
pub use crate::render::path;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod artist;
mod bar;
mod fill;
mod grid;
mod line;
mod scale;
mod scatter;
mod scene;

#[doc(inline)]
pub use crate::artist::{Artist, PathArtist};
#[doc(inline)]
pub use crate::bar::{BarArtist, BarOrientation};
#[doc(inline)]
pub use crate::fill::FillArtist;
#[doc(inline)]
pub use crate::grid::{GridArtist, GridAxis};
#[doc(inline)]
pub use crate::line::LineArtist;
#[doc(inline)]
pub use crate::scale::{DataTransform, Scale};
#[doc(inline)]
pub use crate::scatter::{Marker, ScatterArtist};
#[doc(inline)]
pub use crate::scene::{sorted_by_z, Layer, Scene};
