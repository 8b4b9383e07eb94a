use crate::math::{Box2D, Point};
use crate::path::Path;
use crate::{Color, Paint, Pixmap, RenderError};

/// A raster image that can be drawn by a renderer.
pub trait Image {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);

    /// The premultiplied RGBA8 value of a pixel.
    ///
    /// Coordinates outside of the image return transparent black.
    fn pixel(&self, x: u32, y: u32) -> [u8; 4];
}

/// A single shaped glyph.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Glyph {
    pub id: u32,
    pub advance: f64,
    pub offset: Point,
}

/// A run of glyphs drawn from a baseline origin.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct GlyphRun {
    pub glyphs: Vec<Glyph>,
    pub origin: Point,
    pub size: f64,
    pub font_key: String,
}

/// Basic text measurements.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
    pub ascent: f64,
    pub descent: f64,
}

/// The drawing interface implemented by backends.
///
/// Drawing happens within a session bracketed by [`begin`](#tymethod.begin) and
/// [`end`](#tymethod.end). The clip state is kept on a stack with
/// [`save`](#tymethod.save) and [`restore`](#tymethod.restore).
///
/// Text support is optional: the text methods do nothing by default and
/// [`supports_text`](#method.supports_text) tells whether a backend implements them.
pub trait Renderer {
    /// Starts a drawing session.
    ///
    /// Fails with `RenderError::AlreadyBegun` if a session is in progress.
    fn begin(&mut self, viewport: Box2D) -> Result<(), RenderError>;

    /// Ends the current drawing session and resets the state stack and clip.
    ///
    /// Fails with `RenderError::NotBegun` if no session is in progress.
    fn end(&mut self) -> Result<(), RenderError>;

    /// Pushes the current clip state.
    fn save(&mut self);

    /// Pops the clip state pushed by the last `save`.
    ///
    /// Does nothing if the stack is empty.
    fn restore(&mut self);

    /// Intersects the current clip with a rectangle.
    fn clip_rect(&mut self, rect: Box2D);

    /// Intersects the current clip with the interior of a path.
    fn clip_path(&mut self, path: &Path);

    /// Fills and/or strokes a path.
    ///
    /// Invalid paths are skipped.
    fn path(&mut self, path: &Path, paint: &Paint);

    /// Draws an image scaled to the destination rectangle.
    fn image(&mut self, _image: &dyn Image, _dst: Box2D) {}

    fn glyph_run(&mut self, _run: &GlyphRun, _color: Color) {}

    fn measure_text(&self, _text: &str, _size: f64, _font_key: &str) -> TextMetrics {
        TextMetrics::default()
    }

    /// Returns true if `glyph_run` and `measure_text` are implemented.
    fn supports_text(&self) -> bool {
        false
    }

    /// The raster surface of this renderer, if it has one.
    fn pixmap(&self) -> Option<&Pixmap> {
        None
    }
}
