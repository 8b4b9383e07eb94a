use crate::math::Box2D;
use crate::path::Path;
use crate::renderer::Image;
use crate::{Paint, RenderError, Renderer};

/// A renderer that draws nothing.
///
/// It enforces the session protocol and keeps track of the state stack depth and
/// of the number of drawing calls, which makes it useful to test code that drives
/// a renderer.
#[derive(Clone, Debug, Default)]
pub struct NullRenderer {
    began: bool,
    depth: usize,
    clips: usize,
    paths: usize,
    images: usize,
}

impl NullRenderer {
    pub fn new() -> Self {
        NullRenderer::default()
    }

    /// Returns true between `begin` and `end`.
    pub fn is_drawing(&self) -> bool {
        self.began
    }

    /// Current depth of the state stack.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of clip calls in the current session.
    pub fn num_clips(&self) -> usize {
        self.clips
    }

    /// Number of valid paths received since creation.
    pub fn num_paths(&self) -> usize {
        self.paths
    }

    pub fn num_images(&self) -> usize {
        self.images
    }
}

impl Renderer for NullRenderer {
    fn begin(&mut self, _viewport: Box2D) -> Result<(), RenderError> {
        if self.began {
            log::warn!("NullRenderer: begin called twice");
            return Err(RenderError::AlreadyBegun);
        }
        self.began = true;

        Ok(())
    }

    fn end(&mut self) -> Result<(), RenderError> {
        if !self.began {
            log::warn!("NullRenderer: end called before begin");
            return Err(RenderError::NotBegun);
        }
        self.began = false;
        self.depth = 0;
        self.clips = 0;

        Ok(())
    }

    fn save(&mut self) {
        self.depth += 1;
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn clip_rect(&mut self, _rect: Box2D) {
        self.clips += 1;
    }

    fn clip_path(&mut self, _path: &Path) {
        self.clips += 1;
    }

    fn path(&mut self, path: &Path, _paint: &Paint) {
        if !path.is_valid() {
            log::debug!("NullRenderer: skipping invalid path");
            return;
        }
        self.paths += 1;
    }

    fn image(&mut self, _image: &dyn Image, _dst: Box2D) {
        self.images += 1;
    }
}

#[cfg(test)]
use crate::math::{box2d, point};
#[cfg(test)]
use crate::path::Verb;

#[test]
fn session_protocol() {
    let mut r = NullRenderer::new();
    let viewport = box2d(0.0, 0.0, 100.0, 100.0);

    assert_eq!(r.end(), Err(RenderError::NotBegun));
    assert_eq!(r.begin(viewport), Ok(()));
    assert!(r.is_drawing());
    assert_eq!(r.begin(viewport), Err(RenderError::AlreadyBegun));
    assert!(r.is_drawing());
    assert_eq!(r.end(), Ok(()));
    assert_eq!(r.end(), Err(RenderError::NotBegun));
    assert_eq!(r.begin(viewport), Ok(()));
}

#[test]
fn restore_is_clamped() {
    let mut r = NullRenderer::new();
    r.restore();
    assert_eq!(r.depth(), 0);
    r.save();
    r.save();
    r.restore();
    assert_eq!(r.depth(), 1);
    r.restore();
    r.restore();
    assert_eq!(r.depth(), 0);
}

#[test]
fn invalid_paths_are_skipped() {
    let mut r = NullRenderer::new();
    let invalid = Path::from_parts(vec![Verb::MoveTo, Verb::LineTo], vec![point(0.0, 0.0)]);
    r.path(&invalid, &Paint::default());
    assert_eq!(r.num_paths(), 0);

    let mut valid = Path::new();
    valid.move_to(point(0.0, 0.0)).line_to(point(1.0, 1.0));
    r.path(&valid, &Paint::default());
    assert_eq!(r.num_paths(), 1);
}

#[test]
fn text_capability_defaults() {
    let r = NullRenderer::new();
    assert!(!r.supports_text());
    assert_eq!(r.measure_text("hello", 12.0, "sans"), crate::TextMetrics::default());
    assert!(r.pixmap().is_none());
}
