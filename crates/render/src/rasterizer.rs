//! Coverage rasterization on top of tiny-skia.
//!
//! Contours are flattened with the quill flattener, converted to `f32` and handed
//! to tiny-skia's anti-aliased scan converter with the nonzero rule. Coordinates
//! are clamped to a large but finite range first, so contours reaching far outside
//! of the surface are clipped rather than overflowing.

use crate::geom::{CubicBezierSegment, QuadraticBezierSegment, Segment};
use crate::math::Point;
use crate::path::{Path, PathEvent};

use tiny_skia::{FillRule, Mask, PathBuilder, Transform};

// Far enough outside of any surface to behave like infinity, while the bounds of
// a clamped path still fit in i32 pixel rectangles.
const COORD_LIMIT: f64 = (1 << 29) as f64;

#[inline]
fn to_f32(p: Point) -> (f32, f32) {
    (
        p.x.clamp(-COORD_LIMIT, COORD_LIMIT) as f32,
        p.y.clamp(-COORD_LIMIT, COORD_LIMIT) as f32,
    )
}

/// Accumulates polygons and computes their nonzero coverage.
///
/// Contours are closed implicitly when a new one starts and when filling.
/// Non-finite points are ignored.
pub struct Rasterizer {
    width: u32,
    height: u32,
    builder: PathBuilder,
    in_contour: bool,
}

impl Rasterizer {
    pub fn new(width: u32, height: u32) -> Self {
        Rasterizer {
            width,
            height,
            builder: PathBuilder::new(),
            in_contour: false,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Removes all contours and sets the size of the coverage area.
    pub fn reset(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.builder = PathBuilder::new();
        self.in_contour = false;
    }

    /// Starts a new contour, closing the current one.
    pub fn move_to(&mut self, to: Point) {
        if !(to.x.is_finite() && to.y.is_finite()) {
            self.in_contour = false;
            return;
        }

        let (x, y) = to_f32(to);
        self.builder.move_to(x, y);
        self.in_contour = true;
    }

    /// Adds an edge from the current position.
    ///
    /// Without a current contour, `to` starts a new one.
    pub fn line_to(&mut self, to: Point) {
        if !(to.x.is_finite() && to.y.is_finite()) {
            return;
        }

        if !self.in_contour {
            self.move_to(to);
            return;
        }

        let (x, y) = to_f32(to);
        self.builder.line_to(x, y);
    }

    /// Closes the current contour with an edge back to its first point.
    pub fn close(&mut self) {
        if self.in_contour {
            self.builder.close();
            self.in_contour = false;
        }
    }

    /// Adds all sub-paths of `path`, flattening curves with `tolerance`.
    pub fn add_path(&mut self, path: &Path, tolerance: f64) {
        for evt in path.iter() {
            match evt {
                PathEvent::Begin { at } => {
                    self.move_to(at);
                }
                PathEvent::Line { to, .. } => {
                    self.line_to(to);
                }
                PathEvent::Quadratic { from, ctrl, to } => {
                    QuadraticBezierSegment { from, ctrl, to }
                        .for_each_flattened(tolerance, &mut |segment| self.line_to(segment.to));
                }
                PathEvent::Cubic {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                } => {
                    CubicBezierSegment {
                        from,
                        ctrl1,
                        ctrl2,
                        to,
                    }
                    .for_each_flattened(tolerance, &mut |segment| self.line_to(segment.to));
                }
                PathEvent::Close { .. } => {
                    self.close();
                }
            }
        }
    }

    /// Removes the accumulated contours and returns them as a tiny-skia path.
    ///
    /// Returns `None` when nothing fillable was added.
    pub fn take_path(&mut self) -> Option<tiny_skia::Path> {
        self.in_contour = false;
        std::mem::replace(&mut self.builder, PathBuilder::new()).finish()
    }

    /// Computes the coverage of the accumulated contours as a mask and removes
    /// them.
    ///
    /// Returns `None` for an empty coverage area.
    pub fn fill_mask(&mut self) -> Option<Mask> {
        let path = self.take_path();
        let mut mask = Mask::new(self.width, self.height)?;
        if let Some(path) = path {
            mask.fill_path(&path, FillRule::Winding, true, Transform::identity());
        }

        Some(mask)
    }

    /// Computes the coverage of the accumulated contours and removes them.
    ///
    /// `coverage` is resized to `width * height` with one byte per pixel.
    pub fn fill(&mut self, coverage: &mut Vec<u8>) {
        coverage.clear();
        coverage.resize(self.width as usize * self.height as usize, 0);
        if let Some(mask) = self.fill_mask() {
            coverage.copy_from_slice(mask.data());
        }
    }
}

impl std::fmt::Debug for Rasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Rasterizer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("in_contour", &self.in_contour)
            .finish()
    }
}

#[cfg(test)]
use crate::math::point;

#[cfg(test)]
fn rect(r: &mut Rasterizer, x0: f64, y0: f64, x1: f64, y1: f64) {
    r.move_to(point(x0, y0));
    r.line_to(point(x1, y0));
    r.line_to(point(x1, y1));
    r.line_to(point(x0, y1));
    r.close();
}

#[test]
fn pixel_aligned_rectangle() {
    let mut r = Rasterizer::new(8, 8);
    rect(&mut r, 2.0, 2.0, 6.0, 5.0);
    let mut coverage = Vec::new();
    r.fill(&mut coverage);

    assert_eq!(coverage.len(), 64);
    for y in 0..8 {
        for x in 0..8 {
            let inside = (2..6).contains(&x) && (2..5).contains(&y);
            let expected = if inside { 255 } else { 0 };
            assert_eq!(coverage[y * 8 + x], expected, "({}, {})", x, y);
        }
    }
}

#[test]
fn half_covered_pixels() {
    let mut r = Rasterizer::new(4, 1);
    rect(&mut r, 0.5, 0.0, 2.0, 1.0);
    let mut coverage = Vec::new();
    r.fill(&mut coverage);

    assert!(coverage[0] > 100 && coverage[0] < 160, "{}", coverage[0]);
    assert_eq!(&coverage[1..], &[255, 0, 0]);
}

#[test]
fn nonzero_winding() {
    let mut r = Rasterizer::new(10, 10);
    // Two overlapping squares with the same orientation.
    rect(&mut r, 0.0, 0.0, 6.0, 6.0);
    rect(&mut r, 4.0, 4.0, 10.0, 10.0);
    // A hole drawn in the opposite orientation.
    r.move_to(point(1.0, 1.0));
    r.line_to(point(1.0, 3.0));
    r.line_to(point(3.0, 3.0));
    r.line_to(point(3.0, 1.0));
    r.close();

    let mut coverage = Vec::new();
    r.fill(&mut coverage);

    assert_eq!(coverage[5 * 10 + 5], 255);
    assert_eq!(coverage[2 * 10 + 2], 0);
    assert_eq!(coverage[0], 255);
    assert_eq!(coverage[9 * 10 + 9], 255);
    assert_eq!(coverage[9 * 10 + 1], 0);
}

#[test]
fn shapes_outside_of_the_surface() {
    let mut r = Rasterizer::new(4, 4);
    // Extends past every side.
    rect(&mut r, -10.0, -10.0, 20.0, 20.0);
    let mut coverage = Vec::new();
    r.fill(&mut coverage);
    assert!(coverage.iter().all(|c| *c == 255));

    r.reset(4, 4);
    rect(&mut r, 10.0, 0.0, 20.0, 4.0);
    rect(&mut r, 0.0, -20.0, 4.0, -10.0);
    r.fill(&mut coverage);
    assert!(coverage.iter().all(|c| *c == 0));
}

#[test]
fn very_large_coordinates() {
    let mut r = Rasterizer::new(6, 6);
    // A thin vertical band reaching far above and below the surface.
    rect(&mut r, 2.0, -1.0e7, 4.0, 1.0e7);
    let mut coverage = Vec::new();
    r.fill(&mut coverage);

    for y in 0..6 {
        for x in 0..6 {
            let expected = if (2..4).contains(&x) { 255 } else { 0 };
            assert_eq!(coverage[y * 6 + x], expected, "({}, {})", x, y);
        }
    }

    r.reset(6, 6);
    rect(&mut r, -1.0e30, -1.0e30, 1.0e30, 1.0e30);
    r.fill(&mut coverage);
    assert!(coverage.iter().all(|c| *c == 255));
}

#[test]
fn implicit_close_and_invalid_points() {
    let mut r = Rasterizer::new(4, 4);
    r.move_to(point(0.0, 0.0));
    r.line_to(point(4.0, 0.0));
    r.line_to(point(f64::NAN, 2.0));
    r.line_to(point(4.0, 4.0));
    r.line_to(point(0.0, 4.0));
    let mut coverage = Vec::new();
    r.fill(&mut coverage);
    assert!(coverage.iter().all(|c| *c == 255));
}

#[test]
fn curves_are_flattened() {
    let mut path = Path::new();
    path.move_to(point(0.0, 8.0))
        .quad_to(point(8.0, -8.0), point(16.0, 8.0))
        .close();

    let mut r = Rasterizer::new(16, 8);
    r.add_path(&path, 0.1);
    let mut coverage = Vec::new();
    r.fill(&mut coverage);

    // The peak of the curve is at y = 0.
    assert!(coverage[7 * 16 + 8] == 255);
    assert!(coverage[7 * 16] < 255);
    assert!(coverage[8] > 0);
}
