use crate::geom::intersect_or_empty;
use crate::math::Box2D;
use crate::path::Path;
use crate::rasterizer::Rasterizer;
use crate::renderer::Image;
use crate::stroke::{StrokeOptions, Stroker};
use crate::{Color, Paint, Pixmap, RenderError, Renderer};

use tiny_skia::{FillRule, FilterQuality, Mask, PixmapPaint, Transform};
/// Parameters of a [`SoftwareRenderer`](struct.SoftwareRenderer.html) surface.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SurfaceOptions {
    pub width: u32,
    pub height: u32,
    /// The color the surface is cleared with when it is created.
    ///
    /// Default value: `Color::WHITE`.
    pub background: Color,
}

impl SurfaceOptions {
    pub const DEFAULT_BACKGROUND: Color = Color::WHITE;

    pub const fn new(width: u32, height: u32) -> Self {
        SurfaceOptions {
            width,
            height,
            background: Self::DEFAULT_BACKGROUND,
        }
    }

    pub const fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }
}

#[derive(Clone, Default)]
struct State {
    clip: Option<Box2D>,
    // The clip rectangle and clip paths combined, in surface pixels.
    mask: Option<Mask>,
}

/// A renderer that draws into a [`Pixmap`](struct.Pixmap.html).
///
/// Paths are filled with the nonzero winding rule and composited with the
/// source-over operator in premultiplied alpha by tiny-skia. Strokes are converted
/// to outlines with a [`Stroker`] and filled.
///
/// Clipping combines an axis-aligned rectangle, snapped outwards to whole pixels,
/// with the anti-aliased coverage of the paths given to `clip_path`, in a single
/// 8 bit mask.
pub struct SoftwareRenderer {
    pixmap: Pixmap,
    rasterizer: Rasterizer,
    stroker: Stroker,
    tolerance: f64,
    began: bool,
    viewport: Box2D,
    state: State,
    stack: Vec<State>,
}

impl SoftwareRenderer {
    /// Creates a renderer with a surface cleared to the background color.
    pub fn new(options: &SurfaceOptions) -> Result<Self, RenderError> {
        let mut pixmap = Pixmap::new(options.width, options.height)?;
        pixmap.fill(options.background);

        Ok(SoftwareRenderer {
            rasterizer: Rasterizer::new(options.width, options.height),
            pixmap,
            stroker: Stroker::new(),
            tolerance: StrokeOptions::DEFAULT_TOLERANCE,
            began: false,
            viewport: Box2D::zero(),
            state: State::default(),
            stack: Vec::new(),
        })
    }

    /// The viewport of the current (or last) session.
    pub fn viewport(&self) -> Box2D {
        self.viewport
    }

    /// The current clip rectangle, if any.
    pub fn clip(&self) -> Option<Box2D> {
        self.state.clip
    }

    /// Takes the surface out of the renderer.
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    fn to_tiny_skia_path(&mut self, path: &Path) -> Option<tiny_skia::Path> {
        self.rasterizer
            .reset(self.pixmap.width(), self.pixmap.height());
        self.rasterizer.add_path(path, self.tolerance);
        self.rasterizer.take_path()
    }

    /// A mask of the surface's size letting everything through.
    fn full_mask(&self) -> Option<Mask> {
        let mut mask = Mask::new(self.pixmap.width(), self.pixmap.height())?;
        mask.data_mut().fill(255);
        Some(mask)
    }

    /// Restricts the clip mask to the pixels covered by `rect`, snapped outwards.
    fn intersect_mask_with_rect(&mut self, rect: &Box2D) {
        let w = self.pixmap.width() as f64;
        let h = self.pixmap.height() as f64;
        let x0 = rect.min.x.floor().clamp(0.0, w) as usize;
        let y0 = rect.min.y.floor().clamp(0.0, h) as usize;
        let x1 = (rect.max.x.ceil().clamp(0.0, w) as usize).max(x0);
        let y1 = (rect.max.y.ceil().clamp(0.0, h) as usize).max(y0);

        let Some(mut mask) = self.state.mask.take().or_else(|| self.full_mask()) else {
            return;
        };

        let width = self.pixmap.width() as usize;
        for (row, line) in mask.data_mut().chunks_exact_mut(width).enumerate() {
            for (col, m) in line.iter_mut().enumerate() {
                if row < y0 || row >= y1 || col < x0 || col >= x1 {
                    *m = 0;
                }
            }
        }

        self.state.mask = Some(mask);
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        let [r, g, b, a] = color.to_rgba8();
        if a == 0 {
            return;
        }

        let Some(path) = self.to_tiny_skia_path(path) else {
            return;
        };

        let mut paint = tiny_skia::Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;

        self.pixmap.as_tiny_skia_mut().fill_path(
            &path,
            &paint,
            FillRule::Winding,
            Transform::identity(),
            self.state.mask.as_ref(),
        );
    }
}

impl Renderer for SoftwareRenderer {
    fn begin(&mut self, viewport: Box2D) -> Result<(), RenderError> {
        if self.began {
            log::warn!("begin called twice");
            return Err(RenderError::AlreadyBegun);
        }

        log::trace!("begin {:?}", viewport);
        self.began = true;
        self.viewport = viewport;
        self.state = State::default();
        self.stack.clear();

        Ok(())
    }

    fn end(&mut self) -> Result<(), RenderError> {
        if !self.began {
            log::warn!("end called before begin");
            return Err(RenderError::NotBegun);
        }

        log::trace!("end");
        self.began = false;
        self.state = State::default();
        self.stack.clear();

        Ok(())
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn clip_rect(&mut self, rect: Box2D) {
        let clip = match self.state.clip {
            Some(current) => intersect_or_empty(&current, &rect),
            None => rect,
        };
        log::trace!("clip {:?}", clip);
        self.state.clip = Some(clip);
        self.intersect_mask_with_rect(&clip);
    }

    fn clip_path(&mut self, path: &Path) {
        if !path.is_valid() {
            log::debug!("ignoring invalid clip path");
            return;
        }

        let path = path.quantized();
        let clip = self.to_tiny_skia_path(&path);
        if self.state.mask.is_none() {
            self.state.mask = self.full_mask();
        }

        if let Some(mask) = self.state.mask.as_mut() {
            match clip {
                Some(clip) => {
                    mask.intersect_path(&clip, FillRule::Winding, true, Transform::identity());
                }
                None => mask.data_mut().fill(0),
            }
        }
    }

    fn path(&mut self, path: &Path, paint: &Paint) {
        if let Err(e) = path.validate() {
            log::debug!("skipping invalid path: {}", e);
            return;
        }

        let path = path.quantized();

        if paint.fills() {
            self.fill_path(&path, paint.fill);
        }

        if paint.strokes() {
            let outline = self.stroker.stroke(&path, &paint.stroke_options());
            if !outline.is_empty() {
                self.fill_path(&outline, paint.stroke);
            }
        }
    }

    fn image(&mut self, image: &dyn Image, dst: Box2D) {
        let (iw, ih) = image.size();
        let (dw, dh) = (dst.width(), dst.height());
        if iw == 0 || ih == 0 || !(dw > 0.0) || !(dh > 0.0) {
            return;
        }

        let Some(mut source) = tiny_skia::Pixmap::new(iw, ih) else {
            log::debug!("skipping image of size {}x{}", iw, ih);
            return;
        };
        for (i, pixel) in source.data_mut().chunks_exact_mut(4).enumerate() {
            let (x, y) = (i as u32 % iw, i as u32 / iw);
            pixel.copy_from_slice(&image.pixel(x, y));
        }

        let paint = PixmapPaint {
            quality: FilterQuality::Nearest,
            ..PixmapPaint::default()
        };
        let transform = Transform::from_row(
            (dw / iw as f64) as f32,
            0.0,
            0.0,
            (dh / ih as f64) as f32,
            dst.min.x as f32,
            dst.min.y as f32,
        );

        self.pixmap.as_tiny_skia_mut().draw_pixmap(
            0,
            0,
            source.as_ref(),
            &paint,
            transform,
            self.state.mask.as_ref(),
        );
    }

    fn pixmap(&self) -> Option<&Pixmap> {
        Some(&self.pixmap)
    }
}

#[cfg(test)]
use crate::math::{box2d, point};

#[cfg(test)]
fn renderer(width: u32, height: u32) -> SoftwareRenderer {
    SoftwareRenderer::new(&SurfaceOptions::new(width, height)).unwrap()
}

#[cfg(test)]
fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Path {
    let mut path = Path::new();
    path.move_to(point(x0, y0))
        .line_to(point(x1, y0))
        .line_to(point(x1, y1))
        .line_to(point(x0, y1))
        .close();
    path
}

#[test]
fn background() {
    let r = SoftwareRenderer::new(
        &SurfaceOptions::new(2, 2).with_background(Color::new(1.0, 0.0, 0.0, 0.5)),
    )
    .unwrap();
    let pixmap = r.pixmap().unwrap();
    assert_eq!(pixmap.pixel(1, 1), Some([128, 0, 0, 128]));
    assert_eq!(
        SoftwareRenderer::new(&SurfaceOptions::new(0, 5)).err(),
        Some(RenderError::InvalidSurface { width: 0, height: 5 })
    );
}

#[test]
fn session_errors() {
    let mut r = renderer(4, 4);
    let viewport = box2d(0.0, 0.0, 4.0, 4.0);
    assert_eq!(r.end(), Err(RenderError::NotBegun));
    r.begin(viewport).unwrap();
    assert_eq!(r.begin(viewport), Err(RenderError::AlreadyBegun));
    r.end().unwrap();
}

#[test]
fn fill_opaque_square() {
    let mut r = renderer(8, 8);
    r.begin(box2d(0.0, 0.0, 8.0, 8.0)).unwrap();
    r.path(&square(2.0, 2.0, 6.0, 6.0), &Paint::fill(Color::BLUE));
    r.end().unwrap();

    let pixmap = r.pixmap().unwrap();
    assert_eq!(pixmap.pixel(3, 3), Some([0, 0, 255, 255]));
    assert_eq!(pixmap.pixel(1, 1), Some([255, 255, 255, 255]));
    assert_eq!(pixmap.pixel(6, 6), Some([255, 255, 255, 255]));
}

#[test]
fn translucent_fill_over_white() {
    let mut r = renderer(4, 4);
    r.path(
        &square(0.0, 0.0, 4.0, 4.0),
        &Paint::fill(Color::BLACK.with_alpha(0.5)),
    );

    // 0 + 255 * (255 - 128) / 255 = 127, give or take the blender's rounding.
    let pixel = r.pixmap().unwrap().pixel(0, 0).unwrap();
    for c in &pixel[..3] {
        assert!((126..=128).contains(c), "{:?}", pixel);
    }
    assert_eq!(pixel[3], 255);
}

#[test]
fn clip_rect_intersects() {
    let mut r = renderer(10, 10);
    r.begin(box2d(0.0, 0.0, 10.0, 10.0)).unwrap();
    r.save();
    r.clip_rect(box2d(0.0, 0.0, 6.0, 6.0));
    r.clip_rect(box2d(4.0, 4.0, 10.0, 10.0));
    assert_eq!(r.clip(), Some(box2d(4.0, 4.0, 6.0, 6.0)));
    r.path(&square(0.0, 0.0, 10.0, 10.0), &Paint::fill(Color::BLACK));
    r.restore();
    assert_eq!(r.clip(), None);
    r.end().unwrap();

    let pixmap = r.pixmap().unwrap();
    assert_eq!(pixmap.pixel(5, 5), Some([0, 0, 0, 255]));
    assert_eq!(pixmap.pixel(3, 5), Some([255, 255, 255, 255]));
    assert_eq!(pixmap.pixel(6, 4), Some([255, 255, 255, 255]));
}

#[test]
fn clip_path_masks_coverage() {
    let mut r = renderer(10, 10);
    r.begin(box2d(0.0, 0.0, 10.0, 10.0)).unwrap();
    r.save();
    r.clip_path(&square(0.0, 0.0, 5.0, 10.0));
    r.path(&square(0.0, 0.0, 10.0, 10.0), &Paint::fill(Color::BLACK));
    r.restore();
    r.path(&square(8.0, 8.0, 10.0, 10.0), &Paint::fill(Color::RED));
    r.end().unwrap();

    let pixmap = r.pixmap().unwrap();
    assert_eq!(pixmap.pixel(2, 2), Some([0, 0, 0, 255]));
    assert_eq!(pixmap.pixel(7, 2), Some([255, 255, 255, 255]));
    // The mask was restored.
    assert_eq!(pixmap.pixel(9, 9), Some([255, 0, 0, 255]));
}

#[test]
fn stroke_and_fill() {
    let mut r = renderer(20, 20);
    let paint = Paint::stroke(Color::BLACK, 2.0).with_fill(Color::GREEN);
    r.path(&square(4.0, 4.0, 16.0, 16.0), &paint);

    let pixmap = r.pixmap().unwrap();
    // The stroke is drawn over the fill.
    assert_eq!(pixmap.pixel(10, 4), Some([0, 0, 0, 255]));
    assert_eq!(pixmap.pixel(10, 10), Some([0, 255, 0, 255]));
    assert_eq!(pixmap.pixel(1, 1), Some([255, 255, 255, 255]));
}

#[test]
fn geometry_far_outside_of_the_surface() {
    let mut r = renderer(16, 16);
    let mut path = Path::new();
    path.move_to(point(8.0, -1.0e7)).line_to(point(8.0, 1.0e7));
    r.path(&path, &Paint::stroke(Color::BLACK, 2.0));

    let mut far = Path::new();
    far.move_to(point(-3.0e7, 1.0e7)).line_to(point(3.0e7, 1.0e7));
    r.path(&far, &Paint::stroke(Color::RED, 4.0));

    let pixmap = r.pixmap().unwrap();
    for y in 0..16 {
        assert_eq!(pixmap.pixel(7, y), Some([0, 0, 0, 255]));
        assert_eq!(pixmap.pixel(8, y), Some([0, 0, 0, 255]));
        assert_eq!(pixmap.pixel(6, y), Some([255, 255, 255, 255]));
        assert_eq!(pixmap.pixel(9, y), Some([255, 255, 255, 255]));
    }
}

#[test]
fn closed_stroke_seam_is_filled() {
    use crate::stroke::LineJoin;

    let mut r = renderer(40, 40);
    let paint = Paint::stroke(Color::BLACK, 6.0).with_line_join(LineJoin::Bevel);
    r.path(&square(10.0, 10.0, 30.0, 30.0), &paint);

    let pixmap = r.pixmap().unwrap();
    let black = Some([0, 0, 0, 255]);
    // The corner where the sub-path starts and ends...
    for &(x, y) in &[(8, 10), (9, 10), (8, 11), (10, 8), (11, 9), (11, 11)] {
        assert_eq!(pixmap.pixel(x, y), black, "({}, {})", x, y);
    }
    // ...looks like the mirrored interior corner.
    for &(x, y) in &[(31, 10), (30, 10), (31, 11), (29, 8), (28, 9), (28, 11)] {
        assert_eq!(pixmap.pixel(x, y), black, "({}, {})", x, y);
    }
    assert_eq!(pixmap.pixel(20, 20), Some([255, 255, 255, 255]));
    assert_eq!(pixmap.pixel(5, 5), Some([255, 255, 255, 255]));
}

#[test]
fn invalid_path_draws_nothing() {
    let mut r = renderer(8, 8);
    let before = r.pixmap().unwrap().clone();

    let invalid = Path::from_parts(
        vec![crate::path::Verb::MoveTo, crate::path::Verb::LineTo, crate::path::Verb::LineTo],
        vec![point(0.0, 0.0), point(8.0, 8.0)],
    );
    r.path(&invalid, &Paint::stroke(Color::BLACK, 4.0).with_fill(Color::BLACK));

    assert_eq!(r.pixmap().unwrap(), &before);
}

#[test]
fn draw_image() {
    let mut image = Pixmap::new(2, 2).unwrap();
    image.set_pixel(0, 0, [255, 0, 0, 255]);
    image.set_pixel(1, 0, [0, 255, 0, 255]);
    image.set_pixel(0, 1, [0, 0, 255, 255]);
    image.set_pixel(1, 1, [0, 0, 0, 0]);

    let mut r = renderer(8, 8);
    r.image(&image, box2d(2.0, 2.0, 6.0, 6.0));

    let pixmap = r.pixmap().unwrap();
    assert_eq!(pixmap.pixel(2, 2), Some([255, 0, 0, 255]));
    assert_eq!(pixmap.pixel(5, 3), Some([0, 255, 0, 255]));
    assert_eq!(pixmap.pixel(3, 5), Some([0, 0, 255, 255]));
    // Transparent source pixels leave the destination untouched.
    assert_eq!(pixmap.pixel(5, 5), Some([255, 255, 255, 255]));
    assert_eq!(pixmap.pixel(1, 1), Some([255, 255, 255, 255]));
    assert_eq!(pixmap.pixel(6, 6), Some([255, 255, 255, 255]));
}
