use crate::renderer::Image;
use crate::{Color, RenderError};

/// Surfaces can't be wider or taller than this, in pixels.
pub const MAX_SURFACE_DIMENSION: u32 = 1 << 15;

/// A premultiplied RGBA8 pixel buffer, stored row by row.
#[derive(Clone)]
pub struct Pixmap {
    inner: tiny_skia::Pixmap,
}

impl Pixmap {
    /// Creates a transparent pixmap.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width > MAX_SURFACE_DIMENSION || height > MAX_SURFACE_DIMENSION {
            return Err(RenderError::InvalidSurface { width, height });
        }

        match tiny_skia::Pixmap::new(width, height) {
            Some(inner) => Ok(Pixmap { inner }),
            None => Err(RenderError::InvalidSurface { width, height }),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// The raw premultiplied RGBA8 bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        self.inner.data()
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.inner.data_mut()
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        let rgba = color.to_premultiplied_rgba8();
        for pixel in self.data_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&rgba);
        }
    }

    /// The value of a pixel, or `None` outside of the pixmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let idx = self.byte_offset(x, y)?;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.data()[idx..idx + 4]);

        Some(rgba)
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if let Some(idx) = self.byte_offset(x, y) {
            self.data_mut()[idx..idx + 4].copy_from_slice(&rgba);
        }
    }

    #[inline]
    fn byte_offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width() || y >= self.height() {
            return None;
        }

        Some((y as usize * self.width() as usize + x as usize) * 4)
    }

    pub(crate) fn as_tiny_skia_mut(&mut self) -> &mut tiny_skia::Pixmap {
        &mut self.inner
    }
}

impl Image for Pixmap {
    fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        Pixmap::pixel(self, x, y).unwrap_or([0; 4])
    }
}

impl PartialEq for Pixmap {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width() && self.height() == other.height() && self.data() == other.data()
    }
}

impl std::fmt::Debug for Pixmap {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Pixmap")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

#[test]
fn pixmap_size_limits() {
    assert!(Pixmap::new(1, 1).is_ok());
    assert_eq!(
        Pixmap::new(0, 10),
        Err(RenderError::InvalidSurface { width: 0, height: 10 })
    );
    assert!(Pixmap::new(MAX_SURFACE_DIMENSION + 1, 1).is_err());
}

#[test]
fn pixel_access() {
    let mut pixmap = Pixmap::new(4, 3).unwrap();
    assert_eq!(pixmap.data().len(), 48);
    assert_eq!(pixmap.pixel(0, 0), Some([0, 0, 0, 0]));

    pixmap.fill(Color::WHITE);
    assert_eq!(pixmap.pixel(3, 2), Some([255, 255, 255, 255]));
    assert_eq!(pixmap.pixel(4, 0), None);
    assert_eq!(Image::pixel(&pixmap, 4, 0), [0, 0, 0, 0]);

    pixmap.set_pixel(1, 2, [1, 2, 3, 4]);
    assert_eq!(pixmap.pixel(1, 2), Some([1, 2, 3, 4]));
    assert_eq!(&pixmap.data()[(2 * 4 + 1) * 4..(2 * 4 + 1) * 4 + 4], &[1, 2, 3, 4]);
}
