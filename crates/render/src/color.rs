/// A color with straight (non-premultiplied) alpha.
///
/// Components are expected in the `[0, 1]` range.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const TRANSPARENT: Self = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Color::rgb(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Color { r, g, b, a }
    }

    /// An opaque color.
    #[inline]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color { r, g, b, a: 1.0 }
    }

    #[inline]
    pub const fn with_alpha(mut self, a: f64) -> Self {
        self.a = a;
        self
    }

    /// Returns the color with its RGB components multiplied by alpha.
    pub fn premultiply(&self) -> Self {
        Color {
            r: self.r * self.a,
            g: self.g * self.a,
            b: self.b * self.a,
            a: self.a,
        }
    }

    /// Converts to premultiplied 8 bit RGBA.
    ///
    /// Each channel is `c * 255 + 0.5` truncated, clamped to `[0, 255]`. NaN
    /// components map to zero.
    pub fn to_premultiplied_rgba8(&self) -> [u8; 4] {
        let c = self.premultiply();
        [to_u8(c.r), to_u8(c.g), to_u8(c.b), to_u8(c.a)]
    }

    /// Converts to straight 8 bit RGBA, rounding like
    /// [`to_premultiplied_rgba8`](#method.to_premultiplied_rgba8).
    pub fn to_rgba8(&self) -> [u8; 4] {
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }
}

fn to_u8(v: f64) -> u8 {
    // Float to int casts saturate and map NaN to zero.
    (v * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}

#[test]
fn premultiplied_conversion() {
    assert_eq!(Color::BLACK.to_premultiplied_rgba8(), [0, 0, 0, 255]);
    assert_eq!(Color::WHITE.to_premultiplied_rgba8(), [255, 255, 255, 255]);
    assert_eq!(Color::TRANSPARENT.to_premultiplied_rgba8(), [0, 0, 0, 0]);

    // 1.0 * 0.5 * 255 + 0.5 = 128.0
    assert_eq!(
        Color::new(1.0, 0.0, 0.5, 0.5).to_premultiplied_rgba8(),
        [128, 0, 64, 128]
    );

    let p = Color::new(0.2, 0.4, 0.6, 0.5).premultiply();
    assert_eq!(p, Color::new(0.1, 0.2, 0.3, 0.5));
}

#[test]
fn conversion_clamps() {
    assert_eq!(
        Color::new(2.0, -1.0, f64::NAN, 1.0).to_premultiplied_rgba8(),
        [255, 0, 0, 255]
    );
    assert_eq!(Color::new(0.2, 0.4, 0.6, 0.5).to_rgba8(), [51, 102, 153, 128]);
}
