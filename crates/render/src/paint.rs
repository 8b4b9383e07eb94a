use crate::geom::quantize;
use crate::stroke::{LineCap, LineJoin, StrokeOptions};
use crate::Color;

/// How a path is filled and stroked.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Paint {
    /// Stroke color. Nothing is stroked if its alpha is zero.
    pub stroke: Color,
    /// Fill color. Nothing is filled if its alpha is zero.
    pub fill: Color,
    pub line_width: f64,
    pub line_join: LineJoin,
    pub line_cap: LineCap,
    pub miter_limit: f64,
    /// Alternating on/off lengths. See `StrokeOptions::dashes`.
    pub dashes: Vec<f64>,
}

impl Paint {
    pub const DEFAULT: Self = Paint {
        stroke: Color::BLACK,
        fill: Color::TRANSPARENT,
        line_width: StrokeOptions::DEFAULT_LINE_WIDTH,
        line_join: StrokeOptions::DEFAULT_LINE_JOIN,
        line_cap: StrokeOptions::DEFAULT_LINE_CAP,
        miter_limit: StrokeOptions::DEFAULT_MITER_LIMIT,
        dashes: Vec::new(),
    };

    /// A paint that only strokes.
    pub fn stroke(color: Color, line_width: f64) -> Self {
        Paint {
            stroke: color,
            line_width,
            ..Self::DEFAULT
        }
    }

    /// A paint that only fills.
    pub fn fill(color: Color) -> Self {
        Paint {
            stroke: Color::TRANSPARENT,
            fill: color,
            ..Self::DEFAULT
        }
    }

    #[inline]
    pub fn with_stroke(mut self, color: Color) -> Self {
        self.stroke = color;
        self
    }

    #[inline]
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = color;
        self
    }

    #[inline]
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    #[inline]
    pub fn with_line_join(mut self, join: LineJoin) -> Self {
        self.line_join = join;
        self
    }

    #[inline]
    pub fn with_line_cap(mut self, cap: LineCap) -> Self {
        self.line_cap = cap;
        self
    }

    #[inline]
    pub fn with_miter_limit(mut self, limit: f64) -> Self {
        self.miter_limit = limit;
        self
    }

    #[inline]
    pub fn with_dashes(mut self, dashes: Vec<f64>) -> Self {
        self.dashes = dashes;
        self
    }

    /// Returns true if drawing with this paint fills the path.
    pub fn fills(&self) -> bool {
        self.fill.a > 0.0
    }

    /// Returns true if drawing with this paint strokes the path.
    pub fn strokes(&self) -> bool {
        self.stroke.a > 0.0 && self.line_width > 0.0
    }

    /// The stroker parameters for this paint, with quantized lengths.
    pub fn stroke_options(&self) -> StrokeOptions {
        StrokeOptions::DEFAULT
            .with_line_width(quantize(self.line_width))
            .with_line_join(self.line_join)
            .with_line_cap(self.line_cap)
            .with_miter_limit(quantize(self.miter_limit))
            .with_dashes(self.dashes.iter().map(|d| quantize(*d)).collect())
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[test]
fn paint_to_stroke_options() {
    let paint = Paint::stroke(Color::RED, 2.5)
        .with_line_join(LineJoin::Bevel)
        .with_line_cap(LineCap::Round)
        .with_miter_limit(4.0)
        .with_dashes(vec![3.000_000_1, 1.0]);

    assert!(paint.strokes());
    assert!(!paint.fills());

    let options = paint.stroke_options();
    assert_eq!(options.line_width, quantize(2.5));
    assert_eq!(options.line_join, LineJoin::Bevel);
    assert_eq!(options.line_cap, LineCap::Round);
    assert_eq!(options.miter_limit, quantize(4.0));
    assert_eq!(options.tolerance, StrokeOptions::DEFAULT_TOLERANCE);
    assert_eq!(options.dashes, vec![quantize(3.0), quantize(1.0)]);
}

#[test]
fn fill_only_paint() {
    let paint = Paint::fill(Color::BLUE);
    assert!(paint.fills());
    assert!(!paint.strokes());
    assert!(!Paint::stroke(Color::BLACK, 0.0).strokes());
    assert!(!Paint::stroke(Color::TRANSPARENT, 1.0).strokes());
}
