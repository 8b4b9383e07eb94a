/// Line cap as defined by the SVG specification.
///
/// See: <https://svgwg.org/specs/strokes/#StrokeLinecapProperty>
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum LineCap {
    /// The stroke for each sub-path does not extend beyond its two endpoints.
    /// A zero length sub-path will therefore not have any stroke.
    Butt,
    /// At the end of each sub-path, the shape representing the stroke will be
    /// extended by a rectangle with the same width as the stroke width and
    /// whose length is half of the stroke width.
    Square,
    /// At each end of each sub-path, the shape representing the stroke will be extended
    /// by a half circle with a radius equal to the half of the stroke width.
    Round,
}

/// Line join as defined by the SVG specification.
///
/// See: <https://svgwg.org/specs/strokes/#StrokeLinejoinProperty>
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum LineJoin {
    /// A sharp corner is to be used to join path segments.
    ///
    /// If the miter limit is exceeded, or if the segments are nearly parallel,
    /// a bevel join is used instead.
    Miter,
    /// Approximated with the sharp corner when it stays within the miter limit.
    Round,
    /// A bevelled corner is to be used to join path segments.
    /// The bevel shape is a triangle that fills the area between the two stroked
    /// segments.
    Bevel,
}

/// Parameters for the stroker.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct StrokeOptions {
    /// Line width.
    ///
    /// Values that are not strictly positive produce no geometry.
    /// Default value: `StrokeOptions::DEFAULT_LINE_WIDTH`.
    pub line_width: f64,

    /// See the SVG specification.
    ///
    /// Default value: `LineJoin::Miter`.
    pub line_join: LineJoin,

    /// What cap to use at both ends of each open sub-path.
    ///
    /// Default value: `LineCap::Butt`.
    pub line_cap: LineCap,

    /// Maximum ratio between the miter length and half of the line width.
    ///
    /// Default value: `StrokeOptions::DEFAULT_MITER_LIMIT`.
    pub miter_limit: f64,

    /// Maximum allowed distance to the path when flattening curves.
    ///
    /// Default value: `StrokeOptions::DEFAULT_TOLERANCE`.
    pub tolerance: f64,

    /// Alternating on/off lengths.
    ///
    /// An empty pattern means a solid stroke. A pattern with an odd number of
    /// entries is ignored.
    pub dashes: Vec<f64>,
}

impl StrokeOptions {
    pub const DEFAULT_MITER_LIMIT: f64 = 10.0;
    pub const DEFAULT_LINE_CAP: LineCap = LineCap::Butt;
    pub const DEFAULT_LINE_JOIN: LineJoin = LineJoin::Miter;
    pub const DEFAULT_LINE_WIDTH: f64 = 1.0;
    pub const DEFAULT_TOLERANCE: f64 = 0.5;

    pub const DEFAULT: Self = StrokeOptions {
        line_width: Self::DEFAULT_LINE_WIDTH,
        line_join: Self::DEFAULT_LINE_JOIN,
        line_cap: Self::DEFAULT_LINE_CAP,
        miter_limit: Self::DEFAULT_MITER_LIMIT,
        tolerance: Self::DEFAULT_TOLERANCE,
        dashes: Vec::new(),
    };

    #[inline]
    pub fn tolerance(tolerance: f64) -> Self {
        Self::DEFAULT.with_tolerance(tolerance)
    }

    #[inline]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[inline]
    pub fn with_line_cap(mut self, cap: LineCap) -> Self {
        self.line_cap = cap;
        self
    }

    #[inline]
    pub fn with_line_join(mut self, join: LineJoin) -> Self {
        self.line_join = join;
        self
    }

    #[inline]
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
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
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[test]
fn default_options() {
    let options = StrokeOptions::default();
    assert_eq!(options.line_width, 1.0);
    assert_eq!(options.miter_limit, 10.0);
    assert_eq!(options.tolerance, 0.5);
    assert_eq!(options.line_join, LineJoin::Miter);
    assert_eq!(options.line_cap, LineCap::Butt);
    assert!(options.dashes.is_empty());

    let options = StrokeOptions::tolerance(0.1)
        .with_line_width(3.0)
        .with_line_join(LineJoin::Round)
        .with_dashes(vec![4.0, 2.0]);
    assert_eq!(options.tolerance, 0.1);
    assert_eq!(options.line_width, 3.0);
    assert_eq!(options.line_join, LineJoin::Round);
    assert_eq!(options.dashes, vec![4.0, 2.0]);
}
