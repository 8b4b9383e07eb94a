use crate::cap::cap_points;
use crate::dash::apply_dashes;
use crate::geom::{quantize, quantize_point, LineSegment};
use crate::join::{compute_join, segment_normal};
use crate::math::Point;
use crate::path::Path;
use crate::StrokeOptions;

/// Converts stroked paths into fillable outlines.
///
/// The outline of each open sub-path is a single closed polygon that covers the
/// stroke when filled with the nonzero winding rule:
///
/// ```ascii
///  left side, forward   ->   end cap
///   ___________________________
///  |                           )
///  |___________________________)
///
///  start cap  <-  right side, backward
/// ```
///
/// Closed sub-paths have no caps: the last segment is joined with the first one
/// and each side forms a ring of its own, in opposite directions, so every offset
/// point of the seam appears once.
///
/// The stroker keeps its temporary buffers between calls.
///
/// # Examples
///
/// ```
/// use quill_stroke::{Stroker, StrokeOptions, LineJoin};
/// use quill_stroke::path::Path;
/// use quill_stroke::math::point;
///
/// let mut path = Path::new();
/// path.move_to(point(0.0, 0.0))
///     .line_to(point(10.0, 0.0))
///     .line_to(point(10.0, 10.0));
///
/// let mut stroker = Stroker::new();
/// let outline = stroker.stroke(
///     &path,
///     &StrokeOptions::default().with_line_width(2.0).with_line_join(LineJoin::Miter),
/// );
///
/// assert!(outline.is_valid());
/// ```
#[derive(Default)]
pub struct Stroker {
    segments: Vec<LineSegment>,
    left: Vec<Point>,
    right: Vec<Point>,
}

impl Stroker {
    pub fn new() -> Self {
        Stroker {
            segments: Vec::new(),
            left: Vec::new(),
            right: Vec::new(),
        }
    }

    /// Computes the outline of the stroke of `path`.
    ///
    /// Returns an empty path if `path` is invalid, empty, or if the line width is not
    /// strictly positive.
    pub fn stroke(&mut self, path: &Path, options: &StrokeOptions) -> Path {
        let mut output = Path::new();
        self.stroke_into(path, options, &mut output);

        output
    }

    /// Appends the outline of the stroke of `path` to `output`.
    pub fn stroke_into(&mut self, path: &Path, options: &StrokeOptions, output: &mut Path) {
        if path.is_empty() || !(options.line_width > 0.0) || !options.line_width.is_finite() {
            return;
        }

        if let Err(e) = path.validate() {
            log::debug!("not stroking invalid path: {}", e);
            return;
        }

        let half_width = quantize(options.line_width * 0.5);

        let mut path = path.quantized();
        if !options.dashes.is_empty() {
            path = apply_dashes(&path, &options.dashes, options.tolerance);
        }

        for subpath in path.subpaths() {
            self.stroke_subpath(&subpath, half_width, options, output);
        }
    }

    fn stroke_subpath(
        &mut self,
        subpath: &Path,
        half_width: f64,
        options: &StrokeOptions,
        output: &mut Path,
    ) {
        self.segments.clear();
        self.left.clear();
        self.right.clear();

        let segments = &mut self.segments;
        subpath.for_each_segment(options.tolerance, &mut |segment| segments.push(*segment));

        let (first, last) = match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => {
                return;
            }
        };

        let closed = subpath.is_closed();
        let join = |prev: &LineSegment, curr: &LineSegment| {
            compute_join(prev, curr, half_width, options.line_join, options.miter_limit)
        };

        if closed {
            let seam = join(&last, &first);
            self.left.extend(seam.left.iter().cloned());
            self.right.extend(seam.right.iter().cloned());
        } else {
            let normal = segment_normal(&first, half_width);
            self.left.push(quantize_point(first.from + normal));
            self.right.push(quantize_point(first.from - normal));
        }

        for pair in self.segments.windows(2) {
            let points = join(&pair[0], &pair[1]);
            self.left.extend(points.left.iter().cloned());
            self.right.extend(points.right.iter().cloned());
        }

        if closed {
            // Each side is a ring of its own. The right ring goes the other way
            // around, so the area between the rings has a nonzero winding number
            // and the area inside of both has none.
            output.move_to(self.left[0]);
            for p in &self.left[1..] {
                output.line_to(*p);
            }
            output.close();

            output.move_to(self.right[self.right.len() - 1]);
            for p in self.right.iter().rev().skip(1) {
                output.line_to(*p);
            }
            output.close();

            return;
        }

        let normal = segment_normal(&last, half_width);
        self.left.push(quantize_point(last.to + normal));
        self.right.push(quantize_point(last.to - normal));

        output.move_to(self.left[0]);
        for p in &self.left[1..] {
            output.line_to(*p);
        }

        for p in &cap_points(&last, true, half_width, options.line_cap) {
            output.line_to(*p);
        }

        for p in self.right.iter().rev() {
            output.line_to(*p);
        }

        for p in &cap_points(&first, false, half_width, options.line_cap) {
            output.line_to(*p);
        }

        output.close();
    }
}

/// Computes the outline of the stroke of `path` with a temporary [`Stroker`].
pub fn stroke_to_path(path: &Path, options: &StrokeOptions) -> Path {
    Stroker::new().stroke(path, options)
}

#[cfg(test)]
use crate::math::{box2d, point};
#[cfg(test)]
use crate::path::Verb;
#[cfg(test)]
use crate::{LineCap, LineJoin};

#[cfg(test)]
fn assert_finite(path: &Path) {
    for p in path.points() {
        assert!(p.x.is_finite() && p.y.is_finite(), "{:?}", path);
    }
}

#[test]
fn butt_segment_outline() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0)).line_to(point(10.0, 0.0));

    let outline = stroke_to_path(&path, &StrokeOptions::default().with_line_width(2.0));
    assert_eq!(
        outline.verbs(),
        &[Verb::MoveTo, Verb::LineTo, Verb::LineTo, Verb::LineTo, Verb::Close]
    );

    let expected = [
        point(0.0, 1.0),
        point(10.0, 1.0),
        point(10.0, -1.0),
        point(0.0, -1.0),
    ];
    for (p, e) in outline.points().iter().zip(expected.iter()) {
        assert!((*p - *e).length() < 1e-9);
    }
}

#[test]
fn square_cap_bounding_box() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0)).line_to(point(10.0, 0.0));

    let options = StrokeOptions::default()
        .with_line_width(2.0)
        .with_line_cap(LineCap::Square)
        .with_line_join(LineJoin::Miter);

    let bounds = stroke_to_path(&path, &options).fast_bounding_box();
    let expected = box2d(-1.0, -1.0, 11.0, 1.0);
    assert!((bounds.min - expected.min).length() < 1e-9);
    assert!((bounds.max - expected.max).length() < 1e-9);
}

#[test]
fn l_shape_miter() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0))
        .line_to(point(10.0, 0.0))
        .line_to(point(10.0, 10.0));

    let options = StrokeOptions::default()
        .with_line_width(2.0)
        .with_line_join(LineJoin::Miter)
        .with_miter_limit(10.0);

    let outline = stroke_to_path(&path, &options);
    assert!(outline.is_valid());

    let corner = point(10.0, 0.0);
    let outer = outline
        .points()
        .iter()
        .cloned()
        .find(|p| (*p - point(11.0, -1.0)).length() < 1e-6);
    let outer = outer.expect("missing outer miter point");
    assert!(((outer - corner).length() - 2.0f64.sqrt()).abs() < 1e-6);

    // The outer miter lies on the bisector of the corner.
    let d = outer - corner;
    assert!((d.x + d.y).abs() < 1e-6);
}

#[test]
fn closed_sub_paths_have_no_caps() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0))
        .line_to(point(10.0, 0.0))
        .line_to(point(10.0, 10.0))
        .line_to(point(0.0, 10.0))
        .close();

    let options = StrokeOptions::default()
        .with_line_width(2.0)
        .with_line_cap(LineCap::Round);

    let outline = stroke_to_path(&path, &options);
    assert!(outline.is_valid());
    // Four mitered corners on each side, no cap points.
    assert_eq!(outline.points().len(), 8);
    let closes = outline.verbs().iter().filter(|v| **v == Verb::Close).count();
    assert_eq!(closes, 2);

    let bounds = outline.fast_bounding_box();
    assert!((bounds.min - point(-1.0, -1.0)).length() < 1e-9);
    assert!((bounds.max - point(11.0, 11.0)).length() < 1e-9);
}

#[test]
fn closed_bevel_seam_points_appear_once() {
    let mut path = Path::new();
    path.move_to(point(10.0, 10.0))
        .line_to(point(30.0, 10.0))
        .line_to(point(30.0, 30.0))
        .line_to(point(10.0, 30.0))
        .close();

    let options = StrokeOptions::default()
        .with_line_width(6.0)
        .with_line_join(LineJoin::Bevel);
    let outline = stroke_to_path(&path, &options);

    // Two points per corner on each ring.
    assert_eq!(outline.points().len(), 16);
    for ring in outline.points().chunks(8) {
        for (i, a) in ring.iter().enumerate() {
            for b in &ring[i + 1..] {
                assert!(a != b, "{:?} appears twice in {:?}", a, ring);
            }
        }
    }
}

#[test]
fn zero_length_segment() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0))
        .line_to(point(5.0, 0.0))
        .line_to(point(5.0, 0.0))
        .line_to(point(5.0, 5.0));

    for join in [LineJoin::Miter, LineJoin::Round, LineJoin::Bevel] {
        for cap in [LineCap::Butt, LineCap::Square, LineCap::Round] {
            let options = StrokeOptions::default()
                .with_line_width(2.0)
                .with_line_join(join)
                .with_line_cap(cap);
            let outline = stroke_to_path(&path, &options);
            assert!(!outline.is_empty());
            assert!(outline.is_valid());
            assert_finite(&outline);
        }
    }

    // A single point sub-path.
    let mut dot = Path::new();
    dot.move_to(point(3.0, 3.0)).line_to(point(3.0, 3.0));
    let outline = stroke_to_path(&dot, &StrokeOptions::default().with_line_cap(LineCap::Round));
    assert!(!outline.is_empty());
    assert_finite(&outline);
}

#[test]
fn odd_dash_pattern_strokes_without_dashes() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0))
        .line_to(point(30.0, 0.0))
        .quad_to(point(40.0, 0.0), point(40.0, 20.0));

    let solid = StrokeOptions::default().with_line_width(3.0);
    let dashed = solid.clone().with_dashes(vec![5.0, 2.0, 3.0]);

    assert_eq!(stroke_to_path(&path, &dashed), stroke_to_path(&path, &solid));
}

#[test]
fn dashed_stroke_has_one_outline_per_dash() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0)).line_to(point(100.0, 0.0));

    let options = StrokeOptions::default()
        .with_line_width(2.0)
        .with_dashes(vec![10.0, 5.0]);

    let outline = stroke_to_path(&path, &options);
    let closes = outline.verbs().iter().filter(|v| **v == Verb::Close).count();
    assert_eq!(closes, 7);

    let bounds = outline.fast_bounding_box();
    assert!(bounds.min.x >= -1e-9 && bounds.max.x <= 100.0 + 1e-9);
}

#[test]
fn invalid_input_produces_nothing() {
    let invalid = Path::from_parts(vec![Verb::MoveTo, Verb::LineTo], vec![point(0.0, 0.0)]);
    assert!(stroke_to_path(&invalid, &StrokeOptions::default()).is_empty());

    let mut path = Path::new();
    path.move_to(point(0.0, 0.0)).line_to(point(10.0, 0.0));
    assert!(stroke_to_path(&path, &StrokeOptions::default().with_line_width(0.0)).is_empty());
    assert!(stroke_to_path(&path, &StrokeOptions::default().with_line_width(-1.0)).is_empty());
    assert!(stroke_to_path(&path, &StrokeOptions::default().with_line_width(f64::NAN)).is_empty());
    assert!(stroke_to_path(&Path::new(), &StrokeOptions::default()).is_empty());
}

#[test]
fn output_is_quantized() {
    let mut path = Path::new();
    path.move_to(point(0.123_456_789, 0.0))
        .cubic_to(point(3.3, 7.77), point(9.1, -2.2), point(12.345_678_9, 4.4));

    let outline = stroke_to_path(&path, &StrokeOptions::default().with_line_width(1.7));
    assert!(!outline.is_empty());
    assert_eq!(outline.quantized(), outline);
}

#[test]
fn stroker_reuse_is_deterministic() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0))
        .cubic_to(point(10.0, 20.0), point(30.0, -20.0), point(40.0, 0.0))
        .close();

    let options = StrokeOptions::default()
        .with_line_width(4.0)
        .with_line_join(LineJoin::Round);

    let mut stroker = Stroker::new();
    let a = stroker.stroke(&path, &options);
    let b = stroker.stroke(&path, &options);
    assert_eq!(a, b);
    assert_eq!(a, stroke_to_path(&path, &options));
}
