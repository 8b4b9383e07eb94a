//! Dash decomposition.
//!
//! A dash pattern is a list of alternating "on" and "off" lengths. The pattern
//! starts with an "on" phase at the beginning of each sub-path and its phase
//! carries over from one segment to the next within the sub-path.

use crate::geom::{quantize, quantize_point, LineSegment};
use crate::path::Path;

/// Lengths below this threshold are considered fully consumed.
pub const DASH_EPSILON: f64 = 1e-10;

/// Returns true if `dashes` can be used as a dash pattern.
///
/// The pattern must have a non-zero, even number of finite, non-negative
/// entries and a positive total length once quantized.
pub fn is_valid_dash_pattern(dashes: &[f64]) -> bool {
    if dashes.is_empty() || dashes.len() % 2 != 0 {
        return false;
    }

    let mut total = 0.0;
    for &dash in dashes {
        let dash = quantize(dash);
        if !dash.is_finite() || dash < 0.0 {
            return false;
        }
        total += dash;
    }

    total > DASH_EPSILON
}

/// Applies a dash pattern to every sub-path of `path`.
///
/// Each "on" piece becomes its own `MoveTo` + `LineTo` sub-path. Curves are
/// flattened with `tolerance` first.
///
/// An invalid pattern (see [`is_valid_dash_pattern`]) leaves the path untouched.
pub fn apply_dashes(path: &Path, dashes: &[f64], tolerance: f64) -> Path {
    if !is_valid_dash_pattern(dashes) {
        log::debug!(
            "ignoring dash pattern {:?}, the path is stroked without dashes",
            dashes
        );
        return path.clone();
    }

    let mut output = Path::new();
    let mut segments = Vec::new();
    for subpath in path.subpaths() {
        segments.clear();
        subpath.for_each_segment(tolerance, &mut |segment| segments.push(*segment));
        dash_segments(&segments, dashes, &mut output);
    }

    output
}

/// Appends the "on" portions of a chain of segments to `output`.
///
/// The dash cursor starts at the beginning of the first "on" phase and is carried
/// across the segments, so the pattern does not restart at each vertex.
///
/// `dashes` is expected to be a valid pattern; an invalid one appends nothing.
pub fn dash_segments(segments: &[LineSegment], dashes: &[f64], output: &mut Path) {
    if segments.is_empty() || !is_valid_dash_pattern(dashes) {
        return;
    }

    let mut cursor = DashCursor::new(dashes);

    for segment in segments {
        let length = quantize(segment.length());
        let mut consumed = 0.0;

        while consumed < length - DASH_EPSILON {
            let available = length - consumed;
            let raw = available.min(cursor.remaining);
            // Snapping may round a tiny positive step down to zero, which would
            // stall the loop.
            let mut step = quantize(raw);
            if step <= 0.0 {
                step = raw;
            }

            if cursor.drawing && step > DASH_EPSILON {
                let t0 = (consumed / length).clamp(0.0, 1.0);
                let t1 = ((consumed + step) / length).clamp(0.0, 1.0);
                let from = quantize_point(segment.sample(t0));
                let to = quantize_point(segment.sample(t1));

                if (to - from).length() > DASH_EPSILON {
                    output.move_to(from).line_to(to);
                }
            }

            consumed += step;
            cursor.consume(step);
        }
    }
}

struct DashCursor {
    dashes: Vec<f64>,
    index: usize,
    remaining: f64,
    drawing: bool,
}

impl DashCursor {
    fn new(dashes: &[f64]) -> Self {
        let dashes: Vec<f64> = dashes.iter().map(|d| quantize(*d)).collect();
        let remaining = dashes[0];
        DashCursor {
            dashes,
            index: 0,
            remaining,
            drawing: true,
        }
    }

    fn consume(&mut self, step: f64) {
        self.remaining -= step;
        // Zero length entries are skipped over one at a time. The total length of the
        // pattern is positive, so this always reaches a phase with some length left.
        while self.remaining <= DASH_EPSILON {
            self.index = (self.index + 1) % self.dashes.len();
            self.remaining = self.dashes[self.index];
            self.drawing = !self.drawing;
        }
    }
}

#[cfg(test)]
use crate::math::point;
#[cfg(test)]
use crate::path::PathEvent;

#[cfg(test)]
fn dashes_of(path: &Path) -> Vec<LineSegment> {
    path.iter()
        .filter_map(|evt| match evt {
            PathEvent::Line { from, to } => Some(LineSegment { from, to }),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
fn assert_close(a: crate::math::Point, b: crate::math::Point) {
    assert!((a - b).length() < 1e-9, "{:?} != {:?}", a, b);
}

#[test]
fn dash_pattern_validity() {
    assert!(is_valid_dash_pattern(&[5.0, 2.0]));
    assert!(is_valid_dash_pattern(&[5.0, 0.0, 0.0, 1.0]));
    assert!(!is_valid_dash_pattern(&[]));
    assert!(!is_valid_dash_pattern(&[5.0, 2.0, 3.0]));
    assert!(!is_valid_dash_pattern(&[0.0, 0.0]));
    assert!(!is_valid_dash_pattern(&[1e-9, 1e-9]));
    assert!(!is_valid_dash_pattern(&[-1.0, 4.0]));
    assert!(!is_valid_dash_pattern(&[f64::NAN, 4.0]));
}

#[test]
fn dashes_on_a_single_segment() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0)).line_to(point(100.0, 0.0));

    let dashed = apply_dashes(&path, &[10.0, 5.0], 0.5);
    assert!(dashed.is_valid());

    let dashes = dashes_of(&dashed);
    // 0..10, 15..25, ..., 90..100
    assert_eq!(dashes.len(), 7);
    for (i, dash) in dashes.iter().enumerate() {
        let start = i as f64 * 15.0;
        assert!((dash.from.x - start).abs() < 1e-9);
        assert!((dash.to.x - (start + 10.0).min(100.0)).abs() < 1e-9);
        assert_eq!(dash.from.y, 0.0);
    }
}

#[test]
fn dash_count_and_extent() {
    let length = 37.0;
    let (on, off) = (3.0, 2.0);
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0)).line_to(point(length, 0.0));

    let dashes = dashes_of(&apply_dashes(&path, &[on, off], 0.5));
    let expected = (length / (on + off)).ceil() as usize;
    assert!(dashes.len() + 1 >= expected && dashes.len() <= expected + 1);

    for dash in &dashes {
        for p in &[dash.from, dash.to] {
            assert!(p.x >= -1e-9 && p.x <= length + 1e-9);
        }
        assert!(dash.to.x > dash.from.x);
    }
}

#[test]
fn phase_carries_across_vertices() {
    // Two segments of length 6 with a [4, 4] pattern: the first dash covers 0..4,
    // the gap 4..8 spans the corner and the next dash covers 8..12.
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0))
        .line_to(point(6.0, 0.0))
        .line_to(point(6.0, 6.0));

    let dashes = dashes_of(&apply_dashes(&path, &[4.0, 4.0], 0.5));
    assert_eq!(dashes.len(), 2);
    assert_close(dashes[0].from, point(0.0, 0.0));
    assert_close(dashes[0].to, point(4.0, 0.0));
    assert_close(dashes[1].from, point(6.0, 2.0));
    assert_close(dashes[1].to, point(6.0, 6.0));
}

#[test]
fn dash_split_at_a_vertex() {
    // The first dash (length 8) continues around the corner.
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0))
        .line_to(point(6.0, 0.0))
        .line_to(point(6.0, 6.0));

    let dashes = dashes_of(&apply_dashes(&path, &[8.0, 100.0], 0.5));
    assert_eq!(dashes.len(), 2);
    assert_close(dashes[0].to, point(6.0, 0.0));
    assert_close(dashes[1].from, point(6.0, 0.0));
    assert_close(dashes[1].to, point(6.0, 2.0));
}

#[test]
fn odd_dash_pattern_is_ignored() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0))
        .quad_to(point(5.0, 5.0), point(10.0, 0.0));

    assert_eq!(apply_dashes(&path, &[5.0, 2.0, 3.0], 0.5), path);
    assert_eq!(apply_dashes(&path, &[], 0.5), path);
}

#[test]
fn zero_length_dashes_terminate() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0)).line_to(point(10.0, 0.0));

    // Zero length "on" phases produce nothing, the pattern still advances.
    let dashes = dashes_of(&apply_dashes(&path, &[0.0, 1.0], 0.5));
    assert!(dashes.is_empty());

    let dashes = dashes_of(&apply_dashes(&path, &[1.0, 0.0], 0.5));
    assert!(!dashes.is_empty());
    for dash in &dashes {
        assert!(dash.from.x.is_finite() && dash.to.x.is_finite());
    }
}

#[test]
fn closed_sub_path_dashes_the_closing_edge() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0))
        .line_to(point(10.0, 0.0))
        .line_to(point(10.0, 10.0))
        .close();

    let dashes = dashes_of(&apply_dashes(&path, &[1000.0, 1.0], 0.5));
    // The whole outline is a single "on" phase, split at each vertex.
    assert_eq!(dashes.len(), 3);
    assert_close(dashes[2].to, point(0.0, 0.0));
}
