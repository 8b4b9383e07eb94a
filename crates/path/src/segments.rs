//! Decomposition of paths into sub-paths and line segments.
//!
//! Curves are flattened with the midpoint subdivision of `quill_geom`, and
//! `Close` contributes an implicit segment back to the start of the sub-path
//! when the current position differs from it.

use crate::geom::{CubicBezierSegment, LineSegment, QuadraticBezierSegment, Segment};
use crate::path::{Path, Verb};
use crate::PathEvent;

impl Path {
    /// Returns true if the last verb of the path is `Close`.
    pub fn is_closed(&self) -> bool {
        self.verbs().last() == Some(&Verb::Close)
    }

    /// Splits the path into sub-paths that each start with a `MoveTo`.
    ///
    /// A drawing verb that is not preceded by a `MoveTo` (at the start of the path or
    /// right after a `Close`) opens a new sub-path at the current position.
    /// A trailing `Close` belongs to the sub-path it closes.
    pub fn subpaths(&self) -> Vec<Path> {
        let mut subpaths = Vec::new();
        let mut current = Path::new();
        let mut closed = false;

        for evt in self.iter() {
            match evt {
                PathEvent::Begin { at } => {
                    if !current.is_empty() {
                        subpaths.push(std::mem::take(&mut current));
                    }
                    current.move_to(at);
                    closed = false;
                }
                PathEvent::Close { .. } => {
                    if !current.is_empty() && !closed {
                        current.close();
                        closed = true;
                    }
                }
                edge => {
                    if current.is_empty() || closed {
                        if !current.is_empty() {
                            subpaths.push(std::mem::take(&mut current));
                        }
                        current.move_to(edge.from());
                        closed = false;
                    }

                    match edge {
                        PathEvent::Line { to, .. } => {
                            current.line_to(to);
                        }
                        PathEvent::Quadratic { ctrl, to, .. } => {
                            current.quad_to(ctrl, to);
                        }
                        PathEvent::Cubic {
                            ctrl1, ctrl2, to, ..
                        } => {
                            current.cubic_to(ctrl1, ctrl2, to);
                        }
                        PathEvent::Begin { .. } | PathEvent::Close { .. } => {}
                    }
                }
            }
        }

        if !current.is_empty() {
            subpaths.push(current);
        }

        subpaths
    }

    /// Calls `callback` for each line segment of the flattened path.
    ///
    /// Curves are approximated within `tolerance`. A `Close` emits a segment back to
    /// the first point of the sub-path, unless the current position is already there.
    pub fn for_each_segment(&self, tolerance: f64, callback: &mut dyn FnMut(&LineSegment)) {
        for evt in self.iter() {
            match evt {
                PathEvent::Begin { .. } => {}
                PathEvent::Line { from, to } => {
                    callback(&LineSegment { from, to });
                }
                PathEvent::Quadratic { from, ctrl, to } => {
                    QuadraticBezierSegment { from, ctrl, to }.for_each_flattened(tolerance, callback);
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
                    .for_each_flattened(tolerance, callback);
                }
                PathEvent::Close { last, first } => {
                    if last != first {
                        callback(&LineSegment {
                            from: last,
                            to: first,
                        });
                    }
                }
            }
        }
    }

    /// Collects the line segments of the flattened path.
    ///
    /// See [`for_each_segment`](#method.for_each_segment).
    pub fn segments(&self, tolerance: f64) -> Vec<LineSegment> {
        let mut segments = Vec::new();
        self.for_each_segment(tolerance, &mut |segment| segments.push(*segment));
        segments
    }
}

#[cfg(test)]
use crate::math::point;

#[test]
fn split_at_move_to() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0))
        .line_to(point(1.0, 0.0))
        .move_to(point(5.0, 5.0))
        .line_to(point(6.0, 5.0))
        .line_to(point(6.0, 6.0))
        .close()
        .move_to(point(9.0, 9.0));

    let subpaths = path.subpaths();
    assert_eq!(subpaths.len(), 3);
    assert_eq!(subpaths[0].verbs(), &[Verb::MoveTo, Verb::LineTo]);
    assert_eq!(
        subpaths[1].verbs(),
        &[Verb::MoveTo, Verb::LineTo, Verb::LineTo, Verb::Close]
    );
    assert!(subpaths[1].is_closed());
    assert!(!subpaths[0].is_closed());
    assert_eq!(subpaths[2].verbs(), &[Verb::MoveTo]);
    assert_eq!(subpaths[2].points(), &[point(9.0, 9.0)]);

    for subpath in &subpaths {
        assert!(subpath.is_valid());
        assert_eq!(subpath.verbs()[0], Verb::MoveTo);
    }
}

#[test]
fn implicit_move_to() {
    let mut path = Path::new();
    path.line_to(point(1.0, 0.0))
        .line_to(point(1.0, 1.0))
        .close()
        .line_to(point(0.0, 5.0));

    let subpaths = path.subpaths();
    assert_eq!(subpaths.len(), 2);
    assert_eq!(subpaths[0].points()[0], point(0.0, 0.0));
    assert!(subpaths[0].is_closed());
    assert_eq!(subpaths[1].points(), &[point(0.0, 0.0), point(0.0, 5.0)]);
}

#[test]
fn close_adds_a_segment() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0))
        .line_to(point(10.0, 0.0))
        .line_to(point(10.0, 10.0))
        .close();

    let segments = path.segments(0.5);
    assert_eq!(segments.len(), 3);
    assert_eq!(
        segments[2],
        LineSegment {
            from: point(10.0, 10.0),
            to: point(0.0, 0.0)
        }
    );
}

#[test]
fn zero_length_close_is_a_no_op() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0))
        .line_to(point(10.0, 0.0))
        .line_to(point(0.0, 0.0))
        .close();

    assert_eq!(path.segments(0.5).len(), 2);
}

#[test]
fn curves_are_flattened() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0))
        .quad_to(point(50.0, 100.0), point(100.0, 0.0))
        .cubic_to(point(100.0, 50.0), point(0.0, 50.0), point(0.0, 0.0));

    let segments = path.segments(0.5);
    assert!(segments.len() > 2);
    assert_eq!(segments[0].from, point(0.0, 0.0));
    assert_eq!(segments.last().map(|s| s.to), Some(point(0.0, 0.0)));

    // The segments form a continuous chain.
    for pair in segments.windows(2) {
        assert_eq!(pair[0].to, pair[1].from);
    }
}
