//! Iteration over the events of a path.
//!
//! ```
//! use quill_path::math::point;
//! use quill_path::{Path, PathEvent};
//!
//! let mut path = Path::new();
//! path.move_to(point(0.0, 0.0))
//!     .line_to(point(10.0, 0.0))
//!     .cubic_to(point(10.0, 10.0), point(0.0, 10.0), point(0.0, 5.0))
//!     .close();
//!
//! for evt in path.iter() {
//!     match evt {
//!         PathEvent::Begin { at } => { println!(" - move to {:?}", at); }
//!         PathEvent::Line { from, to } => { println!(" - line {:?} -> {:?}", from, to); }
//!         PathEvent::Close { last, first } => { println!(" - close {:?} -> {:?}", last, first); }
//!         _ => {}
//!     }
//! }
//! ```

use crate::math::{point, Point};
use crate::path::Verb;
use crate::PathEvent;

/// An iterator over the events of a [`Path`](../struct.Path.html).
///
/// The current position starts at the origin. After a `Close` event, the current
/// position is the first point of the sub-path that was closed.
///
/// If the path does not hold enough points for its verbs, the iteration stops at
/// the first verb that can't be completed.
#[derive(Clone)]
pub struct Iter<'l> {
    verbs: std::slice::Iter<'l, Verb>,
    points: &'l [Point],
    current: Point,
    first: Point,
}

impl<'l> Iter<'l> {
    pub(crate) fn new(verbs: &'l [Verb], points: &'l [Point]) -> Self {
        Iter {
            verbs: verbs.iter(),
            points,
            current: point(0.0, 0.0),
            first: point(0.0, 0.0),
        }
    }

    fn take_points(&mut self, n: usize) -> Option<&'l [Point]> {
        if self.points.len() < n {
            self.points = &[];
            return None;
        }

        let (taken, rest) = self.points.split_at(n);
        self.points = rest;

        Some(taken)
    }
}

impl<'l> Iterator for Iter<'l> {
    type Item = PathEvent;

    fn next(&mut self) -> Option<PathEvent> {
        let verb = *self.verbs.next()?;
        let pts = match self.take_points(verb.num_points()) {
            Some(pts) => pts,
            None => {
                // Drain the verbs so that the iterator stays fused.
                self.verbs = (&[] as &[Verb]).iter();
                return None;
            }
        };

        let from = self.current;
        match verb {
            Verb::MoveTo => {
                self.current = pts[0];
                self.first = pts[0];
                Some(PathEvent::Begin { at: pts[0] })
            }
            Verb::LineTo => {
                self.current = pts[0];
                Some(PathEvent::Line { from, to: pts[0] })
            }
            Verb::QuadTo => {
                self.current = pts[1];
                Some(PathEvent::Quadratic {
                    from,
                    ctrl: pts[0],
                    to: pts[1],
                })
            }
            Verb::CubicTo => {
                self.current = pts[2];
                Some(PathEvent::Cubic {
                    from,
                    ctrl1: pts[0],
                    ctrl2: pts[1],
                    to: pts[2],
                })
            }
            Verb::Close => {
                self.current = self.first;
                Some(PathEvent::Close {
                    last: from,
                    first: self.first,
                })
            }
        }
    }
}

impl<'l> std::iter::FusedIterator for Iter<'l> {}

#[cfg(test)]
use crate::Path;

#[test]
fn simple_iteration() {
    let mut path = Path::new();
    path.move_to(point(1.0, 1.0))
        .line_to(point(2.0, 1.0))
        .quad_to(point(3.0, 1.0), point(3.0, 2.0))
        .close()
        .line_to(point(0.0, 5.0));

    let events: Vec<PathEvent> = path.iter().collect();
    assert_eq!(
        events,
        vec![
            PathEvent::Begin { at: point(1.0, 1.0) },
            PathEvent::Line { from: point(1.0, 1.0), to: point(2.0, 1.0) },
            PathEvent::Quadratic {
                from: point(2.0, 1.0),
                ctrl: point(3.0, 1.0),
                to: point(3.0, 2.0),
            },
            PathEvent::Close { last: point(3.0, 2.0), first: point(1.0, 1.0) },
            PathEvent::Line { from: point(1.0, 1.0), to: point(0.0, 5.0) },
        ]
    );
}

#[test]
fn iteration_stops_when_points_run_short() {
    let path = Path::from_parts(
        vec![Verb::MoveTo, Verb::LineTo, Verb::CubicTo, Verb::LineTo],
        vec![point(0.0, 0.0), point(1.0, 0.0), point(2.0, 0.0)],
    );

    let mut iter = path.iter();
    assert!(iter.next().is_some());
    assert!(iter.next().is_some());
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn close_events() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0)).line_to(point(1.0, 0.0)).close();
    path.move_to(point(5.0, 5.0)).close();

    let closes: Vec<PathEvent> = path
        .iter()
        .filter(|evt| matches!(evt, PathEvent::Close { .. }))
        .collect();

    assert!(closes[0].is_edge());
    assert!(!closes[1].is_edge());
    assert_eq!(closes[0].to(), point(0.0, 0.0));
}
