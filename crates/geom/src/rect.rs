//! Rectangle helpers with max-exclusive semantics.

use crate::math::{Box2D, Point};

/// Returns true if `p` lies within `rect`, treating the max edges as exclusive.
#[inline]
pub fn rect_contains(rect: &Box2D, p: Point) -> bool {
    p.x >= rect.min.x && p.x < rect.max.x && p.y >= rect.min.y && p.y < rect.max.y
}

/// Expands (or contracts if negative) the rectangle by `dx`, `dy` on all sides.
#[inline]
pub fn inflate(rect: &Box2D, dx: f64, dy: f64) -> Box2D {
    Box2D {
        min: Point::new(rect.min.x - dx, rect.min.y - dy),
        max: Point::new(rect.max.x + dx, rect.max.y + dy),
    }
}

/// Intersection of two rectangles.
///
/// Unlike `Box2D::intersection`, an empty intersection is not discarded: it collapses
/// onto the boundary (`max == min` on the empty axes), so the result can keep being
/// intersected with other rectangles and stays empty.
pub fn intersect_or_empty(a: &Box2D, b: &Box2D) -> Box2D {
    let min = Point::new(a.min.x.max(b.min.x), a.min.y.max(b.min.y));
    let mut max = Point::new(a.max.x.min(b.max.x), a.max.y.min(b.max.y));
    if max.x < min.x {
        max.x = min.x;
    }
    if max.y < min.y {
        max.y = min.y;
    }

    Box2D { min, max }
}

#[cfg(test)]
use crate::math::{box2d, point};

#[test]
fn contains_is_max_exclusive() {
    let r = box2d(0.0, 0.0, 10.0, 5.0);
    assert!(rect_contains(&r, point(0.0, 0.0)));
    assert!(rect_contains(&r, point(9.999, 4.999)));
    assert!(!rect_contains(&r, point(10.0, 2.0)));
    assert!(!rect_contains(&r, point(2.0, 5.0)));
    assert!(!rect_contains(&r, point(-0.1, 2.0)));
}

#[test]
fn overlapping_intersection() {
    let a = box2d(0.0, 0.0, 10.0, 10.0);
    let b = box2d(5.0, -5.0, 15.0, 5.0);
    assert_eq!(intersect_or_empty(&a, &b), box2d(5.0, 0.0, 10.0, 5.0));
}

#[test]
fn disjoint_intersection_collapses() {
    let a = box2d(0.0, 0.0, 10.0, 10.0);
    let b = box2d(20.0, 20.0, 30.0, 30.0);
    let i = intersect_or_empty(&a, &b);
    assert_eq!(i.width(), 0.0);
    assert_eq!(i.height(), 0.0);
    assert!(i.is_empty());
    assert!(!rect_contains(&i, point(20.0, 20.0)));
}

#[test]
fn inflate_and_deflate() {
    let r = box2d(1.0, 1.0, 3.0, 3.0);
    assert_eq!(inflate(&r, 1.0, 2.0), box2d(0.0, -1.0, 4.0, 5.0));
    assert_eq!(inflate(&r, -0.5, -0.5), box2d(1.5, 1.5, 2.5, 2.5));
}
