//! Bounding rectangle computation for paths.

use crate::math::{point, Box2D, Point};
use crate::PathEvent;

/// Computes a conservative axis-aligned rectangle that contains the path.
///
/// Control points are included, so the rectangle may be larger than the
/// curves themselves.
pub fn fast_bounding_box<Iter>(path: Iter) -> Box2D
where
    Iter: IntoIterator<Item = PathEvent>,
{
    let mut min = point(f64::MAX, f64::MAX);
    let mut max = point(f64::MIN, f64::MIN);
    for evt in path {
        min_max(&evt, &mut min, &mut max);
    }

    // Return an empty rectangle by default if there was no event in the path.
    if min == point(f64::MAX, f64::MAX) {
        return Box2D::zero();
    }

    Box2D { min, max }
}

fn min_max(evt: &PathEvent, min: &mut Point, max: &mut Point) {
    match *evt {
        PathEvent::Begin { at } => {
            *min = Point::min(*min, at);
            *max = Point::max(*max, at);
        }
        PathEvent::Line { to, .. } => {
            *min = Point::min(*min, to);
            *max = Point::max(*max, to);
        }
        PathEvent::Quadratic { ctrl, to, .. } => {
            *min = Point::min(*min, Point::min(ctrl, to));
            *max = Point::max(*max, Point::max(ctrl, to));
        }
        PathEvent::Cubic {
            ctrl1, ctrl2, to, ..
        } => {
            *min = Point::min(*min, Point::min(ctrl1, Point::min(ctrl2, to)));
            *max = Point::max(*max, Point::max(ctrl1, Point::max(ctrl2, to)));
        }
        PathEvent::Close { .. } => {}
    }
}

#[test]
fn simple_bounding_box() {
    use crate::Path;
    use crate::math::box2d;

    let mut path = Path::new();
    path.move_to(point(-10.0, -3.0))
        .line_to(point(0.0, -12.0))
        .quad_to(point(4.0, 20.0), point(5.0, 0.0))
        .close();

    assert_eq!(path.fast_bounding_box(), box2d(-10.0, -12.0, 5.0, 20.0));

    assert_eq!(Path::new().fast_bounding_box(), Box2D::zero());
}
