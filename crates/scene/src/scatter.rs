use crate::math::{point, Point};
use crate::path::Path;
use crate::render::{Color, Paint, Renderer};
use crate::{Artist, DataTransform};

use std::f64::consts::PI;

/// Number of sides of the polygon approximating circle markers.
const CIRCLE_SEGMENTS: usize = 16;

/// Thickness of the bars of plus and cross markers, relative to their radius.
const BAR_THICKNESS: f64 = 0.3;

/// The shape drawn at each point of a [`ScatterArtist`](struct.ScatterArtist.html).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Marker {
    Circle,
    Square,
    /// Pointing up on screen.
    Triangle,
    Diamond,
    Plus,
    Cross,
}

impl Marker {
    /// The outline of the marker around `center`, in pixels.
    ///
    /// Returns `None` if the radius is not a positive number.
    pub fn path(self, center: Point, radius: f64) -> Option<Path> {
        if !(radius > 0.0 && radius.is_finite()) {
            return None;
        }

        let (cx, cy) = (center.x, center.y);
        let r = radius;
        let mut path = Path::new();
        match self {
            Marker::Circle => {
                for i in 0..CIRCLE_SEGMENTS {
                    let angle = 2.0 * PI * i as f64 / CIRCLE_SEGMENTS as f64;
                    let p = point(cx + r * angle.cos(), cy + r * angle.sin());
                    if i == 0 {
                        path.move_to(p);
                    } else {
                        path.line_to(p);
                    }
                }
                path.close();
            }
            Marker::Square => {
                polygon(
                    &mut path,
                    &[
                        point(cx - r, cy - r),
                        point(cx + r, cy - r),
                        point(cx + r, cy + r),
                        point(cx - r, cy + r),
                    ],
                );
            }
            Marker::Triangle => {
                let h = r * 3.0f64.sqrt() * 0.5;
                polygon(
                    &mut path,
                    &[
                        point(cx, cy - h),
                        point(cx + r, cy + h * 0.5),
                        point(cx - r, cy + h * 0.5),
                    ],
                );
            }
            Marker::Diamond => {
                polygon(
                    &mut path,
                    &[
                        point(cx, cy - r),
                        point(cx + r, cy),
                        point(cx, cy + r),
                        point(cx - r, cy),
                    ],
                );
            }
            Marker::Plus => {
                let t = r * BAR_THICKNESS;
                polygon(
                    &mut path,
                    &[
                        point(cx - r, cy - t),
                        point(cx + r, cy - t),
                        point(cx + r, cy + t),
                        point(cx - r, cy + t),
                    ],
                );
                polygon(
                    &mut path,
                    &[
                        point(cx - t, cy - r),
                        point(cx + t, cy - r),
                        point(cx + t, cy + r),
                        point(cx - t, cy + r),
                    ],
                );
            }
            Marker::Cross => {
                // Both diagonals are bars rotated by 45 degrees.
                let o = r * BAR_THICKNESS / 2.0f64.sqrt();
                polygon(
                    &mut path,
                    &[
                        point(cx - r + o, cy - r - o),
                        point(cx + r + o, cy + r - o),
                        point(cx + r - o, cy + r + o),
                        point(cx - r - o, cy - r + o),
                    ],
                );
                polygon(
                    &mut path,
                    &[
                        point(cx + r - o, cy - r - o),
                        point(cx + r + o, cy - r + o),
                        point(cx - r + o, cy + r + o),
                        point(cx - r - o, cy + r - o),
                    ],
                );
            }
        }

        Some(path)
    }
}

fn polygon(path: &mut Path, points: &[Point]) {
    if let Some((first, rest)) = points.split_first() {
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
        path.close();
    }
}

/// Filled markers at data points.
///
/// Sizes are radii in pixels. The `sizes` and `colors` vectors override the
/// default size and color for the points they have an entry for.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ScatterArtist {
    pub points: Vec<Point>,
    pub sizes: Vec<f64>,
    pub colors: Vec<Color>,
    pub size: f64,
    pub color: Color,
    pub marker: Marker,
    pub z: f64,
}

impl ScatterArtist {
    pub fn new(points: Vec<Point>, marker: Marker, size: f64, color: Color) -> Self {
        ScatterArtist {
            points,
            sizes: Vec::new(),
            colors: Vec::new(),
            size,
            color,
            marker,
            z: 0.0,
        }
    }

    pub fn with_sizes(mut self, sizes: Vec<f64>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_z(mut self, z: f64) -> Self {
        self.z = z;
        self
    }

    pub fn size_at(&self, index: usize) -> f64 {
        self.sizes.get(index).copied().unwrap_or(self.size)
    }

    pub fn color_at(&self, index: usize) -> Color {
        self.colors.get(index).copied().unwrap_or(self.color)
    }
}

impl Artist for ScatterArtist {
    fn draw(&self, renderer: &mut dyn Renderer, transform: &DataTransform) {
        for (i, p) in self.points.iter().enumerate() {
            let center = transform.apply(*p);
            if !(center.x.is_finite() && center.y.is_finite()) {
                log::trace!("ScatterArtist: skipping point {:?} outside of the scales", p);
                continue;
            }

            if let Some(path) = self.marker.path(center, self.size_at(i)) {
                renderer.path(&path, &Paint::fill(self.color_at(i)));
            }
        }
    }

    fn z(&self) -> f64 {
        self.z
    }
}

#[cfg(test)]
use crate::artist::{unit_test_transform, Recorder};
#[cfg(test)]
use crate::path::Verb;

#[test]
fn marker_outlines() {
    let center = point(10.0, 20.0);
    let count = |marker: Marker| {
        let path = marker.path(center, 4.0).unwrap();
        let closes = path.verbs().iter().filter(|v| **v == Verb::Close).count();
        (path.points().len(), closes)
    };

    assert_eq!(count(Marker::Circle), (16, 1));
    assert_eq!(count(Marker::Square), (4, 1));
    assert_eq!(count(Marker::Triangle), (3, 1));
    assert_eq!(count(Marker::Diamond), (4, 1));
    assert_eq!(count(Marker::Plus), (8, 2));
    assert_eq!(count(Marker::Cross), (8, 2));

    for marker in [
        Marker::Circle,
        Marker::Square,
        Marker::Triangle,
        Marker::Diamond,
        Marker::Plus,
        Marker::Cross,
    ] {
        let path = marker.path(center, 4.0).unwrap();
        assert!(path.is_valid());
        let bounds = path.fast_bounding_box();
        assert!(bounds.min.x >= 10.0 - 4.0 - 1.0 && bounds.max.x <= 10.0 + 4.0 + 1.0);
        assert!(bounds.min.y >= 20.0 - 4.0 - 1.0 && bounds.max.y <= 20.0 + 4.0 + 1.0);
        assert_eq!(marker.path(center, 0.0), None);
        assert_eq!(marker.path(center, f64::NAN), None);
    }

    let square = Marker::Square.path(center, 4.0).unwrap();
    assert_eq!(square.fast_bounding_box().min, point(6.0, 16.0));
    assert_eq!(square.fast_bounding_box().max, point(14.0, 24.0));
}

#[test]
fn per_point_sizes_and_colors() {
    let scatter = ScatterArtist::new(
        vec![point(1.0, 1.0), point(2.0, 2.0), point(3.0, 3.0)],
        Marker::Square,
        2.0,
        Color::BLACK,
    )
    .with_sizes(vec![1.0, 0.0])
    .with_colors(vec![Color::RED]);

    let mut recorder = Recorder::default();
    scatter.draw(&mut recorder, &unit_test_transform());

    // The second marker has a zero size.
    assert_eq!(recorder.paths.len(), 2);
    let (first, paint) = &recorder.paths[0];
    assert_eq!(first.fast_bounding_box().min, point(9.0, 9.0));
    assert_eq!(paint.fill, Color::RED);
    assert_eq!(paint.stroke.a, 0.0);

    let (third, paint) = &recorder.paths[1];
    assert_eq!(third.fast_bounding_box().min, point(28.0, 28.0));
    assert_eq!(paint.fill, Color::BLACK);
}

#[test]
fn empty_scatter_draws_nothing() {
    let mut recorder = Recorder::default();
    ScatterArtist::new(Vec::new(), Marker::Circle, 3.0, Color::BLACK)
        .draw(&mut recorder, &unit_test_transform());
    assert!(recorder.paths.is_empty());
}
