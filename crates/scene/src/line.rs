use crate::math::Point;
use crate::path::Path;
use crate::render::stroke::{LineCap, LineJoin};
use crate::render::{Color, Paint, Renderer};
use crate::{Artist, DataTransform};

/// A polyline through data points.
///
/// The line is stroked with round joins and caps.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineArtist {
    pub points: Vec<Point>,
    pub color: Color,
    pub line_width: f64,
    /// Alternating on/off lengths in pixels.
    pub dashes: Vec<f64>,
    pub z: f64,
}

impl LineArtist {
    pub const DEFAULT_MITER_LIMIT: f64 = 10.0;

    pub fn new(points: Vec<Point>, color: Color, line_width: f64) -> Self {
        LineArtist {
            points,
            color,
            line_width,
            dashes: Vec::new(),
            z: 0.0,
        }
    }

    pub fn with_dashes(mut self, dashes: Vec<f64>) -> Self {
        self.dashes = dashes;
        self
    }

    pub fn with_z(mut self, z: f64) -> Self {
        self.z = z;
        self
    }

    /// The polyline in pixels, or `None` without points.
    pub fn pixel_path(&self, transform: &DataTransform) -> Option<Path> {
        let (first, rest) = self.points.split_first()?;

        let mut path = Path::with_capacity(self.points.len() + 1, self.points.len());
        path.move_to(transform.apply(*first));
        for p in rest {
            path.line_to(transform.apply(*p));
        }

        Some(path)
    }

    pub fn paint(&self) -> Paint {
        Paint::stroke(self.color, self.line_width)
            .with_line_join(LineJoin::Round)
            .with_line_cap(LineCap::Round)
            .with_miter_limit(Self::DEFAULT_MITER_LIMIT)
            .with_dashes(self.dashes.clone())
    }
}

impl Artist for LineArtist {
    fn draw(&self, renderer: &mut dyn Renderer, transform: &DataTransform) {
        if let Some(path) = self.pixel_path(transform) {
            renderer.path(&path, &self.paint());
        }
    }

    fn z(&self) -> f64 {
        self.z
    }
}

#[cfg(test)]
use crate::artist::{unit_test_transform, Recorder};
#[cfg(test)]
use crate::math::point;
#[cfg(test)]
use crate::path::Verb;

#[test]
fn empty_lines_draw_nothing() {
    let mut recorder = Recorder::default();
    LineArtist::new(Vec::new(), Color::BLACK, 1.0).draw(&mut recorder, &unit_test_transform());
    assert!(recorder.paths.is_empty());
}

#[test]
fn polyline_in_pixels() {
    let line = LineArtist::new(
        vec![point(0.0, 0.0), point(5.0, 2.0), point(10.0, 10.0)],
        Color::RED,
        2.0,
    )
    .with_dashes(vec![4.0, 2.0])
    .with_z(3.0);

    let mut recorder = Recorder::default();
    line.draw(&mut recorder, &unit_test_transform());

    assert_eq!(recorder.paths.len(), 1);
    let (path, paint) = &recorder.paths[0];
    assert_eq!(path.verbs(), &[Verb::MoveTo, Verb::LineTo, Verb::LineTo][..]);
    assert_eq!(
        path.points(),
        &[point(0.0, 0.0), point(50.0, 20.0), point(100.0, 100.0)][..]
    );
    assert_eq!(paint.stroke, Color::RED);
    assert_eq!(paint.fill.a, 0.0);
    assert_eq!(paint.line_width, 2.0);
    assert_eq!(paint.line_join, LineJoin::Round);
    assert_eq!(paint.line_cap, LineCap::Round);
    assert_eq!(paint.dashes, vec![4.0, 2.0]);
    assert_eq!(Artist::z(&line), 3.0);
}

#[test]
fn single_point_is_a_move() {
    let line = LineArtist::new(vec![point(1.0, 1.0)], Color::BLACK, 1.0);
    let path = line.pixel_path(&unit_test_transform()).unwrap();
    assert_eq!(path.verbs(), &[Verb::MoveTo][..]);
}
