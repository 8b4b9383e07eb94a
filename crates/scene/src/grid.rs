use crate::math::point;
use crate::path::Path;
use crate::render::stroke::{LineCap, LineJoin};
use crate::render::{Color, Paint, Renderer};
use crate::{Artist, DataTransform};

/// The axis grid lines are positioned on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum GridAxis {
    /// Vertical lines at x positions.
    X,
    /// Horizontal lines at y positions.
    Y,
}

/// Lines spanning the whole domain of one scale at given positions of the other.
///
/// Grids are drawn behind other artists by default.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct GridArtist {
    pub axis: GridAxis,
    /// Data positions of the lines along `axis`.
    pub positions: Vec<f64>,
    pub color: Color,
    pub line_width: f64,
    /// Replaces the alpha of `color` when it is in `(0, 1]`.
    pub alpha: Option<f64>,
    pub z: f64,
}

impl GridArtist {
    pub const DEFAULT_COLOR: Color = Color::rgb(0.8, 0.8, 0.8);
    pub const DEFAULT_LINE_WIDTH: f64 = 0.5;
    pub const DEFAULT_Z: f64 = -1000.0;

    pub fn new(axis: GridAxis, positions: Vec<f64>) -> Self {
        GridArtist {
            axis,
            positions,
            color: Self::DEFAULT_COLOR,
            line_width: Self::DEFAULT_LINE_WIDTH,
            alpha: None,
            z: Self::DEFAULT_Z,
        }
    }

    /// Lines at `count` evenly spaced positions covering the domain of the scale of
    /// `axis`, both ends included.
    pub fn evenly_spaced(axis: GridAxis, transform: &DataTransform, count: usize) -> Self {
        let (min, max) = match axis {
            GridAxis::X => transform.x.domain(),
            GridAxis::Y => transform.y.domain(),
        };

        let positions = match count {
            0 => Vec::new(),
            1 => vec![min],
            _ => (0..count)
                .map(|i| min + (max - min) * i as f64 / (count - 1) as f64)
                .collect(),
        };

        GridArtist::new(axis, positions)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn with_z(mut self, z: f64) -> Self {
        self.z = z;
        self
    }

    pub fn paint(&self) -> Paint {
        let color = match self.alpha {
            Some(alpha) if alpha > 0.0 && alpha <= 1.0 => self.color.with_alpha(alpha),
            _ => self.color,
        };

        Paint::stroke(color, self.line_width)
            .with_line_cap(LineCap::Butt)
            .with_line_join(LineJoin::Miter)
    }
}

impl Artist for GridArtist {
    fn draw(&self, renderer: &mut dyn Renderer, transform: &DataTransform) {
        let paint = self.paint();
        let (x_min, x_max) = transform.x.domain();
        let (y_min, y_max) = transform.y.domain();

        for &value in &self.positions {
            let (from, to) = match self.axis {
                GridAxis::X => (point(value, y_min), point(value, y_max)),
                GridAxis::Y => (point(x_min, value), point(x_max, value)),
            };

            let mut path = Path::with_capacity(2, 2);
            path.move_to(transform.apply(from))
                .line_to(transform.apply(to));
            renderer.path(&path, &paint);
        }
    }

    fn z(&self) -> f64 {
        self.z
    }
}

#[cfg(test)]
use crate::artist::{unit_test_transform, Recorder};

#[test]
fn lines_span_the_other_domain() {
    let transform = unit_test_transform();
    let grid = GridArtist::new(GridAxis::X, vec![0.0, 5.0]).with_alpha(0.5);

    let mut recorder = Recorder::default();
    grid.draw(&mut recorder, &transform);
    assert_eq!(recorder.paths.len(), 2);
    assert_eq!(recorder.paths[1].0.points(), &[point(50.0, 0.0), point(50.0, 100.0)][..]);

    let paint = &recorder.paths[0].1;
    assert_eq!(paint.stroke, GridArtist::DEFAULT_COLOR.with_alpha(0.5));
    assert_eq!(paint.line_width, 0.5);
    assert_eq!(paint.line_cap, LineCap::Butt);
    assert_eq!(Artist::z(&grid), -1000.0);

    let mut recorder = Recorder::default();
    GridArtist::new(GridAxis::Y, vec![2.0]).draw(&mut recorder, &transform);
    assert_eq!(recorder.paths[0].0.points(), &[point(0.0, 20.0), point(100.0, 20.0)][..]);
}

#[test]
fn evenly_spaced_positions() {
    let transform = unit_test_transform();
    assert_eq!(
        GridArtist::evenly_spaced(GridAxis::Y, &transform, 3).positions,
        vec![0.0, 5.0, 10.0]
    );
    assert_eq!(
        GridArtist::evenly_spaced(GridAxis::X, &transform, 1).positions,
        vec![0.0]
    );
    assert!(GridArtist::evenly_spaced(GridAxis::X, &transform, 0)
        .positions
        .is_empty());
}
