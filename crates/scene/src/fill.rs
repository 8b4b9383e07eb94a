use crate::math::{box2d, point, Box2D};
use crate::path::Path;
use crate::render::stroke::{LineCap, LineJoin};
use crate::render::{Color, Paint, Renderer};
use crate::{Artist, DataTransform};

/// The area between two curves sharing their x coordinates, or between a curve
/// and a horizontal baseline.
///
/// Only the first `n` samples are used, `n` being the length of the shortest of
/// `xs`, `upper` and `lower` (when there is one). Nothing is drawn with less than
/// two samples.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct FillArtist {
    pub xs: Vec<f64>,
    pub upper: Vec<f64>,
    /// The second curve. The area extends to `baseline` if `None`.
    pub lower: Option<Vec<f64>>,
    pub baseline: f64,
    pub color: Color,
    /// The outline is stroked if `edge_width` is positive.
    pub edge_color: Color,
    pub edge_width: f64,
    /// Replaces the alpha of the fill color and scales the alpha of the edge color
    /// when it is in `(0, 1]`.
    pub alpha: Option<f64>,
    pub z: f64,
}

impl FillArtist {
    /// The area between `upper` and `lower`.
    pub fn between(xs: Vec<f64>, upper: Vec<f64>, lower: Vec<f64>, color: Color) -> Self {
        FillArtist {
            xs,
            upper,
            lower: Some(lower),
            baseline: 0.0,
            color,
            edge_color: Color::TRANSPARENT,
            edge_width: 0.0,
            alpha: None,
            z: 0.0,
        }
    }

    /// The area between `ys` and the horizontal line at `baseline`.
    pub fn to_baseline(xs: Vec<f64>, ys: Vec<f64>, baseline: f64, color: Color) -> Self {
        FillArtist {
            xs,
            upper: ys,
            lower: None,
            baseline,
            color,
            edge_color: Color::TRANSPARENT,
            edge_width: 0.0,
            alpha: None,
            z: 0.0,
        }
    }

    pub fn with_edge(mut self, color: Color, width: f64) -> Self {
        self.edge_color = color;
        self.edge_width = width;
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

    /// Number of samples that are used.
    pub fn len(&self) -> usize {
        let n = self.xs.len().min(self.upper.len());
        match self.lower {
            Some(ref lower) => n.min(lower.len()),
            None => n,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lower_at(&self, index: usize) -> f64 {
        match self.lower {
            Some(ref lower) => lower[index],
            None => self.baseline,
        }
    }

    fn valid_alpha(&self) -> Option<f64> {
        self.alpha.filter(|a| *a > 0.0 && *a <= 1.0)
    }

    /// The fill and edge colors with the alpha override applied.
    pub fn colors(&self) -> (Color, Color) {
        match self.valid_alpha() {
            Some(alpha) => (
                self.color.with_alpha(alpha),
                self.edge_color.with_alpha(self.edge_color.a * alpha),
            ),
            None => (self.color, self.edge_color),
        }
    }

    /// The extent of the used samples in data space, or `None` without any.
    pub fn bounds(&self) -> Option<Box2D> {
        let n = self.len();
        if n == 0 {
            return None;
        }

        let mut bounds = box2d(f64::MAX, f64::MAX, f64::MIN, f64::MIN);
        for i in 0..n {
            for y in [self.upper[i], self.lower_at(i)] {
                bounds.min = bounds.min.min(point(self.xs[i], y));
                bounds.max = bounds.max.max(point(self.xs[i], y));
            }
        }

        Some(bounds)
    }

    /// The outline in pixels: along the upper curve left to right, then back along
    /// the lower curve or baseline.
    pub fn pixel_path(&self, transform: &DataTransform) -> Option<Path> {
        let n = self.len();
        if n < 2 {
            return None;
        }

        let mut path = Path::with_capacity(2 * n + 1, 2 * n);
        path.move_to(transform.apply(point(self.xs[0], self.upper[0])));
        for i in 1..n {
            path.line_to(transform.apply(point(self.xs[i], self.upper[i])));
        }
        for i in (0..n).rev() {
            path.line_to(transform.apply(point(self.xs[i], self.lower_at(i))));
        }
        path.close();

        Some(path)
    }
}

impl Artist for FillArtist {
    fn draw(&self, renderer: &mut dyn Renderer, transform: &DataTransform) {
        let Some(path) = self.pixel_path(transform) else {
            return;
        };

        let (fill, edge) = self.colors();
        renderer.path(&path, &Paint::fill(fill));

        if self.edge_width > 0.0 && edge.a > 0.0 {
            let paint = Paint::stroke(edge, self.edge_width)
                .with_line_join(LineJoin::Round)
                .with_line_cap(LineCap::Round);
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
fn area_between_curves() {
    let fill = FillArtist::between(
        vec![0.0, 5.0, 10.0],
        vec![4.0, 6.0, 5.0],
        vec![1.0, 2.0],
        Color::GREEN,
    );
    assert_eq!(fill.len(), 2);
    assert_eq!(fill.bounds(), Some(box2d(0.0, 1.0, 5.0, 6.0)));

    let mut recorder = Recorder::default();
    fill.draw(&mut recorder, &unit_test_transform());
    assert_eq!(recorder.paths.len(), 1);

    let (path, paint) = &recorder.paths[0];
    assert_eq!(
        path.points(),
        &[point(0.0, 40.0), point(50.0, 60.0), point(50.0, 20.0), point(0.0, 10.0)][..]
    );
    assert_eq!(paint.fill, Color::GREEN);
}

#[test]
fn area_to_baseline_with_edge() {
    let fill = FillArtist::to_baseline(vec![0.0, 10.0], vec![5.0, 5.0], 2.0, Color::BLUE)
        .with_edge(Color::BLACK, 1.5);
    assert_eq!(fill.bounds(), Some(box2d(0.0, 2.0, 10.0, 5.0)));

    let mut recorder = Recorder::default();
    fill.draw(&mut recorder, &unit_test_transform());
    assert_eq!(recorder.paths.len(), 2);

    let (outline, paint) = &recorder.paths[1];
    assert_eq!(outline, &recorder.paths[0].0);
    assert_eq!(paint.stroke, Color::BLACK);
    assert_eq!(paint.line_width, 1.5);
    assert_eq!(paint.line_join, LineJoin::Round);
}

#[test]
fn alpha_override() {
    let fill = FillArtist::to_baseline(vec![0.0, 1.0], vec![1.0, 1.0], 0.0, Color::RED)
        .with_edge(Color::BLACK.with_alpha(0.5), 1.0)
        .with_alpha(0.5);
    let (color, edge) = fill.colors();
    assert_eq!(color, Color::RED.with_alpha(0.5));
    assert_eq!(edge, Color::BLACK.with_alpha(0.25));

    // Out of range overrides are ignored.
    let fill = fill.with_alpha(1.5);
    assert_eq!(fill.colors(), (Color::RED, Color::BLACK.with_alpha(0.5)));
}

#[test]
fn too_few_samples() {
    let fill = FillArtist::to_baseline(vec![1.0], vec![1.0], 0.0, Color::RED);
    assert_eq!(fill.bounds(), Some(box2d(1.0, 0.0, 1.0, 1.0)));

    let mut recorder = Recorder::default();
    fill.draw(&mut recorder, &unit_test_transform());
    assert!(recorder.paths.is_empty());

    let empty = FillArtist::between(Vec::new(), Vec::new(), Vec::new(), Color::RED);
    assert!(empty.is_empty());
    assert_eq!(empty.bounds(), None);
}
