use crate::math::{point, Point};
use crate::path::Path;
use crate::render::{Color, Paint, Renderer};
use crate::{Artist, DataTransform};

/// The direction bars extend to from their baseline.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum BarOrientation {
    /// Bars are centered on their position along x and extend along y.
    Vertical,
    /// Bars are centered on their position along y and extend along x.
    Horizontal,
}

/// Filled rectangles extending from a baseline to data values.
///
/// Widths are in data units along the axis the bars are positioned on. Only the
/// first `min(positions.len(), values.len())` bars are drawn. The `widths` and
/// `colors` vectors override the default width and color for the bars they have
/// an entry for.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct BarArtist {
    pub positions: Vec<f64>,
    pub values: Vec<f64>,
    pub widths: Vec<f64>,
    pub colors: Vec<Color>,
    pub width: f64,
    pub color: Color,
    pub baseline: f64,
    pub orientation: BarOrientation,
    pub z: f64,
}

impl BarArtist {
    pub fn new(positions: Vec<f64>, values: Vec<f64>, width: f64, color: Color) -> Self {
        BarArtist {
            positions,
            values,
            widths: Vec::new(),
            colors: Vec::new(),
            width,
            color,
            baseline: 0.0,
            orientation: BarOrientation::Vertical,
            z: 0.0,
        }
    }

    pub fn with_widths(mut self, widths: Vec<f64>) -> Self {
        self.widths = widths;
        self
    }

    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn with_orientation(mut self, orientation: BarOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_z(mut self, z: f64) -> Self {
        self.z = z;
        self
    }

    /// Number of bars that are drawn.
    pub fn len(&self) -> usize {
        self.positions.len().min(self.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The corners of a bar in data space, starting at the bottom left and going
    /// counter-clockwise in a y-up frame.
    ///
    /// Returns `None` if `index` is out of range.
    pub fn corners(&self, index: usize) -> Option<[Point; 4]> {
        if index >= self.len() {
            return None;
        }

        let position = self.positions[index];
        let value = self.values[index];
        let half_width = self.widths.get(index).copied().unwrap_or(self.width) * 0.5;

        let (low, high) = if value < self.baseline {
            (value, self.baseline)
        } else {
            (self.baseline, value)
        };

        let (left, right, bottom, top) = match self.orientation {
            BarOrientation::Vertical => (position - half_width, position + half_width, low, high),
            BarOrientation::Horizontal => (low, high, position - half_width, position + half_width),
        };

        Some([
            point(left, bottom),
            point(right, bottom),
            point(right, top),
            point(left, top),
        ])
    }
}

impl Artist for BarArtist {
    fn draw(&self, renderer: &mut dyn Renderer, transform: &DataTransform) {
        for i in 0..self.len() {
            let Some(corners) = self.corners(i) else {
                continue;
            };

            let mut path = Path::with_capacity(5, 4);
            path.move_to(transform.apply(corners[0]));
            for corner in &corners[1..] {
                path.line_to(transform.apply(*corner));
            }
            path.close();

            let color = self.colors.get(i).copied().unwrap_or(self.color);
            renderer.path(&path, &Paint::fill(color));
        }
    }

    fn z(&self) -> f64 {
        self.z
    }
}

#[cfg(test)]
use crate::artist::{unit_test_transform, Recorder};

#[test]
fn vertical_bars() {
    let bars = BarArtist::new(vec![1.0, 3.0, 5.0], vec![4.0, -2.0], 1.0, Color::BLUE)
        .with_colors(vec![Color::RED]);
    assert_eq!(bars.len(), 2);

    assert_eq!(
        bars.corners(0),
        Some([point(0.5, 0.0), point(1.5, 0.0), point(1.5, 4.0), point(0.5, 4.0)])
    );
    // Negative values extend below the baseline.
    assert_eq!(
        bars.corners(1),
        Some([point(2.5, -2.0), point(3.5, -2.0), point(3.5, 0.0), point(2.5, 0.0)])
    );
    assert_eq!(bars.corners(2), None);

    let mut recorder = Recorder::default();
    bars.draw(&mut recorder, &unit_test_transform());
    assert_eq!(recorder.paths.len(), 2);
    assert_eq!(recorder.paths[0].1.fill, Color::RED);
    assert_eq!(recorder.paths[1].1.fill, Color::BLUE);

    let bounds = recorder.paths[0].0.fast_bounding_box();
    assert_eq!(bounds.min, point(5.0, 0.0));
    assert_eq!(bounds.max, point(15.0, 40.0));
}

#[test]
fn horizontal_bars_and_baseline() {
    let bars = BarArtist::new(vec![2.0], vec![6.0], 1.0, Color::BLACK)
        .with_orientation(BarOrientation::Horizontal)
        .with_baseline(1.0)
        .with_widths(vec![2.0]);

    assert_eq!(
        bars.corners(0),
        Some([point(1.0, 1.0), point(6.0, 1.0), point(6.0, 3.0), point(1.0, 3.0)])
    );
}

#[test]
fn empty_bars_draw_nothing() {
    let bars = BarArtist::new(vec![1.0, 2.0], Vec::new(), 1.0, Color::BLACK);
    assert!(bars.is_empty());

    let mut recorder = Recorder::default();
    bars.draw(&mut recorder, &unit_test_transform());
    assert!(recorder.paths.is_empty());
}
