use crate::path::Path;
use crate::render::{Paint, Renderer};
use crate::DataTransform;

/// Something that can draw itself in a layer.
pub trait Artist {
    /// Draws using `transform` to map data coordinates to pixels.
    fn draw(&self, renderer: &mut dyn Renderer, transform: &DataTransform);

    /// Artists with a lower z are drawn first.
    fn z(&self) -> f64 {
        0.0
    }
}

/// Draws a data space path with a paint.
#[derive(Clone, Debug, PartialEq)]
pub struct PathArtist {
    pub path: Path,
    pub paint: Paint,
    pub z: f64,
}

impl PathArtist {
    pub fn new(path: Path, paint: Paint) -> Self {
        PathArtist { path, paint, z: 0.0 }
    }

    pub fn with_z(mut self, z: f64) -> Self {
        self.z = z;
        self
    }

    /// The path mapped to pixels.
    ///
    /// Scales are not affine, so control points are mapped individually like the
    /// end points.
    pub fn pixel_path(&self, transform: &DataTransform) -> Path {
        let points = self
            .path
            .points()
            .iter()
            .map(|p| transform.apply(*p))
            .collect();

        Path::from_parts(self.path.verbs().to_vec(), points)
    }
}

impl Artist for PathArtist {
    fn draw(&self, renderer: &mut dyn Renderer, transform: &DataTransform) {
        if let Err(e) = self.path.validate() {
            log::debug!("PathArtist: skipping invalid path: {}", e);
            return;
        }

        renderer.path(&self.pixel_path(transform), &self.paint);
    }

    fn z(&self) -> f64 {
        self.z
    }
}

#[cfg(test)]
use crate::math::{point, Box2D, Transform};
#[cfg(test)]
use crate::render::RenderError;
#[cfg(test)]
use crate::Scale;

/// Records the paths it is asked to draw.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct Recorder {
    pub paths: Vec<(Path, Paint)>,
}

#[cfg(test)]
impl Renderer for Recorder {
    fn begin(&mut self, _viewport: Box2D) -> Result<(), RenderError> {
        Ok(())
    }
    fn end(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn clip_rect(&mut self, _rect: Box2D) {}
    fn clip_path(&mut self, _path: &Path) {}
    fn path(&mut self, path: &Path, paint: &Paint) {
        self.paths.push((path.clone(), paint.clone()));
    }
}

/// Data in `[0, 10]` on both axes mapped to a 100x100 area, y pointing down.
#[cfg(test)]
pub(crate) fn unit_test_transform() -> DataTransform {
    DataTransform::new(
        Scale::Linear { min: 0.0, max: 10.0 },
        Scale::Linear { min: 0.0, max: 10.0 },
        Transform::scale(100.0, 100.0),
    )
}

#[test]
fn pixel_path() {
    let transform = DataTransform::new(
        Scale::Linear { min: 0.0, max: 10.0 },
        Scale::Linear { min: 0.0, max: 10.0 },
        Transform::scale(50.0, 50.0),
    );

    let mut path = Path::new();
    path.move_to(point(0.0, 0.0))
        .quad_to(point(5.0, 10.0), point(10.0, 0.0))
        .close();

    let artist = PathArtist::new(path.clone(), Paint::default()).with_z(2.0);
    let mapped = artist.pixel_path(&transform);

    assert_eq!(mapped.verbs(), path.verbs());
    assert_eq!(
        mapped.points(),
        &[point(0.0, 0.0), point(25.0, 50.0), point(50.0, 0.0)][..]
    );
    assert_eq!(Artist::z(&artist), 2.0);
}
