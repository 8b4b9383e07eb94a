use crate::math::Box2D;
use crate::render::{RenderError, Renderer};
use crate::{Artist, DataTransform};

/// Returns the artists in drawing order.
///
/// The sort is stable: artists with the same z keep their insertion order. NaN z
/// values are ordered after every other value.
pub fn sorted_by_z<'l>(artists: &'l [Box<dyn Artist>]) -> Vec<&'l dyn Artist> {
    let mut sorted: Vec<&dyn Artist> = artists.iter().map(|a| &**a).collect();
    sorted.sort_by(|a, b| a.z().total_cmp(&b.z()));

    sorted
}

/// A group of artists sharing a clip rectangle and a data transform.
pub struct Layer {
    /// Drawing is restricted to this rectangle, in pixels.
    pub clip: Box2D,
    pub transform: DataTransform,
    artists: Vec<Box<dyn Artist>>,
}

impl Layer {
    pub fn new(clip: Box2D, transform: DataTransform) -> Self {
        Layer {
            clip,
            transform,
            artists: Vec::new(),
        }
    }

    pub fn add<A: Artist + 'static>(&mut self, artist: A) {
        self.artists.push(Box::new(artist));
    }

    pub fn artists(&self) -> &[Box<dyn Artist>] {
        &self.artists
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// The artists of this layer in drawing order.
    pub fn sorted_by_z(&self) -> Vec<&dyn Artist> {
        sorted_by_z(&self.artists)
    }

    /// Draws the artists in z order, clipped to the layer.
    ///
    /// The renderer's state is saved before and restored after.
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.save();
        renderer.clip_rect(self.clip);
        for artist in self.sorted_by_z() {
            artist.draw(renderer, &self.transform);
        }
        renderer.restore();
    }
}

/// A list of layers drawn over a viewport.
pub struct Scene {
    pub viewport: Box2D,
    layers: Vec<Layer>,
}

impl Scene {
    pub fn new(viewport: Box2D) -> Self {
        Scene {
            viewport,
            layers: Vec::new(),
        }
    }

    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    /// Draws the layers in order, within a single drawing session.
    ///
    /// Fails if the renderer is already in a session.
    pub fn render(&self, renderer: &mut dyn Renderer) -> Result<(), RenderError> {
        renderer.begin(self.viewport)?;
        log::trace!("rendering {} layers", self.layers.len());

        for layer in &self.layers {
            layer.draw(renderer);
        }

        renderer.end()
    }
}

#[cfg(test)]
use crate::math::box2d;
#[cfg(test)]
use std::{cell::RefCell, rc::Rc};

#[cfg(test)]
struct Tagged {
    id: u32,
    z: f64,
    log: Rc<RefCell<Vec<u32>>>,
}

#[cfg(test)]
impl Artist for Tagged {
    fn draw(&self, _: &mut dyn Renderer, _: &DataTransform) {
        self.log.borrow_mut().push(self.id);
    }

    fn z(&self) -> f64 {
        self.z
    }
}

#[test]
fn z_order_is_stable() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut layer = Layer::new(box2d(0.0, 0.0, 10.0, 10.0), DataTransform::identity());
    for (id, z) in [(0, 2.0), (1, 0.0), (2, f64::NAN), (3, 1.0), (4, 0.0), (5, -1.0)] {
        layer.add(Tagged { id, z, log: log.clone() });
    }

    let mut renderer = crate::render::NullRenderer::new();
    layer.draw(&mut renderer);
    assert_eq!(*log.borrow(), vec![5, 1, 4, 3, 0, 2]);

    // Sorting doesn't change the layer.
    let z: Vec<f64> = layer.artists().iter().map(|a| a.z()).take(2).collect();
    assert_eq!(z, vec![2.0, 0.0]);
    assert_eq!(renderer.depth(), 0);
}

#[test]
fn empty_scene() {
    let scene = Scene::new(box2d(0.0, 0.0, 10.0, 10.0));
    let mut renderer = crate::render::NullRenderer::new();
    scene.render(&mut renderer).unwrap();
    assert!(!renderer.is_drawing());
}

#[test]
fn render_propagates_session_errors() {
    let scene = Scene::new(box2d(0.0, 0.0, 10.0, 10.0));
    let mut renderer = crate::render::NullRenderer::new();
    renderer.begin(box2d(0.0, 0.0, 10.0, 10.0)).unwrap();
    assert_eq!(scene.render(&mut renderer), Err(RenderError::AlreadyBegun));
    assert!(renderer.is_drawing());
}
