use quill_scene::math::{box2d, point, Transform};
use quill_scene::path::Path;
use quill_scene::render::{Color, NullRenderer, Paint, Renderer, SoftwareRenderer, SurfaceOptions};
use quill_scene::{
    BarArtist, DataTransform, GridArtist, GridAxis, Layer, LineArtist, Marker, PathArtist, Scale,
    ScatterArtist, Scene,
};

const WHITE: [u8; 4] = [255, 255, 255, 255];

// Data in [0, 10] x [0, 10] mapped to a 100x100 area at (10, 10), y pointing up.
fn plot_transform() -> DataTransform {
    DataTransform::new(
        Scale::Linear { min: 0.0, max: 10.0 },
        Scale::Linear { min: 0.0, max: 10.0 },
        Transform::new(100.0, 0.0, 0.0, -100.0, 10.0, 110.0),
    )
}

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Path {
    let mut path = Path::new();
    path.move_to(point(x0, y0))
        .line_to(point(x1, y0))
        .line_to(point(x1, y1))
        .line_to(point(x0, y1))
        .close();
    path
}

fn build_scene() -> Scene {
    let mut scene = Scene::new(box2d(0.0, 0.0, 120.0, 120.0));

    let mut plot = Layer::new(box2d(10.0, 10.0, 110.0, 110.0), plot_transform());
    // Drawn last despite being added first.
    plot.add(PathArtist::new(rect(0.0, 0.0, 5.0, 5.0), Paint::fill(Color::RED)).with_z(1.0));
    plot.add(PathArtist::new(rect(2.0, 2.0, 8.0, 8.0), Paint::fill(Color::BLUE)));
    // Sticks out of the layer's clip.
    plot.add(PathArtist::new(rect(9.0, 9.0, 12.0, 12.0), Paint::fill(Color::GREEN)));
    scene.add_layer(plot);

    scene
}

#[test]
fn scene_with_null_renderer() {
    let scene = build_scene();
    let mut renderer = NullRenderer::new();
    scene.render(&mut renderer).unwrap();

    assert_eq!(renderer.num_paths(), 3);
    assert_eq!(renderer.depth(), 0);
    assert!(!renderer.is_drawing());

    // The session is over, the scene can be rendered again.
    scene.render(&mut renderer).unwrap();
    assert_eq!(renderer.num_paths(), 6);
}

#[test]
fn scene_with_software_renderer() {
    let scene = build_scene();
    let mut renderer = SoftwareRenderer::new(&SurfaceOptions::new(120, 120)).unwrap();
    scene.render(&mut renderer).unwrap();

    let pixmap = renderer.pixmap().unwrap();

    // Data (1, 1) is pixel (20, 100): only the red square.
    assert_eq!(pixmap.pixel(20, 99), Some([255, 0, 0, 255]));
    // Data (3, 3) is in both squares, red has the higher z.
    assert_eq!(pixmap.pixel(40, 79), Some([255, 0, 0, 255]));
    // Data (7, 7): only blue.
    assert_eq!(pixmap.pixel(70, 39), Some([0, 0, 255, 255]));
    // The green square is cut at the layer's clip.
    assert_eq!(pixmap.pixel(105, 15), Some([0, 255, 0, 255]));
    assert_eq!(pixmap.pixel(112, 5), Some(WHITE));
    assert_eq!(pixmap.pixel(115, 15), Some(WHITE));
}

#[test]
fn log_scale_artist() {
    let transform = DataTransform::new(
        Scale::Linear { min: 0.0, max: 1.0 },
        Scale::Log { min: 1.0, max: 100.0, base: 10.0 },
        Transform::new(100.0, 0.0, 0.0, -100.0, 0.0, 100.0),
    );

    let mut scene = Scene::new(box2d(0.0, 0.0, 100.0, 100.0));
    let mut layer = Layer::new(box2d(0.0, 0.0, 100.0, 100.0), transform);
    // Covers the bottom half of the pixels: 1 to 10 in log space.
    layer.add(PathArtist::new(rect(0.0, 1.0, 1.0, 10.0), Paint::fill(Color::BLACK)));
    scene.add_layer(layer);

    let mut renderer = SoftwareRenderer::new(&SurfaceOptions::new(100, 100)).unwrap();
    scene.render(&mut renderer).unwrap();

    let pixmap = renderer.pixmap().unwrap();
    assert_eq!(pixmap.pixel(50, 75), Some([0, 0, 0, 255]));
    assert_eq!(pixmap.pixel(50, 25), Some(WHITE));
}

fn build_plot() -> Scene {
    let mut scene = Scene::new(box2d(0.0, 0.0, 120.0, 120.0));

    let mut plot = Layer::new(box2d(10.0, 10.0, 110.0, 110.0), plot_transform());
    plot.add(LineArtist::new(vec![point(0.0, 1.0), point(10.0, 1.0)], Color::BLACK, 2.0).with_z(1.0));
    plot.add(BarArtist::new(vec![2.0], vec![6.0], 2.0, Color::BLUE));
    plot.add(ScatterArtist::new(vec![point(8.0, 8.0)], Marker::Square, 3.0, Color::RED));
    plot.add(GridArtist::new(GridAxis::Y, vec![5.0]));
    scene.add_layer(plot);

    scene
}

#[test]
fn plot_artists_with_null_renderer() {
    let mut renderer = NullRenderer::new();
    build_plot().render(&mut renderer).unwrap();
    assert_eq!(renderer.num_paths(), 4);
}

#[test]
fn plot_artists_with_software_renderer() {
    let mut renderer = SoftwareRenderer::new(&SurfaceOptions::new(120, 120)).unwrap();
    build_plot().render(&mut renderer).unwrap();

    let pixmap = renderer.pixmap().unwrap();
    // The bar spans pixels 20..40 horizontally and 50..110 vertically.
    assert_eq!(pixmap.pixel(30, 80), Some([0, 0, 255, 255]));
    // The grid is behind the bar...
    assert_eq!(pixmap.pixel(30, 59), Some([0, 0, 255, 255]));
    // ...but visible elsewhere.
    assert!(pixmap.pixel(70, 59) != Some(WHITE));
    // The line is in front of the bar.
    assert_eq!(pixmap.pixel(30, 99), Some([0, 0, 0, 255]));
    assert_eq!(pixmap.pixel(60, 100), Some([0, 0, 0, 255]));
    // The marker is centered on pixel (90, 30).
    assert_eq!(pixmap.pixel(90, 30), Some([255, 0, 0, 255]));
    assert_eq!(pixmap.pixel(95, 30), Some(WHITE));
}
