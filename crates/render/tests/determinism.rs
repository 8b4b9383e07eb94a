use quill_render::math::{box2d, point};
use quill_render::path::Path;
use quill_render::stroke::{LineCap, LineJoin};
use quill_render::{Color, Paint, Pixmap, Renderer, SoftwareRenderer, SurfaceOptions};

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn scene(renderer: &mut dyn Renderer) {
    let mut wave = Path::new();
    wave.move_to(point(4.0, 60.0));
    for i in 0..6 {
        let x = 4.0 + i as f64 * 20.0;
        wave.cubic_to(
            point(x + 6.7, 20.0),
            point(x + 13.3, 100.0),
            point(x + 20.0, 60.0),
        );
    }

    let mut triangle = Path::new();
    triangle
        .move_to(point(30.1, 10.3))
        .line_to(point(100.7, 30.2))
        .quad_to(point(60.0, 110.0), point(20.0, 90.9))
        .close();

    renderer.begin(box2d(0.0, 0.0, 128.0, 128.0)).unwrap();

    renderer.path(
        &triangle,
        &Paint::stroke(Color::BLUE, 3.3)
            .with_fill(Color::RED.with_alpha(0.4))
            .with_line_join(LineJoin::Round),
    );

    renderer.save();
    renderer.clip_rect(box2d(10.0, 10.0, 118.5, 100.0));
    renderer.path(
        &wave,
        &Paint::stroke(Color::BLACK.with_alpha(0.7), 2.5)
            .with_line_cap(LineCap::Round)
            .with_dashes(vec![7.0, 3.0, 1.0, 3.0]),
    );
    renderer.restore();

    renderer.end().unwrap();
}

fn render() -> Pixmap {
    let mut renderer = SoftwareRenderer::new(&SurfaceOptions::new(128, 128)).unwrap();
    scene(&mut renderer);
    renderer.into_pixmap()
}

fn hash(pixmap: &Pixmap) -> u64 {
    let mut hasher = DefaultHasher::new();
    pixmap.data().hash(&mut hasher);
    hasher.finish()
}

#[test]
fn rendering_twice_produces_the_same_pixels() {
    let a = render();
    let b = render();

    assert_eq!(hash(&a), hash(&b));
    assert_eq!(a, b);
}

#[test]
fn scene_draws_something() {
    let pixmap = render();
    let white = [255, 255, 255, 255];

    let mut drawn = 0;
    for pixel in pixmap.data().chunks_exact(4) {
        if pixel != white {
            drawn += 1;
        }
    }

    assert!(drawn > 500, "only {} pixels were drawn", drawn);
    // Away from every shape.
    assert_eq!(pixmap.pixel(120, 120), Some(white));
    assert_eq!(pixmap.pixel(1, 1), Some(white));
}

#[test]
fn clip_keeps_the_stroke_inside() {
    let pixmap = render();
    let white = [255, 255, 255, 255];

    // The wave passes through x < 10 but the clip rectangle starts at 10.
    for y in 0..128 {
        for x in 0..10 {
            assert_eq!(pixmap.pixel(x, y), Some(white), "pixel {} {}", x, y);
        }
    }
}

#[test]
fn unaligned_translation_stays_close() {
    // Small sub-quantum jitter on the inputs leaves the output unchanged.
    let mut a = SoftwareRenderer::new(&SurfaceOptions::new(32, 32)).unwrap();
    let mut b = SoftwareRenderer::new(&SurfaceOptions::new(32, 32)).unwrap();

    let mut p1 = Path::new();
    p1.move_to(point(3.0, 4.0)).line_to(point(28.0, 27.0));
    let mut p2 = Path::new();
    p2.move_to(point(3.000_000_1, 4.0)).line_to(point(28.0, 26.999_999_9));

    let paint = Paint::stroke(Color::BLACK, 3.0);
    a.path(&p1, &paint);
    b.path(&p2, &paint);

    assert_eq!(a.pixmap(), b.pixmap());
}
