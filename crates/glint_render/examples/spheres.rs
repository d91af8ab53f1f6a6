//! Renders a stack of shaded spheres to a PNG file.
//!
//! Run with `RUST_LOG=info cargo run --example spheres`.

use anyhow::Result;
use glint_render::{Camera, Color, Scene, Surface, Vec3};

fn main() -> Result<()> {
    env_logger::init();

    let mut scene = Scene::new(Color::ZERO);

    scene.add_light_named("ambient", Vec3::ZERO, Color::new(1.0, 1.0, 0.981));
    scene.add_light_named("ambient", Vec3::ZERO, Color::new(0.9, 0.9, 0.9));
    scene.add_light_named("ambient", Vec3::ZERO, Color::new(0.745, 0.859, 0.224));
    scene.add_light_named(
        "directional",
        Vec3::new(-1.0, -1.0, -1.0),
        Color::new(0.6, 0.6, 0.6),
    );

    scene.set_surface(Surface::new(
        Color::new(0.2, 0.8, 0.2),
        0.5,
        0.9,
        0.4,
        10.0,
        0.0,
        0.0,
        1.0,
    ));
    scene.add_sphere(Vec3::new(-0.4, 0.375, -0.4), 0.375);

    scene.set_surface(Surface::new(
        Color::new(0.7, 0.3, 0.2),
        0.5,
        0.9,
        0.4,
        6.0,
        0.0,
        0.0,
        1.0,
    ));
    scene.add_sphere(Vec3::new(-0.6, 1.05, -0.6), 0.3);

    scene.set_surface(Surface::new(
        Color::new(0.2, 0.3, 0.8),
        0.5,
        0.9,
        0.4,
        10.0,
        0.0,
        0.0,
        1.0,
    ));
    scene.add_sphere(Vec3::new(-0.8, 1.575, -0.8), 0.125);

    scene.set_surface(Surface::new(
        Color::new(0.5, 0.5, 0.8),
        0.5,
        0.9,
        0.4,
        10.0,
        0.0,
        0.0,
        1.0,
    ));
    scene.add_sphere(Vec3::new(-1.2, 2.575, -0.8), 0.1);

    let camera = Camera::new(
        Vec3::new(1.5, 10.5, -1.5),
        Vec3::new(-0.5, 0.0, -0.5),
        Vec3::new(0.0, 1.0, 0.0),
        30.0,
        600,
        600,
    );

    let start = std::time::Instant::now();
    let image = glint_render::render(&camera, &scene);
    log::info!(
        "rendered {}x{} in {:?}",
        image.width,
        image.height,
        start.elapsed()
    );

    let filename = "rendered_image.png";
    image.save_png(filename)?;
    log::info!("saved to {filename}");

    Ok(())
}
