//! Pixel rendering and the output image buffer.

use std::path::Path;
use std::time::Instant;

use crate::{primitive, Camera, Color, Scene};

/// Errors produced while persisting a rendered image.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Compute the color of pixel (i, j).
///
/// Casts the primary ray for the pixel, finds the nearest hit and shades
/// it; a ray that escapes the scene yields the background color.
pub fn render_pixel(camera: &Camera, scene: &Scene, i: u32, j: u32) -> Color {
    let ray = camera.primary_ray(i, j);

    match primitive::trace(&ray, scene.objects()) {
        Some(hit) => hit.object.shade(
            &ray,
            hit.t,
            scene.lights(),
            scene.objects(),
            scene.background,
            0,
        ),
        None => scene.background,
    }
}

/// Render the whole frame in row-major order.
///
/// Pixel computations are independent of each other; the scene is only
/// read, never written, for the duration of the render.
pub fn render(camera: &Camera, scene: &Scene) -> ImageBuffer {
    let start = Instant::now();
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    for j in 0..camera.image_height {
        for i in 0..camera.image_width {
            image.set(i, j, render_pixel(camera, scene, i, j));
        }
    }

    log::debug!(
        "rendered {}x{} in {:?}",
        camera.image_width,
        camera.image_height,
        start.elapsed()
    );
    image
}

/// Convert a color to 8-bit RGBA, clamping each channel to [0, 1].
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let clamped = color.clamp(Color::ZERO, Color::ONE);
    let r = (clamped.x * 255.0).round() as u8;
    let g = (clamped.y * 255.0).round() as u8;
    let b = (clamped.z * 255.0).round() as u8;
    [r, g, b, 255]
}

/// Pixel buffer filled by [`render`] and owned by the presentation layer.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    /// Encode the buffer as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let mut img = image::RgbaImage::new(self.width, self.height);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = image::Rgba(color_to_rgba(self.get(x, y)));
        }
        img.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Light, Surface, Vec3};

    #[test]
    fn test_color_to_rgba_clamps() {
        assert_eq!(color_to_rgba(Color::new(2.0, -1.0, 0.5)), [255, 0, 128, 255]);
        assert_eq!(color_to_rgba(Color::ZERO), [0, 0, 0, 255]);
        assert_eq!(color_to_rgba(Color::ONE), [255, 255, 255, 255]);
    }

    #[test]
    fn test_image_buffer_get_set() {
        let mut image = ImageBuffer::new(4, 3);
        assert_eq!(image.get(2, 1), Color::ZERO);

        image.set(2, 1, Color::new(0.5, 0.25, 1.0));
        assert_eq!(image.get(2, 1), Color::new(0.5, 0.25, 1.0));
        assert_eq!(image.get(1, 2), Color::ZERO);

        assert_eq!(image.to_rgba().len(), 4 * 3 * 4);
    }

    #[test]
    fn test_escaped_ray_yields_background() {
        let scene = Scene::new(Color::new(0.1, 0.2, 0.3));
        let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y, 60.0, 8, 8);

        assert_eq!(render_pixel(&camera, &scene, 4, 4), scene.background);
    }

    #[test]
    fn test_single_sphere_silhouette() {
        // A diffuse red-biased sphere under a single ambient light; pixels
        // inside the silhouette differ from the background, every other
        // pixel is exactly the background
        let background = Color::new(0.1, 0.2, 0.3);
        let mut scene = Scene::new(background);
        scene.set_surface(Surface::matte(Color::new(0.9, 0.2, 0.2), 0.5, 0.9));
        scene.add_sphere(Vec3::new(0.0, 0.0, -0.4), 0.375);
        scene.add_light(Light::ambient(Color::splat(0.6)));

        let camera = Camera::new(
            Vec3::new(1.5, 10.5, -1.5),
            Vec3::new(-0.5, 0.0, -0.5),
            Vec3::Y,
            30.0,
            64,
            64,
        );
        let image = render(&camera, &scene);

        let covered = image
            .pixels
            .iter()
            .filter(|&&color| color != background)
            .count();
        assert!(covered > 0, "sphere silhouette not visible");
        assert!(
            covered < (64 * 64) / 4,
            "sphere should cover a small part of the frame"
        );

        // The silhouette sits near the image center; the corners miss
        for (x, y) in [(0, 0), (63, 0), (0, 63), (63, 63)] {
            assert_eq!(image.get(x, y), background);
        }

        // Ambient-only shading of the covered pixels is uniform:
        // ka * material * intensity
        let expected = 0.5 * Color::new(0.9, 0.2, 0.2) * 0.6;
        for &color in image.pixels.iter().filter(|&&c| c != background) {
            assert!((color - expected).length() < 1e-4);
        }
    }

    #[test]
    fn test_render_matches_render_pixel() {
        let mut scene = Scene::new(Color::ZERO);
        scene.add_sphere(Vec3::new(0.0, 0.0, -3.0), 1.0);
        scene.add_light(Light::ambient(Color::splat(0.4)));

        let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y, 60.0, 16, 16);
        let image = render(&camera, &scene);

        for j in 0..16 {
            for i in 0..16 {
                assert_eq!(image.get(i, j), render_pixel(&camera, &scene, i, j));
            }
        }
    }
}
