//! Scene container and the builder surface consumed by the external
//! scene-description layer.

use std::sync::Arc;

use glint_math::Vec3;

use crate::{Color, Light, Primitive, Sphere, Surface};

/// The renderable scene: primitives, lights and a background color.
///
/// Built once during setup and then treated as an immutable snapshot for
/// the duration of a render; primitives and lights are never mutated by
/// tracing, so a `&Scene` can be shared freely.
pub struct Scene {
    objects: Vec<Box<dyn Primitive>>,
    lights: Vec<Light>,
    pub background: Color,
    /// Surface attached to primitives added after the last `set_surface`
    current_surface: Arc<Surface>,
}

impl Scene {
    pub fn new(background: Color) -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
            background,
            current_surface: Arc::new(Surface::default()),
        }
    }

    /// Set the surface applied to primitives added from now on.
    pub fn set_surface(&mut self, surface: Surface) {
        self.current_surface = Arc::new(surface);
    }

    /// Add a sphere carrying the current surface.
    pub fn add_sphere(&mut self, center: Vec3, radius: f32) {
        self.objects.push(Box::new(Sphere::new(
            center,
            radius,
            self.current_surface.clone(),
        )));
    }

    pub fn add_object(&mut self, object: Box<dyn Primitive>) {
        self.objects.push(object);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// String-keyed light entry point for the external scene layer.
    ///
    /// An unrecognized kind is reported and dropped; the scene stays
    /// renderable.
    pub fn add_light_named(&mut self, kind: &str, vector: Vec3, intensity: Color) {
        if let Some(light) = Light::from_kind(kind, vector, intensity) {
            self.lights.push(light);
        }
    }

    pub fn objects(&self) -> &[Box<dyn Primitive>] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Color::ZERO)
    }
}
