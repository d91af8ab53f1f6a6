//! Sphere primitive.

use std::sync::Arc;

use glint_math::{Ray, Vec3};

use crate::{shading, Color, Light, Primitive, Surface};

/// A sphere defined by its center, radius and surface material.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    /// Squared radius, cached for the intersection test
    radius_sq: f32,
    surface: Arc<Surface>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, surface: Arc<Surface>) -> Self {
        Self {
            center,
            radius,
            radius_sq: radius * radius,
            surface,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Primitive for Sphere {
    fn intersect(&self, ray: &Ray, closest_t: f32) -> Option<f32> {
        let disp = self.center - ray.origin;
        let dot = ray.direction.dot(disp);

        // The nearest possible surface point is already beyond the best hit
        if dot - self.radius > closest_t {
            return None;
        }

        let disc = self.radius_sq + dot * dot - disp.length_squared();
        if disc < 0.0 {
            return None;
        }

        // Near root; must lie in front of the origin and beat the best hit
        let t = dot - disc.sqrt();
        if t < 0.0 || t > closest_t {
            return None;
        }

        Some(t)
    }

    fn shade(
        &self,
        ray: &Ray,
        t: f32,
        lights: &[Light],
        objects: &[Box<dyn Primitive>],
        background: Color,
        depth: u32,
    ) -> Color {
        let point = ray.at(t);
        let normal = (point - self.center).normalize_or_zero();
        let view = -ray.direction;

        shading::shade(point, normal, view, &self.surface, lights, objects, background, depth)
    }
}
