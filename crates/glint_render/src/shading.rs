//! Recursive Whitted illumination.
//!
//! Combines per-light ambient, diffuse and specular terms (each non-ambient
//! light gated by a shadow ray) with a recursively traced mirror reflection
//! for reflective surfaces.

use glint_math::{Ray, Vec3};

use crate::{primitive, Color, Light, Primitive, Surface};

/// Offset applied along shadow and reflection ray directions to step off
/// the originating surface and avoid self-intersection.
const EPSILON: f32 = 1e-3;

/// Reflection recursion bound. An exhausted bounce contributes the
/// background color.
pub const MAX_DEPTH: u32 = 5;

/// Compute the color at a surface point.
///
/// `normal` and `view` must be unit length; `view` points back toward the
/// origin of the ray that produced the hit. `depth` counts reflection
/// bounces taken so far.
///
/// A shadowed non-ambient light terminates the light loop: lights after it
/// in the list contribute nothing to this point.
#[allow(clippy::too_many_arguments)]
pub fn shade(
    point: Vec3,
    normal: Vec3,
    view: Vec3,
    surface: &Surface,
    lights: &[Light],
    objects: &[Box<dyn Primitive>],
    background: Color,
    depth: u32,
) -> Color {
    let mut color = Color::ZERO;

    for light in lights {
        // Unit vector from the surface point toward the light
        let (l, intensity) = match light {
            Light::Ambient { intensity } => {
                color += surface.ambient * surface.color * *intensity;
                continue;
            }
            Light::Point {
                position,
                intensity,
            } => ((*position - point).normalize_or_zero(), *intensity),
            Light::Directional {
                direction,
                intensity,
            } => (-*direction, *intensity),
        };

        // Hard shadow test
        let shadow_ray = Ray::new(point + l * EPSILON, l);
        if primitive::trace(&shadow_ray, objects).is_some() {
            break;
        }

        let lambert = normal.dot(l);
        if lambert > 0.0 {
            if surface.diffuse > 0.0 {
                color += surface.diffuse * lambert * surface.color * intensity;
            }
            if surface.specular > 0.0 {
                let reflected = 2.0 * lambert * normal - l;
                let spec = view.dot(reflected);
                if spec > 0.0 {
                    color += surface.specular * spec.powf(surface.phong) * intensity;
                }
            }
        }
    }

    if surface.reflectance > 0.0 {
        color += surface.reflectance
            * reflection(point, normal, view, lights, objects, background, depth);
    }

    color.clamp(Color::ZERO, Color::ONE)
}

/// Trace the mirror reflection of `view` about `normal` and shade what it
/// hits; rays leaving the surface from behind contribute nothing.
#[allow(clippy::too_many_arguments)]
fn reflection(
    point: Vec3,
    normal: Vec3,
    view: Vec3,
    lights: &[Light],
    objects: &[Box<dyn Primitive>],
    background: Color,
    depth: u32,
) -> Color {
    let facing = view.dot(normal);
    if facing <= 0.0 {
        return Color::ZERO;
    }
    if depth >= MAX_DEPTH {
        return background;
    }

    let reflected = 2.0 * facing * normal - view;
    let ray = Ray::new(point + reflected * EPSILON, reflected);

    match primitive::trace(&ray, objects) {
        Some(hit) => hit
            .object
            .shade(&ray, hit.t, lights, objects, background, depth + 1),
        None => background,
    }
}
