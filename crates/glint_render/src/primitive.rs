//! Primitive trait and nearest-hit search.

use glint_math::Ray;

use crate::{Color, Light};

/// Trait for geometry that can be ray-traced.
pub trait Primitive: Send + Sync {
    /// Test the ray against this primitive.
    ///
    /// `closest_t` is the nearest hit distance found so far in the current
    /// search; a candidate at a greater distance must be rejected, as must
    /// one behind the ray origin. Returns the hit distance on acceptance.
    fn intersect(&self, ray: &Ray, closest_t: f32) -> Option<f32>;

    /// Shade the hit at parameter `t` along `ray`.
    ///
    /// `objects` is the full scene geometry, needed for shadow and
    /// reflection rays. `depth` counts reflection bounces taken so far.
    fn shade(
        &self,
        ray: &Ray,
        t: f32,
        lights: &[Light],
        objects: &[Box<dyn Primitive>],
        background: Color,
        depth: u32,
    ) -> Color;
}

/// The nearest intersection found by [`trace`].
#[derive(Clone, Copy)]
pub struct Hit<'a> {
    /// Distance from the ray origin to the hit point
    pub t: f32,
    /// The primitive that was hit
    pub object: &'a dyn Primitive,
}

/// Find the nearest intersection of `ray` with `objects`.
///
/// Linear search in collection order; each primitive is offered the best
/// distance so far, so equally close hits go to the first object visited.
/// "No hit" is the normal `None` outcome, not an error.
pub fn trace<'a>(ray: &Ray, objects: &'a [Box<dyn Primitive>]) -> Option<Hit<'a>> {
    let mut nearest: Option<Hit<'a>> = None;

    for object in objects {
        let closest_t = nearest.map_or(f32::INFINITY, |hit| hit.t);
        if let Some(t) = object.intersect(ray, closest_t) {
            nearest = Some(Hit {
                t,
                object: object.as_ref(),
            });
        }
    }

    nearest
}
