//! Camera and per-pixel viewing-ray generation.

use glint_math::{Ray, Vec3};

/// Camera with a precomputed viewing basis.
///
/// The basis {du, dv, vp} is derived once from origin/look-at/up; after
/// that, the direction of the primary ray for pixel (i, j) is the linear
/// combination `du * i + dv * j + vp`.
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    origin: Vec3,
    // Image-plane basis: du steps one pixel right, dv one pixel down,
    // vp points from the origin to the plane's top-left corner
    du: Vec3,
    dv: Vec3,
    vp: Vec3,
}

impl Camera {
    /// Build a camera from its position, the point it looks at, an up
    /// vector, a horizontal field of view in degrees, and the output
    /// resolution in pixels.
    pub fn new(
        origin: Vec3,
        look_at: Vec3,
        up: Vec3,
        fov_degrees: f32,
        width: u32,
        height: u32,
    ) -> Self {
        let look = look_at - origin;
        let du = look.cross(up).normalize_or_zero();
        let dv = look.cross(du).normalize_or_zero();

        let focal_length = width as f32 / (2.0 * (0.5 * fov_degrees).to_radians().tan());
        let vp = look.normalize_or_zero() * focal_length
            - 0.5 * (du * width as f32 + dv * height as f32);

        Self {
            image_width: width,
            image_height: height,
            origin,
            du,
            dv,
            vp,
        }
    }

    /// Generate the primary ray through pixel (i, j).
    ///
    /// The combined direction is unnormalized; Ray construction normalizes.
    pub fn primary_ray(&self, i: u32, j: u32) -> Ray {
        let direction = self.du * i as f32 + self.dv * j as f32 + self.vp;
        Ray::new(self.origin, direction)
    }
}
