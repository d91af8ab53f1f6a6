//! Glint render kernel - recursive Whitted ray tracing.
//!
//! For every pixel a primary ray is cast through the image plane and traced
//! against the scene's primitives. The closest hit is shaded with ambient,
//! diffuse and specular terms per light (each gated by a shadow ray), plus a
//! recursively traced mirror reflection for reflective surfaces.

mod camera;
mod light;
mod primitive;
mod renderer;
mod scene;
mod shading;
mod sphere;
mod surface;

pub use camera::Camera;
pub use light::Light;
pub use primitive::{trace, Hit, Primitive};
pub use renderer::{color_to_rgba, render, render_pixel, ImageBuffer, RenderError};
pub use scene::Scene;
pub use shading::{shade, MAX_DEPTH};
pub use sphere::Sphere;
pub use surface::{Color, Surface};

/// Re-export math types from glint_math
pub use glint_math::{Ray, Vec3};
