//! Surface material description.

use glint_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Reflectance description of a primitive's surface.
///
/// Immutable once constructed; primitives share surfaces through `Arc`
/// since shading only ever reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    /// Intrinsic color (RGB, 0-1)
    pub color: Color,
    /// Ambient reflection coefficient
    pub ambient: f32,
    /// Diffuse reflection coefficient
    pub diffuse: f32,
    /// Specular reflection coefficient
    pub specular: f32,
    /// Phong exponent controlling highlight sharpness
    pub phong: f32,
    /// Fraction of the reflected ray's color contributed per mirror
    /// bounce, in [0, 1]. Zero disables reflection entirely.
    pub reflectance: f32,
    /// Transmitted light fraction. Carried for a refraction pass that is
    /// not implemented; shading ignores it.
    pub transmission: f32,
    /// Refractive index. Ignored, see `transmission`.
    pub ior: f32,
}

impl Surface {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        color: Color,
        ambient: f32,
        diffuse: f32,
        specular: f32,
        phong: f32,
        reflectance: f32,
        transmission: f32,
        ior: f32,
    ) -> Self {
        Self {
            color,
            ambient,
            diffuse,
            specular,
            phong,
            reflectance,
            transmission,
            ior,
        }
    }

    /// A matte surface with no specular highlight or mirror term.
    pub fn matte(color: Color, ambient: f32, diffuse: f32) -> Self {
        Self::new(color, ambient, diffuse, 0.0, 1.0, 0.0, 0.0, 1.0)
    }

    /// A pure mirror: the shaded color is entirely the reflected color.
    pub fn mirror() -> Self {
        Self::new(Color::ONE, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0)
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(Color::new(0.8, 0.2, 0.9), 0.2, 0.4, 0.4, 10.0, 0.0, 0.0, 1.0)
    }
}
