//! Light sources.

use glint_math::Vec3;

use crate::Color;

/// A light source in the scene.
///
/// Every light carries an RGB intensity. Directional lights store their
/// direction normalized at construction; ambient lights have neither
/// position nor direction.
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    /// Uniform illumination affecting every surface point equally.
    Ambient { intensity: Color },
    /// Parallel light arriving from a fixed direction, infinitely far away.
    Directional { direction: Vec3, intensity: Color },
    /// Light radiating from a position in the scene.
    Point { position: Vec3, intensity: Color },
}

impl Light {
    pub fn ambient(intensity: Color) -> Self {
        Light::Ambient { intensity }
    }

    /// `direction` is the direction the light travels; it is stored
    /// normalized.
    pub fn directional(direction: Vec3, intensity: Color) -> Self {
        Light::Directional {
            direction: direction.normalize_or_zero(),
            intensity,
        }
    }

    pub fn point(position: Vec3, intensity: Color) -> Self {
        Light::Point { position, intensity }
    }

    /// Build a light from the scene layer's string-keyed description.
    ///
    /// `vector` is the travel direction for `"directional"` and the position
    /// for `"point"`; it is ignored for `"ambient"`. An unrecognized kind is
    /// reported and the entry dropped.
    pub fn from_kind(kind: &str, vector: Vec3, intensity: Color) -> Option<Self> {
        match kind.to_ascii_lowercase().as_str() {
            "ambient" => Some(Self::ambient(intensity)),
            "directional" => Some(Self::directional(vector, intensity)),
            "point" => Some(Self::point(vector, intensity)),
            other => {
                log::warn!("unknown light kind {other:?}, dropping light");
                None
            }
        }
    }

    pub fn intensity(&self) -> Color {
        match self {
            Light::Ambient { intensity }
            | Light::Directional { intensity, .. }
            | Light::Point { intensity, .. } => *intensity,
        }
    }
}
