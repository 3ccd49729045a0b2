//! Light sources.
//!
//! `direction_at` follows the light-to-point convention: the returned vector
//! points from the emitter towards the shaded point.

use prism_core::LightDescription;
use prism_math::Vec3;

use crate::{Color, RenderError, RenderResult};

/// An omnidirectional emitter with linear (`1 / distance`) falloff.
#[derive(Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
    pub intensity: f32,
}

impl PointLight {
    pub fn new(position: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }

    /// Unit vector from the light to `p`, zero when `p` is the light's position.
    pub fn direction_at(&self, p: Vec3) -> Vec3 {
        (p - self.position).normalize_or_zero()
    }

    /// Intensity reaching `p`.
    ///
    /// A point at the light's position receives nothing.
    pub fn intensity_at(&self, p: Vec3) -> f32 {
        let distance = p.distance(self.position);
        if distance > 0.0 {
            self.intensity / distance
        } else {
            0.0
        }
    }
}

/// Constant, directionless illumination.
#[derive(Clone, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

impl AmbientLight {
    pub fn new(color: Color, intensity: f32) -> Self {
        Self { color, intensity }
    }

    /// Always zero; ambient light has no direction.
    pub fn direction_at(&self, _p: Vec3) -> Vec3 {
        Vec3::ZERO
    }

    pub fn intensity_at(&self, _p: Vec3) -> f32 {
        self.intensity
    }
}

/// A light source in the scene.
#[derive(Clone, Debug, PartialEq)]
pub enum Light {
    Point(PointLight),
    Ambient(AmbientLight),
}

impl Light {
    /// Create a point light.
    pub fn point(position: Vec3, color: Color, intensity: f32) -> Self {
        Light::Point(PointLight::new(position, color, intensity))
    }

    /// Create an ambient light.
    pub fn ambient(color: Color, intensity: f32) -> Self {
        Light::Ambient(AmbientLight::new(color, intensity))
    }

    pub fn color(&self) -> Color {
        match self {
            Light::Point(light) => light.color,
            Light::Ambient(light) => light.color,
        }
    }

    /// Emitted intensity before falloff.
    pub fn intensity(&self) -> f32 {
        match self {
            Light::Point(light) => light.intensity,
            Light::Ambient(light) => light.intensity,
        }
    }

    /// Reject negative or non-finite intensities.
    pub fn validate(&self) -> RenderResult<()> {
        let intensity = self.intensity();
        if !intensity.is_finite() || intensity < 0.0 {
            return Err(RenderError::InvalidLight(format!(
                "intensity must be finite and non-negative, got {intensity}"
            )));
        }
        Ok(())
    }

    /// Direction from the light towards `p` (zero for ambient light).
    pub fn direction_at(&self, p: Vec3) -> Vec3 {
        match self {
            Light::Point(light) => light.direction_at(p),
            Light::Ambient(light) => light.direction_at(p),
        }
    }

    /// Falloff-adjusted intensity at `p`.
    pub fn intensity_at(&self, p: Vec3) -> f32 {
        match self {
            Light::Point(light) => light.intensity_at(p),
            Light::Ambient(light) => light.intensity_at(p),
        }
    }
}

impl From<&LightDescription> for Light {
    fn from(desc: &LightDescription) -> Self {
        match *desc {
            LightDescription::Point {
                position,
                color,
                intensity,
            } => Light::point(Vec3::from_array(position), Color::from_array(color), intensity),
            LightDescription::Ambient { color, intensity } => {
                Light::ambient(Color::from_array(color), intensity)
            }
        }
    }
}
