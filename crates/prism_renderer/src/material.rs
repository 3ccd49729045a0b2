//! Surface shading coefficients.

use prism_core::MaterialDescription;
use prism_math::Vec3;

/// Color type alias (linear RGB, unbounded)
pub type Color = Vec3;

/// Coefficients of the local reflectance model.
///
/// Solids share materials through `Arc<Material>`; a material is never copied
/// per solid.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Material name, used to resolve references in scene descriptions
    pub name: String,
    /// Diffuse and ambient albedo
    pub base_color: Color,
    /// Tint of the specular highlight
    pub specular_color: Color,
    /// Weight of the specular term
    pub specular_coefficient: f32,
    /// Specular exponent
    pub shininess: f32,
    /// Weight of the diffuse term
    pub diffuse_coefficient: f32,
    /// Weight of the ambient term
    pub ambient_coefficient: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            base_color: Color::ONE,
            specular_color: Color::ONE,
            specular_coefficient: 0.0,
            shininess: 0.0,
            diffuse_coefficient: 1.0,
            ambient_coefficient: 0.1,
        }
    }
}

impl Material {
    /// Create a default material with just a name and base color.
    pub fn new(name: impl Into<String>, base_color: Color) -> Self {
        Self {
            name: name.into(),
            base_color,
            ..Default::default()
        }
    }

    /// Set the specular color, weight and exponent.
    pub fn with_specular(mut self, color: Color, coefficient: f32, shininess: f32) -> Self {
        self.specular_color = color;
        self.specular_coefficient = coefficient;
        self.shininess = shininess;
        self
    }

    /// Set the diffuse weight.
    pub fn with_diffuse(mut self, coefficient: f32) -> Self {
        self.diffuse_coefficient = coefficient;
        self
    }

    /// Set the ambient weight.
    pub fn with_ambient(mut self, coefficient: f32) -> Self {
        self.ambient_coefficient = coefficient;
        self
    }
}

impl From<&MaterialDescription> for Material {
    fn from(desc: &MaterialDescription) -> Self {
        Self {
            name: desc.name.clone(),
            base_color: Color::from_array(desc.base_color),
            specular_color: Color::from_array(desc.specular_color),
            specular_coefficient: desc.specular_coefficient,
            shininess: desc.shininess,
            diffuse_coefficient: desc.diffuse_coefficient,
            ambient_coefficient: desc.ambient_coefficient,
        }
    }
}
