//! JSON scene descriptions.
//!
//! A description is a renderer-agnostic snapshot of a scene: plain arrays for
//! vectors and material references by name. `prism_renderer` turns it into a
//! renderable scene.
//!
//! ```json
//! {
//!   "camera": { "center": [0, 0, 5], "direction": [0, 0, -1], "up": [0, 1, 0],
//!               "near_plane_distance": 1.0, "fov": 1.2 },
//!   "materials": [ { "name": "white", "base_color": [1, 1, 1] } ],
//!   "solids": [ { "type": "sphere", "center": [0, 0, 0], "radius": 1.0, "material": "white" } ],
//!   "lights": [ { "type": "point", "position": [0, 0, 5], "intensity": 5.0 } ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scene description: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for scene description operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Perspective camera placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraDescription {
    /// Eye point
    pub center: [f32; 3],
    /// Viewing direction (normalized on load)
    pub direction: [f32; 3],
    /// Up hint (normalized on load)
    pub up: [f32; 3],
    /// Distance from the eye to the near plane
    #[serde(default = "default_near_plane_distance")]
    pub near_plane_distance: f32,
    /// Horizontal field of view in radians
    pub fov: f32,
}

/// Shading coefficients shared by any number of solids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialDescription {
    pub name: String,
    pub base_color: [f32; 3],
    pub specular_color: [f32; 3],
    pub specular_coefficient: f32,
    /// Specular exponent
    pub shininess: f32,
    pub diffuse_coefficient: f32,
    pub ambient_coefficient: f32,
}

impl Default for MaterialDescription {
    fn default() -> Self {
        Self {
            name: String::new(),
            base_color: [1.0, 1.0, 1.0],
            specular_color: [1.0, 1.0, 1.0],
            specular_coefficient: 0.0,
            shininess: 0.0,
            diffuse_coefficient: 1.0,
            ambient_coefficient: 0.1,
        }
    }
}

impl MaterialDescription {
    /// Create a default material with a name and base color.
    pub fn new(name: impl Into<String>, base_color: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            base_color,
            ..Default::default()
        }
    }
}

/// A solid and the name of its material.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SolidDescription {
    Sphere {
        center: [f32; 3],
        radius: f32,
        material: String,
    },
    Plane {
        point: [f32; 3],
        normal: [f32; 3],
        material: String,
    },
}

impl SolidDescription {
    /// Name of the material this solid references.
    pub fn material(&self) -> &str {
        match self {
            SolidDescription::Sphere { material, .. }
            | SolidDescription::Plane { material, .. } => material,
        }
    }
}

/// A light source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LightDescription {
    Point {
        position: [f32; 3],
        #[serde(default = "default_light_color")]
        color: [f32; 3],
        #[serde(default = "default_intensity")]
        intensity: f32,
    },
    Ambient {
        #[serde(default = "default_light_color")]
        color: [f32; 3],
        #[serde(default = "default_intensity")]
        intensity: f32,
    },
}

/// Complete scene description.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub camera: Option<CameraDescription>,
    pub materials: Vec<MaterialDescription>,
    pub solids: Vec<SolidDescription>,
    pub lights: Vec<LightDescription>,
}

impl SceneDescription {
    /// Load a description from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> SceneResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let description = Self::from_json(&content)?;

        log::info!(
            "Loaded scene {:?}: {} materials, {} solids, {} lights",
            path,
            description.materials.len(),
            description.solids.len(),
            description.lights.len()
        );
        Ok(description)
    }

    /// Parse a description from a JSON string.
    pub fn from_json(content: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serialize the description as pretty-printed JSON.
    pub fn to_json(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Built-in scene used when no description file is given.
    ///
    /// Three spheres standing on a floor plane, lit by two point lights and a
    /// dim ambient term.
    pub fn demo() -> Self {
        let floor = MaterialDescription {
            diffuse_coefficient: 0.8,
            ..MaterialDescription::new("floor", [0.6, 0.6, 0.6])
        };
        let red = MaterialDescription {
            specular_coefficient: 0.6,
            shininess: 40.0,
            ..MaterialDescription::new("red", [0.9, 0.15, 0.1])
        };
        let blue = MaterialDescription {
            specular_coefficient: 0.3,
            shininess: 10.0,
            ..MaterialDescription::new("blue", [0.1, 0.3, 0.9])
        };
        let gold = MaterialDescription {
            specular_color: [1.0, 0.85, 0.4],
            specular_coefficient: 0.9,
            shininess: 80.0,
            diffuse_coefficient: 0.6,
            ..MaterialDescription::new("gold", [0.85, 0.65, 0.2])
        };

        Self {
            camera: Some(CameraDescription {
                center: [0.0, 1.0, 6.0],
                direction: [0.0, -0.15, -1.0],
                up: [0.0, 1.0, 0.0],
                near_plane_distance: 1.0,
                fov: 1.1,
            }),
            materials: vec![floor, red, blue, gold],
            solids: vec![
                SolidDescription::Plane {
                    point: [0.0, -1.0, 0.0],
                    normal: [0.0, 1.0, 0.0],
                    material: "floor".into(),
                },
                SolidDescription::Sphere {
                    center: [0.0, 0.0, 0.0],
                    radius: 1.0,
                    material: "red".into(),
                },
                SolidDescription::Sphere {
                    center: [-2.2, -0.3, -1.0],
                    radius: 0.7,
                    material: "blue".into(),
                },
                SolidDescription::Sphere {
                    center: [2.0, -0.4, 0.5],
                    radius: 0.6,
                    material: "gold".into(),
                },
            ],
            lights: vec![
                LightDescription::Point {
                    position: [-4.0, 5.0, 5.0],
                    color: [1.0, 0.95, 0.9],
                    intensity: 6.0,
                },
                LightDescription::Point {
                    position: [4.0, 3.0, 2.0],
                    color: [0.6, 0.7, 1.0],
                    intensity: 3.0,
                },
                LightDescription::Ambient {
                    color: [1.0, 1.0, 1.0],
                    intensity: 1.0,
                },
            ],
        }
    }
}

fn default_near_plane_distance() -> f32 {
    1.0
}

fn default_light_color() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn default_intensity() -> f32 {
    1.0
}
