//! Prism Renderer - CPU ray casting
//!
//! A single-bounce ray caster for analytic solids (spheres and planes) lit by
//! point and ambient lights with a local diffuse + specular model.

mod error;
mod material;
mod light;
mod solid;
mod sphere;
mod plane;
mod camera;
mod scene;
pub mod brdf;
mod renderer;

pub use error::{RenderError, RenderResult};
pub use material::{Color, Material};
pub use light::{AmbientLight, Light, PointLight};
pub use solid::{closest_hit, Hit, Shape, Solid, Surface};
pub use sphere::Sphere;
pub use plane::Plane;
pub use camera::{Camera, CameraSettings};
pub use scene::Scene;
pub use renderer::{pixel_to_ndc, ray_color, render, render_pixel, shade, BACKGROUND};

/// Re-export the math and image types used in the public API
pub use prism_core::FloatImage;
pub use prism_math::{Ray, Vec3};
