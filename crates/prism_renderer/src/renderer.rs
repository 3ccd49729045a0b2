//! Core ray casting renderer.
//!
//! One primary ray per pixel, nearest hit by linear scan, local shading only:
//! - No shadows, reflections or refraction
//! - No anti-aliasing
//! - Output is raw linear radiance, never clamped or tone mapped

use prism_core::FloatImage;
use prism_math::Ray;

use crate::brdf::{ambient, reflectance};
use crate::solid::Hit;
use crate::{Camera, Color, Light, RenderResult, Scene};

/// Radiance of pixels whose ray hits nothing.
pub const BACKGROUND: Color = Color::ZERO;

/// Map pixel indices to normalized device coordinates.
///
/// Pixel (0, 0) maps to (-1, -1), the bottom-left corner.
#[inline]
pub fn pixel_to_ndc(x: u32, y: u32, width: u32, height: u32) -> (f32, f32) {
    (
        2.0 * x as f32 / width as f32 - 1.0,
        2.0 * y as f32 / height as f32 - 1.0,
    )
}

/// Sum the contribution of every light at a hit.
///
/// Normals face the viewer, so the light and view vectors are flipped to point
/// away from the surface before entering the reflectance model.
pub fn shade(hit: &Hit<'_>, ray: &Ray, lights: &[Light]) -> Color {
    let material = hit.material();
    let view = -ray.direction().normalize();

    lights.iter().fold(Color::ZERO, |color, light| {
        let incoming = light.color() * light.intensity_at(hit.point);
        let response = match light {
            Light::Ambient(_) => ambient(material),
            Light::Point(point) => {
                let to_light = -point.direction_at(hit.point);
                reflectance(hit.normal, to_light, view, material)
            }
        };
        color + incoming * response
    })
}

/// Compute the radiance seen along a ray.
pub fn ray_color(ray: &Ray, scene: &Scene) -> Color {
    match scene.closest_hit(ray) {
        Some(hit) => shade(&hit, ray, scene.lights()),
        None => BACKGROUND,
    }
}

/// Render a single pixel.
pub fn render_pixel(scene: &Scene, camera: &Camera, x: u32, y: u32) -> Color {
    let (u, v) = pixel_to_ndc(x, y, camera.image_width, camera.image_height);
    ray_color(&camera.ray(u, v), scene)
}

/// Render the entire scene to a float image.
///
/// Fails before producing any pixel if the scene has no camera.
pub fn render(scene: &Scene) -> RenderResult<FloatImage> {
    let camera = scene.camera()?;
    let (width, height) = (camera.image_width, camera.image_height);
    log::info!(
        "Rendering {}x{} ({} solids, {} lights)",
        width,
        height,
        scene.solids().len(),
        scene.lights().len()
    );

    let mut image = FloatImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let color = render_pixel(scene, camera, x, y);
            image.put_pixel(x, y, color.to_array());
        }
    }

    Ok(image)
}
