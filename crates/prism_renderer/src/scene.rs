//! Renderable scene: solids, lights, shared materials and the camera.

use std::sync::Arc;

use prism_core::{SceneDescription, SolidDescription};
use prism_math::{Ray, Vec3};

use crate::solid::{closest_hit, Hit};
use crate::{Camera, CameraSettings, Light, Material, RenderError, RenderResult, Solid};

/// Everything the renderer reads during a render pass.
///
/// Built once, then passed by shared reference; nothing mutates it while
/// rendering.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    solids: Vec<Solid>,
    lights: Vec<Light>,
    materials: Vec<Arc<Material>>,
    camera: Option<Camera>,
}

impl Scene {
    /// Create an empty scene without a camera.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a material and get the shared handle solids should hold.
    pub fn add_material(&mut self, material: Material) -> Arc<Material> {
        let material = Arc::new(material);
        self.materials.push(Arc::clone(&material));
        material
    }

    /// Add a solid. Scan order is insertion order.
    pub fn add_solid(&mut self, solid: Solid) {
        self.solids.push(solid);
    }

    /// Add a light. Lights contribute in insertion order.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = Some(camera);
    }

    pub fn solids(&self) -> &[Solid] {
        &self.solids
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn materials(&self) -> &[Arc<Material>] {
        &self.materials
    }

    /// Look up a registered material by name (first match).
    pub fn material(&self, name: &str) -> Option<&Arc<Material>> {
        self.materials.iter().find(|m| m.name == name)
    }

    /// The camera, or a configuration error if none was set.
    pub fn camera(&self) -> RenderResult<&Camera> {
        self.camera.as_ref().ok_or(RenderError::MissingCamera)
    }

    /// Nearest intersection of `ray` with the scene's solids.
    pub fn closest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        closest_hit(&self.solids, ray)
    }

    /// Build a scene from a description, rendering at `width` x `height`.
    ///
    /// Material names are resolved against the description's material list;
    /// an unknown name is an error, as is a negative light intensity. When two
    /// materials share a name, solids get the first one.
    pub fn from_description(
        desc: &SceneDescription,
        width: u32,
        height: u32,
    ) -> RenderResult<Self> {
        let mut scene = Scene::new();

        for material in &desc.materials {
            if scene.material(&material.name).is_some() {
                log::warn!("Duplicate material '{}', keeping the first definition", material.name);
            }
            scene.add_material(Material::from(material));
        }

        for solid in &desc.solids {
            let material = scene
                .material(solid.material())
                .cloned()
                .ok_or_else(|| RenderError::UnknownMaterial(solid.material().to_string()))?;

            let solid = match *solid {
                SolidDescription::Sphere { center, radius, .. } => {
                    Solid::sphere(Vec3::from_array(center), radius, material)?
                }
                SolidDescription::Plane { point, normal, .. } => {
                    Solid::plane(Vec3::from_array(point), Vec3::from_array(normal), material)?
                }
            };
            scene.add_solid(solid);
        }

        for light in &desc.lights {
            let light = Light::from(light);
            light.validate()?;
            scene.add_light(light);
        }

        match &desc.camera {
            Some(camera) => {
                scene.set_camera(CameraSettings::from_description(camera, width, height).build()?)
            }
            None => log::warn!("Scene description has no camera"),
        }

        log::info!(
            "Built scene: {} materials, {} solids, {} lights",
            scene.materials.len(),
            scene.solids.len(),
            scene.lights.len()
        );
        Ok(scene)
    }
}
