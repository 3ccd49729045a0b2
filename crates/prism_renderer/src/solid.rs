//! Solids and ray/solid intersection.

use std::sync::Arc;

use prism_math::{Ray, Vec3};

use crate::{Material, Plane, RenderResult, Sphere};

/// Geometric queries every primitive answers.
pub trait Surface: Send + Sync {
    /// Distance `t >= 0` along the ray to the nearest forward intersection.
    ///
    /// A miss (no real roots, parallel ray, surface behind the origin) is
    /// `None`, never an error.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Unit normal at `point`, oriented to face a ray travelling along
    /// `direction`.
    fn normal_at(&self, direction: Vec3, point: Vec3) -> Vec3;
}

/// The closed set of primitive shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
}

impl Surface for Shape {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Plane(plane) => plane.intersect(ray),
        }
    }

    fn normal_at(&self, direction: Vec3, point: Vec3) -> Vec3 {
        match self {
            Shape::Sphere(sphere) => sphere.normal_at(direction, point),
            Shape::Plane(plane) => plane.normal_at(direction, point),
        }
    }
}

/// A shape together with the material it is shaded with.
#[derive(Clone, Debug)]
pub struct Solid {
    shape: Shape,
    material: Arc<Material>,
}

impl Solid {
    pub fn new(shape: Shape, material: Arc<Material>) -> Self {
        Self { shape, material }
    }

    /// Create a sphere solid.
    pub fn sphere(center: Vec3, radius: f32, material: Arc<Material>) -> RenderResult<Self> {
        Ok(Self::new(Shape::Sphere(Sphere::new(center, radius)?), material))
    }

    /// Create a plane solid.
    pub fn plane(point: Vec3, normal: Vec3, material: Arc<Material>) -> RenderResult<Self> {
        Ok(Self::new(Shape::Plane(Plane::new(point, normal)?), material))
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }
}

impl Surface for Solid {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        self.shape.intersect(ray)
    }

    fn normal_at(&self, direction: Vec3, point: Vec3) -> Vec3 {
        self.shape.normal_at(direction, point)
    }
}

/// Record of the nearest ray/solid intersection.
#[derive(Clone, Debug)]
pub struct Hit<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal at the intersection (faces the ray)
    pub normal: Vec3,
    /// Index of the solid in scan order
    pub index: usize,
    /// The solid that was hit
    pub solid: &'a Solid,
}

impl<'a> Hit<'a> {
    pub fn material(&self) -> &'a Material {
        &self.solid.material
    }
}

/// Find the nearest intersection by scanning every solid in order.
///
/// Only a strictly smaller `t` replaces the current best, so the first solid
/// wins ties. The ray direction is normalized first to keep `t` comparable
/// across primitives.
pub fn closest_hit<'a>(solids: &'a [Solid], ray: &Ray) -> Option<Hit<'a>> {
    let ray = ray.normalized();
    let mut closest: Option<(usize, f32)> = None;

    for (index, solid) in solids.iter().enumerate() {
        if let Some(t) = solid.intersect(&ray) {
            if closest.map_or(true, |(_, best)| t < best) {
                closest = Some((index, t));
            }
        }
    }

    closest.map(|(index, t)| {
        let solid = &solids[index];
        let point = ray.at(t);
        Hit {
            t,
            point,
            normal: solid.normal_at(ray.direction(), point),
            index,
            solid,
        }
    })
}
