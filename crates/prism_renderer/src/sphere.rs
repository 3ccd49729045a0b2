//! Sphere primitive.

use crate::{solid::Surface, RenderError, RenderResult};
use prism_math::{Ray, Vec3};

/// A sphere given by its center and radius.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive.
    pub fn new(center: Vec3, radius: f32) -> RenderResult<Self> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(RenderError::InvalidSolid(format!(
                "sphere radius must be positive, got {radius}"
            )));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Surface for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let direction = ray.direction().try_normalize()?;
        let oc = ray.origin() - self.center;

        // |d| = 1, so the quadratic's leading coefficient is 1
        let b = 2.0 * direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;
        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b + sqrtd) / 2.0;
        let t2 = (-b - sqrtd) / 2.0;

        match (t1 < 0.0, t2 < 0.0) {
            // Sphere lies behind the ray origin
            (true, true) => None,
            (true, false) => Some(t2),
            // Origin inside the sphere
            (false, true) => Some(t1),
            (false, false) => Some(t1.min(t2)),
        }
    }

    fn normal_at(&self, direction: Vec3, point: Vec3) -> Vec3 {
        let cp = self.center - point;
        if cp.dot(direction) > 0.0 {
            -cp.normalize()
        } else {
            cp.normalize()
        }
    }
}
