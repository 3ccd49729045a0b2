//! Infinite plane primitive.

use crate::{solid::Surface, RenderError, RenderResult};
use prism_math::{Ray, Vec3};

/// Denominators below this magnitude count as a ray parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-8;

/// An infinite plane through `point` with unit `normal`.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
}

impl Plane {
    /// Create a new plane. The normal is normalized and must be non-zero.
    pub fn new(point: Vec3, normal: Vec3) -> RenderResult<Self> {
        let normal = normal.try_normalize().ok_or_else(|| {
            RenderError::InvalidSolid(format!("plane normal {normal} cannot be normalized"))
        })?;
        Ok(Self { point, normal })
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Surface for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.direction());
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        (t >= 0.0).then_some(t)
    }

    fn normal_at(&self, direction: Vec3, _point: Vec3) -> Vec3 {
        if self.normal.dot(direction) > 0.0 {
            -self.normal
        } else {
            self.normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 3.0, 0.0)).unwrap()
    }

    #[test]
    fn test_normal_is_normalized() {
        assert!((floor().normal() - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_plane_hit() {
        let plane = floor();
        let ray = Ray::new(Vec3::new(2.0, 4.0, 0.0), Vec3::new(0.0, -1.0, 0.0));

        let t = plane.intersect(&ray).unwrap();
        assert!((t - 5.0).abs() < 1e-6);
        let normal = plane.normal_at(ray.direction(), ray.at(t));
        assert!((normal - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_plane_hit_from_below_flips_normal() {
        let plane = floor();
        let ray = Ray::new(Vec3::new(0.0, -3.0, 0.0), Vec3::Y);

        let t = plane.intersect(&ray).unwrap();
        assert!((t - 2.0).abs() < 1e-6);
        let normal = plane.normal_at(ray.direction(), ray.at(t));
        assert!((normal + Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_parallel_ray_never_hits() {
        let plane = floor();
        let origins = [
            Vec3::new(0.0, 5.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(3.0, -7.0, 2.0),
        ];
        for origin in origins {
            assert!(plane.intersect(&Ray::new(origin, Vec3::X)).is_none());
            assert!(plane.intersect(&Ray::new(origin, Vec3::new(1.0, 0.0, 1.0))).is_none());
        }
    }

    #[test]
    fn test_plane_behind_ray() {
        let plane = floor();
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn test_zero_normal_rejected() {
        assert!(Plane::new(Vec3::ZERO, Vec3::ZERO).is_err());
    }
}
