use crate::Vec3;

/// A half-line in 3D space starting at `origin` and travelling along `direction`.
///
/// Rays produced by the camera carry a unit-length direction, but intersection
/// routines do not rely on it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Same ray with a unit-length direction.
    ///
    /// A zero or non-finite direction stays zero, so intersection tests see
    /// a ray that hits nothing instead of NaN.
    pub fn normalized(&self) -> Self {
        Self::new(self.origin, self.direction.normalize_or_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let direction = Vec3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin(), origin);
        assert_eq!(ray.direction(), direction);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_normalized() {
        let ray = Ray::new(Vec3::ONE, Vec3::new(0.0, 0.0, 4.0)).normalized();

        assert_eq!(ray.origin, Vec3::ONE);
        assert_eq!(ray.direction, Vec3::Z);
        assert_eq!(ray.at(2.0), Vec3::new(1.0, 1.0, 3.0));
    }

    #[test]
    fn test_zero_direction_stays_zero() {
        let ray = Ray::new(Vec3::ONE, Vec3::ZERO).normalized();
        assert_eq!(ray.direction, Vec3::ZERO);
    }
}
