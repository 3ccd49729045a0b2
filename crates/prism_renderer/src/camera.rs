//! Perspective camera for ray generation.

use std::f32::consts::PI;

use prism_core::CameraDescription;
use prism_math::{Ray, Vec3};

use crate::{RenderError, RenderResult};

/// Margin kept between the field of view and both 0 and pi radians.
const FOV_MARGIN: f32 = 0.1;

/// Camera placement and lens, validated by [`CameraSettings::build`].
#[derive(Clone, Debug, PartialEq)]
pub struct CameraSettings {
    pub image_width: u32,
    pub image_height: u32,
    center: Vec3,
    direction: Vec3,
    up: Vec3,
    near_plane_distance: f32,
    fov: f32, // Horizontal field of view in radians
}

impl CameraSettings {
    /// Create settings looking down -Z from the origin with a 90 degree field of view.
    pub fn new() -> Self {
        Self {
            image_width: 800,
            image_height: 450,
            center: Vec3::ZERO,
            direction: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::Y,
            near_plane_distance: 1.0,
            fov: PI / 2.0,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set camera position and orientation.
    pub fn with_position(mut self, center: Vec3, direction: Vec3, up: Vec3) -> Self {
        self.center = center;
        self.direction = direction;
        self.up = up;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, fov: f32, near_plane_distance: f32) -> Self {
        self.fov = fov;
        self.near_plane_distance = near_plane_distance;
        self
    }

    /// Settings from a scene description and the output resolution.
    pub fn from_description(desc: &CameraDescription, width: u32, height: u32) -> Self {
        Self::new()
            .with_resolution(width, height)
            .with_position(
                Vec3::from_array(desc.center),
                Vec3::from_array(desc.direction),
                Vec3::from_array(desc.up),
            )
            .with_lens(desc.fov, desc.near_plane_distance)
    }

    /// Validate the settings and precompute the near-plane basis.
    pub fn build(&self) -> RenderResult<Camera> {
        Camera::new(self)
    }
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// A pinhole camera projecting through a near plane.
///
/// Normalized device coordinates run from (-1, -1) at the bottom-left corner
/// of the near plane to (1, 1) at the top-right.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    origin: Vec3,
    direction: Vec3,
    up: Vec3,
    near_plane_center: Vec3,
    fov: f32,

    // Half extents of the near plane, cached at construction
    dx: Vec3,
    dy: Vec3,
}

impl Camera {
    /// Build a camera, rejecting degenerate configurations.
    ///
    /// The field of view must lie strictly inside (0.1, pi - 0.1); values
    /// outside are an error, never clamped.
    pub fn new(settings: &CameraSettings) -> RenderResult<Self> {
        let fov = settings.fov;
        if !(fov > FOV_MARGIN && fov < PI - FOV_MARGIN) {
            return Err(RenderError::InvalidFov(fov));
        }
        if settings.image_width == 0 || settings.image_height == 0 {
            return Err(RenderError::InvalidResolution {
                width: settings.image_width,
                height: settings.image_height,
            });
        }
        let near = settings.near_plane_distance;
        if near.is_nan() || near <= 0.0 {
            return Err(RenderError::InvalidNearPlane(near));
        }

        let direction = settings
            .direction
            .try_normalize()
            .ok_or(RenderError::DegenerateCamera)?;
        let up = settings.up.try_normalize().ok_or(RenderError::DegenerateCamera)?;

        let right = direction
            .cross(up)
            .try_normalize()
            .ok_or(RenderError::DegenerateCamera)?;
        let top = right.cross(direction).normalize();

        let half_width = near * (fov / 2.0).tan();
        let half_height = half_width * settings.image_height as f32 / settings.image_width as f32;

        let camera = Self {
            image_width: settings.image_width,
            image_height: settings.image_height,
            origin: settings.center,
            direction,
            up,
            near_plane_center: settings.center + direction * near,
            fov,
            dx: right * half_width,
            dy: top * half_height,
        };
        log::debug!(
            "Camera at {} looking along {}, near plane half extents {:.4} x {:.4}",
            camera.origin,
            camera.direction,
            half_width,
            half_height
        );
        Ok(camera)
    }

    /// Ray through the near-plane point at normalized coordinates (x, y).
    ///
    /// The ray starts on the near plane; its unit direction points away from
    /// the eye point through that spot.
    pub fn ray(&self, x: f32, y: f32) -> Ray {
        let on_plane = self.near_plane_center + self.dx * x + self.dy * y;
        Ray::new(on_plane, (on_plane - self.origin).normalize())
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn near_plane_center(&self) -> Vec3 {
        self.near_plane_center
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Horizontal half extent of the near plane.
    pub fn dx(&self) -> Vec3 {
        self.dx
    }

    /// Vertical half extent of the near plane.
    pub fn dy(&self) -> Vec3 {
        self.dy
    }
}
