//! Errors raised while building or rendering a scene.

use thiserror::Error;

/// Configuration errors. Geometric misses are never errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Field of view {0} rad is outside (0.1, pi - 0.1)")]
    InvalidFov(f32),

    #[error("Image resolution must be positive, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Near plane distance must be positive, got {0}")]
    InvalidNearPlane(f32),

    #[error("Camera direction and up vector do not span a plane")]
    DegenerateCamera,

    #[error("Scene has no camera")]
    MissingCamera,

    #[error("Invalid solid: {0}")]
    InvalidSolid(String),

    #[error("Invalid light: {0}")]
    InvalidLight(String),

    #[error("Unknown material '{0}'")]
    UnknownMaterial(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;
