//! Prism Core - configuration, scene descriptions and image output.
//!
//! This crate provides:
//!
//! - **Render settings**: the `key: value` configuration file
//! - **Scene descriptions**: JSON documents describing camera, materials,
//!   solids and lights
//! - **Float images**: the HDR pixel buffer and its PFM / Radiance writers
//!
//! # Example
//!
//! ```ignore
//! use prism_core::{load_config, SceneDescription};
//!
//! let settings = load_config("render.cfg")?;
//! let description = match &settings.scene_path {
//!     Some(path) => SceneDescription::load(path)?,
//!     None => SceneDescription::demo(),
//! };
//! ```

pub mod config;
pub mod description;
pub mod float_image;

// Re-export commonly used types
pub use config::{load_config, parse_config, ConfigError, RenderSettings};
pub use description::{
    CameraDescription, LightDescription, MaterialDescription, SceneDescription, SceneError,
    SolidDescription,
};
pub use float_image::{FloatImage, ImageError};
