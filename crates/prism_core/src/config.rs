//! Render settings file.
//!
//! Settings are stored as plain `key: value` lines:
//!
//! ```text
//! # 16:9 preview
//! image_width: 640
//! image_height: 360
//! output_path: out/preview.pfm
//! scene_path: scenes/spheres.json
//! ```
//!
//! Each line is split at its first `:`. Lines without a separator, blank
//! lines and `#` comments are skipped.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Output file used when the settings do not name one.
pub const DEFAULT_OUTPUT_PATH: &str = "output.pfm";

/// Errors that can occur while reading render settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid value for '{key}' at line {line}: {value}")]
    InvalidValue {
        key: String,
        value: String,
        line: usize,
    },

    #[error("Missing required key '{0}'")]
    MissingKey(&'static str),

    #[error("Image dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
}

/// Result type for settings operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Parsed render settings.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    /// Output image width in pixels
    pub image_width: u32,

    /// Output image height in pixels
    pub image_height: u32,

    /// Where the rendered image is written
    pub output_path: PathBuf,

    /// JSON scene description; the built-in demo scene is used when absent
    pub scene_path: Option<PathBuf>,
}

impl fmt::Display for RenderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "image_width: {}, image_height: {}, output_path: {}",
            self.image_width,
            self.image_height,
            self.output_path.display()
        )?;
        match &self.scene_path {
            Some(path) => write!(f, ", scene_path: {}", path.display()),
            None => write!(f, ", scene_path: <demo>"),
        }
    }
}

/// Load render settings from a file.
///
/// Relative paths inside the file are resolved against the file's directory.
pub fn load_config<P: AsRef<Path>>(path: P) -> ConfigResult<RenderSettings> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let base_dir = path.parent().filter(|p| !p.as_os_str().is_empty());

    log::debug!("Parsing render settings from {:?}", path);
    parse_config(&content, base_dir)
}

/// Parse render settings from a string.
pub fn parse_config(content: &str, base_dir: Option<&Path>) -> ConfigResult<RenderSettings> {
    let mut image_width = None;
    let mut image_height = None;
    let mut output_path = None;
    let mut scene_path = None;

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((key, value)) = trimmed.split_once(':') else {
            log::debug!("Skipping line {} without separator", line);
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        match key {
            "image_width" => image_width = Some(parse_dimension(key, value, line)?),
            "image_height" => image_height = Some(parse_dimension(key, value, line)?),
            "output_path" => output_path = Some(resolve(value, base_dir)),
            "scene_path" => scene_path = Some(resolve(value, base_dir)),
            _ => log::warn!("Ignoring unknown key '{}' at line {}", key, line),
        }
    }

    let image_width = image_width.ok_or(ConfigError::MissingKey("image_width"))?;
    let image_height = image_height.ok_or(ConfigError::MissingKey("image_height"))?;
    if image_width == 0 || image_height == 0 {
        return Err(ConfigError::ZeroDimension {
            width: image_width,
            height: image_height,
        });
    }

    Ok(RenderSettings {
        image_width,
        image_height,
        output_path: output_path.unwrap_or_else(|| resolve(DEFAULT_OUTPUT_PATH, base_dir)),
        scene_path,
    })
}

fn parse_dimension(key: &str, value: &str, line: usize) -> ConfigResult<u32> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        line,
    })
}

fn resolve(value: &str, base_dir: Option<&Path>) -> PathBuf {
    let path = PathBuf::from(value);
    match base_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path,
    }
}
