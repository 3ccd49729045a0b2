//! Floating-point RGB image buffer and its file writers.
//!
//! Pixels are stored row-major with row `y = 0` at the bottom of the picture,
//! matching the camera's normalized device coordinates.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::hdr::HdrEncoder;
use image::Rgb;
use thiserror::Error;

/// Errors that can occur while writing images.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for image operations.
pub type ImageResult<T> = Result<T, ImageError>;

/// A linear HDR image with three `f32` channels per pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatImage {
    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// Interleaved RGB samples, `width * height * 3` long
    data: Vec<f32>,
}

impl FloatImage {
    /// Number of channels per pixel.
    pub const CHANNELS: usize = 3;

    /// Create a new image filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width as usize * height as usize * Self::CHANNELS],
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * Self::CHANNELS
    }

    /// Get the pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> [f32; 3] {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Set the pixel at (x, y).
    pub fn put_pixel(&mut self, x: u32, y: u32, rgb: [f32; 3]) {
        let i = self.offset(x, y);
        self.data[i..i + Self::CHANNELS].copy_from_slice(&rgb);
    }

    /// Raw interleaved samples.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Iterate rows from bottom (`y = 0`) to top.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[f32]> {
        self.data.chunks_exact((self.width as usize * Self::CHANNELS).max(1))
    }

    /// Save the image, choosing the format from the file extension.
    ///
    /// Supported: `.pfm` (Portable Float Map) and `.hdr` (Radiance RGBE).
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pfm") => self.save_pfm(path),
            Some("hdr") => self.save_hdr(path),
            _ => Err(ImageError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save as a little-endian colour PFM.
    pub fn save_pfm<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        self.write_pfm(&mut writer)?;
        writer.flush()?;
        log::debug!("Wrote PFM {:?}", path.as_ref());
        Ok(())
    }

    /// Encode as PFM into any writer.
    ///
    /// PFM stores scanlines bottom to top, which is the buffer's own order.
    pub fn write_pfm<W: Write>(&self, writer: &mut W) -> ImageResult<()> {
        // Negative scale marks little-endian samples
        write!(writer, "PF\n{} {}\n-1.0\n", self.width, self.height)?;
        for sample in &self.data {
            writer.write_all(&sample.to_le_bytes())?;
        }
        Ok(())
    }

    /// Save as a Radiance HDR file.
    pub fn save_hdr<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        self.write_hdr(&mut writer)?;
        writer.flush()?;
        log::debug!("Wrote HDR {:?}", path.as_ref());
        Ok(())
    }

    /// Encode as Radiance HDR into any writer.
    pub fn write_hdr<W: Write>(&self, writer: W) -> ImageResult<()> {
        // Radiance scanlines run top to bottom
        let pixels: Vec<Rgb<f32>> = self
            .rows()
            .rev()
            .flat_map(|row| row.chunks_exact(Self::CHANNELS))
            .map(|px| Rgb([px[0], px[1], px[2]]))
            .collect();

        HdrEncoder::new(writer).encode(&pixels, self.width as usize, self.height as usize)?;
        Ok(())
    }
}
