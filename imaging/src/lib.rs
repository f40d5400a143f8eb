//! Decodes texture image files into the RGB byte buffers `tracer-core`
//! samples from. Kept as a separate crate so the core's dependency graph
//! carries no image codec or color-management stack.

use std::path::Path;

use image::{GenericImageView, ImageReader};
use palette::{IntoColor, LinSrgb, Srgb};
use thiserror::Error;
use tracer_core::texture::ImageData;

const BYTES_PER_PIXEL: u32 = 3;

/// A decoded texture image, stored as linear RGB bytes row-major from the
/// top of the file.
#[derive(Debug, Default)]
pub struct DecodedImage {
    rgb_bytes: Vec<u8>,
    width: u32,
    height: u32,
    bytes_per_row: u32,
}

#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),
}

impl DecodedImage {
    /// Decodes the file at `path` and converts every sRGB pixel to linear
    /// RGB (the core samples image textures as if they already carried
    /// linear radiance).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ImageLoadError> {
        let decoded = ImageReader::open(path)?.decode()?;
        let (width, height) = decoded.dimensions();
        let bytes_per_row = width * BYTES_PER_PIXEL;

        let mut rgb_bytes = Vec::with_capacity((bytes_per_row * height) as usize);
        for (_, _, pixel) in decoded.to_rgb8().enumerate_pixels() {
            let srgb = Srgb::new(
                pixel[0] as f32 / 255.,
                pixel[1] as f32 / 255.,
                pixel[2] as f32 / 255.,
            );
            let linear: LinSrgb = srgb.into_color();

            rgb_bytes.push((linear.red * 255.).round() as u8);
            rgb_bytes.push((linear.green * 255.).round() as u8);
            rgb_bytes.push((linear.blue * 255.).round() as u8);
        }

        Ok(Self { rgb_bytes, width, height, bytes_per_row })
    }

    /// Zero-dimension placeholder; `tracer-core`'s image texture treats any
    /// provider with `height() == 0` as missing and returns solid cyan.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl ImageData for DecodedImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel_rgb8(&self, x: u32, y: u32) -> [u8; 3] {
        let index = (y * self.bytes_per_row + x * BYTES_PER_PIXEL) as usize;

        [self.rgb_bytes[index], self.rgb_bytes[index + 1], self.rgb_bytes[index + 2]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_image_has_zero_dimensions() {
        let img = DecodedImage::empty();

        assert_eq!(img.width(), 0);
        assert_eq!(img.height(), 0);
    }

    #[test]
    fn missing_file_yields_a_decode_error() {
        let result = DecodedImage::load("does/not/exist.png");

        assert!(result.is_err());
    }
}
