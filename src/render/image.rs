use std::path::Path;

use image::RgbaImage;
use rand::Rng;

use crate::config::ArtConfig;
use crate::error::{ArtError, ArtResult};
use crate::network::model::create_model;
use crate::render::pixel::color_at;

/// Renders `config` with process entropy. See [`render_image_with_rng`].
pub fn render_image(config: &ArtConfig) -> ArtResult<Vec<u8>> {
    render_image_with_rng(config, &mut rand::thread_rng())
}

/// Builds one model from `rng` and colours every pixel with it.
///
/// Returns a row-major RGBA buffer of `width * height * 4` bytes. Pixel
/// `(x, y)` is sampled at `(x / width, y / height)`, so the last column and
/// row never reach 1.0.
pub fn render_image_with_rng<R: Rng + ?Sized>(config: &ArtConfig, rng: &mut R) -> ArtResult<Vec<u8>> {
    let model = create_model(config, rng);
    let width = config.width as usize;
    let height = config.height as usize;
    let mut buffer = vec![0u8; config.buffer_len()];

    tracing::debug!(width, height, "rendering");

    for y in 0..height {
        for x in 0..width {
            let px = color_at(
                config,
                &model,
                x as f64 / width as f64,
                y as f64 / height as f64,
                rng,
            )?;
            let offset = (y * width + x) * 4;
            buffer[offset..offset + 4].copy_from_slice(&px.to_bytes());
        }
    }

    tracing::debug!(bytes = buffer.len(), "render finished");
    Ok(buffer)
}

/// Wraps a rendered buffer in an `image::RgbaImage` of the configured size.
pub fn to_rgba_image(config: &ArtConfig, buffer: Vec<u8>) -> ArtResult<RgbaImage> {
    let expected = config.buffer_len();
    let actual = buffer.len();
    RgbaImage::from_raw(config.width, config.height, buffer)
        .filter(|_| actual == expected)
        .ok_or(ArtError::BufferSize { expected, actual })
}

/// Encodes a rendered buffer as PNG at `path`.
pub fn save_png<P: AsRef<Path>>(config: &ArtConfig, buffer: Vec<u8>, path: P) -> ArtResult<()> {
    let img = to_rgba_image(config, buffer)?;
    img.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}
