use std::path::Path;

use image::{DynamicImage, ImageFormat};
use tracing::debug;

use crate::error::{PixscaleError, Result};
use crate::raster::Raster;

/// Decode an encoded image (PNG, GIF, BMP, ...) into an RGBA raster.
pub fn decode_bytes(bytes: &[u8]) -> Result<Raster> {
    if bytes.is_empty() {
        return Err(PixscaleError::DecodeFailure("no file data".into()));
    }

    let img =
        image::load_from_memory(bytes).map_err(|e| PixscaleError::DecodeFailure(e.to_string()))?;
    let rgba = img.to_rgba8();
    debug!(width = rgba.width(), height = rgba.height(), "Decoded image");

    Raster::from_rgba_image(&rgba)
}

/// Read and decode an image file.
pub fn load_raster(path: &Path) -> Result<Raster> {
    let bytes = std::fs::read(path)?;
    decode_bytes(&bytes)
}

/// Save a raster, choosing format from file extension. Unknown or missing
/// extensions are written as PNG.
pub fn save_raster(raster: &Raster, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    let img = DynamicImage::ImageRgba8(raster.to_rgba_image());

    match format {
        // No alpha channel in JPEG.
        ImageFormat::Jpeg => img.to_rgb8().save_with_format(path, format)?,
        _ => img.save_with_format(path, format)?,
    }
    Ok(())
}
