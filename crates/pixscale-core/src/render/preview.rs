use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MARKER_COLOR, DEFAULT_MARKER_HEIGHT, DEFAULT_MARKER_WIDTH};
use crate::error::{PixscaleError, Result};
use crate::raster::Raster;

use super::upscale::upscale;
use super::SamplingFilter;

/// Settings for the diagnostic preview.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Output pixels per source pixel.
    pub zoom: u32,
    pub filter: SamplingFilter,
    /// Marker size in source pixels.
    pub marker_width: u32,
    pub marker_height: u32,
    /// RGBA marker color.
    pub marker_color: [u8; 4],
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            zoom: 1,
            filter: SamplingFilter::Smooth,
            marker_width: DEFAULT_MARKER_WIDTH,
            marker_height: DEFAULT_MARKER_HEIGHT,
            marker_color: DEFAULT_MARKER_COLOR,
        }
    }
}

/// Render `raster` at the preview zoom and mark each change-point row with a
/// small rectangle at the left edge. Markers are clipped to the canvas.
///
/// The result is always RGBA.
pub fn render_preview(
    raster: &Raster,
    change_points: &[usize],
    config: &PreviewConfig,
) -> Result<Raster> {
    if config.zoom == 0 {
        return Err(PixscaleError::InvalidScale("preview zoom must be at least 1".into()));
    }

    let mut canvas = if config.zoom == 1 {
        raster.to_rgba_image()
    } else {
        upscale(raster, config.zoom, 1, config.filter)?.to_rgba_image()
    };

    let (w, h) = canvas.dimensions();
    let zoom = config.zoom as u64;
    let marker_w = (config.marker_width as u64 * zoom).min(w as u64) as u32;
    let marker_h = config.marker_height as u64 * zoom;
    let color = Rgba(config.marker_color);

    for &row in change_points {
        let top = row as u64 * zoom;
        if top >= h as u64 {
            continue;
        }
        let bottom = (top + marker_h).min(h as u64) as u32;
        for y in top as u32..bottom {
            for x in 0..marker_w {
                canvas.put_pixel(x, y, color);
            }
        }
    }

    Raster::from_rgba_image(&canvas)
}
