use image::imageops::{self, FilterType};
use rayon::prelude::*;
use tracing::debug;

use crate::consts::{PARALLEL_PIXEL_THRESHOLD, RGBA_CHANNEL_COUNT};
use crate::error::{PixscaleError, Result};
use crate::raster::Raster;

use super::{output_dimensions, SamplingFilter};

/// Render `raster` at `scale * multiplier` output pixels per source pixel.
///
/// `Nearest` keeps the source channel count and copies every output pixel
/// from exactly one source pixel. `Smooth` resamples in RGBA.
pub fn upscale(
    raster: &Raster,
    scale: u32,
    multiplier: u32,
    filter: SamplingFilter,
) -> Result<Raster> {
    let (out_w, out_h) = output_dimensions(raster.width(), raster.height(), scale, multiplier)?;
    debug!(
        src_width = raster.width(),
        src_height = raster.height(),
        out_width = out_w,
        out_height = out_h,
        %filter,
        "Upscaling raster"
    );

    let block = (scale * multiplier) as usize;
    match filter {
        SamplingFilter::Nearest => nearest(raster, out_w, out_h, block),
        SamplingFilter::Smooth => {
            buffer_len(raster, out_w, out_h, RGBA_CHANNEL_COUNT, block)?;
            let img = raster.to_rgba_image();
            let resized = imageops::resize(&img, out_w, out_h, FilterType::Triangle);
            Raster::from_rgba_image(&resized)
        }
    }
}

/// Byte length of an `out_w x out_h` buffer, rejecting sizes no allocation can hold.
fn buffer_len(
    raster: &Raster,
    out_w: u32,
    out_h: u32,
    channels: usize,
    block: usize,
) -> Result<usize> {
    (out_w as usize)
        .checked_mul(channels)
        .and_then(|row| row.checked_mul(out_h as usize))
        .filter(|&total| total <= isize::MAX as usize)
        .ok_or(PixscaleError::OutputTooLarge {
            width: raster.width(),
            height: raster.height(),
            factor: block as u64,
        })
}

fn nearest(raster: &Raster, out_w: u32, out_h: u32, block: usize) -> Result<Raster> {
    let channels = raster.channels();
    let row_len = out_w as usize * channels;
    let total = buffer_len(raster, out_w, out_h, channels, block)?;
    let mut out = vec![0u8; total];

    let fill_row = |(oy, dst): (usize, &mut [u8])| {
        let src_row = raster.row(oy / block);
        for (ox, px) in dst.chunks_exact_mut(channels).enumerate() {
            let src_px = src_row.row(ox / block);
            for (d, s) in px.iter_mut().zip(src_px.iter()) {
                *d = *s;
            }
        }
    };

    if out_w as usize * out_h as usize >= PARALLEL_PIXEL_THRESHOLD {
        out.par_chunks_mut(row_len).enumerate().for_each(fill_row);
    } else {
        out.chunks_mut(row_len).enumerate().for_each(fill_row);
    }

    Raster::new(out_w, out_h, channels, out)
}
