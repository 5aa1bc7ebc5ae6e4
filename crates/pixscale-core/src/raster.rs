use image::{Rgba, RgbaImage};
use ndarray::{s, Array3, ArrayView1, ArrayView2, Axis};

use crate::consts::{MAX_CHANNELS, RGBA_CHANNEL_COUNT};
use crate::error::{PixscaleError, Result};

/// A decoded bitmap with 8-bit channel samples.
///
/// Pixel data is stored row-major with shape `(height, width, channels)`.
/// Width and height are always positive and `channels` is in `1..=4`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    data: Array3<u8>,
}

impl Raster {
    /// Build a raster from a flat row-major sample buffer.
    pub fn new(width: u32, height: u32, channels: usize, data: Vec<u8>) -> Result<Self> {
        validate_shape(width as usize, height as usize, channels)?;

        let expected = width as usize * height as usize * channels;
        let actual = data.len();
        let data = Array3::from_shape_vec((height as usize, width as usize, channels), data)
            .map_err(|_| PixscaleError::BufferSizeMismatch { expected, actual })?;
        Ok(Self { data })
    }

    /// Wrap an existing `(height, width, channels)` array.
    pub fn from_array(data: Array3<u8>) -> Result<Self> {
        let (h, w, c) = data.dim();
        validate_shape(w, h, c)?;
        Ok(Self {
            data: data.as_standard_layout().to_owned(),
        })
    }

    /// A raster where every pixel holds the same samples.
    pub fn filled(width: u32, height: u32, pixel: &[u8]) -> Result<Self> {
        validate_shape(width as usize, height as usize, pixel.len())?;
        let data = Array3::from_shape_fn(
            (height as usize, width as usize, pixel.len()),
            |(_, _, ch)| pixel[ch],
        );
        Ok(Self { data })
    }

    pub fn from_rgba_image(img: &RgbaImage) -> Result<Self> {
        let (w, h) = img.dimensions();
        Self::new(w, h, RGBA_CHANNEL_COUNT, img.as_raw().clone())
    }

    /// Convert to an RGBA image. Gray is replicated into RGB and a missing
    /// alpha channel becomes fully opaque.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            Rgba(self.rgba_at(x as usize, y as usize))
        })
    }

    pub fn width(&self) -> u32 {
        self.data.dim().1 as u32
    }

    pub fn height(&self) -> u32 {
        self.data.dim().0 as u32
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    /// Row `y` as a `(width, channels)` view.
    pub fn row(&self, y: usize) -> ArrayView2<'_, u8> {
        self.data.index_axis(Axis(0), y)
    }

    /// Channel samples of the pixel at `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> ArrayView1<'_, u8> {
        self.data.slice(s![y, x, ..])
    }

    /// Flat row-major copy of all samples.
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.iter().copied().collect()
    }

    pub(crate) fn rgba_at(&self, x: usize, y: usize) -> [u8; 4] {
        let px = self.pixel(x, y);
        match px.len() {
            1 => [px[0], px[0], px[0], 255],
            2 => [px[0], px[0], px[0], px[1]],
            3 => [px[0], px[1], px[2], 255],
            _ => [px[0], px[1], px[2], px[3]],
        }
    }
}

fn validate_shape(width: usize, height: usize, channels: usize) -> Result<()> {
    if width == 0 || height == 0 || width > u32::MAX as usize || height > u32::MAX as usize {
        return Err(PixscaleError::InvalidDimensions {
            width: width.min(u32::MAX as usize) as u32,
            height: height.min(u32::MAX as usize) as u32,
        });
    }
    if channels == 0 || channels > MAX_CHANNELS {
        return Err(PixscaleError::UnsupportedChannels(channels));
    }
    Ok(())
}
