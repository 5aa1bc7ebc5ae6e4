pub mod preview;
pub mod upscale;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PixscaleError, Result};

pub use preview::{render_preview, PreviewConfig};
pub use upscale::upscale;

/// How source pixels are sampled when resizing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SamplingFilter {
    /// Replicate source pixels without blending.
    #[default]
    Nearest,
    /// Linear interpolation between neighbouring pixels.
    Smooth,
}

impl fmt::Display for SamplingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => write!(f, "Nearest"),
            Self::Smooth => write!(f, "Smooth"),
        }
    }
}

/// Output size for a `width x height` source rendered at
/// `scale * multiplier` output pixels per source pixel.
pub fn output_dimensions(width: u32, height: u32, scale: u32, multiplier: u32) -> Result<(u32, u32)> {
    if scale == 0 {
        return Err(PixscaleError::InvalidScale("scale must be at least 1".into()));
    }
    if multiplier == 0 {
        return Err(PixscaleError::InvalidScale(
            "output multiplier must be at least 1".into(),
        ));
    }

    let too_large = || PixscaleError::OutputTooLarge {
        width,
        height,
        factor: scale as u64 * multiplier as u64,
    };
    let factor = scale.checked_mul(multiplier).ok_or_else(too_large)?;
    let out_w = width.checked_mul(factor).ok_or_else(too_large)?;
    let out_h = height.checked_mul(factor).ok_or_else(too_large)?;
    Ok((out_w, out_h))
}
