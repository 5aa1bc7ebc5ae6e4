use std::path::Path;

use tracing::{info, warn};

use crate::analysis::{analyze, Analysis, ScaleSelector};
use crate::error::Result;
use crate::io::image_io::{decode_bytes, load_raster};
use crate::raster::Raster;
use crate::render::{render_preview, upscale};

use super::config::PipelineConfig;

/// The current image and the last good scale.
///
/// Each successfully decoded image replaces the previous one and is analysed
/// from scratch. A failed decode leaves everything as it was.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<(Raster, Analysis)>,
    selector: ScaleSelector,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, path: &Path) -> Result<&Analysis> {
        match load_raster(path) {
            Ok(raster) => Ok(self.replace(raster)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Keeping previous image");
                Err(e)
            }
        }
    }

    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<&Analysis> {
        match decode_bytes(bytes) {
            Ok(raster) => Ok(self.replace(raster)),
            Err(e) => {
                warn!(error = %e, "Keeping previous image");
                Err(e)
            }
        }
    }

    /// Install an already decoded raster.
    pub fn replace(&mut self, raster: Raster) -> &Analysis {
        self.install(raster).1
    }

    /// Install `raster` and return it alongside its analysis.
    pub fn install(&mut self, raster: Raster) -> (&Raster, &Analysis) {
        let analysis = analyze(&raster, &mut self.selector);
        info!(
            width = raster.width(),
            height = raster.height(),
            scale = analysis.decision.factor,
            origin = %analysis.decision.origin,
            "Image analysed"
        );
        let (raster, analysis) = self.current.insert((raster, analysis));
        (&*raster, &*analysis)
    }

    pub fn raster(&self) -> Option<&Raster> {
        self.current.as_ref().map(|(raster, _)| raster)
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        self.current.as_ref().map(|(_, analysis)| analysis)
    }

    /// Scale used for rendering: the last detection, or 1.
    pub fn scale(&self) -> u32 {
        self.selector.factor()
    }

    /// Final upscaled output, `None` before any image was loaded.
    pub fn render(&self, config: &PipelineConfig) -> Result<Option<Raster>> {
        let Some(raster) = self.raster() else {
            return Ok(None);
        };
        let scale = config.scale_override.unwrap_or_else(|| self.scale());
        upscale(raster, scale, config.output_multiplier, config.filter).map(Some)
    }

    /// Diagnostic preview with change-point markers.
    pub fn preview(&self, config: &PipelineConfig) -> Result<Option<Raster>> {
        let Some((raster, analysis)) = self.current.as_ref() else {
            return Ok(None);
        };
        render_preview(raster, &analysis.change_points(), &config.preview).map(Some)
    }
}
