use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::io::image_io::{load_raster, save_raster};
use crate::render::upscale;

use super::config::PipelineConfig;
use super::session::Session;
use super::types::{PipelineReport, PipelineStage};

/// Decode `input`, detect its scale, render, and write `output`.
pub fn run_pipeline(
    input: &Path,
    output: &Path,
    config: &PipelineConfig,
    progress: impl FnMut(PipelineStage),
) -> Result<PipelineReport> {
    let mut session = Session::new();
    run_pipeline_in(&mut session, input, output, config, progress)
}

/// Same as [`run_pipeline`] but keeps scale history in `session`, so an image
/// with no detectable runs reuses the previous image's scale.
pub fn run_pipeline_in(
    session: &mut Session,
    input: &Path,
    output: &Path,
    config: &PipelineConfig,
    mut progress: impl FnMut(PipelineStage),
) -> Result<PipelineReport> {
    config.validate()?;

    progress(PipelineStage::Decoding);
    let raster = load_raster(input)?;

    progress(PipelineStage::Analyzing);
    let (raster, analysis) = session.install(raster);
    let decision = analysis.decision;
    let run_count = analysis.runs.len();
    let input_size = (raster.width(), raster.height());
    let render_scale = config.scale_override.unwrap_or(decision.factor);

    progress(PipelineStage::Rendering);
    let rendered = upscale(raster, render_scale, config.output_multiplier, config.filter)?;

    progress(PipelineStage::Writing);
    save_raster(&rendered, output)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        scale = render_scale,
        width = rendered.width(),
        height = rendered.height(),
        "Output saved"
    );

    Ok(PipelineReport {
        input_size,
        output_size: (rendered.width(), rendered.height()),
        decision,
        render_scale,
        run_count,
    })
}
