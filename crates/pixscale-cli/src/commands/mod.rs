pub mod config;
pub mod detect;
pub mod preview;
pub mod upscale;

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use pixscale_core::pipeline::config::PipelineConfig;
use pixscale_core::render::SamplingFilter;
use tracing::debug;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FilterArg {
    Nearest,
    Smooth,
}

impl From<FilterArg> for SamplingFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Nearest => SamplingFilter::Nearest,
            FilterArg::Smooth => SamplingFilter::Smooth,
        }
    }
}

/// Load the TOML config at `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    match path {
        Some(path) => {
            let config = PipelineConfig::load(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            debug!(path = %path.display(), ?config, "Loaded config");
            Ok(config)
        }
        None => Ok(PipelineConfig::default()),
    }
}
