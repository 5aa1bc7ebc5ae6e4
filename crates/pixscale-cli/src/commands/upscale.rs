use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use pixscale_core::pipeline::run_pipeline;

use super::{load_config, FilterArg};
use crate::summary::print_report;

#[derive(Args)]
pub struct UpscaleArgs {
    /// Input image file
    pub file: PathBuf,

    /// Pipeline config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Zoom applied on top of the detected scale
    #[arg(short, long)]
    pub multiplier: Option<u32>,

    /// Use this scale instead of detecting one
    #[arg(short, long)]
    pub scale: Option<u32>,

    /// Sampling filter for the output
    #[arg(long, value_enum)]
    pub filter: Option<FilterArg>,

    /// Output file path
    #[arg(short, long, default_value = "upscaled.png")]
    pub output: PathBuf,
}

pub fn run(args: &UpscaleArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(multiplier) = args.multiplier {
        config.output_multiplier = multiplier;
    }
    if args.scale.is_some() {
        config.scale_override = args.scale;
    }
    if let Some(filter) = args.filter {
        config.filter = filter.into();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    let report = run_pipeline(&args.file, &args.output, &config, |stage| {
        pb.set_message(stage.to_string());
    })
    .with_context(|| format!("Failed to upscale {}", args.file.display()))?;

    pb.finish_and_clear();
    print_report(&args.file, &args.output, &report);

    Ok(())
}
