use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pixscale_core::io::image_io::save_raster;
use pixscale_core::pipeline::Session;

use super::{load_config, FilterArg};

#[derive(Args)]
pub struct PreviewArgs {
    /// Input image file
    pub file: PathBuf,

    /// Pipeline config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Preview zoom
    #[arg(long)]
    pub zoom: Option<u32>,

    /// Sampling filter for the preview
    #[arg(long, value_enum)]
    pub filter: Option<FilterArg>,

    /// Output file path
    #[arg(short, long, default_value = "preview.png")]
    pub output: PathBuf,
}

pub fn run(args: &PreviewArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(zoom) = args.zoom {
        config.preview.zoom = zoom;
    }
    if let Some(filter) = args.filter {
        config.preview.filter = filter.into();
    }
    config.validate()?;

    let mut session = Session::new();
    let analysis = session
        .load(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let markers = analysis.runs.len();

    let Some(preview) = session.preview(&config)? else {
        anyhow::bail!("No image loaded");
    };
    save_raster(&preview, &args.output)?;

    println!(
        "Marked {} change point(s) at scale {}",
        markers,
        session.scale()
    );
    println!("Saved to {}", args.output.display());

    Ok(())
}
