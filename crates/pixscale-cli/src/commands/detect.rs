use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pixscale_core::pipeline::Session;

use crate::summary::{print_analysis, print_failure};

#[derive(Args)]
pub struct DetectArgs {
    /// Input image files, analysed in order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// List every run and the run-length histogram
    #[arg(long)]
    pub runs: bool,
}

/// Analyse each file through one session so an image without a signal
/// keeps the previous file's scale.
pub fn run(args: &DetectArgs) -> Result<()> {
    let mut session = Session::new();
    let mut failures = 0usize;

    for path in &args.files {
        match session.load(path) {
            Ok(analysis) => print_analysis(path, analysis, args.runs),
            Err(e) => {
                failures += 1;
                print_failure(path, &e);
            }
        }
    }

    if failures == args.files.len() {
        anyhow::bail!("No input could be decoded");
    }
    Ok(())
}
