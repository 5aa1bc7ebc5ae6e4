use std::fmt;

use crate::analysis::ScaleDecision;

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Decoding,
    Analyzing,
    Rendering,
    Writing,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decoding => write!(f, "Decoding image"),
            Self::Analyzing => write!(f, "Detecting scale"),
            Self::Rendering => write!(f, "Rendering"),
            Self::Writing => write!(f, "Writing output"),
        }
    }
}

/// Summary of one pipeline run.
#[derive(Clone, Debug)]
pub struct PipelineReport {
    pub input_size: (u32, u32),
    pub output_size: (u32, u32),
    pub decision: ScaleDecision,
    /// Scale actually rendered with (the override when one is set).
    pub render_scale: u32,
    pub run_count: usize,
}
