pub mod mode;
pub mod runs;
pub mod scale;

use tracing::debug;

use crate::raster::Raster;

pub use mode::{most_common, FrequencyTable, Tally};
pub use runs::{change_points, compute_runs, Run};
pub use scale::{detect_scale, ScaleDecision, ScaleOrigin, ScaleSelector};

/// Run-length occurrence counts, in discovery order.
pub type RunLengthHistogram = FrequencyTable<usize>;

pub fn run_length_histogram(runs: &[Run]) -> RunLengthHistogram {
    runs.iter().map(Run::len).collect()
}

/// Everything derived from one raster.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub runs: Vec<Run>,
    pub histogram: RunLengthHistogram,
    pub decision: ScaleDecision,
}

impl Analysis {
    pub fn change_points(&self) -> Vec<usize> {
        self.runs.iter().map(|run| run.end).collect()
    }
}

/// Compute runs and the scale for `raster`, updating `selector`.
pub fn analyze(raster: &Raster, selector: &mut ScaleSelector) -> Analysis {
    let runs = compute_runs(raster);
    let histogram = run_length_histogram(&runs);
    let decision = selector.detect(&runs);

    debug!(
        width = raster.width(),
        height = raster.height(),
        runs = runs.len(),
        distinct_lengths = histogram.len(),
        scale = decision.factor,
        origin = %decision.origin,
        "Row runs analysed"
    );

    Analysis {
        runs,
        histogram,
        decision,
    }
}
