use crate::raster::Raster;

/// A half-open span of rows `[start, end)` that are all identical, ending at
/// a change point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Run {
    pub start: usize,
    pub end: usize,
}

impl Run {
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Partition the rows of `raster` into runs of identical rows.
///
/// Row `y` is a change point when any channel sample differs from row
/// `y - 1`. Each change point closes the run started at the previous one
/// (row 0 for the first run). The segment after the last change point is
/// never closed, so a single-row or fully uniform raster yields no runs.
pub fn compute_runs(raster: &Raster) -> Vec<Run> {
    let height = raster.height() as usize;
    let mut runs = Vec::new();
    let mut prev_change = 0;

    for y in 1..height {
        if raster.row(y) != raster.row(y - 1) {
            runs.push(Run {
                start: prev_change,
                end: y,
            });
            prev_change = y;
        }
    }

    runs
}

/// Row indices where content differs from the row above, top to bottom.
pub fn change_points(raster: &Raster) -> Vec<usize> {
    compute_runs(raster).iter().map(|run| run.end).collect()
}
