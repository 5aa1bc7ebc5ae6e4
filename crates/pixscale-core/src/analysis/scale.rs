use std::fmt;

use crate::consts::DEFAULT_SCALE;

use super::mode::most_common;
use super::runs::Run;

/// Where a scale factor came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleOrigin {
    /// The mode run length, seen `occurrences` times.
    Detected { occurrences: usize },
    /// No signal in this image; the previous detection was kept.
    Retained,
    /// No signal and nothing detected before.
    Default,
}

impl fmt::Display for ScaleOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detected { occurrences } => write!(f, "Detected ({occurrences} runs)"),
            Self::Retained => write!(f, "Retained"),
            Self::Default => write!(f, "Default"),
        }
    }
}

/// A positive scale factor together with its origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaleDecision {
    pub factor: u32,
    pub origin: ScaleOrigin,
}

impl ScaleDecision {
    pub fn is_detected(&self) -> bool {
        matches!(self.origin, ScaleOrigin::Detected { .. })
    }
}

/// Pick the scale factor for `runs`: the most frequent run length, or
/// `previous` (falling back to 1) when there are no runs.
pub fn detect_scale(runs: &[Run], previous: Option<u32>) -> ScaleDecision {
    let (mode, occurrences) = most_common(runs.iter().map(Run::len));
    let detected = mode
        .and_then(|len| u32::try_from(len).ok())
        .filter(|&len| len > 0);

    match (detected, previous.filter(|&p| p > 0)) {
        (Some(factor), _) => ScaleDecision {
            factor,
            origin: ScaleOrigin::Detected { occurrences },
        },
        (None, Some(factor)) => ScaleDecision {
            factor,
            origin: ScaleOrigin::Retained,
        },
        (None, None) => ScaleDecision {
            factor: DEFAULT_SCALE,
            origin: ScaleOrigin::Default,
        },
    }
}

/// Scale detection that remembers the last good result.
///
/// An image with no row runs never overwrites an earlier detection.
#[derive(Clone, Debug, Default)]
pub struct ScaleSelector {
    last: Option<u32>,
}

impl ScaleSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a known scale. Zero is treated as no prior detection.
    pub fn with_previous(scale: u32) -> Self {
        Self {
            last: Some(scale).filter(|&s| s > 0),
        }
    }

    pub fn detect(&mut self, runs: &[Run]) -> ScaleDecision {
        let decision = detect_scale(runs, self.last);
        if decision.is_detected() {
            self.last = Some(decision.factor);
        }
        decision
    }

    /// The last detected scale, if any.
    pub fn current(&self) -> Option<u32> {
        self.last
    }

    /// The scale to render with right now.
    pub fn factor(&self) -> u32 {
        self.last.unwrap_or(DEFAULT_SCALE)
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
