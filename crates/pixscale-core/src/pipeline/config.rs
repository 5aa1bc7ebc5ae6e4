use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_OUTPUT_MULTIPLIER;
use crate::error::{PixscaleError, Result};
use crate::render::SamplingFilter;

pub use crate::render::PreviewConfig;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Zoom applied on top of the detected scale.
    pub output_multiplier: u32,
    pub filter: SamplingFilter,
    /// Render with this scale instead of the detected one.
    pub scale_override: Option<u32>,
    pub preview: PreviewConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_multiplier: DEFAULT_OUTPUT_MULTIPLIER,
            filter: SamplingFilter::Nearest,
            scale_override: None,
            preview: PreviewConfig::default(),
        }
    }
}

impl PipelineConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| PixscaleError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| PixscaleError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.output_multiplier == 0 {
            return Err(PixscaleError::Config(
                "output_multiplier must be at least 1".into(),
            ));
        }
        if self.scale_override == Some(0) {
            return Err(PixscaleError::Config("scale_override must be at least 1".into()));
        }
        if self.preview.zoom == 0 {
            return Err(PixscaleError::Config("preview.zoom must be at least 1".into()));
        }
        Ok(())
    }
}
