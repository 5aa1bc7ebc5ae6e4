pub mod config;
mod orchestrator;
mod session;
mod types;

pub use orchestrator::{run_pipeline, run_pipeline_in};
pub use session::Session;
pub use types::{PipelineReport, PipelineStage};
