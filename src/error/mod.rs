/// Centralized error handling for sge-build
pub mod pipeline;

pub use pipeline::{PipelineError, PipelineResult};
