pub mod core;
pub mod invoke;
pub mod stage;

pub use crate::error::{PipelineError, PipelineResult};
pub use self::core::{Pipeline, PipelineRunner, PlannedStage, RunReport};
pub use invoke::{CommandInvoker, ProcessInvoker};
pub use stage::Stage;
