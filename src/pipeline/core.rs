use crate::error::{PipelineError, PipelineResult};
use crate::pipeline::invoke::CommandInvoker;
use crate::pipeline::stage::Stage;
use crate::util::file::copy_into;
use serde::Serialize;
use std::time::{Duration, Instant};
use tokio::fs as async_fs;
use tracing::{debug, error, info};

/// A stage together with the phase name shown to the operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedStage {
    pub phase: String,
    #[serde(flatten)]
    pub stage: Stage,
}

/// Ordered, fixed sequence of stages
#[derive(Debug, Clone, Serialize)]
pub struct Pipeline {
    name: String,
    stages: Vec<PlannedStage>,
}

impl Pipeline {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            stages: Vec::new(),
        }
    }

    pub fn add_stage(mut self, phase: &str, stage: Stage) -> PipelineResult<Self> {
        if phase.trim().is_empty() {
            return Err(PipelineError::config(format!(
                "Stage {} of pipeline '{}' has no phase name",
                self.stages.len(),
                self.name
            )));
        }
        stage.validate()?;

        debug!(
            "Adding stage {} '{}' to pipeline '{}': {}",
            self.stages.len(),
            phase,
            self.name,
            stage
        );

        self.stages.push(PlannedStage {
            phase: phase.to_string(),
            stage,
        });
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stages(&self) -> &[PlannedStage] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

/// Summary of a pipeline that ran to completion
#[derive(Debug, Clone)]
pub struct RunReport {
    pub pipeline: String,
    pub stages_run: usize,
    pub elapsed: Duration,
}

/// Executes pipelines stage by stage, stopping at the first failure
pub struct PipelineRunner<I> {
    invoker: I,
}

impl<I: CommandInvoker> PipelineRunner<I> {
    pub fn new(invoker: I) -> Self {
        Self { invoker }
    }

    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    pub async fn run(&self, pipeline: &Pipeline) -> PipelineResult<RunReport> {
        debug!(
            "Executing pipeline '{}' with {} stages",
            pipeline.name,
            pipeline.stages.len()
        );
        let started = Instant::now();

        for (index, planned) in pipeline.stages.iter().enumerate() {
            info!("{} {}...", planned.stage.icon(), planned.phase);
            debug!("Stage {}: {}", index, planned.stage);

            if let Err(e) = self.run_stage(index, planned).await {
                match e.exit_code() {
                    Some(code) => error!("❌ {} failed (exit code {})", planned.phase, code),
                    None => error!("❌ {} failed", planned.phase),
                }
                return Err(e);
            }

            debug!("Stage {} '{}' completed", index, planned.phase);
        }

        let report = RunReport {
            pipeline: pipeline.name.clone(),
            stages_run: pipeline.stages.len(),
            elapsed: started.elapsed(),
        };
        debug!("Pipeline '{}' finished in {:?}", report.pipeline, report.elapsed);
        Ok(report)
    }

    async fn run_stage(&self, stage_index: usize, planned: &PlannedStage) -> PipelineResult<()> {
        let phase = || planned.phase.clone();

        match &planned.stage {
            Stage::Invoke {
                working_dir,
                command,
                args,
            } => {
                let exit_code = self
                    .invoker
                    .invoke(working_dir, command, args)
                    .await
                    .map_err(|source| PipelineError::Spawn {
                        stage_index,
                        phase: phase(),
                        command: command.clone(),
                        source,
                    })?;

                if exit_code != 0 {
                    return Err(PipelineError::BuildInvocation {
                        stage_index,
                        phase: phase(),
                        exit_code,
                    });
                }
            }
            Stage::Copy {
                sources,
                destination,
                recursive,
            } => {
                async_fs::create_dir_all(destination)
                    .await
                    .map_err(|source| PipelineError::CreateDir {
                        stage_index,
                        phase: phase(),
                        path: destination.clone(),
                        source,
                    })?;

                for src in sources {
                    copy_into(src, destination, *recursive)
                        .await
                        .map_err(|source| PipelineError::Copy {
                            stage_index,
                            phase: phase(),
                            path: src.clone(),
                            source,
                        })?;
                }
            }
            Stage::CreateDirs { paths } => {
                for path in paths {
                    async_fs::create_dir_all(path)
                        .await
                        .map_err(|source| PipelineError::CreateDir {
                            stage_index,
                            phase: phase(),
                            path: path.clone(),
                            source,
                        })?;
                }
            }
        }

        Ok(())
    }
}
