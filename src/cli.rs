use crate::build::{engine_deps_pipeline, game_executable_pipeline};
use crate::config::ProjectLayout;
use crate::error::PipelineResult;
use crate::pipeline::{CommandInvoker, PipelineRunner, RunReport};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Subcommand)]
#[command(version, about, long_about = None)]
pub enum Commands {
    /// Build the engine and copy its library and headers into the game
    Engine,
    /// Build the game binary and assemble the executable bundle
    Game,
    /// Update engine dependencies, then build the game executable
    All,
    /// Print the stages of a pipeline as JSON without running them
    Plan {
        #[arg(value_enum)]
        target: PlanTarget,
    },
}

impl Commands {
    /// Short name, used in log file names
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Engine => "engine",
            Commands::Game => "game",
            Commands::All => "all",
            Commands::Plan { .. } => "plan",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlanTarget {
    Engine,
    Game,
}

/// sge-build Command
#[derive(Parser)]
#[command(about = None)]
pub struct Cli {
    /// Project root holding SimpleGameEngine/, Game/ and Build/
    #[clap(short = 'C', long, default_value = ".", global = true)]
    pub root: PathBuf,
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Build the engine and refresh the game's engine dependency folder
pub async fn engine_command<I: CommandInvoker>(
    runner: &PipelineRunner<I>,
    layout: &ProjectLayout,
) -> PipelineResult<RunReport> {
    debug!("Project root: {:?}", layout.root());
    let pipeline = engine_deps_pipeline(layout)?;
    let report = runner.run(&pipeline).await?;
    info!("✅ Engine dependencies updated in {:?}", layout.engine_dep_root());
    Ok(report)
}

/// Build the game binary and link the executable bundle
pub async fn game_command<I: CommandInvoker>(
    runner: &PipelineRunner<I>,
    layout: &ProjectLayout,
) -> PipelineResult<RunReport> {
    debug!("Project root: {:?}", layout.root());
    let pipeline = game_executable_pipeline(layout)?;
    let report = runner.run(&pipeline).await?;
    info!("✅ Game executable bundle ready in {:?}", layout.bundle_root());
    Ok(report)
}

/// Engine pipeline first; the game pipeline only runs if it succeeded
pub async fn all_command<I: CommandInvoker>(
    runner: &PipelineRunner<I>,
    layout: &ProjectLayout,
) -> PipelineResult<Vec<RunReport>> {
    let engine = engine_command(runner, layout).await?;
    let game = game_command(runner, layout).await?;
    Ok(vec![engine, game])
}

/// Render a pipeline as pretty JSON
pub fn plan_command(
    target: PlanTarget,
    layout: &ProjectLayout,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let pipeline = match target {
        PlanTarget::Engine => engine_deps_pipeline(layout)?,
        PlanTarget::Game => game_executable_pipeline(layout)?,
    };
    Ok(serde_json::to_string_pretty(&pipeline)?)
}
