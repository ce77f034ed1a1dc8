/// Pipeline error types
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Stage {stage_index} ({phase}) exited with code {exit_code}")]
    BuildInvocation {
        stage_index: usize,
        phase: String,
        exit_code: i32,
    },
    #[error("Stage {stage_index} ({phase}) could not start '{command}': {source}")]
    Spawn {
        stage_index: usize,
        phase: String,
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Stage {stage_index} ({phase}) failed on {path:?}: {source}")]
    Copy {
        stage_index: usize,
        phase: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Stage {stage_index} ({phase}) could not create directory {path:?}: {source}")]
    CreateDir {
        stage_index: usize,
        phase: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Pipeline configuration error: {message}")]
    Config { message: String },
}

impl PipelineError {
    /// Create a new Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Index of the stage that failed, if the pipeline got as far as running
    pub fn stage_index(&self) -> Option<usize> {
        match self {
            Self::BuildInvocation { stage_index, .. }
            | Self::Spawn { stage_index, .. }
            | Self::Copy { stage_index, .. }
            | Self::CreateDir { stage_index, .. } => Some(*stage_index),
            Self::Config { .. } => None,
        }
    }

    /// Exit code of the failed build invocation
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::BuildInvocation { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }

    pub fn phase(&self) -> Option<&str> {
        match self {
            Self::BuildInvocation { phase, .. }
            | Self::Spawn { phase, .. }
            | Self::Copy { phase, .. }
            | Self::CreateDir { phase, .. } => Some(phase.as_str()),
            Self::Config { .. } => None,
        }
    }
}

/// Result type alias for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
