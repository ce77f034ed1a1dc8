use crate::config::constants;
use crate::error::{PipelineError, PipelineResult};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// One atomic step of a build pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Stage {
    /// Run an external process; succeeds iff it exits with code 0
    Invoke {
        working_dir: PathBuf,
        command: String,
        args: Vec<String>,
    },
    /// Copy each source into `destination`, creating it first
    Copy {
        sources: Vec<PathBuf>,
        destination: PathBuf,
        recursive: bool,
    },
    /// Create each directory with all of its missing parents
    CreateDirs { paths: Vec<PathBuf> },
}

impl Stage {
    pub fn invoke<I, S>(working_dir: impl Into<PathBuf>, command: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Invoke {
            working_dir: working_dir.into(),
            command: command.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `<tool> all KEY=VALUE ...` in `working_dir`
    pub fn build_target(
        tool: impl Into<String>,
        working_dir: impl Into<PathBuf>,
        params: &[(&str, &str)],
    ) -> Self {
        let args = std::iter::once(constants::BUILD_TARGET.to_string())
            .chain(params.iter().map(|(key, value)| format!("{key}={value}")));
        Self::invoke(working_dir, tool, args)
    }

    pub fn copy(sources: Vec<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self::Copy {
            sources,
            destination: destination.into(),
            recursive: false,
        }
    }

    /// Copy with full directory trees, hidden entries included
    pub fn copy_tree(sources: Vec<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self::Copy {
            sources,
            destination: destination.into(),
            recursive: true,
        }
    }

    pub fn create_dirs(paths: Vec<PathBuf>) -> Self {
        Self::CreateDirs { paths }
    }

    /// Reject stages that could never run
    pub fn validate(&self) -> PipelineResult<()> {
        match self {
            Self::Invoke {
                working_dir,
                command,
                ..
            } => {
                if command.trim().is_empty() {
                    return Err(PipelineError::config("Invoke stage has an empty command"));
                }
                if working_dir.as_os_str().is_empty() {
                    return Err(PipelineError::config(format!(
                        "Invoke stage '{command}' has an empty working directory"
                    )));
                }
            }
            Self::Copy {
                sources,
                destination,
                ..
            } => {
                if sources.is_empty() {
                    return Err(PipelineError::config(format!(
                        "Copy stage into {destination:?} has no sources"
                    )));
                }
                if destination.as_os_str().is_empty()
                    || sources.iter().any(|s| s.as_os_str().is_empty())
                {
                    return Err(PipelineError::config("Copy stage contains an empty path"));
                }
            }
            Self::CreateDirs { paths } => {
                if paths.is_empty() || paths.iter().any(|p| p.as_os_str().is_empty()) {
                    return Err(PipelineError::config(
                        "CreateDirs stage needs at least one non-empty path",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Status icon for operator output
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Invoke { .. } => "⚙️ ",
            Self::Copy { .. } => "📑",
            Self::CreateDirs { .. } => "🗂️ ",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invoke {
                working_dir,
                command,
                args,
            } => write!(
                f,
                "{command} {} (in {})",
                args.join(" "),
                working_dir.display()
            ),
            Self::Copy {
                sources,
                destination,
                recursive,
            } => {
                let sources: Vec<_> = sources.iter().map(|s| s.display().to_string()).collect();
                write!(
                    f,
                    "copy{} {} -> {}",
                    if *recursive { " -r" } else { "" },
                    sources.join(", "),
                    destination.display()
                )
            }
            Self::CreateDirs { paths } => {
                let paths: Vec<_> = paths.iter().map(|p| p.display().to_string()).collect();
                write!(f, "mkdir -p {}", paths.join(" "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_target_args() {
        let stage = Stage::build_target(
            "make",
            "Game",
            &[("BIN_NAME", "libGame.dylib"), ("EXE_NAME", "Game")],
        );

        assert_eq!(
            stage,
            Stage::Invoke {
                working_dir: PathBuf::from("Game"),
                command: "make".to_string(),
                args: vec![
                    "all".to_string(),
                    "BIN_NAME=libGame.dylib".to_string(),
                    "EXE_NAME=Game".to_string(),
                ],
            }
        );
        assert_eq!(
            stage.to_string(),
            "make all BIN_NAME=libGame.dylib EXE_NAME=Game (in Game)"
        );
    }

    #[test]
    fn test_validate_rejects_malformed_stages() {
        assert!(Stage::invoke("dir", " ", Vec::<String>::new()).validate().is_err());
        assert!(Stage::invoke("", "make", ["all"]).validate().is_err());
        assert!(Stage::copy(vec![], "out").validate().is_err());
        assert!(Stage::copy(vec![PathBuf::new()], "out").validate().is_err());
        assert!(Stage::create_dirs(vec![]).validate().is_err());

        assert!(Stage::invoke("dir", "make", ["all"]).validate().is_ok());
        assert!(Stage::copy_tree(vec!["a".into()], "out").validate().is_ok());
    }

    #[test]
    fn test_serialized_kind_tag() {
        let stage = Stage::copy_tree(vec!["include".into()], "SGE");
        let json = serde_json::to_value(&stage).unwrap();

        assert_eq!(json["kind"], "copy");
        assert_eq!(json["recursive"], true);
        assert_eq!(json["destination"], "SGE");
    }
}
