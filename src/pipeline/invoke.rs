use async_trait::async_trait;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::debug;

/// Runs an external command and reports its exit code.
///
/// The working directory is passed per call; implementations must not change the
/// directory of the current process.
#[async_trait]
pub trait CommandInvoker: Send + Sync {
    async fn invoke(
        &self,
        working_dir: &Path,
        command: &str,
        args: &[String],
    ) -> std::io::Result<i32>;
}

/// Spawns real processes, inheriting stdout and stderr so build output reaches the operator
pub struct ProcessInvoker;

#[async_trait]
impl CommandInvoker for ProcessInvoker {
    async fn invoke(
        &self,
        working_dir: &Path,
        command: &str,
        args: &[String],
    ) -> std::io::Result<i32> {
        debug!("Running {} {:?} in {:?}", command, args, working_dir);

        let status = Command::new(command)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .status()
            .await?;

        debug!("{} finished with {}", command, status);
        Ok(exit_code(status))
    }
}

/// Killed-by-signal has no exit code and maps to -1
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
