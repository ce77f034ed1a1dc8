//! Logging utilities for sge-build

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::constants::{EXECUTABLE_PATH, LOG_DIR};

/// Unique log file path for one run: `<exe dir>/logs/<command>_<pid>_<timestamp>.log`
pub fn get_log_file_path(command: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let pid = std::process::id();

    let logs_dir = EXECUTABLE_PATH
        .get()
        .ok_or("EXECUTABLE_PATH not initialized")?
        .parent()
        .ok_or("Cannot get executable parent directory")?
        .join(LOG_DIR);

    std::fs::create_dir_all(&logs_dir)?;

    Ok(logs_dir.join(format!("{command}_{pid}_{timestamp}.log")))
}

/// Create the debug log file for this run
pub fn create_log_file(command: &str) -> Result<std::fs::File, Box<dyn std::error::Error>> {
    let log_path = get_log_file_path(command)?;

    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)?;

    // stdout is reserved for command output such as `plan`
    eprintln!("Log file created: {}", log_path.display());

    Ok(log_file)
}
