//! Task configuration loading from disk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::domain::{AppError, TaskConfig};

/// File name of the task configuration record.
pub const TASK_CONFIG_FILE: &str = "task_config.json";

/// Default location of the task config: beside the running executable.
pub fn default_config_path() -> Result<PathBuf, AppError> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().ok_or_else(|| {
        AppError::config_error(format!(
            "Cannot locate task config: executable has no parent directory: {}",
            exe.display()
        ))
    })?;
    Ok(dir.join(TASK_CONFIG_FILE))
}

/// Read and parse the task config at `path`.
///
/// The file is read in one call and closed before parsing.
pub fn load_task_config(path: &Path) -> Result<TaskConfig, AppError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::ConfigMissing(path.to_path_buf()),
        _ => AppError::Io(e),
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|e| AppError::ConfigParse {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let config = TaskConfig::from_value(value)?;
    debug!(path = %path.display(), task = config.task(), "Loaded task config");
    Ok(config)
}
