use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for build-runner operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Task configuration file does not exist.
    #[error("Task config not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    /// Task configuration file is not well-formed JSON.
    #[error("Failed to parse task config {}: {details}", .path.display())]
    ConfigParse { path: PathBuf, details: String },

    /// Task configuration document is valid JSON but not an object.
    #[error("Task config must be a JSON object")]
    ConfigNotObject,

    /// Recognized field is absent from the task configuration record.
    #[error("Task config is missing field '{0}'")]
    MissingField(&'static str),

    /// Recognized field carries a value of the wrong JSON type.
    #[error("Task config field '{field}' must be {expected}")]
    InvalidField { field: &'static str, expected: &'static str },

    /// External build executor failed.
    #[error("Build executor error running '{command}': {details}")]
    Executor { command: String, details: String },

    /// Build result could not be serialized.
    #[error("Failed to serialize build result: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
