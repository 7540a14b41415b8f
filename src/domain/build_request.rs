//! Named parameters handed to the build executor.

use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::domain::TaskConfig;

/// One invocation of the external build executor.
///
/// Field names follow the executor's parameter names, which do not always
/// match the task config keys (`flowise_flow` becomes `flowise_mode`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildRequest {
    pub task: String,
    pub working_directory: PathBuf,
    /// The full task config record, passed again alongside the extracted fields.
    pub task_config: Map<String, Value>,
    pub enable_test_loop: bool,
    pub max_test_iterations: Number,
    pub flowise_mode: Value,
    pub project_type: String,
    pub incremental: bool,
}

impl BuildRequest {
    pub fn from_task_config(config: &TaskConfig) -> Self {
        Self {
            task: config.task().to_string(),
            working_directory: config.working_directory().to_path_buf(),
            task_config: config.raw().clone(),
            enable_test_loop: config.enable_test_loop(),
            max_test_iterations: config.max_test_iterations().clone(),
            flowise_mode: config.flowise_flow().clone(),
            project_type: config.project_type().to_string(),
            incremental: config.incremental(),
        }
    }
}
