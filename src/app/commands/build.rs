//! Build command: load the task config, run the executor, emit its result.

use std::io::Write;
use std::path::PathBuf;

use serde_json::Value;
use tracing::info;

use crate::app::AppContext;
use crate::app::config::load_task_config;
use crate::app::output::write_result;
use crate::domain::{AppError, BuildRequest};
use crate::ports::BuildExecutor;

/// Options for the build command.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Path to the task configuration record.
    pub config_path: PathBuf,
}

/// Execute the build pipeline.
///
/// Steps run strictly in order; a failing step ends the pipeline, so a bad
/// config never reaches the executor and a failed build writes nothing to `out`.
pub fn execute<E: BuildExecutor, W: Write>(
    ctx: &AppContext<E>,
    options: &BuildOptions,
    out: &mut W,
) -> Result<Value, AppError> {
    let config = load_task_config(&options.config_path)?;
    let request = BuildRequest::from_task_config(&config);

    info!(
        task = %request.task,
        working_directory = %request.working_directory.display(),
        incremental = request.incremental,
        "Starting build"
    );
    let result = ctx.executor().execute(&request)?;

    write_result(out, &result)?;
    info!("Build result emitted");
    Ok(result)
}
