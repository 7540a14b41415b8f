//! API Facade for the application.
//!
//! Glues together context creation and command execution.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use serde_json::Value;

use crate::adapters::CommandBuildExecutor;
use crate::app::config::default_config_path;
use crate::app::{AppContext, commands};

pub use crate::app::commands::build::BuildOptions;
pub use crate::domain::AppError;

/// Run one build through an external executor program and print its result to stdout.
///
/// # Arguments
/// * `config_path` - Task config location; defaults to `task_config.json` beside the executable
/// * `program` - Executor program to spawn
/// * `args` - Arguments passed to the executor program
pub fn build(
    config_path: Option<PathBuf>,
    program: OsString,
    args: Vec<OsString>,
) -> Result<Value, AppError> {
    let config_path = match config_path {
        Some(path) => path,
        None => default_config_path()?,
    };

    let ctx = AppContext::new(CommandBuildExecutor::new(program, args));
    let options = BuildOptions { config_path };
    commands::build::execute(&ctx, &options, &mut io::stdout().lock())
}
