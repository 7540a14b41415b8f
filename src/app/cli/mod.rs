//! CLI Adapter.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::app::logging::init_tracing;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "build-runner")]
#[command(version)]
#[command(
    about = "Load a task config, run the build executor, and print its JSON result",
    long_about = None
)]
struct Cli {
    /// Task config file (defaults to task_config.json beside this executable)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log pipeline progress to stderr
    #[arg(short, long)]
    verbose: bool,
    /// Executor program and its arguments
    #[arg(
        value_name = "PROGRAM",
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    command: Vec<OsString>,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run_build(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_build(cli: Cli) -> Result<(), AppError> {
    let mut command = cli.command.into_iter();
    let program = command
        .next()
        .ok_or_else(|| AppError::config_error("No executor program given"))?;
    crate::app::api::build(cli.config, program, command.collect()).map(|_| ())
}
