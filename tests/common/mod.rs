//! Shared testing utilities for build-runner CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A well-formed task config with every recognized field.
#[allow(dead_code)]
pub const SAMPLE_CONFIG: &str = r#"{
    "task": "build X",
    "working_directory": "/tmp/proj",
    "enable_test_loop": true,
    "max_test_iterations": 3,
    "flowise_flow": "default",
    "project_type": "web",
    "incremental": false
}"#;

/// Testing harness providing an isolated directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory the CLI runs in; executor scripts write their files here.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Path of the task config inside the work directory.
    pub fn config_path(&self) -> PathBuf {
        self.work_dir().join("task_config.json")
    }

    /// Write the task config file.
    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write task config");
    }

    /// Build a command for invoking the compiled binary with the test config and
    /// a `sh -c` script as the build executor.
    pub fn cli_with_executor(&self, script: &str) -> Command {
        self.cli_with_flags_and_executor(&[], script)
    }

    /// Like `cli_with_executor`, passing extra runner flags before the executor command.
    pub fn cli_with_flags_and_executor(&self, flags: &[&str], script: &str) -> Command {
        let mut cmd = Command::cargo_bin("build-runner").expect("Failed to locate binary");
        cmd.current_dir(self.work_dir())
            .env_remove("RUST_LOG")
            .args(flags)
            .arg("--config")
            .arg(self.config_path())
            .args(["--", "sh", "-c", script]);
        cmd
    }

    /// Read a file the executor script wrote into the work directory.
    pub fn read_work_file(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir().join(name))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e))
    }

    /// Whether the executor script created `name` in the work directory.
    pub fn work_file_exists(&self, name: &str) -> bool {
        self.work_dir().join(name).exists()
    }
}
