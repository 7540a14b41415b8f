use serde_json::Value;

use crate::domain::{AppError, BuildRequest};

/// External collaborator that performs the actual build.
///
/// What happens inside (phase spawning, test loops, file writes) is opaque
/// to the runner. The returned value is emitted as-is.
pub trait BuildExecutor {
    /// Run one build. Called exactly once per process, never retried.
    fn execute(&self, request: &BuildRequest) -> Result<Value, AppError>;
}
