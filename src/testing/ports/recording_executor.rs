use std::sync::Mutex;

use serde_json::Value;

use crate::domain::{AppError, BuildRequest};
use crate::ports::BuildExecutor;

/// Fake executor that records every request and answers with a canned result.
pub struct RecordingExecutor {
    pub requests: Mutex<Vec<BuildRequest>>,
    response: Result<Value, String>,
}

impl RecordingExecutor {
    pub fn returning(result: Value) -> Self {
        Self { requests: Mutex::new(Vec::new()), response: Ok(result) }
    }

    pub fn failing(details: &str) -> Self {
        Self { requests: Mutex::new(Vec::new()), response: Err(details.to_string()) }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl BuildExecutor for RecordingExecutor {
    fn execute(&self, request: &BuildRequest) -> Result<Value, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        self.response.clone().map_err(|details| AppError::Executor {
            command: "recording-executor".to_string(),
            details,
        })
    }
}
