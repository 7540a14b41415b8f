//! Task configuration record.
//!
//! The record is kept verbatim so it can be handed to the executor in full,
//! alongside the recognized fields extracted from it.

use std::path::{Path, PathBuf};

use serde_json::{Map, Number, Value};

use crate::domain::AppError;

/// One build invocation's parameters, as loaded from `task_config.json`.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskConfig {
    raw: Map<String, Value>,
    task: String,
    working_directory: PathBuf,
    enable_test_loop: bool,
    max_test_iterations: Number,
    flowise_flow: Value,
    project_type: String,
    incremental: bool,
}

impl TaskConfig {
    /// Build a record from a parsed JSON document.
    ///
    /// Every recognized field must be present with the expected JSON type.
    /// Values are never defaulted or coerced; unknown keys are preserved.
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        let Value::Object(raw) = value else {
            return Err(AppError::ConfigNotObject);
        };

        Ok(Self {
            task: string_field(&raw, "task")?,
            working_directory: PathBuf::from(string_field(&raw, "working_directory")?),
            enable_test_loop: bool_field(&raw, "enable_test_loop")?,
            max_test_iterations: number_field(&raw, "max_test_iterations")?,
            flowise_flow: field(&raw, "flowise_flow")?.clone(),
            project_type: string_field(&raw, "project_type")?,
            incremental: bool_field(&raw, "incremental")?,
            raw,
        })
    }

    /// The full record exactly as loaded.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    pub fn enable_test_loop(&self) -> bool {
        self.enable_test_loop
    }

    /// Iteration bound, passed through as written (no range or integer check).
    pub fn max_test_iterations(&self) -> &Number {
        &self.max_test_iterations
    }

    /// Mode selector, passed through opaquely.
    pub fn flowise_flow(&self) -> &Value {
        &self.flowise_flow
    }

    pub fn project_type(&self) -> &str {
        &self.project_type
    }

    pub fn incremental(&self) -> bool {
        self.incremental
    }
}

fn field<'a>(raw: &'a Map<String, Value>, name: &'static str) -> Result<&'a Value, AppError> {
    raw.get(name).ok_or(AppError::MissingField(name))
}

fn string_field(raw: &Map<String, Value>, name: &'static str) -> Result<String, AppError> {
    field(raw, name)?
        .as_str()
        .map(str::to_string)
        .ok_or(AppError::InvalidField { field: name, expected: "a string" })
}

fn bool_field(raw: &Map<String, Value>, name: &'static str) -> Result<bool, AppError> {
    field(raw, name)?.as_bool().ok_or(AppError::InvalidField { field: name, expected: "a boolean" })
}

fn number_field(raw: &Map<String, Value>, name: &'static str) -> Result<Number, AppError> {
    match field(raw, name)? {
        Value::Number(number) => Ok(number.clone()),
        _ => Err(AppError::InvalidField { field: name, expected: "a number" }),
    }
}
