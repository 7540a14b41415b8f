//! build-runner: hand a task configuration record to an external build executor.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{BuildOptions, build};
pub use domain::{AppError, BuildRequest, TaskConfig};
pub use ports::BuildExecutor;
