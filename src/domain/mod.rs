pub mod build_request;
pub mod error;
pub mod task_config;

pub use build_request::BuildRequest;
pub use error::AppError;
pub use task_config::TaskConfig;
