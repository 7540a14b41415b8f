mod build_executor;

pub use build_executor::BuildExecutor;
