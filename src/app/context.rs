use crate::ports::BuildExecutor;

/// Application context holding dependencies for command execution.
pub struct AppContext<E: BuildExecutor> {
    executor: E,
}

impl<E: BuildExecutor> AppContext<E> {
    /// Create a new application context.
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Get a reference to the build executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }
}
