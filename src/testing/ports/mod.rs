mod recording_executor;

pub use recording_executor::RecordingExecutor;
