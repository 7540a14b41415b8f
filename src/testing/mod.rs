pub mod ports;

pub use ports::RecordingExecutor;
