pub mod load_task_config;

pub use load_task_config::{TASK_CONFIG_FILE, default_config_path, load_task_config};
