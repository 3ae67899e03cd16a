//! Configuration

mod config;

pub use config::{Config, DefaultsConfig, MonitorDefaults, CONFIG_FILE_NAME, PROJECT_CONFIG_FILE_NAME};
