//! Config file handling

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::context::Environment;
use crate::errors::ApidocError;

/// Name of the user config file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Name of the project config file looked up in the working directory
pub const PROJECT_CONFIG_FILE_NAME: &str = "apidocgen.toml";

/// Generation defaults, the `[defaults]` table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultsConfig {
    /// Host used in the blueprint header and as the monitor host
    pub host: Option<String>,
    /// Name of the variable holding the base URL in generated tests
    pub base_url_binding: Option<String>,
    /// Extension of generated test files
    pub test_extension: Option<String>,
    /// Directory for generated test files
    pub output_dir: Option<PathBuf>,
    /// Replaces the copyright banner at the top of generated tests
    pub license_header: Option<String>,
}

/// Monitoring defaults, the `[monitor]` table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonitorDefaults {
    pub app_id: Option<u64>,
    pub time_interval: Option<u64>,
}

/// apidocgen configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub defaults: DefaultsConfig,
    pub monitor: MonitorDefaults,
}

impl Config {
    /// Load configuration from the user and project config files (TOML format)
    ///
    /// Keys set in the project file win over the user file.
    pub fn load(env: &Environment) -> Result<Self, ApidocError> {
        let config_dir = env.config_dir.clone().unwrap_or_else(Self::default_config_dir);
        let mut config = Self::default();

        for path in [config_dir.join(CONFIG_FILE_NAME), env.cwd.join(PROJECT_CONFIG_FILE_NAME)] {
            if let Some(table) = Self::read_file(&path)? {
                debug!(path = %path.display(), "Loaded config file");
                config.merge(&table);
            }
        }

        Ok(config)
    }

    /// Parse a single config document
    pub fn from_toml_str(content: &str) -> Result<Self, ApidocError> {
        let table: toml::Value = toml::from_str(content)
            .map_err(|e| ApidocError::Config(format!("Invalid config TOML: {}", e)))?;
        let mut config = Self::default();
        config.merge(&table);
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Option<toml::Value>, ApidocError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ApidocError::Config(format!("Failed to read {}: {}", path.display(), e)))?;

        toml::from_str(&content)
            .map(Some)
            .map_err(|e| ApidocError::Config(format!("Invalid config TOML in {}: {}", path.display(), e)))
    }

    /// Overlay the keys present in `toml` onto this config
    fn merge(&mut self, toml: &toml::Value) {
        if let Some(defaults) = toml.get("defaults") {
            let str_key = |name: &str| defaults.get(name).and_then(|v| v.as_str()).map(String::from);

            if let Some(host) = str_key("host") {
                self.defaults.host = Some(host);
            }
            if let Some(binding) = str_key("base_url_binding") {
                self.defaults.base_url_binding = Some(binding);
            }
            if let Some(ext) = str_key("test_extension") {
                self.defaults.test_extension = Some(ext);
            }
            if let Some(dir) = str_key("output_dir") {
                self.defaults.output_dir = Some(PathBuf::from(dir));
            }
            if let Some(header) = str_key("license_header") {
                self.defaults.license_header = Some(header);
            }
        }

        if let Some(monitor) = toml.get("monitor") {
            let int_key = |name: &str| {
                monitor.get(name)
                    .and_then(|v| v.as_integer())
                    .and_then(|n| u64::try_from(n).ok())
            };

            if let Some(app_id) = int_key("app_id") {
                self.monitor.app_id = Some(app_id);
            }
            if let Some(interval) = int_key("time_interval") {
                self.monitor.time_interval = Some(interval);
            }
        }
    }

    /// Get the default config directory
    fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join("apidocgen"))
            .unwrap_or_else(|| PathBuf::from(".apidocgen"))
    }
}
