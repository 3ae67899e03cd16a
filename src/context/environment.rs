//! Environment struct (terminal, working directory, config location)

use std::path::PathBuf;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "APIDOCGEN_CONFIG_DIR";

/// Execution environment
#[derive(Debug, Clone)]
pub struct Environment {
    /// Whether log output goes to a terminal
    pub stderr_isatty: bool,
    pub program_name: String,
    /// Where project config files are looked up
    pub cwd: PathBuf,
    /// Explicit config directory, from `APIDOCGEN_CONFIG_DIR`
    pub config_dir: Option<PathBuf>,
}

impl Environment {
    /// Capture the environment of the current process
    pub fn init() -> Self {
        Self::default()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            stderr_isatty: atty::is(atty::Stream::Stderr),
            program_name: env!("CARGO_PKG_NAME").to_string(),
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_dir: std::env::var_os(CONFIG_DIR_ENV)
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
        }
    }
}
