//! CLI argument definitions using clap
//!
//! This module defines all command-line arguments for apidocgen.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// apidocgen - API Blueprint documents and supertest suites from JSON API models
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "apidocgen", version, about, long_about = None)]
pub struct Args {
    // =========================================================================
    // POSITIONAL ARGUMENTS
    // =========================================================================

    /// Model files (.json, .yaml, .yml or .toml) holding one or more API groups
    #[arg(
        value_name = "MODEL",
        required_unless_present_any = ["generate_completions", "generate_manpage"],
    )]
    pub models: Vec<PathBuf>,

    // =========================================================================
    // ARTIFACTS
    // =========================================================================

    /// Write the API Blueprint document to FILE ("-" for stdout)
    #[arg(short = 'b', long = "blueprint", value_name = "FILE")]
    pub blueprint: Option<PathBuf>,

    /// Write one test suite per group into DIR (config output_dir, else "test")
    #[arg(short = 't', long = "tests", value_name = "DIR", num_args = 0..=1)]
    pub tests: Option<Option<PathBuf>>,

    /// Write the monitoring configuration to FILE
    #[arg(short = 'm', long = "monitor", value_name = "FILE")]
    pub monitor: Option<PathBuf>,

    /// Check the model files and report every problem found
    #[arg(long = "validate", action = ArgAction::SetTrue)]
    pub validate: bool,

    /// Print the groups and endpoints of the model
    #[arg(short = 'l', long = "list", action = ArgAction::SetTrue)]
    pub list: bool,

    // =========================================================================
    // GENERATION
    // =========================================================================

    /// API host for the blueprint header, monitor config and generated tests
    #[arg(short = 'H', long = "host", value_name = "HOST")]
    pub host: Option<String>,

    /// Variable holding the base URL in generated tests (ignored with --host-literal)
    #[arg(long = "base-url-var", value_name = "NAME")]
    pub base_url_var: Option<String>,

    /// Embed the host as a string literal in generated tests instead of a variable
    #[arg(long = "host-literal", action = ArgAction::SetTrue)]
    pub host_literal: bool,

    /// Extension of generated test files
    #[arg(long = "ext", value_name = "EXT")]
    pub ext: Option<String>,

    /// Application id of the monitoring configuration
    #[arg(long = "app-id", value_name = "ID")]
    pub app_id: Option<u64>,

    /// Replay interval of the monitoring configuration, in seconds
    #[arg(long = "time-interval", value_name = "SECS")]
    pub time_interval: Option<u64>,

    // =========================================================================
    // TROUBLESHOOTING
    // =========================================================================

    /// Output format for structured logging: json (JSON Lines) or text (default)
    #[arg(long = "log-format", value_name = "FORMAT", value_enum)]
    pub log_format: Option<LogFormat>,

    /// Show traceback on error
    #[arg(long = "traceback", action = ArgAction::SetTrue)]
    pub traceback: bool,

    /// Debug mode (implies --traceback)
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,

    /// Generate shell completions for the specified shell
    #[arg(long = "generate-completions", value_name = "SHELL", value_enum, hide = true)]
    pub generate_completions: Option<Shell>,

    /// Generate man page
    #[arg(long = "generate-manpage", action = ArgAction::SetTrue, hide = true)]
    pub generate_manpage: bool,
}

impl Args {
    /// True when no artifact or report was requested
    pub fn no_action(&self) -> bool {
        self.blueprint.is_none()
            && self.tests.is_none()
            && self.monitor.is_none()
            && !self.validate
            && !self.list
    }
}

/// Shell types for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Log format for structured output (CI/CD)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON Lines format for parsing
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("apidocgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_models_required() {
        let err = Args::try_parse_from(["apidocgen"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_completions_need_no_model() {
        let args = parse(&["--generate-completions", "bash"]);
        assert_eq!(args.generate_completions, Some(Shell::Bash));
        assert!(args.models.is_empty());
    }

    #[test]
    fn test_no_action_defaults_to_blueprint() {
        let args = parse(&["monitor.json"]);
        assert!(args.no_action());
        assert_eq!(args.models, vec![PathBuf::from("monitor.json")]);
    }

    #[test]
    fn test_artifact_flags() {
        let args = parse(&[
            "--blueprint", "-",
            "--tests", "out",
            "--monitor", "monitor-config.json",
            "--host", "https://api.example.com",
            "--app-id", "3",
            "--time-interval", "60",
            "a.json", "b.yaml",
        ]);
        assert!(!args.no_action());
        assert_eq!(args.blueprint, Some(PathBuf::from("-")));
        assert_eq!(args.tests, Some(Some(PathBuf::from("out"))));
        assert_eq!(args.monitor, Some(PathBuf::from("monitor-config.json")));
        assert_eq!(args.host.as_deref(), Some("https://api.example.com"));
        assert_eq!(args.app_id, Some(3));
        assert_eq!(args.time_interval, Some(60));
        assert_eq!(args.models.len(), 2);
    }

    #[test]
    fn test_tests_without_directory() {
        let args = parse(&["a.json", "--tests"]);
        assert_eq!(args.tests, Some(None));
    }

    #[test]
    fn test_log_format() {
        let args = parse(&["--log-format", "json", "a.json"]);
        assert_eq!(args.log_format, Some(LogFormat::Json));
        assert!(parse(&["a.json"]).log_format.is_none());
    }
}
