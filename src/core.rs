use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info};

use crate::cli::{Args, Shell};
use crate::config::Config;
use crate::context::Environment;
use crate::errors::ApidocError;
use crate::fs::DEFAULT_TEST_EXTENSION;
use crate::generate::test_source::DEFAULT_LICENSE_HEADER;
use crate::generate::{render_blueprint, BaseUrl, MonitorConfig, TestSourceOptions};
use crate::logging;
use crate::model::{load_docs, validate_docs, ApiDoc};
use crate::output::{write_monitor_config, write_test_sources, write_text, STDOUT_PATH};
use crate::status::ExitStatus;

/// Test directory used by a bare `--tests` when the config names none
pub const DEFAULT_TEST_DIR: &str = "test";

/// Replay interval of the monitoring configuration when neither flag nor config sets one
pub const DEFAULT_TIME_INTERVAL: u64 = 60;

/// Main entry point for the CLI.
///
/// Handles argument parsing, configuration loading, and dispatches
/// to the requested generators.
pub fn run(args: Vec<String>, mut env: Environment) -> ExitStatus {
    if let Some(name) = args.first() {
        if let Some(basename) = Path::new(name).file_stem() {
            env.program_name = basename.to_string_lossy().to_string();
        }
    }

    let config = match Config::load(&env) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {}", e);
            Config::default()
        }
    };

    let parsed = match Args::try_parse_from(&args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    let traceback = parsed.traceback || parsed.debug;
    logging::init(parsed.log_format.unwrap_or_default(), parsed.debug, env.stderr_isatty);

    if let Some(shell) = parsed.generate_completions {
        generate_completions(shell);
        return ExitStatus::Success;
    }

    if parsed.generate_manpage {
        return match generate_manpage() {
            Ok(()) => ExitStatus::Success,
            Err(e) => handle_error(e, traceback),
        };
    }

    match program(parsed, &config, &env) {
        Ok(status) => status,
        Err(e) => handle_error(e, traceback),
    }
}

/// Load the models and produce every requested artifact
pub fn program(args: Args, config: &Config, env: &Environment) -> Result<ExitStatus, ApidocError> {
    if args.debug {
        debug!(?args, program = %env.program_name, "Parsed arguments");
    }

    let docs = load_models(&args.models)?;

    if args.validate {
        let violations = validate_docs(&docs);
        if !violations.is_empty() {
            let mut report = String::new();
            for violation in &violations {
                let _ = writeln!(report, "{}", violation);
            }
            write_text(Path::new(STDOUT_PATH), &report)?;
            return Ok(ExitStatus::Invalid);
        }

        let endpoints: usize = docs.iter().map(|doc| doc.descriptions.len()).sum();
        write_text(
            Path::new(STDOUT_PATH),
            &format!("{} groups, {} endpoints: ok\n", docs.len(), endpoints),
        )?;
    }

    if args.list {
        write_text(Path::new(STDOUT_PATH), &list_endpoints(&docs))?;
    }

    let host = args.host.clone().or_else(|| config.defaults.host.clone());

    let blueprint_path = match &args.blueprint {
        Some(path) => Some(path.clone()),
        None if args.no_action() => Some(PathBuf::from(STDOUT_PATH)),
        None => None,
    };
    if let Some(path) = blueprint_path {
        let host = require_host(host.as_deref(), "the blueprint")?;
        write_text(&path, &render_blueprint(host, &docs)?)?;
    }

    if let Some(dir) = &args.tests {
        let dir = dir.clone()
            .or_else(|| config.defaults.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEST_DIR));
        let options = test_source_options(&args, config, host.as_deref())?;
        let extension = args.ext.as_deref()
            .or(config.defaults.test_extension.as_deref())
            .unwrap_or(DEFAULT_TEST_EXTENSION);

        let written = write_test_sources(&dir, &docs, &options, extension)?;
        info!(count = written.len(), dir = %dir.display(), "Generated test sources");
    }

    if let Some(path) = &args.monitor {
        let host = require_host(host.as_deref(), "the monitor config")?;
        let app_id = args.app_id.or(config.monitor.app_id).ok_or_else(|| {
            ApidocError::Argument("the monitor config needs an application id: pass --app-id or set monitor.app_id".to_string())
        })?;
        let time_interval = args.time_interval
            .or(config.monitor.time_interval)
            .unwrap_or(DEFAULT_TIME_INTERVAL);

        write_monitor_config(path, &MonitorConfig::new(app_id, host, time_interval, &docs))?;
    }

    Ok(ExitStatus::Success)
}

/// Load every model file, keeping file then group order
fn load_models(paths: &[PathBuf]) -> Result<Vec<ApiDoc>, ApidocError> {
    let mut docs = Vec::new();
    for path in paths {
        docs.extend(load_docs(path)?);
    }
    Ok(docs)
}

fn require_host<'a>(host: Option<&'a str>, artifact: &str) -> Result<&'a str, ApidocError> {
    host.ok_or_else(|| {
        ApidocError::Argument(format!("{} needs a host: pass --host or set defaults.host", artifact))
    })
}

fn test_source_options(args: &Args, config: &Config, host: Option<&str>) -> Result<TestSourceOptions, ApidocError> {
    let base_url = if args.host_literal {
        BaseUrl::Host(require_host(host, "--host-literal")?.to_string())
    } else {
        match args.base_url_var.clone().or_else(|| config.defaults.base_url_binding.clone()) {
            Some(name) => BaseUrl::Binding(name),
            None => BaseUrl::default(),
        }
    };

    Ok(TestSourceOptions {
        base_url,
        license_header: config.defaults.license_header.clone()
            .unwrap_or_else(|| DEFAULT_LICENSE_HEADER.to_string()),
    })
}

/// One line per group followed by its endpoints
fn list_endpoints(docs: &[ApiDoc]) -> String {
    let mut out = String::new();
    for doc in docs {
        let _ = writeln!(out, "{}", doc.group_name);
        for desc in &doc.descriptions {
            let _ = writeln!(out, "  {:<7} {}  {}", desc.method.to_uppercase(), desc.uri, desc.description);
        }
    }
    out
}

fn handle_error(error: ApidocError, traceback: bool) -> ExitStatus {
    if traceback {
        eprintln!("Error: {:?}", error);
    } else {
        eprintln!("Error: {}", error);
    }

    ExitStatus::Error
}

fn generate_completions(shell: Shell) {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as ClapShell};

    let mut cmd = Args::command();
    let shell = match shell {
        Shell::Bash => ClapShell::Bash,
        Shell::Zsh => ClapShell::Zsh,
        Shell::Fish => ClapShell::Fish,
        Shell::PowerShell => ClapShell::PowerShell,
        Shell::Elvish => ClapShell::Elvish,
    };

    generate(shell, &mut cmd, "apidocgen", &mut std::io::stdout());
}

fn generate_manpage() -> Result<(), ApidocError> {
    use clap::CommandFactory;

    let man = clap_mangen::Man::new(Args::command());
    man.render(&mut std::io::stdout())?;
    Ok(())
}
