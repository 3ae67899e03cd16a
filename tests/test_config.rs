//! Configuration tests

mod common;

use common::fixtures::fixture_arg;
use common::{apidocgen_with_env, ExitStatus, MockEnvironment, TEST_HOST};

#[test]
fn test_invalid_config_is_a_warning() {
    let env = MockEnvironment::new();
    env.write_config("[defaults\nhost =");

    let r = apidocgen_with_env(&["--host", TEST_HOST, &fixture_arg("monitor.json")], &env);
    assert_eq!(r.exit_status, ExitStatus::Success);
    assert!(r.stderr.contains("Warning: Failed to load config"));
    assert!(r.stdout.starts_with("FORMAT: 1A\n"));
}

#[test]
fn test_project_config_overrides_user_config() {
    let env = MockEnvironment::new();
    env.write_config("[defaults]\nhost = \"https://user.example.com\"\n");
    env.write_project_config("[defaults]\nhost = \"https://project.example.com\"\n");

    let r = apidocgen_with_env(&[&fixture_arg("monitor.json")], &env);
    assert_eq!(r.exit_status, ExitStatus::Success, "stderr: {}", r.stderr);
    assert!(r.stdout.starts_with("FORMAT: 1A\nHOST: https://project.example.com\n"));
}

#[test]
fn test_flag_overrides_config() {
    let env = MockEnvironment::new();
    env.write_project_config("[defaults]\nhost = \"https://project.example.com\"\n");

    let r = apidocgen_with_env(&["--host", TEST_HOST, &fixture_arg("monitor.json")], &env);
    assert_eq!(r.exit_status, ExitStatus::Success, "stderr: {}", r.stderr);
    assert!(r.stdout.starts_with(&format!("FORMAT: 1A\nHOST: {}\n", TEST_HOST)));
}

#[test]
fn test_json_log_format() {
    let mut env = MockEnvironment::new();
    env.set_env("RUST_LOG", "info");

    let r = apidocgen_with_env(
        &["--log-format", "json", "--tests", "out", &fixture_arg("monitor.json")],
        &env,
    );
    assert_eq!(r.exit_status, ExitStatus::Success, "stderr: {}", r.stderr);

    let line = r.stderr.lines().find(|l| l.contains("Generated test sources")).unwrap();
    let event: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["level"], "INFO");
}

#[test]
fn test_text_log_is_plain_when_piped() {
    let mut env = MockEnvironment::new();
    env.set_env("RUST_LOG", "info");

    let r = apidocgen_with_env(&["--tests", "out", &fixture_arg("monitor.json")], &env);
    assert_eq!(r.exit_status, ExitStatus::Success, "stderr: {}", r.stderr);
    assert!(r.stderr.contains("Generated test sources"));
    assert!(!r.stderr.contains('\x1b'));
}
