//! CLI behavior tests
//!
//! Argument handling, listing, validation and error reporting.

mod common;

use common::fixtures::fixture_arg;
use common::{apidocgen, ExitStatus, TEST_HOST};

#[test]
fn test_help() {
    let r = apidocgen(&["--help"]);
    assert_eq!(r.exit_status, ExitStatus::Success);
    assert!(r.contains("--blueprint"));
    assert!(r.contains("--tests"));
    assert!(r.contains("--monitor"));
}

#[test]
fn test_version() {
    let r = apidocgen(&["--version"]);
    assert_eq!(r.exit_status, ExitStatus::Success);
    assert!(r.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_model_is_usage_error() {
    let r = apidocgen(&[]);
    assert_eq!(r.exit_status, ExitStatus::Error);
    assert!(r.stderr.contains("MODEL"));
}

#[test]
fn test_unreadable_model() {
    let r = apidocgen(&["--host", TEST_HOST, "does-not-exist.json"]);
    assert_eq!(r.exit_status, ExitStatus::Error);
    assert!(r.stderr.starts_with("Error: "));
    assert!(r.stdout.is_empty());
}

#[test]
fn test_unparsable_model_names_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let r = apidocgen(&["--host", TEST_HOST, path.to_str().unwrap()]);
    assert_eq!(r.exit_status, ExitStatus::Error);
    assert!(r.stderr.contains("broken.json"));
}

#[test]
fn test_list() {
    let r = apidocgen(&["--list", &fixture_arg("shop.yaml")]);
    assert_eq!(r.exit_status, ExitStatus::Success, "stderr: {}", r.stderr);
    assert!(r.contains("Product Catalog\n"));
    assert!(r.contains("  GET     /products/{id}  Get a product\n"));
    assert!(r.contains("  POST    /products  Create a product\n"));
    assert!(r.contains("OrderHistory\n"));
    // Listing alone produces no blueprint
    assert!(!r.contains("FORMAT: 1A"));
}

#[test]
fn test_validate_clean_model() {
    let r = apidocgen(&["--validate", &fixture_arg("monitor.json"), &fixture_arg("shop.yaml")]);
    assert_eq!(r.exit_status, ExitStatus::Success, "stderr: {}", r.stderr);
    assert_eq!(r.stdout, "3 groups, 4 endpoints: ok\n");
}

#[test]
fn test_validate_reports_every_violation() {
    let r = apidocgen(&["--validate", &fixture_arg("invalid.json")]);
    assert_eq!(r.exit_status, ExitStatus::Invalid);
    assert!(r.contains("<unnamed>: groupName must not be empty"));
    assert!(r.contains("'FETCH' is not a recognized HTTP method"));
    assert!(r.contains("URI placeholder '{thingId}' has no matching query parameter"));
    assert!(r.contains("condition 'total': unknown type 'Between'"));
    assert!(r.contains("condition 'total' targets a missing responseBody"));
}

#[test]
fn test_validate_failure_skips_generation() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("docs.apib");
    let r = apidocgen(&[
        "--validate",
        "--host", TEST_HOST,
        "--blueprint", out.to_str().unwrap(),
        &fixture_arg("invalid.json"),
    ]);
    assert_eq!(r.exit_status, ExitStatus::Invalid);
    assert!(!out.exists());
}

#[test]
fn test_traceback_shows_debug_error() {
    let r = apidocgen(&["--traceback", "--tests", "out", &fixture_arg("bad-condition.json")]);
    assert_eq!(r.exit_status, ExitStatus::Error);
    assert!(r.stderr.contains("KeyPath"));
}

#[test]
fn test_generate_completions() {
    let r = apidocgen(&["--generate-completions", "bash"]);
    assert_eq!(r.exit_status, ExitStatus::Success);
    assert!(r.contains("apidocgen"));
}
