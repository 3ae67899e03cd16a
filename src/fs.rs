//! Filesystem utilities
//!
//! Functions for generated file naming and sanitization.

use sanitize_filename::Options as SanitizeOptions;

use crate::strings::kebab_case;

/// Default extension of generated test files
pub const DEFAULT_TEST_EXTENSION: &str = "ts";

/// File name of the generated test suite for a group
///
/// `test-<kebab-cased group>-controller.<ext>`, sanitized so that group
/// names containing path separators cannot escape the output directory.
///
/// # Examples
/// ```
/// use apidocgen::fs::test_file_name;
/// assert_eq!(test_file_name("User Profile", "ts"), "test-user-profile-controller.ts");
/// ```
pub fn test_file_name(group_name: &str, extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    sanitize_filename(&format!("test-{}-controller.{}", kebab_case(group_name), extension))
}

/// Sanitize a filename for safe filesystem usage
///
/// Uses the sanitize-filename crate for cross-platform safe filenames.
/// Replaces invalid characters and Windows reserved names.
pub fn sanitize_filename(name: &str) -> String {
    sanitize_filename::sanitize_with_options(name, SanitizeOptions {
        replacement: "_",
        windows: true,
        truncate: true,
    })
}
