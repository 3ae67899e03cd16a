//! String utilities
//!
//! Naming and quoting helpers shared by the generators.

use once_cell::sync::Lazy;
use regex::Regex;

/// Cached regex for runs of whitespace
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Invalid whitespace regex")
});

/// Convert a group name to lower-case kebab case
///
/// Only whitespace becomes a dash. Word boundaries inside `OrderHistory`
/// or `order_history` are kept as written.
///
/// # Examples
/// ```
/// use apidocgen::strings::kebab_case;
/// assert_eq!(kebab_case("Monitor"), "monitor");
/// assert_eq!(kebab_case("User Profile"), "user-profile");
/// assert_eq!(kebab_case("OrderHistory"), "orderhistory");
/// ```
pub fn kebab_case(s: &str) -> String {
    WHITESPACE_RE.replace_all(s.trim(), "-").to_lowercase()
}

/// Quote a string as a JavaScript/TypeScript string literal
///
/// JSON string syntax is a subset of JS string syntax, so serde_json does
/// the escaping.
pub fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}

/// Prefix every line after the first with `indent`
///
/// Used to re-indent multi-line text that is spliced in after some
/// already-indented prefix.
pub fn indent_continuation(text: &str, indent: &str) -> String {
    text.lines()
        .collect::<Vec<_>>()
        .join(&format!("\n{}", indent))
}
