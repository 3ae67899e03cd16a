//! Model invariant checks
//!
//! Rendering is permissive; these checks let a caller reject a model up
//! front. Key path resolution is left to the renderer since it needs the
//! response body walk anyway.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{ApiDoc, ApiDescription, ConditionKind};
use crate::http;

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([^{}]+)\}").expect("Invalid placeholder regex")
});

/// A single invariant violation, located by group and endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub group: String,
    pub endpoint: Option<String>,
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.endpoint {
            Some(endpoint) => write!(f, "{} / {}: {}", self.group, endpoint, self.message),
            None => write!(f, "{}: {}", self.group, self.message),
        }
    }
}

/// Check every group and collect all violations
pub fn validate_docs(docs: &[ApiDoc]) -> Vec<Violation> {
    docs.iter().flat_map(validate_doc).collect()
}

/// Check one group
pub fn validate_doc(doc: &ApiDoc) -> Vec<Violation> {
    let mut violations = Vec::new();

    if doc.group_name.trim().is_empty() {
        violations.push(Violation {
            group: "<unnamed>".to_string(),
            endpoint: None,
            message: "groupName must not be empty".to_string(),
        });
    }

    for description in &doc.descriptions {
        for message in validate_description(description) {
            violations.push(Violation {
                group: doc.group_name.clone(),
                endpoint: Some(description.description.clone()),
                message,
            });
        }
    }

    violations
}

fn validate_description(desc: &ApiDescription) -> Vec<String> {
    let mut messages = Vec::new();

    if desc.description.trim().is_empty() {
        messages.push("description must not be empty".to_string());
    }

    if !http::is_standard(&desc.method) {
        messages.push(format!("'{}' is not a recognized HTTP method", desc.method));
    }

    for placeholder in placeholders(&desc.uri) {
        if !desc.query_parameters().iter().any(|p| p.key == placeholder) {
            messages.push(format!("URI placeholder '{{{}}}' has no matching query parameter", placeholder));
        }
    }

    for condition in desc.conditions() {
        match &condition.kind {
            ConditionKind::ValueRange => {
                if let Err(reason) = condition.bounds() {
                    messages.push(format!("condition '{}': {}", condition.key_path, reason));
                }
            }
            ConditionKind::Unknown(name) => {
                messages.push(format!("condition '{}': unknown type '{}'", condition.key_path, name));
            }
            _ => {}
        }

        if desc.response_body.is_none() {
            messages.push(format!("condition '{}' targets a missing responseBody", condition.key_path));
        }
    }

    messages
}

/// Placeholder names in a URI template, in order of appearance
pub fn placeholders(uri: &str) -> Vec<&str> {
    PLACEHOLDER_RE.captures_iter(uri)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}
