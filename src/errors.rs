//! Error types for apidocgen

use serde_json::Value;
use thiserror::Error;

/// Main error type for apidocgen
#[derive(Error, Debug)]
pub enum ApidocError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    /// A condition's key path does not resolve inside the response body
    #[error("Key path '{key_path}' not found in response body {body}")]
    KeyPath {
        body: Value,
        key_path: String,
    },

    #[error("Unknown condition type '{0}'")]
    UnknownConditionKind(String),

    #[error("Invalid condition at '{key_path}': {reason}")]
    InvalidCondition {
        key_path: String,
        reason: String,
    },

    #[error("Invalid model: {0}")]
    Model(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    Argument(String),
}

impl ApidocError {
    /// Build a key path error from the body being rendered
    pub fn key_path(body: Option<&Value>, key_path: &str) -> Self {
        ApidocError::KeyPath {
            body: body.cloned().unwrap_or(Value::Null),
            key_path: key_path.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApidocError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_path_error_message() {
        let body = json!({"data": {"uid": 1}});
        let err = ApidocError::key_path(Some(&body), "data/name");
        let message = err.to_string();
        assert!(message.contains("data/name"));
        assert!(message.contains("\"uid\":1"));
    }

    #[test]
    fn test_key_path_error_without_body() {
        let err = ApidocError::key_path(None, "data");
        match err {
            ApidocError::KeyPath { body, key_path } => {
                assert_eq!(body, Value::Null);
                assert_eq!(key_path, "data");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_condition_message() {
        let err = ApidocError::UnknownConditionKind("ValueMatch".to_string());
        assert_eq!(err.to_string(), "Unknown condition type 'ValueMatch'");
    }
}
