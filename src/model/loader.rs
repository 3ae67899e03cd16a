//! Model file loading
//!
//! Supports JSON, YAML and TOML model files. A file holds a single group,
//! a list of groups, or a table with an `apis` list.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::types::ApiDoc;
use crate::errors::ApidocError;

/// Maximum model file size (16 MB)
const MAX_MODEL_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// `{ "apis": [...] }`, the only shape TOML can express for several groups
#[derive(Deserialize)]
struct WrappedModel {
    apis: Vec<ApiDoc>,
}

/// Top-level layout of a model file
#[derive(Debug, Clone, Copy, PartialEq)]
enum ModelShape {
    Many,
    Wrapped,
    One,
}

impl ModelShape {
    fn of(value: &Value) -> Self {
        match value {
            Value::Array(_) => ModelShape::Many,
            Value::Object(map) if map.contains_key("apis") && !map.contains_key("groupName") => ModelShape::Wrapped,
            _ => ModelShape::One,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ModelFormat {
    Json,
    Yaml,
    Toml,
}

impl ModelFormat {
    /// Unknown extensions are read as YAML, which also accepts JSON
    fn from_extension(extension: &str) -> Self {
        match extension.to_lowercase().as_str() {
            "json" => ModelFormat::Json,
            "toml" => ModelFormat::Toml,
            _ => ModelFormat::Yaml,
        }
    }

    fn decode<T: DeserializeOwned>(self, content: &str) -> Result<T, String> {
        match self {
            ModelFormat::Json => serde_json::from_str(content)
                .map_err(|e| format!("Failed to parse JSON model: {}", e)),
            ModelFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| format!("Failed to parse YAML model: {}", e)),
            ModelFormat::Toml => toml::from_str(content)
                .map_err(|e| format!("Failed to parse TOML model: {}", e)),
        }
    }
}

/// Load every API group declared in a model file
pub fn load_docs(path: &Path) -> Result<Vec<ApiDoc>, ApidocError> {
    let metadata = fs::metadata(path)?;

    let file_size = metadata.len();
    if file_size > MAX_MODEL_FILE_SIZE {
        return Err(ApidocError::Argument(format!(
            "Model file too large: {} bytes (max {} bytes)",
            file_size, MAX_MODEL_FILE_SIZE
        )));
    }

    let content = fs::read_to_string(path)?;

    let extension = path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    let docs = parse_docs(&content, extension)
        .map_err(|e| ApidocError::Parse(format!("{}: {}", path.display(), e)))?;

    debug!(path = %path.display(), groups = docs.len(), "Loaded model file");
    Ok(docs)
}

/// Parse model content, choosing the format from a file extension
///
/// The top-level shape is read first, then the content is decoded straight
/// into that shape so errors keep their field and line.
pub fn parse_docs(content: &str, extension: &str) -> Result<Vec<ApiDoc>, String> {
    let format = ModelFormat::from_extension(extension);

    let docs = match ModelShape::of(&format.decode::<Value>(content)?) {
        ModelShape::Many => format.decode::<Vec<ApiDoc>>(content)?,
        ModelShape::Wrapped => format.decode::<WrappedModel>(content)?.apis,
        ModelShape::One => vec![format.decode::<ApiDoc>(content)?],
    };

    Ok(docs)
}
