//! Document model types
//!
//! An [`ApiDoc`] groups the endpoint contracts of one controller. Field names
//! on the wire are camelCase, e.g.
//!
//! ```json
//! {
//!   "groupName": "Monitor",
//!   "descriptions": [{
//!     "description": "List users",
//!     "method": "GET",
//!     "uri": "/products?{pid}",
//!     "queryParameters": [{"key": "pid", "example": 5, "type": "number", "description": "Product id"}],
//!     "responseBody": {"data": {"users": []}},
//!     "additionalConditions": [{"keyPath": "data/total", "type": "Ignore"}]
//!   }]
//! }
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One logical controller/group of endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDoc {
    /// Group heading, also used to name the generated test file
    pub group_name: String,
    /// Endpoint contracts, rendered in order
    pub descriptions: Vec<ApiDescription>,
}

/// One endpoint's contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDescription {
    /// Short description, used as endpoint heading and test case name
    pub description: String,

    /// Longer description for the action heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_description: Option<String>,

    /// HTTP method (GET, POST, etc.)
    pub method: String,

    /// URI template, may contain `{name}` placeholders
    pub uri: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_parameters: Option<Vec<QueryParameter>>,

    /// Request headers, in declaration order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_headers: Option<IndexMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_body: Option<Value>,

    /// Overrides for the assertions generated from `response_body`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_conditions: Option<Vec<Condition>>,
}

impl ApiDescription {
    /// Create a description with only the required fields set
    pub fn new(description: impl Into<String>, method: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            detail_description: None,
            method: method.into(),
            uri: uri.into(),
            query_parameters: None,
            request_headers: None,
            request_body: None,
            response_body: None,
            additional_conditions: None,
        }
    }

    /// Heading for the action section, falling back to `description`
    pub fn detail_or_description(&self) -> &str {
        self.detail_description.as_deref().unwrap_or(&self.description)
    }

    pub fn query_parameters(&self) -> &[QueryParameter] {
        self.query_parameters.as_deref().unwrap_or(&[])
    }

    pub fn conditions(&self) -> &[Condition] {
        self.additional_conditions.as_deref().unwrap_or(&[])
    }
}

/// A documented query/URI parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryParameter {
    pub key: String,
    pub example: ExampleValue,
    /// Type name, suffixed with `?` when the parameter is optional
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
}

impl QueryParameter {
    pub fn is_optional(&self) -> bool {
        self.type_name.ends_with('?')
    }

    /// Declared type without the optional marker
    pub fn base_type(&self) -> &str {
        self.type_name.strip_suffix('?').unwrap_or(&self.type_name)
    }
}

/// Example value of a parameter: either a number or free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExampleValue {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ExampleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64 Display drops a zero fraction: 5.0 prints as 5
            ExampleValue::Number(n) => match n.as_f64() {
                Some(float) if n.is_f64() => write!(f, "{}", float),
                _ => write!(f, "{}", n),
            },
            ExampleValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ExampleValue {
    fn from(n: i64) -> Self {
        ExampleValue::Number(n.into())
    }
}

impl From<&str> for ExampleValue {
    fn from(s: &str) -> Self {
        ExampleValue::Text(s.to_string())
    }
}

/// A path-targeted override of one generated assertion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Slash-separated path into the response body, e.g. `data/users/0/uid`
    pub key_path: String,

    #[serde(rename = "type")]
    pub kind: ConditionKind,

    /// `[low, high]`, required for `ValueRange`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_range: Option<Vec<f64>>,
}

impl Condition {
    pub fn new(key_path: impl Into<String>, kind: ConditionKind) -> Self {
        Self {
            key_path: key_path.into(),
            kind,
            value_range: None,
        }
    }

    pub fn range(key_path: impl Into<String>, low: f64, high: f64) -> Self {
        Self {
            key_path: key_path.into(),
            kind: ConditionKind::ValueRange,
            value_range: Some(vec![low, high]),
        }
    }

    /// Validated `(low, high)` bounds of a `ValueRange` condition
    pub fn bounds(&self) -> Result<(f64, f64), String> {
        match self.value_range.as_deref() {
            Some([low, high]) if low < high => Ok((*low, *high)),
            Some([low, high]) => Err(format!("valueRange low {} must be below high {}", low, high)),
            Some(other) => Err(format!("valueRange needs exactly two bounds, got {}", other.len())),
            None => Err("valueRange is required for ValueRange conditions".to_string()),
        }
    }
}

/// How a condition rewrites the assertion at its path
///
/// Unrecognized names are kept as [`ConditionKind::Unknown`] so that the
/// render reports them instead of the loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConditionKind {
    ValueEqual,
    KeyExist,
    Ignore,
    ValueRange,
    Unknown(String),
}

impl From<String> for ConditionKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "ValueEqual" => ConditionKind::ValueEqual,
            "KeyExist" => ConditionKind::KeyExist,
            "Ignore" => ConditionKind::Ignore,
            "ValueRange" => ConditionKind::ValueRange,
            _ => ConditionKind::Unknown(s),
        }
    }
}

impl From<ConditionKind> for String {
    fn from(kind: ConditionKind) -> Self {
        kind.as_str().to_string()
    }
}

impl ConditionKind {
    pub fn as_str(&self) -> &str {
        match self {
            ConditionKind::ValueEqual => "ValueEqual",
            ConditionKind::KeyExist => "KeyExist",
            ConditionKind::Ignore => "Ignore",
            ConditionKind::ValueRange => "ValueRange",
            ConditionKind::Unknown(name) => name,
        }
    }
}
