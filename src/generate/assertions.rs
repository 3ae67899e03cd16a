//! Assertion tree builder
//!
//! Walks a response body depth first and records one expected-value check
//! per leaf. Records stay structured until the test source renderer turns
//! them into lines, so conditions can edit them without touching text.

use std::fmt;

use serde_json::Value;

use crate::strings::js_string;

/// One step into a response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessor {
    /// Object property, rendered `["key"]`
    Key(String),
    /// Array element, rendered `[index]`
    Index(usize),
}

impl Accessor {
    /// Property name as seen by the parent value
    pub fn property_name(&self) -> String {
        match self {
            Accessor::Key(key) => key.clone(),
            Accessor::Index(index) => index.to_string(),
        }
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Key(key) => write!(f, "[{}]", js_string(key)),
            Accessor::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// Render an accessor path in bracket form, e.g. `["data"]["users"][0]`
pub fn render_path(path: &[Accessor]) -> String {
    path.iter().map(|a| a.to_string()).collect()
}

/// What an assertion checks about the value at its path
#[derive(Debug, Clone, PartialEq)]
pub enum AssertionKind {
    /// Value equals the leaf from the example body
    Equal(Value),
    /// The value at the path has this property, whatever its value
    Exists(String),
    /// Value lies strictly between the bounds
    Range(f64, f64),
}

/// A single check against the value at `path` in the response body
///
/// Existence checks sit on the parent of the leaf they were built from.
#[derive(Debug, Clone, PartialEq)]
pub struct AssertionRecord {
    pub path: Vec<Accessor>,
    pub kind: AssertionKind,
}

impl AssertionRecord {
    /// Turn a leaf check into a property check on its parent
    ///
    /// A record with an empty path has no parent and is left unchanged.
    pub fn rebase_to_parent(&mut self) {
        if let Some(last) = self.path.pop() {
            self.kind = AssertionKind::Exists(last.property_name());
        }
    }

    /// Whether a key path resolving to `path` addresses this record
    ///
    /// Existence checks have moved off their leaf and no longer match.
    pub fn is_at_leaf(&self, path: &[Accessor]) -> bool {
        !matches!(self.kind, AssertionKind::Exists(_)) && self.path == path
    }
}

/// Build one `Equal` record per scalar or string leaf of the body
///
/// Objects recurse in property order and arrays in index order; empty
/// containers contribute nothing. A scalar root yields a single record with
/// an empty path, and an absent body yields no records.
pub fn build_assertions(body: Option<&Value>) -> Vec<AssertionRecord> {
    let mut records = Vec::new();
    if let Some(body) = body {
        let mut path = Vec::new();
        collect_leaves(body, &mut path, &mut records);
    }
    records
}

fn collect_leaves(value: &Value, path: &mut Vec<Accessor>, records: &mut Vec<AssertionRecord>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                path.push(Accessor::Key(key.clone()));
                collect_leaves(child, path, records);
                path.pop();
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                path.push(Accessor::Index(index));
                collect_leaves(child, path, records);
                path.pop();
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            records.push(AssertionRecord {
                path: path.clone(),
                kind: AssertionKind::Equal(value.clone()),
            });
        }
    }
}
