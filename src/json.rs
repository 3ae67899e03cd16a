//! JSON utilities
//!
//! Pretty printing with a caller-chosen indent. Key order is whatever the
//! value holds; serde_json is built with `preserve_order`, so that is the
//! order the model file declared.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Serialize a value as indented JSON, e.g. `to_pretty_string(&v, 4)`
pub fn to_pretty_string<T: Serialize + ?Sized>(value: &T, indent: usize) -> Result<String, serde_json::Error> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
