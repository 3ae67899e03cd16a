//! URI template substitution

use crate::model::QueryParameter;

/// Replace `{key}` placeholders in a URI template with parameter examples
///
/// Parameters are applied in order and each replaces only the first
/// occurrence of its token in the URI as rewritten so far. Tokens are
/// literal substrings: no escaping, and keys that do not appear are skipped.
///
/// # Examples
/// ```
/// use apidocgen::generate::substitute_uri;
/// use apidocgen::model::{ExampleValue, QueryParameter};
///
/// let pid = QueryParameter {
///     key: "pid".to_string(),
///     example: ExampleValue::from(5i64),
///     type_name: "number".to_string(),
///     description: "Product id".to_string(),
/// };
/// assert_eq!(substitute_uri("/products?{pid}", &[pid]), "/products?5");
/// ```
pub fn substitute_uri(uri: &str, params: &[QueryParameter]) -> String {
    let mut result = uri.to_string();
    for param in params {
        let token = format!("{{{}}}", param.key);
        result = result.replacen(&token, &param.example.to_string(), 1);
    }
    result
}
