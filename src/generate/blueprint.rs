//! API Blueprint document rendering
//!
//! Produces one `FORMAT: 1A` document covering every group:
//!
//! ```text
//! FORMAT: 1A
//! HOST: https://api.example.com
//!
//! # Group Monitor
//!
//! ## List users [/products?5]
//!
//! ### List users as an array [GET]
//!
//! + Parameters
//!
//!     + pid: 5 (number, required) - Product id
//!
//! + Response 200 (application/json)
//!
//!     + Body
//!
//!             {
//!                 "data": {}
//!             }
//! ```

use serde_json::Value;
use tracing::debug;

use super::uri::substitute_uri;
use crate::errors::Result;
use crate::json::to_pretty_string;
use crate::model::{ApiDescription, ApiDoc, QueryParameter};

/// Blueprint format version written in the document header
pub const BLUEPRINT_FORMAT: &str = "1A";

/// Indent of a parameter entry under `+ Parameters`
const PARAMETER_INDENT: &str = "    ";

/// Indent of body content under `+ Body`
const BODY_INDENT: &str = "            ";

/// Render a blueprint document for `host` covering every group in order
pub fn render_blueprint(host: &str, docs: &[ApiDoc]) -> Result<String> {
    let mut content = format!("FORMAT: {}\nHOST: {}\n\n", BLUEPRINT_FORMAT, host);

    for doc in docs {
        content.push_str(&format!("# Group {}\n\n", doc.group_name));

        for description in &doc.descriptions {
            let sections = endpoint_sections(description)?;
            content.push_str(&sections.join("\n\n"));
            content.push_str("\n\n");
        }

        debug!(group = %doc.group_name, endpoints = doc.descriptions.len(), "Rendered blueprint group");
    }

    Ok(content)
}

/// Sections of one endpoint, to be separated by a single blank line
fn endpoint_sections(desc: &ApiDescription) -> Result<Vec<String>> {
    let uri = substitute_uri(&desc.uri, desc.query_parameters());

    let mut sections = vec![
        format!("## {} [{}]", desc.description, uri),
        format!("### {} [{}]", desc.detail_or_description(), desc.method.to_uppercase()),
    ];

    if !desc.query_parameters().is_empty() {
        sections.push(parameters_section(desc.query_parameters()));
    }

    if let Some(ref body) = desc.request_body {
        sections.push(body_section("+ Request (application/json)", body)?);
    }

    if let Some(ref body) = desc.response_body {
        sections.push(body_section("+ Response 200 (application/json)", body)?);
    }

    Ok(sections)
}

fn parameters_section(params: &[QueryParameter]) -> String {
    let mut lines = vec!["+ Parameters".to_string()];
    lines.extend(params.iter().map(parameter_line));
    lines.join("\n\n")
}

/// Format a single parameter entry, e.g. `    + pid: 5 (number, required) - Product id`
pub fn parameter_line(param: &QueryParameter) -> String {
    let requirement = if param.is_optional() { "optional" } else { "required" };
    format!(
        "{}+ {}: {} ({}, {}) - {}",
        PARAMETER_INDENT,
        param.key,
        param.example,
        param.base_type(),
        requirement,
        param.description
    )
}

/// A request/response block with its body pretty-printed under `+ Body`
fn body_section(heading: &str, body: &Value) -> Result<String> {
    let pretty = to_pretty_string(body, 4)?;
    let indented: Vec<String> = pretty.lines()
        .map(|line| format!("{}{}", BODY_INDENT, line))
        .collect();

    Ok(format!("{}\n\n    + Body\n\n{}", heading, indented.join("\n")))
}
