//! Integration test source rendering
//!
//! Emits a TypeScript mocha suite per group that drives the endpoint with
//! supertest and checks the response body with chai. The suite is only
//! written out, never executed here.

use tracing::debug;

use super::assertions::{build_assertions, render_path, AssertionKind, AssertionRecord};
use super::conditions::apply_conditions;
use super::uri::substitute_uri;
use crate::errors::Result;
use crate::http;
use crate::json::to_pretty_string;
use crate::model::{ApiDescription, ApiDoc};
use crate::strings::{indent_continuation, js_string};

/// License header placed above the imports of every generated file
pub const DEFAULT_LICENSE_HEADER: &str = "\
// Use of this source code is governed by a license that can be found in the LICENSE file.
//
// This test is generated by apidocgen. Edit the API model and regenerate instead of editing it.
";

const IMPORTS: &str = "import * as supertest from \"supertest\";\nimport * as chai from \"chai\";\n";

/// Default name of the base URL binding the suite expects to be in scope
pub const DEFAULT_BASE_URL_BINDING: &str = "url";

/// Where generated requests are sent
#[derive(Debug, Clone, PartialEq)]
pub enum BaseUrl {
    /// A fixed host, emitted as a string literal
    Host(String),
    /// The name of a binding the surrounding test setup provides
    Binding(String),
}

impl Default for BaseUrl {
    fn default() -> Self {
        BaseUrl::Binding(DEFAULT_BASE_URL_BINDING.to_string())
    }
}

impl BaseUrl {
    fn render(&self) -> String {
        match self {
            BaseUrl::Host(host) => js_string(host),
            BaseUrl::Binding(name) => name.clone(),
        }
    }
}

/// Options for test source generation
#[derive(Debug, Clone, PartialEq)]
pub struct TestSourceOptions {
    pub base_url: BaseUrl,
    /// Comment block written before the imports
    pub license_header: String,
}

impl Default for TestSourceOptions {
    fn default() -> Self {
        Self {
            base_url: BaseUrl::default(),
            license_header: DEFAULT_LICENSE_HEADER.to_string(),
        }
    }
}

/// Render the test suite for one group
///
/// Fails without output if any condition of any endpoint cannot be applied.
pub fn render_test_source(doc: &ApiDoc, options: &TestSourceOptions) -> Result<String> {
    let mut content = String::new();

    content.push_str(&options.license_header);
    if !options.license_header.is_empty() && !options.license_header.ends_with('\n') {
        content.push('\n');
    }
    content.push('\n');
    content.push_str(IMPORTS);
    content.push('\n');

    content.push_str(&format!("describe({}, () => {{\n\n", js_string(&format!("Test {} API", doc.group_name))));

    for description in &doc.descriptions {
        content.push_str(&render_test_case(description, &options.base_url)?);
    }

    content.push_str("});\n");

    debug!(group = %doc.group_name, cases = doc.descriptions.len(), "Rendered test source");
    Ok(content)
}

fn render_test_case(desc: &ApiDescription, base_url: &BaseUrl) -> Result<String> {
    let records = apply_conditions(
        desc.response_body.as_ref(),
        build_assertions(desc.response_body.as_ref()),
        desc.conditions(),
    )?;

    let mut code = format!("  it({}, (done: MochaDone) => {{\n", js_string(&desc.description));

    if let Some(ref body) = desc.request_body {
        let json = indent_continuation(&to_pretty_string(body, 2)?, "    ");
        code.push_str(&format!("    const request: any = {};\n\n", json));
    }

    code.push_str(&format!("    supertest({})\n", base_url.render()));

    let uri = substitute_uri(&desc.uri, desc.query_parameters());
    code.push_str(&format!("      .{}({})\n", http::client_call(&desc.method), js_string(&uri)));

    if let Some(ref headers) = desc.request_headers {
        for (name, value) in headers {
            code.push_str(&format!("      .set({}, {})\n", js_string(name), js_string(value)));
        }
    }

    if desc.request_body.is_some() {
        code.push_str("      .send(JSON.stringify(request))\n");
    }

    code.push_str("      .expect((res: supertest.Response)=> {\n");
    for record in &records {
        code.push_str(&format!("        {}\n", render_assertion(record)));
    }
    code.push_str("      })\n");
    code.push_str("      .expect(200, done);\n");
    code.push_str("  });\n\n");

    Ok(code)
}

/// Render one record as a chai expectation line
pub fn render_assertion(record: &AssertionRecord) -> String {
    let subject = format!("res.body{}", render_path(&record.path));

    match &record.kind {
        // JSON literals are valid JS literals, strings come out quoted and escaped
        AssertionKind::Equal(value) => format!("chai.expect({}).to.equal({});", subject, value),
        AssertionKind::Exists(property) => format!(
            "chai.expect({}).to.have.property({});",
            subject,
            js_string(property)
        ),
        AssertionKind::Range(low, high) => format!(
            "chai.expect({}).to.greaterThan({}).and.lessThan({});",
            subject, low, high
        ),
    }
}
