//! HTTP method constants and utilities

/// HTTP GET method
pub const GET: &str = "GET";

/// HTTP POST method
pub const POST: &str = "POST";

/// HTTP PUT method
pub const PUT: &str = "PUT";

/// HTTP PATCH method
pub const PATCH: &str = "PATCH";

/// HTTP DELETE method
pub const DELETE: &str = "DELETE";

/// HTTP HEAD method
pub const HEAD: &str = "HEAD";

/// HTTP OPTIONS method
pub const OPTIONS: &str = "OPTIONS";

/// HTTP TRACE method
pub const TRACE: &str = "TRACE";

/// HTTP CONNECT method
pub const CONNECT: &str = "CONNECT";

/// All standard HTTP methods
pub const STANDARD_METHODS: &[&str] = &[
    GET, POST, PUT, PATCH, DELETE, HEAD, OPTIONS, TRACE, CONNECT,
];

/// Check if a string is a standard HTTP method
pub fn is_standard(method: &str) -> bool {
    STANDARD_METHODS.iter().any(|&m| m.eq_ignore_ascii_case(method))
}

/// Name of the supertest request builder for a method (`get`, `post`, ...)
pub fn client_call(method: &str) -> String {
    method.to_ascii_lowercase()
}
