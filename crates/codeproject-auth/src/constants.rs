//! CodeProject API constants
//!
//! The base URL is fixed; the API has a single public host and no
//! per-environment configuration. Tests override the endpoint through the
//! constructors that take a URL instead.

/// Root of the v1 REST API
pub const API_BASE_URL: &str = "https://api.codeproject.com";

/// Token endpoint for the client-credential and password grants
pub const TOKEN_ENDPOINT: &str = "https://api.codeproject.com/Token";
