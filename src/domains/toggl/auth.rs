//! HTTP Basic credentials for the Toggl Track API.
//!
//! Toggl accepts an API token in place of a username, paired with the fixed
//! password `api_token`.

use base64::{Engine, engine::general_purpose::STANDARD};

/// Password slot used when authenticating with an API token.
pub const API_TOKEN_PASSWORD: &str = "api_token";

/// Build the `Authorization` header value for the given API token.
pub fn basic_auth_header(token: &str) -> String {
    let credentials = format!("{}:{}", token, API_TOKEN_PASSWORD);
    format!("Basic {}", STANDARD.encode(credentials))
}
