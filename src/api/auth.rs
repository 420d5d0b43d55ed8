//! Authentication handling for JIRA API.
//!
//! JIRA Cloud accepts Basic Auth built from the account email and an API
//! token. The header set is computed once per client and reused for every
//! request.

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::header::{self, HeaderMap, HeaderValue};

use super::error::{ApiError, Result};

/// Media type sent and accepted on every request.
const JSON_MEDIA_TYPE: &str = "application/json";

/// The header set attached to every JIRA request.
///
/// Derived deterministically from the identity and secret; the raw secret is
/// not kept.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    /// The complete `Basic ...` authorization value.
    pub authorization: String,
    /// Always `application/json`.
    pub content_type: String,
    /// Always `application/json`.
    pub accept: String,
}

impl AuthHeaders {
    /// Iterate over `(header name, value)` pairs in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("Authorization", self.authorization.as_str()),
            ("Content-Type", self.content_type.as_str()),
            ("Accept", self.accept.as_str()),
        ]
        .into_iter()
    }

    /// Convert into a `reqwest` header map.
    ///
    /// The authorization value is marked sensitive so it is never printed by
    /// `reqwest`'s own debug output.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidHeader` if a value contains bytes that are
    /// not allowed in an HTTP header.
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut authorization = HeaderValue::from_str(&self.authorization)
            .map_err(|e| ApiError::InvalidHeader(format!("authorization: {}", e)))?;
        authorization.set_sensitive(true);

        let content_type = HeaderValue::from_str(&self.content_type)
            .map_err(|e| ApiError::InvalidHeader(format!("content-type: {}", e)))?;
        let accept = HeaderValue::from_str(&self.accept)
            .map_err(|e| ApiError::InvalidHeader(format!("accept: {}", e)))?;

        let mut headers = HeaderMap::with_capacity(3);
        headers.insert(header::AUTHORIZATION, authorization);
        headers.insert(header::CONTENT_TYPE, content_type);
        headers.insert(header::ACCEPT, accept);
        Ok(headers)
    }
}

impl fmt::Debug for AuthHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthHeaders")
            .field("authorization", &"Basic <redacted>")
            .field("content_type", &self.content_type)
            .field("accept", &self.accept)
            .finish()
    }
}

/// Build the JIRA request headers for an identity and secret.
///
/// Empty values are accepted and yield a well-formed header that the server
/// will reject as unauthenticated.
pub fn build_auth_headers(identity: &str, secret: &str) -> AuthHeaders {
    AuthHeaders {
        authorization: build_auth_header(identity, secret),
        content_type: JSON_MEDIA_TYPE.to_string(),
        accept: JSON_MEDIA_TYPE.to_string(),
    }
}

/// Build the Basic Auth header value.
///
/// Encodes "identity:secret" in Base64 and prepends "Basic ".
fn build_auth_header(identity: &str, secret: &str) -> String {
    let credentials = format!("{}:{}", identity, secret);
    let encoded = BASE64.encode(credentials.as_bytes());
    format!("Basic {}", encoded)
}
