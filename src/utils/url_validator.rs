//! URL 验证模块
//!
//! Domain-prefix checks for outgoing long links and the structural test that
//! decides whether an incoming URL is one of our durable links.

use std::collections::HashSet;

use url::Url;

use crate::errors::DurableLinksError;

/// Scheme every domain prefix must start with
pub const SECURE_PREFIX: &str = "https://";

/// URL 验证错误
#[derive(Debug)]
pub enum UrlValidationError {
    EmptyUrl,
    InsecureScheme(String),
    InvalidFormat(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "Domain prefix cannot be empty"),
            Self::InsecureScheme(prefix) => write!(
                f,
                "Domain prefix must start with {}, got: {}",
                SECURE_PREFIX, prefix
            ),
            Self::InvalidFormat(msg) => write!(f, "Invalid domain prefix: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

impl From<UrlValidationError> for DurableLinksError {
    fn from(err: UrlValidationError) -> Self {
        DurableLinksError::InvalidArgument(err.to_string())
    }
}

/// 验证域名前缀
///
/// The check is a literal, case-sensitive prefix match on `https://`,
/// followed by a full parse. Returns the parsed prefix on success.
pub fn validate_domain_prefix(prefix: &str) -> Result<Url, UrlValidationError> {
    if prefix.trim().is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    if !prefix.starts_with(SECURE_PREFIX) {
        return Err(UrlValidationError::InsecureScheme(prefix.to_string()));
    }

    Url::parse(prefix).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))
}

/// True when the path has a `/` followed by at least one non-`/` character.
pub fn has_path_segment(path: &str) -> bool {
    path.split('/').skip(1).any(|segment| !segment.is_empty())
}

/// Structural durable-link test: allowed host and a non-empty path segment.
pub fn is_durable_link(url: &Url, allowed_hosts: &HashSet<String>) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    allowed_hosts.contains(host) && has_path_segment(url.path())
}
