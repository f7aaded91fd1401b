use serde::{Deserialize, Serialize};
use url::Url;

/// Result of a successful shorten call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenResult {
    pub short_link: Url,
    #[serde(default)]
    pub warnings: Vec<Warning>,
}

impl ShortenResult {
    pub fn new(short_link: Url) -> Self {
        Self {
            short_link,
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, code: impl Into<String>, message: impl Into<String>) -> Self {
        self.warnings.push(Warning {
            code: code.into(),
            message: message.into(),
        });
        self
    }
}

/// Non-fatal notice returned by the backend alongside a short link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub code: String,
    pub message: String,
}

/// Result of a successful short-code exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeResult {
    pub long_link: Url,
}

impl ExchangeResult {
    pub fn new(long_link: Url) -> Self {
        Self { long_link }
    }
}

/// A resolved incoming link, ready for in-app routing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurableLink {
    pub url: Url,
}

impl From<ExchangeResult> for DurableLink {
    fn from(result: ExchangeResult) -> Self {
        Self {
            url: result.long_link,
        }
    }
}
