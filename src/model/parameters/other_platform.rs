use serde::{Deserialize, Serialize};

use super::{LinkParameter, QueryPair, push_opt};

/// Fallback for devices that are neither Android nor iOS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherPlatformParameters {
    /// `ofl`
    pub fallback_url: Option<String>,
}

impl OtherPlatformParameters {
    pub fn new(fallback_url: impl Into<String>) -> Self {
        Self {
            fallback_url: Some(fallback_url.into()),
        }
    }
}

impl LinkParameter for OtherPlatformParameters {
    fn project(&self) -> Vec<QueryPair> {
        let mut pairs = Vec::with_capacity(1);
        push_opt(&mut pairs, "ofl", self.fallback_url.as_ref());
        pairs
    }
}
