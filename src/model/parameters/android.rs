use serde::{Deserialize, Serialize};

use super::{LinkParameter, QueryPair, push_opt};

/// Android-specific behaviour of a durable link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndroidParameters {
    /// Package name of the app that should open the link (`apn`)
    pub package_name: String,
    /// Where to send users without the app; defaults to the Play Store listing (`afl`)
    #[serde(default)]
    pub fallback_url: Option<String>,
    /// Minimum version code able to open the link (`amv`)
    #[serde(default)]
    pub minimum_version: u32,
}

impl AndroidParameters {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            fallback_url: None,
            minimum_version: 0,
        }
    }

    pub fn fallback_url(mut self, url: impl Into<String>) -> Self {
        self.fallback_url = Some(url.into());
        self
    }

    pub fn minimum_version(mut self, version: u32) -> Self {
        self.minimum_version = version;
        self
    }
}

impl LinkParameter for AndroidParameters {
    fn project(&self) -> Vec<QueryPair> {
        let mut pairs = Vec::with_capacity(3);
        pairs.push(("apn", self.package_name.clone()));
        push_opt(&mut pairs, "afl", self.fallback_url.as_ref());
        pairs.push(("amv", self.minimum_version.to_string()));
        pairs
    }
}
