use serde::{Deserialize, Serialize};

use super::{LinkParameter, QueryPair, push_opt};

/// iOS-specific behaviour of a durable link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IosParameters {
    /// App Store ID of the app (`isi`)
    pub app_store_id: Option<String>,
    /// Where to send iPhone users without the app (`ifl`)
    pub fallback_url: Option<String>,
    /// Where to send iPad users without the app (`ipfl`)
    pub ipad_fallback_url: Option<String>,
    /// Minimum app version able to open the link (`imv`)
    pub minimum_app_version: Option<String>,
}

impl IosParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app_store_id(mut self, id: impl Into<String>) -> Self {
        self.app_store_id = Some(id.into());
        self
    }

    pub fn fallback_url(mut self, url: impl Into<String>) -> Self {
        self.fallback_url = Some(url.into());
        self
    }

    pub fn ipad_fallback_url(mut self, url: impl Into<String>) -> Self {
        self.ipad_fallback_url = Some(url.into());
        self
    }

    pub fn minimum_app_version(mut self, version: impl Into<String>) -> Self {
        self.minimum_app_version = Some(version.into());
        self
    }
}

impl LinkParameter for IosParameters {
    fn project(&self) -> Vec<QueryPair> {
        let mut pairs = Vec::with_capacity(4);
        push_opt(&mut pairs, "isi", self.app_store_id.as_ref());
        push_opt(&mut pairs, "ifl", self.fallback_url.as_ref());
        push_opt(&mut pairs, "ipfl", self.ipad_fallback_url.as_ref());
        push_opt(&mut pairs, "imv", self.minimum_app_version.as_ref());
        pairs
    }
}
