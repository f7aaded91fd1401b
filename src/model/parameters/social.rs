use serde::{Deserialize, Serialize};

use super::{LinkParameter, QueryPair, push_opt};

/// Content shown on the link preview page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialMetaTagParameters {
    /// `st`
    pub title: Option<String>,
    /// `sd`
    pub description_text: Option<String>,
    /// `si`
    pub image_url: Option<String>,
}

impl SocialMetaTagParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description_text(mut self, text: impl Into<String>) -> Self {
        self.description_text = Some(text.into());
        self
    }

    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

impl LinkParameter for SocialMetaTagParameters {
    fn project(&self) -> Vec<QueryPair> {
        let mut pairs = Vec::with_capacity(3);
        push_opt(&mut pairs, "st", self.title.as_ref());
        push_opt(&mut pairs, "sd", self.description_text.as_ref());
        push_opt(&mut pairs, "si", self.image_url.as_ref());
        pairs
    }
}
