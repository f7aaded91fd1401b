use serde::{Deserialize, Serialize};

use super::{LinkParameter, QueryPair, push_opt};

/// UTM parameters used to attribute traffic to a campaign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsParameters {
    /// Traffic source, e.g. "newsletter" (`utm_source`)
    pub source: Option<String>,
    /// Marketing medium, e.g. "email" (`utm_medium`)
    pub medium: Option<String>,
    /// Campaign name (`utm_campaign`)
    pub campaign: Option<String>,
    /// Paid search keyword (`utm_term`)
    pub term: Option<String>,
    /// Content variant used to tell links apart (`utm_content`)
    pub content: Option<String>,
}

impl AnalyticsParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn medium(mut self, medium: impl Into<String>) -> Self {
        self.medium = Some(medium.into());
        self
    }

    pub fn campaign(mut self, campaign: impl Into<String>) -> Self {
        self.campaign = Some(campaign.into());
        self
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

impl LinkParameter for AnalyticsParameters {
    fn project(&self) -> Vec<QueryPair> {
        let mut pairs = Vec::with_capacity(5);
        push_opt(&mut pairs, "utm_source", self.source.as_ref());
        push_opt(&mut pairs, "utm_medium", self.medium.as_ref());
        push_opt(&mut pairs, "utm_campaign", self.campaign.as_ref());
        push_opt(&mut pairs, "utm_term", self.term.as_ref());
        push_opt(&mut pairs, "utm_content", self.content.as_ref());
        pairs
    }
}
