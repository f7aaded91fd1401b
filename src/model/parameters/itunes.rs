use serde::{Deserialize, Serialize};

use super::{LinkParameter, QueryPair, push_opt};

/// iTunes Connect affiliate/campaign tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItunesConnectAnalyticsParameters {
    pub affiliate_token: Option<String>,
    pub campaign_token: Option<String>,
    pub provider_token: Option<String>,
}

impl ItunesConnectAnalyticsParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn affiliate_token(mut self, token: impl Into<String>) -> Self {
        self.affiliate_token = Some(token.into());
        self
    }

    pub fn campaign_token(mut self, token: impl Into<String>) -> Self {
        self.campaign_token = Some(token.into());
        self
    }

    pub fn provider_token(mut self, token: impl Into<String>) -> Self {
        self.provider_token = Some(token.into());
        self
    }
}

impl LinkParameter for ItunesConnectAnalyticsParameters {
    fn project(&self) -> Vec<QueryPair> {
        let mut pairs = Vec::with_capacity(3);
        push_opt(&mut pairs, "at", self.affiliate_token.as_ref());
        push_opt(&mut pairs, "ct", self.campaign_token.as_ref());
        push_opt(&mut pairs, "pt", self.provider_token.as_ref());
        pairs
    }
}
