use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use url::Url;

use super::parameters::{
    AnalyticsParameters, AndroidParameters, IosParameters, ItunesConnectAnalyticsParameters,
    LinkParameter, OptionsParameters, OtherPlatformParameters, QueryPair, SocialMetaTagParameters,
};
use crate::errors::Result;
use crate::utils::url_validator::validate_domain_prefix;

/// Left as-is in query keys and values: `A-Z a-z 0-9 - _ . ~ ! ' ( ) *`.
/// Everything else, space included, becomes `%XX`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*');

/// Everything needed to assemble a long durable link.
///
/// `link` is the in-app destination (e.g. `https://acme.com/signup`);
/// `domain_prefix` is the durable-link domain the long link is built on
/// (e.g. `https://acme.wayp.link`) and must be https.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkComponents {
    link: Url,
    domain_prefix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ios: Option<IosParameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    android: Option<AndroidParameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    analytics: Option<AnalyticsParameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    social: Option<SocialMetaTagParameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    itunes: Option<ItunesConnectAnalyticsParameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    other_platform: Option<OtherPlatformParameters>,
    #[serde(default)]
    options: OptionsParameters,
}

impl LinkComponents {
    /// Create components for `link` on `domain_prefix`.
    ///
    /// Fails with [`InvalidArgument`](crate::DurableLinksError::InvalidArgument)
    /// when the prefix is not an https URL.
    pub fn new(link: Url, domain_prefix: impl Into<String>) -> Result<Self> {
        let domain_prefix = domain_prefix.into();
        validate_domain_prefix(&domain_prefix)?;
        Ok(Self {
            link,
            domain_prefix,
            ios: None,
            android: None,
            analytics: None,
            social: None,
            itunes: None,
            other_platform: None,
            options: OptionsParameters::default(),
        })
    }

    pub fn with_ios(mut self, params: IosParameters) -> Self {
        self.ios = Some(params);
        self
    }

    pub fn with_android(mut self, params: AndroidParameters) -> Self {
        self.android = Some(params);
        self
    }

    pub fn with_analytics(mut self, params: AnalyticsParameters) -> Self {
        self.analytics = Some(params);
        self
    }

    pub fn with_social(mut self, params: SocialMetaTagParameters) -> Self {
        self.social = Some(params);
        self
    }

    pub fn with_itunes(mut self, params: ItunesConnectAnalyticsParameters) -> Self {
        self.itunes = Some(params);
        self
    }

    pub fn with_other_platform(mut self, params: OtherPlatformParameters) -> Self {
        self.other_platform = Some(params);
        self
    }

    pub fn with_options(mut self, options: OptionsParameters) -> Self {
        self.options = options;
        self
    }

    pub fn link(&self) -> &Url {
        &self.link
    }

    pub fn domain_prefix(&self) -> &str {
        &self.domain_prefix
    }

    pub fn ios(&self) -> Option<&IosParameters> {
        self.ios.as_ref()
    }

    pub fn android(&self) -> Option<&AndroidParameters> {
        self.android.as_ref()
    }

    pub fn analytics(&self) -> Option<&AnalyticsParameters> {
        self.analytics.as_ref()
    }

    pub fn social(&self) -> Option<&SocialMetaTagParameters> {
        self.social.as_ref()
    }

    pub fn itunes(&self) -> Option<&ItunesConnectAnalyticsParameters> {
        self.itunes.as_ref()
    }

    pub fn other_platform(&self) -> Option<&OtherPlatformParameters> {
        self.other_platform.as_ref()
    }

    pub fn options(&self) -> &OptionsParameters {
        &self.options
    }

    /// All parameter pairs after `link`, in wire order:
    /// analytics, social, iOS, Android, iTunes Connect, other platform, options.
    pub fn parameter_pairs(&self) -> Vec<QueryPair> {
        let records: [Option<&dyn LinkParameter>; 7] = [
            self.analytics.as_ref().map(|p| p as &dyn LinkParameter),
            self.social.as_ref().map(|p| p as &dyn LinkParameter),
            self.ios.as_ref().map(|p| p as &dyn LinkParameter),
            self.android.as_ref().map(|p| p as &dyn LinkParameter),
            self.itunes.as_ref().map(|p| p as &dyn LinkParameter),
            self.other_platform.as_ref().map(|p| p as &dyn LinkParameter),
            Some(&self.options),
        ];

        records
            .into_iter()
            .flatten()
            .flat_map(|record| record.project())
            .collect()
    }

    /// Assemble the long link.
    ///
    /// `link` is percent-encoded once. Every other key and value is encoded
    /// twice, so `https://a` goes out as `https%253A%252F%252Fa`; the backend
    /// decodes parameter pairs twice.
    ///
    /// The prefix is checked again here because deserialized components never
    /// went through [`LinkComponents::new`]. Any query already on the prefix
    /// is kept and the durable-link pairs follow it.
    pub fn build(&self) -> Result<Url> {
        let mut url = validate_domain_prefix(&self.domain_prefix)?;

        let mut query = String::new();
        append_pair(&mut query, "link", self.link.as_str());
        for (key, value) in self.parameter_pairs() {
            append_pair(&mut query, &encode(key), &encode(&value));
        }

        let query = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{}&{}", existing, query),
            _ => query,
        };
        url.set_query(Some(&query));

        Ok(url)
    }
}

fn encode(input: &str) -> String {
    utf8_percent_encode(input, QUERY_COMPONENT).to_string()
}

fn append_pair(query: &mut String, key: &str, value: &str) {
    if !query.is_empty() {
        query.push('&');
    }
    query.push_str(&encode(key));
    query.push('=');
    query.push_str(&encode(value));
}
