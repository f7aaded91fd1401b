//! Parameter records attached to a durable link
//!
//! Every record projects itself into an ordered list of query pairs. The key
//! names and their order are what existing backends parse, so they must not
//! change.

mod analytics;
mod android;
mod ios;
mod itunes;
mod options;
mod other_platform;
mod social;

pub use analytics::AnalyticsParameters;
pub use android::AndroidParameters;
pub use ios::IosParameters;
pub use itunes::ItunesConnectAnalyticsParameters;
pub use options::{OptionsParameters, PathLength};
pub use other_platform::OtherPlatformParameters;
pub use social::SocialMetaTagParameters;

/// A single `(key, value)` pair before percent-encoding
pub type QueryPair = (&'static str, String);

/// Projection of a parameter record into query pairs.
///
/// Implementations emit one pair per set field, in field declaration order.
/// Unset optional fields are skipped; mandatory fields are always emitted.
pub trait LinkParameter {
    fn project(&self) -> Vec<QueryPair>;
}

/// Push `(key, value)` only when the field is set.
pub(crate) fn push_opt(pairs: &mut Vec<QueryPair>, key: &'static str, value: Option<&String>) {
    if let Some(value) = value {
        pairs.push((key, value.clone()));
    }
}
