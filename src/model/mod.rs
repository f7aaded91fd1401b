//! Value types exchanged with callers and delegates

mod components;
pub mod parameters;
mod responses;

pub use components::LinkComponents;
pub use parameters::{
    AnalyticsParameters, AndroidParameters, IosParameters, ItunesConnectAnalyticsParameters,
    LinkParameter, OptionsParameters, OtherPlatformParameters, PathLength, QueryPair,
    SocialMetaTagParameters,
};
pub use responses::{DurableLink, ExchangeResult, ShortenResult, Warning};
