//! durablelinks - client-side durable link toolkit
//!
//! Builds long durable links from structured parameters, recognises incoming
//! durable links by host and path, and bridges a host-supplied shortener
//! backend (the *delegate*) into plain async calls.
//!
//! ```no_run
//! use durablelinks::{AndroidParameters, DurableLinks, LinkComponents};
//! use url::Url;
//!
//! # async fn run(backend: std::sync::Arc<impl durablelinks::ShortenerDelegate + 'static>) -> durablelinks::Result<()> {
//! let links = DurableLinks::new();
//! links.configure(["acme.wayp.link"])?;
//! links.set_delegate(&backend);
//!
//! let components = LinkComponents::new(
//!     Url::parse("https://acme.com/item/42").unwrap(),
//!     "https://acme.wayp.link",
//! )?
//! .with_android(AndroidParameters::new("com.acme.app").minimum_version(5));
//!
//! let short = links.shorten(&components).await?;
//! let resolved = links.resolve(&short.short_link).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//! - **cli**: the `durablelinks` command-line tool (default)
//!
//! # Architecture
//! - `model`: parameter records, link components and delegate results
//! - `client`: allow-list, delegate slot and the callback-to-async bridge
//! - `utils`: domain-prefix and durable-link URL checks
//! - `config`: settings file and environment loading
//! - `errors`: the error taxonomy
//! - `system`: logging setup for binaries
//! - `cli`: command-line interface

#[cfg(feature = "cli")]
pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod model;
pub mod system;
pub mod utils;

pub use client::{Completion, DurableLinks, SDK_VERSION, ShortenerDelegate, shared};
pub use errors::{DelegateError, DurableLinksError, Result};
pub use model::{
    AnalyticsParameters, AndroidParameters, DurableLink, ExchangeResult, IosParameters,
    ItunesConnectAnalyticsParameters, LinkComponents, LinkParameter, OptionsParameters,
    OtherPlatformParameters, PathLength, ShortenResult, SocialMetaTagParameters, Warning,
};
