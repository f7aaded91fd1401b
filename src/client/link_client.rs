//! Shorten and resolve operations (delegate-backed)

use tracing::{debug, instrument};
use url::Url;

use super::await_completion;
use super::context::DurableLinks;
use crate::errors::{DurableLinksError, Result};
use crate::model::{DurableLink, LinkComponents, ShortenResult};

impl DurableLinks {
    /// Build the long link for `components` and have the delegate shorten it.
    ///
    /// Fails with `DelegateUnavailable` before building anything when no
    /// delegate is registered, and with `InvalidDurableLink` when the long
    /// link cannot be built. Delegate errors come back unchanged.
    #[instrument(skip_all, fields(domain_prefix = components.domain_prefix()))]
    pub async fn shorten(&self, components: &LinkComponents) -> Result<ShortenResult> {
        let delegate = self
            .delegate()
            .ok_or(DurableLinksError::DelegateUnavailable)?;

        let long_url = components.build().map_err(|e| {
            debug!("Long link build failed: {}", e);
            DurableLinksError::InvalidDurableLink
        })?;

        debug!("Dispatching shorten for {}", long_url);
        await_completion("shorten", |completion| {
            delegate.shorten_url(long_url, completion)
        })
        .await
    }

    /// Exchange an incoming short link for the durable link it stands for.
    ///
    /// The link is checked against the allow-list first; a rejected link
    /// never reaches the delegate.
    #[instrument(skip_all, fields(url = %incoming_url))]
    pub async fn resolve(&self, incoming_url: &Url) -> Result<DurableLink> {
        if !self.is_valid_durable_link(incoming_url) {
            return Err(DurableLinksError::InvalidDurableLink);
        }

        let delegate = self
            .delegate()
            .ok_or(DurableLinksError::DelegateUnavailable)?;

        debug!("Dispatching exchange");
        let exchanged = await_completion("exchange", |completion| {
            delegate.exchange_short_code(incoming_url.clone(), completion)
        })
        .await?;

        Ok(DurableLink::from(exchanged))
    }

    /// [`resolve`](Self::resolve) for raw strings; unparseable input is an
    /// `InvalidDurableLink`.
    pub async fn resolve_str(&self, incoming_url: &str) -> Result<DurableLink> {
        let url = Url::parse(incoming_url).map_err(|_| DurableLinksError::InvalidDurableLink)?;
        self.resolve(&url).await
    }
}
