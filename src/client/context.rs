//! Injectable SDK state: the host allow-list and the current delegate

use std::collections::HashSet;
use std::sync::{Arc, OnceLock, Weak};

use arc_swap::ArcSwapOption;
use tracing::{debug, info};
use url::Url;

use super::delegate::ShortenerDelegate;
use crate::config::Settings;
use crate::errors::{DurableLinksError, Result};
use crate::utils::url_validator::is_durable_link;

/// Version string host applications forward to their backend
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

static SHARED: OnceLock<DurableLinks> = OnceLock::new();

/// Process-wide instance for hosts that prefer a singleton.
///
/// Tests and hosts juggling several configurations should create their own
/// [`DurableLinks`] instead.
pub fn shared() -> &'static DurableLinks {
    SHARED.get_or_init(DurableLinks::new)
}

/// Non-owning handle to the host's delegate
struct DelegateSlot(Weak<dyn ShortenerDelegate>);

/// Durable link client state.
///
/// The allow-list is written once and read lock-free afterwards. The delegate
/// may be swapped at any time; each call works with the snapshot it loaded.
pub struct DurableLinks {
    allowed_hosts: OnceLock<HashSet<String>>,
    delegate: ArcSwapOption<DelegateSlot>,
    sdk_version: String,
}

impl Default for DurableLinks {
    fn default() -> Self {
        Self::new()
    }
}

impl DurableLinks {
    pub fn new() -> Self {
        Self {
            allowed_hosts: OnceLock::new(),
            delegate: ArcSwapOption::empty(),
            sdk_version: SDK_VERSION.to_string(),
        }
    }

    /// Build a context from loaded settings.
    ///
    /// The allow-list is only fixed when the settings carry at least one host,
    /// so a host may still call [`configure`](Self::configure) later.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let links = Self::new().with_sdk_version(settings.sdk_version.clone());
        if !settings.allowed_hosts.is_empty() {
            links.configure(settings.allowed_hosts.iter().cloned())?;
        }
        Ok(links)
    }

    pub fn with_sdk_version(mut self, version: impl Into<String>) -> Self {
        self.sdk_version = version.into();
        self
    }

    /// Value to send to the backend as a request header
    pub fn sdk_version(&self) -> &str {
        &self.sdk_version
    }

    /// Fix the set of hosts treated as durable-link domains.
    ///
    /// Only the first call takes effect, even with an empty list; later calls
    /// fail with `AlreadyConfigured` and leave the list untouched. Hosts are
    /// compared in lowercase, as URL hosts are.
    pub fn configure<I, S>(&self, allowed_hosts: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let hosts: HashSet<String> = allowed_hosts
            .into_iter()
            .map(|h| Into::<String>::into(h).trim().to_ascii_lowercase())
            .filter(|h| !h.is_empty())
            .collect();
        let count = hosts.len();

        self.allowed_hosts
            .set(hosts)
            .map_err(|_| DurableLinksError::AlreadyConfigured)?;

        info!("Durable links configured with {} allowed host(s)", count);
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.allowed_hosts.get().is_some()
    }

    /// Configured hosts, sorted
    pub fn allowed_hosts(&self) -> Vec<String> {
        let mut hosts: Vec<String> = self
            .allowed_hosts
            .get()
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();
        hosts.sort();
        hosts
    }

    /// Register the host's delegate, replacing any previous one.
    ///
    /// Only a weak reference is kept: the host stays the owner, and once its
    /// last `Arc` is gone calls fail with `DelegateUnavailable`.
    pub fn set_delegate<D>(&self, delegate: &Arc<D>)
    where
        D: ShortenerDelegate + 'static,
    {
        let delegate: Arc<dyn ShortenerDelegate> = delegate.clone();
        self.delegate
            .store(Some(Arc::new(DelegateSlot(Arc::downgrade(&delegate)))));
        debug!("Delegate registered");
    }

    pub fn clear_delegate(&self) {
        self.delegate.store(None);
        debug!("Delegate cleared");
    }

    /// Current delegate, if one is registered and still alive
    pub fn delegate(&self) -> Option<Arc<dyn ShortenerDelegate>> {
        let slot = self.delegate.load_full()?;
        let delegate = slot.0.upgrade();
        if delegate.is_none() {
            debug!("Registered delegate was dropped by its owner");
        }
        delegate
    }

    /// Whether `url` is a durable link for this configuration.
    ///
    /// Always false before [`configure`](Self::configure) has been called.
    pub fn is_valid_durable_link(&self, url: &Url) -> bool {
        self.allowed_hosts
            .get()
            .is_some_and(|hosts| is_durable_link(url, hosts))
    }

    /// String form of [`is_valid_durable_link`](Self::is_valid_durable_link);
    /// unparseable input is simply not a durable link.
    pub fn is_valid_durable_link_str(&self, url: &str) -> bool {
        Url::parse(url).is_ok_and(|url| self.is_valid_durable_link(&url))
    }
}

impl std::fmt::Debug for DurableLinks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DurableLinks")
            .field("allowed_hosts", &self.allowed_hosts())
            .field("has_delegate", &self.delegate().is_some())
            .field("sdk_version", &self.sdk_version)
            .finish()
    }
}
