//! Client layer bridging a host-supplied delegate
//!
//! The delegate speaks callbacks; callers get one awaited result.
//!
//! # Architecture
//!
//! ```text
//! shorten(components) → build long URL ──→ delegate.shorten_url(url, completion)
//! resolve(url)        → allow-list check ─→ delegate.exchange_short_code(url, completion)
//!                                                  │
//!                       awaited Result  ←── oneshot ┘
//! ```
//!
//! # Completion Policy
//!
//! - result present → `Ok(result)`
//! - error present → `Err(DurableLinksError::Delegate(error))`, unchanged
//! - neither, or completion dropped unfired → `UnknownDelegateResponse`
//! - caller cancelled → late completion discarded, delegate not called again
//! - no timeout: a delegate that holds its completion forever keeps the call pending

mod context;
mod delegate;
mod link_client;

pub use context::{DurableLinks, SDK_VERSION, shared};
pub use delegate::{Completion, ShortenerDelegate};

use tracing::warn;

use crate::errors::{DurableLinksError, Result};

/// Hand a fresh completion to `dispatch` and wait for it to fire.
///
/// `dispatch` runs exactly once, when the returned future is first polled,
/// since nothing in an `async fn` body runs before that. Dropping the future
/// drops the receiver, which turns any later completion into a no-op.
pub(crate) async fn await_completion<T>(
    operation: &'static str,
    dispatch: impl FnOnce(Completion<T>),
) -> Result<T> {
    let (completion, rx) = Completion::channel(operation);
    dispatch(completion);

    match rx.await {
        Ok(outcome) => outcome,
        Err(_) => {
            warn!(operation, "Delegate dropped its completion without firing");
            Err(DurableLinksError::UnknownDelegateResponse)
        }
    }
}
