//! Host-supplied backend contract

use tokio::sync::oneshot;
use tracing::{debug, warn};
use url::Url;

use crate::errors::{DelegateError, DurableLinksError, Result};
use crate::model::{ExchangeResult, ShortenResult};

/// The two backend operations a host application provides.
///
/// Both methods must eventually hand their [`Completion`] a result or an
/// error, from any thread. They are called at most once per client call.
pub trait ShortenerDelegate: Send + Sync {
    /// Shorten a fully built long link.
    fn shorten_url(&self, long_url: Url, completion: Completion<ShortenResult>);

    /// Exchange an incoming short link for its long link.
    fn exchange_short_code(&self, requested_link: Url, completion: Completion<ExchangeResult>);
}

/// Single-shot completion handle given to a delegate.
///
/// Consumed on use, so it can fire at most once. Firing after the caller
/// stopped waiting is allowed and the outcome is discarded. Dropping it
/// without firing fails the call with `UnknownDelegateResponse`.
#[must_use = "the waiting call only finishes when the completion fires or is dropped"]
pub struct Completion<T> {
    operation: &'static str,
    tx: oneshot::Sender<Result<T>>,
}

impl<T> Completion<T> {
    pub(crate) fn channel(operation: &'static str) -> (Self, oneshot::Receiver<Result<T>>) {
        let (tx, rx) = oneshot::channel();
        (Self { operation, tx }, rx)
    }

    /// Deliver the delegate's answer.
    ///
    /// A present `result` wins; otherwise a present `error` is passed through
    /// untouched; with neither the call fails with `UnknownDelegateResponse`.
    pub fn complete(self, result: Option<T>, error: Option<DelegateError>) {
        let outcome = match (result, error) {
            (Some(value), _) => Ok(value),
            (None, Some(err)) => Err(DurableLinksError::Delegate(err)),
            (None, None) => {
                warn!(
                    operation = self.operation,
                    "Delegate completed without result or error"
                );
                Err(DurableLinksError::UnknownDelegateResponse)
            }
        };

        if self.tx.send(outcome).is_err() {
            debug!(
                operation = self.operation,
                "Caller stopped waiting, discarding late completion"
            );
        }
    }

    pub fn succeed(self, value: T) {
        self.complete(Some(value), None);
    }

    pub fn fail(self, error: impl Into<DelegateError>) {
        self.complete(None, Some(error.into()));
    }

    /// Whether the caller has already given up on this call.
    pub fn is_cancelled(&self) -> bool {
        self.tx.is_closed()
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl<T> std::fmt::Debug for Completion<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completion")
            .field("operation", &self.operation)
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
