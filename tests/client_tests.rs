//! Delegate bridge integration tests
//!
//! Mock delegates answer inline, from other threads, late, or never, to
//! exercise each completion outcome of shorten/resolve.

use durablelinks::{
    AndroidParameters, Completion, DurableLinks, DurableLinksError, ExchangeResult,
    LinkComponents, ShortenResult, ShortenerDelegate,
};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

// =============================================================================
// Mock delegates
// =============================================================================

#[derive(Debug)]
struct BackendError(&'static str);

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "backend: {}", self.0)
    }
}

impl std::error::Error for BackendError {}

#[derive(Clone, Copy)]
enum Reply {
    Success,
    Failure,
    Nothing,
    Drop,
}

/// Answers inline according to `reply`, recording what it was asked.
struct ScriptedDelegate {
    reply: Reply,
    shorten_calls: AtomicUsize,
    exchange_calls: AtomicUsize,
    last_long_url: Mutex<Option<Url>>,
}

impl ScriptedDelegate {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            shorten_calls: AtomicUsize::new(0),
            exchange_calls: AtomicUsize::new(0),
            last_long_url: Mutex::new(None),
        })
    }
}

impl ShortenerDelegate for ScriptedDelegate {
    fn shorten_url(&self, long_url: Url, completion: Completion<ShortenResult>) {
        self.shorten_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_long_url.lock().unwrap() = Some(long_url);
        match self.reply {
            Reply::Success => completion.succeed(
                ShortenResult::new(Url::parse("https://acme.wayp.link/Xy12").unwrap())
                    .with_warning("UNRECOGNIZED_PARAM", "ignored param foo"),
            ),
            Reply::Failure => completion.fail(BackendError("quota")),
            Reply::Nothing => completion.complete(None, None),
            Reply::Drop => drop(completion),
        }
    }

    fn exchange_short_code(&self, requested_link: Url, completion: Completion<ExchangeResult>) {
        self.exchange_calls.fetch_add(1, Ordering::SeqCst);
        match self.reply {
            Reply::Success => {
                let long = format!("https://acme.com/resolved{}", requested_link.path());
                completion.succeed(ExchangeResult::new(Url::parse(&long).unwrap()))
            }
            Reply::Failure => completion.fail(BackendError("unknown code")),
            Reply::Nothing => completion.complete(None, None),
            Reply::Drop => drop(completion),
        }
    }
}

/// Keeps completions around so the test decides when (or whether) they fire.
#[derive(Default)]
struct ParkingDelegate {
    calls: AtomicUsize,
    shorten: Mutex<Option<Completion<ShortenResult>>>,
    exchange: Mutex<Option<Completion<ExchangeResult>>>,
}

impl ShortenerDelegate for ParkingDelegate {
    fn shorten_url(&self, _long_url: Url, completion: Completion<ShortenResult>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.shorten.lock().unwrap() = Some(completion);
    }

    fn exchange_short_code(&self, _requested_link: Url, completion: Completion<ExchangeResult>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.exchange.lock().unwrap() = Some(completion);
    }
}

/// Answers from a spawned thread after a short pause.
struct ThreadedDelegate;

impl ShortenerDelegate for ThreadedDelegate {
    fn shorten_url(&self, _long_url: Url, completion: Completion<ShortenResult>) {
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(20));
            completion.succeed(ShortenResult::new(
                Url::parse("https://acme.wayp.link/thr").unwrap(),
            ));
        });
    }

    fn exchange_short_code(&self, _requested_link: Url, completion: Completion<ExchangeResult>) {
        std::thread::spawn(move || {
            completion.succeed(ExchangeResult::new(
                Url::parse("https://acme.com/thr").unwrap(),
            ));
        });
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn client() -> DurableLinks {
    let links = DurableLinks::new();
    links.configure(["acme.wayp.link"]).unwrap();
    links
}

fn components() -> LinkComponents {
    LinkComponents::new(
        Url::parse("https://acme.com/item/42").unwrap(),
        "https://acme.wayp.link",
    )
    .unwrap()
    .with_android(AndroidParameters::new("com.acme.app").minimum_version(5))
}

fn incoming() -> Url {
    Url::parse("https://acme.wayp.link/abc123").unwrap()
}

// =============================================================================
// shorten
// =============================================================================

#[tokio::test]
async fn test_shorten_without_delegate() {
    let links = client();
    let err = links.shorten(&components()).await.unwrap_err();
    assert!(matches!(err, DurableLinksError::DelegateUnavailable));
}

#[tokio::test]
async fn test_shorten_success_passes_built_url() {
    let links = client();
    let delegate = ScriptedDelegate::new(Reply::Success);
    links.set_delegate(&delegate);

    let result = links.shorten(&components()).await.unwrap();
    assert_eq!(result.short_link.as_str(), "https://acme.wayp.link/Xy12");
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].code, "UNRECOGNIZED_PARAM");

    let sent = delegate.last_long_url.lock().unwrap().clone().unwrap();
    assert_eq!(sent, components().build().unwrap());
    assert_eq!(delegate.shorten_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_shorten_delegate_error_is_verbatim() {
    let links = client();
    let delegate = ScriptedDelegate::new(Reply::Failure);
    links.set_delegate(&delegate);

    let err = links.shorten(&components()).await.unwrap_err();
    let inner = err.into_delegate_error().expect("delegate error");
    let backend = inner.downcast::<BackendError>().expect("same error type");
    assert_eq!(backend.0, "quota");
}

#[tokio::test]
async fn test_shorten_empty_reply() {
    let links = client();
    let delegate = ScriptedDelegate::new(Reply::Nothing);
    links.set_delegate(&delegate);

    assert!(matches!(
        links.shorten(&components()).await,
        Err(DurableLinksError::UnknownDelegateResponse)
    ));
}

#[tokio::test]
async fn test_shorten_dropped_completion() {
    let links = client();
    let delegate = ScriptedDelegate::new(Reply::Drop);
    links.set_delegate(&delegate);

    assert!(matches!(
        links.shorten(&components()).await,
        Err(DurableLinksError::UnknownDelegateResponse)
    ));
}

#[tokio::test]
async fn test_shorten_bad_prefix_never_reaches_delegate() {
    let links = client();
    let delegate = ScriptedDelegate::new(Reply::Success);
    links.set_delegate(&delegate);

    let bad: LinkComponents = serde_json::from_str(
        r#"{"link":"https://acme.com/a","domain_prefix":"http://acme.wayp.link"}"#,
    )
    .unwrap();
    assert!(matches!(
        links.shorten(&bad).await,
        Err(DurableLinksError::InvalidDurableLink)
    ));
    assert_eq!(delegate.shorten_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_shorten_completion_from_other_thread() {
    let links = client();
    let delegate = Arc::new(ThreadedDelegate);
    links.set_delegate(&delegate);

    let result = links.shorten(&components()).await.unwrap();
    assert_eq!(result.short_link.path(), "/thr");
}

// =============================================================================
// resolve
// =============================================================================

#[tokio::test]
async fn test_resolve_success() {
    let links = client();
    let delegate = ScriptedDelegate::new(Reply::Success);
    links.set_delegate(&delegate);

    let durable = links.resolve(&incoming()).await.unwrap();
    assert_eq!(durable.url.as_str(), "https://acme.com/resolved/abc123");
    assert_eq!(delegate.exchange_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_resolve_invalid_link_checked_before_delegate() {
    let links = client();
    assert!(matches!(
        links.resolve_str("https://evil.example/abc").await,
        Err(DurableLinksError::InvalidDurableLink)
    ));

    let delegate = ScriptedDelegate::new(Reply::Success);
    links.set_delegate(&delegate);
    assert!(matches!(
        links.resolve_str("https://acme.wayp.link/").await,
        Err(DurableLinksError::InvalidDurableLink)
    ));
    assert_eq!(delegate.exchange_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_resolve_unparseable_input() {
    let links = client();
    assert!(matches!(
        links.resolve_str("::not a url::").await,
        Err(DurableLinksError::InvalidDurableLink)
    ));
}

#[tokio::test]
async fn test_resolve_without_delegate() {
    let links = client();
    assert!(matches!(
        links.resolve(&incoming()).await,
        Err(DurableLinksError::DelegateUnavailable)
    ));
}

#[tokio::test]
async fn test_resolve_empty_reply() {
    let links = client();
    let delegate = ScriptedDelegate::new(Reply::Nothing);
    links.set_delegate(&delegate);

    assert!(matches!(
        links.resolve(&incoming()).await,
        Err(DurableLinksError::UnknownDelegateResponse)
    ));
}

#[tokio::test]
async fn test_resolve_delegate_error() {
    let links = client();
    let delegate = ScriptedDelegate::new(Reply::Failure);
    links.set_delegate(&delegate);

    let err = links.resolve(&incoming()).await.unwrap_err();
    assert_eq!(err.to_string(), "Delegate Error: backend: unknown code");
}

#[tokio::test]
async fn test_resolve_completion_from_other_thread() {
    let links = client();
    let delegate = Arc::new(ThreadedDelegate);
    links.set_delegate(&delegate);

    let durable = links.resolve(&incoming()).await.unwrap();
    assert_eq!(durable.url.as_str(), "https://acme.com/thr");
}

// =============================================================================
// Delegate lifecycle
// =============================================================================

#[tokio::test]
async fn test_dropped_delegate_is_unavailable() {
    let links = client();
    let delegate = ScriptedDelegate::new(Reply::Success);
    links.set_delegate(&delegate);
    drop(delegate);

    assert!(matches!(
        links.shorten(&components()).await,
        Err(DurableLinksError::DelegateUnavailable)
    ));
}

#[tokio::test]
async fn test_replacing_delegate_routes_new_calls() {
    let links = client();
    let first = ScriptedDelegate::new(Reply::Failure);
    let second = ScriptedDelegate::new(Reply::Success);

    links.set_delegate(&first);
    assert!(links.shorten(&components()).await.is_err());

    links.set_delegate(&second);
    assert!(links.shorten(&components()).await.is_ok());

    assert_eq!(first.shorten_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second.shorten_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_in_flight_call_keeps_its_delegate() {
    let links = Arc::new(client());
    let parking = Arc::new(ParkingDelegate::default());
    links.set_delegate(&parking);

    let task = {
        let links = links.clone();
        tokio::spawn(async move { links.shorten(&components()).await })
    };
    while parking.calls.load(Ordering::SeqCst) == 0 {
        tokio::task::yield_now().await;
    }

    let other = ScriptedDelegate::new(Reply::Failure);
    links.set_delegate(&other);

    let completion = parking.shorten.lock().unwrap().take().unwrap();
    completion.succeed(ShortenResult::new(
        Url::parse("https://acme.wayp.link/old").unwrap(),
    ));

    let result = task.await.unwrap().unwrap();
    assert_eq!(result.short_link.path(), "/old");
    assert_eq!(other.shorten_calls.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Cancellation
// =============================================================================

#[tokio::test]
async fn test_cancelled_shorten_tolerates_late_completion() {
    let links = client();
    let parking = Arc::new(ParkingDelegate::default());
    links.set_delegate(&parking);

    let outcome = tokio::time::timeout(Duration::from_millis(20), links.shorten(&components())).await;
    assert!(outcome.is_err(), "call should still be pending");
    assert_eq!(parking.calls.load(Ordering::SeqCst), 1);

    let completion = parking.shorten.lock().unwrap().take().unwrap();
    assert!(completion.is_cancelled());
    completion.succeed(ShortenResult::new(
        Url::parse("https://acme.wayp.link/late").unwrap(),
    ));

    assert_eq!(parking.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_aborted_resolve_task_releases_completion() {
    let links = Arc::new(client());
    let parking = Arc::new(ParkingDelegate::default());
    links.set_delegate(&parking);

    let task = {
        let links = links.clone();
        tokio::spawn(async move { links.resolve(&incoming()).await })
    };
    while parking.calls.load(Ordering::SeqCst) == 0 {
        tokio::task::yield_now().await;
    }

    task.abort();
    assert!(task.await.unwrap_err().is_cancelled());

    let completion = parking.exchange.lock().unwrap().take().unwrap();
    assert!(completion.is_cancelled());
    completion.complete(None, None);
    assert_eq!(parking.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_unpolled_shorten_never_calls_delegate() {
    let links = client();
    let parking = Arc::new(ParkingDelegate::default());
    links.set_delegate(&parking);

    // shorten is an async fn: building the future does not dispatch
    let components = components();
    let fut = links.shorten(&components);
    drop(fut);

    assert_eq!(parking.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_pending_shorten_polls_once_into_delegate() {
    let links = client();
    let parking = Arc::new(ParkingDelegate::default());
    links.set_delegate(&parking);

    let components = components();
    let mut fut = tokio_test::task::spawn(links.shorten(&components));
    tokio_test::assert_pending!(fut.poll());
    tokio_test::assert_pending!(fut.poll());
    assert_eq!(parking.calls.load(Ordering::SeqCst), 1);

    let completion = parking.shorten.lock().unwrap().take().unwrap();
    completion.succeed(ShortenResult::new(
        Url::parse("https://acme.wayp.link/ok").unwrap(),
    ));
    assert!(fut.is_woken());
    let result = tokio_test::assert_ready!(fut.poll());
    assert_eq!(result.unwrap().short_link.path(), "/ok");
}

// =============================================================================
// Shared instance
// =============================================================================

#[test]
fn test_shared_instance_is_a_singleton() {
    let a = durablelinks::shared() as *const DurableLinks;
    let b = durablelinks::shared() as *const DurableLinks;
    assert_eq!(a, b);
}
