//! Tests for FutureAttemptExt trait.

use reason_rail::async_ext::{AttemptFuture, SettingsHandler};
use reason_rail::prelude_async::*;
use reason_rail::settings::{self, Settings};
use std::future::Future;
use std::io;
use std::pin::pin;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll, Wake, Waker};

struct NoopWaker;

impl Wake for NoopWaker {
    fn wake(self: Arc<Self>) {}
}

#[test]
fn attempt_future_is_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<AttemptFuture<std::future::Ready<Result<(), io::Error>>, SettingsHandler<io::Error>>>();
    assert_sync::<AttemptFuture<std::future::Ready<Result<(), io::Error>>, SettingsHandler<io::Error>>>();
}

#[tokio::test]
async fn attempt_resolves_ok_to_success() {
    let outcome = async { Ok::<_, io::Error>(42) }.attempt().await;

    assert!(outcome.is_success());
    assert_eq!(outcome.value(), Some(&42));
}

#[tokio::test]
async fn attempt_resolves_err_to_exceptional_error() {
    let outcome = async { Err::<u8, _>(io::Error::other("refused")) }.attempt().await;

    assert!(outcome.is_failed());
    assert!(outcome.errors()[0].is_exceptional());
    assert!(outcome.has_exception::<io::Error>());
    assert_eq!(outcome.errors()[0].message(), "refused");
}

#[tokio::test]
async fn attempt_with_does_not_call_handler_on_success() {
    let call_count = AtomicU32::new(0);

    let outcome = async { Ok::<_, &str>(1) }
        .attempt_with(|e| {
            call_count.fetch_add(1, Ordering::SeqCst);
            e
        })
        .await;

    assert!(outcome.is_success());
    assert_eq!(call_count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn attempt_with_calls_handler_once_on_error() {
    let call_count = AtomicU32::new(0);

    let outcome = async { Err::<u8, _>("timeout") }
        .attempt_with(|e| {
            call_count.fetch_add(1, Ordering::SeqCst);
            Error::new(format!("upstream {e}"))
        })
        .await;

    assert_eq!(outcome.errors()[0].message(), "upstream timeout");
    assert_eq!(call_count.load(Ordering::SeqCst), 1);
}

#[test]
fn attempt_future_reports_termination() {
    use futures_core::future::FusedFuture;

    let settings = Settings::default();
    settings::scoped(settings, || {
        let mut fut = pin!(std::future::ready(Ok::<_, io::Error>(5)).attempt());
        assert!(!fut.is_terminated());

        let waker = Waker::from(Arc::new(NoopWaker));
        let mut cx = Context::from_waker(&waker);
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(outcome) => assert_eq!(outcome.value(), Some(&5)),
            Poll::Pending => panic!("ready future must complete"),
        }
        assert!(fut.is_terminated());
    });
}

#[test]
fn attempt_converts_with_the_settings_seen_at_completion() {
    let future = std::future::ready(Err::<u8, _>(io::Error::other("refused"))).attempt();
    let handled = Settings::builder()
        .exception_handler(|exception| Error::new(format!("handled: {}", exception.message())))
        .build();

    settings::scoped(handled, || {
        let mut fut = pin!(future);
        let waker = Waker::from(Arc::new(NoopWaker));
        let mut cx = Context::from_waker(&waker);
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(outcome) => {
                assert_eq!(outcome.errors().len(), 1);
                assert_eq!(outcome.errors()[0].message(), "handled: refused");
            },
            Poll::Pending => panic!("ready future must complete"),
        }
    });
}

#[tokio::test]
async fn dropping_the_future_captures_nothing() {
    let call_count = AtomicU32::new(0);

    let fut = async { Err::<u8, _>("never polled") }.attempt_with(|e| {
        call_count.fetch_add(1, Ordering::SeqCst);
        e
    });
    drop(fut);

    assert_eq!(call_count.load(Ordering::SeqCst), 0);
}
