//! Tests for the async outcome combinators.

use reason_rail::prelude_async::*;
use std::cell::Cell;
use std::io;

async fn double(v: i32) -> Outcome<i32> {
    Outcome::ok_with(v * 2).with_success("doubled")
}

#[tokio::test]
async fn attempt_async_captures_err() {
    let ok = Outcome::attempt_async(|| async { Ok::<_, io::Error>(1) }).await;
    assert_eq!(ok.value(), Some(&1));

    let failed = Outcome::<u8>::attempt_async(|| async { Err(io::Error::other("late")) }).await;
    assert!(failed.has_exception::<io::Error>());
}

#[tokio::test]
async fn bind_async_concatenates_reasons() {
    let outcome = Outcome::ok_with(4).with_success("loaded").bind_async(double).await;

    assert_eq!(outcome.value(), Some(&8));
    let messages: Vec<&str> = outcome.successes().into_iter().map(Success::message).collect();
    assert_eq!(messages, vec!["loaded", "doubled"]);
}

#[tokio::test]
async fn bind_async_skips_step_on_failure() {
    let called = Cell::new(false);
    let outcome = Outcome::<i32>::fail("E")
        .bind_async(|v| {
            called.set(true);
            async move { Outcome::ok_with(v) }
        })
        .await;

    assert!(!called.get());
    assert!(outcome.is_failed());
}

#[tokio::test]
async fn conditional_constructors_await_the_condition() {
    assert!(Outcome::ok_if_async(async { true }, "e").await.is_success());
    assert!(Outcome::ok_if_async(async { false }, "e").await.is_failed());
    assert!(Outcome::fail_if_async(async { true }, "e").await.is_failed());
    assert!(Outcome::fail_if_async(async { false }, "e").await.is_success());
}

#[tokio::test]
async fn lazy_async_conditionals_build_error_only_when_failing() {
    let calls = Cell::new(0);
    let error = || {
        calls.set(calls.get() + 1);
        Error::new("locked")
    };

    assert!(Outcome::ok_if_else_async(async { true }, error).await.is_success());
    assert!(Outcome::fail_if_else_async(async { false }, error).await.is_success());
    assert_eq!(calls.get(), 0);

    assert!(Outcome::fail_if_else_async(async { true }, error).await.is_failed());
    assert_eq!(calls.get(), 1);
}

#[tokio::test]
async fn combine_async_awaits_all_in_order() {
    let outcome = combine_async([double(1), double(2), double(3)]).await;

    assert_eq!(outcome.value(), Some(&vec![2, 4, 6]));
    assert_eq!(outcome.successes().len(), 3);
}

#[tokio::test]
async fn combine_async_failure_dominates() {
    async fn check(v: i32) -> Outcome<i32> {
        Outcome::fail_if(v < 0, format!("{v} is negative")).to_typed(v)
    }

    let outcome = combine_async([check(1), check(-2), check(-3)]).await;

    assert!(outcome.is_failed());
    assert_eq!(outcome.held_value(), None);
    let messages: Vec<&str> = outcome.errors().into_iter().map(Error::message).collect();
    assert_eq!(messages, vec!["-2 is negative", "-3 is negative"]);
}
