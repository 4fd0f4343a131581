//! Async counterparts of the outcome combinators.
//!
//! These only suspend while awaiting the caller's futures. Dropping the
//! returned future cancels the work; nothing is captured on the way out.

use core::future::Future;
use std::error::Error as StdError;

use crate::compose::combine::merge_parts;
use crate::traits::IntoError;
use crate::types::{Outcome, Reasons};

impl<V> Outcome<V> {
    /// Awaits the future built by `f`, capturing an `Err` like
    /// [`attempt`](Self::attempt).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reason_rail::Outcome;
    ///
    /// async fn example() {
    ///     let outcome = Outcome::attempt_async(|| async { "17".parse::<u8>() }).await;
    ///     assert_eq!(outcome.value(), Some(&17));
    /// }
    /// ```
    pub async fn attempt_async<F, Fut, E>(f: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
        E: StdError + Send + Sync + 'static,
    {
        match f().await {
            Ok(value) => Self::ok_with(value),
            Err(error) => Self::fail_exception(error),
        }
    }

    /// Async form of [`bind`](Self::bind). The step is neither called nor
    /// awaited when this outcome is failed.
    pub async fn bind_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        let failed = self.is_failed();
        let (mut reasons, value) = self.into_parts();
        match value {
            Some(value) if !failed => {
                let (next_reasons, next_value) = f(value).await.into_parts();
                reasons.extend(next_reasons);
                Outcome::from_parts(reasons, next_value)
            },
            _ => Outcome::from_parts(reasons, None),
        }
    }
}

impl Outcome {
    /// Awaits `condition`, then behaves like [`ok_if`](Self::ok_if).
    pub async fn ok_if_async<Fut, C>(condition: Fut, error: C) -> Self
    where
        Fut: Future<Output = bool>,
        C: IntoError,
    {
        Self::ok_if(condition.await, error)
    }

    /// Awaits `condition`, then behaves like [`ok_if_else`](Self::ok_if_else).
    pub async fn ok_if_else_async<Fut, F, C>(condition: Fut, error: F) -> Self
    where
        Fut: Future<Output = bool>,
        F: FnOnce() -> C,
        C: IntoError,
    {
        Self::ok_if_else(condition.await, error)
    }

    /// Awaits `condition`, then behaves like [`fail_if`](Self::fail_if).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reason_rail::Outcome;
    ///
    /// async fn is_locked(_account: u64) -> bool {
    ///     true
    /// }
    ///
    /// async fn example() {
    ///     let outcome = Outcome::fail_if_async(is_locked(7), "account locked").await;
    ///     assert!(outcome.is_failed());
    /// }
    /// ```
    pub async fn fail_if_async<Fut, C>(condition: Fut, error: C) -> Self
    where
        Fut: Future<Output = bool>,
        C: IntoError,
    {
        Self::fail_if(condition.await, error)
    }

    /// Awaits `condition`, then behaves like
    /// [`fail_if_else`](Self::fail_if_else).
    pub async fn fail_if_else_async<Fut, F, C>(condition: Fut, error: F) -> Self
    where
        Fut: Future<Output = bool>,
        F: FnOnce() -> C,
        C: IntoError,
    {
        Self::fail_if_else(condition.await, error)
    }
}

/// Awaits outcome futures one after another and combines the results like
/// [`Outcome::combine`].
///
/// # Note
///
/// Futures are awaited **sequentially** (not in parallel) to stay runtime
/// neutral, and every future is awaited even after a failure. For parallel
/// execution, join the futures with a runtime-specific combinator and pass
/// the resolved outcomes to [`Outcome::combine`].
///
/// # Examples
///
/// ```rust
/// use reason_rail::async_ext::combine_async;
/// use reason_rail::Outcome;
///
/// async fn check(n: u32) -> Outcome<u32> {
///     Outcome::ok_if(n % 2 == 0, format!("{n} is odd")).to_typed(n)
/// }
///
/// async fn example() {
///     let combined = combine_async([check(2), check(3), check(4)]).await;
///     assert_eq!(combined.errors()[0].message(), "3 is odd");
/// }
/// ```
pub async fn combine_async<V, Fut, I>(outcomes: I) -> Outcome<Vec<V>>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Outcome<V>>,
{
    let iter = outcomes.into_iter();
    let (lower, upper) = iter.size_hint();
    let capacity = upper.unwrap_or(lower);

    let mut reasons = Reasons::new();
    let mut values = Vec::with_capacity(capacity);

    for fut in iter {
        let (outcome_reasons, value) = fut.await.into_parts();
        reasons.extend(outcome_reasons);
        values.extend(value);
    }

    merge_parts(reasons, values)
}
