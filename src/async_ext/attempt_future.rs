//! Future wrapper capturing a future's error as a failed outcome.
//!
//! This module provides `AttemptFuture`, which wraps a
//! `Future<Output = Result<T, E>>` and resolves to an [`Outcome<T>`].

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::traits::IntoError;
use crate::types::Outcome;

pin_project! {
    /// A Future wrapper that turns the inner future's `Result` into an
    /// [`Outcome`].
    ///
    /// The handler only runs when the inner future resolves to `Err`. Any
    /// message it returns goes through the error factory of the settings in
    /// effect on the thread that polls the future to completion.
    ///
    /// # Cancel Safety
    ///
    /// `AttemptFuture` is cancel-safe if the inner future is cancel-safe.
    /// Dropping it before completion drops the inner future; nothing is
    /// captured.
    #[must_use = "futures do nothing unless polled"]
    pub struct AttemptFuture<Fut, H> {
        #[pin]
        future: Fut,
        handler: Option<H>,
    }
}

impl<Fut, H> AttemptFuture<Fut, H> {
    /// Creates a new `AttemptFuture` with the given future and error handler.
    #[inline]
    pub fn new(future: Fut, handler: H) -> Self {
        Self { future, handler: Some(handler) }
    }
}

impl<Fut, H, C, T, E> Future for AttemptFuture<Fut, H>
where
    Fut: Future<Output = Result<T, E>>,
    H: FnOnce(E) -> C,
    C: IntoError,
{
    type Output = Outcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|res| {
            let handler = this
                .handler
                .take()
                .expect("AttemptFuture polled after completion; this is a bug");
            match res {
                Ok(value) => Outcome::ok_with(value),
                Err(error) => Outcome::fail(handler(error)),
            }
        })
    }
}

impl<Fut, H, C, T, E> FusedFuture for AttemptFuture<Fut, H>
where
    Fut: Future<Output = Result<T, E>>,
    H: FnOnce(E) -> C,
    C: IntoError,
{
    fn is_terminated(&self) -> bool {
        // the handler is taken on completion, whatever the result
        self.handler.is_none()
    }
}
