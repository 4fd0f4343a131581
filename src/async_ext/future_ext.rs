//! Extension trait for `Future<Output = Result<T, E>>`.
//!
//! Provides `.attempt()` and `.attempt_with()` for futures, mirroring
//! [`Outcome::attempt`] and [`Outcome::attempt_with`].

use core::future::Future;
use std::error::Error as StdError;

use crate::traits::IntoError;
use crate::types::{Exception, Outcome};

use super::attempt_future::AttemptFuture;

/// Handler type used by [`FutureAttemptExt::attempt`].
///
/// The error is only captured here; the settings' exception handler converts
/// it when the future completes.
pub type SettingsHandler<E> = fn(E) -> Exception;

/// Extension trait turning `Result`-returning futures into [`Outcome`]
/// futures.
///
/// # Examples
///
/// ```rust
/// use reason_rail::prelude_async::*;
/// use std::io;
///
/// async fn read_config() -> Result<String, io::Error> {
///     Err(io::Error::new(io::ErrorKind::NotFound, "config.toml"))
/// }
///
/// async fn example() {
///     let outcome: Outcome<String> = read_config().attempt().await;
///     assert!(outcome.has_exception::<io::Error>());
/// }
/// ```
pub trait FutureAttemptExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Captures the future's error with the current settings' exception
    /// handler.
    fn attempt(self) -> AttemptFuture<Self, SettingsHandler<E>>
    where
        E: StdError + Send + Sync + 'static,
    {
        AttemptFuture::new(self, Exception::new::<E>)
    }

    /// Captures the future's error with `handler`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reason_rail::prelude_async::*;
    ///
    /// async fn lookup(key: &str) -> Result<u32, String> {
    ///     Err(format!("{key} is not cached"))
    /// }
    ///
    /// async fn example() {
    ///     let outcome = lookup("session").attempt_with(|e| e).await;
    ///     assert_eq!(outcome.errors()[0].message(), "session is not cached");
    /// }
    /// ```
    fn attempt_with<H, C>(self, handler: H) -> AttemptFuture<Self, H>
    where
        H: FnOnce(E) -> C,
        C: IntoError;
}

impl<Fut, T, E> FutureAttemptExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    fn attempt_with<H, C>(self, handler: H) -> AttemptFuture<Self, H>
    where
        H: FnOnce(E) -> C,
        C: IntoError,
    {
        AttemptFuture::new(self, handler)
    }
}
