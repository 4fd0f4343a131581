//! Extension trait for lifting `Result` values into outcomes.
//!
//! This module provides [`ResultExt`], which turns a plain `Result` into an
//! [`Outcome`] without spelling out `Outcome::attempt(|| ...)` around a value
//! that was already computed.
//!
//! # Examples
//!
//! ```
//! use reason_rail::traits::ResultExt;
//! use std::num::ParseIntError;
//!
//! let port = "80a".parse::<u16>().into_outcome();
//! assert!(port.has_exception::<ParseIntError>());
//! ```

use std::error::Error as StdError;

use crate::traits::IntoError;
use crate::types::Outcome;

/// Extension trait converting `Result` into [`Outcome`].
///
/// # Examples
///
/// ## Default conversion
///
/// ```
/// use reason_rail::traits::ResultExt;
///
/// let parsed: Result<i32, std::num::ParseIntError> = "7".parse();
/// assert_eq!(parsed.into_outcome().value(), Some(&7));
/// ```
///
/// ## Custom error
///
/// ```
/// use reason_rail::traits::ResultExt;
/// use reason_rail::Error;
///
/// let lookup: Result<u32, &str> = Err("no such key");
/// let outcome = lookup.into_outcome_with(|e| Error::new(e).with_metadata("store", "redis"));
/// assert!(outcome.errors()[0].has_metadata_key("store"));
/// ```
pub trait ResultExt<T, E> {
    /// Converts `Ok` into a successful outcome and `Err` into a failed one,
    /// using the current settings' exception handler.
    fn into_outcome(self) -> Outcome<T>
    where
        E: StdError + Send + Sync + 'static;

    /// Like [`into_outcome`](ResultExt::into_outcome), with the error
    /// converted by `f`. The closure only runs for `Err`.
    fn into_outcome_with<F, C>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(E) -> C,
        C: IntoError;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T>
    where
        E: StdError + Send + Sync + 'static,
    {
        Outcome::attempt(|| self)
    }

    #[inline]
    fn into_outcome_with<F, C>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(E) -> C,
        C: IntoError,
    {
        Outcome::attempt_with(|| self, f)
    }
}
