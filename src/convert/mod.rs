//! Conversion helpers between `Result` and [`Outcome`].
//!
//! These adapters make it straightforward to adopt `reason-rail` at the edge
//! of an existing codebase: wrap the `Result`s coming out of legacy code, and
//! hand plain `Result`s back to APIs that expect them.
//!
//! # Examples
//!
//! ```
//! use reason_rail::convert::*;
//!
//! let result: Result<i32, std::num::ParseIntError> = "42".parse();
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_success());
//!
//! let back = outcome_to_result(outcome);
//! assert_eq!(back, Ok(42));
//! ```

use std::error::Error as StdError;

use crate::types::{Outcome, Reasons};

/// Converts a `Result` to an [`Outcome`].
///
/// # Returns
///
/// * a successful outcome holding the value if `result` is `Ok`
/// * a failed outcome with one exceptional error, built by the current
///   settings' exception handler, if `result` is `Err`
///
/// # Examples
///
/// ```
/// use reason_rail::convert::result_to_outcome;
/// use std::io;
///
/// let outcome = result_to_outcome::<(), _>(Err(io::Error::other("pipe closed")));
/// assert!(outcome.has_exception::<io::Error>());
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T>
where
    E: StdError + Send + Sync + 'static,
{
    Outcome::from_result(result)
}

/// Converts an [`Outcome`] to a `Result`.
///
/// # Returns
///
/// * `Ok(value)` if the outcome is successful and holds a value
/// * `Err(reasons)` otherwise, with the full reason list so no diagnostic is
///   lost
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, Reasons> {
    outcome.into_result()
}

impl<V> Outcome<V> {
    /// Builds an outcome from a `Result`. See [`result_to_outcome`].
    #[inline]
    pub fn from_result<E>(result: Result<V, E>) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::attempt(|| result)
    }

    /// Turns the outcome into a `Result`.
    ///
    /// A successful outcome without a value can only come from malformed
    /// deserialized data; it converts to `Err` with its (error-free) reasons.
    ///
    /// # Examples
    ///
    /// ```
    /// use reason_rail::Outcome;
    ///
    /// fn load() -> Result<u32, reason_rail::types::Reasons> {
    ///     let limit = Outcome::ok_with(10).with_success("defaulted").into_result()?;
    ///     Ok(limit * 2)
    /// }
    ///
    /// assert_eq!(load(), Ok(20));
    /// assert!(Outcome::<u32>::fail("no limit").into_result().is_err());
    /// ```
    pub fn into_result(self) -> Result<V, Reasons> {
        let failed = self.is_failed();
        match self.into_parts() {
            (_, Some(value)) if !failed => Ok(value),
            (reasons, _) => Err(reasons),
        }
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V>
where
    E: StdError + Send + Sync + 'static,
{
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        Self::from_result(result)
    }
}

impl<V> From<Outcome<V>> for Result<V, Reasons> {
    #[inline]
    fn from(outcome: Outcome<V>) -> Self {
        outcome.into_result()
    }
}
