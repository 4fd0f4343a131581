//! Constructors for outcomes.
//!
//! Untyped constructors (`ok`, `ok_if`, `fail_if` and their lazy forms) live
//! on `Outcome<()>`; everything that may produce a value is generic.

use std::error::Error as StdError;
use std::panic::{self, UnwindSafe};

use crate::settings;
use crate::traits::IntoError;
use crate::types::{Error, Exception, Outcome, PanicError, Reason, Reasons};

impl Outcome {
    /// Creates a successful untyped outcome without reasons.
    #[inline]
    pub fn ok() -> Self {
        Self::from_parts(Reasons::new(), Some(()))
    }

    /// Succeeds when `condition` holds, otherwise fails with `error`.
    ///
    /// A message is only turned into an error when failing, but `error` itself
    /// is built by the caller; use [`ok_if_else`](Self::ok_if_else) when
    /// building it is costly.
    ///
    /// # Examples
    ///
    /// ```
    /// use reason_rail::Outcome;
    ///
    /// let quota = 3;
    /// assert!(Outcome::ok_if(quota > 0, "quota exhausted").is_success());
    /// assert!(Outcome::ok_if(quota > 5, "quota exhausted").is_failed());
    /// ```
    #[inline]
    pub fn ok_if<C: IntoError>(condition: bool, error: C) -> Self {
        if condition {
            Self::ok()
        } else {
            Self::fail(error)
        }
    }

    /// Like [`ok_if`](Self::ok_if), but `error` is only called when failing.
    #[inline]
    pub fn ok_if_else<F, C>(condition: bool, error: F) -> Self
    where
        F: FnOnce() -> C,
        C: IntoError,
    {
        if condition {
            Self::ok()
        } else {
            Self::fail(error())
        }
    }

    /// Fails with `error` when `condition` holds, otherwise succeeds.
    #[inline]
    pub fn fail_if<C: IntoError>(condition: bool, error: C) -> Self {
        Self::ok_if(!condition, error)
    }

    /// Like [`fail_if`](Self::fail_if), but `error` is only called when failing.
    ///
    /// # Examples
    ///
    /// ```
    /// use reason_rail::{Error, Outcome};
    ///
    /// let name = "";
    /// let outcome = Outcome::fail_if_else(name.is_empty(), || {
    ///     Error::new("name is required").with_metadata("field", "name")
    /// });
    /// assert!(outcome.is_failed());
    /// ```
    #[inline]
    pub fn fail_if_else<F, C>(condition: bool, error: F) -> Self
    where
        F: FnOnce() -> C,
        C: IntoError,
    {
        Self::ok_if_else(!condition, error)
    }
}

impl<V> Outcome<V> {
    /// Creates a successful outcome holding `value`.
    #[inline]
    pub fn ok_with(value: V) -> Self {
        Self::from_parts(Reasons::new(), Some(value))
    }

    /// Creates a failed outcome with a single error.
    ///
    /// Plain messages go through the current settings' error factory.
    #[inline]
    pub fn fail<C: IntoError>(error: C) -> Self {
        let settings = settings::current();
        let mut reasons = Reasons::new();
        reasons.push(Reason::Error(error.into_error(&settings)));
        Self::from_parts(reasons, None)
    }

    /// Creates a failed outcome with the given errors, in order.
    ///
    /// # Panics
    ///
    /// Panics if `errors` yields nothing: a failed outcome needs at least one
    /// error.
    pub fn fail_many<I>(errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoError,
    {
        let settings = settings::current();
        let reasons: Reasons = errors
            .into_iter()
            .map(|error| Reason::Error(error.into_error(&settings)))
            .collect();
        assert!(!reasons.is_empty(), "`fail_many` requires at least one error");
        Self::from_parts(reasons, None)
    }

    /// Creates a failed outcome from a native error, converted with the
    /// current settings' exception handler.
    #[inline]
    pub fn fail_exception<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::fail(Exception::new(error))
    }

    /// Creates a failed outcome with one exceptional error per native error.
    ///
    /// # Panics
    ///
    /// Panics if `errors` yields nothing.
    pub fn fail_exceptions<I, E>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: StdError + Send + Sync + 'static,
    {
        let settings = settings::current();
        let reasons: Reasons = errors
            .into_iter()
            .map(|error| Reason::Error(settings.handle_exception(Exception::new(error))))
            .collect();
        assert!(!reasons.is_empty(), "`fail_exceptions` requires at least one error");
        Self::from_parts(reasons, None)
    }

    /// Creates a failed outcome from a message. Same as [`fail`](Self::fail)
    /// with a string.
    #[inline]
    pub fn from_message<S: Into<String>>(message: S) -> Self {
        Self::fail(message.into())
    }

    /// Same as [`fail_exception`](Self::fail_exception).
    #[inline]
    pub fn from_exception<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::fail_exception(error)
    }

    /// Creates a failed outcome from a list of errors.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty.
    #[inline]
    pub fn from_errors(errors: Vec<Error>) -> Self {
        assert!(!errors.is_empty(), "`from_errors` requires at least one error");
        Self::fail_many(errors)
    }

    /// Runs `f`, capturing an `Err` as a failed outcome.
    ///
    /// The error is wrapped in an [`Exception`] and converted by the current
    /// settings' exception handler. It never propagates. Panics are not
    /// captured; see [`attempt_unwind`](Self::attempt_unwind).
    ///
    /// # Examples
    ///
    /// ```
    /// use reason_rail::Outcome;
    /// use std::num::ParseIntError;
    ///
    /// let parsed = Outcome::attempt(|| "12".parse::<i32>());
    /// assert_eq!(parsed.value(), Some(&12));
    ///
    /// let broken = Outcome::attempt(|| "twelve".parse::<i32>());
    /// assert!(broken.has_exception::<ParseIntError>());
    /// ```
    #[inline]
    pub fn attempt<F, E>(f: F) -> Self
    where
        F: FnOnce() -> Result<V, E>,
        E: StdError + Send + Sync + 'static,
    {
        match f() {
            Ok(value) => Self::ok_with(value),
            Err(error) => Self::fail_exception(error),
        }
    }

    /// Runs `f`, converting an `Err` with `handler` instead of the settings'
    /// exception handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use reason_rail::{Error, Outcome};
    ///
    /// let outcome = Outcome::attempt_with(
    ///     || "x".parse::<u8>(),
    ///     |e| Error::new("invalid byte").with_metadata("cause", e.to_string()),
    /// );
    /// assert_eq!(outcome.errors()[0].message(), "invalid byte");
    /// ```
    #[inline]
    pub fn attempt_with<F, E, H, C>(f: F, handler: H) -> Self
    where
        F: FnOnce() -> Result<V, E>,
        H: FnOnce(E) -> C,
        C: IntoError,
    {
        match f() {
            Ok(value) => Self::ok_with(value),
            Err(error) => Self::fail(handler(error)),
        }
    }

    /// Like [`attempt`](Self::attempt), but also captures a panic raised by
    /// `f` as a [`PanicError`] exception.
    ///
    /// The panic hook still runs, so the panic message is printed as usual.
    pub fn attempt_unwind<F, E>(f: F) -> Self
    where
        F: FnOnce() -> Result<V, E> + UnwindSafe,
        E: StdError + Send + Sync + 'static,
    {
        match panic::catch_unwind(f) {
            Ok(result) => match result {
                Ok(value) => Self::ok_with(value),
                Err(error) => Self::fail_exception(error),
            },
            Err(payload) => Self::fail_exception(PanicError::from_payload(payload)),
        }
    }
}
