//! Combinators turning one outcome into another.

use core::any::type_name;
use std::error::Error as StdError;

use crate::settings;
use crate::traits::{IntoError, IntoSuccess};
use crate::types::{Error, Exception, Outcome, Reason, Reasons, Success};

impl<V> Outcome<V> {
    /// Applies `f` to the held value, keeping the reasons unchanged.
    ///
    /// There is no success guard: a failed outcome that still holds a value
    /// gets it mapped too. Use [`bind`](Self::bind) to stop at the first
    /// failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use reason_rail::Outcome;
    ///
    /// let doubled = Outcome::ok_with(21).map(|v| v * 2);
    /// assert_eq!(doubled.value(), Some(&42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(V) -> U,
    {
        let (reasons, value) = self.into_parts();
        Outcome::from_parts(reasons, value.map(f))
    }

    /// Replaces every error reason with `f(error)`, in place.
    #[inline]
    pub fn map_errors<F>(self, f: F) -> Self
    where
        F: FnMut(Error) -> Error,
    {
        let (reasons, value) = self.into_parts();
        Self::from_parts(reasons.map_errors(f), value)
    }

    /// Replaces every success reason with `f(success)`, in place.
    #[inline]
    pub fn map_successes<F>(self, f: F) -> Self
    where
        F: FnMut(Success) -> Success,
    {
        let (reasons, value) = self.into_parts();
        Self::from_parts(reasons.map_successes(f), value)
    }

    /// Chains an outcome-returning step.
    ///
    /// A failed outcome is carried over with its reasons and no value; `f` is
    /// not called. Otherwise the result holds this outcome's reasons followed
    /// by the step's, and the step's value.
    ///
    /// # Examples
    ///
    /// ```
    /// use reason_rail::Outcome;
    ///
    /// fn reciprocal(v: f64) -> Outcome<f64> {
    ///     Outcome::fail_if(v == 0.0, "division by zero").to_typed(1.0 / v)
    /// }
    ///
    /// let ok = Outcome::ok_with(4.0).with_success("loaded").bind(reciprocal);
    /// assert_eq!(ok.value(), Some(&0.25));
    /// assert_eq!(ok.reasons().len(), 1);
    ///
    /// let failed = Outcome::<f64>::fail("missing input").bind(reciprocal);
    /// assert_eq!(failed.errors()[0].message(), "missing input");
    /// ```
    pub fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(V) -> Outcome<U>,
    {
        let failed = self.is_failed();
        let (mut reasons, value) = self.into_parts();
        match value {
            Some(value) if !failed => {
                let (next_reasons, next_value) = f(value).into_parts();
                reasons.extend(next_reasons);
                Outcome::from_parts(reasons, next_value)
            },
            _ => Outcome::from_parts(reasons, None),
        }
    }

    /// Appends an error, making the outcome failed.
    #[inline]
    pub fn with_error<C: IntoError>(mut self, error: C) -> Self {
        let settings = settings::current();
        self.reasons_mut().push(Reason::Error(error.into_error(&settings)));
        self
    }

    /// Appends several errors in order.
    #[inline]
    pub fn with_errors<I>(mut self, errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoError,
    {
        let settings = settings::current();
        self.reasons_mut()
            .extend(errors.into_iter().map(|error| Reason::Error(error.into_error(&settings))));
        self
    }

    /// Appends a success reason. The status is unchanged.
    #[inline]
    pub fn with_success<S: IntoSuccess>(mut self, success: S) -> Self {
        let settings = settings::current();
        self.reasons_mut().push(Reason::Success(success.into_success(&settings)));
        self
    }

    /// Appends several success reasons in order.
    #[inline]
    pub fn with_successes<I>(mut self, successes: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoSuccess,
    {
        let settings = settings::current();
        self.reasons_mut().extend(
            successes
                .into_iter()
                .map(|success| Reason::Success(success.into_success(&settings))),
        );
        self
    }

    /// Appends a ready-made reason.
    #[inline]
    pub fn with_reason<R: Into<Reason>>(mut self, reason: R) -> Self {
        self.reasons_mut().push(reason.into());
        self
    }

    /// Appends several ready-made reasons in order.
    #[inline]
    pub fn with_reasons<I>(mut self, reasons: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Reason>,
    {
        self.reasons_mut().extend(reasons.into_iter().map(Into::into));
        self
    }

    /// Replaces the held value. Reasons and status are unchanged.
    #[inline]
    pub fn with_value(self, value: V) -> Self {
        Self::from_parts(self.into_reasons(), Some(value))
    }

    /// Drops the value type, keeping the reasons.
    ///
    /// On an untyped outcome this returns an equal outcome.
    #[inline]
    pub fn to_unit(self) -> Outcome {
        self.map(|_| ())
    }

    /// Converts the held value to `U` with [`TryFrom`].
    ///
    /// When the conversion fails, the result is failed: its first reason is
    /// an exceptional error wrapping the conversion error, followed by this
    /// outcome's reasons. An outcome without a value is carried over as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use reason_rail::Outcome;
    /// use std::num::TryFromIntError;
    ///
    /// let small = Outcome::ok_with(200_i32).try_convert::<u8>();
    /// assert_eq!(small.value(), Some(&200));
    ///
    /// let large = Outcome::ok_with(300_i32).with_success("read").try_convert::<u8>();
    /// assert!(large.errors()[0].is_exceptional());
    /// assert!(large.has_exception::<TryFromIntError>());
    /// assert_eq!(large.successes()[0].message(), "read");
    /// ```
    pub fn try_convert<U>(self) -> Outcome<U>
    where
        U: TryFrom<V>,
        U::Error: StdError + Send + Sync + 'static,
    {
        let (reasons, value) = self.into_parts();
        let Some(value) = value else {
            return Outcome::from_parts(reasons, None);
        };

        match U::try_from(value) {
            Ok(converted) => Outcome::from_parts(reasons, Some(converted)),
            Err(error) => {
                let settings = settings::current();
                let exception = Exception::new(error);
                let message = format!(
                    "converting `{}` to `{}` failed: {}",
                    type_name::<V>(),
                    type_name::<U>(),
                    exception
                );
                let mut failed = Reasons::new();
                failed.push(Reason::Error(settings.exceptional_error(message, exception)));
                failed.extend(reasons);
                Outcome::from_parts(failed, None)
            },
        }
    }
}

impl Outcome {
    /// Gives an untyped outcome a value type.
    ///
    /// `value` is kept only when the outcome is successful.
    #[inline]
    pub fn to_typed<V>(self, value: V) -> Outcome<V> {
        let held = if self.is_success() { Some(value) } else { None };
        Outcome::from_parts(self.into_reasons(), held)
    }
}
