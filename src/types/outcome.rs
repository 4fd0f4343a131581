use core::any::Any;
use core::fmt;
use std::error::Error as StdError;

use crate::types::reason_tree;
use crate::types::{Error, Reasons, Success};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize};

/// An immutable success-or-failure value with an ordered list of reasons.
///
/// `Outcome<()>` is the untyped form; `Outcome<V>` additionally carries a
/// value. The status is derived from the reasons only: an outcome is failed
/// as soon as it holds one [`Error`], and successful otherwise. Successes may
/// sit next to errors on a failed outcome.
///
/// Every combinator takes `self` by value and returns a new outcome, so a
/// value observed through a reference never changes.
///
/// # Examples
///
/// ```
/// use reason_rail::{Error, Outcome};
///
/// let parsed = Outcome::ok_with(41).map(|v| v + 1);
/// assert_eq!(parsed.value(), Some(&42));
///
/// let failed = Outcome::<i32>::fail(Error::new("not a number").with_metadata("input", "x"));
/// assert!(failed.is_failed());
/// assert_eq!(failed.value_or_default(), 0);
/// ```
#[must_use = "an outcome may be failed and should be inspected"]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(bound(serialize = "V: Serialize")))]
pub struct Outcome<V = ()> {
    reasons: Reasons,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none", serialize_with = "held::serialize")
    )]
    value: Option<V>,
}

impl<V> Outcome<V> {
    /// Assembles an outcome from raw parts.
    #[inline]
    pub(crate) fn from_parts(reasons: Reasons, value: Option<V>) -> Self {
        Self { reasons, value }
    }

    #[inline]
    pub(crate) fn reasons_mut(&mut self) -> &mut Reasons {
        &mut self.reasons
    }

    /// Returns `true` if no reason is an error.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.reasons.is_success()
    }

    /// Returns `true` if at least one reason is an error.
    #[inline]
    pub fn is_failed(&self) -> bool {
        self.reasons.is_failed()
    }

    /// Returns the full ordered reason list.
    #[inline]
    pub fn reasons(&self) -> &Reasons {
        &self.reasons
    }

    /// Returns the error reasons in order.
    #[inline]
    pub fn errors(&self) -> Vec<&Error> {
        self.reasons.errors().collect()
    }

    /// Returns the success reasons in order.
    #[inline]
    pub fn successes(&self) -> Vec<&Success> {
        self.reasons.successes().collect()
    }

    /// Returns the value of a successful outcome.
    ///
    /// A failed outcome yields `None` even when it still holds a value; see
    /// [`held_value`](Self::held_value) for the raw slot.
    #[inline]
    pub fn value(&self) -> Option<&V> {
        if self.is_success() {
            self.value.as_ref()
        } else {
            None
        }
    }

    /// Returns the value on success, `default` otherwise.
    #[inline]
    pub fn value_or(self, default: V) -> V {
        self.into_value().unwrap_or(default)
    }

    /// Returns the value on success, `V::default()` otherwise.
    #[inline]
    pub fn value_or_default(&self) -> V
    where
        V: Default + Clone,
    {
        self.value().cloned().unwrap_or_default()
    }

    /// Consumes the outcome, returning the value on success.
    #[inline]
    pub fn into_value(self) -> Option<V> {
        if self.is_success() {
            self.value
        } else {
            None
        }
    }

    /// Returns whatever value is stored, regardless of status.
    #[inline]
    pub fn held_value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Consumes the outcome, returning its reasons.
    #[inline]
    pub fn into_reasons(self) -> Reasons {
        self.reasons
    }

    /// Consumes the outcome, returning its reasons and raw value slot.
    #[inline]
    pub fn into_parts(self) -> (Reasons, Option<V>) {
        (self.reasons, self.value)
    }

    /// Returns `true` if any error, at any depth, satisfies `predicate`.
    #[inline]
    pub fn has_error_matching<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Error) -> bool,
    {
        !self.find_errors(predicate).is_empty()
    }

    /// Returns `true` if the outcome holds any error.
    ///
    /// Same as [`is_failed`](Self::is_failed); nested causes only exist below
    /// a direct error.
    #[inline]
    pub fn has_error(&self) -> bool {
        self.is_failed()
    }

    /// Returns `true` if any error, at any depth, carries an `A` attachment.
    ///
    /// # Examples
    ///
    /// ```
    /// use reason_rail::{Error, Outcome};
    ///
    /// struct NotFound;
    ///
    /// let outcome = Outcome::<()>::fail(
    ///     Error::new("loading profile failed")
    ///         .caused_by(Error::new("user 7 missing").with_attachment(NotFound)),
    /// );
    /// assert!(outcome.has_error_of::<NotFound>());
    /// ```
    #[inline]
    pub fn has_error_of<A: Any>(&self) -> bool {
        self.has_error_of_matching::<A, _>(|_, _| true)
    }

    /// Returns `true` if any error carries an `A` attachment satisfying
    /// `predicate`.
    #[inline]
    pub fn has_error_of_matching<A, P>(&self, predicate: P) -> bool
    where
        A: Any,
        P: Fn(&Error, &A) -> bool,
    {
        self.has_error_matching(|error| {
            error.attachment::<A>().is_some_and(|attachment| predicate(error, attachment))
        })
    }

    /// Finds the errors satisfying `predicate`.
    ///
    /// Direct errors are checked first; only when none matches are the
    /// causes searched, depth first, returning the first subtree with
    /// matches. See [`reason_tree`].
    #[inline]
    pub fn find_errors<P>(&self, predicate: P) -> Vec<&Error>
    where
        P: Fn(&Error) -> bool,
    {
        reason_tree::find_errors(self.reasons.errors(), predicate)
    }

    /// Returns `true` if any exceptional error, at any depth, captured a `K`.
    #[inline]
    pub fn has_exception<K>(&self) -> bool
    where
        K: StdError + 'static,
    {
        self.has_exception_matching::<K, _>(|_| true)
    }

    /// Returns `true` if any exceptional error captured a `K` satisfying
    /// `predicate`.
    #[inline]
    pub fn has_exception_matching<K, P>(&self, predicate: P) -> bool
    where
        K: StdError + 'static,
        P: Fn(&K) -> bool,
    {
        !self.find_exceptions(predicate).is_empty()
    }

    /// Finds the exceptional errors that captured a `K` satisfying
    /// `predicate`.
    #[inline]
    pub fn find_exceptions<K, P>(&self, predicate: P) -> Vec<&Error>
    where
        K: StdError + 'static,
        P: Fn(&K) -> bool,
    {
        reason_tree::find_exceptions(self.reasons.errors(), predicate)
    }

    /// Returns `true` if the outcome holds any success reason.
    #[inline]
    pub fn has_success(&self) -> bool {
        self.reasons.successes().next().is_some()
    }

    #[inline]
    pub fn has_success_matching<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Success) -> bool,
    {
        !self.find_successes(predicate).is_empty()
    }

    /// Returns `true` if any success carries an `A` attachment.
    #[inline]
    pub fn has_success_of<A: Any>(&self) -> bool {
        self.has_success_matching(|success| success.attachment::<A>().is_some())
    }

    #[inline]
    pub fn find_successes<P>(&self, predicate: P) -> Vec<&Success>
    where
        P: Fn(&Success) -> bool,
    {
        reason_tree::find_successes(self.reasons.successes(), predicate)
    }
}

/// Renders `Outcome: IsSuccess='<bool>'` followed by the reasons, if any.
///
/// The value is not part of the rendering; use `Debug` to see it.
impl<V> fmt::Display for Outcome<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Outcome: IsSuccess='{}'", self.is_success())?;
        if !self.reasons.is_empty() {
            write!(f, ", Reasons='{}'", self.reasons)?;
        }
        Ok(())
    }
}

/// Wire form of an outcome, checked before it becomes an [`Outcome`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename = "Outcome", bound(deserialize = "V: Deserialize<'de>"))]
struct OutcomeRepr<V> {
    #[serde(default)]
    reasons: Reasons,
    #[serde(default, deserialize_with = "held::deserialize")]
    value: Option<V>,
}

/// Rejects a successful outcome without a value, which no constructor can
/// produce.
#[cfg(feature = "serde")]
impl<'de, V> Deserialize<'de> for Outcome<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let OutcomeRepr { reasons, value } = OutcomeRepr::deserialize(deserializer)?;
        if reasons.is_success() && value.is_none() {
            return Err(de::Error::custom("a successful outcome must hold a value"));
        }
        Ok(Self { reasons, value })
    }
}

/// Serializes a held value as the bare value and restores any present field
/// as held, so `Outcome<()>`'s `Some(())` survives formats that render `()`
/// as `null`.
#[cfg(feature = "serde")]
mod held {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub(super) fn serialize<S, V>(value: &Option<V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        V: Serialize,
    {
        match value {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub(super) fn deserialize<'de, D, V>(deserializer: D) -> Result<Option<V>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        V::deserialize(deserializer).map(Some)
    }
}
