use crate::types::{Error, Reason, ReasonVec, Success};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The ordered reason list of an outcome.
///
/// This struct wraps the underlying storage (currently `ReasonVec`) and derives
/// the failure status from its contents: the list is failed as soon as it holds
/// one [`Error`], whatever else it holds.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Reasons {
    items: ReasonVec<Reason>,
}

impl Reasons {
    /// Creates an empty reason list.
    #[inline]
    pub fn new() -> Self {
        Self { items: ReasonVec::new() }
    }

    #[inline]
    pub(crate) fn push(&mut self, reason: Reason) {
        self.items.push(reason);
    }

    #[inline]
    pub(crate) fn extend<I: IntoIterator<Item = Reason>>(&mut self, iter: I) {
        self.items.extend(iter);
    }

    /// Returns `true` if there are no reasons.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of reasons.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the reasons in insertion order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Reason> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Reason] {
        &self.items
    }

    /// Returns `true` if at least one reason is an error.
    #[inline]
    pub fn is_failed(&self) -> bool {
        self.items.iter().any(Reason::is_error)
    }

    /// Returns `true` if no reason is an error.
    #[inline]
    pub fn is_success(&self) -> bool {
        !self.is_failed()
    }

    /// Iterates the error reasons in order.
    #[inline]
    pub fn errors(&self) -> impl Iterator<Item = &Error> + Clone {
        self.items.iter().filter_map(Reason::as_error)
    }

    /// Iterates the success reasons in order.
    #[inline]
    pub fn successes(&self) -> impl Iterator<Item = &Success> + Clone {
        self.items.iter().filter_map(Reason::as_success)
    }

    /// Replaces every error in place, leaving successes untouched.
    pub(crate) fn map_errors<F>(self, mut f: F) -> Self
    where
        F: FnMut(Error) -> Error,
    {
        self.items
            .into_iter()
            .map(|reason| match reason {
                Reason::Error(error) => Reason::Error(f(error)),
                success => success,
            })
            .collect()
    }

    /// Replaces every success in place, leaving errors untouched.
    pub(crate) fn map_successes<F>(self, mut f: F) -> Self
    where
        F: FnMut(Success) -> Success,
    {
        self.items
            .into_iter()
            .map(|reason| match reason {
                Reason::Success(success) => Reason::Success(f(success)),
                error => error,
            })
            .collect()
    }

    /// Consumes the list and returns the underlying `ReasonVec`.
    #[inline]
    pub fn into_inner(self) -> ReasonVec<Reason> {
        self.items
    }
}

impl From<ReasonVec<Reason>> for Reasons {
    fn from(items: ReasonVec<Reason>) -> Self {
        Self { items }
    }
}

impl FromIterator<Reason> for Reasons {
    fn from_iter<I: IntoIterator<Item = Reason>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl IntoIterator for Reasons {
    type Item = Reason;
    type IntoIter = smallvec::IntoIter<[Reason; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Reasons {
    type Item = &'a Reason;
    type IntoIter = core::slice::Iter<'a, Reason>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Renders the reasons joined with `"; "`.
impl fmt::Display for Reasons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, reason) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            fmt::Display::fmt(reason, f)?;
        }
        Ok(())
    }
}
