//! Success and error reasons.
//!
//! A [`Reason`] is anything that can sit in an [`Outcome`](crate::Outcome)'s
//! reason list. Errors form a tree through their causes; successes are leaves.

use core::any::Any;
use core::fmt;
use std::error::Error as StdError;

use smallvec::SmallVec;

use crate::settings;
use crate::traits::IntoError;
use crate::types::{Attachment, Exception, Metadata, MetadataValue};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A reason that does not affect the failure status of an outcome.
///
/// # Examples
///
/// ```
/// use reason_rail::Success;
///
/// let success = Success::new("cache warmed").with_metadata("entries", 128);
/// assert_eq!(success.to_string(), "Success with Message='cache warmed', Metadata='entries=128'");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Success {
    message: String,
    #[cfg_attr(feature = "serde", serde(default))]
    metadata: Metadata,
    #[cfg_attr(feature = "serde", serde(skip))]
    attachment: Option<Attachment>,
}

impl Success {
    /// Creates a success reason with the given message.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into(), metadata: Metadata::new(), attachment: None }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Sets (or overwrites) a metadata entry.
    #[inline]
    pub fn with_metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        self.metadata.insert(key, value);
        self
    }

    /// Sets many metadata entries in iteration order.
    #[inline]
    pub fn with_metadata_map<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        self.metadata.extend(entries);
        self
    }

    #[inline]
    pub fn has_metadata_key(&self, key: &str) -> bool {
        self.metadata.contains_key(key)
    }

    /// Returns `true` if `key` is present and its value satisfies `predicate`.
    #[inline]
    pub fn has_metadata<P>(&self, key: &str, predicate: P) -> bool
    where
        P: FnOnce(&MetadataValue) -> bool,
    {
        self.metadata.get(key).is_some_and(predicate)
    }

    /// Attaches a typed payload, replacing any previous one.
    #[inline]
    pub fn with_attachment<A>(mut self, value: A) -> Self
    where
        A: Any + Send + Sync,
    {
        self.attachment = Some(Attachment::new(value));
        self
    }

    /// Returns the attached payload if it is an `A`.
    #[inline]
    pub fn attachment<A: Any>(&self) -> Option<&A> {
        self.attachment.as_ref().and_then(Attachment::downcast_ref::<A>)
    }
}

impl fmt::Display for Success {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ReasonText::new("Success")
            .info("Message", self.message.clone())
            .info("Metadata", self.metadata.to_string())
            .fmt(f)
    }
}

/// Discriminates plain domain errors from exceptional errors.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ErrorKind {
    /// An expected, recoverable failure.
    #[default]
    Domain,
    /// A failure produced from a captured native error.
    Exceptional(Exception),
}

/// A reason that marks an outcome as failed.
///
/// Errors carry their own ordered list of causing errors (`reasons`), forming
/// a tree that [`Outcome::has_error`](crate::Outcome::has_error) and friends
/// search. Causes are owned, so an error can never appear among its own
/// descendants.
///
/// # Examples
///
/// ```
/// use reason_rail::Error;
///
/// let error = Error::new("checkout failed")
///     .caused_by(Error::new("payment declined").with_metadata("code", "card_expired"));
///
/// assert_eq!(error.reasons().len(), 1);
/// assert_eq!(
///     error.to_string(),
///     "Error with Message='checkout failed', \
///      Reasons='Error with Message='payment declined', Metadata='code=card_expired''"
/// );
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    message: String,
    #[cfg_attr(feature = "serde", serde(default))]
    metadata: Metadata,
    #[cfg_attr(feature = "serde", serde(default))]
    reasons: Vec<Error>,
    #[cfg_attr(feature = "serde", serde(default))]
    kind: ErrorKind,
    #[cfg_attr(feature = "serde", serde(skip))]
    attachment: Option<Attachment>,
}

impl Error {
    /// Creates a domain error with the given message.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            metadata: Metadata::new(),
            reasons: Vec::new(),
            kind: ErrorKind::Domain,
            attachment: None,
        }
    }

    /// Creates an exceptional error carrying `exception`.
    #[inline]
    pub fn exceptional<S: Into<String>>(message: S, exception: Exception) -> Self {
        Self { kind: ErrorKind::Exceptional(exception), ..Self::new(message) }
    }

    /// Creates an exceptional error whose message is the error's display text.
    ///
    /// # Examples
    ///
    /// ```
    /// use reason_rail::Error;
    /// use std::io;
    ///
    /// let error = Error::from_exception(io::Error::other("timed out"));
    /// assert!(error.is_exceptional());
    /// assert_eq!(error.message(), "timed out");
    /// ```
    #[inline]
    pub fn from_exception<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let message = error.to_string();
        Self::exceptional(message, Exception::new(error))
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns the causing errors in the order they were added.
    #[inline]
    pub fn reasons(&self) -> &[Error] {
        &self.reasons
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the captured exception of an exceptional error.
    #[inline]
    pub fn exception(&self) -> Option<&Exception> {
        match &self.kind {
            ErrorKind::Exceptional(exception) => Some(exception),
            ErrorKind::Domain => None,
        }
    }

    #[inline]
    pub fn is_exceptional(&self) -> bool {
        matches!(self.kind, ErrorKind::Exceptional(_))
    }

    /// Returns the rendered type name: `Error` or `ExceptionalError`.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            ErrorKind::Domain => "Error",
            ErrorKind::Exceptional(_) => "ExceptionalError",
        }
    }

    /// Sets (or overwrites) a metadata entry.
    #[inline]
    pub fn with_metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        self.metadata.insert(key, value);
        self
    }

    /// Sets many metadata entries in iteration order.
    #[inline]
    pub fn with_metadata_map<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        self.metadata.extend(entries);
        self
    }

    #[inline]
    pub fn has_metadata_key(&self, key: &str) -> bool {
        self.metadata.contains_key(key)
    }

    /// Returns `true` if `key` is present and its value satisfies `predicate`.
    #[inline]
    pub fn has_metadata<P>(&self, key: &str, predicate: P) -> bool
    where
        P: FnOnce(&MetadataValue) -> bool,
    {
        self.metadata.get(key).is_some_and(predicate)
    }

    /// Appends a causing error.
    ///
    /// Plain messages are turned into errors with the current settings' error
    /// factory.
    #[inline]
    pub fn caused_by<C: IntoError>(mut self, cause: C) -> Self {
        let settings = settings::current();
        self.reasons.push(cause.into_error(&settings));
        self
    }

    /// Appends several causing errors, keeping their order.
    #[inline]
    pub fn caused_by_many<I>(mut self, causes: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoError,
    {
        let settings = settings::current();
        self.reasons.extend(causes.into_iter().map(|cause| cause.into_error(&settings)));
        self
    }

    /// Appends a causing exceptional error built by the current settings'
    /// exceptional error factory.
    #[inline]
    pub fn caused_by_exception<E>(mut self, error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let settings = settings::current();
        let exception = Exception::new(error);
        self.reasons.push(settings.exceptional_error(exception.message(), exception));
        self
    }

    /// Attaches a typed payload, replacing any previous one.
    #[inline]
    pub fn with_attachment<A>(mut self, value: A) -> Self
    where
        A: Any + Send + Sync,
    {
        self.attachment = Some(Attachment::new(value));
        self
    }

    /// Returns the attached payload if it is an `A`.
    #[inline]
    pub fn attachment<A: Any>(&self) -> Option<&A> {
        self.attachment.as_ref().and_then(Attachment::downcast_ref::<A>)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let causes = self.reasons.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ");
        let mut text = ReasonText::new(self.type_name())
            .info("Message", self.message.clone())
            .info("Metadata", self.metadata.to_string())
            .info("Reasons", causes);
        if let ErrorKind::Exceptional(exception) = &self.kind {
            text = text.info("Exception", format!("{}: {}", exception.type_name(), exception));
        }
        text.fmt(f)
    }
}

/// An entry of an outcome's reason list.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Reason {
    Success(Success),
    Error(Error),
}

impl Reason {
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(success) => success.message(),
            Self::Error(error) => error.message(),
        }
    }

    #[inline]
    pub fn metadata(&self) -> &Metadata {
        match self {
            Self::Success(success) => success.metadata(),
            Self::Error(error) => error.metadata(),
        }
    }

    #[inline]
    pub fn has_metadata_key(&self, key: &str) -> bool {
        self.metadata().contains_key(key)
    }

    #[inline]
    pub fn has_metadata<P>(&self, key: &str, predicate: P) -> bool
    where
        P: FnOnce(&MetadataValue) -> bool,
    {
        self.metadata().get(key).is_some_and(predicate)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[inline]
    pub fn as_error(&self) -> Option<&Error> {
        match self {
            Self::Error(error) => Some(error),
            Self::Success(_) => None,
        }
    }

    #[inline]
    pub fn as_success(&self) -> Option<&Success> {
        match self {
            Self::Success(success) => Some(success),
            Self::Error(_) => None,
        }
    }
}

impl From<Success> for Reason {
    #[inline]
    fn from(success: Success) -> Self {
        Self::Success(success)
    }
}

impl From<Error> for Reason {
    #[inline]
    fn from(error: Error) -> Self {
        Self::Error(error)
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(success) => fmt::Display::fmt(success, f),
            Self::Error(error) => fmt::Display::fmt(error, f),
        }
    }
}

/// Builds the `"<Type> with Label='value', ..."` rendering shared by reasons.
struct ReasonText {
    type_name: &'static str,
    infos: SmallVec<[(&'static str, String); 4]>,
}

impl ReasonText {
    fn new(type_name: &'static str) -> Self {
        Self { type_name, infos: SmallVec::new() }
    }

    // Empty values are left out of the rendering.
    fn info(mut self, label: &'static str, value: String) -> Self {
        if !value.is_empty() {
            self.infos.push((label, value));
        }
        self
    }

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)?;
        for (i, (label, value)) in self.infos.iter().enumerate() {
            let separator = if i == 0 { " with " } else { ", " };
            write!(f, "{}{}='{}'", separator, label, value)?;
        }
        Ok(())
    }
}
