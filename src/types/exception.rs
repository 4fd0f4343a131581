//! Captured exceptions carried by exceptional errors.
//!
//! An [`Exception`] is any `std::error::Error + Send + Sync + 'static` value
//! that was caught by [`Outcome::attempt`](crate::Outcome::attempt) or handed
//! to an exception-accepting constructor. It is shared behind an `Arc` so
//! cloning an outcome never clones the underlying error.

use core::any::{type_name, Any};
use core::fmt;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Shared, thread-safe trait object for a captured error.
pub type SharedError = Arc<dyn StdError + Send + Sync + 'static>;

/// A captured native error value.
///
/// Two exceptions compare equal when they share the same allocation, or when
/// both their type names and rendered messages match.
///
/// # Examples
///
/// ```
/// use reason_rail::types::Exception;
/// use std::io;
///
/// let exception = Exception::new(io::Error::other("disk full"));
/// assert!(exception.is::<io::Error>());
/// assert_eq!(exception.message(), "disk full");
/// ```
#[derive(Clone)]
pub struct Exception {
    source: SharedError,
    type_name: Cow<'static, str>,
}

impl Exception {
    /// Captures an error value.
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self { source: Arc::new(error), type_name: Cow::Borrowed(type_name::<E>()) }
    }

    /// Captures an already boxed error. The concrete type name is unknown.
    #[inline]
    pub fn from_boxed(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self { source: Arc::from(error), type_name: Cow::Borrowed("dyn Error") }
    }

    /// Wraps an already shared error. The concrete type name is unknown.
    #[inline]
    pub fn from_shared(error: SharedError) -> Self {
        Self { source: error, type_name: Cow::Borrowed("dyn Error") }
    }

    /// Returns the recorded type name of the captured error.
    #[inline]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the captured error's display text.
    #[inline]
    pub fn message(&self) -> String {
        self.source.to_string()
    }

    /// Borrows the captured error.
    #[inline]
    pub fn get(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.source
    }

    /// Returns a new handle to the shared error.
    #[inline]
    pub fn shared(&self) -> SharedError {
        Arc::clone(&self.source)
    }

    /// Returns `true` if the captured error is a `K`.
    #[inline]
    pub fn is<K>(&self) -> bool
    where
        K: StdError + 'static,
    {
        self.source.is::<K>()
    }

    /// Downcasts the captured error to `K`.
    #[inline]
    pub fn downcast_ref<K>(&self) -> Option<&K>
    where
        K: StdError + 'static,
    {
        self.source.downcast_ref::<K>()
    }
}

impl fmt::Debug for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exception")
            .field("type_name", &self.type_name)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.source, f)
    }
}

impl PartialEq for Exception {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source, &other.source)
            || (self.type_name == other.type_name && self.message() == other.message())
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct ExceptionRepr<'a> {
    type_name: Cow<'a, str>,
    message: Cow<'a, str>,
}

#[cfg(feature = "serde")]
impl Serialize for Exception {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ExceptionRepr {
            type_name: Cow::Borrowed(&self.type_name),
            message: Cow::Owned(self.message()),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Exception {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = ExceptionRepr::deserialize(deserializer)?;
        let type_name = repr.type_name.into_owned();
        let restored =
            SerializedException { type_name: type_name.clone(), message: repr.message.into_owned() };
        Ok(Self { source: Arc::new(restored), type_name: Cow::Owned(type_name) })
    }
}

/// Stand-in for an exception restored from its serialized form.
///
/// Only the type name and message survive a serialization round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedException {
    pub type_name: String,
    pub message: String,
}

impl fmt::Display for SerializedException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for SerializedException {}

/// Error type representing a panic captured by
/// [`Outcome::attempt_unwind`](crate::Outcome::attempt_unwind).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanicError {
    message: String,
}

impl PanicError {
    /// Builds a `PanicError` from a panic payload.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast_ref::<&'static str>() {
                Some(message) => (*message).to_owned(),
                None => "panic with a non-string payload".to_owned(),
            },
        };
        Self { message }
    }

    /// Returns the panic message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PanicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panicked: {}", self.message)
    }
}

impl StdError for PanicError {}
