//! Typed payload slot for reasons.
//!
//! Rather than defining new reason types to carry extra fields, callers attach
//! an arbitrary value to a [`Success`](crate::Success) or
//! [`Error`](crate::Error) and later search for it by type.

use core::any::{type_name, Any};
use core::fmt;
use std::sync::Arc;

/// Opaque, shared, typed attachment.
///
/// Attachments compare equal only when they share the same allocation.
///
/// # Examples
///
/// ```
/// use reason_rail::types::Attachment;
///
/// #[derive(Debug, PartialEq)]
/// struct HttpStatus(u16);
///
/// let attachment = Attachment::new(HttpStatus(404));
/// assert_eq!(attachment.downcast_ref::<HttpStatus>(), Some(&HttpStatus(404)));
/// assert!(attachment.downcast_ref::<String>().is_none());
/// ```
#[derive(Clone)]
pub struct Attachment {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Attachment {
    /// Wraps `value` as an attachment.
    #[inline]
    pub fn new<A>(value: A) -> Self
    where
        A: Any + Send + Sync,
    {
        Self { value: Arc::new(value), type_name: type_name::<A>() }
    }

    /// Returns the type name of the attached value.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if the attached value is an `A`.
    #[inline]
    pub fn is<A: Any>(&self) -> bool {
        self.value.is::<A>()
    }

    /// Downcasts the attached value to `A`.
    #[inline]
    pub fn downcast_ref<A: Any>(&self) -> Option<&A> {
        self.value.downcast_ref::<A>()
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Attachment({})", self.type_name)
    }
}

impl PartialEq for Attachment {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::addr_eq(Arc::as_ptr(&self.value), Arc::as_ptr(&other.value))
    }
}
