//! Traits for converting types into reasons.
//!
//! These traits let the `fail`, `with_error`, `with_success` and `caused_by`
//! families accept either a ready-made reason or a plain message. Messages
//! are turned into reasons by the factories of the [`Settings`] snapshot the
//! calling combinator is working with.
//!
//! # Implementations
//!
//! Both traits are implemented for:
//! - `String`, `&str` and `Cow<'static, str>` - built with the settings factory
//! - the reason type itself - identity conversion
//!
//! [`IntoError`] is also implemented for a captured [`Exception`], which goes
//! through the settings' exception handler.
//!
//! # Examples
//!
//! ```
//! use reason_rail::settings::Settings;
//! use reason_rail::traits::IntoError;
//! use reason_rail::Error;
//!
//! let settings = Settings::default();
//! let from_str = "disk full".into_error(&settings);
//! let from_error = Error::new("disk full").into_error(&settings);
//!
//! assert_eq!(from_str, from_error);
//! ```
use std::borrow::Cow;

use crate::settings::Settings;
use crate::types::{Error, Exception, Success};

/// Converts a type into an [`Error`].
///
/// # Implementing for Custom Types
///
/// ```
/// use reason_rail::settings::Settings;
/// use reason_rail::traits::IntoError;
/// use reason_rail::Error;
///
/// struct NotFound { id: u64 }
///
/// impl IntoError for NotFound {
///     fn into_error(self, _settings: &Settings) -> Error {
///         Error::new("not found").with_metadata("id", self.id)
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an error reason",
    label = "this type does not implement `IntoError`",
    note = "pass an `Error`, a message, or implement `IntoError` for `{Self}`"
)]
pub trait IntoError {
    /// Converts `self` into an [`Error`], using `settings` for any factory call.
    fn into_error(self, settings: &Settings) -> Error;
}

impl IntoError for Error {
    /// Identity conversion.
    #[inline]
    fn into_error(self, _settings: &Settings) -> Error {
        self
    }
}

impl IntoError for String {
    #[inline]
    fn into_error(self, settings: &Settings) -> Error {
        settings.error(self)
    }
}

impl IntoError for &str {
    #[inline]
    fn into_error(self, settings: &Settings) -> Error {
        settings.error(self.to_owned())
    }
}

impl IntoError for Cow<'static, str> {
    #[inline]
    fn into_error(self, settings: &Settings) -> Error {
        settings.error(self.into_owned())
    }
}

impl IntoError for Exception {
    #[inline]
    fn into_error(self, settings: &Settings) -> Error {
        settings.handle_exception(self)
    }
}

/// Converts a type into a [`Success`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a success reason",
    label = "this type does not implement `IntoSuccess`",
    note = "pass a `Success`, a message, or implement `IntoSuccess` for `{Self}`"
)]
pub trait IntoSuccess {
    /// Converts `self` into a [`Success`], using `settings` for any factory call.
    fn into_success(self, settings: &Settings) -> Success;
}

impl IntoSuccess for Success {
    /// Identity conversion.
    #[inline]
    fn into_success(self, _settings: &Settings) -> Success {
        self
    }
}

impl IntoSuccess for String {
    #[inline]
    fn into_success(self, settings: &Settings) -> Success {
        settings.success(self)
    }
}

impl IntoSuccess for &str {
    #[inline]
    fn into_success(self, settings: &Settings) -> Success {
        settings.success(self.to_owned())
    }
}

impl IntoSuccess for Cow<'static, str> {
    #[inline]
    fn into_success(self, settings: &Settings) -> Success {
        settings.success(self.into_owned())
    }
}
