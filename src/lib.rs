//! A Result algebra with ordered, searchable reasons.
//!
//! An [`Outcome`] is either successful or failed, and carries an ordered list
//! of [`Reason`]s explaining why: [`Success`] notes and [`Error`]s, where each
//! error may itself carry causing errors or a captured native error. Instead
//! of stopping at the first `?`, code builds outcomes with explicit
//! combinators and inspects the whole reason tree afterwards.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `reason_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Building and chaining
//!
//! ```
//! use reason_rail::{Error, Outcome};
//!
//! fn parse_quantity(raw: &str) -> Outcome<u32> {
//!     Outcome::attempt(|| raw.trim().parse::<u32>())
//! }
//!
//! fn reserve(quantity: u32) -> Outcome<u32> {
//!     Outcome::fail_if_else(quantity > 10, || {
//!         Error::new("not enough stock").with_metadata("requested", quantity)
//!     })
//!     .to_typed(quantity)
//!     .with_success("stock reserved")
//! }
//!
//! let reserved = parse_quantity(" 3 ").bind(reserve);
//! assert_eq!(reserved.value(), Some(&3));
//! assert!(reserved.has_success_matching(|s| s.message() == "stock reserved"));
//!
//! let refused = parse_quantity("12").bind(reserve);
//! assert!(refused.has_error_matching(|e| e.has_metadata_key("requested")));
//! ```
//!
//! ## Searching causes
//!
//! ```
//! use reason_rail::{Error, Outcome};
//! use std::io;
//!
//! let outcome = Outcome::<()>::fail(
//!     Error::new("sync failed")
//!         .caused_by(Error::new("upload failed").caused_by_exception(io::Error::other("reset"))),
//! );
//!
//! assert!(outcome.has_exception::<io::Error>());
//! assert_eq!(outcome.find_errors(|e| e.message() == "upload failed").len(), 1);
//! ```
//!
//! ## Aggregation
//!
//! ```
//! use reason_rail::{Outcome, OutcomeIterExt};
//!
//! let merged = ["1", "2", "x"]
//!     .iter()
//!     .map(|raw| Outcome::attempt(|| raw.parse::<i32>()))
//!     .merge();
//!
//! assert!(merged.is_failed());
//! assert_eq!(merged.errors().len(), 1);
//! ```

/// Outcome combinators: construction, transformation and aggregation
pub mod compose;
/// Conversions between `Result` and `Outcome`
pub mod convert;
/// Logging hook and logger implementations
pub mod logging;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Process-wide factories, exception handler and logger
pub mod settings;
/// Core traits for building and folding outcomes
pub mod traits;
/// Reasons, the reason tree and the `Outcome` type
pub mod types;

/// Async extensions for outcomes (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use convert::*;
pub use logging::{LogLevel, OutcomeLogger};
pub use settings::Settings;
pub use traits::*;
pub use types::{
    Attachment, Error, ErrorKind, Exception, Metadata, MetadataValue, Outcome, PanicError, Reason,
    ReasonVec, Reasons, Success,
};
