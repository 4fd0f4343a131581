//! Reason and outcome types.
//!
//! This module provides the data model of the crate: the [`Reason`] tree
//! (successes, errors and exceptional errors with their metadata and causes)
//! and the [`Outcome`] envelope that carries an ordered list of reasons.
//!
//! # Examples
//!
//! ```
//! use reason_rail::{Error, Outcome};
//!
//! let outcome = Outcome::<()>::fail(
//!     Error::new("saving order failed")
//!         .with_metadata("order_id", 42)
//!         .caused_by(Error::new("connection reset")),
//! );
//!
//! assert!(outcome.is_failed());
//! assert_eq!(
//!     outcome.to_string(),
//!     "Outcome: IsSuccess='false', Reasons='Error with Message='saving order failed', \
//!      Metadata='order_id=42', Reasons='Error with Message='connection reset'''"
//! );
//! ```
use smallvec::SmallVec;

pub mod attachment;
pub mod exception;
pub mod metadata;
pub mod outcome;
pub mod reason;
pub mod reason_tree;
pub mod reasons;

pub use attachment::Attachment;
pub use exception::{Exception, PanicError, SerializedException, SharedError};
pub use metadata::{Metadata, MetadataValue};
pub use outcome::Outcome;
pub use reason::{Error, ErrorKind, Reason, Success};
pub use reasons::Reasons;

/// SmallVec-backed collection used for reason lists and metadata entries.
///
/// Uses inline storage for up to 2 elements, which covers the common case of
/// an outcome carrying a single error plus an optional success note.
pub type ReasonVec<T> = SmallVec<[T; 2]>;
