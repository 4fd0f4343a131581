//! Core traits for building and folding outcomes.
//!
//! - [`IntoError`] / [`IntoSuccess`]: accept either a ready-made reason or a
//!   message wherever a reason is expected
//! - [`ResultExt`]: lifts `Result` into [`Outcome`](crate::Outcome)
//! - [`OutcomeIterExt`]: merges an iterator of outcomes
//!
//! # Examples
//!
//! ```
//! use reason_rail::traits::{OutcomeIterExt, ResultExt};
//!
//! let merged = ["1", "2", "x"]
//!     .iter()
//!     .map(|raw| raw.parse::<i32>().into_outcome())
//!     .merge();
//!
//! assert!(merged.is_failed());
//! assert_eq!(merged.errors().len(), 1);
//! ```

pub mod into_reason;
pub mod outcome_iter;
pub mod result_ext;

pub use into_reason::{IntoError, IntoSuccess};
pub use outcome_iter::OutcomeIterExt;
pub use result_ext::ResultExt;
