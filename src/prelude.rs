//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use reason_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Outcome`], [`Error`], [`Success`], [`Reason`], [`Reasons`]
//! - **Traits**: [`ResultExt`], [`OutcomeIterExt`], [`IntoError`], [`IntoSuccess`]
//! - **Logging**: [`LogLevel`]
//!
//! # Examples
//!
//! ```
//! use reason_rail::prelude::*;
//!
//! fn load_config(raw: &str) -> Outcome<u16> {
//!     raw.parse::<u16>()
//!         .into_outcome_with(|e| Error::new("invalid port").with_metadata("cause", e.to_string()))
//! }
//!
//! assert!(load_config("http").is_failed());
//! ```

// Core types
pub use crate::types::{Error, Outcome, Reason, Reasons, Success};

// Traits
pub use crate::traits::{IntoError, IntoSuccess, OutcomeIterExt, ResultExt};

pub use crate::logging::LogLevel;
