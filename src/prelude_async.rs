//! Async prelude - all async utilities in one import.
//!
//! This module re-exports everything from the sync [`prelude`](crate::prelude)
//! plus async-specific items.
//!
//! # Usage
//!
//! ```
//! use reason_rail::prelude_async::*;
//!
//! async fn fetch_user(id: u64) -> Result<String, std::io::Error> {
//!     Ok(format!("user-{id}"))
//! }
//!
//! async fn example() -> Outcome<String> {
//!     fetch_user(7).attempt().await
//! }
//! ```
//!
//! # What's Included
//!
//! ## From Sync Prelude
//!
//! - **Types**: [`Outcome`], [`Error`], [`Success`], [`Reason`], [`Reasons`]
//! - **Traits**: [`ResultExt`], [`OutcomeIterExt`], [`IntoError`], [`IntoSuccess`]
//!
//! ## Async-Specific
//!
//! - **Traits**: [`FutureAttemptExt`](crate::async_ext::FutureAttemptExt) - `.attempt()` and `.attempt_with()` for futures
//! - **Types**: [`AttemptFuture`](crate::async_ext::AttemptFuture)
//! - **Functions**: [`combine_async`](crate::async_ext::combine_async)

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{combine_async, AttemptFuture, FutureAttemptExt};
