//! Async extensions for reason-rail.
//!
//! This module provides async counterparts of the outcome combinators and a
//! future adapter that captures a future's error as a failed outcome.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! reason-rail = { version = "0.7", features = ["async"] }
//! ```
//!
//! # Settings and tasks
//!
//! Combinators read the settings snapshot when they build a reason, on the
//! thread that polls them at that moment. A snapshot installed with
//! [`settings::scoped`](crate::settings::scoped) is therefore only seen while
//! the future is polled inside the scoped call.
//!
//! # Examples
//!
//! ```rust
//! use reason_rail::prelude_async::*;
//!
//! async fn fetch_quota(user: u64) -> Result<u32, std::io::Error> {
//!     Ok(user as u32 * 10)
//! }
//!
//! async fn example() -> Outcome<u32> {
//!     fetch_quota(4)
//!         .attempt()
//!         .await
//!         .bind_async(|quota| async move { Outcome::ok_if(quota > 0, "no quota").to_typed(quota) })
//!         .await
//! }
//! ```

mod attempt_future;
mod combinators;
mod future_ext;

pub use attempt_future::AttemptFuture;
pub use combinators::combine_async;
pub use future_ext::{FutureAttemptExt, SettingsHandler};
