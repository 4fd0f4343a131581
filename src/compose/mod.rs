//! The composition algebra over [`Outcome`](crate::Outcome).
//!
//! Combinators are grouped by what they do:
//!
//! - [`construct`]: building outcomes (`ok`, `fail`, `ok_if`, `fail_if`,
//!   `attempt` and friends)
//! - [`transform`]: turning one outcome into another (`map`, `bind`,
//!   `map_errors`, the `with_*` family, value type conversions)
//! - [`combine`]: folding many outcomes into one
//!
//! Every combinator that has to create a reason from a message or a captured
//! error reads the current [`Settings`](crate::settings::Settings) snapshot
//! once and uses it for the whole call.
//!
//! # Examples
//!
//! ```
//! use reason_rail::{Error, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     Outcome::attempt(|| raw.parse::<u16>())
//! }
//!
//! fn validate(port: u16) -> Outcome<u16> {
//!     Outcome::ok_if(port >= 1024, "privileged port").to_typed(port)
//! }
//!
//! let accepted = parse_port("8080").bind(validate).with_success("port checked");
//! assert_eq!(accepted.value(), Some(&8080));
//!
//! let rejected = parse_port("80").bind(validate);
//! assert!(rejected.has_error_matching(|e: &Error| e.message() == "privileged port"));
//! ```

pub mod combine;
pub mod construct;
pub mod transform;
