//! Logging hook for outcomes.
//!
//! The crate never logs on its own. Call sites opt in with
//! [`Outcome::log`], [`Outcome::log_for`], [`Outcome::log_if_failed`] or
//! [`Outcome::log_if_success`], which hand the outcome to the
//! [`OutcomeLogger`] of the current [`Settings`](crate::settings::Settings).
//! The default logger, [`NoopLogger`], discards everything; enable the
//! `tracing` feature for [`TracingLogger`].
//!
//! # Examples
//!
//! ```
//! use reason_rail::logging::{LogLevel, OutcomeLogger};
//! use reason_rail::settings::{self, Settings};
//! use reason_rail::types::Reasons;
//! use reason_rail::Outcome;
//! use std::sync::{Arc, Mutex};
//!
//! #[derive(Debug, Default)]
//! struct Collect(Mutex<Vec<String>>);
//!
//! impl OutcomeLogger for Collect {
//!     fn log(&self, context: &str, content: &str, outcome: &Reasons, _level: LogLevel) {
//!         self.0.lock().unwrap().push(format!("{context}: {content} ({})", outcome.is_success()));
//!     }
//! }
//!
//! let lines = Arc::new(Collect::default());
//! let logging = Settings::builder().logger(Arc::clone(&lines)).build();
//!
//! settings::scoped(logging, || {
//!     let _ = Outcome::ok().log("import", "finished", LogLevel::Info);
//! });
//! assert_eq!(lines.0.lock().unwrap().as_slice(), ["import: finished (true)"]);
//! ```

use core::fmt;
use std::sync::Arc;

use crate::settings;
use crate::types::{Outcome, Reasons};

/// Severity passed to the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        };
        f.write_str(name)
    }
}

#[cfg(feature = "tracing")]
impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Sink for outcome log calls.
///
/// `outcome` is the logged outcome's reason list, which carries everything
/// needed to tell success from failure and to render the full cause chain.
/// Calls are synchronous and their effect is not observed by the caller.
pub trait OutcomeLogger: fmt::Debug + Send + Sync {
    fn log(&self, context: &str, content: &str, outcome: &Reasons, level: LogLevel);
}

impl<L> OutcomeLogger for Arc<L>
where
    L: OutcomeLogger + ?Sized,
{
    #[inline]
    fn log(&self, context: &str, content: &str, outcome: &Reasons, level: LogLevel) {
        (**self).log(context, content, outcome, level)
    }
}

/// Logger that ignores every call. This is the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl OutcomeLogger for NoopLogger {
    #[inline]
    fn log(&self, _context: &str, _content: &str, _outcome: &Reasons, _level: LogLevel) {}
}

/// Logger that emits one `tracing` event per call.
///
/// Events are emitted under the `reason_rail` target with `context`,
/// `content`, `is_success` and the rendered `reasons` as fields.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

#[cfg(feature = "tracing")]
impl OutcomeLogger for TracingLogger {
    fn log(&self, context: &str, content: &str, outcome: &Reasons, level: LogLevel) {
        macro_rules! emit {
            ($level:expr) => {
                tracing::event!(
                    target: "reason_rail",
                    $level,
                    context,
                    content,
                    is_success = outcome.is_success(),
                    reasons = %outcome,
                    "outcome logged"
                )
            };
        }

        match level {
            LogLevel::Trace => emit!(tracing::Level::TRACE),
            LogLevel::Debug => emit!(tracing::Level::DEBUG),
            LogLevel::Info => emit!(tracing::Level::INFO),
            LogLevel::Warn => emit!(tracing::Level::WARN),
            LogLevel::Error => emit!(tracing::Level::ERROR),
        }
    }
}

/// Returns the last path segment of `C`'s type name.
fn short_type_name<C: ?Sized>() -> &'static str {
    let full = core::any::type_name::<C>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl<V> Outcome<V> {
    /// Sends this outcome to the configured logger and returns it unchanged.
    pub fn log(self, context: &str, content: &str, level: LogLevel) -> Self {
        settings::current().logger().log(context, content, self.reasons(), level);
        self
    }

    /// Like [`log`](Self::log), with the context taken from `C`'s type name.
    ///
    /// # Examples
    ///
    /// ```
    /// use reason_rail::logging::LogLevel;
    /// use reason_rail::Outcome;
    ///
    /// struct OrderService;
    ///
    /// // logged with context "OrderService"
    /// let outcome = Outcome::ok().log_for::<OrderService>("order stored", LogLevel::Debug);
    /// assert!(outcome.is_success());
    /// ```
    pub fn log_for<C: ?Sized>(self, content: &str, level: LogLevel) -> Self {
        self.log(short_type_name::<C>(), content, level)
    }

    /// Logs only when the outcome is failed.
    pub fn log_if_failed(self, context: &str, content: &str, level: LogLevel) -> Self {
        if self.is_failed() {
            self.log(context, content, level)
        } else {
            self
        }
    }

    /// Logs only when the outcome is successful.
    pub fn log_if_success(self, context: &str, content: &str, level: LogLevel) -> Self {
        if self.is_success() {
            self.log(context, content, level)
        } else {
            self
        }
    }
}
