//! Process-wide configuration of factories and the logger.
//!
//! Combinators that have to turn a message or a captured error into a reason
//! consult a [`Settings`] snapshot. Each combinator call reads the snapshot
//! once through [`current`] and uses it for the whole call.
//!
//! Snapshots are immutable. [`setup`] and [`update`] build a new one and swap
//! it in atomically, so a reader sees either the old or the new settings in
//! full. [`scoped`] installs a snapshot for the current thread only, which is
//! how tests and embedded callers inject configuration without touching the
//! global one.
//!
//! # Examples
//!
//! ```
//! use reason_rail::settings::{self, Settings};
//! use reason_rail::{Error, Outcome};
//!
//! let tagged = Settings::builder()
//!     .error_factory(|message| Error::new(message).with_metadata("layer", "billing"))
//!     .build();
//!
//! let outcome = settings::scoped(tagged, || Outcome::<()>::fail("card declined"));
//! assert!(outcome.errors()[0].has_metadata_key("layer"));
//! ```

use core::fmt;
use std::cell::RefCell;
use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use crate::logging::{NoopLogger, OutcomeLogger};
use crate::types::{Error, Exception, Success};

/// Builds an [`Error`] from a message.
pub type ErrorFactory = Arc<dyn Fn(String) -> Error + Send + Sync>;
/// Builds a [`Success`] from a message.
pub type SuccessFactory = Arc<dyn Fn(String) -> Success + Send + Sync>;
/// Builds an exceptional [`Error`] from a message and a captured exception.
pub type ExceptionalErrorFactory = Arc<dyn Fn(String, Exception) -> Error + Send + Sync>;
/// Converts a captured exception into an [`Error`].
pub type ExceptionHandler = Arc<dyn Fn(Exception) -> Error + Send + Sync>;

/// An immutable settings snapshot.
#[derive(Clone)]
pub struct Settings {
    error_factory: ErrorFactory,
    success_factory: SuccessFactory,
    exceptional_error_factory: ExceptionalErrorFactory,
    exception_handler: ExceptionHandler,
    logger: Arc<dyn OutcomeLogger>,
}

impl Settings {
    /// Returns a builder seeded with the library defaults.
    #[inline]
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// Returns a builder seeded with this snapshot's values.
    pub fn to_builder(&self) -> SettingsBuilder {
        SettingsBuilder {
            error_factory: Some(Arc::clone(&self.error_factory)),
            success_factory: Some(Arc::clone(&self.success_factory)),
            exceptional_error_factory: Some(Arc::clone(&self.exceptional_error_factory)),
            exception_handler: Some(Arc::clone(&self.exception_handler)),
            logger: Some(Arc::clone(&self.logger)),
        }
    }

    /// Builds an error with the error factory.
    #[inline]
    pub fn error(&self, message: String) -> Error {
        (self.error_factory)(message)
    }

    /// Builds a success with the success factory.
    #[inline]
    pub fn success(&self, message: String) -> Success {
        (self.success_factory)(message)
    }

    /// Builds an exceptional error with the exceptional error factory.
    #[inline]
    pub fn exceptional_error(&self, message: String, exception: Exception) -> Error {
        (self.exceptional_error_factory)(message, exception)
    }

    /// Converts a captured exception with the default exception handler.
    #[inline]
    pub fn handle_exception(&self, exception: Exception) -> Error {
        (self.exception_handler)(exception)
    }

    #[inline]
    pub fn logger(&self) -> &dyn OutcomeLogger {
        &*self.logger
    }
}

impl Default for Settings {
    fn default() -> Self {
        SettingsBuilder::default().build()
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings").field("logger", &self.logger).finish_non_exhaustive()
    }
}

/// Builder for [`Settings`].
///
/// Unset entries fall back to the library defaults when built:
///
/// | entry | default |
/// |-------|---------|
/// | error factory | [`Error::new`] |
/// | success factory | [`Success::new`] |
/// | exceptional error factory | [`Error::exceptional`] |
/// | exception handler | exceptional error factory applied to the exception's message |
/// | logger | [`NoopLogger`] |
#[derive(Clone, Default)]
pub struct SettingsBuilder {
    error_factory: Option<ErrorFactory>,
    success_factory: Option<SuccessFactory>,
    exceptional_error_factory: Option<ExceptionalErrorFactory>,
    exception_handler: Option<ExceptionHandler>,
    logger: Option<Arc<dyn OutcomeLogger>>,
}

impl SettingsBuilder {
    /// Replaces the error factory.
    pub fn error_factory<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn(String) -> Error + Send + Sync + 'static,
    {
        self.error_factory = Some(Arc::new(factory));
        self
    }

    /// Replaces the success factory.
    pub fn success_factory<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn(String) -> Success + Send + Sync + 'static,
    {
        self.success_factory = Some(Arc::new(factory));
        self
    }

    /// Replaces the exceptional error factory.
    pub fn exceptional_error_factory<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn(String, Exception) -> Error + Send + Sync + 'static,
    {
        self.exceptional_error_factory = Some(Arc::new(factory));
        self
    }

    /// Replaces the default exception handler used by `attempt`.
    pub fn exception_handler<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(Exception) -> Error + Send + Sync + 'static,
    {
        self.exception_handler = Some(Arc::new(handler));
        self
    }

    /// Replaces the logger.
    pub fn logger<L>(&mut self, logger: L) -> &mut Self
    where
        L: OutcomeLogger + 'static,
    {
        self.logger = Some(Arc::new(logger));
        self
    }

    /// Builds the snapshot.
    pub fn build(&self) -> Settings {
        let exceptional_error_factory: ExceptionalErrorFactory = self
            .exceptional_error_factory
            .clone()
            .unwrap_or_else(|| Arc::new(Error::exceptional::<String>));
        let exception_handler = self.exception_handler.clone().unwrap_or_else(|| {
            let factory = Arc::clone(&exceptional_error_factory);
            Arc::new(move |exception: Exception| factory(exception.message(), exception))
        });

        Settings {
            error_factory: self.error_factory.clone().unwrap_or_else(|| Arc::new(Error::new::<String>)),
            success_factory: self
                .success_factory
                .clone()
                .unwrap_or_else(|| Arc::new(Success::new::<String>)),
            exceptional_error_factory,
            exception_handler,
            logger: self.logger.clone().unwrap_or_else(|| Arc::new(NoopLogger)),
        }
    }
}

impl fmt::Debug for SettingsBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsBuilder")
            .field("error_factory", &self.error_factory.is_some())
            .field("success_factory", &self.success_factory.is_some())
            .field("exceptional_error_factory", &self.exceptional_error_factory.is_some())
            .field("exception_handler", &self.exception_handler.is_some())
            .field("logger", &self.logger)
            .finish()
    }
}

static GLOBAL: OnceLock<ArcSwap<Settings>> = OnceLock::new();

thread_local! {
    static SCOPED: RefCell<Option<Arc<Settings>>> = const { RefCell::new(None) };
}

fn global() -> &'static ArcSwap<Settings> {
    GLOBAL.get_or_init(|| ArcSwap::from_pointee(Settings::default()))
}

#[inline]
fn global_snapshot() -> Arc<Settings> {
    global().load_full()
}

/// Returns the settings snapshot in effect for the calling thread.
///
/// A snapshot installed with [`scoped`] takes precedence over the global one.
/// Reading the global snapshot takes no lock.
pub fn current() -> Arc<Settings> {
    SCOPED.with(|scoped| scoped.borrow().clone()).unwrap_or_else(global_snapshot)
}

/// Publishes `settings` as the global snapshot, returning the previous one.
#[inline]
pub fn replace(settings: Settings) -> Arc<Settings> {
    global().swap(Arc::new(settings))
}

/// Rebuilds the global settings from the library defaults.
///
/// The mutator receives a fresh builder; whatever it leaves unset gets the
/// default value. The built snapshot replaces the global one atomically.
///
/// # Examples
///
/// ```no_run
/// use reason_rail::settings;
/// use reason_rail::Error;
///
/// settings::setup(|builder| {
///     builder.error_factory(|message| Error::new(message).with_metadata("service", "orders"));
/// });
/// ```
pub fn setup<F>(configure: F)
where
    F: FnOnce(&mut SettingsBuilder),
{
    let mut builder = SettingsBuilder::default();
    configure(&mut builder);
    replace(builder.build());
}

/// Like [`setup`], but the builder is seeded from the current global snapshot,
/// so entries the mutator does not touch keep their present values.
pub fn update<F>(configure: F)
where
    F: FnOnce(&mut SettingsBuilder),
{
    let mut builder = global_snapshot().to_builder();
    configure(&mut builder);
    replace(builder.build());
}

/// Restores the library defaults globally.
#[inline]
pub fn reset() {
    replace(Settings::default());
}

/// Runs `f` with `settings` installed for the current thread.
///
/// The previous thread-scoped snapshot (if any) is restored afterwards, also
/// when `f` panics. Scoping is bound to the thread: work moved to another
/// thread or runtime worker sees that thread's snapshot instead.
pub fn scoped<S, F, R>(settings: S, f: F) -> R
where
    S: Into<Arc<Settings>>,
    F: FnOnce() -> R,
{
    struct Restore(Option<Arc<Settings>>);

    impl Drop for Restore {
        fn drop(&mut self) {
            let previous = self.0.take();
            SCOPED.with(|scoped| *scoped.borrow_mut() = previous);
        }
    }

    let previous = SCOPED.with(|scoped| scoped.borrow_mut().replace(settings.into()));
    let _restore = Restore(previous);
    f()
}
