//! Core guard types
//!
//! This module contains the building blocks every check is written against:
//!
//! - **Wrapper**: [`Validator`], the `(name, value)` pair a chain threads through
//! - **Errors**: [`GuardError`], [`GuardErrorKind`], [`Check`]
//! - **Catalogs**: [`Messages`], the message templates used on failure
//!
//! # Architecture
//!
//! ## 1. Absence is explicit
//!
//! The value is held as an `Option<T>`. Every check other than the
//! null-specific ones passes vacuously on `None`, so optional parameters skip
//! unrelated checks and `is_not_null()` is the single place absence is rejected:
//!
//! ```
//! use paramguard::prelude::*;
//!
//! let timeout: Option<u32> = None;
//! assert!(validate_option(timeout, "timeout").is_between(1, 60).is_ok());
//! assert!(validate_option(timeout, "timeout").is_not_null().is_err());
//! ```
//!
//! ## 2. Same instance out
//!
//! A passing check hands the wrapper back unchanged, so checks chain with `?`:
//!
//! ```
//! use paramguard::prelude::*;
//!
//! fn connect(port: u16) -> Result<(), GuardError> {
//!     validate(port, "port").is_not_equal_to(0)?.is_less_than(49152)?;
//!     Ok(())
//! }
//! # assert!(connect(8080).is_ok());
//! ```
//!
//! ## 3. Messages are rendered lazily
//!
//! Template parameters are only formatted once a check has failed.

pub mod error;
pub mod messages;

use std::borrow::Cow;
use std::sync::Arc;

pub use error::{Check, GuardError, GuardErrorKind, GuardResult, GuardResultExt, Params};
pub use messages::{Messages, MessagesError};

// ============================================================================
// VALIDATOR
// ============================================================================

/// A parameter's name and (possibly absent) value, carried through a chain
/// of checks.
///
/// Constructed with [`validate`] or [`validate_option`]; each check consumes
/// the wrapper and returns it unchanged on success.
#[derive(Debug, Clone, PartialEq)]
pub struct Validator<T> {
    pub(crate) name: Option<Cow<'static, str>>,
    pub(crate) value: Option<T>,
    pub(crate) messages: Option<Arc<Messages>>,
}

impl<T> Validator<T> {
    /// Creates an unnamed wrapper.
    #[must_use]
    pub fn new(value: Option<T>) -> Self {
        Self {
            name: None,
            value,
            messages: None,
        }
    }

    /// Names the parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Renders failures of this chain with `messages` instead of the
    /// built-in catalog.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_messages(mut self, messages: Arc<Messages>) -> Self {
        self.messages = Some(messages);
        self
    }

    /// The parameter name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The value, or `None` if absent.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns true if a value is present.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Ends the chain, returning the value.
    #[must_use]
    pub fn into_inner(self) -> Option<T> {
        self.value
    }

    /// The catalog failures of this chain are rendered with.
    #[must_use]
    pub fn messages(&self) -> &Messages {
        self.messages.as_deref().unwrap_or(Messages::builtin())
    }

    /// Passes `self` through if `passed`, otherwise builds the error.
    ///
    /// `params` runs only on failure.
    pub(crate) fn ensure<F>(
        self,
        passed: bool,
        kind: GuardErrorKind,
        check: Check,
        params: F,
    ) -> GuardResult<Self>
    where
        F: FnOnce() -> Params,
    {
        if passed {
            Ok(self)
        } else {
            Err(self.reject(kind, check, params()))
        }
    }

    /// Vacuous on absence; otherwise `predicate` decides.
    pub(crate) fn ensure_value<P, F>(self, predicate: P, check: Check, params: F) -> GuardResult<Self>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce() -> Params,
    {
        let passed = self.value.as_ref().is_none_or(predicate);
        self.ensure(passed, GuardErrorKind::InvalidValue, check, params)
    }

    pub(crate) fn reject(&self, kind: GuardErrorKind, check: Check, params: Params) -> GuardError {
        let message = self.messages().render(check, &params);
        let error = GuardError::new(kind, self.name.clone(), check, message, params);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "paramguard",
            parameter = self.name().unwrap_or("<unnamed>"),
            check = check.code(),
            kind = %kind,
            "parameter rejected"
        );

        error
    }
}

// ============================================================================
// FACTORIES
// ============================================================================

/// Starts a guard chain for a present value.
///
/// # Examples
///
/// ```
/// use paramguard::prelude::*;
///
/// let name = validate("alice", "name").is_not_empty()?.has_max_length(16)?;
/// assert_eq!(name.into_inner(), Some("alice"));
/// # Ok::<(), GuardError>(())
/// ```
pub fn validate<T>(value: T, name: impl Into<Cow<'static, str>>) -> Validator<T> {
    Validator::new(Some(value)).with_name(name)
}

/// Starts a guard chain for a value that may be absent.
pub fn validate_option<T>(value: Option<T>, name: impl Into<Cow<'static, str>>) -> Validator<T> {
    Validator::new(value).with_name(name)
}
