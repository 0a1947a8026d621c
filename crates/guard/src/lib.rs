//! # paramguard
//!
//! Fluent guard clauses for function parameters.
//!
//! Wrap a parameter's name and value with [`validate`](foundation::validate)
//! (or [`validate_option`](foundation::validate_option) for values that may be
//! absent) and chain checks with `?`. Each check hands the wrapper back on
//! success or fails fast with a [`GuardError`](foundation::GuardError) naming
//! the parameter and the violated condition.
//!
//! ## Quick Start
//!
//! ```
//! use paramguard::prelude::*;
//!
//! fn create_user(name: &str, age: u32, email: Option<&str>) -> Result<(), GuardError> {
//!     validate(name, "name").is_not_null_or_white_space()?.has_max_length(32)?;
//!     validate(age, "age").is_between(18, 130)?;
//!     validate_option(email, "email").is_match(r"^[^@\s]+@[^@\s]+$")?;
//!     Ok(())
//! }
//!
//! assert!(create_user("alice", 30, None).is_ok());
//!
//! let error = create_user("bob", 12, None).unwrap_err();
//! assert_eq!(error.to_string(), "invalid value for `age`: Value must be between '18' and '130'.");
//! ```
//!
//! ## Absent values
//!
//! Every check except the null-specific ones (`is_not_null`, `is_null`,
//! `require`, `is_not_null_or_empty`, `is_not_null_or_white_space`) passes
//! when the value is absent.
//!
//! ## Errors
//!
//! There are two kinds of failure: [`MissingValue`](foundation::GuardErrorKind::MissingValue)
//! and [`InvalidValue`](foundation::GuardErrorKind::InvalidValue). Replace the
//! default message with [`with_message`](foundation::GuardResultExt::with_message),
//! or swap the whole catalog with [`Messages`](foundation::Messages).
//!
//! ## Features
//!
//! - `tracing` (default): emits a `debug` event with target `paramguard` for
//!   every rejected check.

// GuardError carries its rendered message and template params inline and is
// the error type of every check.
#![allow(clippy::result_large_err)]

pub mod foundation;
pub mod guards;
mod macros;
pub mod prelude;
