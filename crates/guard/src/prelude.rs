//! Prelude module for convenient imports.
//!
//! `use paramguard::prelude::*;` brings in the factories, the error types and
//! every guard trait.
//!
//! # Examples
//!
//! ```
//! use paramguard::prelude::*;
//!
//! fn set_retries(retries: u8) -> Result<u8, GuardError> {
//!     validate(retries, "retries").is_between(1, 10)?.require()
//! }
//! # assert!(set_retries(0).is_err());
//! ```

// ============================================================================
// FOUNDATION: Wrapper, errors, catalogs
// ============================================================================

pub use crate::foundation::{
    Check, GuardError, GuardErrorKind, GuardResult, GuardResultExt, Messages, MessagesError,
    Validator, validate, validate_option,
};

// ============================================================================
// GUARDS: Extension traits and supporting types
// ============================================================================

pub use crate::guards::{
    AnyValue, Case, Collection, CollectionGuard, MatchOutcome, PatternGuard, RegexMatch,
    TextGuard, TypeInfo, TypeKind,
};

pub use crate::param;
