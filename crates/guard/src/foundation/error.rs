//! Error types for rejected parameters
//!
//! Every failed check produces a [`GuardError`]. There are exactly two kinds:
//! the value was absent where presence is required ([`GuardError::MissingValue`])
//! or the value was present but failed a predicate ([`GuardError::InvalidValue`]).
//!
//! Messages are `Cow<'static, str>` so that verbatim overrides given as string
//! literals never allocate.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Template parameters attached to an error, e.g. `[("value", "5")]`.
///
/// Typically 0-2 entries, so they live inline.
pub type Params = SmallVec<[(&'static str, String); 2]>;

/// Result alias used by every check.
pub type GuardResult<T> = Result<T, GuardError>;

// ============================================================================
// CHECK
// ============================================================================

/// Identifies the predicate a check evaluates.
///
/// The snake_case code doubles as the key in a message catalog
/// (see [`Messages`](crate::foundation::Messages)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    NotNull,
    Null,
    EqualTo,
    NotEqualTo,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
    Between,
    Empty,
    NotEmpty,
    NotNullOrEmpty,
    NotWhiteSpace,
    NotNullOrWhiteSpace,
    Length,
    MinLength,
    MaxLength,
    LengthBetween,
    Contains,
    StartsWith,
    EndsWith,
    Match,
    InvalidPattern,
    Type,
    AssignableTo,
    Concrete,
    TraitObject,
    Custom,
}

impl Check {
    /// Every check, in declaration order.
    pub const ALL: [Check; 28] = [
        Check::NotNull,
        Check::Null,
        Check::EqualTo,
        Check::NotEqualTo,
        Check::GreaterThan,
        Check::GreaterThanOrEqualTo,
        Check::LessThan,
        Check::LessThanOrEqualTo,
        Check::Between,
        Check::Empty,
        Check::NotEmpty,
        Check::NotNullOrEmpty,
        Check::NotWhiteSpace,
        Check::NotNullOrWhiteSpace,
        Check::Length,
        Check::MinLength,
        Check::MaxLength,
        Check::LengthBetween,
        Check::Contains,
        Check::StartsWith,
        Check::EndsWith,
        Check::Match,
        Check::InvalidPattern,
        Check::Type,
        Check::AssignableTo,
        Check::Concrete,
        Check::TraitObject,
        Check::Custom,
    ];

    /// Machine-readable code for programmatic handling.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NotNull => "not_null",
            Self::Null => "null",
            Self::EqualTo => "equal_to",
            Self::NotEqualTo => "not_equal_to",
            Self::GreaterThan => "greater_than",
            Self::GreaterThanOrEqualTo => "greater_than_or_equal_to",
            Self::LessThan => "less_than",
            Self::LessThanOrEqualTo => "less_than_or_equal_to",
            Self::Between => "between",
            Self::Empty => "empty",
            Self::NotEmpty => "not_empty",
            Self::NotNullOrEmpty => "not_null_or_empty",
            Self::NotWhiteSpace => "not_white_space",
            Self::NotNullOrWhiteSpace => "not_null_or_white_space",
            Self::Length => "length",
            Self::MinLength => "min_length",
            Self::MaxLength => "max_length",
            Self::LengthBetween => "length_between",
            Self::Contains => "contains",
            Self::StartsWith => "starts_with",
            Self::EndsWith => "ends_with",
            Self::Match => "match",
            Self::InvalidPattern => "invalid_pattern",
            Self::Type => "type",
            Self::AssignableTo => "assignable_to",
            Self::Concrete => "concrete",
            Self::TraitObject => "trait_object",
            Self::Custom => "custom",
        }
    }

    /// The built-in English message template.
    #[must_use]
    pub const fn default_template(self) -> &'static str {
        match self {
            Self::NotNull => "Value cannot be null.",
            Self::Null => "Value must be null.",
            Self::EqualTo => "Value must be equal to '{value}'.",
            Self::NotEqualTo => "Value must not be equal to '{value}'.",
            Self::GreaterThan => "Value must be greater than '{value}'.",
            Self::GreaterThanOrEqualTo => "Value must be greater than or equal to '{value}'.",
            Self::LessThan => "Value must be less than '{value}'.",
            Self::LessThanOrEqualTo => "Value must be less than or equal to '{value}'.",
            Self::Between => "Value must be between '{min}' and '{max}'.",
            Self::Empty => "Value must be empty.",
            Self::NotEmpty => "Value cannot be empty.",
            Self::NotNullOrEmpty => "Value cannot be null or empty.",
            Self::NotWhiteSpace => "Value cannot be empty or white space.",
            Self::NotNullOrWhiteSpace => "Value cannot be null, empty or white space.",
            Self::Length => "Value must have a length equal to {length}.",
            Self::MinLength => "Value must have a length greater than or equal to {min}.",
            Self::MaxLength => "Value must have a length less than or equal to {max}.",
            Self::LengthBetween => "Value must have a length between {min} and {max}.",
            Self::Contains => "Value must contain '{value}'.",
            Self::StartsWith => "Value must start with '{value}'.",
            Self::EndsWith => "Value must end with '{value}'.",
            Self::Match => "Value must match the regular expression '{pattern}'.",
            Self::InvalidPattern => {
                "Pattern '{pattern}' is not a valid regular expression: {error}"
            }
            Self::Type => "Value must be type '{type}'.",
            Self::AssignableTo => "Value must be assignable to '{type}'.",
            Self::Concrete => "Value must be a concrete type.",
            Self::TraitObject => "Value must be a trait object type.",
            Self::Custom => "Value is invalid.",
        }
    }

    /// Placeholders this check fills in when rendering its template.
    #[must_use]
    pub const fn placeholders(self) -> &'static [&'static str] {
        match self {
            Self::EqualTo
            | Self::NotEqualTo
            | Self::GreaterThan
            | Self::GreaterThanOrEqualTo
            | Self::LessThan
            | Self::LessThanOrEqualTo
            | Self::Contains
            | Self::StartsWith
            | Self::EndsWith => &["value"],
            Self::Between | Self::LengthBetween => &["min", "max"],
            Self::Length => &["length"],
            Self::MinLength => &["min"],
            Self::MaxLength => &["max"],
            Self::Match => &["pattern"],
            Self::InvalidPattern => &["pattern", "error"],
            Self::Type | Self::AssignableTo => &["type"],
            _ => &[],
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// GUARD ERROR
// ============================================================================

/// The two ways a parameter can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardErrorKind {
    /// Value absent where presence is required.
    MissingValue,
    /// Value present but fails a predicate.
    InvalidValue,
}

impl fmt::Display for GuardErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue => f.write_str("missing_value"),
            Self::InvalidValue => f.write_str("invalid_value"),
        }
    }
}

/// A rejected parameter.
///
/// # Examples
///
/// ```
/// use paramguard::prelude::*;
///
/// let error = validate(5, "x").is_greater_than(5).unwrap_err();
/// assert_eq!(error.kind(), GuardErrorKind::InvalidValue);
/// assert_eq!(error.parameter(), Some("x"));
/// assert_eq!(error.message(), "Value must be greater than '5'.");
/// assert_eq!(error.to_string(), "invalid value for `x`: Value must be greater than '5'.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuardError {
    /// A required value was absent.
    #[error("missing value{}: {message}", for_parameter(.parameter))]
    MissingValue {
        parameter: Option<Cow<'static, str>>,
        check: Check,
        message: Cow<'static, str>,
        params: Params,
    },

    /// A value was present but failed a check.
    #[error("invalid value{}: {message}", for_parameter(.parameter))]
    InvalidValue {
        parameter: Option<Cow<'static, str>>,
        check: Check,
        message: Cow<'static, str>,
        params: Params,
    },
}

fn for_parameter(parameter: &Option<Cow<'static, str>>) -> String {
    parameter
        .as_deref()
        .map_or_else(String::new, |name| format!(" for `{name}`"))
}

impl GuardError {
    /// Creates an error of the given kind.
    pub fn new(
        kind: GuardErrorKind,
        parameter: Option<Cow<'static, str>>,
        check: Check,
        message: impl Into<Cow<'static, str>>,
        params: Params,
    ) -> Self {
        let message = message.into();
        match kind {
            GuardErrorKind::MissingValue => Self::MissingValue {
                parameter,
                check,
                message,
                params,
            },
            GuardErrorKind::InvalidValue => Self::InvalidValue {
                parameter,
                check,
                message,
                params,
            },
        }
    }

    /// Whether the value was missing or invalid.
    #[must_use]
    pub fn kind(&self) -> GuardErrorKind {
        match self {
            Self::MissingValue { .. } => GuardErrorKind::MissingValue,
            Self::InvalidValue { .. } => GuardErrorKind::InvalidValue,
        }
    }

    /// Name of the rejected parameter, if the chain was named.
    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::MissingValue { parameter, .. } | Self::InvalidValue { parameter, .. } => {
                parameter.as_deref()
            }
        }
    }

    /// The human-readable message, without the parameter name.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::MissingValue { message, .. } | Self::InvalidValue { message, .. } => &**message,
        }
    }

    /// The check that rejected the value.
    #[must_use]
    pub fn check(&self) -> Check {
        match self {
            Self::MissingValue { check, .. } | Self::InvalidValue { check, .. } => *check,
        }
    }

    /// Machine-readable error code, the code of the failed [`Check`].
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.check().code()
    }

    /// Looks up a template parameter by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        let params = match self {
            Self::MissingValue { params, .. } | Self::InvalidValue { params, .. } => params,
        };
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Guard failures are deterministic: same input, same result.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Replaces the message, keeping kind, check and parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        match &mut self {
            Self::MissingValue { message, .. } | Self::InvalidValue { message, .. } => {
                *message = text.into();
            }
        }
        self
    }
}

// ============================================================================
// RESULT EXTENSION
// ============================================================================

/// Overrides the default message of a failed check.
///
/// # Examples
///
/// ```
/// use paramguard::prelude::*;
///
/// let error = validate(0, "retries")
///     .is_greater_than(0)
///     .with_message("retries must be positive")
///     .unwrap_err();
/// assert_eq!(error.message(), "retries must be positive");
/// ```
pub trait GuardResultExt {
    /// Uses `message` verbatim if the check failed.
    #[must_use]
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> Self;
}

impl<T> GuardResultExt for GuardResult<T> {
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|error| error.with_message(message))
    }
}

// ============================================================================
// TESTS
// ============================================================================
