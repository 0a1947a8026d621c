//! String checks
//!
//! [`TextGuard`] is implemented for every `Validator<S>` with `S: AsRef<str>`
//! (`&str`, `String`, `Cow<str>`, `Box<str>`, ...).
//!
//! Lengths are counted in Unicode scalar values (`chars()`), not bytes.
//! Empty means zero length; whitespace-only is a separate check.

use smallvec::smallvec;

use crate::foundation::{Check, GuardErrorKind, GuardResult, Params, Validator};

/// Case handling for string equality checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Case {
    /// Exact comparison.
    #[default]
    Sensitive,
    /// Compares the lowercase forms of both strings.
    Insensitive,
}

impl Case {
    fn matches(self, a: &str, b: &str) -> bool {
        match self {
            Self::Sensitive => a == b,
            Self::Insensitive => a
                .chars()
                .flat_map(char::to_lowercase)
                .eq(b.chars().flat_map(char::to_lowercase)),
        }
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

/// Checks on string-like values.
///
/// # Examples
///
/// ```
/// use paramguard::prelude::*;
///
/// let _user = validate("Value", "user")
///     .is_not_null_or_white_space()?
///     .has_length_between(3, 16)?
///     .starts_with("V")?;
/// # Ok::<(), GuardError>(())
/// ```
pub trait TextGuard: Sized {
    /// Requires the string to be empty.
    fn is_empty(self) -> GuardResult<Self>;

    /// Rejects the empty string. Whitespace-only strings pass.
    fn is_not_empty(self) -> GuardResult<Self>;

    /// Rejects empty and whitespace-only strings.
    fn is_not_white_space(self) -> GuardResult<Self>;

    /// Rejects absent ([`MissingValue`](GuardErrorKind::MissingValue)) and
    /// empty ([`InvalidValue`](GuardErrorKind::InvalidValue)) strings, both
    /// with the same message.
    fn is_not_null_or_empty(self) -> GuardResult<Self>;

    /// Rejects absent, empty and whitespace-only strings.
    fn is_not_null_or_white_space(self) -> GuardResult<Self>;

    /// Requires exactly `length` characters.
    fn has_length(self, length: usize) -> GuardResult<Self>;

    /// Requires at least `min` characters.
    fn has_min_length(self, min: usize) -> GuardResult<Self>;

    /// Requires at most `max` characters.
    fn has_max_length(self, max: usize) -> GuardResult<Self>;

    /// Requires between `min` and `max` characters, inclusive.
    fn has_length_between(self, min: usize, max: usize) -> GuardResult<Self>;

    /// Requires `needle` to occur in the string.
    fn contains(self, needle: &str) -> GuardResult<Self>;

    /// Requires the string to start with `prefix`.
    fn starts_with(self, prefix: &str) -> GuardResult<Self>;

    /// Requires the string to end with `suffix`.
    fn ends_with(self, suffix: &str) -> GuardResult<Self>;

    /// Requires the string to equal `other` under `case`.
    fn is_equal_to_str(self, other: &str, case: Case) -> GuardResult<Self>;

    /// Requires the string to differ from `other` under `case`.
    fn is_not_equal_to_str(self, other: &str, case: Case) -> GuardResult<Self>;
}

impl<S: AsRef<str>> Validator<S> {
    fn ensure_str<P, F>(self, predicate: P, check: Check, params: F) -> GuardResult<Self>
    where
        P: FnOnce(&str) -> bool,
        F: FnOnce() -> Params,
    {
        self.ensure_value(|s| predicate(s.as_ref()), check, params)
    }

    fn ensure_present_str(self, predicate: fn(&str) -> bool, check: Check) -> GuardResult<Self> {
        let kind = if self.is_present() {
            GuardErrorKind::InvalidValue
        } else {
            GuardErrorKind::MissingValue
        };
        let passed = self.value().is_some_and(|s| predicate(s.as_ref()));
        self.ensure(passed, kind, check, Params::new)
    }
}

impl<S: AsRef<str>> TextGuard for Validator<S> {
    fn is_empty(self) -> GuardResult<Self> {
        self.ensure_str(str::is_empty, Check::Empty, Params::new)
    }

    fn is_not_empty(self) -> GuardResult<Self> {
        self.ensure_str(|s| !s.is_empty(), Check::NotEmpty, Params::new)
    }

    fn is_not_white_space(self) -> GuardResult<Self> {
        self.ensure_str(|s| !is_blank(s), Check::NotWhiteSpace, Params::new)
    }

    fn is_not_null_or_empty(self) -> GuardResult<Self> {
        self.ensure_present_str(|s| !s.is_empty(), Check::NotNullOrEmpty)
    }

    fn is_not_null_or_white_space(self) -> GuardResult<Self> {
        self.ensure_present_str(|s| !is_blank(s), Check::NotNullOrWhiteSpace)
    }

    fn has_length(self, length: usize) -> GuardResult<Self> {
        self.ensure_str(|s| char_len(s) == length, Check::Length, || {
            smallvec![("length", length.to_string())]
        })
    }

    fn has_min_length(self, min: usize) -> GuardResult<Self> {
        self.ensure_str(|s| char_len(s) >= min, Check::MinLength, || {
            smallvec![("min", min.to_string())]
        })
    }

    fn has_max_length(self, max: usize) -> GuardResult<Self> {
        self.ensure_str(|s| char_len(s) <= max, Check::MaxLength, || {
            smallvec![("max", max.to_string())]
        })
    }

    fn has_length_between(self, min: usize, max: usize) -> GuardResult<Self> {
        let params = || smallvec![("min", min.to_string()), ("max", max.to_string())];
        self.ensure_str(|s| char_len(s) >= min, Check::LengthBetween, params)?
            .ensure_str(|s| char_len(s) <= max, Check::LengthBetween, params)
    }

    fn contains(self, needle: &str) -> GuardResult<Self> {
        self.ensure_str(|s| s.contains(needle), Check::Contains, || {
            smallvec![("value", needle.to_string())]
        })
    }

    fn starts_with(self, prefix: &str) -> GuardResult<Self> {
        self.ensure_str(|s| s.starts_with(prefix), Check::StartsWith, || {
            smallvec![("value", prefix.to_string())]
        })
    }

    fn ends_with(self, suffix: &str) -> GuardResult<Self> {
        self.ensure_str(|s| s.ends_with(suffix), Check::EndsWith, || {
            smallvec![("value", suffix.to_string())]
        })
    }

    fn is_equal_to_str(self, other: &str, case: Case) -> GuardResult<Self> {
        self.ensure_str(|s| case.matches(s, other), Check::EqualTo, || {
            smallvec![("value", other.to_string())]
        })
    }

    fn is_not_equal_to_str(self, other: &str, case: Case) -> GuardResult<Self> {
        self.ensure_str(|s| !case.matches(s, other), Check::NotEqualTo, || {
            smallvec![("value", other.to_string())]
        })
    }
}
