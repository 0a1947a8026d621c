//! Regular-expression checks
//!
//! Patterns given as `&str` are compiled on every call. Compile once and use
//! the `_regex` variants when a pattern is reused in a hot path.
//!
//! A pattern that fails to compile is rejected with
//! [`Check::InvalidPattern`] before the value is looked at, so an absent
//! value does not hide a broken pattern.

use std::ops::Range;

use regex::{Captures, Regex};
use smallvec::smallvec;

use crate::foundation::{Check, GuardErrorKind, GuardResult, Validator};

// ============================================================================
// MATCH RESULTS
// ============================================================================

/// Owned snapshot of a successful match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexMatch {
    text: String,
    range: Range<usize>,
    groups: Vec<Option<String>>,
    names: Vec<Option<String>>,
}

impl RegexMatch {
    fn from_captures(regex: &Regex, caps: &Captures<'_>) -> Self {
        let whole = caps.get_match();
        Self {
            text: whole.as_str().to_owned(),
            range: whole.range(),
            groups: caps
                .iter()
                .map(|group| group.map(|m| m.as_str().to_owned()))
                .collect(),
            names: regex
                .capture_names()
                .map(|name| name.map(str::to_owned))
                .collect(),
        }
    }

    /// The matched text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Byte offset where the match starts.
    #[must_use]
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// Byte offset where the match ends.
    #[must_use]
    pub fn end(&self) -> usize {
        self.range.end
    }

    /// Byte range of the match in the checked string.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Text of group `index`; group 0 is the whole match.
    ///
    /// `None` if the group does not exist or did not participate.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.groups.get(index)?.as_deref()
    }

    /// Text of the named group `name`.
    #[must_use]
    pub fn name(&self, name: &str) -> Option<&str> {
        let index = self
            .names
            .iter()
            .position(|candidate| candidate.as_deref() == Some(name))?;
        self.get(index)
    }

    /// Number of groups in the pattern, including group 0.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

/// Result of [`PatternGuard::capture`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The value matched.
    Matched(RegexMatch),
    /// The value was absent; nothing was matched.
    Skipped,
}

impl MatchOutcome {
    /// The match, if there was one.
    #[must_use]
    pub fn matched(&self) -> Option<&RegexMatch> {
        match self {
            Self::Matched(m) => Some(m),
            Self::Skipped => None,
        }
    }

    /// Consumes the outcome, returning the match if there was one.
    #[must_use]
    pub fn into_match(self) -> Option<RegexMatch> {
        match self {
            Self::Matched(m) => Some(m),
            Self::Skipped => None,
        }
    }

    /// Returns true if the value was absent.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}

// ============================================================================
// PATTERN GUARD
// ============================================================================

/// Regular-expression checks on string-like values.
///
/// # Examples
///
/// ```
/// use paramguard::prelude::*;
///
/// let (_, outcome) = validate("build-42", "tag").capture(r"^(?<name>[a-z]+)-(\d+)$")?;
/// let m = outcome.into_match().unwrap();
/// assert_eq!(m.name("name"), Some("build"));
/// assert_eq!(m.get(2), Some("42"));
/// # Ok::<(), GuardError>(())
/// ```
pub trait PatternGuard: Sized {
    /// Requires the value to match `pattern`.
    fn is_match(self, pattern: &str) -> GuardResult<Self>;

    /// Requires the value to match a precompiled `regex`.
    fn is_match_regex(self, regex: &Regex) -> GuardResult<Self>;

    /// Like [`is_match`](Self::is_match), also returning the match.
    fn capture(self, pattern: &str) -> GuardResult<(Self, MatchOutcome)>;

    /// Like [`is_match_regex`](Self::is_match_regex), also returning the match.
    fn capture_regex(self, regex: &Regex) -> GuardResult<(Self, MatchOutcome)>;
}

impl<S: AsRef<str>> Validator<S> {
    fn compile(&self, pattern: &str) -> GuardResult<Regex> {
        Regex::new(pattern).map_err(|error| {
            self.reject(
                GuardErrorKind::InvalidValue,
                Check::InvalidPattern,
                smallvec![("pattern", pattern.to_owned()), ("error", error.to_string())],
            )
        })
    }
}

impl<S: AsRef<str>> PatternGuard for Validator<S> {
    fn is_match(self, pattern: &str) -> GuardResult<Self> {
        let regex = self.compile(pattern)?;
        self.is_match_regex(&regex)
    }

    fn is_match_regex(self, regex: &Regex) -> GuardResult<Self> {
        self.ensure_value(|s| regex.is_match(s.as_ref()), Check::Match, || {
            smallvec![("pattern", regex.as_str().to_owned())]
        })
    }

    fn capture(self, pattern: &str) -> GuardResult<(Self, MatchOutcome)> {
        let regex = self.compile(pattern)?;
        self.capture_regex(&regex)
    }

    fn capture_regex(self, regex: &Regex) -> GuardResult<(Self, MatchOutcome)> {
        let found = self.value().map(|s| {
            regex
                .captures(s.as_ref())
                .map(|caps| RegexMatch::from_captures(regex, &caps))
        });

        match found {
            None => Ok((self, MatchOutcome::Skipped)),
            Some(Some(m)) => Ok((self, MatchOutcome::Matched(m))),
            Some(None) => Err(self.reject(
                GuardErrorKind::InvalidValue,
                Check::Match,
                smallvec![("pattern", regex.as_str().to_owned())],
            )),
        }
    }
}
