//! Message catalogs
//!
//! A [`Messages`] catalog maps each [`Check`] to a message template. Entries
//! that are not overridden fall back to [`Check::default_template`].
//!
//! Templates use `{name}` placeholders, filled from the parameters a check
//! supplies when it fails. Rendering happens only on failure.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use paramguard::prelude::*;
//!
//! let catalog = Messages::from_json_str(r#"{ "greater_than": "muss größer als {value} sein" }"#)?;
//! let error = validate(1, "count")
//!     .with_messages(Arc::new(catalog))
//!     .is_greater_than(3)
//!     .unwrap_err();
//! assert_eq!(error.message(), "muss größer als 3 sein");
//! # Ok::<(), paramguard::foundation::MessagesError>(())
//! ```

use std::collections::BTreeMap;
use std::io;

use serde::{Deserialize, Serialize};

use crate::foundation::error::Check;

/// Errors raised while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum MessagesError {
    /// The catalog is not valid JSON or names an unknown check.
    #[error("failed to parse message catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading the catalog failed.
    #[error("failed to read message catalog: {0}")]
    Io(#[from] io::Error),

    /// A template references a placeholder its check never supplies.
    #[error("template for `{check}` uses unknown placeholder `{{{placeholder}}}`")]
    UnknownPlaceholder { check: Check, placeholder: String },
}

/// Message templates keyed by [`Check`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Messages {
    templates: BTreeMap<Check, String>,
}

static BUILTIN: Messages = Messages::new();

impl Messages {
    /// Creates a catalog with no overrides.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    /// The shared built-in English catalog.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Overrides the template for `check`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_template(mut self, check: Check, template: impl Into<String>) -> Self {
        self.templates.insert(check, template.into());
        self
    }

    /// Parses a JSON object of `{ "<check code>": "<template>" }` and
    /// validates its placeholders.
    pub fn from_json_str(json: &str) -> Result<Self, MessagesError> {
        let messages: Self = serde_json::from_str(json)?;
        messages.validate()?;
        Ok(messages)
    }

    /// Like [`from_json_str`](Self::from_json_str), reading from `reader`.
    pub fn from_json_reader<R: io::Read>(reader: R) -> Result<Self, MessagesError> {
        let messages: Self = serde_json::from_reader(reader)?;
        messages.validate()?;
        Ok(messages)
    }

    /// Checks that every override only uses placeholders its check supplies.
    pub fn validate(&self) -> Result<(), MessagesError> {
        for (check, template) in &self.templates {
            if let Some(unknown) = placeholders_in(template)
                .find(|p| !check.placeholders().iter().any(|known| known == p))
            {
                return Err(MessagesError::UnknownPlaceholder {
                    check: *check,
                    placeholder: unknown.to_string(),
                });
            }
        }
        Ok(())
    }

    /// The template used for `check`.
    #[must_use]
    pub fn template(&self, check: Check) -> &str {
        self.templates
            .get(&check)
            .map_or_else(|| check.default_template(), String::as_str)
    }

    /// Number of overridden templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if nothing is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Renders the template for `check`, substituting `params`.
    #[must_use]
    pub fn render(&self, check: Check, params: &[(&'static str, String)]) -> String {
        render(self.template(check), params)
    }
}

/// Splits off the next `{key}` token: the text before it, the key, and the
/// rest after the closing brace.
///
/// The key runs from the first `{` to the next `}`, so it may itself
/// contain `{`. `None` once no closed token remains.
fn next_token(template: &str) -> Option<(&str, &str, &str)> {
    let open = template.find('{')?;
    let after = &template[open + 1..];
    let close = after.find('}')?;
    Some((&template[..open], &after[..close], &after[close + 1..]))
}

fn is_placeholder(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Substitutes `{key}` tokens. Unknown keys are left as written.
fn render(template: &str, params: &[(&'static str, String)]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some((before, key, tail)) = next_token(rest) {
        out.push_str(before);
        match params.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(key);
                out.push('}');
            }
        }
        rest = tail;
    }
    out.push_str(rest);
    out
}

/// Yields the names of `{identifier}` tokens in `template`, scanning the
/// same way [`render`] does.
pub(crate) fn placeholders_in(template: &str) -> impl Iterator<Item = &str> {
    let mut rest = template;
    std::iter::from_fn(move || {
        while let Some((_, key, tail)) = next_token(rest) {
            rest = tail;
            if is_placeholder(key) {
                return Some(key);
            }
        }
        None
    })
}
