//! Locale resource table: message keys mapped to literals or templates.
//!
//! # Invariants
//!
//! 1. **Last write wins**: inserting a key that already exists replaces the
//!    earlier value. The replacement is logged at `warn` and the key is
//!    remembered in [`LocaleStrings::overridden_keys`].
//!
//! 2. **Entries are tagged**: callers match on [`MessageValue`] instead of
//!    probing whether an entry is callable.
//!
//! 3. **Thread safety**: `LocaleStrings` is `Send + Sync` and is never
//!    mutated once handed to the grid.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing key | Key not in table | `get` returns `None`, `format` returns `MissingKey` |
//! | Bad template | Non-positional placeholder | `insert_template` returns `InvalidTemplate` |
//! | Too few values | Template rendered short | `format` returns `ArityMismatch` |

use std::collections::HashMap;

use serde_json::{Map, Value, json};
use tracing::warn;

use crate::template::Template;

/// Errors from locale table operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// No entry for the requested key.
    MissingKey(String),
    /// A template pattern could not be parsed.
    InvalidTemplate { pattern: String, reason: String },
    /// A template was rendered with fewer values than it references.
    ArityMismatch { expected: usize, found: usize },
}

impl std::fmt::Display for LocaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingKey(key) => write!(f, "missing message key '{key}'"),
            Self::InvalidTemplate { pattern, reason } => {
                write!(f, "invalid template '{pattern}': {reason}")
            }
            Self::ArityMismatch { expected, found } => {
                write!(f, "template expects {expected} values, got {found}")
            }
        }
    }
}

impl std::error::Error for LocaleError {}

/// A single table entry: a display string or a positional template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageValue {
    /// Text shown as-is.
    Literal(String),
    /// Sentence filled from an ordered list of values.
    Template(Template),
}

impl MessageValue {
    /// Values the entry expects; zero for literals.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Self::Literal(_) => 0,
            Self::Template(t) => t.arity(),
        }
    }
}

/// Message table for a single locale.
///
/// # Example
///
/// ```
/// use grid_locale::catalog::{LocaleStrings, MessageValue};
///
/// let mut strings = LocaleStrings::new("pt-BR");
/// strings.insert("copy", "Copiar");
/// strings
///     .insert_template("levelItem", "{0}. Nível {1}.")
///     .unwrap();
///
/// assert_eq!(strings.literal("copy"), Some("Copiar"));
/// assert!(matches!(strings.get("levelItem"), Some(MessageValue::Template(_))));
/// assert_eq!(
///     strings.format("levelItem", &["Nome", "1"]).unwrap(),
///     "Nome. Nível 1."
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    locale: String,
    strings: HashMap<String, MessageValue>,
    overridden: Vec<String>,
}

impl LocaleStrings {
    /// Create an empty table for a BCP-47 locale tag.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            ..Self::default()
        }
    }

    /// Locale tag the table was built for.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Insert a literal string.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.put(key.into(), MessageValue::Literal(value.into()));
    }

    /// Parse `pattern` and insert it as a template.
    pub fn insert_template(
        &mut self,
        key: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Result<(), LocaleError> {
        let template = Template::parse(pattern)?;
        self.put(key.into(), MessageValue::Template(template));
        Ok(())
    }

    fn put(&mut self, key: String, value: MessageValue) {
        if let Some(previous) = self.strings.get(&key) {
            warn!(
                locale = %self.locale,
                key = %key,
                previous = ?previous,
                replacement = ?value,
                "message key redefined; later definition wins"
            );
            if !self.overridden.contains(&key) {
                self.overridden.push(key.clone());
            }
        }
        self.strings.insert(key, value);
    }

    /// Look up an entry by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MessageValue> {
        self.strings.get(key)
    }

    /// Look up a literal entry. Templates yield `None`.
    #[must_use]
    pub fn literal(&self, key: &str) -> Option<&str> {
        match self.strings.get(key)? {
            MessageValue::Literal(s) => Some(s.as_str()),
            MessageValue::Template(_) => None,
        }
    }

    /// Resolve `key` to display text.
    ///
    /// Literals ignore `values`; templates require at least their arity.
    pub fn format<T: std::fmt::Display>(
        &self,
        key: &str,
        values: &[T],
    ) -> Result<String, LocaleError> {
        match self.get(key) {
            Some(MessageValue::Literal(s)) => Ok(s.clone()),
            Some(MessageValue::Template(t)) => t.render(values),
            None => Err(LocaleError::MissingKey(key.to_string())),
        }
    }

    /// Resolve `key` the way the grid host does: missing positions render
    /// as `undefined`.
    #[must_use]
    pub fn format_lossy<T: std::fmt::Display>(&self, key: &str, values: &[T]) -> Option<String> {
        self.get(key).map(|entry| match entry {
            MessageValue::Literal(s) => s.clone(),
            MessageValue::Template(t) => t.render_lossy(values),
        })
    }

    /// Keys that were defined more than once, in the order first redefined.
    #[must_use]
    pub fn overridden_keys(&self) -> &[String] {
        &self.overridden
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate over all keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }

    /// Keys of template entries, sorted.
    #[must_use]
    pub fn template_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .strings
            .iter()
            .filter(|(_, v)| matches!(v, MessageValue::Template(_)))
            .map(|(k, _)| k.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }

    /// Export as a JSON object for the grid host.
    ///
    /// Literals become strings; templates become
    /// `{"template": <pattern>, "arity": <n>}` so the host can wrap them in
    /// its own callback.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut keys: Vec<&String> = self.strings.keys().collect();
        keys.sort_unstable();

        let mut map = Map::with_capacity(keys.len());
        for key in keys {
            let value = match &self.strings[key] {
                MessageValue::Literal(s) => Value::String(s.clone()),
                MessageValue::Template(t) => json!({
                    "template": t.pattern(),
                    "arity": t.arity(),
                }),
            };
            map.insert(key.clone(), value);
        }
        Value::Object(map)
    }
}
