//! Positional message templates.
//!
//! A template is a fixed sentence with `{0}`, `{1}`, ... placeholders that the
//! grid fills with an ordered list of values (column names, nesting levels,
//! validation fragments).
//!
//! # Invariants
//!
//! 1. **Arity is known up front**: `arity()` is one past the highest
//!    placeholder index, computed once at parse time.
//! 2. **Single pass**: substituted values are never re-scanned, so a value
//!    containing `{0}` is emitted verbatim.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Named or empty placeholder | `{name}`, `{}` | `parse` returns `InvalidTemplate` |
//! | Unclosed brace | `"Hello {0"` | `parse` returns `InvalidTemplate` |
//! | Position overflow | `{18446744073709551615}` | `parse` returns `InvalidTemplate` |
//! | Too few values | `render` with `len < arity` | `ArityMismatch` |
//! | Too few values (lossy) | `render_lossy` with `len < arity` | slot becomes `undefined` |

use std::fmt::{self, Display};

use crate::catalog::LocaleError;

/// Token the grid host prints for a positional value it was never given.
pub const UNDEFINED_TOKEN: &str = "undefined";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Slot(usize),
}

/// A parsed positional template.
///
/// # Example
///
/// ```
/// use grid_locale::Template;
///
/// let t = Template::parse("Expressão contém um erro. {0} - {1}.").unwrap();
/// assert_eq!(t.arity(), 2);
/// assert_eq!(
///     t.render(&["Coluna ausente", "x"]).unwrap(),
///     "Expressão contém um erro. Coluna ausente - x."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pattern: String,
    segments: Vec<Segment>,
    arity: usize,
}

impl Template {
    /// Parse a pattern with `{N}` placeholders.
    pub fn parse(pattern: impl Into<String>) -> Result<Self, LocaleError> {
        let pattern = pattern.into();
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut arity = 0;
        let mut chars = pattern.chars();

        while let Some(ch) = chars.next() {
            if ch != '{' {
                text.push(ch);
                continue;
            }

            let mut token = String::new();
            let mut found_close = false;
            for c in chars.by_ref() {
                if c == '}' {
                    found_close = true;
                    break;
                }
                token.push(c);
            }

            if !found_close {
                return Err(LocaleError::InvalidTemplate {
                    pattern: pattern.clone(),
                    reason: format!("unclosed placeholder '{{{token}'"),
                });
            }

            let index = match token.parse::<usize>() {
                Ok(index) if token.bytes().all(|b| b.is_ascii_digit()) => index,
                _ => {
                    return Err(LocaleError::InvalidTemplate {
                        pattern: pattern.clone(),
                        reason: format!("placeholder '{{{token}}}' is not a position"),
                    });
                }
            };

            let Some(slot_arity) = index.checked_add(1) else {
                return Err(LocaleError::InvalidTemplate {
                    pattern: pattern.clone(),
                    reason: format!("placeholder '{{{token}}}' is out of range"),
                });
            };

            if !text.is_empty() {
                segments.push(Segment::Text(std::mem::take(&mut text)));
            }
            segments.push(Segment::Slot(index));
            arity = arity.max(slot_arity);
        }

        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }

        Ok(Self {
            pattern,
            segments,
            arity,
        })
    }

    /// The source pattern, placeholders included.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Number of values the template expects.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Substitute `values` by position.
    ///
    /// Values beyond the arity are ignored.
    pub fn render<T: Display>(&self, values: &[T]) -> Result<String, LocaleError> {
        if values.len() < self.arity {
            return Err(LocaleError::ArityMismatch {
                expected: self.arity,
                found: values.len(),
            });
        }
        Ok(self.render_lossy(values))
    }

    /// Substitute `values` by position, writing [`UNDEFINED_TOKEN`] for any
    /// position without a value.
    #[must_use]
    pub fn render_lossy<T: Display>(&self, values: &[T]) -> String {
        let mut out = String::with_capacity(self.pattern.len());
        for segment in &self.segments {
            match segment {
                Segment::Text(s) => out.push_str(s),
                Segment::Slot(i) => match values.get(*i) {
                    Some(v) => out.push_str(&v.to_string()),
                    None => out.push_str(UNDEFINED_TOKEN),
                },
            }
        }
        out
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_from_highest_index() {
        assert_eq!(Template::parse("{0}. Nível {1}.").unwrap().arity(), 2);
        assert_eq!(Template::parse("{2} only").unwrap().arity(), 3);
        assert_eq!(Template::parse("no slots").unwrap().arity(), 0);
    }

    #[test]
    fn render_in_position() {
        let t = Template::parse("{1} before {0}").unwrap();
        assert_eq!(t.render(&["a", "b"]).unwrap(), "b before a");
    }

    #[test]
    fn render_repeated_slot() {
        let t = Template::parse("{0} and {0}").unwrap();
        assert_eq!(t.render(&["A"]).unwrap(), "A and A");
    }

    #[test]
    fn render_accepts_numbers() {
        let t = Template::parse("Nível {0}").unwrap();
        assert_eq!(t.render(&[3]).unwrap(), "Nível 3");
    }

    #[test]
    fn render_ignores_extra_values() {
        let t = Template::parse("{0}!").unwrap();
        assert_eq!(t.render(&["x", "y", "z"]).unwrap(), "x!");
    }

    #[test]
    fn render_too_few_values_is_error() {
        let t = Template::parse("{0} - {1}").unwrap();
        assert_eq!(
            t.render(&["x"]),
            Err(LocaleError::ArityMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn render_lossy_fills_undefined() {
        let t = Template::parse("{0} - {1}").unwrap();
        assert_eq!(t.render_lossy(&["x"]), "x - undefined");
        assert_eq!(t.render_lossy::<&str>(&[]), "undefined - undefined");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let t = Template::parse("[{0}]").unwrap();
        assert_eq!(t.render(&["{0}"]).unwrap(), "[{0}]");
    }

    #[test]
    fn parse_rejects_named_placeholder() {
        assert!(matches!(
            Template::parse("Hello {name}"),
            Err(LocaleError::InvalidTemplate { .. })
        ));
    }

    #[test]
    fn parse_rejects_empty_and_signed_placeholders() {
        assert!(Template::parse("Hello {}").is_err());
        assert!(Template::parse("Hello {+1}").is_err());
    }

    #[test]
    fn parse_rejects_position_past_usize_max() {
        let max = format!("{{{}}}", usize::MAX);
        assert!(matches!(
            Template::parse(max),
            Err(LocaleError::InvalidTemplate { .. })
        ));
        let below = format!("{{{}}}", usize::MAX - 1);
        assert_eq!(Template::parse(below).unwrap().arity(), usize::MAX);
    }

    #[test]
    fn parse_rejects_unclosed_brace() {
        assert!(Template::parse("Hello {0").is_err());
    }

    #[test]
    fn display_shows_pattern() {
        let t = Template::parse("{0}. Nível {1}.").unwrap();
        assert_eq!(t.to_string(), "{0}. Nível {1}.");
        assert_eq!(t.pattern(), "{0}. Nível {1}.");
    }
}
