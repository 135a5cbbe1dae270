//! Key-field hints
//!
//! Flags field names containing common business keywords so the console
//! report can point at likely identifiers and contact fields.

use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};

/// Keywords matched when no custom list is given
pub const DEFAULT_KEY_KEYWORDS: &[&str] = &[
    "nombre", "codigo", "cargo", "cedula", "celular", "correo", "empresa", "centro", "ubicacion",
];

/// Case-insensitive keyword matcher over field names
#[derive(Debug, Clone)]
pub struct KeyFieldMatcher {
    pattern: Regex,
}

impl KeyFieldMatcher {
    /// Build a matcher from a keyword list
    pub fn new<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternatives: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_string())
            .filter(|k| !k.is_empty())
            .map(|k| regex::escape(&k))
            .collect();

        if alternatives.is_empty() {
            return Err(Error::invalid_value("keywords", "at least one keyword required"));
        }

        let pattern = RegexBuilder::new(&alternatives.join("|"))
            .case_insensitive(true)
            .build()
            .map_err(|e| Error::invalid_value("keywords", e.to_string()))?;

        Ok(Self { pattern })
    }

    /// Matcher over [`DEFAULT_KEY_KEYWORDS`]
    pub fn defaults() -> Result<Self> {
        Self::new(DEFAULT_KEY_KEYWORDS)
    }

    /// Check one field name
    pub fn is_match(&self, field: &str) -> bool {
        self.pattern.is_match(field)
    }

    /// Names that match, in input order
    pub fn matching<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        fields.into_iter().filter(|f| self.is_match(f)).collect()
    }
}
