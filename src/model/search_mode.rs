//! Query interpretation mode.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// How the query string is interpreted by the marker subsystem.
///
/// Exactly two values exist; toggling always flips between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Literal text match.
    #[default]
    Text,
    /// Regular expression match.
    Regex,
}

impl SearchMode {
    /// Name used in marker match types and in the persisted state.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::Text => "text",
            SearchMode::Regex => "regex",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            SearchMode::Text => SearchMode::Regex,
            SearchMode::Regex => SearchMode::Text,
        }
    }

    /// Three-character prompt glyph shown before the query.
    pub fn prompt(self) -> &'static str {
        match self {
            SearchMode::Text => "=> ",
            SearchMode::Regex => "~> ",
        }
    }

    /// Parse a persisted mode name. Anything but `regex` reads as text.
    pub fn from_name(name: &str) -> Self {
        if name == "regex" {
            SearchMode::Regex
        } else {
            SearchMode::Text
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Lenient so that a stale or hand-edited cache never discards the last query.
impl<'de> Deserialize<'de> for SearchMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(SearchMode::from_name(&name))
    }
}
