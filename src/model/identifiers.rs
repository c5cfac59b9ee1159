//! Window identifier newtype with a smart constructor.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Identifier of a kitty window (a pane targeted by the search session).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct WindowId(u64);

/// Rejected window id argument.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid window id {0:?}: expected digits only")]
pub struct InvalidWindowId(pub String);

impl WindowId {
    /// Smart constructor: accepts a non-empty string of ASCII digits.
    pub fn parse(raw: &str) -> Result<Self, InvalidWindowId> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidWindowId(raw.to_string()));
        }
        raw.parse::<u64>()
            .map(Self)
            .map_err(|_| InvalidWindowId(raw.to_string()))
    }

    /// Raw numeric id.
    pub fn get(self) -> u64 {
        self.0
    }

    /// Remote-control match expression selecting exactly this window.
    pub fn match_arg(self) -> String {
        format!("--match=id:{}", self.0)
    }
}

impl From<u64> for WindowId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_digits() {
        assert_eq!(WindowId::parse("42").unwrap().get(), 42);
        assert_eq!(WindowId::parse("007").unwrap().get(), 7);
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(WindowId::parse("").is_err());
    }

    #[test]
    fn parse_rejects_signs_and_letters() {
        for raw in ["-1", "+1", "4a", "id:4", " 4", "4.0"] {
            assert!(WindowId::parse(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn parse_rejects_overflow() {
        assert!(WindowId::parse("99999999999999999999999").is_err());
    }

    #[test]
    fn match_arg_uses_id_selector() {
        assert_eq!(WindowId::from(12).match_arg(), "--match=id:12");
    }
}
