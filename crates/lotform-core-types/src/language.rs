//! Language tag for text lookups
//!
//! Decision-code texts and material descriptions are language-dependent on
//! the backend side. The service resolves them with one fixed tag per
//! deployment; there is no per-request localization.

use serde::{Deserialize, Serialize};

/// Backend language tag (e.g. `EN`, `DE`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Create a tag from a backend language key, uppercased
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into().to_uppercase())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageTag {
    fn default() -> Self {
        Self("EN".to_string())
    }
}

impl std::fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(LanguageTag::default().as_str(), "EN");
    }

    #[test]
    fn test_new_uppercases() {
        assert_eq!(LanguageTag::new("de").as_str(), "DE");
    }

    #[test]
    fn test_display() {
        let tag = LanguageTag::new("FR");
        assert_eq!(format!("{}", tag), "FR");
    }
}
