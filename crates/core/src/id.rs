//! Caller-assigned external identifier.

use serde::{Deserialize, Serialize};

/// Maximum accepted length for an external identifier token.
pub const MAX_EXTERNAL_ID_LEN: usize = 128;

/// Caller-assigned, unique, immutable key for a [`crate::JobRecord`].
///
/// Unlike the surrogate `id` (a server-assigned UUID), this is the natural key
/// used for lookup and for all mutation operations. Construction trims the
/// token; syntactic validity is checked during full validation so a bad token
/// is reported as a field-named validation failure, not a deserialize error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalId(String);

impl ExternalId {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the token is a syntactically acceptable identifier:
    /// non-empty, bounded length, no whitespace.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
            && self.0.len() <= MAX_EXTERNAL_ID_LEN
            && !self.0.chars().any(char::is_whitespace)
    }
}

impl core::fmt::Display for ExternalId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl AsRef<str> for ExternalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ExternalId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(ExternalId::new("  ext-1  ").as_str(), "ext-1");
    }

    #[test]
    fn rejects_empty_and_inner_whitespace() {
        assert!(!ExternalId::new("   ").is_valid());
        assert!(!ExternalId::new("ext 1").is_valid());
        assert!(ExternalId::new("ext-1").is_valid());
    }

    #[test]
    fn rejects_overlong_tokens() {
        assert!(!ExternalId::new("x".repeat(MAX_EXTERNAL_ID_LEN + 1)).is_valid());
    }
}
