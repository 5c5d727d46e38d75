use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// Maximum title length, in characters.
pub const TITLE_MAX_CHARS: usize = 50;

/// Maximum content length, in characters.
pub const CONTENT_MAX_CHARS: usize = 500;

/// Store-assigned post identifier.
///
/// Twelve opaque bytes, exchanged on the wire as exactly 24 hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId([u8; 12]);

impl PostId {
    /// Length of the external hex representation.
    pub const HEX_LEN: usize = 24;

    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> [u8; 12] {
        self.0
    }

    /// Parse the external representation.
    ///
    /// Returns `None` unless `raw` is exactly 24 hex digits (either case).
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() != Self::HEX_LEN {
            return None;
        }
        let mut bytes = [0u8; 12];
        hex::decode_to_slice(raw, &mut bytes).ok()?;
        Some(Self(bytes))
    }

    /// Lowercase hex representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for PostId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
            .ok_or_else(|| DomainError::Validation(format!("{s:?} is not a 24-digit hex id")))
    }
}

impl Serialize for PostId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Post entity as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

/// Validated write payload: the only fields a client may set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostInput {
    title: String,
    content: String,
}

impl PostInput {
    /// Build an input, enforcing the title and content length bounds.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        let content = content.into();

        let mut violations = Vec::new();
        if let Some(msg) = check_length("title", &title, TITLE_MAX_CHARS) {
            violations.push(msg);
        }
        if let Some(msg) = check_length("content", &content, CONTENT_MAX_CHARS) {
            violations.push(msg);
        }

        if !violations.is_empty() {
            return Err(DomainError::Validation(violations.join(", ")));
        }

        Ok(Self { title, content })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

fn check_length(field: &str, value: &str, max: usize) -> Option<String> {
    let len = value.chars().count();
    if len == 0 {
        Some(format!("{field} must not be empty"))
    } else if len > max {
        Some(format!("{field} must be at most {max} characters"))
    } else {
        None
    }
}

/// A post about to be inserted; the store assigns its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl NewPost {
    pub fn new(input: PostInput, created: DateTime<Utc>) -> Self {
        Self {
            title: input.title,
            content: input.content,
            created,
        }
    }

    /// Attach the store-assigned id.
    pub fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            created: self.created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_mixed_case_hex() {
        let id = PostId::parse("60D5ec49f13e5a5a9c0f9a2c").unwrap();
        assert_eq!(id.to_hex(), "60d5ec49f13e5a5a9c0f9a2c");
    }

    #[test]
    fn test_parse_rejects_malformed_ids() {
        for raw in [
            "",
            "60d5ec49f13e5a5a9c0f9a2",
            "60d5ec49f13e5a5a9c0f9a2c0",
            "60d5ec49f13e5a5a9c0f9a2g",
            "not-an-object-id-at-all!",
            "ééééééééééee",
        ] {
            assert!(PostId::parse(raw).is_none(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_post_id_serializes_as_hex_string() {
        let id = PostId::from_bytes([0xab; 12]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abababababababababababab\"");

        let back: PostId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_from_str_reports_validation_error() {
        let err = "xyz".parse::<PostId>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let parsed = serde_json::from_str::<PostId>("\"xyz\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_input_bounds() {
        assert!(PostInput::new("A", "B").is_ok());
        assert!(PostInput::new("t".repeat(TITLE_MAX_CHARS), "c".repeat(CONTENT_MAX_CHARS)).is_ok());

        assert!(PostInput::new("", "B").is_err());
        assert!(PostInput::new("A", "").is_err());
        assert!(PostInput::new("t".repeat(TITLE_MAX_CHARS + 1), "B").is_err());
        assert!(PostInput::new("A", "c".repeat(CONTENT_MAX_CHARS + 1)).is_err());
    }

    #[test]
    fn test_input_counts_characters_not_bytes() {
        // 50 two-byte characters
        assert!(PostInput::new("ñ".repeat(TITLE_MAX_CHARS), "B").is_ok());
    }

    #[test]
    fn test_input_reports_every_violation() {
        let err = PostInput::new("", "").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("title"));
        assert!(msg.contains("content"));
    }
}
