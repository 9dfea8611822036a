//! Numbers carried verbatim from the feed.

use std::fmt;

use serde::de::IgnoredAny;
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

/// A JSON number literal kept exactly as the feed wrote it.
///
/// Token supplies routinely exceed `u64`, so the value is never converted to
/// a machine type; `123456789012345678901234567` stays that string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumberLiteral(String);

impl NumberLiteral {
    /// Accept `text` if it is exactly one JSON number.
    #[must_use]
    pub fn new(text: &str) -> Option<Self> {
        let text = text.trim();
        if !text.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
            return None;
        }
        // Syntax check only; nothing is converted.
        serde_json::from_str::<IgnoredAny>(text).ok()?;
        Some(Self(text.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for NumberLiteral {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for NumberLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for NumberLiteral {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawValue::from_string(self.0.clone())
            .map_err(<S::Error as serde::ser::Error>::custom)?
            .serialize(serializer)
    }
}
