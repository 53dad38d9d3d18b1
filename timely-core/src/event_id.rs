use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TimelyError, TimelyResult};

/// Identifier of an event on the backend.
///
/// Always trimmed and non-empty. A caller that has no event id yet holds
/// `Option<EventId>` and never reaches the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventId(String);

impl EventId {
    pub fn parse(raw: &str) -> TimelyResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TimelyError::InvalidEventId(raw.to_string()));
        }
        Ok(EventId(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EventId {
    type Error = TimelyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        EventId::parse(&value)
    }
}

impl From<EventId> for String {
    fn from(id: EventId) -> Self {
        id.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_whitespace() {
        let id = EventId::parse("  evt-42 ").unwrap();
        assert_eq!(id.as_str(), "evt-42");
    }

    #[test]
    fn parse_rejects_blank() {
        assert!(matches!(EventId::parse(""), Err(TimelyError::InvalidEventId(_))));
        assert!(matches!(EventId::parse("   "), Err(TimelyError::InvalidEventId(_))));
    }

    #[test]
    fn deserialize_rejects_empty_string() {
        let parsed: Result<EventId, _> = serde_json::from_str("\"\"");
        assert!(parsed.is_err());
    }
}
