//! Topic value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The subject a council session discusses (Value Object)
///
/// Every line of dialogue is templated around this text; it is never
/// parsed or interpreted, only interpolated verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    content: String,
}

impl Topic {
    /// Try to create a new topic, returning None if empty or whitespace
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the topic content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl std::str::FromStr for Topic {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::try_new(s).ok_or(DomainError::EmptyTopic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_creation() {
        let t = Topic::try_new("Remote work").unwrap();
        assert_eq!(t.content(), "Remote work");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(Topic::try_new("").is_none());
        assert!(Topic::try_new("   ").is_none());
    }

    #[test]
    fn test_parse_empty_is_domain_error() {
        let err = "  ".parse::<Topic>().unwrap_err();
        assert_eq!(err, DomainError::EmptyTopic);
    }
}
