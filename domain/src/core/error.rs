//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Topic cannot be empty")]
    EmptyTopic,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_topic_display() {
        let error = DomainError::EmptyTopic;
        assert_eq!(error.to_string(), "Topic cannot be empty");
    }
}
