use thiserror::Error;

/// Errors from key-value storage operations (used by the `KvStore` trait in aura-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Errors raised while building a trigger rule table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("rule {index} ({topic}) has no keywords")]
    EmptyTrigger { index: usize, topic: String },

    #[error("rule {index} has an invalid trigger: {reason}")]
    InvalidTrigger { index: usize, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("disk I/O error".to_string());
        assert_eq!(err.to_string(), "query error: disk I/O error");
    }

    #[test]
    fn test_rule_error_display() {
        let err = RuleError::EmptyTrigger {
            index: 3,
            topic: "nutrition".to_string(),
        };
        assert_eq!(err.to_string(), "rule 3 (nutrition) has no keywords");
    }
}
