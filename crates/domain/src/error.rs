//! Unified error types for the domain layer
//!
//! Only misuse is reported through `DomainError`. Anticipated outcomes such as
//! a wrong key or an already locked door are plain return values.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (absent, blank or out-of-range arguments)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for enumerations read from text)
    #[error("Parse error: {0}")]
    Parse(String),

    /// State transition not allowed
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

impl DomainError {
    /// Creates a validation error for invalid arguments.
    ///
    /// Use this when a required value is absent or outside its range:
    /// - Blank addresses, materials or colors
    /// - Negative bulk counts
    /// - Identities that were never assigned
    ///
    /// # Example
    /// ```ignore
    /// if count < 0 {
    ///     return Err(DomainError::validation("Window count cannot be negative"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an invalid state transition error
    pub fn invalid_state_transition(msg: impl Into<String>) -> Self {
        Self::InvalidStateTransition(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("address cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: address cannot be empty");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown direction: up");
        assert!(matches!(err, DomainError::Parse(_)));
        assert!(err.to_string().contains("up"));
    }

    #[test]
    fn test_invalid_state_transition_error() {
        let err = DomainError::invalid_state_transition("Entry door is locked");
        assert!(matches!(err, DomainError::InvalidStateTransition(_)));
        assert_eq!(
            err.to_string(),
            "Invalid state transition: Entry door is locked"
        );
    }
}
