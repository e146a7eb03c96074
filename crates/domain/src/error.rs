//! Unified error type for consent operations.
//!
//! No error in this system is ever shown to the user. Every variant
//! describes a degraded path that callers log and then continue past:
//! a failed store write still lets the page session proceed on the
//! in-memory decision, a missing sink API is skipped, and an absent
//! view element turns the corresponding view command into a no-op.

use thiserror::Error;

/// Unified error type for consent operations
#[derive(Debug, Error, Clone)]
pub enum ConsentError {
    /// Persistent storage could not be read or written
    /// (disabled storage, quota exceeded, poisoned cache)
    #[error("Storage unavailable during {operation}: {message}")]
    StoreUnavailable {
        operation: &'static str,
        message: String,
    },

    /// An external signal API was not present at dispatch time
    #[error("Sink '{sink}' unavailable: {message}")]
    SinkUnavailable {
        sink: &'static str,
        message: String,
    },

    /// An expected UI element is absent on this page
    #[error("View element missing: {0}")]
    MissingViewElement(&'static str),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ConsentError {
    /// Create a store unavailability error
    pub fn store_unavailable(operation: &'static str, message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            operation,
            message: message.into(),
        }
    }

    /// Create a sink unavailability error
    pub fn sink_unavailable(sink: &'static str, message: impl Into<String>) -> Self {
        Self::SinkUnavailable {
            sink,
            message: message.into(),
        }
    }

    /// Create a missing view element error
    pub fn missing_view_element(element: &'static str) -> Self {
        Self::MissingViewElement(element)
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_unavailable_error() {
        let err = ConsentError::store_unavailable("save", "quota exceeded");
        assert!(matches!(err, ConsentError::StoreUnavailable { .. }));
        assert_eq!(
            err.to_string(),
            "Storage unavailable during save: quota exceeded"
        );
    }

    #[test]
    fn test_sink_unavailable_error() {
        let err = ConsentError::sink_unavailable("clarity", "clarity() not found");
        assert!(matches!(err, ConsentError::SinkUnavailable { .. }));
        assert!(err.to_string().contains("clarity"));
    }

    #[test]
    fn test_missing_view_element_error() {
        let err = ConsentError::missing_view_element("preferences panel");
        assert_eq!(err.to_string(), "View element missing: preferences panel");
    }
}
