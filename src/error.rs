//! Error handling for the bucketchain library
//!
//! A single small error enum covers the whole crate: lookups that miss and
//! configuration rejected at construction time. Every other operation on the
//! maps succeeds unconditionally.

use thiserror::Error;

/// Main error type for the bucketchain library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BucketError {
    /// Lookup-by-key found no matching entry
    #[error("key not found in hash table")]
    KeyNotFound,

    /// Constructor parameters rejected during validation
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the rejected parameter
        message: String,
    },
}

impl BucketError {
    /// Create a key-not-found error
    pub fn key_not_found() -> Self {
        Self::KeyNotFound
    }

    /// Create an invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::KeyNotFound => "lookup",
            Self::InvalidConfig { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, BucketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = BucketError::key_not_found();
        assert_eq!(err, BucketError::KeyNotFound);
        assert_eq!(err.category(), "lookup");

        let err = BucketError::invalid_config("zero buckets");
        assert_eq!(err.category(), "config");
    }

    #[test]
    fn test_error_display() {
        let display = format!("{}", BucketError::key_not_found());
        assert!(display.contains("key not found"));

        let display = format!("{}", BucketError::invalid_config("load factor 2.0"));
        assert!(display.contains("invalid configuration"));
        assert!(display.contains("load factor 2.0"));
    }

    #[test]
    fn test_error_debug() {
        let debug_str = format!("{:?}", BucketError::invalid_config("test"));
        assert!(debug_str.contains("InvalidConfig"));
        assert!(debug_str.contains("test"));
    }
}
