//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache and its command session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// A single entry weighs more than the whole cache can hold
    #[error("Entry weight {weight} exceeds cache capacity {capacity}")]
    OversizedEntry { weight: u64, capacity: u64 },

    /// Key has no live entry
    #[error("Key not found")]
    NotFound,

    /// Malformed session command
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Unusable configuration value
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oversized_message_names_both_sizes() {
        let err = CacheError::OversizedEntry {
            weight: 64,
            capacity: 16,
        };
        let msg = err.to_string();
        assert!(msg.contains("64"));
        assert!(msg.contains("16"));
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(CacheError::NotFound.to_string(), "Key not found");
    }
}
