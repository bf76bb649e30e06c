// Path: crates/types/src/error/mod.rs
//! Core error types for the Pickle work queue.

use thiserror::Error;

/// Errors related to the underlying key-value store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// An error occurred in the state backend.
    #[error("State backend error: {0}")]
    Backend(String),
    /// An error occurred while writing to the state.
    #[error("State write error: {0}")]
    WriteError(String),
    /// Bytes stored under an expected key could not be decoded. The store
    /// contract has already been broken when this is observed.
    #[error("Corrupted state under key {key}: {reason}")]
    Corrupted {
        /// Hex encoding of the offending key.
        key: String,
        /// What went wrong while decoding.
        reason: String,
    },
}

impl StateError {
    /// Builds a `Corrupted` error for the given raw key.
    pub fn corrupted(key: &[u8], reason: impl Into<String>) -> Self {
        StateError::Corrupted {
            key: hex::encode(key),
            reason: reason.into(),
        }
    }
}

/// Errors returned by the work queue's mutating and read operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    /// A submission or message was malformed (bad work type, empty or
    /// oversized payload, missing identifiers).
    #[error("Validation failed: {0}")]
    Validation(String),
    /// The referenced work record or validator does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
    /// A call argument was outside its permitted range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The requested service method is not supported.
    #[error("Unsupported method: {0}")]
    Unsupported(String),
    /// Call parameters could not be decoded.
    #[error("Deserialization error: {0}")]
    Deserialization(String),
    /// A response or value could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// An error originating from the state store.
    #[error("State error: {0}")]
    State(#[from] StateError),
}

impl TransactionError {
    /// Returns true if the error reflects a broken store rather than a bad
    /// request. Hosts must halt on fatal errors instead of retrying.
    pub fn is_fatal(&self) -> bool {
        matches!(self, TransactionError::State(StateError::Corrupted { .. }))
    }
}

impl From<parity_scale_codec::Error> for TransactionError {
    fn from(e: parity_scale_codec::Error) -> Self {
        TransactionError::Deserialization(e.to_string())
    }
}

/// Errors related to loading and validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
    /// The configuration parsed but holds invalid values.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_corruption_is_fatal() {
        let corrupted = TransactionError::from(StateError::corrupted(b"\x01abc", "short read"));
        assert!(corrupted.is_fatal());
        assert!(!TransactionError::NotFound("w1".into()).is_fatal());
        assert!(!TransactionError::State(StateError::Backend("io".into())).is_fatal());
    }

    #[test]
    fn corrupted_key_is_hex_encoded() {
        let err = StateError::corrupted(&[0x02, 0xff], "bad");
        assert_eq!(
            err,
            StateError::Corrupted {
                key: "02ff".into(),
                reason: "bad".into()
            }
        );
    }
}
