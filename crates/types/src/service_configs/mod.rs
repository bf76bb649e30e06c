// Path: crates/types/src/service_configs/mod.rs
//! Configuration structures for the work queue service.

use crate::error::TransactionError;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Default upper bound on a work payload, in bytes.
pub const DEFAULT_MAX_DATA_SIZE: u64 = 1024 * 1024;
/// Default minimum confidence carried in genesis.
pub const DEFAULT_MIN_CONFIDENCE: u32 = 50;

/// Parameters for the work queue service.
#[derive(Serialize, Deserialize, Encode, Decode, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkQueueParams {
    /// The maximum size of a work payload in bytes.
    #[serde(default = "default_max_data_size")]
    pub max_data_size: u64,
    /// The minimum confidence (0-100) a validation is expected to carry.
    /// Carried through genesis; no state transition consults it.
    #[serde(default = "default_min_confidence")]
    pub min_confidence: u32,
}

fn default_max_data_size() -> u64 {
    DEFAULT_MAX_DATA_SIZE
}
fn default_min_confidence() -> u32 {
    DEFAULT_MIN_CONFIDENCE
}

impl Default for WorkQueueParams {
    fn default() -> Self {
        Self {
            max_data_size: DEFAULT_MAX_DATA_SIZE,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

impl WorkQueueParams {
    /// Checks that the parameters are internally consistent.
    pub fn validate(&self) -> Result<(), TransactionError> {
        if self.max_data_size == 0 {
            return Err(TransactionError::Validation(
                "max data size must be greater than 0".to_string(),
            ));
        }
        if self.min_confidence > 100 {
            return Err(TransactionError::Validation(
                "min confidence cannot exceed 100".to_string(),
            ));
        }
        Ok(())
    }
}
