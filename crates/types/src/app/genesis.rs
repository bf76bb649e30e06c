// Path: crates/types/src/app/genesis.rs
//! The whole-store snapshot used to seed and export the work queue.

use crate::app::{ValidatorStats, WorkRecord};
use crate::error::TransactionError;
use crate::service_configs::WorkQueueParams;
use serde::{Deserialize, Serialize};

/// Records, validator statistics and parameters, bundled as one unit.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GenesisState {
    /// Work records in store key order.
    #[serde(default)]
    pub records: Vec<WorkRecord>,
    /// Validator statistics in store key order.
    #[serde(default)]
    pub validator_stats: Vec<ValidatorStats>,
    /// Service parameters.
    #[serde(default)]
    pub params: WorkQueueParams,
}

impl GenesisState {
    /// Checks params and each record's static fields. Empty record IDs are
    /// allowed; import regenerates them.
    pub fn validate(&self) -> Result<(), TransactionError> {
        self.params.validate()?;
        for (i, record) in self.records.iter().enumerate() {
            if record.data.is_empty() {
                return Err(TransactionError::Validation(format!(
                    "genesis record {i} has empty data"
                )));
            }
            if record.confidence > 100 {
                return Err(TransactionError::Validation(format!(
                    "genesis record {i} has confidence {} above 100",
                    record.confidence
                )));
            }
        }
        for stats in &self.validator_stats {
            if stats.address.is_empty() {
                return Err(TransactionError::Validation(
                    "genesis validator stats with empty address".into(),
                ));
            }
        }
        Ok(())
    }

    /// Parses a genesis document from JSON.
    pub fn from_json_str(s: &str) -> Result<Self, crate::error::ConfigError> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::WorkType;

    #[test]
    fn default_genesis_is_valid() {
        let genesis = GenesisState::default();
        genesis.validate().unwrap();
        assert!(genesis.records.is_empty());
        assert_eq!(genesis.params, WorkQueueParams::default());
    }

    #[test]
    fn rejects_empty_record_data_and_bad_params() {
        let mut genesis = GenesisState::default();
        genesis
            .records
            .push(WorkRecord::new("", WorkType::Crypto, vec![]));
        assert!(matches!(
            genesis.validate(),
            Err(TransactionError::Validation(_))
        ));

        let mut genesis = GenesisState::default();
        genesis.params.max_data_size = 0;
        assert!(genesis.validate().is_err());
    }

    #[test]
    fn parses_sparse_json() {
        let genesis = GenesisState::from_json_str(
            r#"{"records":[{"id":"","work_type":"ml_data","data":"ff","submitted_at":0}]}"#,
        )
        .unwrap();
        assert_eq!(genesis.records.len(), 1);
        assert_eq!(genesis.params.min_confidence, 50);
        genesis.validate().unwrap();
    }
}
