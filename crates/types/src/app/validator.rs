// Path: crates/types/src/app/validator.rs
//! Per-validator reputation statistics.

use crate::app::WorkType;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-work-type decision counts for one validator. Entries are created the
/// first time a validator decides on a work type.
#[derive(Serialize, Deserialize, Encode, Decode, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Specializations(BTreeMap<WorkType, u64>);

impl Specializations {
    /// Adds one decision for `work_type`, creating the entry on demand.
    pub fn increment(&mut self, work_type: WorkType) {
        *self.0.entry(work_type).or_insert(0) += 1;
    }

    /// The decision count for `work_type`, zero if never seen.
    pub fn get(&self, work_type: WorkType) -> u64 {
        self.0.get(&work_type).copied().unwrap_or(0)
    }
}

/// Running reputation profile of a single validator.
#[derive(Serialize, Deserialize, Encode, Decode, Debug, Clone, PartialEq, Eq)]
pub struct ValidatorStats {
    /// The validator's address; the entry's storage key.
    pub address: String,
    /// Number of decisions that judged work valid.
    #[serde(default)]
    pub total_validated: u64,
    /// Number of decisions that judged work invalid or rejected it.
    #[serde(default)]
    pub total_rejected: u64,
    /// Decision counts per work type.
    #[serde(default)]
    pub specializations: Specializations,
    /// Integer running mean of declared confidence (0-100).
    #[serde(default)]
    pub average_confidence: u32,
    /// Height of the validator's latest decision.
    #[serde(default)]
    pub last_active_at: u64,
}

impl ValidatorStats {
    /// A zeroed profile for a validator with no history.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            total_validated: 0,
            total_rejected: 0,
            specializations: Specializations::default(),
            average_confidence: 0,
            last_active_at: 0,
        }
    }

    /// Total decisions of either kind.
    pub fn total_decisions(&self) -> u64 {
        self.total_validated.saturating_add(self.total_rejected)
    }

    /// Share of decisions that judged work valid, as a whole percentage.
    pub fn accuracy(&self) -> u64 {
        match self.total_decisions() {
            0 => 0,
            total => self.total_validated.saturating_mul(100) / total,
        }
    }
}
