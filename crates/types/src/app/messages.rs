// Path: crates/types/src/app/messages.rs
//! Call parameters, responses and query payloads for the work queue service.

use crate::app::{ValidatorStats, WorkRecord};
use crate::error::TransactionError;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Request to submit a work payload (`submit_work@v1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct SubmitWorkParams {
    /// Caller-chosen ID; generated from height and payload when empty.
    #[serde(default)]
    pub work_id: String,
    /// Work type label (`crypto`, `supply_chain` or `ml_data`).
    pub work_type: String,
    /// The opaque payload.
    pub data: Vec<u8>,
}

impl SubmitWorkParams {
    /// Stateless checks run before the engine sees the request.
    pub fn validate_basic(&self) -> Result<(), TransactionError> {
        if self.work_type.is_empty() {
            return Err(TransactionError::Validation(
                "work type cannot be empty".into(),
            ));
        }
        if self.data.is_empty() {
            return Err(TransactionError::Validation(
                "work data cannot be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Request to record a validator's judgement (`validate_work@v1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct ValidateWorkParams {
    /// The record being judged.
    pub work_id: String,
    /// The judging validator's address.
    pub validator: String,
    /// The verdict.
    pub valid: bool,
    /// Declared confidence, 0-100. Range is checked by the engine.
    pub confidence: u32,
    /// Optional validation proof.
    #[serde(default)]
    pub proof: String,
}

impl ValidateWorkParams {
    /// Stateless checks run before the engine sees the request.
    pub fn validate_basic(&self) -> Result<(), TransactionError> {
        require_ids(&self.work_id, &self.validator)
    }
}

/// Request to reject a work record outright (`reject_work@v1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct RejectWorkParams {
    /// The record being rejected.
    pub work_id: String,
    /// The rejecting validator's address.
    pub validator: String,
    /// Free-form reason.
    #[serde(default)]
    pub reason: String,
}

impl RejectWorkParams {
    /// Stateless checks run before the engine sees the request.
    pub fn validate_basic(&self) -> Result<(), TransactionError> {
        require_ids(&self.work_id, &self.validator)
    }
}

fn require_ids(work_id: &str, validator: &str) -> Result<(), TransactionError> {
    if work_id.is_empty() {
        return Err(TransactionError::Validation("work ID cannot be empty".into()));
    }
    if validator.is_empty() {
        return Err(TransactionError::Validation(
            "validator address cannot be empty".into(),
        ));
    }
    Ok(())
}

/// Response to `submit_work@v1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct SubmitWorkResponse {
    /// The stored (possibly generated) record ID.
    pub work_id: String,
}

/// Response to `validate_work@v1` and `reject_work@v1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct DecisionResponse {
    /// Always true; failures are returned as errors.
    pub success: bool,
}

/// Query for a single work record (`work@v1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct WorkQuery {
    /// The record ID.
    pub work_id: String,
}

/// Query for one validator's statistics (`validator_stats@v1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct ValidatorStatsQuery {
    /// The validator's address.
    pub address: String,
}

/// Response to `pending_work@v1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct PendingWorkResponse {
    /// Pending records in key order.
    pub records: Vec<WorkRecord>,
}

/// Response to `validator_stats@v1`, with derived figures alongside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct ValidatorStatsResponse {
    /// The stored statistics.
    pub stats: ValidatorStats,
    /// `total_validated` as a share of all decisions, in whole percent.
    pub accuracy: u64,
}

/// Snapshot of the three aggregate counters (`total_stats@v1`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct Totals {
    /// Total accepted submissions.
    pub submitted: u64,
    /// Total decisions resulting in `Validated`.
    pub validated: u64,
    /// Total decisions resulting in `Rejected`.
    pub rejected: u64,
}
