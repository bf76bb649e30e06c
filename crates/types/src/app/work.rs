// Path: crates/types/src/app/work.rs
//! Work records and their lifecycle.

use crate::error::TransactionError;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category of a submitted work payload.
#[derive(
    Serialize, Deserialize, Encode, Decode, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    /// Cryptographic verification work.
    Crypto,
    /// Supply-chain attestation work.
    SupplyChain,
    /// Machine-learning dataset labelling or checking.
    MlData,
}

impl WorkType {
    /// All work types, in canonical order.
    pub const ALL: [WorkType; 3] = [WorkType::Crypto, WorkType::SupplyChain, WorkType::MlData];

    /// The wire label of this work type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkType::Crypto => "crypto",
            WorkType::SupplyChain => "supply_chain",
            WorkType::MlData => "ml_data",
        }
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkType {
    type Err = TransactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| TransactionError::Validation(format!("invalid work type: {s}")))
    }
}

/// Lifecycle status of a work record.
///
/// Records move from `Pending` to `Validated` or `Rejected`. `Validating` is
/// reserved and no transition produces it.
#[derive(Serialize, Deserialize, Encode, Decode, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    /// Submitted and awaiting a decision.
    #[default]
    Pending,
    /// Reserved.
    Validating,
    /// Judged valid by a validator.
    Validated,
    /// Judged invalid, or explicitly rejected, by a validator.
    Rejected,
}

impl WorkStatus {
    /// The label used in events and query output.
    pub fn label(&self) -> &'static str {
        match self {
            WorkStatus::Pending => "pending",
            WorkStatus::Validating => "validating",
            WorkStatus::Validated => "validated",
            WorkStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single submitted payload plus its lifecycle and, once decided, its outcome.
#[derive(Serialize, Deserialize, Encode, Decode, Debug, Clone, PartialEq, Eq)]
pub struct WorkRecord {
    /// Unique identifier; the record's storage key.
    pub id: String,
    /// The category of work.
    pub work_type: WorkType,
    /// The opaque payload, hex-encoded in JSON.
    #[serde(with = "hex_bytes")]
    pub data: Vec<u8>,
    /// The height at which the work was submitted.
    pub submitted_at: u64,
    /// The height of the most recent decision, if any.
    #[serde(default)]
    pub validated_at: Option<u64>,
    /// The validator that rendered the most recent decision, if any.
    #[serde(default)]
    pub validator: Option<String>,
    /// Current lifecycle status.
    #[serde(default)]
    pub status: WorkStatus,
    /// The validator's declared confidence (0-100).
    #[serde(default)]
    pub confidence: u32,
    /// Validation proof or rejection reason, depending on the decision path.
    #[serde(default)]
    pub proof_or_reason: String,
}

impl WorkRecord {
    /// Creates an undecided record for the given payload.
    pub fn new(id: impl Into<String>, work_type: WorkType, data: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            work_type,
            data,
            submitted_at: 0,
            validated_at: None,
            validator: None,
            status: WorkStatus::Pending,
            confidence: 0,
            proof_or_reason: String::new(),
        }
    }
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(s).map_err(serde::de::Error::custom)
    }
}
