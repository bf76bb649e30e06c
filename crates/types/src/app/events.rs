// Path: crates/types/src/app/events.rs

use crate::app::{WorkStatus, WorkType};
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// An auditable notification emitted exactly once per successful mutating call.
#[derive(Clone, Debug, Serialize, Deserialize, Encode, Decode, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkQueueEvent {
    /// A work payload was accepted and stored as pending.
    WorkSubmitted {
        /// The stored record's ID.
        id: String,
        /// The category of the submitted work.
        work_type: WorkType,
        /// The submission height.
        submitted_at: u64,
    },
    /// A validator judged a work record, valid or not.
    WorkValidated {
        /// The decided record's ID.
        id: String,
        /// The deciding validator.
        validator: String,
        /// The resulting status (`Validated` or `Rejected`).
        status: WorkStatus,
        /// The declared confidence.
        confidence: u32,
    },
    /// A validator explicitly rejected a work record.
    WorkRejected {
        /// The rejected record's ID.
        id: String,
        /// The rejecting validator.
        validator: String,
        /// The stated reason.
        reason: String,
    },
}

impl WorkQueueEvent {
    /// The event's type tag.
    pub fn event_type(&self) -> &'static str {
        match self {
            WorkQueueEvent::WorkSubmitted { .. } => "work_submitted",
            WorkQueueEvent::WorkValidated { .. } => "work_validated",
            WorkQueueEvent::WorkRejected { .. } => "work_rejected",
        }
    }

    /// The event's payload as ordered `(key, value)` string pairs.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        match self {
            WorkQueueEvent::WorkSubmitted {
                id,
                work_type,
                submitted_at,
            } => vec![
                ("work_id", id.clone()),
                ("work_type", work_type.to_string()),
                ("submitted_at", submitted_at.to_string()),
            ],
            WorkQueueEvent::WorkValidated {
                id,
                validator,
                status,
                confidence,
            } => vec![
                ("work_id", id.clone()),
                ("validator", validator.clone()),
                ("status", status.to_string()),
                ("confidence", confidence.to_string()),
            ],
            WorkQueueEvent::WorkRejected {
                id,
                validator,
                reason,
            } => vec![
                ("work_id", id.clone()),
                ("validator", validator.clone()),
                ("reason", reason.clone()),
            ],
        }
    }

    /// The ID of the work record the event concerns.
    pub fn work_id(&self) -> &str {
        match self {
            WorkQueueEvent::WorkSubmitted { id, .. }
            | WorkQueueEvent::WorkValidated { id, .. }
            | WorkQueueEvent::WorkRejected { id, .. } => id,
        }
    }
}
