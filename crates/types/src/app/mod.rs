// Path: crates/types/src/app/mod.rs
//! Core application-level data structures: work records, validator
//! statistics, events, call messages and the genesis snapshot.

mod events;
mod genesis;
mod messages;
mod validator;
mod work;

pub use events::WorkQueueEvent;
pub use genesis::GenesisState;
pub use messages::{
    DecisionResponse, PendingWorkResponse, RejectWorkParams, SubmitWorkParams,
    SubmitWorkResponse, Totals, ValidateWorkParams, ValidatorStatsQuery, ValidatorStatsResponse,
    WorkQuery,
};
pub use validator::{Specializations, ValidatorStats};
pub use work::{WorkRecord, WorkStatus, WorkType};
