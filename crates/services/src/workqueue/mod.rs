// Path: crates/services/src/workqueue/mod.rs
//! The work queue: a deterministic record-keeping engine for peer-validated
//! work.
//!
//! Submitters post opaque payloads; validators judge each one valid or
//! invalid with a stated confidence. Every call is one synchronous step over
//! the host's `StateAccess` store. Requests are fully checked before the
//! first write, and events are emitted only after the last one.

use pickle_api::services::BlockchainService;
use pickle_api::state::StateAccess;
use pickle_api::transaction::context::TxContext;
use pickle_types::app::{
    DecisionResponse, GenesisState, RejectWorkParams, SubmitWorkParams, SubmitWorkResponse,
    Totals, ValidateWorkParams, ValidatorStats, WorkRecord,
};
use pickle_types::error::TransactionError;
use pickle_types::service_configs::WorkQueueParams;

mod counters;
mod genesis;
mod id;
mod query;
mod records;
mod reputation;
mod support;


pub use counters::{AggregateCounters, Counter};
pub use id::generate_work_id;
pub use reputation::Outcome;

use support::{decode_params, encode_response};

/// The work queue service.
#[derive(Debug, Default, Clone)]
pub struct WorkQueueService {
    counters: AggregateCounters,
}

fn log_rejected<T>(op: &str, result: Result<T, TransactionError>) -> Result<T, TransactionError> {
    if let Err(e) = &result {
        if e.is_fatal() {
            log::error!("{op} hit corrupted state: {e}");
        } else {
            log::debug!("{op} rejected: {e}");
        }
    }
    result
}

impl WorkQueueService {
    /// Stores a new pending record and returns its ID, generating one from
    /// the height and payload if `params.work_id` is empty.
    pub fn submit_work(
        &self,
        state: &mut dyn StateAccess,
        ctx: &mut TxContext<'_>,
        params: SubmitWorkParams,
    ) -> Result<String, TransactionError> {
        log_rejected(
            "submit_work",
            records::submit_work(&self.counters, state, ctx, params),
        )
    }

    /// Records a validator's judgement on an existing record.
    pub fn validate_work(
        &self,
        state: &mut dyn StateAccess,
        ctx: &mut TxContext<'_>,
        params: ValidateWorkParams,
    ) -> Result<(), TransactionError> {
        log_rejected(
            "validate_work",
            records::validate_work(&self.counters, state, ctx, params),
        )
    }

    /// Rejects an existing record without touching its confidence.
    pub fn reject_work(
        &self,
        state: &mut dyn StateAccess,
        ctx: &mut TxContext<'_>,
        params: RejectWorkParams,
    ) -> Result<(), TransactionError> {
        log_rejected(
            "reject_work",
            records::reject_work(&self.counters, state, ctx, params),
        )
    }

    /// Fetches a record by ID.
    pub fn work(&self, state: &dyn StateAccess, work_id: &str) -> Result<WorkRecord, TransactionError> {
        records::get_work(state, work_id)
    }

    /// All pending records in raw key order.
    pub fn pending_work(&self, state: &dyn StateAccess) -> Result<Vec<WorkRecord>, TransactionError> {
        records::pending_work(state)
    }

    /// A validator's statistics.
    pub fn validator_stats(
        &self,
        state: &dyn StateAccess,
        address: &str,
    ) -> Result<ValidatorStats, TransactionError> {
        reputation::get_validator_stats(state, address)
    }

    /// The three aggregate totals.
    pub fn totals(&self, state: &dyn StateAccess) -> Result<Totals, TransactionError> {
        self.counters.totals(state)
    }

    /// The installed parameters.
    pub fn params(&self, state: &dyn StateAccess) -> Result<WorkQueueParams, TransactionError> {
        support::load_params(state)
    }

    /// Seeds the store from a snapshot.
    pub fn init_genesis(
        &self,
        state: &mut dyn StateAccess,
        ctx: &mut TxContext<'_>,
        genesis: GenesisState,
    ) -> Result<(), TransactionError> {
        log_rejected(
            "init_genesis",
            genesis::init_genesis(&self.counters, state, ctx, genesis),
        )
    }

    /// Snapshots records, validator statistics and params.
    pub fn export_genesis(&self, state: &dyn StateAccess) -> Result<GenesisState, TransactionError> {
        genesis::export_genesis(state)
    }
}

impl BlockchainService for WorkQueueService {
    fn id(&self) -> &'static str {
        "workqueue"
    }

    fn handle_service_call(
        &self,
        state: &mut dyn StateAccess,
        method: &str,
        params: &[u8],
        ctx: &mut TxContext<'_>,
    ) -> Result<Vec<u8>, TransactionError> {
        match method {
            "submit_work@v1" => {
                let p: SubmitWorkParams = decode_params(params)?;
                p.validate_basic()?;
                let work_id = self.submit_work(state, ctx, p)?;
                encode_response(&SubmitWorkResponse { work_id })
            }
            "validate_work@v1" => {
                let p: ValidateWorkParams = decode_params(params)?;
                p.validate_basic()?;
                self.validate_work(state, ctx, p)?;
                encode_response(&DecisionResponse { success: true })
            }
            "reject_work@v1" => {
                let p: RejectWorkParams = decode_params(params)?;
                p.validate_basic()?;
                self.reject_work(state, ctx, p)?;
                encode_response(&DecisionResponse { success: true })
            }
            _ => Err(TransactionError::Unsupported(format!(
                "workqueue does not support method '{}'",
                method
            ))),
        }
    }

    fn handle_query(
        &self,
        state: &dyn StateAccess,
        method: &str,
        params: &[u8],
    ) -> Result<Vec<u8>, TransactionError> {
        query::route(&self.counters, state, method, params)
    }
}
