// Path: crates/services/src/workqueue/query.rs

use super::counters::AggregateCounters;
use super::records::{get_work, pending_work};
use super::reputation::get_validator_stats;
use super::support::{decode_params, encode_response};
use pickle_api::state::StateAccess;
use pickle_types::app::{PendingWorkResponse, ValidatorStatsQuery, ValidatorStatsResponse, WorkQuery};
use pickle_types::error::TransactionError;

pub(super) fn route(
    counters: &AggregateCounters,
    state: &dyn StateAccess,
    method: &str,
    params: &[u8],
) -> Result<Vec<u8>, TransactionError> {
    match method {
        "work@v1" => {
            let q: WorkQuery = decode_params(params)?;
            encode_response(&get_work(state, &q.work_id)?)
        }
        "pending_work@v1" => encode_response(&PendingWorkResponse {
            records: pending_work(state)?,
        }),
        "validator_stats@v1" => {
            let q: ValidatorStatsQuery = decode_params(params)?;
            let stats = get_validator_stats(state, &q.address)?;
            let accuracy = stats.accuracy();
            encode_response(&ValidatorStatsResponse { stats, accuracy })
        }
        "total_stats@v1" => encode_response(&counters.totals(state)?),
        _ => Err(TransactionError::Unsupported(format!(
            "workqueue does not support query '{}'",
            method
        ))),
    }
}
