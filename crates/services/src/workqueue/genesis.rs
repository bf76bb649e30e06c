// Path: crates/services/src/workqueue/genesis.rs

use super::counters::AggregateCounters;
use super::records::{all_work, submit_record};
use super::support::{load_params, scan_typed, store_typed};
use pickle_api::state::StateAccess;
use pickle_api::transaction::context::TxContext;
use pickle_types::app::{GenesisState, ValidatorStats};
use pickle_types::error::TransactionError;
use pickle_types::keys::{validator_stats_key, PARAMS_KEY, VALIDATOR_STATS_PREFIX};

/// Seeds the store from a snapshot.
///
/// Params are installed first so the replayed submissions are checked
/// against them. Records go through the normal submit path: empty IDs are
/// regenerated, the submitted counter advances, and every record comes back
/// as `Pending` at the context height with its decision fields intact.
/// Validator statistics are written verbatim.
pub(super) fn init_genesis(
    counters: &AggregateCounters,
    state: &mut dyn StateAccess,
    ctx: &mut TxContext<'_>,
    genesis: GenesisState,
) -> Result<(), TransactionError> {
    genesis.validate()?;
    store_typed(state, PARAMS_KEY, &genesis.params)?;

    let record_count = genesis.records.len();
    for record in genesis.records {
        submit_record(counters, state, ctx, record)?;
    }
    for stats in &genesis.validator_stats {
        store_typed(state, &validator_stats_key(&stats.address), stats)?;
    }

    log::info!(
        "genesis imported: records={} validators={} height={}",
        record_count,
        genesis.validator_stats.len(),
        ctx.block_height
    );
    Ok(())
}

/// Walks every record and every validator entry in store order and bundles
/// them with the current params.
pub(super) fn export_genesis(state: &dyn StateAccess) -> Result<GenesisState, TransactionError> {
    Ok(GenesisState {
        records: all_work(state)?,
        validator_stats: scan_typed::<ValidatorStats>(state, VALIDATOR_STATS_PREFIX)?,
        params: load_params(state)?,
    })
}
