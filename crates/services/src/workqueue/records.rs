// Path: crates/services/src/workqueue/records.rs

use super::counters::{AggregateCounters, Counter};
use super::id::generate_work_id;
use super::reputation::{record_decision, Outcome};
use super::support::{load_params, load_typed, scan_typed, store_typed};
use pickle_api::state::StateAccess;
use pickle_api::transaction::context::TxContext;
use pickle_types::app::{
    RejectWorkParams, SubmitWorkParams, ValidateWorkParams, WorkQueueEvent, WorkRecord,
    WorkStatus, WorkType,
};
use pickle_types::error::TransactionError;
use pickle_types::keys::{work_record_key, WORK_RECORD_PREFIX};

/// Upper bound on a declared confidence.
const MAX_CONFIDENCE: u32 = 100;

pub(super) fn submit_work(
    counters: &AggregateCounters,
    state: &mut dyn StateAccess,
    ctx: &mut TxContext<'_>,
    params: SubmitWorkParams,
) -> Result<String, TransactionError> {
    let work_type: WorkType = params.work_type.parse()?;
    let record = WorkRecord::new(params.work_id, work_type, params.data);
    submit_record(counters, state, ctx, record)
}

/// Stores `record` as a fresh submission. Only the ID (when empty), the
/// submission height and the status are overwritten; every other field is
/// kept as given.
pub(super) fn submit_record(
    counters: &AggregateCounters,
    state: &mut dyn StateAccess,
    ctx: &mut TxContext<'_>,
    mut record: WorkRecord,
) -> Result<String, TransactionError> {
    if record.data.is_empty() {
        return Err(TransactionError::Validation(
            "work data cannot be empty".into(),
        ));
    }
    let max_data_size = load_params(state)?.max_data_size;
    if record.data.len() as u64 > max_data_size {
        return Err(TransactionError::Validation(format!(
            "work data exceeds maximum size: {} > {}",
            record.data.len(),
            max_data_size
        )));
    }

    let height = ctx.block_height;
    if record.id.is_empty() {
        record.id = generate_work_id(height, &record.data);
    }
    record.submitted_at = height;
    record.status = WorkStatus::Pending;
    counters.increment(state, Counter::Submitted)?;
    store_typed(state, &work_record_key(&record.id), &record)?;

    log::info!(
        "work submitted: id={} type={} height={}",
        record.id,
        record.work_type,
        height
    );
    ctx.events.emit(WorkQueueEvent::WorkSubmitted {
        id: record.id.clone(),
        work_type: record.work_type,
        submitted_at: height,
    });
    Ok(record.id)
}

pub(super) fn validate_work(
    counters: &AggregateCounters,
    state: &mut dyn StateAccess,
    ctx: &mut TxContext<'_>,
    params: ValidateWorkParams,
) -> Result<(), TransactionError> {
    let mut record = get_work(state, &params.work_id)?;
    if params.confidence > MAX_CONFIDENCE {
        return Err(TransactionError::InvalidArgument(format!(
            "confidence must be between 0 and {MAX_CONFIDENCE}, got {}",
            params.confidence
        )));
    }

    let height = ctx.block_height;
    record.validator = Some(params.validator.clone());
    record.validated_at = Some(height);
    record.confidence = params.confidence;
    record.proof_or_reason = params.proof;
    record.status = if params.valid {
        WorkStatus::Validated
    } else {
        WorkStatus::Rejected
    };

    let counter = if params.valid {
        Counter::Validated
    } else {
        Counter::Rejected
    };
    counters.increment(state, counter)?;
    record_decision(
        state,
        &params.validator,
        record.work_type,
        Outcome::Judged {
            valid: params.valid,
            confidence: params.confidence,
        },
        height,
    )?;
    store_typed(state, &work_record_key(&record.id), &record)?;

    log::info!(
        "work validated: id={} validator={} status={} confidence={} height={}",
        record.id,
        params.validator,
        record.status,
        record.confidence,
        height
    );
    ctx.events.emit(WorkQueueEvent::WorkValidated {
        id: record.id,
        validator: params.validator,
        status: record.status,
        confidence: record.confidence,
    });
    Ok(())
}

pub(super) fn reject_work(
    counters: &AggregateCounters,
    state: &mut dyn StateAccess,
    ctx: &mut TxContext<'_>,
    params: RejectWorkParams,
) -> Result<(), TransactionError> {
    let mut record = get_work(state, &params.work_id)?;

    let height = ctx.block_height;
    record.validator = Some(params.validator.clone());
    record.validated_at = Some(height);
    record.status = WorkStatus::Rejected;
    record.proof_or_reason = params.reason.clone();

    counters.increment(state, Counter::Rejected)?;
    record_decision(
        state,
        &params.validator,
        record.work_type,
        Outcome::Rejected,
        height,
    )?;
    store_typed(state, &work_record_key(&record.id), &record)?;

    log::info!(
        "work rejected: id={} validator={} height={}",
        record.id,
        params.validator,
        height
    );
    ctx.events.emit(WorkQueueEvent::WorkRejected {
        id: record.id,
        validator: params.validator,
        reason: params.reason,
    });
    Ok(())
}

pub(super) fn get_work(state: &dyn StateAccess, work_id: &str) -> Result<WorkRecord, TransactionError> {
    load_typed(state, &work_record_key(work_id))?
        .ok_or_else(|| TransactionError::NotFound(format!("work not found: {work_id}")))
}

/// Every record, in raw key order.
pub(super) fn all_work(state: &dyn StateAccess) -> Result<Vec<WorkRecord>, TransactionError> {
    scan_typed(state, WORK_RECORD_PREFIX)
}

/// Pending records in raw key order. Keys compare bytewise, so `"10-.."`
/// sorts before `"9-.."`.
pub(super) fn pending_work(state: &dyn StateAccess) -> Result<Vec<WorkRecord>, TransactionError> {
    Ok(all_work(state)?
        .into_iter()
        .filter(|r| r.status == WorkStatus::Pending)
        .collect())
}
