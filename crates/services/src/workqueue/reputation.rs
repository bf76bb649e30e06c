// Path: crates/services/src/workqueue/reputation.rs

use super::support::{load_typed, store_typed};
use pickle_api::state::StateAccess;
use pickle_types::app::{ValidatorStats, WorkType};
use pickle_types::error::TransactionError;
use pickle_types::keys::validator_stats_key;

/// What a single decision contributes to a validator's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A judgement with a declared confidence. Counts as validated when
    /// `valid`, otherwise as rejected, and always moves the running average.
    Judged {
        /// The verdict.
        valid: bool,
        /// The declared confidence, already range-checked.
        confidence: u32,
    },
    /// An explicit rejection. Counts as rejected; the average is untouched.
    Rejected,
}

/// Folds one decision into `validator`'s statistics, creating a zeroed entry
/// on first sight, and persists the result.
///
/// The running average divides by the post-increment decision count even
/// when earlier decisions were confidence-less rejections.
pub(super) fn record_decision(
    state: &mut dyn StateAccess,
    validator: &str,
    work_type: WorkType,
    outcome: Outcome,
    height: u64,
) -> Result<ValidatorStats, TransactionError> {
    let key = validator_stats_key(validator);
    let mut stats =
        load_typed::<ValidatorStats>(state, &key)?.unwrap_or_else(|| ValidatorStats::new(validator));

    match outcome {
        Outcome::Judged { valid: true, .. } => stats.total_validated += 1,
        Outcome::Judged { valid: false, .. } | Outcome::Rejected => stats.total_rejected += 1,
    }
    stats.specializations.increment(work_type);

    if let Outcome::Judged { confidence, .. } = outcome {
        stats.average_confidence = running_average(
            stats.average_confidence,
            confidence,
            stats.total_decisions(),
        );
    }
    stats.last_active_at = height;

    store_typed(state, &key, &stats)?;
    Ok(stats)
}

/// `(old * (n - 1) + sample) / n`, truncating. `n` counts the new sample.
fn running_average(old: u32, sample: u32, n: u64) -> u32 {
    if n == 0 {
        return sample;
    }
    let sum = u128::from(old) * u128::from(n - 1) + u128::from(sample);
    u32::try_from(sum / u128::from(n)).unwrap_or(u32::MAX)
}

/// Reads a validator's statistics, `NotFound` if it has never decided.
pub(super) fn get_validator_stats(
    state: &dyn StateAccess,
    address: &str,
) -> Result<ValidatorStats, TransactionError> {
    load_typed(state, &validator_stats_key(address))?.ok_or_else(|| {
        TransactionError::NotFound(format!("validator stats not found: {address}"))
    })
}
