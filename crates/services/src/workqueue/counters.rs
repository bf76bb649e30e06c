// Path: crates/services/src/workqueue/counters.rs

use pickle_api::state::StateAccess;
use pickle_types::app::Totals;
use pickle_types::error::{StateError, TransactionError};
use pickle_types::keys::{TOTAL_REJECTED_KEY, TOTAL_SUBMITTED_KEY, TOTAL_VALIDATED_KEY};

/// Selects one of the three aggregate totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    /// Accepted submissions.
    Submitted,
    /// Decisions resulting in `Validated`.
    Validated,
    /// Decisions resulting in `Rejected`.
    Rejected,
}

impl Counter {
    /// The fixed state key backing this counter.
    pub fn key(self) -> &'static [u8] {
        match self {
            Counter::Submitted => TOTAL_SUBMITTED_KEY,
            Counter::Validated => TOTAL_VALIDATED_KEY,
            Counter::Rejected => TOTAL_REJECTED_KEY,
        }
    }
}

/// Three independent monotonic totals, each stored as a big-endian `u64`
/// under its counter's fixed key. Absent keys read as zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AggregateCounters;

impl AggregateCounters {
    /// Reads the current value of `counter`.
    pub fn get(&self, state: &dyn StateAccess, counter: Counter) -> Result<u64, TransactionError> {
        let key = counter.key();
        let Some(raw) = state.get(key)? else {
            return Ok(0);
        };
        let bytes: [u8; 8] = raw.as_slice().try_into().map_err(|_| {
            StateError::corrupted(key, format!("expected 8-byte counter, found {}", raw.len()))
        })?;
        Ok(u64::from_be_bytes(bytes))
    }

    /// Adds one to `counter` and returns the new value.
    pub fn increment(
        &self,
        state: &mut dyn StateAccess,
        counter: Counter,
    ) -> Result<u64, TransactionError> {
        let next = self.get(state, counter)?.saturating_add(1);
        state.insert(counter.key(), &next.to_be_bytes())?;
        Ok(next)
    }

    /// Reads all three totals.
    pub fn totals(&self, state: &dyn StateAccess) -> Result<Totals, TransactionError> {
        Ok(Totals {
            submitted: self.get(state, Counter::Submitted)?,
            validated: self.get(state, Counter::Validated)?,
            rejected: self.get(state, Counter::Rejected)?,
        })
    }
}
