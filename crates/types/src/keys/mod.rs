// Path: crates/types/src/keys/mod.rs
//! Defines constants for well-known state keys.
//!
//! Work records and validator statistics live under single-byte prefixes so a
//! prefix scan over one never touches the other. The fixed keys below are
//! plain ASCII and therefore never start with either prefix byte.

/// The state key prefix for work records, keyed by work ID.
pub const WORK_RECORD_PREFIX: &[u8] = &[0x01];
/// The state key prefix for validator statistics, keyed by validator address.
pub const VALIDATOR_STATS_PREFIX: &[u8] = &[0x02];

/// The state key for the big-endian total of submitted work.
pub const TOTAL_SUBMITTED_KEY: &[u8] = b"total_submitted";
/// The state key for the big-endian total of validated work.
pub const TOTAL_VALIDATED_KEY: &[u8] = b"total_validated";
/// The state key for the big-endian total of rejected work.
pub const TOTAL_REJECTED_KEY: &[u8] = b"total_rejected";

/// The state key for the work queue parameters installed at genesis.
pub const PARAMS_KEY: &[u8] = b"params";

/// Returns the state key for a work record.
pub fn work_record_key(work_id: &str) -> Vec<u8> {
    [WORK_RECORD_PREFIX, work_id.as_bytes()].concat()
}

/// Returns the state key for a validator's statistics.
pub fn validator_stats_key(address: &str) -> Vec<u8> {
    [VALIDATOR_STATS_PREFIX, address.as_bytes()].concat()
}
