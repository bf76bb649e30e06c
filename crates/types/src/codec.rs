// Path: crates/types/src/codec.rs
//! The canonical binary codec for values written to state.
//!
//! Everything persisted by the work queue (records, validator statistics,
//! parameters) goes through these two functions so that independent
//! re-executions of the same step produce byte-identical state.

use parity_scale_codec::{Decode, Encode};

/// Encodes a value using the canonical SCALE encoding.
pub fn to_bytes_canonical<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>, String> {
    Ok(value.encode())
}

/// Decodes a value from its canonical SCALE encoding.
///
/// The whole input must be consumed; trailing bytes are rejected so that two
/// different byte strings can never decode to the same value.
pub fn from_bytes_canonical<T: Decode>(bytes: &[u8]) -> Result<T, String> {
    let mut input = bytes;
    let value = T::decode(&mut input).map_err(|e| e.to_string())?;
    if !input.is_empty() {
        return Err(format!(
            "{} trailing bytes after canonical value",
            input.len()
        ));
    }
    Ok(value)
}
