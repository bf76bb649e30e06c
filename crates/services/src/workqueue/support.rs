// Path: crates/services/src/workqueue/support.rs

use pickle_api::state::StateAccess;
use pickle_types::codec;
use pickle_types::error::{StateError, TransactionError};
use pickle_types::keys::PARAMS_KEY;
use pickle_types::service_configs::WorkQueueParams;
use parity_scale_codec::{Decode, Encode};

/// Loads and decodes the value under `key`. Undecodable bytes are reported as
/// corruption, never as a bad request.
pub(super) fn load_typed<T: Decode>(
    state: &dyn StateAccess,
    key: &[u8],
) -> Result<Option<T>, TransactionError> {
    let Some(raw) = state.get(key)? else {
        return Ok(None);
    };
    let value = codec::from_bytes_canonical(&raw).map_err(|e| StateError::corrupted(key, e))?;
    Ok(Some(value))
}

pub(super) fn store_typed<T: Encode>(
    state: &mut dyn StateAccess,
    key: &[u8],
    value: &T,
) -> Result<(), TransactionError> {
    let bytes = codec::to_bytes_canonical(value).map_err(TransactionError::Serialization)?;
    state.insert(key, &bytes)?;
    Ok(())
}

/// Decodes every value under `prefix`, in key order.
pub(super) fn scan_typed<T: Decode>(
    state: &dyn StateAccess,
    prefix: &[u8],
) -> Result<Vec<T>, TransactionError> {
    let mut out = Vec::new();
    for row in state.prefix_scan(prefix)? {
        let (key, value) = row?;
        let decoded =
            codec::from_bytes_canonical(&value).map_err(|e| StateError::corrupted(&key, e))?;
        out.push(decoded);
    }
    Ok(out)
}

/// The installed parameters, or the defaults if genesis never wrote any.
pub(super) fn load_params(state: &dyn StateAccess) -> Result<WorkQueueParams, TransactionError> {
    Ok(load_typed(state, PARAMS_KEY)?.unwrap_or_default())
}

pub(super) fn decode_params<T: Decode>(params: &[u8]) -> Result<T, TransactionError> {
    codec::from_bytes_canonical(params).map_err(TransactionError::Deserialization)
}

pub(super) fn encode_response<T: Encode>(value: &T) -> Result<Vec<u8>, TransactionError> {
    codec::to_bytes_canonical(value).map_err(TransactionError::Serialization)
}
