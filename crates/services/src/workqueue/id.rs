// Path: crates/services/src/workqueue/id.rs

use sha2::{Digest, Sha256};

/// Number of leading digest bytes kept in a generated ID.
const ID_DIGEST_BYTES: usize = 8;

/// Derives a record ID as `<height>-<hex of the first 8 bytes of sha256(data)>`.
///
/// Identical `(height, data)` pairs always yield the same ID. No uniqueness
/// check is made here or by the caller.
pub fn generate_work_id(height: u64, data: &[u8]) -> String {
    let digest = Sha256::digest(data);
    format!("{}-{}", height, hex::encode(&digest[..ID_DIGEST_BYTES]))
}
