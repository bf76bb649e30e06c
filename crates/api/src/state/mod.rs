// Path: crates/api/src/state/mod.rs
//! The ordered key-value contract the engine reads and writes through.

use pickle_types::error::StateError;
use std::sync::Arc;

/// A single key-value row yielded by a prefix scan.
pub type StateScanItem = Result<(Arc<[u8]>, Arc<[u8]>), StateError>;

/// An iterator over the rows under a prefix, in ascending raw key order.
pub type StateScanIter<'a> = Box<dyn Iterator<Item = StateScanItem> + 'a>;

/// A dyn-safe view of an ordered key-value store.
///
/// Implementations must yield prefix scans in ascending byte order of the
/// full key and must reflect their own uncommitted writes.
pub trait StateAccess {
    /// Gets a value by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError>;
    /// Inserts a key-value pair, replacing any previous value.
    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError>;
    /// Deletes a key-value pair.
    fn delete(&mut self, key: &[u8]) -> Result<(), StateError>;
    /// Scans for all key-value pairs starting with the given prefix.
    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError>;
}
