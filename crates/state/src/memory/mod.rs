// Path: crates/state/src/memory/mod.rs
//! An in-memory `StateAccess` implementation over an ordered map.

use pickle_api::state::{StateAccess, StateScanIter};
use pickle_types::error::StateError;
use std::collections::BTreeMap;
use std::sync::Arc;

/// An ordered in-memory key-value store.
///
/// Cloning yields an independent snapshot, which hosts can use to roll back
/// a failed call by keeping the pre-call clone.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryStore {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateAccess for MemoryStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        Ok(self.data.get(key).cloned())
    }

    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
        self.data.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StateError> {
        self.data.remove(key);
        Ok(())
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError> {
        let prefix = prefix.to_vec();
        let iter = self
            .data
            .range(prefix.clone()..)
            .take_while(move |(key, _)| key.starts_with(&prefix))
            .map(|(key, value)| Ok((Arc::from(key.as_slice()), Arc::from(value.as_slice()))));
        Ok(Box::new(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(store: &MemoryStore, prefix: &[u8]) -> Vec<Vec<u8>> {
        store
            .prefix_scan(prefix)
            .unwrap()
            .map(|row| row.unwrap().0.to_vec())
            .collect()
    }

    #[test]
    fn scan_is_bounded_and_ordered() {
        let mut store = MemoryStore::new();
        store.insert(b"\x0110-a", b"x").unwrap();
        store.insert(b"\x019-b", b"x").unwrap();
        store.insert(b"\x02val", b"x").unwrap();
        store.insert(b"\x00zzz", b"x").unwrap();

        assert_eq!(
            keys(&store, &[0x01]),
            vec![b"\x0110-a".to_vec(), b"\x019-b".to_vec()]
        );
        assert_eq!(keys(&store, &[0x02]), vec![b"\x02val".to_vec()]);
        assert!(keys(&store, &[0x03]).is_empty());
    }

    #[test]
    fn delete_removes_only_the_given_key() {
        let mut store = MemoryStore::new();
        store.insert(b"a", b"1").unwrap();
        store.insert(b"b", b"2").unwrap();
        store.delete(b"a").unwrap();
        assert_eq!(store.get(b"a").unwrap(), None);
        assert_eq!(store.get(b"b").unwrap(), Some(b"2".to_vec()));
    }
}
