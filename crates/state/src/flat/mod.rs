// Path: crates/state/src/flat/mod.rs

//! A flat, persistent store backed by Redb.
//!
//! Writes are staged in an in-memory cache and only reach the database on
//! `commit`. Reads and scans see the staged writes merged over the committed
//! contents, so a host can run one engine call, then either commit it or
//! `discard` it as a unit.

use pickle_api::state::{StateAccess, StateScanIter};
use pickle_types::error::StateError;
use redb::{Database, ReadableTable, TableDefinition};
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::path::Path;
use std::sync::Arc;

const STATE_TABLE: TableDefinition<&[u8], &[u8]> = TableDefinition::new("state");

fn backend<E: ToString>(e: E) -> StateError {
    StateError::Backend(e.to_string())
}

/// A non-Merkle state store backed by Redb.
pub struct RedbStore {
    db: Database,
    /// In-memory cache of pending writes (Key -> Value).
    /// None indicates deletion.
    cache: BTreeMap<Vec<u8>, Option<Vec<u8>>>,
}

impl Debug for RedbStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbStore")
            .field("cache_size", &self.cache.len())
            .finish()
    }
}

impl RedbStore {
    /// Opens the database at `path`, creating it and its table if needed.
    pub fn open(path: &Path) -> Result<Self, StateError> {
        let db = Database::create(path).map_err(backend)?;

        // Ensure table exists
        let tx = db.begin_write().map_err(backend)?;
        {
            let _ = tx.open_table(STATE_TABLE).map_err(backend)?;
        }
        tx.commit().map_err(backend)?;

        log::debug!("opened redb store at {}", path.display());
        Ok(Self {
            db,
            cache: BTreeMap::new(),
        })
    }

    /// Number of staged, uncommitted writes.
    pub fn pending_writes(&self) -> usize {
        self.cache.len()
    }

    /// Durably applies every staged write in one database transaction.
    pub fn commit(&mut self) -> Result<(), StateError> {
        if self.cache.is_empty() {
            return Ok(());
        }
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| StateError::WriteError(e.to_string()))?;
        {
            let mut table = write_txn
                .open_table(STATE_TABLE)
                .map_err(|e| StateError::WriteError(e.to_string()))?;
            for (k, v_opt) in &self.cache {
                if let Some(v) = v_opt {
                    table
                        .insert(k.as_slice(), v.as_slice())
                        .map_err(|e| StateError::WriteError(e.to_string()))?;
                } else {
                    table
                        .remove(k.as_slice())
                        .map_err(|e| StateError::WriteError(e.to_string()))?;
                }
            }
        }
        write_txn
            .commit()
            .map_err(|e| StateError::WriteError(e.to_string()))?;

        log::debug!("committed {} staged writes", self.cache.len());
        self.cache.clear();
        Ok(())
    }

    /// Drops every staged write, restoring the last committed view.
    pub fn discard(&mut self) {
        if !self.cache.is_empty() {
            log::debug!("discarding {} staged writes", self.cache.len());
        }
        self.cache.clear();
    }

    fn committed_range(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StateError> {
        let read_txn = self.db.begin_read().map_err(backend)?;
        let table = read_txn.open_table(STATE_TABLE).map_err(backend)?;

        let mut rows = Vec::new();
        for row in table.range(prefix..).map_err(backend)? {
            let (k, v) = row.map_err(backend)?;
            if !k.value().starts_with(prefix) {
                break;
            }
            rows.push((k.value().to_vec(), v.value().to_vec()));
        }
        Ok(rows)
    }
}

impl StateAccess for RedbStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        // 1. Check cache first
        if let Some(val_opt) = self.cache.get(key) {
            return Ok(val_opt.clone());
        }

        // 2. Check DB
        let read_txn = self.db.begin_read().map_err(backend)?;
        let table = read_txn.open_table(STATE_TABLE).map_err(backend)?;
        let result = table.get(key).map_err(backend)?;
        Ok(result.map(|v| v.value().to_vec()))
    }

    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
        self.cache.insert(key.to_vec(), Some(value.to_vec()));
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StateError> {
        self.cache.insert(key.to_vec(), None);
        Ok(())
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError> {
        let mut merged: BTreeMap<Vec<u8>, Option<Vec<u8>>> = self
            .committed_range(prefix)?
            .into_iter()
            .map(|(k, v)| (k, Some(v)))
            .collect();
        for (k, v) in self.cache.range(prefix.to_vec()..) {
            if !k.starts_with(prefix) {
                break;
            }
            merged.insert(k.clone(), v.clone());
        }

        // Filter out deletions (None)
        let rows: Vec<_> = merged
            .into_iter()
            .filter_map(|(k, v)| v.map(|val| Ok((Arc::from(k), Arc::from(val)))))
            .collect();

        Ok(Box::new(rows.into_iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn scan_keys(store: &RedbStore, prefix: &[u8]) -> Vec<Vec<u8>> {
        store
            .prefix_scan(prefix)
            .unwrap()
            .map(|row| row.unwrap().0.to_vec())
            .collect()
    }

    #[test]
    fn staged_writes_are_visible_before_commit() {
        let dir = tempdir().unwrap();
        let mut store = RedbStore::open(&dir.path().join("state.redb")).unwrap();
        store.insert(b"\x01a", b"1").unwrap();
        assert_eq!(store.get(b"\x01a").unwrap(), Some(b"1".to_vec()));
        assert_eq!(scan_keys(&store, &[0x01]), vec![b"\x01a".to_vec()]);
        assert_eq!(store.pending_writes(), 1);
    }

    #[test]
    fn commit_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.redb");
        {
            let mut store = RedbStore::open(&path).unwrap();
            store.insert(b"\x01w1", b"rec").unwrap();
            store.insert(b"total_submitted", &1u64.to_be_bytes()).unwrap();
            store.commit().unwrap();
            assert_eq!(store.pending_writes(), 0);
        }
        let store = RedbStore::open(&path).unwrap();
        assert_eq!(store.get(b"\x01w1").unwrap(), Some(b"rec".to_vec()));
        assert_eq!(
            store.get(b"total_submitted").unwrap(),
            Some(1u64.to_be_bytes().to_vec())
        );
    }

    #[test]
    fn discard_restores_committed_view() {
        let dir = tempdir().unwrap();
        let mut store = RedbStore::open(&dir.path().join("state.redb")).unwrap();
        store.insert(b"\x01keep", b"1").unwrap();
        store.commit().unwrap();

        store.insert(b"\x01drop", b"2").unwrap();
        store.delete(b"\x01keep").unwrap();
        assert_eq!(scan_keys(&store, &[0x01]), vec![b"\x01drop".to_vec()]);

        store.discard();
        assert_eq!(scan_keys(&store, &[0x01]), vec![b"\x01keep".to_vec()]);
        assert_eq!(store.get(b"\x01drop").unwrap(), None);
    }

    #[test]
    fn scan_merges_cache_over_db_in_key_order() {
        let dir = tempdir().unwrap();
        let mut store = RedbStore::open(&dir.path().join("state.redb")).unwrap();
        store.insert(b"\x01b", b"db").unwrap();
        store.insert(b"\x01d", b"db").unwrap();
        store.insert(b"\x02x", b"other").unwrap();
        store.commit().unwrap();

        store.insert(b"\x01a", b"cache").unwrap();
        store.insert(b"\x01c", b"cache").unwrap();
        store.delete(b"\x01d").unwrap();

        assert_eq!(
            scan_keys(&store, &[0x01]),
            vec![b"\x01a".to_vec(), b"\x01b".to_vec(), b"\x01c".to_vec()]
        );
        assert_eq!(scan_keys(&store, &[0x02]), vec![b"\x02x".to_vec()]);
    }
}
