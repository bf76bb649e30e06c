// Path: crates/node/src/runner.rs
//! Runs one engine call against the persistent store as a single step.

use anyhow::{anyhow, Context, Result};
use pickle_api::services::BlockchainService;
use pickle_api::state::StateAccess;
use pickle_api::transaction::context::TxContext;
use pickle_services::workqueue::WorkQueueService;
use pickle_state::RedbStore;
use pickle_types::app::{GenesisState, WorkQueueEvent};
use pickle_types::codec;
use pickle_types::error::TransactionError;
use parity_scale_codec::Decode;

/// Owns the store and the service for the lifetime of one CLI invocation.
pub struct Runner {
    service: WorkQueueService,
    store: RedbStore,
}

impl Runner {
    /// Wraps an opened store.
    pub fn new(store: RedbStore) -> Self {
        Self {
            service: WorkQueueService::default(),
            store,
        }
    }

    /// Runs `f` at `height`. Staged writes are committed if it succeeds and
    /// discarded if it fails; events are returned only on success.
    pub fn execute<T, F>(&mut self, height: u64, f: F) -> Result<(T, Vec<WorkQueueEvent>)>
    where
        F: FnOnce(
            &WorkQueueService,
            &mut dyn StateAccess,
            &mut TxContext<'_>,
        ) -> Result<T, TransactionError>,
    {
        let mut events: Vec<WorkQueueEvent> = Vec::new();
        let result = {
            let mut ctx = TxContext::new(height, &mut events);
            f(&self.service, &mut self.store, &mut ctx)
        };
        match result {
            Ok(value) => {
                let writes = self.store.pending_writes();
                self.store.commit().context("failed to commit state")?;
                log::info!(
                    "{}: committed {writes} writes at height {height}",
                    self.service.id()
                );
                Ok((value, events))
            }
            Err(e) => {
                self.store.discard();
                if e.is_fatal() {
                    log::error!("store integrity violated at height {height}: {e}");
                    return Err(anyhow!(e).context("store integrity violated; halting"));
                }
                Err(e.into())
            }
        }
    }

    /// Dispatches a canonically encoded service call.
    pub fn call(
        &mut self,
        height: u64,
        method: &str,
        params: &[u8],
    ) -> Result<(Vec<u8>, Vec<WorkQueueEvent>)> {
        self.execute(height, |service, state, ctx| {
            service.handle_service_call(state, method, params, ctx)
        })
        .with_context(|| format!("{}::{method} failed at height {height}", self.service.id()))
    }

    /// Runs a query and decodes its response.
    pub fn query<T: Decode>(&self, method: &str, params: &[u8]) -> Result<T> {
        let bytes = self
            .service
            .handle_query(&self.store, method, params)
            .with_context(|| format!("query {method} failed"))?;
        codec::from_bytes_canonical(&bytes).map_err(|e| anyhow!("malformed {method} response: {e}"))
    }

    /// Seeds the store from a snapshot at `height`.
    pub fn import_genesis(
        &mut self,
        height: u64,
        genesis: GenesisState,
    ) -> Result<Vec<WorkQueueEvent>> {
        let ((), events) = self
            .execute(height, |service, state, ctx| {
                service.init_genesis(state, ctx, genesis)
            })
            .context("genesis import failed")?;
        Ok(events)
    }

    /// Snapshots the committed store.
    pub fn export_genesis(&self) -> Result<GenesisState> {
        self.service
            .export_genesis(&self.store)
            .context("genesis export failed")
    }
}
