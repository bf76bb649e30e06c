// Path: crates/api/src/services/mod.rs
//! The dispatch trait for services hosted over a `StateAccess` store.

use crate::state::StateAccess;
use crate::transaction::context::TxContext;
use pickle_types::error::TransactionError;

/// The base trait for a service that owns a slice of state.
///
/// Calls and queries are addressed by versioned method names such as
/// `submit_work@v1`; parameters and responses are canonically encoded.
pub trait BlockchainService: Send + Sync {
    /// A unique, static string identifier for the service.
    fn id(&self) -> &'static str;

    /// Executes a mutating call. On error, the caller must discard any
    /// writes the call made.
    fn handle_service_call(
        &self,
        state: &mut dyn StateAccess,
        method: &str,
        params: &[u8],
        ctx: &mut TxContext<'_>,
    ) -> Result<Vec<u8>, TransactionError>;

    /// Answers a read-only query.
    fn handle_query(
        &self,
        state: &dyn StateAccess,
        method: &str,
        params: &[u8],
    ) -> Result<Vec<u8>, TransactionError>;
}
