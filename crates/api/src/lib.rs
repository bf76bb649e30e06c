// Path: crates/api/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented
    )
)]
//! # Pickle API
//!
//! Core traits and interfaces for the Pickle work queue. This crate defines
//! the stable contract between the engine and its host: the ordered
//! key-value store, the event sink, the per-call context, and the service
//! dispatch trait.

pub mod events;
pub mod services;
pub mod state;
pub mod transaction;

/// A curated set of the most commonly used traits and types.
pub mod prelude {
    pub use crate::events::EventSink;
    pub use crate::services::BlockchainService;
    pub use crate::state::{StateAccess, StateScanIter};
    pub use crate::transaction::context::TxContext;
}
