// Path: crates/state/src/lib.rs
#![forbid(unsafe_code)]
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
//! # Pickle State
//!
//! Implementations of the `StateAccess` contract: an in-memory ordered map
//! for tests and embedding, and a persistent flat store backed by `redb`
//! that stages writes until an explicit commit.

pub mod flat;
pub mod memory;

pub use flat::RedbStore;
pub use memory::MemoryStore;
