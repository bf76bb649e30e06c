// Path: crates/api/src/transaction/mod.rs
//! Per-call execution context.

pub mod context;
