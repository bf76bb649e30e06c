// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # Pickle Types
//!
//! The foundational library for the Pickle work queue, containing the core
//! data structures, error types, state keys, and configuration objects.
//!
//! ## Architectural Role
//!
//! As the base crate, `pickle-types` has minimal dependencies and is a
//! dependency of every other crate in the workspace. Keeping the shared
//! definitions here (`WorkRecord`, `ValidatorStats`, `GenesisState`, the
//! event and message types) prevents circular dependencies between the
//! engine, the store backends, and the operator binary.

/// Work records, validator statistics, events, messages, and genesis state.
pub mod app;
/// The canonical, deterministic binary codec for consensus-critical state.
pub mod codec;
/// Node-level configuration loaded from TOML.
pub mod config;
/// A unified set of the error types used across the workspace.
pub mod error;
/// Constants for well-known state keys and key prefixes.
pub mod keys;
/// Parameters for the work queue service.
pub mod service_configs;
