// Path: crates/node/src/lib.rs
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
//! Home-directory management and single-step execution for `pickled`.

pub mod home;
pub mod runner;
