// Path: crates/api/src/transaction/context.rs
//! Defines the stable context for a single engine call.

use crate::events::EventSink;

/// Context handed to every mutating service call.
pub struct TxContext<'a> {
    /// The current height being processed. Supplied by the host and assumed
    /// monotonically non-decreasing across calls.
    pub block_height: u64,
    /// Receives the events emitted by the call.
    pub events: &'a mut dyn EventSink,
}

impl<'a> TxContext<'a> {
    /// Builds a context for the given height and sink.
    pub fn new(block_height: u64, events: &'a mut dyn EventSink) -> Self {
        Self {
            block_height,
            events,
        }
    }
}
