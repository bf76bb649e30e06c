// Path: crates/api/src/events/mod.rs
//! Sinks for the auditable notifications emitted by the engine.

use pickle_types::app::WorkQueueEvent;
use tokio::sync::broadcast;

/// Receives events emitted by successful mutating calls.
///
/// The engine emits as the final step of a call, after every state write has
/// succeeded, so a sink never observes an event for a failed call.
pub trait EventSink {
    /// Records one event.
    fn emit(&mut self, event: WorkQueueEvent);
}

impl EventSink for Vec<WorkQueueEvent> {
    fn emit(&mut self, event: WorkQueueEvent) {
        self.push(event);
    }
}

/// Fans events out to subscribers. Events emitted with no live receiver are
/// dropped.
impl EventSink for broadcast::Sender<WorkQueueEvent> {
    fn emit(&mut self, event: WorkQueueEvent) {
        if self.send(event).is_err() {
            log::trace!("work queue event dropped: no subscribers");
        }
    }
}
