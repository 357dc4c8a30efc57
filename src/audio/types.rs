//! Audio-related small types: handle ids, lifecycle events and bind options.

use std::fmt;
use std::sync::mpsc::Sender;

/// Identifies one bound resource. Ids are never reused within a session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct HandleId(pub u64);

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ResourceEventKind {
    /// Loading finished; carries the total duration in seconds.
    Ready(f64),
    /// Playback started or resumed.
    Start,
    /// Playback paused by request.
    Pause,
    /// Playback reached the natural end. Never sent for a pause or unload.
    End,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ResourceEvent {
    pub handle: HandleId,
    pub kind: ResourceEventKind,
}

/// Sender side of a session's resource-event inbox, scoped to one handle.
#[derive(Debug, Clone)]
pub struct EventSink {
    handle: HandleId,
    tx: Sender<ResourceEvent>,
}

impl EventSink {
    pub fn new(handle: HandleId, tx: Sender<ResourceEvent>) -> Self {
        Self { handle, tx }
    }

    pub fn handle(&self) -> HandleId {
        self.handle
    }

    /// Queue an event for the session. A dropped session is not an error.
    pub fn emit(&self, kind: ResourceEventKind) {
        let _ = self.tx.send(ResourceEvent {
            handle: self.handle,
            kind,
        });
    }
}

/// Everything a loader needs to bind a locator.
#[derive(Debug, Clone)]
pub struct BindOptions {
    /// Initial gain in `[0, 1]`.
    pub volume: f32,
    /// Repeat flag at bind time. End-of-track handling reads the live flag,
    /// so loaders must not loop on their own because of it.
    pub looping: bool,
    pub format_hint: String,
    pub events: EventSink,
}
