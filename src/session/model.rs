//! Session state record and the snapshot handed to observers.

use crate::library::{Track, TrackId};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Transport {
    #[default]
    Paused,
    Playing,
}

/// Observable session state.
///
/// `duration` stays 0 until the bound resource reports it; once known,
/// `position <= duration`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSession {
    /// Track the session was last asked to bind, loaded or not.
    pub track: Option<TrackId>,
    pub transport: Transport,
    pub repeating: bool,
    pub volume: f32,
    pub position: f64,
    pub duration: f64,
    /// Why the last bind failed, for display.
    pub last_error: Option<String>,
}

impl PlaybackSession {
    pub fn new(volume: f32, repeating: bool) -> Self {
        Self {
            track: None,
            transport: Transport::Paused,
            repeating,
            volume,
            position: 0.0,
            duration: 0.0,
            last_error: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.transport == Transport::Playing
    }

    /// Seconds left; may dip slightly below zero near the end.
    pub fn remaining(&self) -> f64 {
        self.duration - self.position
    }

    pub(super) fn reset_timeline(&mut self) {
        self.transport = Transport::Paused;
        self.position = 0.0;
        self.duration = 0.0;
    }
}

/// What observers receive on every state change.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub state: PlaybackSession,
    pub track: Option<Track>,
    /// Whether a resource handle is currently bound.
    pub loaded: bool,
    pub muted: bool,
}
