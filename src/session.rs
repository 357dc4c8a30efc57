//! Playback session: the controller between the queue, the track library and
//! the audio resource bound to the active track.
//!
//! All state changes happen on the caller's thread. Resource lifecycle events
//! arrive through an inbox that [`Session::pump`] drains, so each event runs
//! to completion before the next one is looked at.

mod controller;
mod model;
mod poller;
mod volume;

pub use controller::{Session, SessionError};
pub use model::{PlaybackSession, Snapshot, Transport};
pub use poller::PositionPoller;
pub use volume::{DEFAULT_UNMUTE_LEVEL, VolumeControl};
