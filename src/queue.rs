//! The play queue: an ordered list of track ids plus the active one.
//!
//! The queue itself lives outside the playback session; the session reads it
//! through [`QueueProvider`] and asks it to change the active id. Navigation
//! wraps around at both ends.

mod navigator;
mod store;

pub use navigator::{next_track, previous_track};
pub use store::{PlayerQueue, QueueProvider};

#[cfg(test)]
mod tests;
