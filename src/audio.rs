//! Audio resource seam.
//!
//! A [`ResourceLoader`] turns a locator into a playable [`ResourceHandle`].
//! Handles report lifecycle events (ready, start, pause, end) through the
//! [`EventSink`] they were bound with, so the session can tell events from a
//! replaced handle apart from current ones. The `rodio` backend lives in
//! `sink`.

mod resource;
mod sink;
mod types;

pub use resource::{LoadError, ResourceHandle, ResourceLoader};
pub use sink::RodioLoader;
pub use types::*;

#[cfg(test)]
mod tests;
