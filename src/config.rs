//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema used to drive the playback
//! session and helpers to load configuration from disk.

mod load;
mod schema;

pub use load::default_state_dir;
pub use schema::*;
