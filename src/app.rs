//! Application module: exposes the cursor model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model`; playback state itself is owned by
//! the session.

mod model;

pub use model::*;
