//! Track catalog: the tracks a queue can refer to, and a directory scanner
//! that builds one from audio files on disk.

mod model;
mod scan;

pub use model::*;
pub use scan::scan;
