use std::error::Error;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{LoggingSettings, default_state_dir};

/// Resolve where log lines go: `logging.file`, else the XDG state directory.
pub fn log_path(settings: &LoggingSettings) -> Option<PathBuf> {
    settings
        .file
        .clone()
        .or_else(|| default_state_dir().map(|d| d.join("encore.log")))
}

/// Install the global subscriber. The terminal belongs to the TUI, so logs
/// always go to a file. `RUST_LOG` overrides `logging.level`.
pub fn init(settings: &LoggingSettings) -> Result<PathBuf, Box<dyn Error>> {
    let path = log_path(settings).ok_or("no log location: set logging.file or HOME")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| e as Box<dyn Error>)?;

    Ok(path)
}
