use thiserror::Error;

use super::types::BindOptions;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {locator}: {source}")]
    Open {
        locator: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode {locator}: {reason}")]
    Decode { locator: String, reason: String },
    #[error("no audio output available: {0}")]
    Output(String),
}

/// A bound, playable audio resource.
///
/// Transport calls are requests: state changes are reported back through the
/// handle's event sink, not by the return of the call.
pub trait ResourceHandle {
    /// Start or resume. After the natural end this restarts from the beginning.
    fn play(&mut self);
    fn pause(&mut self);
    /// Release the underlying decoder/output. The handle is inert afterwards.
    fn unload(&mut self);
    /// Current offset in seconds.
    fn seek_position(&self) -> f64;
    fn seek(&mut self, to_secs: f64);
    fn is_playing(&self) -> bool;
    fn set_volume(&mut self, volume: f32);
    /// Called from the session loop so backends without native callbacks can
    /// notice completion.
    fn tick(&mut self) {}
}

/// Binds locators to handles.
pub trait ResourceLoader {
    type Handle: ResourceHandle;

    /// Load `locator`. Implementations emit `Ready` once loading completes.
    fn load(&mut self, locator: &str, options: BindOptions) -> Result<Self::Handle, LoadError>;
}
