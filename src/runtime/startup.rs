use tracing::info;

use crate::audio::RodioLoader;
use crate::config;
use crate::library::Library;
use crate::queue::PlayerQueue;
use crate::session::Session;

/// Queue the whole library in catalog order with nothing active yet.
pub fn build_session(
    library: Library,
    settings: &config::Settings,
) -> Session<RodioLoader, PlayerQueue> {
    let queue = PlayerQueue::new(library.ids());
    info!(
        tracks = library.len(),
        volume = settings.session.initial_volume,
        repeat = settings.session.repeat,
        "session ready"
    );
    Session::new(RodioLoader::new(), queue, library, settings.session.clone())
}
