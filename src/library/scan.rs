use std::path::Path;
use std::time::Duration;

use lofty::prelude::*;
use tracing::debug;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::{Library, Track, TrackId, make_display};

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn non_empty(v: Option<std::borrow::Cow<'_, str>>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Build a track from a file, reading tags when the file parses.
fn read_track(root: &Path, path: &Path) -> Track {
    let id = path
        .strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/");
    let default_title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();

    let mut track = Track::new(TrackId::new(id), default_title, path.to_string_lossy());
    let mut duration: Option<Duration> = None;

    match lofty::read_from_path(path) {
        Ok(tagged) => {
            duration = Some(tagged.properties().duration());

            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(title) = non_empty(tag.title()) {
                    track.title = title;
                }
                if let Some(artist) = non_empty(tag.artist()) {
                    track.author = artist;
                }
                track.genre = non_empty(tag.genre());
            }
        }
        Err(e) => debug!(path = %path.display(), error = %e, "no readable tags"),
    }

    track.duration = duration;
    track
}

/// Walk `dir` and collect audio files into a [`Library`] sorted by display name.
/// Locators are absolute, whatever form `dir` was given in.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Library {
    let mut tracks: Vec<Track> = Vec::new();

    let root = match dir.canonicalize() {
        Ok(root) => root,
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "cannot resolve library root");
            return Library::default();
        }
    };
    let dir = root.as_path();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if path.is_file()
            && (settings.include_hidden || !is_hidden(path))
            && is_audio_file(path, settings)
        {
            tracks.push(read_track(dir, path));
        }
    }

    tracks.sort_by_key(|t| make_display(&t.title, &t.author).to_lowercase());
    debug!(dir = %dir.display(), count = tracks.len(), "library scanned");
    Library::from_tracks(tracks)
}
