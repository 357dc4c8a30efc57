use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// Opaque identifier of a track within a library.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(String);

impl TrackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TrackId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TrackId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A playable track. Immutable once it is in a [`Library`].
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub author: String,
    /// Where the audio bytes live; handed to the resource loader as-is.
    pub locator: String,
    /// Comma-joined genre list, e.g. `"Rock, Pop"`.
    pub genre: Option<String>,
    /// Tag-derived length, shown until the bound resource reports its own.
    pub duration: Option<Duration>,
}

impl Track {
    pub fn new(
        id: impl Into<TrackId>,
        title: impl Into<String>,
        locator: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: String::new(),
            locator: locator.into(),
            genre: None,
            duration: None,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Split the genre string into its individual entries.
    pub fn genres(&self) -> Vec<&str> {
        self.genre
            .as_deref()
            .map(|g| {
                g.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// `author - title`, or just the title when the author is unknown.
    pub fn display(&self) -> String {
        make_display(&self.title, &self.author)
    }
}

pub(super) fn make_display(title: &str, author: &str) -> String {
    let author = author.trim();
    if author.is_empty() {
        title.to_string()
    } else {
        format!("{} - {}", author, title)
    }
}

/// Tracks in catalog order, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct Library {
    tracks: Vec<Track>,
    index: HashMap<TrackId, usize>,
}

impl Library {
    /// Build a library; when ids collide the first track wins the lookup.
    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        let mut index = HashMap::with_capacity(tracks.len());
        for (i, t) in tracks.iter().enumerate() {
            index.entry(t.id.clone()).or_insert(i);
        }
        Self { tracks, index }
    }

    pub fn get(&self, id: &TrackId) -> Option<&Track> {
        self.index.get(id).and_then(|&i| self.tracks.get(i))
    }

    /// All ids in catalog order.
    pub fn ids(&self) -> Vec<TrackId> {
        self.tracks.iter().map(|t| t.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
