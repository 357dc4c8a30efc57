//! Cursor state over the queue list.

use crate::library::TrackId;

/// The main application model.
#[derive(Debug, Clone)]
pub struct App {
    /// Cursor position in the queue list.
    pub selected: usize,
    /// Move the cursor to the active track whenever it changes.
    pub follow_playback: bool,
    last_followed: Option<TrackId>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            selected: 0,
            follow_playback: true,
            last_followed: None,
        }
    }

    /// Move the cursor down, stopping at the last entry.
    pub fn next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Move the cursor up, stopping at the first entry.
    pub fn prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Keep the cursor inside a list that may have shrunk.
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    pub fn selected_id<'a>(&self, ids: &'a [TrackId]) -> Option<&'a TrackId> {
        ids.get(self.selected)
    }

    /// Jump to `active` if it changed since the last call and following is on.
    pub fn follow(&mut self, ids: &[TrackId], active: Option<&TrackId>) {
        if !self.follow_playback || active == self.last_followed.as_ref() {
            return;
        }
        self.last_followed = active.cloned();
        if let Some(pos) = active.and_then(|a| ids.iter().position(|id| id == a)) {
            self.selected = pos;
        }
    }
}
