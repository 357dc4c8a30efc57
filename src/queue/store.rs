use crate::library::TrackId;

/// Read/write access to the session-wide queue.
pub trait QueueProvider {
    /// Ordered track ids; duplicates are allowed.
    fn ids(&self) -> &[TrackId];
    fn active_id(&self) -> Option<&TrackId>;
    fn set_active_id(&mut self, id: TrackId);
    /// Leave nothing active; the session unbinds on its next sync.
    fn clear_active(&mut self);
}

/// In-memory queue store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerQueue {
    ids: Vec<TrackId>,
    active: Option<TrackId>,
}

impl PlayerQueue {
    pub fn new(ids: Vec<TrackId>) -> Self {
        Self { ids, active: None }
    }

}

impl QueueProvider for PlayerQueue {
    fn ids(&self) -> &[TrackId] {
        &self.ids
    }

    fn active_id(&self) -> Option<&TrackId> {
        self.active.as_ref()
    }

    fn set_active_id(&mut self, id: TrackId) {
        self.active = Some(id);
    }

    fn clear_active(&mut self) {
        self.active = None;
    }
}
