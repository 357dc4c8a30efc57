use crate::library::TrackId;

fn active_index(ids: &[TrackId], active: Option<&TrackId>) -> Option<usize> {
    let active = active?;
    ids.iter().position(|id| id == active)
}

/// The track after `active`, wrapping to the first one.
///
/// An absent or unknown `active` also resolves to the first track. Returns
/// `None` only for an empty queue. With duplicate ids the first occurrence
/// is taken as the current position.
pub fn next_track(ids: &[TrackId], active: Option<&TrackId>) -> Option<TrackId> {
    if ids.is_empty() {
        return None;
    }
    let next = active_index(ids, active).map_or(0, |i| i + 1);
    ids.get(next).or_else(|| ids.first()).cloned()
}

/// The track before `active`, wrapping to the last one.
pub fn previous_track(ids: &[TrackId], active: Option<&TrackId>) -> Option<TrackId> {
    if ids.is_empty() {
        return None;
    }
    active_index(ids, active)
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| ids.get(i))
        .or_else(|| ids.last())
        .cloned()
}
