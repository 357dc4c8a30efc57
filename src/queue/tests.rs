use super::*;
use crate::library::TrackId;

fn q(ids: &[&str]) -> Vec<TrackId> {
    ids.iter().map(|s| TrackId::new(*s)).collect()
}

fn id(s: &str) -> TrackId {
    TrackId::new(s)
}

#[test]
fn empty_queue_has_no_next_or_previous() {
    assert_eq!(next_track(&[], None), None);
    assert_eq!(previous_track(&[], Some(&id("a"))), None);
}

#[test]
fn next_and_previous_wrap_around() {
    let ids = q(&["A", "B", "C"]);

    let n = next_track(&ids, Some(&id("B"))).unwrap();
    assert_eq!(n, id("C"));
    let n = next_track(&ids, Some(&n)).unwrap();
    assert_eq!(n, id("A"));
    let p = previous_track(&ids, Some(&n)).unwrap();
    assert_eq!(p, id("C"));
}

#[test]
fn absent_active_resolves_to_the_ends() {
    let ids = q(&["A", "B", "C"]);
    assert_eq!(next_track(&ids, None), Some(id("A")));
    assert_eq!(next_track(&ids, Some(&id("zzz"))), Some(id("A")));
    assert_eq!(previous_track(&ids, None), Some(id("C")));
    assert_eq!(previous_track(&ids, Some(&id("zzz"))), Some(id("C")));
}

#[test]
fn single_track_queue_navigates_to_itself() {
    let ids = q(&["x"]);
    assert_eq!(next_track(&ids, Some(&id("x"))), Some(id("x")));
    assert_eq!(previous_track(&ids, Some(&id("x"))), Some(id("x")));
}

#[test]
fn next_applied_len_times_returns_to_start() {
    for len in 1..=7 {
        let names: Vec<String> = (0..len).map(|i| format!("t{i}")).collect();
        let ids: Vec<TrackId> = names.iter().map(|s| TrackId::new(s.as_str())).collect();
        for start in &ids {
            let mut cur = start.clone();
            for _ in 0..len {
                cur = next_track(&ids, Some(&cur)).unwrap();
            }
            assert_eq!(&cur, start, "len={len}");
        }
    }
}

#[test]
fn previous_undoes_next_for_distinct_ids() {
    let ids = q(&["a", "b", "c", "d"]);
    for start in &ids {
        let n = next_track(&ids, Some(start)).unwrap();
        assert_eq!(previous_track(&ids, Some(&n)).as_ref(), Some(start));
    }
}

#[test]
fn duplicates_use_first_occurrence() {
    let ids = q(&["a", "b", "a", "c"]);
    assert_eq!(next_track(&ids, Some(&id("a"))), Some(id("b")));
    assert_eq!(previous_track(&ids, Some(&id("a"))), Some(id("c")));
}

#[test]
fn player_queue_tracks_active_id() {
    let mut queue = PlayerQueue::new(q(&["a", "b"]));
    assert!(queue.active_id().is_none());
    queue.set_active_id(id("b"));
    assert_eq!(queue.active_id(), Some(&id("b")));
    queue.set_active_id(id("zzz"));
    assert_eq!(queue.active_id(), Some(&id("zzz")));
    queue.clear_active();
    assert!(queue.active_id().is_none());
    assert_eq!(queue.ids(), q(&["a", "b"]).as_slice());
}
