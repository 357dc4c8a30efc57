use std::time::Duration;

use super::*;
use crate::library::{Track, TrackId};
use crate::session::{PlaybackSession, Snapshot, Transport};

#[test]
fn format_mmss_pads_both_fields() {
    assert_eq!(format_mmss(0.0), "00:00");
    assert_eq!(format_mmss(65.0), "01:05");
    assert_eq!(format_mmss(59.9), "00:59");
    assert_eq!(format_mmss(600.0), "10:00");
    assert_eq!(format_mmss(6000.0), "100:00");
}

#[test]
fn format_mmss_renders_small_negatives_as_zero() {
    assert_eq!(format_mmss(-0.4), "00:00");
    assert_eq!(format_mmss(-0.0), "00:00");
}

#[test]
fn format_mmss_handles_non_finite_input() {
    assert_eq!(format_mmss(f64::NAN), "00:00");
    assert_eq!(format_mmss(f64::INFINITY), "00:00");
}

fn snapshot(track: Option<Track>, state: PlaybackSession) -> Snapshot {
    Snapshot {
        loaded: track.is_some(),
        muted: state.volume == 0.0,
        track,
        state,
    }
}

#[test]
fn now_playing_is_hidden_without_an_active_track() {
    let snap = snapshot(None, PlaybackSession::new(0.1, false));
    assert!(NowPlaying::from_snapshot(&snap).is_none());
}

#[test]
fn now_playing_reflects_session_state() {
    let track = Track::new("a", "Song", "/a.mp3").with_author("Band");
    let mut state = PlaybackSession::new(0.1, true);
    state.track = Some(TrackId::new("a"));
    state.transport = Transport::Playing;
    state.position = 65.0;
    state.duration = 185.0;

    let np = NowPlaying::from_snapshot(&snapshot(Some(track), state)).unwrap();
    assert_eq!(np.elapsed, "01:05");
    assert_eq!(np.remaining, "02:00");
    assert_eq!(np.play_glyph(), "⏸");
    assert_eq!(np.repeat_label(), "Repeat: ON");
    assert_eq!(np.volume_label(), "Vol: 10%");
    assert_eq!(
        np.status_line(),
        "⏸ Band - Song [01:05 / 02:00] • Repeat: ON • Vol: 10%"
    );
}

#[test]
fn now_playing_shows_mute_and_load_errors() {
    let mut state = PlaybackSession::new(0.0, false);
    state.track = Some(TrackId::new("gone"));
    state.last_error = Some("cannot open /gone.mp3".to_string());

    let np = NowPlaying::from_snapshot(&snapshot(None, state)).unwrap();
    assert_eq!(np.title, "gone");
    assert!(np.muted);
    assert_eq!(np.play_glyph(), "▶");
    assert_eq!(np.volume_label(), "Vol: muted");
    assert!(np.status_line().ends_with("Error: cannot open /gone.mp3"));
}

#[test]
fn now_playing_uses_tagged_duration_until_the_resource_reports() {
    let mut track = Track::new("a", "Song", "/a.mp3");
    track.duration = Some(Duration::from_secs(200));
    track.genre = Some("Rock, Pop".to_string());
    let mut state = PlaybackSession::new(0.5, false);
    state.track = Some(TrackId::new("a"));
    state.position = 20.0;

    let np = NowPlaying::from_snapshot(&snapshot(Some(track.clone()), state.clone())).unwrap();
    assert_eq!(np.remaining, "03:00");
    assert_eq!(
        np.status_line(),
        "▶ Song [00:20 / 03:00] • Repeat: OFF • Vol: 50% • Rock, Pop"
    );

    state.duration = 80.0;
    let np = NowPlaying::from_snapshot(&snapshot(Some(track), state)).unwrap();
    assert_eq!(np.remaining, "01:00");
}

#[test]
fn controls_text_includes_scrub_seconds() {
    let text = controls_text(7);
    assert!(text.contains("[H/L] scrub -/+7s"));
    assert!(text.contains("[r] repeat"));
    assert!(text.contains("[s] stop"));
}
