use std::sync::mpsc;

use super::*;

#[test]
fn event_sink_tags_events_with_its_handle() {
    let (tx, rx) = mpsc::channel();
    let sink = EventSink::new(HandleId(7), tx);
    sink.emit(ResourceEventKind::Ready(12.5));
    sink.emit(ResourceEventKind::End);

    assert_eq!(
        rx.try_recv().unwrap(),
        ResourceEvent {
            handle: HandleId(7),
            kind: ResourceEventKind::Ready(12.5)
        }
    );
    assert_eq!(rx.try_recv().unwrap().kind, ResourceEventKind::End);
    assert!(rx.try_recv().is_err());
}

#[test]
fn event_sink_survives_a_dropped_session() {
    let (tx, rx) = mpsc::channel();
    let sink = EventSink::new(HandleId(1), tx);
    drop(rx);
    sink.emit(ResourceEventKind::Start);
}

fn options() -> (BindOptions, mpsc::Receiver<ResourceEvent>) {
    let (tx, rx) = mpsc::channel();
    let opts = BindOptions {
        volume: 0.1,
        looping: false,
        format_hint: "mp3".to_string(),
        events: EventSink::new(HandleId(1), tx),
    };
    (opts, rx)
}

#[test]
fn rodio_loader_reports_missing_file_as_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.mp3");
    let (opts, rx) = options();

    let err = RodioLoader::new()
        .load(path.to_str().unwrap(), opts)
        .err()
        .unwrap();
    assert!(matches!(err, LoadError::Open { .. }));
    // No Ready for a failed load.
    assert!(rx.try_recv().is_err());
}

#[test]
fn rodio_loader_reports_garbage_as_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("noise.mp3");
    std::fs::write(&path, b"definitely not audio").unwrap();
    let (opts, _rx) = options();

    let err = RodioLoader::new()
        .load(path.to_str().unwrap(), opts)
        .err()
        .unwrap();
    assert!(matches!(err, LoadError::Decode { .. }));
    assert!(err.to_string().contains("noise.mp3"));
}
