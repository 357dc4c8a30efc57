use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info, trace, warn};

use crate::audio::{
    BindOptions, EventSink, HandleId, LoadError, ResourceEvent, ResourceEventKind, ResourceHandle,
    ResourceLoader,
};
use crate::config::SessionSettings;
use crate::library::{Library, Track, TrackId};
use crate::queue::{QueueProvider, next_track, previous_track};

use super::model::{PlaybackSession, Snapshot, Transport};
use super::poller::PositionPoller;
use super::volume::VolumeControl;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("track {0} is not in the library")]
    UnknownTrack(TrackId),
    #[error("failed to load track {track}: {source}")]
    ResourceLoad {
        track: TrackId,
        #[source]
        source: LoadError,
    },
}

struct Bound<H> {
    id: HandleId,
    handle: H,
}

/// Drives one audio resource at a time for the queue's active track.
pub struct Session<L: ResourceLoader, Q: QueueProvider> {
    loader: L,
    queue: Q,
    library: Library,
    settings: SessionSettings,
    state: PlaybackSession,
    volume: VolumeControl,
    bound: Option<Bound<L::Handle>>,
    next_handle: u64,
    inbox_tx: Sender<ResourceEvent>,
    inbox: Receiver<ResourceEvent>,
    poller: PositionPoller,
    observers: Vec<Sender<Snapshot>>,
}

impl<L: ResourceLoader, Q: QueueProvider> Session<L, Q> {
    pub fn new(loader: L, queue: Q, library: Library, settings: SessionSettings) -> Self {
        let (inbox_tx, inbox) = mpsc::channel();
        let volume = VolumeControl::new(settings.initial_volume, settings.unmute_volume);
        let poller = PositionPoller::new(Duration::from_millis(settings.poll_interval_ms));
        Self {
            loader,
            queue,
            library,
            state: PlaybackSession::new(volume.level(), settings.repeat),
            settings,
            volume,
            bound: None,
            next_handle: 0,
            inbox_tx,
            inbox,
            poller,
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> &PlaybackSession {
        &self.state
    }

    pub fn queue(&self) -> &Q {
        &self.queue
    }

    /// Direct queue access. Active-id changes made here are picked up by the
    /// next [`sync_active`](Self::sync_active) or [`pump`](Self::pump).
    pub fn queue_mut(&mut self) -> &mut Q {
        &mut self.queue
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Track the session is bound to, if it is in the library.
    pub fn current_track(&self) -> Option<&Track> {
        self.state.track.as_ref().and_then(|id| self.library.get(id))
    }

    pub fn is_loaded(&self) -> bool {
        self.bound.is_some()
    }

    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state.clone(),
            track: self.current_track().cloned(),
            loaded: self.is_loaded(),
            muted: self.is_muted(),
        }
    }

    /// Receive a snapshot now and after every state change.
    pub fn subscribe(&mut self) -> Receiver<Snapshot> {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(self.snapshot());
        self.observers.push(tx);
        rx
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snap = self.snapshot();
        self.observers.retain(|tx| tx.send(snap.clone()).is_ok());
    }

    /// When the session next needs a [`pump`](Self::pump) for timing reasons.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.poller.next_due()
    }


    /// Request playback. `Playing` is entered when the resource reports start.
    pub fn play(&mut self) {
        if self.state.transport == Transport::Playing {
            return;
        }
        if let Some(bound) = self.bound.as_mut() {
            bound.handle.play();
        }
    }

    pub fn pause(&mut self) {
        if self.state.transport == Transport::Paused {
            return;
        }
        if let Some(bound) = self.bound.as_mut() {
            bound.handle.pause();
        }
    }

    /// Play/pause button.
    pub fn toggle_play(&mut self) {
        match self.state.transport {
            Transport::Playing => self.pause(),
            Transport::Paused => self.play(),
        }
    }

    /// Only affects what happens at the end of the current track.
    pub fn toggle_repeat(&mut self) {
        self.state.repeating = !self.state.repeating;
        info!(repeating = self.state.repeating, "repeat toggled");
        self.notify();
    }

    /// Jump to `to` seconds, clamped to the known duration.
    pub fn seek(&mut self, to: f64) {
        let Some(bound) = self.bound.as_mut() else {
            return;
        };
        if !to.is_finite() {
            return;
        }
        let mut to = to.max(0.0);
        if self.state.duration > 0.0 {
            to = to.min(self.state.duration);
        }
        bound.handle.seek(to);
        self.state.position = to;
        self.notify();
    }

    pub fn seek_by(&mut self, delta: f64) {
        self.seek(self.state.position + delta);
    }


    pub fn set_volume(&mut self, v: f32) {
        self.volume.set(v);
        self.apply_volume();
    }

    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.apply_volume();
    }

    fn apply_volume(&mut self) {
        let level = self.volume.level();
        self.state.volume = level;
        if let Some(bound) = self.bound.as_mut() {
            bound.handle.set_volume(level);
        }
        self.notify();
    }


    /// Make the following queue entry active and bind it.
    pub fn next(&mut self) -> Option<TrackId> {
        let id = next_track(self.queue.ids(), self.queue.active_id())?;
        self.activate(id.clone());
        Some(id)
    }

    pub fn previous(&mut self) -> Option<TrackId> {
        let id = previous_track(self.queue.ids(), self.queue.active_id())?;
        self.activate(id.clone());
        Some(id)
    }

    /// User picked a track. Rebinds even when it is already the active one.
    pub fn select(&mut self, id: TrackId) {
        self.activate(id);
    }

    fn activate(&mut self, id: TrackId) {
        self.queue.set_active_id(id.clone());
        self.bind(id);
    }

    /// Rebind if the queue's active id changed behind the session's back.
    pub fn sync_active(&mut self) {
        let wanted = self.queue.active_id().cloned();
        if wanted == self.state.track {
            return;
        }
        match wanted {
            Some(id) => self.bind(id),
            None => {
                self.release();
                self.state.track = None;
                self.state.last_error = None;
                self.notify();
            }
        }
    }


    fn release(&mut self) {
        self.poller.stop();
        if let Some(mut bound) = self.bound.take() {
            debug!(handle = %bound.id, "unloading resource");
            bound.handle.unload();
        }
        self.state.reset_timeline();
    }

    fn bind(&mut self, id: TrackId) {
        self.release();
        self.state.track = Some(id.clone());
        self.state.last_error = None;

        match self.load(&id) {
            Ok(bound) => {
                debug!(track = %id, handle = %bound.id, "resource bound");
                let bound = self.bound.insert(bound);
                if self.settings.autoplay {
                    bound.handle.play();
                }
            }
            Err(e) => {
                warn!(track = %id, error = %e, "failed to bind track");
                self.state.last_error = Some(e.to_string());
            }
        }
        self.notify();
    }

    fn load(&mut self, id: &TrackId) -> Result<Bound<L::Handle>, SessionError> {
        let locator = self
            .library
            .get(id)
            .map(|t| t.locator.clone())
            .ok_or_else(|| SessionError::UnknownTrack(id.clone()))?;

        self.next_handle += 1;
        let handle_id = HandleId(self.next_handle);
        let options = BindOptions {
            volume: self.volume.level(),
            looping: self.state.repeating,
            format_hint: self.settings.format_hint.clone(),
            events: EventSink::new(handle_id, self.inbox_tx.clone()),
        };

        let handle =
            self.loader
                .load(&locator, options)
                .map_err(|source| SessionError::ResourceLoad {
                    track: id.clone(),
                    source,
                })?;
        Ok(Bound {
            id: handle_id,
            handle,
        })
    }

    /// Unload the current resource. The queue keeps its active id.
    pub fn teardown(&mut self) {
        if self.bound.is_some() {
            self.release();
            self.notify();
        }
    }


    /// Process everything that is pending at `now`: queue changes, resource
    /// events and a position sample if one is due.
    pub fn pump(&mut self, now: Instant) {
        self.sync_active();
        if let Some(bound) = self.bound.as_mut() {
            bound.handle.tick();
        }
        while let Ok(event) = self.inbox.try_recv() {
            self.dispatch(event, now);
        }
        self.sample_position(now);
    }

    fn dispatch(&mut self, event: ResourceEvent, now: Instant) {
        let current = self.bound.as_ref().map(|b| b.id);
        if current != Some(event.handle) {
            trace!(handle = %event.handle, kind = ?event.kind, "discarding stale resource event");
            return;
        }

        match event.kind {
            ResourceEventKind::Ready(duration) => {
                self.state.duration = if duration.is_finite() {
                    duration.max(0.0)
                } else {
                    0.0
                };
                if self.state.duration > 0.0 {
                    self.state.position = self.state.position.min(self.state.duration);
                }
            }
            ResourceEventKind::Start => {
                self.state.transport = Transport::Playing;
                self.poller.start(now);
            }
            ResourceEventKind::Pause => {
                self.state.transport = Transport::Paused;
                self.poller.stop();
            }
            ResourceEventKind::End => self.on_end(),
        }
        self.notify();
    }

    fn on_end(&mut self) {
        self.state.transport = Transport::Paused;
        self.poller.stop();

        if self.state.repeating {
            debug!("track ended, repeating");
            self.state.position = 0.0;
            if let Some(bound) = self.bound.as_mut() {
                bound.handle.play();
            }
        } else {
            let next = self.next();
            debug!(next = ?next, "track ended, advancing");
        }
    }

    fn sample_position(&mut self, now: Instant) {
        if !self.poller.due(now) {
            return;
        }
        let Some(bound) = self.bound.as_ref() else {
            self.poller.stop();
            return;
        };
        if !bound.handle.is_playing() {
            return;
        }

        let mut position = bound.handle.seek_position().round().max(0.0);
        if self.state.duration > 0.0 {
            position = position.min(self.state.duration);
        }
        if position != self.state.position {
            self.state.position = position;
            self.notify();
        }
    }
}

impl<L: ResourceLoader, Q: QueueProvider> Drop for Session<L, Q> {
    fn drop(&mut self) {
        self.release();
    }
}
