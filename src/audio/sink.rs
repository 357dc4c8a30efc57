//! `rodio` implementation of the resource seam.
//!
//! The loader opens the default output stream on first use and decodes
//! locators as file paths. `rodio` has no completion callback, so the handle
//! detects the natural end from `tick` by watching the sink drain.

use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use lofty::prelude::*;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use tracing::{debug, warn};

use super::resource::{LoadError, ResourceHandle, ResourceLoader};
use super::types::{BindOptions, EventSink, ResourceEventKind};

fn decode(locator: &str) -> Result<Decoder<BufReader<File>>, LoadError> {
    let file = File::open(locator).map_err(|source| LoadError::Open {
        locator: locator.to_string(),
        source,
    })?;
    Decoder::new(BufReader::new(file)).map_err(|e| LoadError::Decode {
        locator: locator.to_string(),
        reason: e.to_string(),
    })
}

/// Container-reported length, for decoders that cannot tell on their own.
fn tagged_duration(locator: &str) -> Option<Duration> {
    lofty::read_from_path(locator)
        .ok()
        .map(|tagged| tagged.properties().duration())
}

#[derive(Default)]
pub struct RodioLoader {
    stream: Option<OutputStream>,
}

impl RodioLoader {
    pub fn new() -> Self {
        Self::default()
    }

    fn stream(&mut self) -> Result<&OutputStream, LoadError> {
        if self.stream.is_none() {
            let mut stream = OutputStreamBuilder::open_default_stream()
                .map_err(|e| LoadError::Output(e.to_string()))?;
            // rodio logs to stderr when the stream is dropped, which garbles the TUI.
            stream.log_on_drop(false);
            self.stream = Some(stream);
        }
        self.stream
            .as_ref()
            .ok_or_else(|| LoadError::Output("output stream unavailable".to_string()))
    }
}

impl ResourceLoader for RodioLoader {
    type Handle = RodioHandle;

    fn load(&mut self, locator: &str, options: BindOptions) -> Result<RodioHandle, LoadError> {
        let source = decode(locator)?;
        let duration = source
            .total_duration()
            .or_else(|| tagged_duration(locator))
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);

        let stream = self.stream()?;
        let sink = Sink::connect_new(stream.mixer());
        sink.set_volume(options.volume);
        sink.append(source);
        sink.pause();

        debug!(
            handle = %options.events.handle(),
            locator,
            duration,
            format_hint = %options.format_hint,
            looping = options.looping,
            "resource loaded"
        );
        options.events.emit(ResourceEventKind::Ready(duration));

        Ok(RodioHandle {
            locator: locator.to_string(),
            sink,
            events: options.events,
            ended: false,
            unloaded: false,
        })
    }
}

pub struct RodioHandle {
    locator: String,
    sink: Sink,
    events: EventSink,
    ended: bool,
    unloaded: bool,
}

impl ResourceHandle for RodioHandle {
    fn play(&mut self) {
        if self.unloaded {
            return;
        }
        if self.ended || self.sink.empty() {
            // The decoder was consumed; start over with a fresh one.
            match decode(&self.locator) {
                Ok(source) => self.sink.append(source),
                Err(e) => {
                    warn!(handle = %self.events.handle(), error = %e, "cannot restart resource");
                    return;
                }
            }
            self.ended = false;
        }
        self.sink.play();
        self.events.emit(ResourceEventKind::Start);
    }

    fn pause(&mut self) {
        if self.unloaded {
            return;
        }
        self.sink.pause();
        self.events.emit(ResourceEventKind::Pause);
    }

    fn unload(&mut self) {
        if !self.unloaded {
            self.sink.stop();
            self.unloaded = true;
        }
    }

    fn seek_position(&self) -> f64 {
        self.sink.get_pos().as_secs_f64()
    }

    fn seek(&mut self, to_secs: f64) {
        if self.unloaded || self.ended || !to_secs.is_finite() {
            return;
        }
        let to = Duration::from_secs_f64(to_secs.max(0.0));
        if let Err(e) = self.sink.try_seek(to) {
            warn!(handle = %self.events.handle(), error = %e, "seek failed");
        }
    }

    fn is_playing(&self) -> bool {
        !self.unloaded && !self.ended && !self.sink.is_paused() && !self.sink.empty()
    }

    fn set_volume(&mut self, volume: f32) {
        self.sink.set_volume(volume);
    }

    fn tick(&mut self) {
        if !self.unloaded && !self.ended && !self.sink.is_paused() && self.sink.empty() {
            self.ended = true;
            self.events.emit(ResourceEventKind::End);
        }
    }
}
