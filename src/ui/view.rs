use crate::session::Snapshot;

use super::format::format_mmss;

/// Everything the player bar shows, derived from a session snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct NowPlaying {
    pub title: String,
    pub author: String,
    pub elapsed: String,
    pub remaining: String,
    pub playing: bool,
    pub repeating: bool,
    pub volume_percent: u8,
    pub muted: bool,
    pub genres: Vec<String>,
    pub error: Option<String>,
}

impl NowPlaying {
    /// `None` when no track is active; the player bar is hidden then.
    pub fn from_snapshot(snap: &Snapshot) -> Option<Self> {
        let id = snap.state.track.as_ref()?;
        let (title, author, genres) = match &snap.track {
            Some(t) => (
                t.title.clone(),
                t.author.clone(),
                t.genres().into_iter().map(str::to_string).collect(),
            ),
            None => (id.to_string(), String::new(), Vec::new()),
        };

        // Until the resource reports a duration, fall back to the tagged one.
        let remaining = if snap.state.duration > 0.0 {
            snap.state.remaining()
        } else {
            snap.track
                .as_ref()
                .and_then(|t| t.duration)
                .map(|d| d.as_secs_f64() - snap.state.position)
                .unwrap_or(0.0)
        };

        Some(Self {
            title,
            author,
            elapsed: format_mmss(snap.state.position),
            remaining: format_mmss(remaining),
            playing: snap.state.is_playing(),
            repeating: snap.state.repeating,
            volume_percent: (snap.state.volume * 100.0).round().clamp(0.0, 100.0) as u8,
            muted: snap.muted,
            genres,
            error: snap.state.last_error.clone(),
        })
    }

    /// The play button shows the action it performs.
    pub fn play_glyph(&self) -> &'static str {
        if self.playing { "⏸" } else { "▶" }
    }

    pub fn repeat_label(&self) -> &'static str {
        if self.repeating { "Repeat: ON" } else { "Repeat: OFF" }
    }

    pub fn volume_label(&self) -> String {
        if self.muted {
            "Vol: muted".to_string()
        } else {
            format!("Vol: {}%", self.volume_percent)
        }
    }

    /// Single status line: `▶ Author - Title [00:12 / 03:04] • Repeat: OFF • Vol: 10%`.
    pub fn status_line(&self) -> String {
        let song = if self.author.trim().is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", self.author.trim(), self.title)
        };
        let mut parts = vec![
            format!(
                "{} {} [{} / {}]",
                self.play_glyph(),
                song,
                self.elapsed,
                self.remaining
            ),
            self.repeat_label().to_string(),
            self.volume_label(),
        ];
        if !self.genres.is_empty() {
            parts.push(self.genres.join(", "));
        }
        if let Some(err) = &self.error {
            parts.push(format!("Error: {}", err));
        }
        parts.join(" • ")
    }
}
