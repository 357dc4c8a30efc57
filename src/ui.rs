//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`, plus the
//! player-bar view model and time formatting it relies on.

mod format;
mod view;

pub use format::format_mmss;
pub use view::NowPlaying;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::audio::ResourceLoader;
use crate::config::UiSettings;
use crate::queue::QueueProvider;
use crate::session::{Session, Snapshot};

/// Render the controls help text, incorporating scrub seconds.
fn controls_text(scrub_seconds: u64) -> String {
    [
        "[j/k] up/down".to_string(),
        "[enter] play selected".to_string(),
        "[space/p] play/pause".to_string(),
        "[s] stop".to_string(),
        "[h/l] prev/next".to_string(),
        format!("[H/L] scrub -/+{}s", scrub_seconds),
        "[r] repeat".to_string(),
        "[m] mute".to_string(),
        "[+/-] volume".to_string(),
        "[q] quit".to_string(),
    ]
    .join(" | ")
}

fn padded(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// Render the entire UI into `frame`. The player bar comes from `snapshot`,
/// the latest state the session published.
pub fn draw<L: ResourceLoader, Q: QueueProvider>(
    frame: &mut Frame,
    app: &App,
    session: &Session<L, Q>,
    snapshot: &Snapshot,
    ui_settings: &UiSettings,
) {
    let now_playing = NowPlaying::from_snapshot(snapshot);
    let bar_height = if now_playing.is_some() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(bar_height),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" encore ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Queue list, centred on the cursor when it does not fit.
    {
        let ids = session.queue().ids();
        let active = session.queue().active_id();
        let total = ids.len();
        let list_height = chunks[1].height.saturating_sub(2) as usize;
        let sel = app.selected.min(total.saturating_sub(1));
        let (start, end) = if total <= list_height || list_height == 0 {
            (0, total)
        } else {
            let half = list_height / 2;
            let mut start = sel.saturating_sub(half);
            if start + list_height > total {
                start = total - list_height;
            }
            (start, start + list_height)
        };

        let items: Vec<ListItem> = ids[start..end]
            .iter()
            .map(|id| {
                let name = session
                    .library()
                    .get(id)
                    .map(|t| t.display())
                    .unwrap_or_else(|| id.to_string());
                let marker = if Some(id) == active { "♪ " } else { "  " };
                ListItem::new(format!("{}{}", marker, name))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" queue "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ratatui::widgets::ListState::default();
        if total > 0 {
            state.select(Some(sel - start));
        }
        frame.render_stateful_widget(list, chunks[1], &mut state);
    }

    if let Some(np) = now_playing {
        let bar = Paragraph::new(np.status_line())
            .block(padded(" now playing "))
            .wrap(Wrap { trim: true });
        frame.render_widget(bar, chunks[2]);
    }

    let footer = Paragraph::new(controls_text(ui_settings.scrub_seconds))
        .block(padded(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

#[cfg(test)]
mod tests;
