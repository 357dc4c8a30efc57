use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::ResourceLoader;
use crate::config;
use crate::queue::QueueProvider;
use crate::session::Session;
use crate::ui;

/// Upper bound on how long input is awaited. It doubles as the cadence at
/// which the bound resource gets a chance to report completion.
const MAX_WAIT: Duration = Duration::from_millis(200);

/// How long to wait for input before the session needs attention again.
fn poll_timeout(deadline: Option<Instant>, now: Instant) -> Duration {
    deadline
        .map(|d| d.saturating_duration_since(now).min(MAX_WAIT))
        .unwrap_or(MAX_WAIT)
}

/// Main terminal event loop: pumps the session, draws, and handles input.
/// Returns `Ok(())` when the user quits; the bound resource is unloaded first.
pub fn run<L: ResourceLoader, Q: QueueProvider>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    session: &mut Session<L, Q>,
) -> Result<(), Box<dyn std::error::Error>> {
    let updates = session.subscribe();
    let mut latest = session.snapshot();

    loop {
        session.pump(Instant::now());
        if let Some(snap) = updates.try_iter().last() {
            latest = snap;
        }

        app.clamp(session.queue().ids().len());
        app.follow(session.queue().ids(), session.queue().active_id());

        terminal.draw(|f| ui::draw(f, app, session, &latest, &settings.ui))?;

        if event::poll(poll_timeout(session.next_deadline(), Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, session) {
                    break;
                }
            }
        }
    }

    session.teardown();
    Ok(())
}

/// Apply one key press. Returns true when the user asked to quit.
fn handle_key_event<L: ResourceLoader, Q: QueueProvider>(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    session: &mut Session<L, Q>,
) -> bool {
    let ui = &settings.ui;
    let len = session.queue().ids().len();
    let scrub = ui.scrub_seconds as f64;

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Char('j') | KeyCode::Down => app.next(len),
        KeyCode::Char('k') | KeyCode::Up => app.prev(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(len),
        KeyCode::Enter => {
            if let Some(id) = app.selected_id(session.queue().ids()).cloned() {
                session.select(id);
            }
        }
        KeyCode::Char(' ') | KeyCode::Char('p') => session.toggle_play(),
        KeyCode::Char('s') => session.queue_mut().clear_active(),
        KeyCode::Char('h') | KeyCode::Left => {
            session.previous();
        }
        KeyCode::Char('l') | KeyCode::Right => {
            session.next();
        }
        KeyCode::Char('H') => session.seek_by(-scrub),
        KeyCode::Char('L') => session.seek_by(scrub),
        KeyCode::Char('r') => session.toggle_repeat(),
        KeyCode::Char('m') => session.toggle_mute(),
        KeyCode::Char('+') | KeyCode::Char('=') => {
            session.set_volume(session.state().volume + ui.volume_step)
        }
        KeyCode::Char('-') => session.set_volume(session.state().volume - ui.volume_step),
        _ => {}
    }
    false
}
