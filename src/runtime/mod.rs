use std::env;
use std::path::Path;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info, warn};

use crate::app::App;
use crate::library::scan;

mod event_loop;
mod logging;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, settings_warning) = settings::load_settings();

    match logging::init(&settings.logging) {
        Ok(path) => debug!(path = %path.display(), "logging initialised"),
        Err(e) => eprintln!("encore: logging disabled: {e}"),
    }
    if let Some(msg) = settings_warning {
        warn!("{msg}");
    }

    let dir = env::args().nth(1).unwrap_or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|p| p.to_str().map(|s| s.to_string()))
            .unwrap_or_else(|| "Music".to_string())
    });

    let library = scan(Path::new(&dir), &settings.library);
    if library.is_empty() {
        warn!(dir = %dir, "no audio files found");
    } else {
        info!(dir = %dir, tracks = library.len(), "library loaded");
    }

    let mut session = startup::build_session(library, &settings);
    let mut app = App::new();
    app.follow_playback = settings.ui.follow_playback;

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &mut session);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &run_result {
        warn!(error = %e, "event loop failed");
    }
    run_result
}
