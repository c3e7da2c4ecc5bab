//! Industry Register TUI - terminal registration form for industries
//!
//! A Ratatui-based form that collects an organization's details and
//! posts them to the registration endpoint.

mod app;
mod backend;
mod config;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::RegisterConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::fs::{self, File};
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Normal event poll interval
const IDLE_POLL: Duration = Duration::from_millis(100);
/// Poll interval while a request is in flight
const BUSY_POLL: Duration = Duration::from_millis(50);

/// Open the log file, or None if the data directory is unavailable.
///
/// The alternate screen owns stdout, so logs never go there.
fn open_log_file() -> Option<File> {
    let path = RegisterConfig::log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    File::options().create(true).append(true).open(path).ok()
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "industry_register_tui=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match open_log_file() {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = RegisterConfig::load()?;
    let mut app = App::new(&config)?;
    tracing::info!(route = app.state.current_view.route(), "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;
    app.quit();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("exiting with error: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let size = terminal.size()?;
        app.frame_area = Rect::new(0, 0, size.width, size.height);

        // Settle finished requests and fire due redirects before drawing
        app.tick().await;

        terminal.draw(|frame| ui::draw(frame, app))?;

        let redirect = app
            .state
            .register_form()
            .and_then(|form| form.pending_redirect());
        let poll_duration = match redirect {
            // Wake up no later than the redirect deadline
            Some(redirect) => redirect
                .deadline()
                .saturating_duration_since(Instant::now())
                .min(IDLE_POLL),
            None if app.state.is_loading() => BUSY_POLL,
            None => IDLE_POLL,
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }
                    app.handle_key(key).await?;
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse).await?;
                }
                Event::Resize(_width, _height) => {
                    // Layout is recomputed from the new size on the next pass
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
