//! Terminal UI for the mini-app.

mod app;
mod input;
mod ui;

pub use app::App;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::host::HostWindow;
use crate::identity::Profile;
use crate::schedule::ScheduledMove;
use crate::settings::Settings;

/// Runs the terminal UI until the player quits.
///
/// Sets up logging to a file (so the alternate screen stays clean), enters
/// raw mode, drives the event loop, and restores the terminal on the way
/// out even when the loop errors.
pub async fn run(
    settings: Settings,
    profile: Profile,
    share_url: Option<String>,
    host: Arc<dyn HostWindow>,
    delay: Duration,
) -> Result<()> {
    let log_file = std::fs::File::create("tictactoe_miniapp.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(player = %profile.display_name(), "Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (mut app, mut moves_rx) = App::new(settings, profile, share_url, host, delay);
    let res = run_loop(&mut terminal, &mut app, &mut moves_rx).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "UI loop error");
    }
    res
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    moves_rx: &mut mpsc::UnboundedReceiver<ScheduledMove>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Deliver any scheduled computer move before reading input.
        while let Ok(mv) = moves_rx.try_recv() {
            app.handle_scheduled(mv);
        }

        if app.should_quit() {
            info!("Player quit");
            return Ok(());
        }

        // Poll with a short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            app.handle_key(key);
        }
    }
}
