//! Folio TUI - a personal portfolio for the terminal
//!
//! A Ratatui-based TUI with section navigation, entrance animations, and
//! a contact form that validates locally and submits through a pluggable
//! gateway.

mod app;
mod config;
mod state;
mod submit;
mod ui;

use anyhow::Result;
use app::App;
use config::PortfolioConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use submit::{MessageClient, MessageGateway};
use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let content = PortfolioConfig::load()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app with the simulated gateway and run
    let gateway: Arc<Mutex<dyn MessageGateway>> = Arc::new(Mutex::new(MessageClient::new()));
    let mut app = App::new(content, gateway);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        let term_size = terminal.size()?;

        // Advance toast timers, finished animations, and completed
        // background work before drawing
        let now = Instant::now();
        app.tick(now);
        if app.in_splash() {
            app.update_splash(term_size.height);
        }

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app, now))?;

        // Faster polling while something animates (16ms = ~60fps),
        // normal polling (100ms) otherwise
        let poll_duration = if app.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // Handle crossterm events
        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) => {
                    // Global quit: Ctrl+C (but not during splash, where any
                    // key just skips the animation)
                    if !app.in_splash()
                        && key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key, Instant::now())?;
                }
                Event::Resize(_width, _height) => {
                    // Sections are recalculated on the next draw
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
