use std::io;
use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use infospace::adapters::ReqwestHttpClient;
use infospace::app::App;
use infospace::config::AppConfig;
use infospace::provider::SpaceLibraryClient;
use infospace::traits::TracingAnalytics;
use infospace::ui;

/// Set up tracing to a log file; stdout belongs to the TUI.
///
/// Skipped silently if no cache directory can be resolved.
fn init_tracing() {
    let Some(dir) = dirs::cache_dir().map(|d| d.join("infospace")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("infospace.log")) else {
        return;
    };

    let filter =
        EnvFilter::try_from_env("INFOSPACE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let config = AppConfig::from_env();
    let http = ReqwestHttpClient::with_timeout(config.request_timeout_secs)?;
    let client = Arc::new(SpaceLibraryClient::new(Arc::new(http), config));
    let (mut app, mut message_rx) = App::new(client, Arc::new(TracingAnalytics));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.start();

    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_millis(200));

    let result: Result<()> = loop {
        if let Err(err) = terminal.draw(|frame| ui::render(frame, &app)) {
            break Err(err.into());
        }

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.on_key(key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => break Err(err.into()),
                    None => break Ok(()),
                }
            }
            Some(message) = message_rx.recv() => {
                app.handle_message(message);
            }
            _ = tick.tick() => {
                app.on_tick();
            }
        }

        if app.should_quit {
            break Ok(());
        }
    };

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
