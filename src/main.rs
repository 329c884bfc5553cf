use std::io::{self, Stdout};
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use aniterm::{
    app::{App, AppEvent},
    client::RecommendClient,
    config::Config,
    ui,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config)?;

    let client = Arc::new(RecommendClient::new(
        config.recommend_url.clone(),
        config.mode,
    ));
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let mut app = App::new(client, events_tx);

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app, events_rx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn init_tracing(config: &Config) -> Result<()> {
    // The TUI owns stdout; without a log file, tracing stays uninitialized
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    mut events_rx: mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    let mut input = EventStream::new();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        tokio::select! {
            maybe_event = input.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => app.on_key(key),
                Some(Ok(_)) => {} // resize etc, redrawn on the next pass
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
            Some(event) = events_rx.recv() => app.on_event(event),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
