use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use strati::terminal::{self, TerminalGuard, Tui};
use strati::{logger, ui, App, AppConfig, Catalog};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env();
    let _log_guard = logger::init(&config.log_dir)?;
    tracing::info!(?config, "starting");

    let catalog = Catalog::builtin();

    terminal::install_panic_hook();
    let mut tui = terminal::init()?;
    let guard = TerminalGuard;

    let result = run(&mut tui, &catalog, config).await;
    drop(guard);

    if let Err(e) = &result {
        tracing::error!(error = %e, "exited with error");
    }
    result
}

async fn run(terminal: &mut Tui, catalog: &Catalog, config: AppConfig) -> Result<()> {
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let mut app = App::new(catalog, config, events_tx);
    app.open_start_route();

    let mut input = EventStream::new();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        tokio::select! {
            maybe_event = input.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(event) = events_rx.recv() => app.handle_event(event),
        }

        if app.should_quit() {
            break;
        }
    }

    tracing::info!("quit");
    Ok(())
}
